use aead::{Aead, KeyInit, Payload};
use aes_gcm::{Aes128Gcm, Aes256Gcm};
use chacha20poly1305::ChaCha20Poly1305;
use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use spook::clyde;
use spook::shadow::{Shadow384, Shadow512};
use spook::{Spook128mu384, Spook128mu512, Spook128su384, Spook128su512};

const INPUT: usize = 100 * 1024;

fn aead_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("aead");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(INPUT as u64));
    g.bench_with_input("aes-256-gcm", &[0u8; INPUT], |b, block| {
        let k = [7u8; 32];
        let n = [8u8; 12];
        b.iter(|| {
            let aes = Aes256Gcm::new(&k.into());
            aes.encrypt(&n.into(), Payload { msg: block, aad: &[] })
        })
    });
    g.bench_with_input("aes-128-gcm", &[0u8; INPUT], |b, block| {
        let k = [7u8; 16];
        let n = [8u8; 12];
        b.iter(|| {
            let aes = Aes128Gcm::new(&k.into());
            aes.encrypt(&n.into(), Payload { msg: block, aad: &[] })
        })
    });
    g.bench_with_input("chacha20poly1305", &[0u8; INPUT], |b, block| {
        let k = [7u8; 32];
        let n = [8u8; 12];
        b.iter(|| {
            let chacha = ChaCha20Poly1305::new(&k.into());
            chacha.encrypt(&n.into(), Payload { msg: block, aad: &[] })
        })
    });
    g.bench_with_input("spook-128su384", &[0u8; INPUT], |b, block| {
        b.iter(|| Spook128su384::new(&[7u8; 16]).seal(&[8u8; 16], &[], block))
    });
    g.bench_with_input("spook-128su512", &[0u8; INPUT], |b, block| {
        b.iter(|| Spook128su512::new(&[7u8; 16]).seal(&[8u8; 16], &[], block))
    });
    g.bench_with_input("spook-128mu384", &[0u8; INPUT], |b, block| {
        b.iter(|| Spook128mu384::new(&[7u8; 32]).seal(&[8u8; 16], &[], block))
    });
    g.bench_with_input("spook-128mu512", &[0u8; INPUT], |b, block| {
        b.iter(|| Spook128mu512::new(&[7u8; 32]).seal(&[8u8; 16], &[], block))
    });
    g.finish();
}

fn primitive_benchmarks(c: &mut Criterion) {
    let mut g = c.benchmark_group("primitive");
    g.sample_size(1_000);
    g.throughput(Throughput::Bytes(16));
    g.bench_function("clyde-128", |b| {
        let (key, tweak) = ([1u32; 4], [2u32; 4]);
        let mut block = [3u32; 4];
        b.iter(|| block = clyde::encrypt(&block, &tweak, &key))
    });
    g.throughput(Throughput::Bytes(48));
    g.bench_function("shadow-384", |b| {
        let mut state = Shadow384::default();
        b.iter(|| state.permute())
    });
    g.throughput(Throughput::Bytes(64));
    g.bench_function("shadow-512", |b| {
        let mut state = Shadow512::default();
        b.iter(|| state.permute())
    });
    g.finish();
}

criterion_group!(benches, aead_benchmarks, primitive_benchmarks);
criterion_main!(benches);
