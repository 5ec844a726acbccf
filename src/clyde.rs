//! Clyde-128, the tweakable block cipher underneath Spook.
//!
//! Clyde-128 has a 128-bit block, a 128-bit key and a 128-bit tweak. It runs [`N_STEPS`] steps of
//! two rounds each and mixes in a tweakey after every step.
use crate::ls::{
    add_rc, lbox_layer, lbox_layer_inv, sbox_layer, sbox_layer_inv, xor_states, LsState, N_STEPS,
};

/// Expands the key and tweak into the three tweakeys used in rotation by the step function.
#[inline]
fn tweakey(key: &LsState, tweak: &LsState) -> [LsState; 3] {
    let tx = [tweak[0] ^ tweak[2], tweak[1] ^ tweak[3]];
    let mut tk = [*tweak, [tx[0], tx[1], tweak[0], tweak[1]], [tweak[2], tweak[3], tx[0], tx[1]]];
    for t in tk.iter_mut() {
        xor_states(t, key);
    }
    tk
}

/// Encrypts a single block under the given tweak and key.
pub fn encrypt(block: &LsState, tweak: &LsState, key: &LsState) -> LsState {
    let tk = tweakey(key, tweak);
    let mut x = *block;
    xor_states(&mut x, &tk[0]);
    for step in 0..N_STEPS {
        for round in [2 * step, 2 * step + 1] {
            sbox_layer(&mut x);
            lbox_layer(&mut x);
            add_rc(&mut x, round, 0);
        }
        xor_states(&mut x, &tk[(step + 1) % 3]);
    }
    x
}

/// Decrypts a single block under the given tweak and key.
pub fn decrypt(block: &LsState, tweak: &LsState, key: &LsState) -> LsState {
    let tk = tweakey(key, tweak);
    let mut x = *block;
    for step in (0..N_STEPS).rev() {
        xor_states(&mut x, &tk[(step + 1) % 3]);
        for round in [2 * step + 1, 2 * step] {
            add_rc(&mut x, round, 0);
            lbox_layer_inv(&mut x);
            sbox_layer_inv(&mut x);
        }
    }
    xor_states(&mut x, &tk[0]);
    x
}
