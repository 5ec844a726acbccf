//! Spook, a nonce-based authenticated cipher built from the Clyde-128 tweakable block cipher and
//! the Shadow permutation in a duplex sponge.
//!
//! The four instances of Spook are exposed as type aliases of [`Spook`]. For the plain byte-level
//! interface, [`encrypt`] and [`decrypt`] pick the instance from the key length: a 16-byte key
//! selects [`Spook128su384`] and a 32-byte key selects [`Spook128mu512`].
//!
//! **N.B:** This implementation makes no attempt to resist side-channel attacks.
#![cfg_attr(not(any(feature = "std", test)), no_std)]

use byteorder::{ByteOrder, LittleEndian};
use constant_time_eq::constant_time_eq;
use zeroize::{Zeroize, ZeroizeOnDrop};

pub mod clyde;
mod error;
mod fuzzing;
pub mod ls;
pub mod shadow;
mod variant;

pub use crate::error::Error;
pub use crate::variant::Variant;

use crate::ls::{LsState, LS_SIZE};
use crate::shadow::Shadow;

/// The length of a nonce in bytes.
pub const NONCE_LEN: usize = 16;

/// The length of a tag in bytes.
pub const TAG_LEN: usize = 16;

/// Spook with a 128-bit key and the 384-bit Shadow permutation.
pub type Spook128su384 = Spook<3, 16, 16>;

/// Spook with a 128-bit key and the 512-bit Shadow permutation.
pub type Spook128su512 = Spook<4, 32, 16>;

/// Spook with a 128-bit key, a 128-bit public tweak and the 384-bit Shadow permutation.
pub type Spook128mu384 = Spook<3, 16, 32>;

/// Spook with a 128-bit key, a 128-bit public tweak and the 512-bit Shadow permutation.
pub type Spook128mu512 = Spook<4, 32, 32>;

// Domain separation bits, all XORed into the sponge state.
const DS_MESSAGE: u32 = 0x01;
const DS_PADDED: u32 = 0x02;
const DS_FINAL: u32 = 0x8000_0000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Encrypt,
    Decrypt,
}

#[derive(Zeroize, ZeroizeOnDrop)]
struct Duplex<const ROWS: usize, const RATE: usize> {
    state: Shadow<ROWS>,
}

impl<const ROWS: usize, const RATE: usize> Duplex<ROWS, RATE> {
    fn new(key: &LsState, tweak: &LsState, nonce: &[u8; NONCE_LEN]) -> Self {
        debug_assert_eq!(RATE, LS_SIZE * (ROWS - 2));

        let nonce = ls::from_bytes(nonce);
        let mut rows = [[0u32; 4]; ROWS];
        rows[0] = *tweak;
        rows[1] = nonce;
        rows[ROWS - 1] = clyde::encrypt(&nonce, tweak, key);

        let mut state = Shadow::from(rows);
        state.permute();
        Duplex { state }
    }

    /// Returns the rate rows of the state as bytes.
    #[inline(always)]
    fn rate(&self) -> [u8; RATE] {
        let mut bytes = [0u8; RATE];
        for (chunk, row) in bytes.chunks_exact_mut(LS_SIZE).zip(self.state.as_ref()) {
            LittleEndian::write_u32_into(row, chunk);
        }
        bytes
    }

    #[inline(always)]
    fn set_rate(&mut self, bytes: &[u8; RATE]) {
        for (chunk, row) in bytes.chunks_exact(LS_SIZE).zip(self.state.as_mut()) {
            LittleEndian::read_u32_into(chunk, row);
        }
    }

    #[inline(always)]
    fn add_domain(&mut self, bits: u32) {
        self.state.as_mut()[ROWS - 2][0] ^= bits;
    }

    /// Duplexes one block of at most `RATE` bytes in place, then permutes.
    ///
    /// A short block is the last one of its input and gets padded.
    fn duplex_block(&mut self, block: &mut [u8], mode: Mode) {
        debug_assert!(block.len() <= RATE);

        let mut rate = self.rate();
        for (r, b) in rate.iter_mut().zip(block.iter_mut()) {
            match mode {
                Mode::Encrypt => {
                    *r ^= *b;
                    *b = *r;
                }
                Mode::Decrypt => {
                    let c = *b;
                    *b ^= *r;
                    *r = c;
                }
            }
        }

        let padded = block.len() < RATE;
        if padded {
            rate[block.len()] ^= 0x01;
        }
        self.set_rate(&rate);
        rate.zeroize();

        if padded {
            self.add_domain(DS_PADDED);
        }
        self.state.permute();
    }

    fn absorb(&mut self, ad: &[u8]) {
        let mut buf = [0u8; RATE];
        for chunk in ad.chunks(RATE) {
            let block = &mut buf[..chunk.len()];
            block.copy_from_slice(chunk);
            self.duplex_block(block, Mode::Encrypt);
        }
    }

    fn crypt_mut(&mut self, in_out: &mut [u8], mode: Mode) {
        if in_out.is_empty() {
            return;
        }
        self.add_domain(DS_MESSAGE);
        for chunk in in_out.chunks_mut(RATE) {
            self.duplex_block(chunk, mode);
        }
    }

    /// Returns the tag state, followed by the two rows it was computed from.
    fn finalize(mut self, key: &LsState) -> (LsState, LsState, LsState) {
        let rows = self.state.as_mut();
        rows[1][3] |= DS_FINAL;
        (clyde::encrypt(&rows[0], &rows[1], key), rows[0], rows[1])
    }

    fn squeeze_tag(self, key: &LsState) -> [u8; TAG_LEN] {
        let (tag, _, _) = self.finalize(key);
        ls::to_bytes(&tag)
    }

    fn verify_tag(self, key: &LsState, tag: &[u8; TAG_LEN]) -> bool {
        let (expected, pre_tag, tweak) = self.finalize(key);

        // Only the forward comparison decides the verdict. The inverse must agree with it no
        // matter what; if it doesn't, Clyde-128 itself is broken.
        assert_eq!(
            clyde::decrypt(&expected, &tweak, key),
            pre_tag,
            "Clyde-128 decryption does not invert encryption"
        );

        constant_time_eq(&ls::to_bytes(&expected), tag)
    }
}

/// A keyed instance of Spook.
///
/// `ROWS` and `RATE` select the Shadow permutation and its rate in bytes. `KEY_LEN` is 16 for the
/// single-user (`su`) instances and 32 for the multi-user (`mu`) instances, whose upper 16 key
/// bytes are a public tweak.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Spook<const ROWS: usize, const RATE: usize, const KEY_LEN: usize> {
    key: [u8; KEY_LEN],
}

impl<const ROWS: usize, const RATE: usize, const KEY_LEN: usize> Spook<ROWS, RATE, KEY_LEN> {
    pub fn new(key: &[u8; KEY_LEN]) -> Self {
        debug_assert!(KEY_LEN == LS_SIZE || KEY_LEN == 2 * LS_SIZE);

        Spook { key: *key }
    }

    /// Returns the Clyde-128 key and the tweak used to initialize the duplex.
    fn key_lanes(&self) -> (LsState, LsState) {
        let mut key = [0u32; 4];
        LittleEndian::read_u32_into(&self.key[..LS_SIZE], &mut key);

        let mut tweak = [0u32; 4];
        if KEY_LEN == 2 * LS_SIZE {
            LittleEndian::read_u32_into(&self.key[LS_SIZE..], &mut tweak);
            // Clear bit 7 and set bit 6 of the last byte.
            tweak[3] &= 0x7fff_ffff;
            tweak[3] |= 0x4000_0000;
        }
        (key, tweak)
    }

    fn duplex(&self, nonce: &[u8; NONCE_LEN], ad: &[u8]) -> (LsState, Duplex<ROWS, RATE>) {
        let (key, tweak) = self.key_lanes();
        let mut duplex = Duplex::new(&key, &tweak, nonce);
        duplex.absorb(ad);
        (key, duplex)
    }

    /// Encrypts `in_out` in place and returns the tag.
    pub fn seal_detached(
        &self,
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        in_out: &mut [u8],
    ) -> [u8; TAG_LEN] {
        let (mut key, mut duplex) = self.duplex(nonce, ad);
        duplex.crypt_mut(in_out, Mode::Encrypt);
        let tag = duplex.squeeze_tag(&key);
        key.zeroize();
        tag
    }

    /// Decrypts `in_out` in place if `tag` is valid.
    ///
    /// On failure the buffer is zeroed, so no unauthenticated plaintext is left behind.
    pub fn open_detached(
        &self,
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        in_out: &mut [u8],
        tag: &[u8; TAG_LEN],
    ) -> Result<(), Error> {
        let (mut key, mut duplex) = self.duplex(nonce, ad);
        duplex.crypt_mut(in_out, Mode::Decrypt);
        let valid = duplex.verify_tag(&key, tag);
        key.zeroize();

        if valid {
            Ok(())
        } else {
            tracing::debug!("tag mismatch");
            in_out.zeroize();
            Err(Error::AuthenticationFailure)
        }
    }

    /// Encrypts a buffer holding the plaintext followed by [`TAG_LEN`] spare bytes, which receive
    /// the tag.
    pub fn seal_mut(
        &self,
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        in_out: &mut [u8],
    ) -> Result<(), Error> {
        let len = in_out.len();
        let (m, t) = in_out
            .split_last_chunk_mut::<TAG_LEN>()
            .ok_or(Error::InvalidInputLength(len))?;
        *t = self.seal_detached(nonce, ad, m);
        Ok(())
    }

    /// Decrypts a buffer holding the ciphertext followed by its tag and returns the plaintext part
    /// of the buffer.
    pub fn open_mut<'a>(
        &self,
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        in_out: &'a mut [u8],
    ) -> Result<&'a mut [u8], Error> {
        let len = in_out.len();
        let (c, t) = in_out
            .split_last_chunk_mut::<TAG_LEN>()
            .ok_or(Error::InvalidInputLength(len))?;
        let tag = *t;
        match self.open_detached(nonce, ad, c, &tag) {
            Ok(()) => Ok(c),
            Err(e) => {
                t.zeroize();
                Err(e)
            }
        }
    }

    /// Encrypts `plaintext` and returns the ciphertext with the tag appended.
    #[cfg(feature = "std")]
    pub fn seal(&self, nonce: &[u8; NONCE_LEN], ad: &[u8], plaintext: &[u8]) -> Vec<u8> {
        let mut out = vec![0u8; plaintext.len() + TAG_LEN];
        let (c, t) = out.split_at_mut(plaintext.len());
        c.copy_from_slice(plaintext);
        t.copy_from_slice(&self.seal_detached(nonce, ad, c));
        out
    }

    /// Authenticates and decrypts a ciphertext with its tag appended.
    #[cfg(feature = "std")]
    pub fn open(
        &self,
        nonce: &[u8; NONCE_LEN],
        ad: &[u8],
        ciphertext: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let (c, t) = ciphertext
            .split_last_chunk::<TAG_LEN>()
            .ok_or(Error::InvalidInputLength(ciphertext.len()))?;
        let mut m = c.to_vec();
        self.open_detached(nonce, ad, &mut m, t)?;
        Ok(m)
    }
}

impl<const ROWS: usize, const RATE: usize, const KEY_LEN: usize> TryFrom<&[u8]>
    for Spook<ROWS, RATE, KEY_LEN>
{
    type Error = Error;

    fn try_from(key: &[u8]) -> Result<Self, Self::Error> {
        let key: &[u8; KEY_LEN] =
            key.try_into().map_err(|_| Error::InvalidKeyLength(key.len()))?;
        Ok(Spook::new(key))
    }
}

/// Encrypts `plaintext` with the instance selected by the key length and returns the ciphertext
/// with a 16-byte tag appended.
///
/// A 16-byte key selects [`Spook128su384`], a 32-byte key selects [`Spook128mu512`].
#[cfg(feature = "std")]
pub fn encrypt(ad: &[u8], plaintext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, Error> {
    Variant::for_key(key)?.encrypt(ad, plaintext, key, nonce)
}

/// Authenticates and decrypts a ciphertext produced by [`encrypt`].
#[cfg(feature = "std")]
pub fn decrypt(ad: &[u8], ciphertext: &[u8], key: &[u8], nonce: &[u8]) -> Result<Vec<u8>, Error> {
    Variant::for_key(key)?.decrypt(ad, ciphertext, key, nonce)
}
