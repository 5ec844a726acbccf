use core::fmt;

#[cfg(feature = "std")]
use tracing::instrument;

use crate::error::Error;
use crate::ls::LS_SIZE;
#[cfg(feature = "std")]
use crate::{Spook128mu384, Spook128mu512, Spook128su384, Spook128su512, NONCE_LEN};

/// The four instances of Spook.
///
/// The `su` instances take a 16-byte key. The `mu` instances take a 32-byte key whose upper half
/// is a public tweak. The suffix is the width of the Shadow permutation in bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
    Su384,
    Su512,
    Mu384,
    Mu512,
}

impl Variant {
    pub const ALL: [Variant; 4] = [Variant::Su384, Variant::Su512, Variant::Mu384, Variant::Mu512];

    /// Selects the instance implied by the key length: [`Variant::Su384`] for a 16-byte key,
    /// [`Variant::Mu512`] for a 32-byte key.
    pub fn for_key(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            16 => Ok(Variant::Su384),
            32 => Ok(Variant::Mu512),
            n => Err(Error::InvalidKeyLength(n)),
        }
    }

    pub const fn key_len(self) -> usize {
        match self {
            Variant::Su384 | Variant::Su512 => LS_SIZE,
            Variant::Mu384 | Variant::Mu512 => 2 * LS_SIZE,
        }
    }

    /// The number of LS-states in the Shadow permutation.
    pub const fn rows(self) -> usize {
        match self {
            Variant::Su384 | Variant::Mu384 => 3,
            Variant::Su512 | Variant::Mu512 => 4,
        }
    }

    /// The number of bytes absorbed per permutation call.
    pub const fn rate(self) -> usize {
        LS_SIZE * (self.rows() - 2)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Variant::Su384 => "Spook-128su384",
            Variant::Su512 => "Spook-128su512",
            Variant::Mu384 => "Spook-128mu384",
            Variant::Mu512 => "Spook-128mu512",
        }
    }

    /// Encrypts `plaintext` and returns the ciphertext with the tag appended.
    #[cfg(feature = "std")]
    #[instrument(
        level = "trace",
        skip_all,
        fields(variant = %self, ad_len = ad.len(), len = plaintext.len()),
    )]
    pub fn encrypt(
        self,
        ad: &[u8],
        plaintext: &[u8],
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let nonce = self.check(key, nonce)?;
        Ok(match self {
            Variant::Su384 => Spook128su384::try_from(key)?.seal(nonce, ad, plaintext),
            Variant::Su512 => Spook128su512::try_from(key)?.seal(nonce, ad, plaintext),
            Variant::Mu384 => Spook128mu384::try_from(key)?.seal(nonce, ad, plaintext),
            Variant::Mu512 => Spook128mu512::try_from(key)?.seal(nonce, ad, plaintext),
        })
    }

    /// Authenticates and decrypts a ciphertext with its tag appended.
    #[cfg(feature = "std")]
    #[instrument(
        level = "trace",
        skip_all,
        fields(variant = %self, ad_len = ad.len(), len = ciphertext.len()),
    )]
    pub fn decrypt(
        self,
        ad: &[u8],
        ciphertext: &[u8],
        key: &[u8],
        nonce: &[u8],
    ) -> Result<Vec<u8>, Error> {
        let nonce = self.check(key, nonce)?;
        match self {
            Variant::Su384 => Spook128su384::try_from(key)?.open(nonce, ad, ciphertext),
            Variant::Su512 => Spook128su512::try_from(key)?.open(nonce, ad, ciphertext),
            Variant::Mu384 => Spook128mu384::try_from(key)?.open(nonce, ad, ciphertext),
            Variant::Mu512 => Spook128mu512::try_from(key)?.open(nonce, ad, ciphertext),
        }
    }

    /// Checks the key length, then the nonce length.
    #[cfg(feature = "std")]
    fn check<'a>(self, key: &[u8], nonce: &'a [u8]) -> Result<&'a [u8; NONCE_LEN], Error> {
        if key.len() != self.key_len() {
            return Err(Error::InvalidKeyLength(key.len()));
        }
        nonce.try_into().map_err(|_| Error::InvalidNonceLength(nonce.len()))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn key_length_selects_variant() {
        assert_eq!(Variant::for_key(&[0u8; 16]), Ok(Variant::Su384));
        assert_eq!(Variant::for_key(&[0u8; 32]), Ok(Variant::Mu512));
        assert_eq!(Variant::for_key(&[0u8; 31]), Err(Error::InvalidKeyLength(31)));
    }

    #[test]
    fn parameters() {
        let params: Vec<_> =
            Variant::ALL.iter().map(|v| (v.key_len(), v.rows(), v.rate())).collect();
        assert_eq!(params, [(16, 3, 16), (16, 4, 32), (32, 3, 16), (32, 4, 32)]);
        assert_eq!(Variant::Mu384.to_string(), "Spook-128mu384");
    }

    #[test]
    fn explicit_variant_rejects_mismatched_key() {
        let nonce = [0u8; 16];
        assert_eq!(
            Variant::Su512.encrypt(b"", b"", &[0u8; 32], &nonce),
            Err(Error::InvalidKeyLength(32))
        );
        assert_eq!(
            Variant::Mu384.decrypt(b"", &[0u8; 16], &[0u8; 16], &nonce),
            Err(Error::InvalidKeyLength(16))
        );
    }

    #[test]
    fn key_is_checked_before_nonce() {
        assert_eq!(
            Variant::Su384.encrypt(b"", b"", &[0u8; 5], &[0u8; 5]),
            Err(Error::InvalidKeyLength(5))
        );
    }

    #[test]
    fn each_variant_round_trips() {
        let nonce = [7u8; 16];
        for v in Variant::ALL {
            let key = vec![3u8; v.key_len()];
            let c = v.encrypt(b"header", b"payload", &key, &nonce).unwrap();
            assert_eq!(v.decrypt(b"header", &c, &key, &nonce), Ok(b"payload".to_vec()));
        }
    }

    #[test]
    fn variants_with_same_key_length_disagree() {
        let nonce = [7u8; 16];
        let c = Variant::Su384.encrypt(b"", b"payload", &[3u8; 16], &nonce).unwrap();
        assert_eq!(
            Variant::Su512.decrypt(b"", &c, &[3u8; 16], &nonce),
            Err(Error::AuthenticationFailure)
        );
    }
}
