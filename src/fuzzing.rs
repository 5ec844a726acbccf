#![cfg(all(test, feature = "std"))]

use proptest::collection::vec;
use proptest::prelude::*;

use crate::{decrypt, encrypt, Error, Variant, TAG_LEN};

/// A single AEAD call, with the key length picking the variant.
#[derive(Clone, Debug, PartialEq)]
struct Message {
    key: Vec<u8>,
    nonce: Vec<u8>,
    ad: Vec<u8>,
    plaintext: Vec<u8>,
}

/// An arbitrary byte string with length 0..100, enough to cross several blocks of either rate.
fn arb_data() -> impl Strategy<Value = Vec<u8>> {
    vec(any::<u8>(), 0..100)
}

/// A 16- or 32-byte key.
fn arb_key() -> impl Strategy<Value = Vec<u8>> {
    prop_oneof![vec(any::<u8>(), 16), vec(any::<u8>(), 32)]
}

prop_compose! {
    fn arb_message()(
        key in arb_key(),
        nonce in vec(any::<u8>(), 16),
        ad in arb_data(),
        plaintext in arb_data(),
    ) -> Message {
        Message { key, nonce, ad, plaintext }
    }
}

fn seal(m: &Message) -> Vec<u8> {
    encrypt(&m.ad, &m.plaintext, &m.key, &m.nonce).expect("valid lengths")
}

proptest! {
    /// Decryption inverts encryption, and the ciphertext is exactly one tag longer.
    #[test]
    fn round_trip(m in arb_message()) {
        let c = seal(&m);
        prop_assert_eq!(c.len(), m.plaintext.len() + TAG_LEN);
        prop_assert_eq!(decrypt(&m.ad, &c, &m.key, &m.nonce), Ok(m.plaintext));
    }

    /// Equal inputs produce equal outputs. Different inputs produce different outputs.
    #[test]
    fn consistency(m0 in arb_message(), m1 in arb_message()) {
        if m0 == m1 {
            prop_assert_eq!(seal(&m0), seal(&m1));
        } else {
            prop_assert_ne!(seal(&m0), seal(&m1));
        }
    }

    /// Flipping any bit of the ciphertext or tag is detected.
    #[test]
    fn ciphertext_tampering(
        m in arb_message(),
        idx in any::<prop::sample::Index>(),
        bit in 0..8u8,
    ) {
        let mut c = seal(&m);
        let i = idx.index(c.len());
        c[i] ^= 1 << bit;
        prop_assert_eq!(decrypt(&m.ad, &c, &m.key, &m.nonce), Err(Error::AuthenticationFailure));
    }

    /// Flipping any bit of the associated data is detected.
    #[test]
    fn ad_tampering(m in arb_message(), idx in any::<prop::sample::Index>(), bit in 0..8u8) {
        prop_assume!(!m.ad.is_empty());
        let c = seal(&m);
        let mut ad = m.ad.clone();
        let i = idx.index(ad.len());
        ad[i] ^= 1 << bit;
        prop_assert_eq!(decrypt(&ad, &c, &m.key, &m.nonce), Err(Error::AuthenticationFailure));
    }

    /// Moving data between the associated data and the message changes the tag.
    #[test]
    fn ad_and_message_are_separated(m in arb_message()) {
        prop_assume!(m.ad != m.plaintext);
        let swapped = Message { ad: m.plaintext.clone(), plaintext: m.ad.clone(), ..m.clone() };
        let c0 = seal(&m);
        let c1 = seal(&swapped);
        prop_assert_ne!(&c0[c0.len() - TAG_LEN..], &c1[c1.len() - TAG_LEN..]);
    }

    /// A ciphertext from the 16-byte-key variant never opens under the 32-byte-key variant, even
    /// when the short key is a prefix of the long one.
    #[test]
    fn variant_isolation(m in arb_message(), upper in vec(any::<u8>(), 16)) {
        let mut short = m.key.clone();
        short.truncate(16);
        let mut long = short.clone();
        long.extend_from_slice(&upper);

        let c = encrypt(&m.ad, &m.plaintext, &short, &m.nonce).expect("valid lengths");
        prop_assert_eq!(decrypt(&m.ad, &c, &long, &m.nonce), Err(Error::AuthenticationFailure));

        let c = encrypt(&m.ad, &m.plaintext, &long, &m.nonce).expect("valid lengths");
        prop_assert_eq!(decrypt(&m.ad, &c, &short, &m.nonce), Err(Error::AuthenticationFailure));
    }

    /// Keys of any length other than 16 or 32 are rejected up front.
    #[test]
    fn key_length_gating(key in vec(any::<u8>(), 0..64), m in arb_message()) {
        prop_assume!(key.len() != 16 && key.len() != 32);
        prop_assert_eq!(
            encrypt(&m.ad, &m.plaintext, &key, &m.nonce),
            Err(Error::InvalidKeyLength(key.len()))
        );
        prop_assert_eq!(
            Variant::for_key(&key),
            Err(Error::InvalidKeyLength(key.len()))
        );
    }
}
