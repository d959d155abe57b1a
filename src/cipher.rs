//! The Spritz stream cipher.
//!
//! Encryption and decryption are the same operation: XOR with the
//! keystream squeezed from a sponge keyed on `(key, iv)`. The cipher emits
//! raw `plaintext XOR keystream` with no framing; callers that store or
//! transmit ciphertext are responsible for conveying the IV alongside it.

use crate::state::SpritzState;

/// A one-shot keystream handle bound to a single `(key, iv)` pair.
///
/// The handle is move-only and deliberately not `Clone`: a copied handle
/// would replay the same keystream, and encrypting two messages under one
/// `(key, iv)` pair reveals their XOR. Open a fresh handle with a fresh IV
/// for every message.
pub struct StreamCipher {
    state: SpritzState,
}

impl StreamCipher {
    /// Keys a cipher on `key` and `iv`.
    ///
    /// The key and IV are absorbed as two distinct inputs, separated by a
    /// stop symbol, matching the reference construction.
    pub fn new(key: &[u8], iv: &[u8]) -> Self {
        let mut state = SpritzState::new();
        state.absorb(key);
        state.absorb_stop();
        state.absorb(iv);
        Self { state }
    }

    /// XORs `buf` with the next `buf.len()` keystream bytes in place.
    ///
    /// Chunk boundaries are invisible to the keystream: applying a message
    /// in pieces produces the same bytes as applying it whole.
    pub fn apply_in_place(&mut self, buf: &mut [u8]) {
        for b in buf.iter_mut() {
            *b ^= self.state.drip();
        }
    }

    /// XORs `chunk` with the keystream into a fresh buffer. The same call
    /// encrypts and decrypts.
    pub fn apply(&mut self, chunk: &[u8]) -> Vec<u8> {
        let mut out = chunk.to_vec();
        self.apply_in_place(&mut out);
        out
    }
}
