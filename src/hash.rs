//! Hashing and message authentication over the Spritz sponge.
//!
//! The one-shot entry points [`hash`] and [`mac`] cover the common case.
//! [`Hasher`] is the incremental form: it accepts input in arbitrary
//! chunks and then releases the digest in arbitrary chunks, enforcing at
//! runtime that the two phases never interleave. The requested output
//! length is absorbed into the sponge before squeezing, so digests of
//! different lengths over the same input are unrelated.

use crate::errors::{SpritzError, SpritzResult};
use crate::state::SpritzState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Absorbing,
    Squeezing,
}

/// An incremental Spritz digest.
///
/// The protocol is `absorb* -> squeeze*`: once the first byte of digest
/// has been squeezed, further [`Hasher::absorb`] calls return
/// [`SpritzError::ProtocolViolation`]. The digest length is fixed at
/// construction; squeezing past it is rejected the same way.
pub struct Hasher {
    state: SpritzState,
    phase: Phase,
    output_len: usize,
    remaining: usize,
}

impl Hasher {
    /// Starts a digest of `output_len` bytes.
    pub fn new(output_len: usize) -> SpritzResult<Self> {
        if output_len == 0 {
            return Err(SpritzError::InvalidArgument(
                "digest length must be at least one byte".into(),
            ));
        }
        Ok(Self {
            state: SpritzState::new(),
            phase: Phase::Absorbing,
            output_len,
            remaining: output_len,
        })
    }

    /// Starts a keyed digest (a MAC) of `output_len` bytes.
    ///
    /// The key is absorbed up front and separated from the message with a
    /// stop symbol, so a key/message pair can never be confused with a
    /// differently split concatenation.
    pub fn with_key(key: &[u8], output_len: usize) -> SpritzResult<Self> {
        let mut hasher = Self::new(output_len)?;
        hasher.state.absorb(key);
        hasher.state.absorb_stop();
        Ok(hasher)
    }

    /// Feeds message bytes. Chunk boundaries do not affect the digest.
    pub fn absorb(&mut self, input: &[u8]) -> SpritzResult<()> {
        if self.phase != Phase::Absorbing {
            return Err(SpritzError::ProtocolViolation(
                "absorb called after squeezing began".into(),
            ));
        }
        self.state.absorb(input);
        Ok(())
    }

    /// Squeezes the next `output.len()` digest bytes.
    ///
    /// The first call closes the absorption phase, binding the declared
    /// output length into the sponge. Split squeezes concatenate to the
    /// same digest as a single full-length squeeze.
    pub fn squeeze(&mut self, output: &mut [u8]) -> SpritzResult<()> {
        if self.phase == Phase::Absorbing {
            self.state.absorb_stop();
            self.state.absorb_int(self.output_len as u64);
            self.phase = Phase::Squeezing;
        }
        if output.len() > self.remaining {
            return Err(SpritzError::ProtocolViolation(format!(
                "requested {} digest bytes but only {} remain of the declared {}",
                output.len(),
                self.remaining,
                self.output_len
            )));
        }
        self.state.squeeze(output);
        self.remaining -= output.len();
        Ok(())
    }

    /// Squeezes whatever remains of the digest and consumes the hasher.
    pub fn finish(mut self) -> SpritzResult<Vec<u8>> {
        let mut out = vec![0u8; self.remaining];
        self.squeeze(&mut out)?;
        Ok(out)
    }
}

impl Drop for Hasher {
    fn drop(&mut self) {
        // The sponge itself is zeroized by its own drop impl.
        if self.remaining > 0 {
            log::debug!(
                "hasher dropped with {} of {} digest bytes unproduced",
                self.remaining,
                self.output_len
            );
        }
    }
}

/// Computes an `output_len`-byte Spritz digest of `message`.
///
/// ```
/// let digest = spritz::hash(b"ABC", 32).unwrap();
/// assert_eq!(digest[..8], [0x02, 0x8f, 0xa2, 0xb4, 0x8b, 0x93, 0x4a, 0x18]);
/// ```
pub fn hash(message: &[u8], output_len: usize) -> SpritzResult<Vec<u8>> {
    let mut hasher = Hasher::new(output_len)?;
    hasher.absorb(message)?;
    hasher.finish()
}

/// Computes an `output_len`-byte authentication tag over `message` under
/// `key`. Verifiers recompute the tag and compare.
pub fn mac(key: &[u8], message: &[u8], output_len: usize) -> SpritzResult<Vec<u8>> {
    let mut hasher = Hasher::with_key(key, output_len)?;
    hasher.absorb(message)?;
    hasher.finish()
}
