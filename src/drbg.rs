//! A deterministic random byte generator over the Spritz sponge.

use rand::{CryptoRng, RngCore};

use crate::state::SpritzState;

/// A deterministic generator seeded once and squeezed on demand.
///
/// The same seed always yields the same stream, and split requests
/// concatenate seamlessly: asking for `r1` then `r2` bytes produces the
/// same bytes as asking for `r1 + r2` at once. The handle is move-only and
/// not `Clone`, so a stream cannot be forked and replayed.
///
/// ```
/// let mut drbg = spritz::Drbg::new(b"ABC");
/// assert_eq!(
///     drbg.next_bytes(8),
///     [0x77, 0x9a, 0x8e, 0x01, 0xf9, 0xe9, 0xcb, 0xc0]
/// );
/// ```
pub struct Drbg {
    state: SpritzState,
}

impl Drbg {
    /// Seeds a generator. The seed is terminated with a stop symbol before
    /// any output is produced.
    pub fn new(seed: &[u8]) -> Self {
        let mut state = SpritzState::new();
        state.absorb(seed);
        state.absorb_stop();
        Self { state }
    }

    /// Fills `dest` with the next bytes of the stream.
    pub fn fill(&mut self, dest: &mut [u8]) {
        self.state.squeeze(dest);
    }

    /// Returns the next `n` bytes of the stream.
    pub fn next_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }
}

impl RngCore for Drbg {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(buf.as_mut());
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(buf.as_mut());
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fill(dest);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill(dest);
        Ok(())
    }
}

// Deterministic by design: cryptographically strong only as far as the
// seed is secret and unpredictable.
impl CryptoRng for Drbg {}
