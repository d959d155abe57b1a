//! The Spritz permutation state and the core sponge operations.
//!
//! [`SpritzState`] is the register file of the cipher: a permutation of
//! `0..n` plus the six registers `i, j, k, z, a, w` from the RS14
//! description. Every higher-level construction in this crate drives a
//! fresh state through a fixed call sequence of the operations below and
//! then throws it away. The state is deliberately not `Clone`: a
//! checkpointed sponge is a reusable keystream, and reusing a keystream is
//! a security failure rather than a recoverable error.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::errors::{SpritzError, SpritzResult};

/// The conventional Spritz table size.
pub const DEFAULT_SIZE: usize = 256;

/// Byte absorption splits input into 4-bit nibbles, so `n / 2` must
/// exceed 15.
const MIN_SIZE: usize = 32;

/// Table entries are bytes.
const MAX_SIZE: usize = 256;

/// The mutable sponge state.
///
/// All index arithmetic is performed modulo the table size `n`. The table
/// is only ever mutated by swapping two entries, which keeps it a
/// permutation of `0..n` at all times. The state is zeroized on drop since
/// it is key-dependent from the first absorbed byte onwards.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SpritzState {
    n: usize,
    table: Vec<u8>,
    i: usize,
    j: usize,
    k: usize,
    z: usize,
    a: usize,
    w: usize,
}

impl SpritzState {
    /// Creates an identity state with the conventional table size of 256.
    pub fn new() -> Self {
        Self::identity(DEFAULT_SIZE)
    }

    /// Creates an identity state with a caller-chosen table size.
    ///
    /// The size must be even (nibble absorption swaps against the upper
    /// half of the table), at least 32 (a 4-bit nibble must stay below
    /// `n / 2`), and at most 256 (table entries are bytes).
    pub fn with_size(n: usize) -> SpritzResult<Self> {
        if n % 2 != 0 {
            return Err(SpritzError::Configuration(format!(
                "table size {n} is odd; nibble absorption needs an even size"
            )));
        }
        if n < MIN_SIZE {
            return Err(SpritzError::Configuration(format!(
                "table size {n} is below the minimum of {MIN_SIZE}"
            )));
        }
        if n > MAX_SIZE {
            return Err(SpritzError::Configuration(format!(
                "table size {n} exceeds the byte-valued maximum of {MAX_SIZE}"
            )));
        }
        Ok(Self::identity(n))
    }

    fn identity(n: usize) -> Self {
        Self {
            n,
            table: (0..n).map(|v| v as u8).collect(),
            i: 0,
            j: 0,
            k: 0,
            z: 0,
            a: 0,
            w: 1,
        }
    }

    /// The base mixing step. This is the only place table entries are
    /// exchanged outside of [`Self::crush`] and nibble absorption.
    fn update(&mut self) {
        let n = self.n;
        self.i = (self.i + self.w) % n;
        self.j = (self.k + self.table[(self.j + self.table[self.i] as usize) % n] as usize) % n;
        self.k = (self.i + self.k + self.table[self.j] as usize) % n;
        self.table.swap(self.i, self.j);
    }

    /// Runs `r` updates, then advances `w` to the next value coprime with
    /// the table size. The scan terminates within `n` steps because
    /// `w = 1` always qualifies.
    fn whip(&mut self, r: usize) {
        for _ in 0..r {
            self.update();
        }
        loop {
            self.w = (self.w + 1) % self.n;
            if gcd(self.w, self.n) == 1 {
                break;
            }
        }
    }

    /// Collapses paired table entries toward sortedness. Lossy on purpose:
    /// it discards state information to hinder recovery of earlier states.
    fn crush(&mut self) {
        let n = self.n;
        for v in 0..n / 2 {
            if self.table[v] > self.table[n - 1 - v] {
                self.table.swap(v, n - 1 - v);
            }
        }
    }

    /// The full re-diffusion step, and the only place `a` is reset.
    ///
    /// The whip count of `2n` matches the reference algorithm and its
    /// published test vectors.
    fn shuffle(&mut self) {
        self.whip(2 * self.n);
        self.crush();
        self.whip(2 * self.n);
        self.crush();
        self.whip(2 * self.n);
        self.a = 0;
    }

    /// Absorbs a single value in `[0, n/2)`.
    fn absorb_nibble(&mut self, x: u8) {
        debug_assert!((x as usize) < self.n / 2);
        if self.a == self.n / 2 {
            self.shuffle();
        }
        self.table.swap(self.a, self.n / 2 + x as usize);
        self.a += 1;
    }

    /// Absorbs one byte, low nibble first.
    pub fn absorb_byte(&mut self, b: u8) {
        self.absorb_nibble(b & 0x0f);
        self.absorb_nibble(b >> 4);
    }

    /// Absorbs a byte slice.
    pub fn absorb(&mut self, input: &[u8]) {
        for &b in input {
            self.absorb_byte(b);
        }
    }

    /// Marks a boundary between two absorbed inputs, so that
    /// `absorb(x); absorb_stop(); absorb(y)` is distinguishable from
    /// `absorb(x ++ y)`. Advances `a` without touching the table.
    pub fn absorb_stop(&mut self) {
        if self.a == self.n / 2 {
            self.shuffle();
        }
        self.a += 1;
    }

    /// Absorbs the minimal big-endian encoding of `value` (a single zero
    /// byte for 0). Used to bind a requested output length into a digest.
    pub fn absorb_int(&mut self, value: u64) {
        let bytes = value.to_be_bytes();
        let skip = usize::min((value.leading_zeros() / 8) as usize, bytes.len() - 1);
        self.absorb(&bytes[skip..]);
    }

    fn output(&mut self) -> u8 {
        let n = self.n;
        let t = self.table[(self.z + self.k) % n] as usize;
        let t = self.table[(self.i + t) % n] as usize;
        self.z = self.table[(self.j + t) % n] as usize;
        self.z as u8
    }

    /// Produces the next output byte, re-diffusing first if any absorbed
    /// material is still pending.
    pub fn drip(&mut self) -> u8 {
        if self.a > 0 {
            self.shuffle();
        }
        self.update();
        self.output()
    }

    /// Fills `output` with successive [`Self::drip`] bytes.
    ///
    /// Consecutive squeezes on a live state continue the same stream:
    /// squeezing `r1` then `r2` bytes is byte-identical to squeezing
    /// `r1 + r2` bytes at once.
    pub fn squeeze(&mut self, output: &mut [u8]) {
        for b in output.iter_mut() {
            *b = self.drip();
        }
    }

    #[cfg(test)]
    pub(crate) fn table(&self) -> &[u8] {
        &self.table
    }
}

impl Default for SpritzState {
    fn default() -> Self {
        Self::new()
    }
}

fn gcd(mut a: usize, mut b: usize) -> usize {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whip_keeps_w_coprime() {
        for n in [32usize, 64, 100, 256] {
            let mut st = SpritzState::with_size(n).unwrap();
            st.absorb(b"some input to move the registers");
            for _ in 0..5 {
                st.whip(2 * n);
                assert_eq!(gcd(st.w, n), 1, "w = {} not coprime with n = {n}", st.w);
            }
        }
    }

    #[test]
    fn nibble_counter_stays_bounded() {
        let mut st = SpritzState::new();
        // 200 bytes is 400 nibbles, crossing the n/2 = 128 boundary twice.
        st.absorb(&[0xa5; 200]);
        assert!(st.a <= st.n / 2);
        st.absorb_stop();
        assert!(st.a <= st.n / 2);
    }

    #[test]
    fn absorb_int_matches_minimal_big_endian_bytes() {
        let cases: &[(u64, &[u8])] = &[
            (0, &[0x00]),
            (0x20, &[0x20]),
            (0x1234, &[0x12, 0x34]),
            (0x01_00_00_00, &[0x01, 0x00, 0x00, 0x00]),
        ];
        for &(value, bytes) in cases {
            let mut via_int = SpritzState::new();
            via_int.absorb_int(value);
            let mut via_bytes = SpritzState::new();
            via_bytes.absorb(bytes);

            let mut a = [0u8; 16];
            let mut b = [0u8; 16];
            via_int.squeeze(&mut a);
            via_bytes.squeeze(&mut b);
            assert_eq!(a, b, "encoding mismatch for {value:#x}");
        }
    }

    #[test]
    fn rejected_sizes() {
        for n in [0usize, 2, 16, 31, 33, 101, 255, 258, 1024] {
            assert!(
                matches!(SpritzState::with_size(n), Err(SpritzError::Configuration(_))),
                "size {n} should be rejected"
            );
        }
        for n in [32usize, 64, 100, 256] {
            assert!(SpritzState::with_size(n).is_ok(), "size {n} should be accepted");
        }
    }
}
