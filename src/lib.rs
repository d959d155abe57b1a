//! An implementation of the Spritz sponge construction (Rivest–Schuldt,
//! [RS14]): a single permutation-based engine that provides cryptographic
//! hashing, message authentication, stream encryption and deterministic
//! random byte generation.
//!
//! # Overview
//!
//! Spritz keeps its entire state in a permutation of `0..256` plus six
//! small registers. Input is absorbed nibble by nibble into the
//! permutation, and output is squeezed from it one byte at a time; a
//! periodic re-diffusion step (`shuffle`) separates the two. The four
//! services in this crate are thin, fixed protocols over that engine:
//!
//! - [`hash()`] / [`Hasher`]: variable-length digests,
//! - [`mac()`]: keyed digests (authentication tags),
//! - [`StreamCipher`]: XOR stream encryption and decryption,
//! - [`Drbg`]: a seeded, reproducible random byte stream.
//!
//! The arithmetic matches the reference algorithm bit for bit, which is
//! checked against the published test vectors:
//!
//! ```
//! let digest = spritz::hash(b"ABC", 32).unwrap();
//! assert_eq!(digest[..8], [0x02, 0x8f, 0xa2, 0xb4, 0x8b, 0x93, 0x4a, 0x18]);
//! ```
//!
//! # Stream encryption
//!
//! Encryption and decryption are the same XOR, and chunk boundaries never
//! change the keystream, so streams can be processed incrementally:
//!
//! ```
//! use spritz::StreamCipher;
//!
//! let mut enc = StreamCipher::new(b"key", b"nonce-1");
//! let mut ciphertext = enc.apply(b"attack at ");
//! ciphertext.extend(enc.apply(b"dawn"));
//!
//! let mut dec = StreamCipher::new(b"key", b"nonce-1");
//! assert_eq!(dec.apply(&ciphertext), b"attack at dawn");
//! ```
//!
//! A [`StreamCipher`] handle is bound to one `(key, iv)` pair and cannot
//! be cloned or rewound. Reusing a pair for two messages leaks their XOR;
//! open a fresh handle with a fresh IV every time.
//!
//! # Deterministic randomness
//!
//! [`Drbg`] implements [`rand::RngCore`] and [`rand::CryptoRng`], so it
//! plugs into anything generic over the `rand` traits:
//!
//! ```
//! use rand::RngCore;
//!
//! let mut drbg = spritz::Drbg::new(b"seed material");
//! let mut buf = [0u8; 16];
//! drbg.fill_bytes(&mut buf);
//! assert_eq!(buf, spritz::Drbg::new(b"seed material").next_bytes(16)[..]);
//! ```
//!
//! The sponge engine itself is available as [`SpritzState`] for protocols
//! not covered by the built-in constructions. It is single-threaded by
//! nature; run independent constructions on independent states for
//! concurrency, no locking required.
//!
//! [RS14]: https://people.csail.mit.edu/rivest/pubs/RS14.pdf

/// The stream cipher construction.
mod cipher;
/// The deterministic random byte generator.
mod drbg;
/// Error taxonomy.
mod errors;
/// Hash and MAC constructions.
mod hash;
/// The permutation state and core sponge operations.
mod state;
/// RustCrypto `digest` XOF bridge.
mod xof;


pub use cipher::StreamCipher;
pub use drbg::Drbg;
pub use errors::{SpritzError, SpritzResult};
pub use hash::{hash, mac, Hasher};
pub use state::{SpritzState, DEFAULT_SIZE};
pub use xof::{SpritzXof, SpritzXofReader};
