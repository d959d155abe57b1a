//! Bridge to the RustCrypto [`digest`] extendable-output traits.
//!
//! [`SpritzXof`] exposes the sponge as an XOF: absorb through
//! [`digest::Update`], then read any amount of output through
//! [`digest::XofReader`]. Unlike [`crate::hash()`], an XOF cannot know its
//! output length up front, so no length is bound into the sponge; prefixes
//! of longer reads therefore equal shorter reads over the same input.

use digest::{ExtendableOutput, Update, XofReader};

use crate::state::SpritzState;

/// Absorbing half of the Spritz XOF.
pub struct SpritzXof {
    state: SpritzState,
}

/// Squeezing half of the Spritz XOF, obtained from
/// [`ExtendableOutput::finalize_xof`].
pub struct SpritzXofReader {
    state: SpritzState,
}

impl Default for SpritzXof {
    fn default() -> Self {
        Self {
            state: SpritzState::new(),
        }
    }
}

impl Update for SpritzXof {
    fn update(&mut self, data: &[u8]) {
        self.state.absorb(data);
    }
}

impl ExtendableOutput for SpritzXof {
    type Reader = SpritzXofReader;

    fn finalize_xof(mut self) -> Self::Reader {
        self.state.absorb_stop();
        SpritzXofReader { state: self.state }
    }
}

impl XofReader for SpritzXofReader {
    fn read(&mut self, buffer: &mut [u8]) {
        self.state.squeeze(buffer);
    }
}
