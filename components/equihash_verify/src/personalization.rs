//! BLAKE2b state initialisation for Equihash.
//!
//! The hash is personalized with `prefix || LE32(n) || LE32(k)`, where `prefix` is an
//! 8-byte protocol tag (`ZcashPoW` for Zcash). The header is absorbed once into a
//! template state, and every leaf digest is derived from a clone of that template.

use alloc::vec::Vec;

use blake2b_simd::{Hash as Blake2bHash, Params as Blake2bParams, State as Blake2bState};

use crate::{minimal::expand_array, params::ParameterSet};

/// Length of the protocol prefix inside the 16-byte BLAKE2b personalization field.
pub const PREFIX_LEN: usize = 8;

/// The protocol prefix of the Equihash personalization tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Personalization([u8; PREFIX_LEN]);

impl Personalization {
    /// The prefix used by Zcash and by default.
    pub const ZCASH: Personalization = Personalization(*b"ZcashPoW");

    /// Builds a prefix from caller-supplied bytes.
    ///
    /// Inputs shorter than eight bytes are zero-padded; longer inputs are truncated.
    pub fn new(prefix: &[u8]) -> Self {
        let mut tag = [0; PREFIX_LEN];
        let len = prefix.len().min(PREFIX_LEN);
        tag[..len].copy_from_slice(&prefix[..len]);
        Personalization(tag)
    }

    /// Maps an absent prefix to [`Personalization::ZCASH`].
    pub fn from_option(prefix: Option<&[u8]>) -> Self {
        prefix.map_or_else(Personalization::default, Personalization::new)
    }

    pub fn prefix(&self) -> &[u8; PREFIX_LEN] {
        &self.0
    }

    /// The full BLAKE2b personalization field for the given parameters.
    pub(crate) fn tag(&self, p: ParameterSet) -> [u8; 16] {
        let mut tag = [0; 16];
        tag[..PREFIX_LEN].copy_from_slice(&self.0);
        tag[8..12].copy_from_slice(&p.n().to_le_bytes());
        tag[12..16].copy_from_slice(&p.k().to_le_bytes());
        tag
    }
}

impl Default for Personalization {
    fn default() -> Self {
        Personalization::ZCASH
    }
}

/// A BLAKE2b state that has absorbed the personalization and the header.
///
/// The state is only ever cloned after construction.
#[derive(Clone)]
pub(crate) struct HeaderState {
    params: ParameterSet,
    state: Blake2bState,
}

impl HeaderState {
    /// Initialises the state for `params` and absorbs `header`.
    pub fn new(params: ParameterSet, personalization: &Personalization, header: &[u8]) -> Self {
        let mut state = initialise_state(params, personalization);
        state.update(header);
        HeaderState { params, state }
    }

    /// Initialises the state for `params` and absorbs `input || nonce`.
    pub fn from_parts(
        params: ParameterSet,
        personalization: &Personalization,
        input: &[u8],
        nonce: &[u8],
    ) -> Self {
        let mut state = initialise_state(params, personalization);
        state.update(input);
        state.update(nonce);
        HeaderState { params, state }
    }

    pub fn params(&self) -> ParameterSet {
        self.params
    }

    /// Computes the expanded digest of leaf `i`.
    ///
    /// The result is `k + 1` chunks of `collision_bit_length` bits, each right-aligned
    /// in `collision_byte_length` bytes.
    pub(crate) fn leaf_hash(&self, i: u32) -> Vec<u8> {
        let p = &self.params;
        let hash = self.generate_hash(i / p.indices_per_hash_output());
        let start = ((i % p.indices_per_hash_output()) * p.n() / 8) as usize;
        let end = start + (p.n() as usize) / 8;
        expand_array(&hash.as_bytes()[start..end], p.collision_bit_length(), 0)
    }

    fn generate_hash(&self, g: u32) -> Blake2bHash {
        let mut state = self.state.clone();
        state.update(&g.to_le_bytes());
        state.finalize()
    }
}

fn initialise_state(p: ParameterSet, personalization: &Personalization) -> Blake2bState {
    Blake2bParams::new()
        .hash_length(p.hash_output() as usize)
        .personal(&personalization.tag(p))
        .to_state()
}
