use core::fmt;

use crate::Error;

/// The Equihash parameter sets this crate can verify.
///
/// Each variant fixes the solution encoding width and proof size of a deployed
/// network. Values can only be obtained through [`ParameterSet::from_nk`] (or the
/// [`TryFrom`] impl), so an unsupported `(n, k)` pair can never reach the verifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ParameterSet {
    /// Equihash(200, 9), used by Zcash.
    Eh200_9,
    /// Equihash(192, 7).
    Eh192_7,
    /// Equihash(144, 5).
    Eh144_5,
    /// Equihash(96, 5).
    Eh96_5,
    /// Equihash(96, 3).
    Eh96_3,
    /// Equihash(48, 5).
    Eh48_5,
}

impl ParameterSet {
    /// Every supported parameter set.
    pub const ALL: [ParameterSet; 6] = [
        ParameterSet::Eh200_9,
        ParameterSet::Eh192_7,
        ParameterSet::Eh144_5,
        ParameterSet::Eh96_5,
        ParameterSet::Eh96_3,
        ParameterSet::Eh48_5,
    ];

    /// Looks up the parameter set for `(n, k)`.
    ///
    /// Returns [`Error::UnsupportedParameters`] for any pair outside the table. This
    /// is a configuration error on the caller's side, not a verification failure.
    pub fn from_nk(n: u32, k: u32) -> Result<Self, Error> {
        match (n, k) {
            (200, 9) => Ok(ParameterSet::Eh200_9),
            (192, 7) => Ok(ParameterSet::Eh192_7),
            (144, 5) => Ok(ParameterSet::Eh144_5),
            (96, 5) => Ok(ParameterSet::Eh96_5),
            (96, 3) => Ok(ParameterSet::Eh96_3),
            (48, 5) => Ok(ParameterSet::Eh48_5),
            _ => Err(Error::UnsupportedParameters { n, k }),
        }
    }

    pub fn n(&self) -> u32 {
        match self {
            ParameterSet::Eh200_9 => 200,
            ParameterSet::Eh192_7 => 192,
            ParameterSet::Eh144_5 => 144,
            ParameterSet::Eh96_5 | ParameterSet::Eh96_3 => 96,
            ParameterSet::Eh48_5 => 48,
        }
    }

    pub fn k(&self) -> u32 {
        match self {
            ParameterSet::Eh200_9 => 9,
            ParameterSet::Eh192_7 => 7,
            ParameterSet::Eh144_5 | ParameterSet::Eh96_5 | ParameterSet::Eh48_5 => 5,
            ParameterSet::Eh96_3 => 3,
        }
    }

    /// Number of `n`-bit leaf hashes carved out of a single BLAKE2b output.
    pub(crate) fn indices_per_hash_output(&self) -> u32 {
        512 / self.n()
    }

    /// BLAKE2b digest length in bytes.
    pub(crate) fn hash_output(&self) -> u8 {
        (self.indices_per_hash_output() * self.n() / 8) as u8
    }

    /// Number of bits that must collide between two subtrees in each round.
    pub fn collision_bit_length(&self) -> usize {
        (self.n() / (self.k() + 1)) as usize
    }

    pub(crate) fn collision_byte_length(&self) -> usize {
        (self.collision_bit_length() + 7) / 8
    }

    /// Length of a leaf digest once each collision chunk is padded to whole bytes.
    pub(crate) fn hash_length(&self) -> usize {
        ((self.k() as usize) + 1) * self.collision_byte_length()
    }

    /// Number of indices in a solution (`2^k`).
    pub fn solution_index_count(&self) -> usize {
        1 << self.k()
    }

    /// Length in bytes of a minimal-encoded solution.
    pub fn solution_len(&self) -> usize {
        // Division is exact because k >= 3.
        (self.solution_index_count() * (self.collision_bit_length() + 1)) / 8
    }
}

impl TryFrom<(u32, u32)> for ParameterSet {
    type Error = Error;

    fn try_from((n, k): (u32, u32)) -> Result<Self, Self::Error> {
        ParameterSet::from_nk(n, k)
    }
}

impl fmt::Display for ParameterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Equihash({},{})", self.n(), self.k())
    }
}
