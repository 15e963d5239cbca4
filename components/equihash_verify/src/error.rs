use core::fmt;

/// Errors that can occur while verifying an Equihash solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `(n, k)` pair is not one of the supported parameter sets.
    ///
    /// This is a configuration error and is never reported as an invalid proof.
    UnsupportedParameters { n: u32, k: u32 },
    /// The solution buffer does not have the encoded length required by the
    /// parameter set.
    MalformedSolution { expected: usize, actual: usize },
    /// The solution was decoded but does not satisfy the collision tree rules.
    InvalidSolution(Kind),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedParameters { n, k } => {
                write!(f, "Unsupported Equihash parameters (n = {}, k = {})", n, k)
            }
            Error::MalformedSolution { expected, actual } => write!(
                f,
                "Malformed solution: expected {} bytes, got {}",
                expected, actual
            ),
            Error::InvalidSolution(kind) => write!(f, "Invalid solution: {}", kind),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

/// The rule of the collision tree that an invalid solution broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Two sibling subtrees did not collide on the bits checked in their round.
    Collision,
    /// The right subtree's first index was smaller than the left subtree's.
    OutOfOrder,
    /// An index appears in both sibling subtrees.
    DuplicateIdxs,
    /// The XOR of all leaf digests was not zero.
    NonZeroRootHash,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Collision => f.write_str("invalid collision length between StepRows"),
            Kind::OutOfOrder => f.write_str("Index tree incorrectly ordered"),
            Kind::DuplicateIdxs => f.write_str("duplicate indices"),
            Kind::NonZeroRootHash => f.write_str("root hash of tree is non-zero"),
        }
    }
}

impl From<Kind> for Error {
    fn from(kind: Kind) -> Self {
        Error::InvalidSolution(kind)
    }
}
