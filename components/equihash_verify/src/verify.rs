//! Verification functions for the [Equihash] proof-of-work algorithm.
//!
//! [Equihash]: https://zips.z.cash/protocol/protocol.pdf#equihash

use tracing::{debug, trace};

use crate::{
    minimal::indices_from_minimal,
    params::ParameterSet,
    personalization::{HeaderState, Personalization},
    tree, Error,
};

/// Length of the block header bound by an Equihash solution.
pub const HEADER_LEN: usize = 140;

/// Checks whether `solution` is a valid Equihash solution for `header` under the
/// parameters `(n, k)`.
///
/// `personalization` is the 8-byte protocol prefix of the BLAKE2b personalization
/// (see [`Personalization::new`]); `None` selects `ZcashPoW`.
///
/// Returns:
/// - `Err(Error::UnsupportedParameters)` if `(n, k)` is not a supported parameter set.
///   This is checked before anything else.
/// - `Ok(false)` if `header` is not exactly [`HEADER_LEN`] bytes long.
/// - `Err(Error::MalformedSolution)` if `solution` does not have the encoded length
///   required by `(n, k)`.
/// - `Ok(false)` if the solution is well-formed but invalid, and `Ok(true)` if it is
///   valid.
pub fn verify(
    header: &[u8],
    solution: &[u8],
    n: u32,
    k: u32,
    personalization: Option<&[u8]>,
) -> Result<bool, Error> {
    let params = ParameterSet::from_nk(n, k)?;
    trace!("Selected {}", params);

    let header = match <&[u8; HEADER_LEN]>::try_from(header) {
        Ok(header) => header,
        Err(_) => {
            debug!(
                "Rejecting {} solution: header is {} bytes, expected {}",
                params,
                header.len(),
                HEADER_LEN
            );
            return Ok(false);
        }
    };

    let personalization = Personalization::from_option(personalization);
    match verify_header(params, &personalization, header, solution) {
        Ok(()) => Ok(true),
        Err(Error::InvalidSolution(kind)) => {
            debug!("Rejecting {} solution: {}", params, kind);
            Ok(false)
        }
        Err(e) => Err(e),
    }
}

/// Checks whether `solution` is a valid solution for `header`, reporting the reason
/// for any failure.
pub fn verify_header(
    params: ParameterSet,
    personalization: &Personalization,
    header: &[u8; HEADER_LEN],
    solution: &[u8],
) -> Result<(), Error> {
    let state = HeaderState::new(params, personalization, header);
    validate_solution(&state, solution)
}

/// Checks whether `soln` is a valid solution for `(input, nonce)` with the
/// parameters `(n, k)` and the Zcash personalization.
///
/// Unlike [`verify`], `input` and `nonce` may have any length; they are hashed as
/// if concatenated.
pub fn is_valid_solution(
    n: u32,
    k: u32,
    input: &[u8],
    nonce: &[u8],
    soln: &[u8],
) -> Result<(), Error> {
    let params = ParameterSet::from_nk(n, k)?;
    let state = HeaderState::from_parts(params, &Personalization::ZCASH, input, nonce);
    validate_solution(&state, soln)
}

fn validate_solution(state: &HeaderState, soln: &[u8]) -> Result<(), Error> {
    let params = state.params();
    let indices = indices_from_minimal(params, soln).ok_or(Error::MalformedSolution {
        expected: params.solution_len(),
        actual: soln.len(),
    })?;

    tree::validate(state, &indices).map_err(Error::InvalidSolution)
}
