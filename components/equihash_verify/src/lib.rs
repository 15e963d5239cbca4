//! Equihash is a Proof-of-Work algorithm, based on a generalization of the Birthday
//! problem which finds colliding hash values. It was designed to be memory-hard; more
//! specifically, the bottle-neck for parallel implementations of Equihash solvers would
//! be memory bandwidth.
//!
//! This crate verifies Equihash solutions bound to 140-byte block headers, for the
//! parameter sets used by deployed networks: `(200, 9)`, `(192, 7)`, `(144, 5)`,
//! `(96, 5)`, `(96, 3)` and `(48, 5)`. Verification costs `2^k` BLAKE2b
//! compressions, in contrast to the memory-hard search performed by a solver.
//!
//! ```
//! use equihash_verify::{verify, Error};
//!
//! let header = [0u8; 140];
//! let solution = [0u8; 68];
//!
//! // A well-formed but bogus solution is simply rejected.
//! assert_eq!(verify(&header, &solution, 96, 5, None), Ok(false));
//!
//! // Parameters outside the supported table are a caller error.
//! assert_eq!(
//!     verify(&header, &solution, 96, 6, None),
//!     Err(Error::UnsupportedParameters { n: 96, k: 6 }),
//! );
//! ```
//!
#![cfg_attr(feature = "std", doc = "## Feature flags")]
#![cfg_attr(feature = "std", doc = document_features::document_features!())]
//!
//! References
//! ==========
//! - [Section 7.6.1: Equihash.] Zcash Protocol Specification, version 2020.1.10 or later.
//! - Alex Biryukov and Dmitry Khovratovich.
//!   [*Equihash: Asymmetric Proof-of-Work Based on the Generalized Birthday Problem.*][BK16]
//!   NDSS ’16.
//!
//! [Section 7.6.1: Equihash.]: https://zips.z.cash/protocol/protocol.pdf#equihash
//! [BK16]: https://www.internetsociety.org/sites/default/files/blogs-media/equihash-asymmetric-proof-of-work-based-generalized-birthday-problem.pdf

// Catch documentation errors caused by code changes.
#![deny(rustdoc::broken_intra_doc_links)]
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(docsrs, doc(auto_cfg))]

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
extern crate alloc;

mod error;
mod minimal;
mod params;
mod personalization;
mod tree;
mod verify;


pub use error::{Error, Kind};
pub use minimal::{indices_from_minimal, minimal_from_indices};
pub use params::ParameterSet;
pub use personalization::{Personalization, PREFIX_LEN};
pub use verify::{is_valid_solution, verify, verify_header, HEADER_LEN};
