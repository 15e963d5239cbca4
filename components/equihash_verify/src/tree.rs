//! Validation of the collision tree formed by an Equihash solution.
//!
//! A solution is the leaf sequence of a complete binary tree of depth `k`. In round
//! `r`, each pair of sibling subtrees must collide on the `r`-th chunk of their
//! digests, be ordered by their first index, and share no index; the parent digest
//! is the XOR of the children. The root digest must be zero on the final chunk.
//!
//! The tree is checked breadth-first. All digests live in one flat buffer of
//! `2^k * hash_length` bytes and each merge writes the parent over the slot of its
//! left child, so a subtree is identified by its position alone: in round `r`, slot
//! `j` covers the indices `[j * 2^r, (j + 1) * 2^r)`.

use alloc::vec::Vec;

use crate::{error::Kind, personalization::HeaderState};

/// Checks that `indices` form a valid collision tree over `state`.
///
/// `indices` must contain exactly `2^k` entries for the parameters of `state`.
pub(crate) fn validate(state: &HeaderState, indices: &[u32]) -> Result<(), Kind> {
    let p = state.params();
    assert_eq!(indices.len(), p.solution_index_count());

    let hash_len = p.hash_length();
    let cbl = p.collision_byte_length();

    let mut hashes = Vec::with_capacity(indices.len() * hash_len);
    for i in indices {
        hashes.extend_from_slice(&state.leaf_hash(*i));
    }

    let mut width = 1;
    let mut nodes = indices.len();
    for round in 0..(p.k() as usize) {
        // Chunks before `trim` were already checked by earlier rounds.
        let trim = round * cbl;
        for j in 0..(nodes / 2) {
            let left = 2 * j * width;
            let right = left + width;

            let a = &hashes[2 * j * hash_len..(2 * j + 1) * hash_len];
            let b = &hashes[(2 * j + 1) * hash_len..(2 * j + 2) * hash_len];
            validate_subtrees(
                &a[trim..trim + cbl],
                &b[trim..trim + cbl],
                &indices[left..right],
                &indices[right..right + width],
            )?;

            let mut merged = [0u8; MAX_HASH_LENGTH];
            for ((m, x), y) in merged[..hash_len].iter_mut().zip(a).zip(b) {
                *m = x ^ y;
            }
            hashes[j * hash_len..(j + 1) * hash_len].copy_from_slice(&merged[..hash_len]);
        }
        nodes /= 2;
        width *= 2;
    }

    assert_eq!(nodes, 1);

    let trim = (p.k() as usize) * cbl;
    if hashes[trim..hash_len].iter().all(|v| *v == 0) {
        Ok(())
    } else {
        Err(Kind::NonZeroRootHash)
    }
}

/// Upper bound on `ParameterSet::hash_length` across the supported sets.
const MAX_HASH_LENGTH: usize = 32;

fn validate_subtrees(
    a_chunk: &[u8],
    b_chunk: &[u8],
    a_indices: &[u32],
    b_indices: &[u32],
) -> Result<(), Kind> {
    if a_chunk != b_chunk {
        Err(Kind::Collision)
    } else if b_indices[0] < a_indices[0] {
        // Indices are compared as integers, which matches comparing their
        // big-endian encodings.
        Err(Kind::OutOfOrder)
    } else if !distinct_indices(a_indices, b_indices) {
        Err(Kind::DuplicateIdxs)
    } else {
        Ok(())
    }
}

fn distinct_indices(a: &[u32], b: &[u32]) -> bool {
    a.iter().all(|i| !b.contains(i))
}
