//! The minimal encoding of Equihash solutions.
//!
//! A solution is serialized as the concatenation of its `2^k` indices, each written
//! big-endian in `collision_bit_length + 1` bits with no padding between them.

use alloc::vec::Vec;
use core::mem::size_of;

use crate::params::ParameterSet;

/// Splits a big-endian bit string into `bit_len`-bit chunks, each written big-endian
/// into `ceil(bit_len / 8) + byte_pad` bytes.
pub(crate) fn expand_array(vin: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    assert!(bit_len >= 8);
    assert!(u32::BITS as usize >= 7 + bit_len);

    let out_width = (bit_len + 7) / 8 + byte_pad;
    let out_len = 8 * out_width * vin.len() / bit_len;

    // Shortcut for parameters where expansion is a no-op
    if out_len == vin.len() {
        return vin.to_vec();
    }

    let mut vout: Vec<u8> = vec![0; out_len];
    let bit_len_mask: u32 = (1 << bit_len) - 1;

    // The acc_bits least-significant bits of acc_value represent a bit sequence
    // in big-endian order.
    let mut acc_bits = 0;
    let mut acc_value: u32 = 0;

    let mut j = 0;
    for b in vin {
        acc_value = (acc_value << 8) | u32::from(*b);
        acc_bits += 8;

        // When we have bit_len or more bits in the accumulator, write the next
        // output element.
        if acc_bits >= bit_len {
            acc_bits -= bit_len;
            for x in byte_pad..out_width {
                vout[j + x] = ((acc_value >> (acc_bits + (8 * (out_width - x - 1))))
                    & ((bit_len_mask >> (8 * (out_width - x - 1))) & 0xFF))
                    as u8;
            }
            j += out_width;
        }
    }

    vout
}

/// Inverse of [`expand_array`]: packs `bit_len`-bit big-endian chunks, each stored in
/// `ceil(bit_len / 8) + byte_pad` bytes, back into a contiguous bit string.
pub(crate) fn compress_array(vin: &[u8], bit_len: usize, byte_pad: usize) -> Vec<u8> {
    assert!(bit_len >= 8);
    assert!(u32::BITS as usize >= 7 + bit_len);

    let in_width = (bit_len + 7) / 8 + byte_pad;
    let out_len = bit_len * vin.len() / (8 * in_width);

    if out_len == vin.len() {
        return vin.to_vec();
    }

    let mut vout = Vec::with_capacity(out_len);
    let bit_len_mask: u32 = (1 << bit_len) - 1;

    let mut acc_bits = 0;
    let mut acc_value: u32 = 0;

    let mut j = 0;
    for _ in 0..out_len {
        // Pull in the next chunk once fewer than a byte's worth of bits remain.
        if acc_bits < 8 {
            acc_value <<= bit_len;
            for x in byte_pad..in_width {
                let shift = 8 * (in_width - x - 1);
                acc_value |= (u32::from(vin[j + x]) & ((bit_len_mask >> shift) & 0xFF)) << shift;
            }
            j += in_width;
            acc_bits += bit_len;
        }

        acc_bits -= 8;
        vout.push((acc_value >> acc_bits) as u8);
    }

    vout
}

/// Decodes a minimal-encoded solution into its indices.
///
/// Returns `None` if `minimal` does not have the length required by `p`.
pub fn indices_from_minimal(p: ParameterSet, minimal: &[u8]) -> Option<Vec<u32>> {
    let c_bit_len = p.collision_bit_length();
    if minimal.len() != p.solution_len() {
        return None;
    }

    assert!(((c_bit_len + 1) + 7) / 8 <= size_of::<u32>());
    let byte_pad = size_of::<u32>() - ((c_bit_len + 1) + 7) / 8;

    // Big-endian so that lexicographic array comparison is equivalent to integer
    // comparison
    let indices = expand_array(minimal, c_bit_len + 1, byte_pad)
        .chunks_exact(size_of::<u32>())
        .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();

    Some(indices)
}

/// Encodes `indices` in the minimal representation for `p`.
///
/// Returns `None` if there are not exactly `2^k` indices, or if an index does not
/// fit in `collision_bit_length + 1` bits.
pub fn minimal_from_indices(p: ParameterSet, indices: &[u32]) -> Option<Vec<u8>> {
    let c_bit_len = p.collision_bit_length();
    if indices.len() != p.solution_index_count()
        || indices.iter().any(|i| u64::from(*i) >> (c_bit_len + 1) != 0)
    {
        return None;
    }

    let byte_pad = size_of::<u32>() - ((c_bit_len + 1) + 7) / 8;
    let array: Vec<u8> = indices.iter().flat_map(|i| i.to_be_bytes()).collect();

    Some(compress_array(&array, c_bit_len + 1, byte_pad))
}
