//! Move-mask emulation for 128-bit lane-compare results.
//!
//! A fixed-width compare yields a register whose lanes are all-ones (true) or
//! all-zeros (false). These routines collapse such a register into a packed
//! [`BitMask`] with bit `i` set iff lane `i` was all-ones. The register is
//! passed as its two little-endian 64-bit halves, so lane 0 lives in the low
//! bits of `words[0]`.
//!
//! There is no single-instruction move-mask on this register model, so each
//! width folds sign bits together with shift-accumulate steps on ever wider
//! groupings. Shifts are per-group: a logical shift of a 64-bit word followed
//! by a mask that drops the bits that crossed into the neighbouring group.
//! Everything is branch-free.
use crate::types::BitMask;
use bytemuck::Pod;

/// Reinterpret any 128-bit register as its two 64-bit halves.
#[inline(always)]
pub fn words<V: Pod>(register: V) -> [u64; 2] {
    bytemuck::cast(register)
}

// Sign bits of the 8 bytes of `word`, packed into bits 0..8.
#[inline(always)]
fn fold_bytes(word: u64) -> u64 {
    let high_bits = (word >> 7) & 0x0101_0101_0101_0101;
    // Pair bytes inside every 16-bit group. Bit 8 of each group is left over.
    let paired16 = high_bits + ((high_bits >> 7) & 0x01FF_01FF_01FF_01FF);
    let paired32 = paired16 + ((paired16 >> 14) & 0x0003_FFFF_0003_FFFF);
    let paired64 = paired32 + (paired32 >> 28);
    paired64 & 0xFF
}

// Sign bits of the 4 halfwords of `word`, packed into bits 0..4.
#[inline(always)]
fn fold_halfwords(word: u64) -> u64 {
    let high_bits = (word >> 15) & 0x0001_0001_0001_0001;
    let paired32 = high_bits + ((high_bits >> 15) & 0x0001_FFFF_0001_FFFF);
    let paired64 = paired32 + (paired32 >> 30);
    paired64 & 0xF
}

// Sign bits of the 2 words of `word`, packed into bits 0..2.
#[inline(always)]
fn fold_words(word: u64) -> u64 {
    let high_bits = (word >> 31) & 0x0000_0001_0000_0001;
    let paired64 = high_bits + (high_bits >> 31);
    paired64 & 0x3
}

/// 16 lanes of 8 bits.
#[inline(always)]
pub fn movemask_epi8(input: [u64; 2]) -> BitMask {
    (fold_bytes(input[0]) | (fold_bytes(input[1]) << 8)) as BitMask
}

/// 8 lanes of 16 bits.
#[inline(always)]
pub fn movemask_epi16(input: [u64; 2]) -> BitMask {
    (fold_halfwords(input[0]) | (fold_halfwords(input[1]) << 4)) as BitMask
}

/// 4 lanes of 32 bits.
#[inline(always)]
pub fn movemask_epi32(input: [u64; 2]) -> BitMask {
    (fold_words(input[0]) | (fold_words(input[1]) << 2)) as BitMask
}

/// 2 lanes of 64 bits.
#[inline(always)]
pub fn movemask_epi64(input: [u64; 2]) -> BitMask {
    ((input[0] >> 63) | ((input[1] >> 63) << 1)) as BitMask
}

/// Packed `f32` lanes: each lane's sign bit, shifted to its lane index and
/// summed horizontally.
#[inline(always)]
pub fn movemask_ps(input: [u64; 2]) -> BitMask {
    let lanes: [u32; 4] = bytemuck::cast(input);
    lanes
        .iter()
        .enumerate()
        .map(|(i, &lane)| (lane >> 31) << i)
        .sum::<u32>() as BitMask
}

/// Packed `f64` lanes.
#[inline(always)]
pub fn movemask_pd(input: [u64; 2]) -> BitMask {
    let high_bits = [input[0] >> 63, input[1] >> 63];
    (high_bits[0] | (high_bits[1] << 1)) as BitMask
}
