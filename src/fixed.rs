//! Fixed-width (128-bit) filter processors.
//!
//! One processor per comparison type. A register always holds
//! `16 / size_of::<Filter>()` lanes and every lane is live: there is no
//! predicate, so callers pad or sentinel-fill short tail batches before
//! loading. Comparisons return a packed [`BitMask`] (bit `i` = lane `i`).
//!
//! Integer `lt` is derived by swapping the operands of `gt`; `ge`, `le` and
//! `ne` complement `lt`, `gt` and `eq`. Unsigned lanes are compared as signed
//! after flipping their sign bit.
use crate::masked_store::store_with_mask;
use crate::movemask::{
    movemask_epi8, movemask_epi16, movemask_epi32, movemask_epi64, movemask_pd, movemask_ps,
    words,
};
use crate::types::{BitMask, Lane};
use bytemuck::{Pod, Zeroable};
use wide::*;

/// Operation set of a fixed-width processor.
///
/// `NullEmpty` is the same-width integer used to build and test sentinel
/// registers. For integer processors it is the filter type itself and the
/// `null_empty_*` comparators are plain `cmp_ne` / `cmp_eq`. The float
/// processors compare sentinels bit for bit through their integer twin, so
/// NaN-shaped markers still match themselves.
pub trait FixedFilterProcessor: Copy + Default + Send + Sync {
    type Filter: Lane;
    type NullEmpty: Pod;
    type Vector: Pod;

    const LANES: usize;
    const FULL_MASK: BitMask = ((1u32 << Self::LANES) - 1) as BitMask;

    /// Broadcast a sentinel given as its raw integer bits.
    #[inline(always)]
    fn empty_null_load_value(&self, fill: Self::NullEmpty) -> Self::Vector {
        self.load_value(bytemuck::cast(fill))
    }

    fn load_value(&self, fill: Self::Filter) -> Self::Vector;

    /// Load one register from the front of `src`.
    ///
    /// Panics if `src` holds fewer than `LANES` values.
    #[inline(always)]
    fn load_from(&self, src: &[Self::Filter]) -> Self::Vector {
        let mut v = Self::Vector::zeroed();
        let lanes: &mut [Self::Filter] = bytemuck::cast_slice_mut(std::slice::from_mut(&mut v));
        lanes.copy_from_slice(&src[..Self::LANES]);
        v
    }

    fn cmp_eq(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;
    fn cmp_ne(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;
    fn cmp_gt(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;
    fn cmp_ge(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;
    fn cmp_lt(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;
    fn cmp_le(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask;

    #[inline(always)]
    fn cmp_always_false(&self, _x: &Self::Vector, _y: &Self::Vector) -> BitMask {
        0
    }

    #[inline(always)]
    fn cmp_always_true(&self, _x: &Self::Vector, _y: &Self::Vector) -> BitMask {
        Self::FULL_MASK
    }

    /// Bitmask of a register produced by other means. Every lane must be
    /// all-ones or all-zeros.
    fn convert_vector_to_bitmask(&self, vmask: &Self::Vector) -> BitMask;

    #[inline(always)]
    fn null_empty_cmp_ne(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask {
        self.cmp_ne(x, y)
    }

    #[inline(always)]
    fn null_empty_cmp_eq(&self, x: &Self::Vector, y: &Self::Vector) -> BitMask {
        self.cmp_eq(x, y)
    }

    #[inline(always)]
    fn set_to_zero(&self) -> Self::Vector {
        Self::Vector::zeroed()
    }

    /// Blend `x` into `dst` byte by byte where the sign bit of the matching
    /// `vmask` byte is set. `vmask` must be all-ones/all-zeros per lane.
    #[inline(always)]
    fn store_w_mask(&self, x: &Self::Vector, vmask: &Self::Vector, dst: &mut [Self::Filter]) {
        store_with_mask(*x, *vmask, dst);
    }

    #[inline(always)]
    fn store(&self, dst: &mut [Self::Filter], x: &Self::Vector) {
        let lanes: &[Self::Filter] = bytemuck::cast_slice(std::slice::from_ref(x));
        dst[..Self::LANES].copy_from_slice(lanes);
    }
}

// ==============================
// 8-bit lanes
// ==============================

#[derive(Debug, Default, Clone, Copy)]
pub struct Int8Processor;

impl FixedFilterProcessor for Int8Processor {
    type Filter = i8;
    type NullEmpty = i8;
    type Vector = i8x16;

    const LANES: usize = 16;

    #[inline(always)]
    fn load_value(&self, fill: i8) -> i8x16 {
        i8x16::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &i8x16, y: &i8x16) -> BitMask {
        movemask_epi8(words(x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &i8x16, y: &i8x16) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &i8x16, y: &i8x16) -> BitMask {
        movemask_epi8(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &i8x16, y: &i8x16) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &i8x16, y: &i8x16) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &i8x16, y: &i8x16) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &i8x16) -> BitMask {
        movemask_epi8(words(*vmask))
    }
}

#[inline(always)]
fn bias_u8(x: &u8x16) -> i8x16 {
    bytemuck::cast::<u8x16, i8x16>(*x) ^ i8x16::splat(i8::MIN)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UInt8Processor;

impl FixedFilterProcessor for UInt8Processor {
    type Filter = u8;
    type NullEmpty = u8;
    type Vector = u8x16;

    const LANES: usize = 16;

    #[inline(always)]
    fn load_value(&self, fill: u8) -> u8x16 {
        u8x16::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &u8x16, y: &u8x16) -> BitMask {
        let (a, b): (i8x16, i8x16) = (bytemuck::cast(*x), bytemuck::cast(*y));
        movemask_epi8(words(a.cmp_eq(b)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &u8x16, y: &u8x16) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &u8x16, y: &u8x16) -> BitMask {
        movemask_epi8(words(bias_u8(x).cmp_gt(bias_u8(y))))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &u8x16, y: &u8x16) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &u8x16, y: &u8x16) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &u8x16, y: &u8x16) -> BitMask {
        self.cmp_ge(y, x)
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &u8x16) -> BitMask {
        movemask_epi8(words(*vmask))
    }
}

// ==============================
// 16-bit lanes
// ==============================

#[derive(Debug, Default, Clone, Copy)]
pub struct Int16Processor;

impl FixedFilterProcessor for Int16Processor {
    type Filter = i16;
    type NullEmpty = i16;
    type Vector = i16x8;

    const LANES: usize = 8;

    #[inline(always)]
    fn load_value(&self, fill: i16) -> i16x8 {
        i16x8::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &i16x8, y: &i16x8) -> BitMask {
        movemask_epi16(words(x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &i16x8, y: &i16x8) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &i16x8, y: &i16x8) -> BitMask {
        movemask_epi16(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &i16x8, y: &i16x8) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &i16x8, y: &i16x8) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &i16x8, y: &i16x8) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &i16x8) -> BitMask {
        movemask_epi16(words(*vmask))
    }
}

#[inline(always)]
fn bias_u16(x: &u16x8) -> i16x8 {
    bytemuck::cast::<u16x8, i16x8>(*x) ^ i16x8::splat(i16::MIN)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UInt16Processor;

impl FixedFilterProcessor for UInt16Processor {
    type Filter = u16;
    type NullEmpty = u16;
    type Vector = u16x8;

    const LANES: usize = 8;

    #[inline(always)]
    fn load_value(&self, fill: u16) -> u16x8 {
        u16x8::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &u16x8, y: &u16x8) -> BitMask {
        let (a, b): (i16x8, i16x8) = (bytemuck::cast(*x), bytemuck::cast(*y));
        movemask_epi16(words(a.cmp_eq(b)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &u16x8, y: &u16x8) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &u16x8, y: &u16x8) -> BitMask {
        movemask_epi16(words(bias_u16(x).cmp_gt(bias_u16(y))))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &u16x8, y: &u16x8) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &u16x8, y: &u16x8) -> BitMask {
        movemask_epi16(words(bias_u16(y).cmp_gt(bias_u16(x))))
    }

    #[inline(always)]
    fn cmp_le(&self, x: &u16x8, y: &u16x8) -> BitMask {
        self.cmp_ge(y, x)
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &u16x8) -> BitMask {
        movemask_epi16(words(*vmask))
    }
}

// ==============================
// 32-bit lanes
// ==============================

#[derive(Debug, Default, Clone, Copy)]
pub struct Int32Processor;

impl FixedFilterProcessor for Int32Processor {
    type Filter = i32;
    type NullEmpty = i32;
    type Vector = i32x4;

    const LANES: usize = 4;

    #[inline(always)]
    fn load_value(&self, fill: i32) -> i32x4 {
        i32x4::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &i32x4, y: &i32x4) -> BitMask {
        movemask_epi32(words(x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &i32x4, y: &i32x4) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &i32x4, y: &i32x4) -> BitMask {
        movemask_epi32(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &i32x4, y: &i32x4) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &i32x4, y: &i32x4) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &i32x4, y: &i32x4) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &i32x4) -> BitMask {
        movemask_epi32(words(*vmask))
    }
}

#[inline(always)]
fn bias_u32(x: &u32x4) -> i32x4 {
    bytemuck::cast::<u32x4, i32x4>(*x) ^ i32x4::splat(i32::MIN)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UInt32Processor;

impl FixedFilterProcessor for UInt32Processor {
    type Filter = u32;
    type NullEmpty = u32;
    type Vector = u32x4;

    const LANES: usize = 4;

    #[inline(always)]
    fn load_value(&self, fill: u32) -> u32x4 {
        u32x4::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &u32x4, y: &u32x4) -> BitMask {
        let (a, b): (i32x4, i32x4) = (bytemuck::cast(*x), bytemuck::cast(*y));
        movemask_epi32(words(a.cmp_eq(b)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &u32x4, y: &u32x4) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &u32x4, y: &u32x4) -> BitMask {
        movemask_epi32(words(bias_u32(x).cmp_gt(bias_u32(y))))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &u32x4, y: &u32x4) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &u32x4, y: &u32x4) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &u32x4, y: &u32x4) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &u32x4) -> BitMask {
        movemask_epi32(words(*vmask))
    }
}

// ==============================
// 64-bit lanes
// ==============================

#[derive(Debug, Default, Clone, Copy)]
pub struct Int64Processor;

impl FixedFilterProcessor for Int64Processor {
    type Filter = i64;
    type NullEmpty = i64;
    type Vector = i64x2;

    const LANES: usize = 2;

    #[inline(always)]
    fn load_value(&self, fill: i64) -> i64x2 {
        i64x2::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &i64x2, y: &i64x2) -> BitMask {
        movemask_epi64(words(x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &i64x2, y: &i64x2) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &i64x2, y: &i64x2) -> BitMask {
        movemask_epi64(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &i64x2, y: &i64x2) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &i64x2, y: &i64x2) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &i64x2, y: &i64x2) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &i64x2) -> BitMask {
        movemask_epi64(words(*vmask))
    }
}

#[inline(always)]
fn bias_u64(x: &u64x2) -> i64x2 {
    bytemuck::cast::<u64x2, i64x2>(*x) ^ i64x2::splat(i64::MIN)
}

#[derive(Debug, Default, Clone, Copy)]
pub struct UInt64Processor;

impl FixedFilterProcessor for UInt64Processor {
    type Filter = u64;
    type NullEmpty = u64;
    type Vector = u64x2;

    const LANES: usize = 2;

    #[inline(always)]
    fn load_value(&self, fill: u64) -> u64x2 {
        u64x2::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &u64x2, y: &u64x2) -> BitMask {
        let (a, b): (i64x2, i64x2) = (bytemuck::cast(*x), bytemuck::cast(*y));
        movemask_epi64(words(a.cmp_eq(b)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &u64x2, y: &u64x2) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &u64x2, y: &u64x2) -> BitMask {
        movemask_epi64(words(bias_u64(x).cmp_gt(bias_u64(y))))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &u64x2, y: &u64x2) -> BitMask {
        self.cmp_lt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &u64x2, y: &u64x2) -> BitMask {
        self.cmp_gt(y, x)
    }

    #[inline(always)]
    fn cmp_le(&self, x: &u64x2, y: &u64x2) -> BitMask {
        self.cmp_gt(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &u64x2) -> BitMask {
        movemask_epi64(words(*vmask))
    }
}

// ==============================
// Floats
// ==============================

#[derive(Debug, Default, Clone, Copy)]
pub struct Float32Processor;

impl FixedFilterProcessor for Float32Processor {
    type Filter = f32;
    type NullEmpty = i32;
    type Vector = f32x4;

    const LANES: usize = 4;

    // Splat the integer pattern and reinterpret: no float conversion touches
    // the sentinel bits.
    #[inline(always)]
    fn empty_null_load_value(&self, fill: i32) -> f32x4 {
        bytemuck::cast(Int32Processor.load_value(fill))
    }

    #[inline(always)]
    fn load_value(&self, fill: f32) -> f32x4 {
        f32x4::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(x.cmp_eq(*y)))
    }

    // Complement of eq, so unordered lanes count as "not equal".
    #[inline(always)]
    fn cmp_ne(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(!x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(x.cmp_ge(*y)))
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(x.cmp_lt(*y)))
    }

    #[inline(always)]
    fn cmp_le(&self, x: &f32x4, y: &f32x4) -> BitMask {
        movemask_epi32(words(x.cmp_le(*y)))
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &f32x4) -> BitMask {
        movemask_ps(words(*vmask))
    }

    #[inline(always)]
    fn null_empty_cmp_ne(&self, x: &f32x4, y: &f32x4) -> BitMask {
        Int32Processor.cmp_ne(&bytemuck::cast(*x), &bytemuck::cast(*y))
    }

    #[inline(always)]
    fn null_empty_cmp_eq(&self, x: &f32x4, y: &f32x4) -> BitMask {
        Int32Processor.cmp_eq(&bytemuck::cast(*x), &bytemuck::cast(*y))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Float64Processor;

impl FixedFilterProcessor for Float64Processor {
    type Filter = f64;
    type NullEmpty = i64;
    type Vector = f64x2;

    const LANES: usize = 2;

    #[inline(always)]
    fn empty_null_load_value(&self, fill: i64) -> f64x2 {
        bytemuck::cast(Int64Processor.load_value(fill))
    }

    #[inline(always)]
    fn load_value(&self, fill: f64) -> f64x2 {
        f64x2::splat(fill)
    }

    #[inline(always)]
    fn cmp_eq(&self, x: &f64x2, y: &f64x2) -> BitMask {
        movemask_epi64(words(x.cmp_eq(*y)))
    }

    #[inline(always)]
    fn cmp_ne(&self, x: &f64x2, y: &f64x2) -> BitMask {
        self.cmp_eq(x, y) ^ Self::FULL_MASK
    }

    #[inline(always)]
    fn cmp_gt(&self, x: &f64x2, y: &f64x2) -> BitMask {
        movemask_epi64(words(x.cmp_gt(*y)))
    }

    #[inline(always)]
    fn cmp_ge(&self, x: &f64x2, y: &f64x2) -> BitMask {
        movemask_epi64(words(x.cmp_ge(*y)))
    }

    #[inline(always)]
    fn cmp_lt(&self, x: &f64x2, y: &f64x2) -> BitMask {
        movemask_epi64(words(x.cmp_lt(*y)))
    }

    #[inline(always)]
    fn cmp_le(&self, x: &f64x2, y: &f64x2) -> BitMask {
        movemask_epi64(words(x.cmp_le(*y)))
    }

    #[inline(always)]
    fn convert_vector_to_bitmask(&self, vmask: &f64x2) -> BitMask {
        movemask_pd(words(*vmask))
    }

    #[inline(always)]
    fn null_empty_cmp_ne(&self, x: &f64x2, y: &f64x2) -> BitMask {
        Int64Processor.cmp_ne(&bytemuck::cast(*x), &bytemuck::cast(*y))
    }

    #[inline(always)]
    fn null_empty_cmp_eq(&self, x: &f64x2, y: &f64x2) -> BitMask {
        Int64Processor.cmp_eq(&bytemuck::cast(*x), &bytemuck::cast(*y))
    }
}

// ==============================
// Fallback
// ==============================

/// Stand-in for type combinations that can be spelled but are never valid
/// filters, such as 128-bit values or integers routed to the float register
/// shape. Borrows the register shape of `P`, so the lane type matches the
/// filter type the dispatch resolved; every relational comparator reports
/// all lanes true and `cmp_always_false` reports none, so a misrouted scan
/// keeps every row instead of silently dropping some.
#[derive(Debug, Default, Clone, Copy)]
pub struct DummyProcessor<P = Int32Processor>(P);

impl<P: FixedFilterProcessor> DummyProcessor<P> {
    #[inline(always)]
    fn cmp_dummy(&self) -> BitMask {
        Self::FULL_MASK
    }
}

impl<P: FixedFilterProcessor> FixedFilterProcessor for DummyProcessor<P> {
    type Filter = P::Filter;
    type NullEmpty = P::NullEmpty;
    type Vector = P::Vector;

    const LANES: usize = P::LANES;

    #[inline(always)]
    fn load_value(&self, fill: P::Filter) -> P::Vector {
        self.0.load_value(fill)
    }

    fn cmp_eq(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn cmp_ne(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn cmp_gt(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn cmp_ge(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn cmp_lt(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn cmp_le(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn convert_vector_to_bitmask(&self, vmask: &P::Vector) -> BitMask {
        self.0.convert_vector_to_bitmask(vmask)
    }

    fn null_empty_cmp_ne(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }

    fn null_empty_cmp_eq(&self, _x: &P::Vector, _y: &P::Vector) -> BitMask {
        self.cmp_dummy()
    }
}
