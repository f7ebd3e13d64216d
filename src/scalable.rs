//! Scalable, predicate-driven filter processors.
//!
//! The lane count of this model is only known at run time
//! ([`ScalableFilter::step_length`]), and every operation is governed by an
//! [`ActiveLanes`] predicate. Inactive lanes are never read from memory,
//! never written, and never reported as satisfying a comparison, which is
//! what lets a column tail be processed without padding.
use crate::types::{Lane, LaneBits};
use crate::vector_length::{MAX_VECTOR_BITS, vector_bytes};
use std::fmt;
use std::marker::PhantomData;

const MAX_VECTOR_WORDS: usize = MAX_VECTOR_BITS / 64;

/// A scalable register of `T` lanes.
///
/// Storage always covers the architectural maximum; only the first
/// `step_length()` lanes are meaningful.
pub struct ScalableVector<T> {
    raw: [u64; MAX_VECTOR_WORDS],
    _lane: PhantomData<T>,
}

impl<T> Clone for ScalableVector<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalableVector<T> {}

impl<T: Lane> ScalableVector<T> {
    pub fn zeroed() -> Self {
        Self {
            raw: [0; MAX_VECTOR_WORDS],
            _lane: PhantomData,
        }
    }

    /// Every lane the storage can hold, live or not.
    #[inline(always)]
    pub fn lanes(&self) -> &[T] {
        bytemuck::cast_slice(&self.raw)
    }

    #[inline(always)]
    pub fn lanes_mut(&mut self) -> &mut [T] {
        bytemuck::cast_slice_mut(&mut self.raw)
    }

    #[inline(always)]
    pub fn lane(&self, i: usize) -> T {
        self.lanes()[i]
    }
}

impl<T: Lane> fmt::Debug for ScalableVector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = vector_bytes() / std::mem::size_of::<T>();
        f.debug_list().entries(&self.lanes()[..step]).finish()
    }
}

/// Active-lane predicate for registers of `T`.
///
/// Bit `i` governs lane `i`. The element type parameter keeps a predicate
/// built for one lane width from being handed to a processor of another.
pub struct ActiveLanes<T> {
    bits: LaneBits,
    _lane: PhantomData<T>,
}

impl<T> Clone for ActiveLanes<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ActiveLanes<T> {}

impl<T> PartialEq for ActiveLanes<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T> Eq for ActiveLanes<T> {}

impl<T> fmt::Debug for ActiveLanes<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.bits.iter_ones()).finish()
    }
}

#[inline(always)]
fn zip_words(a: LaneBits, b: LaneBits, op: impl Fn(u64, u64) -> u64) -> LaneBits {
    let (a, b) = (a.into_inner(), b.into_inner());
    LaneBits::new(std::array::from_fn(|w| op(a[w], b[w])))
}

impl<T> ActiveLanes<T> {
    pub fn none() -> Self {
        Self::from_bits(LaneBits::new([0; 4]))
    }

    pub fn from_bits(bits: LaneBits) -> Self {
        Self {
            bits,
            _lane: PhantomData,
        }
    }

    pub fn bits(&self) -> LaneBits {
        self.bits
    }

    #[inline(always)]
    pub fn is_active(&self, lane: usize) -> bool {
        self.bits.get(lane).is_some_and(|b| *b)
    }

    #[inline(always)]
    pub fn set(&mut self, lane: usize, active: bool) {
        self.bits.set(lane, active);
    }

    pub fn iter_active(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn any(&self) -> bool {
        self.bits.any()
    }

    /// `self & other`, zeroed outside `pg`.
    pub fn and(&self, other: &Self, pg: &Self) -> Self {
        let both = zip_words(self.bits, other.bits, |a, b| a & b);
        Self::from_bits(zip_words(both, pg.bits, |a, g| a & g))
    }

    /// `self | other`, zeroed outside `pg`.
    pub fn or(&self, other: &Self, pg: &Self) -> Self {
        let either = zip_words(self.bits, other.bits, |a, b| a | b);
        Self::from_bits(zip_words(either, pg.bits, |a, g| a & g))
    }

    /// `self ^ other`, zeroed outside `pg`.
    pub fn eor(&self, other: &Self, pg: &Self) -> Self {
        let diff = zip_words(self.bits, other.bits, |a, b| a ^ b);
        Self::from_bits(zip_words(diff, pg.bits, |a, g| a & g))
    }
}

impl<T: Lane> ActiveLanes<T> {
    /// Every lane of the current vector length.
    pub fn all_true() -> Self {
        let step = vector_bytes() / std::mem::size_of::<T>();
        let mut pg = Self::none();
        pg.bits[..step].fill(true);
        pg
    }

    pub fn all_false() -> Self {
        Self::none()
    }
}

/// Operation set of a predicated processor.
///
/// Comparisons take a scalar threshold which is broadcast into the active
/// lanes. Only the six relational comparators and the sentinel check are
/// type specific; the rest is shared.
pub trait ScalableFilter: Copy + Default + Send + Sync {
    type Filter: Lane;

    /// Lanes per register for this element width. The register width is
    /// re-read on every call.
    #[inline(always)]
    fn step_length(&self) -> usize {
        vector_bytes() / std::mem::size_of::<Self::Filter>()
    }

    /// Lane `i` is active iff `from + i < to`.
    fn get_range_predication(&self, from: usize, to: usize) -> ActiveLanes<Self::Filter> {
        let live = self.step_length().min(to.saturating_sub(from));
        let mut pg = ActiveLanes::none();
        pg.bits[..live].fill(true);
        pg
    }

    /// Exactly lane `i` active.
    fn get_single_predication(&self, i: usize) -> ActiveLanes<Self::Filter> {
        let upto = self.get_range_predication(0, i.saturating_add(1));
        let below = self.get_range_predication(0, i);
        upto.eor(&below, &upto)
    }

    fn load_value(&self, pg: &ActiveLanes<Self::Filter>, fill: Self::Filter) -> ScalableVector<Self::Filter> {
        let mut v = ScalableVector::zeroed();
        let lanes = v.lanes_mut();
        for i in pg.iter_active() {
            if let Some(lane) = lanes.get_mut(i) {
                *lane = fill;
            }
        }
        v
    }

    /// Dense load of the active lanes of `src`; inactive lanes are zero and
    /// their addresses are not touched.
    fn load_from(&self, pg: &ActiveLanes<Self::Filter>, src: &[Self::Filter]) -> ScalableVector<Self::Filter> {
        let mut v = ScalableVector::zeroed();
        let lanes = v.lanes_mut();
        for i in pg.iter_active() {
            if let Some(lane) = lanes.get_mut(i) {
                *lane = src[i];
            }
        }
        v
    }

    /// Lane `i` = `base[indices[i]]` for active lanes.
    fn load_from_index(
        &self,
        pg: &ActiveLanes<Self::Filter>,
        base: &[Self::Filter],
        indices: &[u16],
    ) -> ScalableVector<Self::Filter> {
        let mut v = ScalableVector::zeroed();
        let lanes = v.lanes_mut();
        for i in pg.iter_active() {
            if let Some(lane) = lanes.get_mut(i) {
                *lane = base[indices[i] as usize];
            }
        }
        v
    }

    fn cmp_eq(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;
    fn cmp_ne(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;
    fn cmp_gt(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;
    fn cmp_ge(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;
    fn cmp_lt(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;
    fn cmp_le(&self, pg: &ActiveLanes<Self::Filter>, x: &ScalableVector<Self::Filter>, y: Self::Filter) -> ActiveLanes<Self::Filter>;

    /// Active lanes whose bit pattern differs from `y`'s. Floats are compared
    /// as same-width integers, so NaN-shaped sentinels match themselves.
    fn null_empty_cmp_ne(
        &self,
        pg: &ActiveLanes<Self::Filter>,
        x: &ScalableVector<Self::Filter>,
        y: Self::Filter,
    ) -> ActiveLanes<Self::Filter> {
        let y = y.bit_pattern();
        compare_lanes(pg, x, |v| v.bit_pattern() != y)
    }

    fn cmp_always_true(
        &self,
        pg: &ActiveLanes<Self::Filter>,
        _x: &ScalableVector<Self::Filter>,
        _y: Self::Filter,
    ) -> ActiveLanes<Self::Filter> {
        *pg
    }

    fn cmp_always_false(
        &self,
        _pg: &ActiveLanes<Self::Filter>,
        _x: &ScalableVector<Self::Filter>,
        _y: Self::Filter,
    ) -> ActiveLanes<Self::Filter> {
        ActiveLanes::none()
    }

    fn test_any(&self, pg: &ActiveLanes<Self::Filter>, result: &ActiveLanes<Self::Filter>) -> bool {
        result.and(pg, pg).any()
    }

    /// Write the active lanes of `x` to `dst`; other slots keep their value.
    fn store(&self, pg: &ActiveLanes<Self::Filter>, dst: &mut [Self::Filter], x: &ScalableVector<Self::Filter>) {
        let lanes = x.lanes();
        for i in pg.iter_active() {
            if let Some(lane) = lanes.get(i) {
                dst[i] = *lane;
            }
        }
    }

    fn count_elements(&self, pg: &ActiveLanes<Self::Filter>) -> usize {
        pg.count()
    }
}

#[inline(always)]
fn compare_lanes<T: Lane>(
    pg: &ActiveLanes<T>,
    x: &ScalableVector<T>,
    pred: impl Fn(T) -> bool,
) -> ActiveLanes<T> {
    let lanes = x.lanes();
    let mut out = ActiveLanes::none();
    for i in pg.iter_active() {
        if lanes.get(i).is_some_and(|v| pred(*v)) {
            out.set(i, true);
        }
    }
    out
}

/// Predicated processor for one comparison type.
pub struct ScalableFilterProcessor<T>(PhantomData<T>);

impl<T> fmt::Debug for ScalableFilterProcessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ScalableFilterProcessor<{}>", std::any::type_name::<T>())
    }
}

impl<T> Default for ScalableFilterProcessor<T> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<T> Clone for ScalableFilterProcessor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ScalableFilterProcessor<T> {}

impl<T: Lane> ScalableFilter for ScalableFilterProcessor<T> {
    type Filter = T;

    fn cmp_eq(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v == y)
    }

    fn cmp_ne(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v != y)
    }

    fn cmp_gt(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v > y)
    }

    fn cmp_ge(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v >= y)
    }

    fn cmp_lt(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v < y)
    }

    fn cmp_le(&self, pg: &ActiveLanes<T>, x: &ScalableVector<T>, y: T) -> ActiveLanes<T> {
        compare_lanes(pg, x, |v| v <= y)
    }
}

/// 128-bit storage filtered through its 64-bit proxy.
///
/// Wide values are never compared lane-wise: every relational comparator
/// returns the governing predicate unchanged and the scan keeps the row.
/// The sentinel check still compares proxy bit patterns.
#[derive(Debug, Default, Clone, Copy)]
pub struct Int128ScalableProcessor;

impl ScalableFilter for Int128ScalableProcessor {
    type Filter = i64;

    fn cmp_eq(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }

    fn cmp_ne(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }

    fn cmp_gt(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }

    fn cmp_ge(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }

    fn cmp_lt(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }

    fn cmp_le(&self, pg: &ActiveLanes<i64>, _x: &ScalableVector<i64>, _y: i64) -> ActiveLanes<i64> {
        *pg
    }
}
