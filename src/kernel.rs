//! One contract over both backends.
//!
//! [`ScanKernel`] is what a generic scan loop programs against: a lane count
//! and a batch-level `select`. [`Fixed`] adapts a fixed-width processor
//! (padding the tail batch), [`Scalable`] adapts a predicated one (masking
//! the tail). [`KernelOf`] picks the backend at build time through the
//! `scalable` cargo feature.
use crate::fixed::FixedFilterProcessor;
use crate::scalable::ScalableFilter;
use crate::types::{Lane, LaneBits, lane_bits_from_mask};
use bitvec::prelude::{BitVec, Lsb0};

const FIXED_MAX_LANES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmpOp {
    Eq,
    Neq,
    Lt,
    Lte,
    Gt,
    Gte,
    AlwaysTrue,
    AlwaysFalse,
}

impl CmpOp {
    pub const RELATIONAL: [CmpOp; 6] = [
        CmpOp::Eq,
        CmpOp::Neq,
        CmpOp::Lt,
        CmpOp::Lte,
        CmpOp::Gt,
        CmpOp::Gte,
    ];

    /// Scalar reference semantics of the operator.
    pub fn eval<T: PartialOrd>(&self, value: T, threshold: T) -> bool {
        match self {
            CmpOp::Eq => value == threshold,
            CmpOp::Neq => value != threshold,
            CmpOp::Lt => value < threshold,
            CmpOp::Lte => value <= threshold,
            CmpOp::Gt => value > threshold,
            CmpOp::Gte => value >= threshold,
            CmpOp::AlwaysTrue => true,
            CmpOp::AlwaysFalse => false,
        }
    }
}

pub trait ScanKernel: Default + Copy + Send + Sync {
    type Filter: Lane;

    const BACKEND: &'static str;

    fn step_length(&self) -> usize;

    /// Lanes of `values[..min(len, step_length)]` for which
    /// `value <op> threshold` holds. Bits past the batch are clear.
    fn select(&self, values: &[Self::Filter], op: CmpOp, threshold: Self::Filter) -> LaneBits;

    /// Lanes whose bit pattern differs from `sentinel`.
    fn select_not_sentinel(&self, values: &[Self::Filter], sentinel: Self::Filter) -> LaneBits;

    /// Row bitmap of a whole column, one `select` per batch.
    fn scan(&self, column: &[Self::Filter], op: CmpOp, threshold: Self::Filter) -> BitVec<u64, Lsb0> {
        scan_batches(self.step_length(), column, |batch| {
            self.select(batch, op, threshold)
        })
    }

    /// Row bitmap of the values that are not `sentinel`.
    fn scan_not_sentinel(&self, column: &[Self::Filter], sentinel: Self::Filter) -> BitVec<u64, Lsb0> {
        scan_batches(self.step_length(), column, |batch| {
            self.select_not_sentinel(batch, sentinel)
        })
    }
}

fn scan_batches<T>(
    step: usize,
    column: &[T],
    select: impl Fn(&[T]) -> LaneBits,
) -> BitVec<u64, Lsb0> {
    let mut rows = BitVec::with_capacity(column.len());
    for batch in column.chunks(step.max(1)) {
        let hits = select(batch);
        rows.extend_from_bitslice(&hits[..batch.len()]);
    }
    rows
}

/// Fixed-width backend behind [`ScanKernel`].
#[derive(Debug, Clone, Copy)]
pub struct Fixed<P>(pub P);

impl<P: FixedFilterProcessor> Fixed<P> {
    pub fn new() -> Self {
        log::trace!("fixed-width kernel over {}", std::any::type_name::<P>());
        Self(P::default())
    }

    // Short batches are padded with zero lanes; their bits are dropped.
    #[inline(always)]
    fn load_batch(&self, values: &[P::Filter]) -> (P::Vector, usize) {
        let len = values.len().min(P::LANES);
        let mut buf = [P::Filter::default(); FIXED_MAX_LANES];
        buf[..len].copy_from_slice(&values[..len]);
        (self.0.load_from(&buf[..P::LANES]), len)
    }
}

impl<P: FixedFilterProcessor> Default for Fixed<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: FixedFilterProcessor> ScanKernel for Fixed<P> {
    type Filter = P::Filter;

    const BACKEND: &'static str = "fixed";

    fn step_length(&self) -> usize {
        P::LANES
    }

    fn select(&self, values: &[P::Filter], op: CmpOp, threshold: P::Filter) -> LaneBits {
        let (x, len) = self.load_batch(values);
        let y = self.0.load_value(threshold);
        let mask = match op {
            CmpOp::Eq => self.0.cmp_eq(&x, &y),
            CmpOp::Neq => self.0.cmp_ne(&x, &y),
            CmpOp::Lt => self.0.cmp_lt(&x, &y),
            CmpOp::Lte => self.0.cmp_le(&x, &y),
            CmpOp::Gt => self.0.cmp_gt(&x, &y),
            CmpOp::Gte => self.0.cmp_ge(&x, &y),
            CmpOp::AlwaysTrue => self.0.cmp_always_true(&x, &y),
            CmpOp::AlwaysFalse => self.0.cmp_always_false(&x, &y),
        };
        lane_bits_from_mask(mask as u64, len)
    }

    fn select_not_sentinel(&self, values: &[P::Filter], sentinel: P::Filter) -> LaneBits {
        let (x, len) = self.load_batch(values);
        let y = self.0.empty_null_load_value(bytemuck::cast(sentinel));
        lane_bits_from_mask(self.0.null_empty_cmp_ne(&x, &y) as u64, len)
    }
}

/// Predicated backend behind [`ScanKernel`].
#[derive(Debug, Clone, Copy)]
pub struct Scalable<P>(pub P);

impl<P: ScalableFilter> Scalable<P> {
    pub fn new() -> Self {
        log::trace!("scalable kernel over {}", std::any::type_name::<P>());
        Self(P::default())
    }
}

impl<P: ScalableFilter> Default for Scalable<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ScalableFilter> ScanKernel for Scalable<P> {
    type Filter = P::Filter;

    const BACKEND: &'static str = "scalable";

    fn step_length(&self) -> usize {
        self.0.step_length()
    }

    fn select(&self, values: &[P::Filter], op: CmpOp, threshold: P::Filter) -> LaneBits {
        let pg = self.0.get_range_predication(0, values.len());
        let x = self.0.load_from(&pg, values);
        let hits = match op {
            CmpOp::Eq => self.0.cmp_eq(&pg, &x, threshold),
            CmpOp::Neq => self.0.cmp_ne(&pg, &x, threshold),
            CmpOp::Lt => self.0.cmp_lt(&pg, &x, threshold),
            CmpOp::Lte => self.0.cmp_le(&pg, &x, threshold),
            CmpOp::Gt => self.0.cmp_gt(&pg, &x, threshold),
            CmpOp::Gte => self.0.cmp_ge(&pg, &x, threshold),
            CmpOp::AlwaysTrue => self.0.cmp_always_true(&pg, &x, threshold),
            CmpOp::AlwaysFalse => self.0.cmp_always_false(&pg, &x, threshold),
        };
        hits.bits()
    }

    fn select_not_sentinel(&self, values: &[P::Filter], sentinel: P::Filter) -> LaneBits {
        let pg = self.0.get_range_predication(0, values.len());
        let x = self.0.load_from(&pg, values);
        self.0.null_empty_cmp_ne(&pg, &x, sentinel).bits()
    }
}

#[cfg(not(feature = "scalable"))]
pub type KernelOf<T, K> = Fixed<crate::dispatch::FixedProcessorOf<T, K>>;

#[cfg(feature = "scalable")]
pub type KernelOf<T, K> = Scalable<crate::dispatch::ScalableProcessorOf<T, K>>;
