//! Build-time selection of register shape, comparison type and processor.
//!
//! A column is described by its storage type plus a kind marker
//! ([`Integral`] or [`Float`]). [`StorageDispatch`] maps that pair to the
//! fixed-width register shape, the comparison (filter) type and the scalable
//! processor; [`SelectFixed`] then maps the register shape and filter type to
//! a fixed-width processor. Everything resolves through trait impls, so a
//! scan loop generic over `T` and `K` contains no type branch, and a pair
//! without an impl is a compile error.
//!
//! Some pairs can be spelled but must never filter anything: a 128-bit
//! register, or an integer filter in the `f32` register shape. Those select
//! [`DummyProcessor`].
use crate::fixed::{
    DummyProcessor, FixedFilterProcessor, Float32Processor, Float64Processor, Int8Processor,
    Int16Processor, Int32Processor, Int64Processor, UInt8Processor, UInt16Processor,
    UInt32Processor, UInt64Processor,
};
use crate::scalable::{Int128ScalableProcessor, ScalableFilter, ScalableFilterProcessor};
use crate::types::{Lane, StorageType};

/// Kind marker: the column holds integers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Integral;

/// Kind marker: the column is filtered as floating point.
#[derive(Debug, Default, Clone, Copy)]
pub struct Float;

// Fixed-width register shapes.
#[derive(Debug, Default, Clone, Copy)]
pub struct I8x16Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct U8x16Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct I16x8Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct U16x8Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct I32x4Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct U32x4Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct I64x2Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct U64x2Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct F32x4Reg;
#[derive(Debug, Default, Clone, Copy)]
pub struct F64x2Reg;
/// A whole 128-bit value in one register. No lane-wise compare exists.
#[derive(Debug, Default, Clone, Copy)]
pub struct Int128Reg;

/// Storage type `Self` filtered as kind `K`.
pub trait StorageDispatch<K> {
    type Filter: Lane;
    type Register;
    type Scalable: ScalableFilter<Filter = Self::Filter>;

    const STORAGE: StorageType;
}

/// Fixed-width processor for register shape `Self` checked against values
/// of type `Check`.
pub trait SelectFixed<Check> {
    type Processor: FixedFilterProcessor;
}

pub type FixedProcessorOf<T, K> = <<T as StorageDispatch<K>>::Register as SelectFixed<
    <T as StorageDispatch<K>>::Filter,
>>::Processor;

pub type ScalableProcessorOf<T, K> = <T as StorageDispatch<K>>::Scalable;

pub type FilterOf<T, K> = <T as StorageDispatch<K>>::Filter;

macro_rules! dispatch_lanes {
    ($($t:ty, $kind:ty => $filter:ty, $reg:ty, $storage:ident);+ $(;)?) => {$(
        impl StorageDispatch<$kind> for $t {
            type Filter = $filter;
            type Register = $reg;
            type Scalable = ScalableFilterProcessor<$filter>;

            const STORAGE: StorageType = StorageType::$storage;
        }
    )+};
}

dispatch_lanes!(
    i8, Integral => i8, I8x16Reg, Int8;
    u8, Integral => u8, U8x16Reg, UInt8;
    i16, Integral => i16, I16x8Reg, Int16;
    u16, Integral => u16, U16x8Reg, UInt16;
    i32, Integral => i32, I32x4Reg, Int32;
    u32, Integral => u32, U32x4Reg, UInt32;
    i64, Integral => i64, I64x2Reg, Int64;
    u64, Integral => u64, U64x2Reg, UInt64;
    f32, Float => f32, F32x4Reg, Float32;
    f64, Float => f64, F64x2Reg, Float64;
    // Float columns whose values arrive as raw same-width integers.
    i32, Float => f32, F32x4Reg, Float32;
    i64, Float => f64, F64x2Reg, Float64;
);

impl StorageDispatch<Integral> for i128 {
    type Filter = i64;
    type Register = Int128Reg;
    type Scalable = Int128ScalableProcessor;

    const STORAGE: StorageType = StorageType::Int128;
}

macro_rules! select_fixed {
    ($($reg:ty, $check:ty => $proc:ty);+ $(;)?) => {$(
        impl SelectFixed<$check> for $reg {
            type Processor = $proc;
        }
    )+};
}

select_fixed!(
    I8x16Reg, i8 => Int8Processor;
    U8x16Reg, u8 => UInt8Processor;
    I16x8Reg, i16 => Int16Processor;
    U16x8Reg, u16 => UInt16Processor;
    I32x4Reg, i32 => Int32Processor;
    U32x4Reg, u32 => UInt32Processor;
    I64x2Reg, i64 => Int64Processor;
    U64x2Reg, u64 => UInt64Processor;
    F32x4Reg, f32 => Float32Processor;
    F64x2Reg, f64 => Float64Processor;
    // 128-bit values filter through their i64 proxy, same as the scalable path.
    Int128Reg, i64 => DummyProcessor<Int64Processor>;
    F32x4Reg, i8 => DummyProcessor<Int8Processor>;
    F32x4Reg, u8 => DummyProcessor<UInt8Processor>;
    F32x4Reg, i16 => DummyProcessor<Int16Processor>;
    F32x4Reg, u16 => DummyProcessor<UInt16Processor>;
    F32x4Reg, i32 => DummyProcessor<Int32Processor>;
    F32x4Reg, u32 => DummyProcessor<UInt32Processor>;
    F32x4Reg, i64 => DummyProcessor<Int64Processor>;
    F32x4Reg, u64 => DummyProcessor<UInt64Processor>;
);

/// Storage type that `T` resolves to under kind `K`.
pub fn storage_of<T: StorageDispatch<K>, K>() -> StorageType {
    T::STORAGE
}
