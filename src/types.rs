//! Column storage types and the lane element trait shared by both backends.
use bitvec::prelude::{BitArray, Lsb0};
use bytemuck::Pod;
use std::fmt::Debug;

/// Packed per-lane result of a fixed-width comparison. Bit `i` is lane `i`.
pub type BitMask = u16;

/// Lane-indexed result bits wide enough for the largest scalable register
/// (2048 bits of 8-bit lanes).
pub type LaneBits = BitArray<[u64; 4], Lsb0>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Integer,
    Float,
}

/// Fixed-width column storage types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageType {
    Int8,
    UInt8,
    Int16,
    UInt16,
    Int32,
    UInt32,
    Int64,
    UInt64,
    Int128,
    Float32,
    Float64,
}

impl StorageType {
    /// Width of one stored value in bytes.
    pub fn width(&self) -> usize {
        match self {
            StorageType::Int8 | StorageType::UInt8 => 1,
            StorageType::Int16 | StorageType::UInt16 => 2,
            StorageType::Int32 | StorageType::UInt32 | StorageType::Float32 => 4,
            StorageType::Int64 | StorageType::UInt64 | StorageType::Float64 => 8,
            StorageType::Int128 => 16,
        }
    }

    pub fn is_signed(&self) -> bool {
        !matches!(
            self,
            StorageType::UInt8 | StorageType::UInt16 | StorageType::UInt32 | StorageType::UInt64
        )
    }

    pub fn kind(&self) -> NumericKind {
        match self {
            StorageType::Float32 | StorageType::Float64 => NumericKind::Float,
            _ => NumericKind::Integer,
        }
    }

    /// Storage type of the values actually compared. Only `Int128` differs:
    /// it is filtered through a 64-bit proxy.
    pub fn comparison_type(&self) -> StorageType {
        match self {
            StorageType::Int128 => StorageType::Int64,
            other => *other,
        }
    }

    /// Lanes in one 128-bit fixed-width register of the comparison type.
    pub fn fixed_lanes(&self) -> usize {
        16 / self.comparison_type().width()
    }
}

/// An element type that can occupy a vector lane and be compared.
///
/// Implemented for every comparison type: the eight fixed-width integers and
/// the two IEEE floats. `Bits` is the same-width signed integer used for
/// bit-pattern (sentinel) comparisons.
pub trait Lane: Pod + Default + PartialOrd + Debug + Send + Sync {
    type Bits: Pod + Eq + Debug;

    const STORAGE: StorageType;

    fn bit_pattern(self) -> Self::Bits;
}

macro_rules! impl_integer_lane {
    ($($t:ty => $storage:ident),+ $(,)?) => {$(
        impl Lane for $t {
            type Bits = $t;

            const STORAGE: StorageType = StorageType::$storage;

            #[inline(always)]
            fn bit_pattern(self) -> $t {
                self
            }
        }
    )+};
}

impl_integer_lane!(
    i8 => Int8,
    u8 => UInt8,
    i16 => Int16,
    u16 => UInt16,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
);

impl Lane for f32 {
    type Bits = i32;

    const STORAGE: StorageType = StorageType::Float32;

    #[inline(always)]
    fn bit_pattern(self) -> i32 {
        bytemuck::cast(self)
    }
}

impl Lane for f64 {
    type Bits = i64;

    const STORAGE: StorageType = StorageType::Float64;

    #[inline(always)]
    fn bit_pattern(self) -> i64 {
        bytemuck::cast(self)
    }
}

/// `LaneBits` with the first `len` lanes set from `mask`.
#[inline]
pub fn lane_bits_from_mask(mask: u64, len: usize) -> LaneBits {
    let keep = if len >= 64 { u64::MAX } else { (1u64 << len) - 1 };
    LaneBits::new([mask & keep, 0, 0, 0])
}
