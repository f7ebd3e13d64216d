//! NULL and EMPTY marker values stored in-band in fixed-width columns.
//!
//! Signed integers reserve the two most negative encodings, unsigned
//! integers the two largest. Float sentinels are NaN payloads, so they must
//! be recognized by bit pattern: `FLOAT_NULL != FLOAT_NULL` under IEEE rules.

pub const TINYINT_NULL: i8 = i8::MIN;
pub const TINYINT_EMPTY: i8 = i8::MIN + 1;
pub const SMALLINT_NULL: i16 = i16::MIN;
pub const SMALLINT_EMPTY: i16 = i16::MIN + 1;
pub const INT_NULL: i32 = i32::MIN;
pub const INT_EMPTY: i32 = i32::MIN + 1;
pub const BIGINT_NULL: i64 = i64::MIN;
pub const BIGINT_EMPTY: i64 = i64::MIN + 1;
pub const WIDEINT_NULL: i128 = i128::MIN;
pub const WIDEINT_EMPTY: i128 = i128::MIN + 1;

pub const UTINYINT_NULL: u8 = 0xFE;
pub const UTINYINT_EMPTY: u8 = 0xFF;
pub const USMALLINT_NULL: u16 = 0xFFFE;
pub const USMALLINT_EMPTY: u16 = 0xFFFF;
pub const UINT_NULL: u32 = 0xFFFF_FFFE;
pub const UINT_EMPTY: u32 = 0xFFFF_FFFF;
pub const UBIGINT_NULL: u64 = 0xFFFF_FFFF_FFFF_FFFE;
pub const UBIGINT_EMPTY: u64 = 0xFFFF_FFFF_FFFF_FFFF;

pub const FLOAT_NULL_BITS: u32 = 0xFFAA_AAAA;
pub const FLOAT_EMPTY_BITS: u32 = 0xFFAA_AAAB;
pub const DOUBLE_NULL_BITS: u64 = 0xFFFA_AAAA_AAAA_AAAA;
pub const DOUBLE_EMPTY_BITS: u64 = 0xFFFA_AAAA_AAAA_AAAB;

/// Storage types that carry NULL / EMPTY markers.
pub trait Sentinel: Copy {
    fn null() -> Self;
    fn empty() -> Self;
}

macro_rules! impl_sentinel {
    ($($t:ty => ($null:expr, $empty:expr)),+ $(,)?) => {$(
        impl Sentinel for $t {
            #[inline(always)]
            fn null() -> Self {
                $null
            }

            #[inline(always)]
            fn empty() -> Self {
                $empty
            }
        }
    )+};
}

impl_sentinel!(
    i8 => (TINYINT_NULL, TINYINT_EMPTY),
    i16 => (SMALLINT_NULL, SMALLINT_EMPTY),
    i32 => (INT_NULL, INT_EMPTY),
    i64 => (BIGINT_NULL, BIGINT_EMPTY),
    i128 => (WIDEINT_NULL, WIDEINT_EMPTY),
    u8 => (UTINYINT_NULL, UTINYINT_EMPTY),
    u16 => (USMALLINT_NULL, USMALLINT_EMPTY),
    u32 => (UINT_NULL, UINT_EMPTY),
    u64 => (UBIGINT_NULL, UBIGINT_EMPTY),
    f32 => (f32::from_bits(FLOAT_NULL_BITS), f32::from_bits(FLOAT_EMPTY_BITS)),
    f64 => (f64::from_bits(DOUBLE_NULL_BITS), f64::from_bits(DOUBLE_EMPTY_BITS)),
);
