//! Register width of the scalable backend.
//!
//! On aarch64 builds with the `sve` target feature the width is read from
//! the hardware on every query. Everywhere else it is emulated: a per-thread
//! setting (hardware vector length is per-thread state too) that defaults to
//! 256 bits and may be changed with [`VectorLength::install`] or from the
//! `COLSCAN_VECTOR_BITS` environment variable.
use crate::error::ConfigError;
use std::cell::Cell;

pub const MIN_VECTOR_BITS: usize = 128;
pub const MAX_VECTOR_BITS: usize = 2048;
pub const DEFAULT_VECTOR_BITS: usize = 256;
pub const VECTOR_BITS_ENV: &str = "COLSCAN_VECTOR_BITS";

thread_local! {
    static VECTOR_BYTES: Cell<usize> = const { Cell::new(DEFAULT_VECTOR_BITS / 8) };
}

/// A validated scalable register width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VectorLength {
    bits: usize,
}

impl Default for VectorLength {
    fn default() -> Self {
        Self {
            bits: DEFAULT_VECTOR_BITS,
        }
    }
}

impl VectorLength {
    /// Width in bits; must be a multiple of 128 within 128..=2048.
    pub fn from_bits(bits: usize) -> Result<Self, ConfigError> {
        if !(MIN_VECTOR_BITS..=MAX_VECTOR_BITS).contains(&bits) || bits % MIN_VECTOR_BITS != 0 {
            return Err(ConfigError::InvalidVectorLength { bits });
        }
        Ok(Self { bits })
    }

    /// Read `COLSCAN_VECTOR_BITS`. An unset variable yields the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(VECTOR_BITS_ENV) {
            Ok(raw) => {
                let bits = raw.trim().parse::<usize>().map_err(|e| {
                    ConfigError::ParseError(format!("{VECTOR_BITS_ENV}={raw:?}: {e}"))
                })?;
                log::debug!("{VECTOR_BITS_ENV} requests {bits}-bit vectors");
                Self::from_bits(bits)
            }
            Err(_) => Ok(Self::default()),
        }
    }

    pub fn bits(&self) -> usize {
        self.bits
    }

    pub fn bytes(&self) -> usize {
        self.bits / 8
    }

    /// Use this width for scalable processors on the calling thread.
    pub fn install(self) {
        log::debug!("installing {}-bit scalable vector length", self.bits);
        VECTOR_BYTES.with(|vb| vb.set(self.bytes()));
    }

    /// Width currently in effect on the calling thread.
    pub fn current() -> Self {
        Self {
            bits: vector_bytes() * 8,
        }
    }
}

/// Bytes in one scalable register.
#[cfg(all(target_arch = "aarch64", target_feature = "sve"))]
#[inline(always)]
pub fn vector_bytes() -> usize {
    let bytes: usize;
    // The hardware width may be changed per thread, so this is not `pure`.
    unsafe {
        std::arch::asm!("cntb {}", out(reg) bytes, options(nomem, nostack));
    }
    bytes
}

/// Bytes in one scalable register.
#[cfg(not(all(target_arch = "aarch64", target_feature = "sve")))]
#[inline(always)]
pub fn vector_bytes() -> usize {
    VECTOR_BYTES.with(|vb| vb.get())
}
