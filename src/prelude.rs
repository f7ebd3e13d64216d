//! Convenient re-exports for common types and functions
//!
//! Import everything you typically need with:
//! `use colscan::prelude::*;`.

// Processor contracts and the shared scan contract
pub use crate::fixed::FixedFilterProcessor;
pub use crate::kernel::{CmpOp, Fixed, KernelOf, Scalable, ScanKernel};
pub use crate::scalable::{ActiveLanes, ScalableFilter, ScalableVector};

// Build-time type dispatch
pub use crate::dispatch::{
    FilterOf, Float, FixedProcessorOf, Integral, ScalableProcessorOf, StorageDispatch,
};

// Data model
pub use crate::sentinel::Sentinel;
pub use crate::types::{BitMask, Lane, LaneBits, StorageType};

// Configuration
pub use crate::error::ConfigError;
pub use crate::vector_length::VectorLength;

// String prefixes
pub use crate::collation::Collation;
pub use crate::string_prefix::{encode, encode_or_null_sentinel};
