pub mod collation;
pub mod dispatch;
pub mod error;
pub mod fixed;
pub mod kernel;
pub mod masked_store;
pub mod movemask;
pub mod prelude;
pub mod scalable;
pub mod sentinel;
pub mod string_prefix;
pub mod types;
pub mod vector_length;

pub use crate::error::ConfigError;
pub use crate::kernel::{CmpOp, KernelOf, ScanKernel};
pub use crate::types::{BitMask, LaneBits, StorageType};
