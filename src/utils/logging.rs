//! Conditional logging macros gated on a module-level `ENABLE_LOGS` flag.
//!
//! Each module that uses them declares its own flag:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_info, log_warn};
//! ```
//! The macros are exported at the crate root.

/// Info-level logging, gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level logging, gated on the calling module's `ENABLE_LOGS` const.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}
