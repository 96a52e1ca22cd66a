//! Logging macros gated by a module-level `ENABLE_LOGS` switch.
//!
//! A module opts in by declaring the flag next to its imports:
//! ```ignore
//! const ENABLE_LOGS: bool = true;
//!
//! use crate::{log_info, log_warn};
//!
//! log_info!("history restored with {} records", 12);
//! ```
//!
//! Flipping the flag to `false` silences that module without touching
//! `RUST_LOG`, which is handy for the chatty read paths.

/// Info-level log line, emitted only when the calling module's
/// `ENABLE_LOGS` is `true`.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::info!($($arg)*);
        }
    };
}

/// Warn-level variant. Storage fallbacks report through this one.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::warn!($($arg)*);
        }
    };
}

/// Error-level variant, for storage writes that leave memory and disk apart.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        if ENABLE_LOGS {
            log::error!($($arg)*);
        }
    };
}
