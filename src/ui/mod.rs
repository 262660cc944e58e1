//! User interface module - diagnostics shown around the report.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - [crate::pager] - Interactive paging of the report itself

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_status, display_usage, display_warning, format_error, format_status,
    format_warning, USAGE,
};
