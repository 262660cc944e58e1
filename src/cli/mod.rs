//! Command-line workflow, independent of argument parsing

pub mod orchestration;

pub use orchestration::{
    run_generate, run_with_source, select_format, FormatFlags, GenerateArgs, GenerateSummary,
};
