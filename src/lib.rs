pub mod changelog;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod pager;
pub mod render;
pub mod ui;
pub mod warnings;

pub use error::{ChangelogError, Result};
