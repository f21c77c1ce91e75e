pub mod boundary;
pub mod changelog;
pub mod cli;
pub mod config;
pub mod conventional;
pub mod domain;
pub mod error;
pub mod git;
pub mod history;
pub mod ui;
pub mod version;

pub use error::{ChangelogError, Result};
