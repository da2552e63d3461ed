pub mod common;
pub mod completions;
pub mod export;
pub mod get;
pub mod import;
pub mod keys;
pub mod reset;
pub mod set;
pub mod show;
