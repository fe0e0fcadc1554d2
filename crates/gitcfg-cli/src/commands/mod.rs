//! Command implementations for gitcfg-cli

pub mod get;
pub mod list;
pub mod set;

pub use get::run_get;
pub use list::run_list;
pub use set::run_set;
