//! Command implementations.

pub mod scan;

pub use self::scan::{execute_scan, run_scan};
