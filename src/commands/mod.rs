pub mod check;

pub use check::{CheckOptions, run_check, run_check_impl, run_patterns};
