//! mockall doubles of the store traits for handler and engine tests.
pub mod repositories;
