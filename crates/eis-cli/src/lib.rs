//! Shared pieces of the import CLI that are useful under test.

pub mod logging;
