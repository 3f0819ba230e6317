//! Terminal output for the `smartlife` binary. Not part of the library API.

pub mod print;
