/// Module for managing source text and turning it into tokens.
pub mod lang;

/// Module for the virtual machine, its vocabulary, and the faults it can raise.
#[macro_use]
pub mod runtime;
