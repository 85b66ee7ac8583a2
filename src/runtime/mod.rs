/// The data structures the virtual machine is built from.
pub mod data_structures;

/// Module for defining the built-in native words that make up the calculator's vocabulary.
pub mod built_ins;

/// Module for defining the faults raised while tokenizing and executing input.
pub mod error;

/// Module for the virtual machine itself.
pub mod interpreter;
