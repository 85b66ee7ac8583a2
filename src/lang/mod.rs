/// Module for tracking where in the input each token was found.
pub mod source_location;

/// Module for turning raw input text into a list of tokens for the virtual machine to execute.
pub mod tokenizing;
