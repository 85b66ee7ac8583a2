/// The integer stack the virtual machine operates on.
pub mod operand_stack;

/// The vocabulary of words known to the virtual machine, and the information kept for each word.
pub mod dictionary;
