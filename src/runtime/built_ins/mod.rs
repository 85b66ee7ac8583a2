use crate::runtime::data_structures::dictionary::Dictionary;

/// Words that rearrange the values on the stack.
pub mod stack_words;

/// Words that perform integer arithmetic.
pub mod arithmetic_words;

/// Register the full built-in vocabulary.
pub fn register_base_words(dictionary: &mut Dictionary) {
    stack_words::register_stack_words(dictionary);
    arithmetic_words::register_arithmetic_words(dictionary);
}
