use crate::{
    add_native_word,
    runtime::data_structures::dictionary::{Dictionary, WordResult},
};

/// Duplicate the top value on the data stack.
///
/// Signature: `a -- a a`
fn word_dup(operands: &[i64]) -> WordResult {
    let a = operands[0];

    Ok(vec![a, a])
}

/// Drop the top value on the data stack.
///
/// Signature: `a --`
fn word_drop(_operands: &[i64]) -> WordResult {
    Ok(vec![])
}

/// Swap the top 2 values on the data stack.
///
/// Signature: `a b -- b a`
fn word_swap(operands: &[i64]) -> WordResult {
    Ok(vec![operands[1], operands[0]])
}

/// Make a copy of the second value and place it on top.
///
/// Signature: `a b -- a b a`
fn word_over(operands: &[i64]) -> WordResult {
    Ok(vec![operands[0], operands[1], operands[0]])
}

/// Rotate the third value to the top of the stack.
///
/// Signature: `a b c -- b c a`
fn word_rot(operands: &[i64]) -> WordResult {
    Ok(vec![operands[1], operands[2], operands[0]])
}

/// Register the stack manipulation words.
pub fn register_stack_words(dictionary: &mut Dictionary) {
    add_native_word!(
        dictionary,
        "dup",
        1,
        word_dup,
        "Duplicate the top value on the data stack.",
        "a -- a a"
    );

    add_native_word!(
        dictionary,
        "drop",
        1,
        word_drop,
        "Discard the top value on the data stack.",
        "a --"
    );

    add_native_word!(
        dictionary,
        "swap",
        2,
        word_swap,
        "Swap the top 2 values on the data stack.",
        "a b -- b a"
    );

    add_native_word!(
        dictionary,
        "over",
        2,
        word_over,
        "Copy the second value to the top of the stack.",
        "a b -- a b a"
    );

    add_native_word!(
        dictionary,
        "rot",
        3,
        word_rot,
        "Rotate the third value to the top of the stack.",
        "a b c -- b c a"
    );
}
