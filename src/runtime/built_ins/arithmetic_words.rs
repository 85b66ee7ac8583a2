use crate::{
    add_native_word,
    runtime::{
        data_structures::dictionary::{Dictionary, WordResult},
        error::ArithmeticFault,
    },
};

/// Apply a checked binary operation to `a b`, where `b` was on top of the stack.
fn binary(operands: &[i64], operation: fn(i64, i64) -> Option<i64>) -> WordResult {
    let (a, b) = (operands[0], operands[1]);

    operation(a, b)
        .map(|result| vec![result])
        .ok_or(ArithmeticFault::Overflow)
}

fn word_add(operands: &[i64]) -> WordResult {
    binary(operands, i64::checked_add)
}

fn word_subtract(operands: &[i64]) -> WordResult {
    binary(operands, i64::checked_sub)
}

fn word_multiply(operands: &[i64]) -> WordResult {
    binary(operands, i64::checked_mul)
}

/// Integer division, truncating toward zero.
///
/// Signature: `a b -- a/b`
fn word_divide(operands: &[i64]) -> WordResult {
    if operands[1] == 0 {
        return Err(ArithmeticFault::DivisionByZero);
    }

    // Only i64::MIN / -1 can still fail here.
    binary(operands, i64::checked_div)
}

/// Register the integer arithmetic words.
pub fn register_arithmetic_words(dictionary: &mut Dictionary) {
    add_native_word!(
        dictionary,
        "+",
        2,
        word_add,
        "Add the top 2 values on the stack.",
        "a b -- a+b"
    );

    add_native_word!(
        dictionary,
        "-",
        2,
        word_subtract,
        "Subtract the top value from the one below it.",
        "a b -- a-b"
    );

    add_native_word!(
        dictionary,
        "*",
        2,
        word_multiply,
        "Multiply the top 2 values on the stack.",
        "a b -- a*b"
    );

    add_native_word!(
        dictionary,
        "/",
        2,
        word_divide,
        "Divide the second value by the top value, truncating toward zero.",
        "a b -- a/b"
    );
}
