/// The virtual machine that executes token streams against the operand stack.
pub mod virtual_machine;

/// Simplify registering a native word with a dictionary.
///
/// Required parameters are, the dictionary to register with.  The name of the word to register.
/// The number of operands the word consumes.  The word function handler to execute for the word.
/// A simple description of the word.  As well as the word's stack signature.
#[macro_export]
macro_rules! add_native_word {
    (
        $dictionary:expr ,
        $name:expr ,
        $arity:expr ,
        $function:expr ,
        $description:expr ,
        $signature:expr
    ) => {{
        $dictionary.insert(
            $name.to_string(),        // Name.
            $arity,                   // Operands consumed.
            $function,                // Function handler.
            $description.to_string(), // Word description.
            $signature.to_string(),   // Word signature.
        );
    }};
}
