use iceoryx2_bb_log::debug;
use crate::{ lang::tokenizing::{ Token,
                                 TokenKind },
             runtime::{ built_ins::register_base_words,
                        data_structures::{ dictionary::Dictionary,
                                           operand_stack::OperandStack },
                        error::{ self,
                                 ScriptError } } };



/// One interpreter session.  The virtual machine owns the operand stack and the vocabulary of
/// words, and reduces a stream of tokens against the stack one token at a time.
///
/// Every token either completes or fails without touching the stack, so after an error the stack
/// is exactly as it was before the failing token.
pub struct VirtualMachine
{
    /// The stack of values being operated on.
    stack: OperandStack,

    /// The words known by this machine.
    dictionary: Dictionary,

    /// When set, the driver should echo each token before it is executed.
    debug_enabled: bool
}


impl Default for VirtualMachine
{
    fn default() -> Self
    {
        Self::new()
    }
}


impl VirtualMachine
{
    /// Create a new machine with an empty stack and the built-in vocabulary.
    pub fn new() -> VirtualMachine
    {
        let mut dictionary = Dictionary::new();

        register_base_words(&mut dictionary);

        VirtualMachine
            {
                stack: OperandStack::new(),
                dictionary,
                debug_enabled: false
            }
    }

    /// Should the driver echo tokens before executing them?
    pub fn debug_enabled(&self) -> bool
    {
        self.debug_enabled
    }

    /// Turn token echoing on or off.
    pub fn set_debug_enabled(&mut self, enabled: bool)
    {
        self.debug_enabled = enabled;
    }

    /// The vocabulary known by this machine.
    pub fn dictionary(&self) -> &Dictionary
    {
        &self.dictionary
    }

    /// Get a copy of the stack, bottom to top.  Changing the returned list has no effect on the
    /// machine.
    pub fn stack_state(&self) -> Vec<i64>
    {
        self.stack.snapshot()
    }

    /// Execute each of the tokens in order.  The first failing token stops execution, leaving the
    /// rest of the tokens unexecuted.
    pub fn execute_tokens(&mut self, tokens: &[Token]) -> error::Result<()>
    {
        for token in tokens
        {
            self.execute_single_token(token)?;
        }

        Ok(())
    }

    /// Execute one token.  Integer literals are pushed, anything else is run as a word.
    pub fn execute_single_token(&mut self, token: &Token) -> error::Result<()>
    {
        debug!("Executing {:?}", token);

        match token.classify()
        {
            TokenKind::Literal(value) =>
                {
                    self.stack.push(value);
                    Ok(())
                },

            TokenKind::Word(name) => self.execute_word(token, name)
        }
    }

    /// Look up and run the named word.  The operand count is checked before the handler runs and
    /// the stack is only updated once the handler has succeeded.
    fn execute_word(&mut self, token: &Token, name: &str) -> error::Result<()>
    {
        let Some(info) = self.dictionary.get(name)
        else
        {
            return Err(ScriptError::UnrecognizedWord
                {
                    word: name.to_string(),
                    location: token.location().clone()
                });
        };

        let Some(operands) = self.stack.top(info.arity)
        else
        {
            return Err(ScriptError::StackUnderflow
                {
                    word: name.to_string(),
                    required: info.arity,
                    have: self.stack.len(),
                    location: token.location().clone()
                });
        };

        let results = (info.handler)(operands).map_err(|fault| ScriptError::Arithmetic
            {
                word: name.to_string(),
                fault,
                location: token.location().clone()
            })?;

        self.stack.replace_top(info.arity, results);

        Ok(())
    }
}
