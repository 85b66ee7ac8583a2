use std::{ fmt::{ self, Debug, Formatter },
           process::{ ExitCode, Termination } };
use thiserror::Error;
use crate::lang::source_location::SourceLocation;



pub type Result<T> = std::result::Result<T, ScriptError>;



/// The ways integer arithmetic can fail.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Error)]
pub enum ArithmeticFault
{
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow
}



/// Any error that occurs while tokenizing or executing input.
///
/// The first three kinds are expected faults of a running session.  They abort the rest of the
/// current input but the session itself can carry on.  Everything else is fatal to the session.
#[derive(Clone, Error)]
pub enum ScriptError
{
    /// The token was neither an integer literal nor a known word.
    #[error("{location}: Unrecognized word '{word}'.")]
    UnrecognizedWord
    {
        word: String,
        location: SourceLocation
    },

    /// The word needs more values than the stack currently holds.
    #[error("{location}: Stack underflow in '{word}', required {required} but have {have}.")]
    StackUnderflow
    {
        word: String,
        required: usize,
        have: usize,
        location: SourceLocation
    },

    /// The word's arithmetic could not be carried out.
    #[error("{location}: Arithmetic fault in '{word}', {fault}.")]
    Arithmetic
    {
        word: String,
        fault: ArithmeticFault,
        location: SourceLocation
    },

    /// A custom token pattern could not be compiled.
    #[error("Invalid token pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Input could not be read.
    #[error("I/O error: {0}")]
    Io(String)
}


/// Report a session ending error and convert it to an operating system exit code.  The driver's
/// main calls this for any error that ends the session.
impl Termination for ScriptError
{
    /// Because this type represents an error, the exit code is always FAILURE.
    fn report(self) -> ExitCode
    {
        eprintln!("Error: {}", self);
        ExitCode::FAILURE
    }
}


/// Debug output is the same as the user facing message.
impl Debug for ScriptError
{
    fn fmt(&self, f: &mut Formatter) -> fmt::Result
    {
        write!(f, "{}", self)
    }
}


impl ScriptError
{
    /// Can the session carry on after reporting this error?
    pub fn is_recoverable(&self) -> bool
    {
        matches!(self,
                 ScriptError::UnrecognizedWord { .. }
                 | ScriptError::StackUnderflow { .. }
                 | ScriptError::Arithmetic { .. })
    }

    /// If available, the location in the input the error occurred.
    pub fn location(&self) -> Option<&SourceLocation>
    {
        match self
        {
            ScriptError::UnrecognizedWord { location, .. }
            | ScriptError::StackUnderflow { location, .. }
            | ScriptError::Arithmetic { location, .. } => Some(location),

            ScriptError::InvalidPattern(_) | ScriptError::Io(_) => None
        }
    }
}


/// Allow for the conversion of a std::io::Error into a ScriptError.
impl From<std::io::Error> for ScriptError
{
    fn from(error: std::io::Error) -> ScriptError
    {
        ScriptError::Io(error.to_string())
    }
}



#[cfg(test)]
mod tests
{
    use super::*;

    fn here() -> SourceLocation
    {
        SourceLocation::new(Some("test"), 2, 5)
    }

    #[test]
    fn session_faults_are_recoverable()
    {
        let unrecognized = ScriptError::UnrecognizedWord { word: "foo".to_string(),
                                                           location: here() };
        let underflow = ScriptError::StackUnderflow { word: "dup".to_string(),
                                                      required: 1,
                                                      have: 0,
                                                      location: here() };
        let arithmetic = ScriptError::Arithmetic { word: "/".to_string(),
                                                   fault: ArithmeticFault::DivisionByZero,
                                                   location: here() };

        assert!(unrecognized.is_recoverable());
        assert!(underflow.is_recoverable());
        assert!(arithmetic.is_recoverable());
        assert_eq!(underflow.location(), Some(&here()));
    }

    #[test]
    fn io_errors_are_fatal()
    {
        let error = ScriptError::from(std::io::Error::other("disk on fire"));

        assert!(!error.is_recoverable());
        assert_eq!(error.location(), None);
        assert_eq!(error.to_string(), "I/O error: disk on fire");
    }

    #[test]
    fn messages_point_at_the_location()
    {
        let error = ScriptError::StackUnderflow { word: "/".to_string(),
                                                  required: 2,
                                                  have: 1,
                                                  location: here() };

        assert_eq!(error.to_string(),
                   "test (2, 5): Stack underflow in '/', required 2 but have 1.");
        assert_eq!(format!("{:?}", error), error.to_string());
    }
}
