use std::{ fmt::{ self,
                  Display,
                  Formatter },
           hash::{ Hash,
                   Hasher } };



/// The location in the source text where a token was found.  Every token carries one of these so
/// that faults raised while executing it can point back at the offending input.
///
/// This is a read-only structure.  Use the field accessor methods to get the values.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq)]
pub struct SourceLocation
{
    /// The name of the file or stream the text came from.  Text typed interactively has no
    /// source name.
    source: Option<String>,

    /// The 1 based line number in the source text where the token was found.
    line: usize,

    /// The 1 based column number in the source text where the token was found.
    column: usize
}


impl Hash for SourceLocation
{
    fn hash<H: Hasher>(&self, state: &mut H)
    {
        self.source.hash(state);
        self.line.hash(state);
        self.column.hash(state);
    }
}


/// Used for error reporting to show where in the input an error originated.
impl Display for SourceLocation
{
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), fmt::Error>
    {
        match &self.source
        {
            Some(source) => write!(formatter, "{} ({}, {})", source, self.line, self.column),
            None => write!(formatter, "({}, {})", self.line, self.column)
        }
    }
}


impl SourceLocation
{
    /// Create a new SourceLocation with all of the needed information.
    pub fn new(source: Option<&str>, line: usize, column: usize) -> SourceLocation
    {
        SourceLocation { source: source.map(str::to_owned), line, column }
    }

    /// The name of the file or stream, if the text came from one.
    pub fn source(&self) -> Option<&str>
    {
        self.source.as_deref()
    }

    /// The 1 based line number in the source text.
    pub fn line(&self) -> usize
    {
        self.line
    }

    /// The 1 based column number in the source text.
    pub fn column(&self) -> usize
    {
        self.column
    }
}
