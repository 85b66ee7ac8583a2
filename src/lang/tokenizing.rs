use crate::{
    lang::source_location::SourceLocation,
    runtime::error::{self, ScriptError},
};
use lazy_static::lazy_static;
use regex::Regex;
use std::{
    fmt::{self, Debug, Display, Formatter},
    io::BufRead,
};

lazy_static! {
    // Any maximal run of characters that are not a space, tab, or new line.
    static ref DEFAULT_TOKEN_PATTERN: Regex = Regex::new(r"[^ \t\n]+").unwrap();
}

/// A token is a single unit of the input text along with the location in the original source
/// where it was found.  Tokens are never empty and are immutable once created.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Token {
    location: SourceLocation,
    text: String,
}

/// A list of tokens found in the input, in the order they appeared.
pub type TokenList = Vec<Token>;

/// How a token is to be interpreted by the virtual machine.  A token is either an integer literal
/// to push or the name of a word to execute, never both.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TokenKind<'a> {
    /// The token's text is a base 10 signed integer.
    Literal(i64),

    /// Anything else is looked up in the vocabulary.
    Word(&'a str),
}

/// Make sure that the tokens are nicely printable for echoing back to the user.
impl Display for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// For debugging we include the original location of the token as well.
impl Debug for Token {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.location, self.text)
    }
}

impl Token {
    /// Create a new token found at the given location.
    pub fn new(location: SourceLocation, text: String) -> Token {
        Token { location, text }
    }

    /// Get the token's location in the original source text.
    pub fn location(&self) -> &SourceLocation {
        &self.location
    }

    /// The raw text of the token.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Decide if this token is an integer literal or a word.
    pub fn classify(&self) -> TokenKind<'_> {
        match self.text.parse::<i64>() {
            Ok(value) => TokenKind::Literal(value),
            Err(_) => TokenKind::Word(&self.text),
        }
    }
}

/// Splits incoming text into tokens.  Tokens accumulate across calls to `process` and
/// `process_stream` and line numbers keep counting up until `clear` is called.  This allows for
/// multiple chunks of input to be gathered up before they are executed.
pub struct Tokenizer {
    /// The rule that decides what a single token looks like.
    pattern: Regex,

    /// All of the tokens found since the last clear.
    tokens: TokenList,

    /// The number of the last line that was processed.
    line: usize,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer {
    /// Create a tokenizer that splits on spaces, tabs, and new lines.
    pub fn new() -> Tokenizer {
        Tokenizer {
            pattern: DEFAULT_TOKEN_PATTERN.clone(),
            tokens: TokenList::new(),
            line: 0,
        }
    }

    /// Create a tokenizer where every match of the regular expression is a token.
    pub fn with_pattern(pattern: &str) -> error::Result<Tokenizer> {
        Ok(Tokenizer {
            pattern: Regex::new(pattern)?,
            tokens: TokenList::new(),
            line: 0,
        })
    }

    /// The tokens found so far, in the order they were found.
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// The number of lines consumed since the last clear.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Forget all of the gathered tokens and start counting lines from the beginning again.
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.line = 0;
    }

    /// Tokenize a block of text, which may span multiple lines.  The source name, if given, is
    /// recorded in every token's location.
    pub fn process(&mut self, text: &str, source: Option<&str>) {
        for line in text.lines() {
            self.process_line(line, source);
        }
    }

    /// Tokenize everything that can be read from the stream.
    pub fn process_stream<R: BufRead>(
        &mut self,
        reader: R,
        source: Option<&str>,
    ) -> error::Result<()> {
        for line in reader.lines() {
            let line = line.map_err(ScriptError::from)?;
            self.process_line(&line, source);
        }

        Ok(())
    }

    /// Advance to the next line and extract every token on it.
    fn process_line(&mut self, line: &str, source: Option<&str>) {
        self.line += 1;

        // `characters` is the number of characters in the line before `last_byte`.
        let mut last_byte = 0;
        let mut characters = 0;

        for found in self.pattern.find_iter(line) {
            // A user supplied pattern could match nothing at all.
            if found.as_str().is_empty() {
                continue;
            }

            characters += line[last_byte..found.start()].chars().count();
            last_byte = found.start();

            let location = SourceLocation::new(source, self.line, characters + 1);

            self.tokens.push(Token::new(location, found.as_str().to_string()));
        }
    }
}
