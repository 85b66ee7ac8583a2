use crate::runtime::error::ArithmeticFault;
use std::{
    collections::HashMap,
    fmt::{self, Display, Formatter},
};

/// What a word hands back to the virtual machine: the values that replace its operands on the
/// stack, or the reason the arithmetic failed.
pub type WordResult = Result<Vec<i64>, ArithmeticFault>;

/// The native implementation of a word.  It receives exactly `arity` operands, oldest first, and
/// never touches the stack itself.
pub type WordHandler = fn(&[i64]) -> WordResult;

/// The information stored in the dictionary for each word.
#[derive(Clone)]
pub struct WordInfo {
    /// The name of the word.
    pub name: String,

    /// How many operands the word consumes from the stack.
    pub arity: usize,

    /// The function that computes the word's results.
    pub handler: WordHandler,

    /// A simple description of the word.
    pub description: String,

    /// The stack signature of the word.
    pub signature: String,
}

/// One line of the vocabulary listing.
impl Display for WordInfo {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{:<6} ( {} )  {}", self.name, self.signature, self.description)
    }
}

/// The vocabulary of words known to a virtual machine.
#[derive(Default)]
pub struct Dictionary {
    words: HashMap<String, WordInfo>,
}

impl Dictionary {
    /// Create a new empty dictionary.
    pub fn new() -> Dictionary {
        Dictionary {
            words: HashMap::new(),
        }
    }

    /// Add a word to the dictionary, replacing any previous word of the same name.
    pub fn insert(
        &mut self,
        name: String,
        arity: usize,
        handler: WordHandler,
        description: String,
        signature: String,
    ) {
        let info = WordInfo {
            name: name.clone(),
            arity,
            handler,
            description,
            signature,
        };

        self.words.insert(name, info);
    }

    /// Look up a word by name.
    pub fn get(&self, name: &str) -> Option<&WordInfo> {
        self.words.get(name)
    }

    /// How many words are known?
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the dictionary empty?
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All of the known words, sorted by name.
    pub fn words(&self) -> Vec<&WordInfo> {
        let mut words: Vec<&WordInfo> = self.words.values().collect();

        words.sort_by(|a, b| a.name.cmp(&b.name));
        words
    }
}
