/// The last-in-first-out stack of integers the virtual machine works on.  Values are stored
/// oldest first, so the top of the stack is the end of the underlying vector.
#[derive(Clone, Default, PartialEq, Eq, Debug)]
pub struct OperandStack {
    values: Vec<i64>,
}

impl OperandStack {
    /// Create a new empty stack.
    pub fn new() -> OperandStack {
        OperandStack { values: Vec::new() }
    }

    /// How many values are currently on the stack?
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Is the stack empty?
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Push a new value onto the top of the stack.
    pub fn push(&mut self, value: i64) {
        self.values.push(value);
    }

    /// Borrow the top `count` values, oldest first.  Returns None if the stack doesn't hold that
    /// many values.
    pub fn top(&self, count: usize) -> Option<&[i64]> {
        let start = self.values.len().checked_sub(count)?;
        Some(&self.values[start..])
    }

    /// Remove the top `count` values and push the replacements in their place.  The caller must
    /// have already checked the stack with `top`.
    pub fn replace_top(&mut self, count: usize, replacements: Vec<i64>) {
        let start = self.values.len().saturating_sub(count);

        self.values.truncate(start);
        self.values.extend(replacements);
    }

    /// Get a copy of the stack's contents, bottom to top.
    pub fn snapshot(&self) -> Vec<i64> {
        self.values.clone()
    }
}
