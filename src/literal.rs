use std::fmt::{Debug, Display, Formatter};
use std::ops::Not;

/// A variable name, optionally complemented (`A` or `A'`).
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Literal {
    name: String,
    negated: bool,
}

// Constructors
impl Literal {
    pub fn positive(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: false,
        }
    }

    pub fn negative(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            negated: true,
        }
    }

    pub fn new(name: impl Into<String>, negated: bool) -> Self {
        Self {
            name: name.into(),
            negated,
        }
    }
}

// Getters
impl Literal {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn is_negated(&self) -> bool {
        self.negated
    }

    /// The value this literal takes when its variable is `value`.
    pub const fn apply(&self, value: bool) -> bool {
        value != self.negated
    }

    /// Whether `self` and `other` are the two polarities of one variable.
    pub fn is_complement_of(&self, other: &Literal) -> bool {
        self.name == other.name && self.negated != other.negated
    }
}

impl Not for Literal {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self {
            name: self.name,
            negated: !self.negated,
        }
    }
}

impl Not for &Literal {
    type Output = Literal;

    fn not(self) -> Self::Output {
        Literal {
            name: self.name.clone(),
            negated: !self.negated,
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)?;
        if self.negated {
            write!(f, "'")?;
        }
        Ok(())
    }
}

impl Debug for Literal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
