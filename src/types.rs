//! Type-safe wrappers for circuit identities and presentation data.
//!
//! Component ids and canvas positions are kept apart from the values that
//! flow through a circuit, so that an id can never be mistaken for an index
//! into some other collection.

use std::fmt;

/// A component identifier.
///
/// Ids are handed out by a [`Circuit`][crate::circuit::Circuit] in increasing
/// order and are never reused, even after the component is deleted or the
/// circuit is resynthesized.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ComponentId(u32);

impl ComponentId {
    /// Creates an id from its raw value.
    pub const fn new(id: u32) -> Self {
        ComponentId(id)
    }

    /// Returns the raw id as a `u32`.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the id following this one.
    pub(crate) const fn next(self) -> Self {
        ComponentId(self.0 + 1)
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<ComponentId> for u32 {
    fn from(id: ComponentId) -> Self {
        id.0
    }
}

/// A point on the drawing canvas.
///
/// Positions carry no meaning for evaluation; they only travel with a
/// component so that a presentation layer can draw it where it was left.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Position { x, y }
    }

    /// Checks whether `other` lies within the axis-aligned square of half-size `radius`.
    pub fn is_near(&self, other: &Position, radius: f64) -> bool {
        (self.x - other.x).abs() < radius && (self.y - other.y).abs() < radius
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A named boolean variable, as shown in the variables panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
    pub value: bool,
}

impl Variable {
    pub fn new(name: impl Into<String>, value: bool) -> Self {
        Variable {
            name: name.into(),
            value,
        }
    }
}
