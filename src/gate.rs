use std::fmt::{Display, Formatter};

use crate::types::Position;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ComponentKind {
    Input,
    Output,
    AndGate,
    OrGate,
    NotGate,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 5] = [
        ComponentKind::Input,
        ComponentKind::Output,
        ComponentKind::AndGate,
        ComponentKind::OrGate,
        ComponentKind::NotGate,
    ];
}

// Getters
impl ComponentKind {
    /// Maximum number of incoming connections.
    pub const fn max_inputs(self) -> usize {
        match self {
            ComponentKind::Input => 0,
            ComponentKind::Output => 1,
            ComponentKind::AndGate => 2,
            ComponentKind::OrGate => 2,
            ComponentKind::NotGate => 1,
        }
    }

    /// Prefix used when naming freshly added components (`AND1`, `OR2`, ...).
    pub const fn name_prefix(self) -> &'static str {
        match self {
            ComponentKind::Input => "",
            ComponentKind::Output => "OUT",
            ComponentKind::AndGate => "AND",
            ComponentKind::OrGate => "OR",
            ComponentKind::NotGate => "NOT",
        }
    }

    /// Where the palette drops a new component of this kind.
    pub const fn base_position(self) -> Position {
        match self {
            ComponentKind::Input => Position::new(200.0, 100.0),
            ComponentKind::Output => Position::new(800.0, 225.0),
            ComponentKind::AndGate => Position::new(400.0, 150.0),
            ComponentKind::OrGate => Position::new(600.0, 225.0),
            ComponentKind::NotGate => Position::new(400.0, 300.0),
        }
    }
}

// Checks
impl ComponentKind {
    pub const fn is_input(self) -> bool {
        matches!(self, ComponentKind::Input)
    }

    pub const fn is_output(self) -> bool {
        matches!(self, ComponentKind::Output)
    }

    pub const fn is_gate(self) -> bool {
        matches!(
            self,
            ComponentKind::AndGate | ComponentKind::OrGate | ComponentKind::NotGate
        )
    }
}

impl Display for ComponentKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ComponentKind::Input => "INPUT",
            ComponentKind::Output => "OUTPUT",
            ComponentKind::AndGate => "AND",
            ComponentKind::OrGate => "OR",
            ComponentKind::NotGate => "NOT",
        };
        write!(f, "{}", s)
    }
}
