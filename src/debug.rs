//! Debug utilities for inspecting circuits.
//!
//! These are primarily useful in tests and during development.

use std::fmt::Write;

use crate::circuit::{Circuit, Component};
use crate::kmap::KarnaughMap;

/// An assignment of `A`, `B`, `C` under which a circuit disagrees with an expected function.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Mismatch {
    pub a: bool,
    pub b: bool,
    pub c: bool,
    /// What the expected function says
    pub expected: bool,
    /// What the circuit computes
    pub actual: bool,
}

impl std::fmt::Display for Mismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "A={} B={} C={}: expected {}, got {}",
            self.a as u8, self.b as u8, self.c as u8, self.expected as u8, self.actual as u8
        )
    }
}

impl Circuit {
    fn input_names(&self, c: &Component) -> Vec<&str> {
        c.inputs()
            .iter()
            .map(|&i| self.component(i).map_or("?", |x| x.name()))
            .collect()
    }

    /// Deterministic netlist text that does not depend on component ids.
    ///
    /// One line per component, `NAME = KIND(INPUT, ...)`, sorted. Two circuits
    /// with the same text have the same structure up to renumbering.
    pub fn canonical_text(&self) -> String {
        let mut lines: Vec<String> = self
            .components()
            .iter()
            .map(|c| {
                if c.kind().is_input() {
                    format!("{} = INPUT", c.name())
                } else {
                    format!("{} = {}({})", c.name(), c.kind(), self.input_names(c).join(", "))
                }
            })
            .collect();
        lines.sort();
        lines.join("\n")
    }

    /// Assignments of `A`, `B`, `C` where the circuit differs from `expected`.
    ///
    /// An empty result means the circuit computes `expected`.
    pub fn verify_truth_table<F>(&self, expected: F) -> Vec<Mismatch>
    where
        F: Fn(bool, bool, bool) -> bool,
    {
        let map = KarnaughMap::from_circuit(self);
        let mut mismatches = Vec::new();
        for m in 0..8u32 {
            let (a, b, c) = (m & 4 != 0, m & 2 != 0, m & 1 != 0);
            let expected = expected(a, b, c);
            let actual = map.value(a, b, c);
            if expected != actual {
                mismatches.push(Mismatch {
                    a,
                    b,
                    c,
                    expected,
                    actual,
                });
            }
        }
        mismatches
    }

    /// Multi-line dump of every component: id, kind, name, value and inputs.
    pub fn dump_state(&self) -> String {
        let mut s = String::new();
        writeln!(s, "Circuit ({} components, output = {}):", self.len(), self.output_value() as u8).unwrap();
        for c in self.components() {
            let inputs: Vec<String> = c.inputs().iter().map(|i| i.to_string()).collect();
            writeln!(
                s,
                "  {} {} {:?} at {} = {} <- [{}]",
                c.id(),
                c.kind(),
                c.name(),
                c.position(),
                c.value() as u8,
                inputs.join(", ")
            )
            .unwrap();
        }
        s
    }
}
