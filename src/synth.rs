//! Translation between equations and circuits.
//!
//! [`Circuit::synthesize`] throws away every non-input component and rebuilds
//! a two-level AND/OR network for an equation. [`Circuit::read_equation`]
//! goes the other way, reading the network upstream of the first output back
//! into product terms.
//!
//! Gates take at most two inputs, so wider products and sums are built as
//! chains: `ABC` becomes `AND(AND(A, B), C)`.

use std::collections::HashMap;

use log::debug;

use crate::circuit::Circuit;
use crate::equation::{Equation, Term};
use crate::gate::ComponentKind;
use crate::kmap::VARIABLES;
use crate::literal::Literal;
use crate::types::{ComponentId, Position};

const INPUT_X: f64 = 200.0;
const NOT_OFFSET_Y: f64 = 50.0;
const AND_X: f64 = 300.0;
const AND_Y: f64 = 200.0;
const AND_STEP_Y: f64 = 80.0;
const OR_X: f64 = 500.0;
const OR_Y: f64 = 300.0;
const OR_STEP_Y: f64 = 80.0;

/// Assigns names and positions to gates while a network is being built.
struct Builder<'a> {
    circuit: &'a mut Circuit,
    nots: HashMap<String, ComponentId>,
    and_count: usize,
    or_count: usize,
}

impl<'a> Builder<'a> {
    fn new(circuit: &'a mut Circuit) -> Self {
        Self {
            circuit,
            nots: HashMap::new(),
            and_count: 0,
            or_count: 0,
        }
    }

    /// The input named `name`, created below the existing ones if missing.
    fn input(&mut self, name: &str) -> ComponentId {
        if let Some(c) = self.circuit.find_input(name) {
            return c.id();
        }
        let count = self.circuit.components_of(ComponentKind::Input).count();
        let position = Position::new(INPUT_X, 100.0 * (count + 1) as f64);
        self.circuit.add_component(ComponentKind::Input, name, position)
    }

    /// The signal carrying `lit`. Complemented literals share one NOT gate per variable.
    fn literal(&mut self, lit: &Literal) -> ComponentId {
        let input = self.input(lit.name());
        if !lit.is_negated() {
            return input;
        }
        if let Some(&not) = self.nots.get(lit.name()) {
            return not;
        }
        let y = self.circuit.component(input).map_or(0.0, |c| c.position().y);
        let position = Position::new(INPUT_X, y + NOT_OFFSET_Y);
        let not = self
            .circuit
            .add_component(ComponentKind::NotGate, format!("NOT_{}", lit.name()), position);
        self.circuit.link(input, not);
        self.nots.insert(lit.name().to_string(), not);
        not
    }

    fn gate(&mut self, kind: ComponentKind, lhs: ComponentId, rhs: Option<ComponentId>) -> ComponentId {
        let (name, position) = match kind {
            ComponentKind::AndGate => {
                let y = AND_Y + AND_STEP_Y * self.and_count as f64;
                self.and_count += 1;
                (format!("AND{}", self.and_count), Position::new(AND_X, y))
            }
            _ => {
                let y = OR_Y + OR_STEP_Y * self.or_count as f64;
                self.or_count += 1;
                (format!("OR{}", self.or_count), Position::new(OR_X, y))
            }
        };
        let id = self.circuit.add_component(kind, name, position);
        self.circuit.link(lhs, id);
        if let Some(rhs) = rhs {
            self.circuit.link(rhs, id);
        }
        id
    }

    /// A left-leaning chain of two-input gates over `signals`.
    ///
    /// A single signal still gets its own one-input gate. Returns `None` only
    /// for an empty list.
    fn chain(&mut self, kind: ComponentKind, signals: &[ComponentId]) -> Option<ComponentId> {
        let (&first, rest) = signals.split_first()?;
        let mut acc = match rest.split_first() {
            None => return Some(self.gate(kind, first, None)),
            Some((&second, _)) => self.gate(kind, first, Some(second)),
        };
        for &next in rest.iter().skip(1) {
            acc = self.gate(kind, acc, Some(next));
        }
        Some(acc)
    }

    fn product(&mut self, term: &Term) -> Option<ComponentId> {
        let signals: Vec<ComponentId> = term.literals().iter().map(|lit| self.literal(lit)).collect();
        self.chain(ComponentKind::AndGate, &signals)
    }
}

impl Circuit {
    /// Rebuild the circuit to compute `equation`.
    ///
    /// Inputs are kept (and `A`, `B`, `C` are created if missing). Every other
    /// component is deleted, then one AND chain per term is built, the chains
    /// are joined by an OR chain, and the result feeds a fresh output:
    ///
    /// - no terms: the output is left disconnected;
    /// - one term: the AND chain feeds the output directly;
    /// - a constant `1` term: the whole function is `1`, realized as `A + A'`.
    pub fn synthesize(&mut self, equation: &Equation) {
        debug!("synthesize({})", equation);
        self.clear_gates();

        let a = [Literal::positive("A")];
        let not_a = [Literal::negative("A")];
        let tautology = [Term::from_literals(a), Term::from_literals(not_a)];
        let terms: &[Term] = if equation.has_one() { &tautology } else { equation.terms() };

        let mut builder = Builder::new(self);
        for name in VARIABLES {
            builder.input(&name.to_string());
        }
        let products: Vec<ComponentId> = terms.iter().filter_map(|t| builder.product(t)).collect();
        let root = match products.as_slice() {
            [] => None,
            [single] => Some(*single),
            many => builder.chain(ComponentKind::OrGate, many),
        };

        let out_x = match products.len() {
            0 => AND_X,
            1 => OR_X,
            _ => OR_X + 200.0,
        };
        let out = self.add_component(ComponentKind::Output, "OUT", Position::new(out_x, OR_Y));
        if let Some(root) = root {
            self.link(root, out);
        }
        self.evaluate();
    }

    /// Read the network feeding the first output as a sum of products.
    ///
    /// Returns `Some(f = 0)` when there is no output or nothing feeds it, and
    /// `None` when the network is not a sum of products of input literals
    /// (for example a NOT applied to a gate). Only the inputs `A`, `B` and `C`
    /// count as literals; a network reading any other input is also `None`.
    pub fn read_equation(&self) -> Option<Equation> {
        let Some(out) = self.first_output() else {
            return Some(Equation::zero());
        };
        let terms = self.sum_of_products(out.id())?;
        Some(Equation::from_terms(terms))
    }

    fn sum_of_products(&self, id: ComponentId) -> Option<Vec<Term>> {
        let c = self.component(id)?;
        let inputs = &c.inputs()[..c.inputs().len().min(c.kind().max_inputs())];
        match c.kind() {
            ComponentKind::Input => {
                is_variable(c.name()).then(|| vec![Term::literal(Literal::positive(c.name()))])
            }
            ComponentKind::Output => match inputs.first() {
                Some(&i) => self.sum_of_products(i),
                None => Some(Vec::new()),
            },
            ComponentKind::NotGate => match inputs.first() {
                // A NOT gate with no input is constant 0.
                None => Some(Vec::new()),
                Some(&i) => {
                    let inner = self.component(i)?;
                    if inner.kind().is_input() && is_variable(inner.name()) {
                        Some(vec![Term::literal(Literal::negative(inner.name()))])
                    } else {
                        None
                    }
                }
            },
            ComponentKind::OrGate => {
                let mut terms = Vec::new();
                for &i in inputs {
                    terms.extend(self.sum_of_products(i)?);
                }
                Some(terms)
            }
            ComponentKind::AndGate => {
                if inputs.is_empty() {
                    return Some(Vec::new());
                }
                let mut product = Term::one();
                let mut sums = Vec::new();
                for &i in inputs {
                    sums.push(self.sum_of_products(i)?);
                }
                for sum in sums {
                    match sum.as_slice() {
                        [] => return Some(Vec::new()),
                        [term] => product = product.and(term),
                        _ => return None,
                    }
                }
                Some(vec![product])
            }
        }
    }
}

fn is_variable(name: &str) -> bool {
    let mut chars = name.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if VARIABLES.contains(&c))
}
