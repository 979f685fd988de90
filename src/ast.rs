//! Boolean expression trees.
//!
//! An [`Expr`] is produced by the [parser][crate::parser] and evaluated
//! against an assignment of variables. Variables are single uppercase
//! letters; a variable missing from the assignment evaluates to `false`.

use std::collections::{BTreeSet, HashMap};
use std::fmt::{Display, Formatter};

use crate::error::ParseError;
use crate::parser::parse;

/// Binary connectives, decided once at tokenization time.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BinOp {
    And,
    Or,
    Xor,
    Implies,
    Iff,
}

impl BinOp {
    /// Order in which the parser looks for a top-level operator to split on.
    ///
    /// The first operator of this list that occurs at parenthesis depth 0
    /// wins, regardless of what else appears at that depth.
    pub const PRIORITY: [BinOp; 5] = [BinOp::And, BinOp::Or, BinOp::Xor, BinOp::Implies, BinOp::Iff];

    pub const fn apply(self, a: bool, b: bool) -> bool {
        match self {
            BinOp::And => a && b,
            BinOp::Or => a || b,
            BinOp::Xor => a != b,
            BinOp::Implies => !a || b,
            BinOp::Iff => a == b,
        }
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            BinOp::And => "∧",
            BinOp::Or => "∨",
            BinOp::Xor => "⊕",
            BinOp::Implies => "→",
            BinOp::Iff => "↔",
        }
    }
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Const(bool),
    Var(char),
    Not(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

// Constructors
impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(name)
    }

    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    // Double negation is kept as written: `¬¬A` is a law to be shown, not folded away.
    #[allow(clippy::should_implement_trait)]
    pub fn not(value: Self) -> Self {
        Expr::Not(Box::new(value))
    }

    pub fn binary(op: BinOp, lhs: Self, rhs: Self) -> Self {
        Expr::Binary(op, Box::new(lhs), Box::new(rhs))
    }

    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinOp::And, lhs, rhs)
    }

    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinOp::Or, lhs, rhs)
    }

    pub fn xor(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinOp::Xor, lhs, rhs)
    }

    pub fn implies(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinOp::Implies, lhs, rhs)
    }

    pub fn iff(lhs: Self, rhs: Self) -> Self {
        Self::binary(BinOp::Iff, lhs, rhs)
    }
}

impl Expr {
    /// Evaluate under `value`, which supplies each variable's value.
    pub fn eval_with<F>(&self, value: &F) -> bool
    where
        F: Fn(char) -> bool,
    {
        match self {
            Expr::Const(b) => *b,
            Expr::Var(v) => value(*v),
            Expr::Not(e) => !e.eval_with(value),
            Expr::Binary(op, a, b) => op.apply(a.eval_with(value), b.eval_with(value)),
        }
    }

    /// Evaluate under a map assignment; unassigned variables are `false`.
    pub fn eval(&self, assignment: &HashMap<char, bool>) -> bool {
        self.eval_with(&|v| assignment.get(&v).copied().unwrap_or(false))
    }

    /// Variables mentioned in the expression, in ascending order.
    pub fn variables(&self) -> BTreeSet<char> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<char>) {
        match self {
            Expr::Const(_) => {}
            Expr::Var(v) => {
                vars.insert(*v);
            }
            Expr::Not(e) => e.collect_variables(vars),
            Expr::Binary(_, a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    fn fmt_operand(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(..) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }

    /// A negation on the left of an operator would swallow the whole
    /// expression when read back, so it is parenthesized too.
    fn fmt_lhs(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Binary(..) | Expr::Not(..) => write!(f, "({})", self),
            _ => write!(f, "{}", self),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Const(b) => write!(f, "{}", *b as u8),
            Expr::Var(v) => write!(f, "{}", v),
            Expr::Not(e) => {
                write!(f, "¬")?;
                e.fmt_operand(f)
            }
            Expr::Binary(op, a, b) => {
                a.fmt_lhs(f)?;
                write!(f, " {} ", op.symbol())?;
                b.fmt_operand(f)
            }
        }
    }
}

/// Parse `expression` and evaluate it under `assignment`.
///
/// ```
/// use std::collections::HashMap;
/// use logic_rs::ast::evaluate;
///
/// let assignment = HashMap::from([('P', true), ('Q', false)]);
/// assert!(!evaluate("P ∧ Q", &assignment).unwrap());
/// assert!(evaluate("P → (Q ∨ P)", &assignment).unwrap());
/// ```
pub fn evaluate(expression: &str, assignment: &HashMap<char, bool>) -> Result<bool, ParseError> {
    Ok(parse(expression)?.eval(assignment))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binop_tables() {
        let rows = [(false, false), (false, true), (true, false), (true, true)];
        let and: Vec<bool> = rows.iter().map(|&(a, b)| BinOp::And.apply(a, b)).collect();
        let or: Vec<bool> = rows.iter().map(|&(a, b)| BinOp::Or.apply(a, b)).collect();
        let xor: Vec<bool> = rows.iter().map(|&(a, b)| BinOp::Xor.apply(a, b)).collect();
        let imp: Vec<bool> = rows.iter().map(|&(a, b)| BinOp::Implies.apply(a, b)).collect();
        let iff: Vec<bool> = rows.iter().map(|&(a, b)| BinOp::Iff.apply(a, b)).collect();
        assert_eq!(and, [false, false, false, true]);
        assert_eq!(or, [false, true, true, true]);
        assert_eq!(xor, [false, true, true, false]);
        assert_eq!(imp, [true, true, false, true]);
        assert_eq!(iff, [true, false, false, true]);
    }

    #[test]
    fn test_eval_unassigned_is_false() {
        let e = Expr::or(Expr::var('A'), Expr::var('Z'));
        let assignment = HashMap::from([('A', false)]);
        assert!(!e.eval(&assignment));
        let e = Expr::not(Expr::var('Z'));
        assert!(e.eval(&HashMap::new()));
    }

    #[test]
    fn test_variables_sorted() {
        let e = Expr::and(Expr::var('C'), Expr::or(Expr::var('A'), Expr::not(Expr::var('C'))));
        assert_eq!(e.variables().into_iter().collect::<Vec<_>>(), vec!['A', 'C']);
    }

    #[test]
    fn test_display() {
        let e = Expr::or(Expr::and(Expr::var('A'), Expr::var('B')), Expr::not(Expr::var('C')));
        assert_eq!(e.to_string(), "(A ∧ B) ∨ ¬C");
        let e = Expr::not(Expr::implies(Expr::var('P'), Expr::constant(false)));
        assert_eq!(e.to_string(), "¬(P → 0)");
        let e = Expr::and(Expr::not(Expr::var('P')), Expr::var('Q'));
        assert_eq!(e.to_string(), "(¬P) ∧ Q");
        assert_eq!(parse(&e.to_string()).unwrap(), e);
    }

    #[test]
    fn test_display_reparses_to_same_tree() {
        let e = Expr::iff(
            Expr::not(Expr::and(Expr::var('P'), Expr::var('Q'))),
            Expr::or(Expr::not(Expr::var('P')), Expr::not(Expr::var('Q'))),
        );
        assert_eq!(parse(&e.to_string()).unwrap(), e);
    }
}
