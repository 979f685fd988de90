//! Truth tables of boolean expressions.
//!
//! Rows are enumerated lazily: row `i` assigns to the `j`-th variable (in
//! ascending order) the value of bit `j` of `i`. Iterating a table twice
//! yields the same rows in the same order.

use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};
use std::iter::FusedIterator;

use log::debug;

use crate::ast::Expr;
use crate::error::ParseError;
use crate::parser::parse;
use crate::utils::bit;

/// What a truth table says about its expression as a whole.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Classification {
    /// True in every row
    Tautology,
    /// False in every row
    Contradiction,
    /// True in some rows and false in others
    Contingency,
}

impl Display for Classification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Classification::Tautology => "tautology",
            Classification::Contradiction => "contradiction",
            Classification::Contingency => "contingency",
        };
        write!(f, "{}", s)
    }
}

/// One row of a truth table.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Row {
    /// Row number; its bits are the variable values.
    pub index: usize,
    /// Value of each variable, in the table's variable order.
    pub assignment: Vec<(char, bool)>,
    /// Value of the expression under `assignment`.
    pub result: bool,
}

impl Row {
    /// Value of `var` in this row, if the table has such a variable.
    pub fn value(&self, var: char) -> Option<bool> {
        self.assignment.iter().find(|(v, _)| *v == var).map(|&(_, b)| b)
    }
}

#[derive(Debug, Clone)]
pub struct TruthTable {
    expr: Expr,
    variables: Vec<char>,
}

impl TruthTable {
    /// Upper bound on the number of variables a table enumerates.
    pub const MAX_VARIABLES: usize = 16;

    pub fn new(expr: Expr) -> Result<Self, ParseError> {
        let variables: Vec<char> = expr.variables().into_iter().collect();
        check_variable_count(variables.len())?;
        debug!("truth table over {:?} for {}", variables, expr);
        Ok(Self { expr, variables })
    }

    /// Parse `expression` and build its table.
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        Self::new(parse(expression)?)
    }
}

impl TruthTable {
    pub fn expr(&self) -> &Expr {
        &self.expr
    }

    pub fn variables(&self) -> &[char] {
        &self.variables
    }

    pub fn num_rows(&self) -> usize {
        1 << self.variables.len()
    }

    /// Compute row `index`, or `None` if the table has no such row.
    pub fn row(&self, index: usize) -> Option<Row> {
        if index >= self.num_rows() {
            return None;
        }
        let assignment: Vec<(char, bool)> = self
            .variables
            .iter()
            .enumerate()
            .map(|(j, &v)| (v, bit(index as u32, j as u32)))
            .collect();
        let result = self.expr.eval_with(&|v| {
            assignment
                .iter()
                .find(|(name, _)| *name == v)
                .is_some_and(|&(_, b)| b)
        });
        Some(Row {
            index,
            assignment,
            result,
        })
    }

    /// Iterate over all rows, in row-index order.
    pub fn rows(&self) -> Rows<'_> {
        Rows {
            table: self,
            next: 0,
            end: self.num_rows(),
        }
    }

    /// Indices of the rows where the expression is true.
    pub fn minterms(&self) -> Vec<usize> {
        self.rows().filter(|r| r.result).map(|r| r.index).collect()
    }

    pub fn classification(&self) -> Classification {
        let ones = self.rows().filter(|r| r.result).count();
        if ones == self.num_rows() {
            Classification::Tautology
        } else if ones == 0 {
            Classification::Contradiction
        } else {
            Classification::Contingency
        }
    }
}

/// Lazy iterator over the rows of a [`TruthTable`].
#[derive(Debug, Clone)]
pub struct Rows<'a> {
    table: &'a TruthTable,
    next: usize,
    end: usize,
}

impl Iterator for Rows<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        let row = self.table.row(self.next)?;
        self.next += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Rows<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        self.table.row(self.end)
    }
}

impl ExactSizeIterator for Rows<'_> {}

impl FusedIterator for Rows<'_> {}

fn check_variable_count(count: usize) -> Result<(), ParseError> {
    if count > TruthTable::MAX_VARIABLES {
        return Err(ParseError::TooManyVariables {
            count,
            max: TruthTable::MAX_VARIABLES,
        });
    }
    Ok(())
}

/// Check whether two expressions denote the same function.
///
/// Both are compared over the union of their variables, so `A ∨ (A ∧ B)` and
/// `A` are equivalent even though only one of them mentions `B`.
///
/// ```
/// use logic_rs::table::equivalent;
///
/// // De Morgan
/// assert!(equivalent("~(P & Q)", "(~P) | ~Q").unwrap());
/// assert!(!equivalent("P -> Q", "Q -> P").unwrap());
/// ```
pub fn equivalent(lhs: &str, rhs: &str) -> Result<bool, ParseError> {
    let lhs = parse(lhs)?;
    let rhs = parse(rhs)?;
    let variables: Vec<char> = lhs
        .variables()
        .union(&rhs.variables())
        .copied()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    check_variable_count(variables.len())?;

    let value_of = |i: usize| {
        let vars = &variables;
        move |v: char| {
            vars.iter()
                .position(|&name| name == v)
                .is_some_and(|j| bit(i as u32, j as u32))
        }
    };
    for i in 0..(1usize << variables.len()) {
        let value = value_of(i);
        if lhs.eval_with(&value) != rhs.eval_with(&value) {
            debug!("not equivalent at row {}", i);
            return Ok(false);
        }
    }
    Ok(true)
}
