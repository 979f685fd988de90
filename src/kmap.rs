//! Three-variable Karnaugh maps.
//!
//! The map is a 2×4 grid. The row is the value of `A`. The column is the
//! position of `BC` in the Gray sequence, so neighbouring columns (including
//! the wrap-around from the last to the first) differ in exactly one bit:
//!
//! ```text
//!        B'C'  B'C   BC   BC'
//!  A'     0     1     3    2
//!  A      4     5     7    6
//! ```
//!
//! The numbers are the minterm indices `4a + 2b + c`.

use std::fmt::{Display, Formatter};

use log::debug;

use crate::circuit::Circuit;
use crate::equation::Term;
use crate::error::CellOutOfRange;
use crate::literal::Literal;
use crate::utils::{bit, gray, gray_inverse};

/// The variables of the map, in minterm-bit order (most significant first).
pub const VARIABLES: [char; 3] = ['A', 'B', 'C'];

/// Column headers, left to right.
pub const COLUMN_LABELS: [&str; 4] = ["B'C'", "B'C", "BC", "BC'"];

pub const ROWS: usize = 2;
pub const COLUMNS: usize = 4;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct KarnaughMap {
    cells: [[bool; COLUMNS]; ROWS],
}

// Constructors
impl KarnaughMap {
    /// A map with every cell cleared.
    pub fn new() -> Self {
        Self::default()
    }

    /// A map with every cell set to `value`.
    pub fn filled(value: bool) -> Self {
        Self {
            cells: [[value; COLUMNS]; ROWS],
        }
    }

    /// A map holding `f(a, b, c)` in every cell.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(bool, bool, bool) -> bool,
    {
        let mut map = Self::new();
        for (row, col) in Self::cells() {
            let (a, b, c) = Self::assignment(row, col);
            map.cells[row][col] = f(a, b, c);
        }
        map
    }

    /// A map whose set cells are exactly the minterms in `bits` (bit `m` set
    /// means minterm `m` is true).
    pub fn from_minterm_bits(bits: u8) -> Self {
        Self::from_fn(|a, b, c| bit(bits as u32, Self::minterm(a, b, c) as u32))
    }

    /// Evaluate `circuit` under all eight assignments of `A`, `B` and `C`.
    ///
    /// Inputs named `A`, `B` or `C` are driven by the map; every other input
    /// keeps its current value. The circuit itself is not modified.
    pub fn from_circuit(circuit: &Circuit) -> Self {
        let map = Self::from_fn(|a, b, c| {
            circuit
                .simulate(|input| match input.name() {
                    "A" => a,
                    "B" => b,
                    "C" => c,
                    _ => input.value(),
                })
                .output()
        });
        debug!("sampled circuit into map with {} set cell(s)", map.count_ones());
        map
    }
}

// Coordinates
impl KarnaughMap {
    /// All cells in row-major order.
    pub fn cells() -> impl Iterator<Item = (usize, usize)> {
        (0..ROWS).flat_map(|row| (0..COLUMNS).map(move |col| (row, col)))
    }

    /// The column holding `B = b`, `C = c`.
    pub fn column_of(b: bool, c: bool) -> usize {
        gray_inverse(((b as u32) << 1) | c as u32) as usize
    }

    /// The cell holding the assignment `(a, b, c)`.
    pub fn cell_of(a: bool, b: bool, c: bool) -> (usize, usize) {
        (a as usize, Self::column_of(b, c))
    }

    /// The assignment `(a, b, c)` held by a cell.
    pub fn assignment(row: usize, col: usize) -> (bool, bool, bool) {
        let bc = gray(col as u32);
        (row == 1, bit(bc, 1), bit(bc, 0))
    }

    pub fn minterm(a: bool, b: bool, c: bool) -> usize {
        ((a as usize) << 2) | ((b as usize) << 1) | c as usize
    }

    /// The three cells adjacent to `(row, col)`: across the row divide and
    /// left and right with wrap-around.
    pub fn neighbors(row: usize, col: usize) -> [(usize, usize); 3] {
        [
            (1 - row, col),
            (row, (col + COLUMNS - 1) % COLUMNS),
            (row, (col + 1) % COLUMNS),
        ]
    }

    fn check(row: usize, col: usize) -> Result<(), CellOutOfRange> {
        if row < ROWS && col < COLUMNS {
            Ok(())
        } else {
            Err(CellOutOfRange { row, col })
        }
    }
}

// Getters and setters
impl KarnaughMap {
    pub fn get(&self, row: usize, col: usize) -> Result<bool, CellOutOfRange> {
        Self::check(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: bool) -> Result<(), CellOutOfRange> {
        Self::check(row, col)?;
        self.cells[row][col] = value;
        Ok(())
    }

    /// Value at assignment `(a, b, c)`.
    pub fn value(&self, a: bool, b: bool, c: bool) -> bool {
        let (row, col) = Self::cell_of(a, b, c);
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[bool; COLUMNS]; ROWS] {
        &self.cells
    }

    pub fn count_ones(&self) -> usize {
        self.cells.iter().flatten().filter(|&&v| v).count()
    }

    /// Minterm indices of the set cells, ascending.
    pub fn minterms(&self) -> Vec<usize> {
        let mut minterms: Vec<usize> = Self::cells()
            .filter(|&(row, col)| self.cells[row][col])
            .map(|(row, col)| {
                let (a, b, c) = Self::assignment(row, col);
                Self::minterm(a, b, c)
            })
            .collect();
        minterms.sort_unstable();
        minterms
    }

    /// Whether `term` is true in every cell it covers.
    fn implies(&self, term: &Term) -> bool {
        Self::cells().all(|(row, col)| !covers(term, row, col) || self.cells[row][col])
    }
}

/// Whether the product `term` is true at cell `(row, col)`.
pub fn covers(term: &Term, row: usize, col: usize) -> bool {
    let (a, b, c) = KarnaughMap::assignment(row, col);
    term.eval_abc(a, b, c)
}

fn term(literals: &[(&str, bool)]) -> Term {
    Term::from_literals(literals.iter().map(|&(name, negated)| Literal::new(name, negated)))
}

/// Candidate groups, tried in this order.
fn candidate_groups() -> Vec<Term> {
    let mut groups = Vec::new();

    // Quads: whole rows, then adjacent column pairs (with wrap-around).
    groups.push(term(&[("A", true)]));
    groups.push(term(&[("A", false)]));
    groups.push(term(&[("B", true)]));
    groups.push(term(&[("C", false)]));
    groups.push(term(&[("B", false)]));
    groups.push(term(&[("C", true)]));

    // Pairs: horizontal in each row, then vertical in each column.
    for a in [true, false] {
        groups.push(term(&[("A", a), ("B", true)]));
        groups.push(term(&[("A", a), ("C", false)]));
        groups.push(term(&[("A", a), ("B", false)]));
        groups.push(term(&[("A", a), ("C", true)]));
    }
    groups.push(term(&[("B", true), ("C", true)]));
    groups.push(term(&[("B", true), ("C", false)]));
    groups.push(term(&[("B", false), ("C", false)]));
    groups.push(term(&[("B", false), ("C", true)]));

    // Singles
    for (row, col) in KarnaughMap::cells() {
        let (a, b, c) = KarnaughMap::assignment(row, col);
        groups.push(term(&[("A", !a), ("B", !b), ("C", !c)]));
    }

    groups
}

impl KarnaughMap {
    /// Cover the set cells with product terms.
    ///
    /// A greedy pass over groups of four, then two, then single cells. A group
    /// is taken when all of its cells are set and it covers at least one set
    /// cell not yet covered. The result is always exact, but not necessarily
    /// minimal.
    ///
    /// An all-clear map gives no terms; an all-set map gives one empty term.
    pub fn simplify(&self) -> Vec<Term> {
        if self.count_ones() == ROWS * COLUMNS {
            return vec![Term::one()];
        }
        let mut covered = [[false; COLUMNS]; ROWS];
        let mut terms = Vec::new();
        for group in candidate_groups() {
            if !self.implies(&group) {
                continue;
            }
            let adds = Self::cells().any(|(row, col)| self.cells[row][col] && !covered[row][col] && covers(&group, row, col));
            if !adds {
                continue;
            }
            for (row, col) in Self::cells() {
                if covers(&group, row, col) {
                    covered[row][col] = true;
                }
            }
            terms.push(group);
        }
        debug!("simplified {} cell(s) into {} term(s)", self.count_ones(), terms.len());
        terms
    }
}

impl Display for KarnaughMap {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for label in COLUMN_LABELS {
            write!(f, " {:>4}", label)?;
        }
        for (row, cells) in self.cells.iter().enumerate() {
            writeln!(f)?;
            write!(f, "{:<4}", if row == 0 { "A'" } else { "A" })?;
            for &cell in cells {
                write!(f, " {:>4}", cell as u8)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    use crate::utils::hamming;

    #[test]
    fn test_column_layout() {
        assert_eq!(KarnaughMap::column_of(false, false), 0);
        assert_eq!(KarnaughMap::column_of(false, true), 1);
        assert_eq!(KarnaughMap::column_of(true, true), 2);
        assert_eq!(KarnaughMap::column_of(true, false), 3);
        for (row, col) in KarnaughMap::cells() {
            let (a, b, c) = KarnaughMap::assignment(row, col);
            assert_eq!(KarnaughMap::cell_of(a, b, c), (row, col));
        }
    }

    #[test]
    fn test_neighbors_differ_in_one_variable() {
        for (row, col) in KarnaughMap::cells() {
            let (a, b, c) = KarnaughMap::assignment(row, col);
            let m = KarnaughMap::minterm(a, b, c) as u32;
            for (r, k) in KarnaughMap::neighbors(row, col) {
                let (a2, b2, c2) = KarnaughMap::assignment(r, k);
                let n = KarnaughMap::minterm(a2, b2, c2) as u32;
                assert_eq!(hamming(m, n), 1, "({}, {}) vs ({}, {})", row, col, r, k);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        let mut map = KarnaughMap::new();
        assert_eq!(map.set(2, 0, true), Err(CellOutOfRange { row: 2, col: 0 }));
        assert_eq!(map.get(0, 4), Err(CellOutOfRange { row: 0, col: 4 }));
        assert_eq!(map, KarnaughMap::new());
    }

    #[test]
    fn test_minterms() {
        let map = KarnaughMap::from_fn(|a, b, _| a && b);
        assert_eq!(map.minterms(), vec![6, 7]);
        assert_eq!(map.get(1, 2), Ok(true));
        assert_eq!(map.get(1, 3), Ok(true));
        assert_eq!(KarnaughMap::from_minterm_bits(0b1100_0000), map);
    }

    #[test]
    fn test_simplify_constants() {
        assert!(KarnaughMap::new().simplify().is_empty());
        assert_eq!(KarnaughMap::filled(true).simplify(), vec![Term::one()]);
    }

    #[test]
    fn test_simplify_groups() {
        let map = KarnaughMap::from_fn(|a, _, _| !a);
        let terms: Vec<String> = map.simplify().iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["A'"]);

        // Wrap-around quad
        let map = KarnaughMap::from_fn(|_, _, c| !c);
        let terms: Vec<String> = map.simplify().iter().map(|t| t.to_string()).collect();
        assert_eq!(terms, vec!["C'"]);

        let map = KarnaughMap::from_fn(|a, b, c| (a && b) || (!a && c));
        let terms: Vec<String> = map.simplify().iter().map(|t| t.to_string()).collect();
        // Row A' is scanned first.
        assert_eq!(terms, vec!["A'C", "AB"]);
    }

    #[test]
    fn test_simplify_is_exact_for_every_map() {
        for bits in 0..=255u8 {
            let map = KarnaughMap::from_minterm_bits(bits);
            let terms = map.simplify();
            let rebuilt = KarnaughMap::from_fn(|a, b, c| terms.iter().any(|t| t.eval_abc(a, b, c)));
            assert_eq!(rebuilt, map, "minterm bits {:#010b}", bits);
        }
    }

    #[test]
    fn test_display() {
        let map = KarnaughMap::from_fn(|a, b, c| a && b && c);
        let expected = "     B'C'  B'C   BC  BC'\nA'      0    0    0    0\nA       0    0    1    0";
        assert_eq!(map.to_string(), expected);
    }
}
