//! Sum-of-products equations over `A`, `B` and `C`.
//!
//! An equation is written `f = AB + A'C`: product terms joined by `+`, each
//! term a run of literals, a trailing `'` complementing the variable before
//! it. The `f =` prefix, whitespace and the explicit AND marks `·`, `*` and
//! `.` are optional.
//!
//! A variable left out of a term is a don't-care for that term. A term that
//! contains both `X` and `X'` can never be true and is dropped. The constant
//! terms `0` and `1` are accepted.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use log::debug;

use crate::error::EquationError;
use crate::kmap::KarnaughMap;
use crate::literal::Literal;

/// A product of literals. The empty product is the constant `1`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash)]
pub struct Term {
    literals: Vec<Literal>,
}

impl Term {
    /// The constant `1`.
    pub fn one() -> Self {
        Self::default()
    }

    /// A product of the given literals, in order, with repeats removed.
    pub fn from_literals<I>(literals: I) -> Self
    where
        I: IntoIterator<Item = Literal>,
    {
        let mut term = Self::one();
        for lit in literals {
            if !term.literals.contains(&lit) {
                term.literals.push(lit);
            }
        }
        term
    }

    pub fn literal(lit: Literal) -> Self {
        Self { literals: vec![lit] }
    }

    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    pub fn is_one(&self) -> bool {
        self.literals.is_empty()
    }

    /// Whether the term holds both polarities of some variable.
    pub fn is_contradictory(&self) -> bool {
        self.literals
            .iter()
            .enumerate()
            .any(|(i, x)| self.literals[i + 1..].iter().any(|y| x.is_complement_of(y)))
    }

    /// The product of `self` and `other`.
    pub fn and(&self, other: &Term) -> Term {
        Term::from_literals(self.literals.iter().chain(&other.literals).cloned())
    }

    /// Evaluate with `value` supplying each variable's value.
    pub fn eval_with<F>(&self, value: F) -> bool
    where
        F: Fn(&str) -> bool,
    {
        self.literals.iter().all(|lit| lit.apply(value(lit.name())))
    }

    /// Evaluate with `A = a`, `B = b`, `C = c` and every other variable `false`.
    pub fn eval_abc(&self, a: bool, b: bool, c: bool) -> bool {
        self.eval_with(|name| match name {
            "A" => a,
            "B" => b,
            "C" => c,
            _ => false,
        })
    }
}

impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        for lit in &self.literals {
            write!(f, "{}", lit)?;
        }
        Ok(())
    }
}

/// A sum of product terms. The empty sum is the constant `0`.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Equation {
    terms: Vec<Term>,
}

// Constructors
impl Equation {
    /// The constant `0`.
    pub fn zero() -> Self {
        Self::default()
    }

    /// A sum of the given terms. Contradictory terms are dropped.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = Term>,
    {
        Self {
            terms: terms.into_iter().filter(|t| !t.is_contradictory()).collect(),
        }
    }

    /// Parse `text` as a sum-of-products equation.
    ///
    /// ```
    /// use logic_rs::equation::Equation;
    ///
    /// let eq = Equation::parse("f = AB + A'C").unwrap();
    /// assert_eq!(eq.terms().len(), 2);
    /// assert_eq!(eq.to_string(), "f = AB + A'C");
    /// assert!(Equation::parse("f = AD").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, EquationError> {
        let chars: Vec<(usize, char)> = text.chars().enumerate().filter(|(_, c)| !c.is_whitespace()).collect();
        let body = match chars.as_slice() {
            [(_, 'f' | 'F'), (_, '='), rest @ ..] => rest,
            all => all,
        };

        let mut terms = Vec::new();
        for piece in body.split(|&(_, c)| c == '+') {
            if piece.is_empty() {
                continue;
            }
            if let Some(term) = parse_term(piece)? {
                terms.push(term);
            }
        }
        let equation = Self::from_terms(terms);
        debug!("parsed {:?} into {}", text, equation);
        Ok(equation)
    }
}

/// Parse one product term. `Ok(None)` means the term is the constant `0`.
fn parse_term(piece: &[(usize, char)]) -> Result<Option<Term>, EquationError> {
    let mut literals = Vec::new();
    let mut zero = false;
    let mut iter = piece.iter().peekable();
    while let Some(&(pos, c)) = iter.next() {
        match c {
            'A' | 'B' | 'C' => {
                let mut negated = false;
                while iter.next_if(|&&(_, m)| m == '\'' || m == '’').is_some() {
                    negated = !negated;
                }
                literals.push(Literal::new(c.to_string(), negated));
            }
            '\'' | '’' => return Err(EquationError::DanglingComplement { pos }),
            '·' | '*' | '.' | '1' => {}
            '0' => zero = true,
            c if c.is_ascii_alphabetic() => return Err(EquationError::UnsupportedVariable(c)),
            _ => return Err(EquationError::UnexpectedChar { ch: c, pos }),
        }
    }
    if zero {
        return Ok(None);
    }
    Ok(Some(Term::from_literals(literals)))
}

impl FromStr for Equation {
    type Err = EquationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Equation {
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether some term is the constant `1`.
    pub fn has_one(&self) -> bool {
        self.terms.iter().any(|t| t.is_one())
    }

    pub fn eval_abc(&self, a: bool, b: bool, c: bool) -> bool {
        self.terms.iter().any(|t| t.eval_abc(a, b, c))
    }

    /// Set every cell covered by some term.
    pub fn to_karnaugh_map(&self) -> KarnaughMap {
        KarnaughMap::from_fn(|a, b, c| self.eval_abc(a, b, c))
    }
}

impl From<&KarnaughMap> for Equation {
    fn from(map: &KarnaughMap) -> Self {
        Equation::from_terms(map.simplify())
    }
}

impl Display for Equation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "f = ")?;
        if self.is_zero() {
            return write!(f, "0");
        }
        for (i, term) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}", term)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_log::test;

    fn set_cells(map: &KarnaughMap) -> Vec<(usize, usize)> {
        KarnaughMap::cells().filter(|&(r, c)| map.get(r, c) == Ok(true)).collect()
    }

    #[test]
    fn test_two_term_equation_map() {
        let map = Equation::parse("f = AB + A'C").unwrap().to_karnaugh_map();
        let mut expected = vec![(1, 2), (1, 3), (0, 1), (0, 2)];
        expected.sort();
        assert_eq!(set_cells(&map), expected);
    }

    #[test]
    fn test_dont_cares() {
        let map = Equation::parse("f = B").unwrap().to_karnaugh_map();
        assert_eq!(set_cells(&map), vec![(0, 2), (0, 3), (1, 2), (1, 3)]);
    }

    #[test]
    fn test_optional_syntax() {
        let plain = Equation::parse("AB+A'C").unwrap();
        assert_eq!(Equation::parse("f=AB+A'C").unwrap(), plain);
        assert_eq!(Equation::parse("  f = A·B + A' * C ").unwrap(), plain);
        assert_eq!("f = A.B + A'C".parse::<Equation>().unwrap(), plain);
    }

    #[test]
    fn test_constants() {
        assert!(Equation::parse("f = 0").unwrap().is_zero());
        assert!(Equation::parse("f = ").unwrap().is_zero());
        assert!(Equation::parse("").unwrap().is_zero());
        assert!(Equation::parse("f = 1").unwrap().has_one());
        assert_eq!(Equation::parse("f = 1").unwrap().to_karnaugh_map(), KarnaughMap::filled(true));
        // A zero factor kills the term, a one factor is neutral.
        assert_eq!(Equation::parse("f = A0 + B1").unwrap(), Equation::parse("f = B").unwrap());
    }

    #[test]
    fn test_contradictory_terms_dropped() {
        let eq = Equation::parse("f = AA' + C").unwrap();
        assert_eq!(eq.to_string(), "f = C");
        let eq = Equation::parse("f = BB'").unwrap();
        assert!(eq.is_zero());
        assert_eq!(eq.to_karnaugh_map(), KarnaughMap::new());
    }

    #[test]
    fn test_repeated_literals_collapse() {
        let eq = Equation::parse("f = AAB").unwrap();
        assert_eq!(eq.to_string(), "f = AB");
        // Double complement
        let eq = Equation::parse("f = A''").unwrap();
        assert_eq!(eq.to_string(), "f = A");
    }

    #[test]
    fn test_errors() {
        assert_eq!(Equation::parse("f = AD"), Err(EquationError::UnsupportedVariable('D')));
        assert_eq!(Equation::parse("f = 'A"), Err(EquationError::DanglingComplement { pos: 4 }));
        assert_eq!(
            Equation::parse("f = (A)"),
            Err(EquationError::UnexpectedChar { ch: '(', pos: 4 })
        );
        assert_eq!(Equation::parse("g = A"), Err(EquationError::UnsupportedVariable('g')));
    }

    #[test]
    fn test_display() {
        assert_eq!(Equation::zero().to_string(), "f = 0");
        assert_eq!(Equation::from_terms([Term::one()]).to_string(), "f = 1");
        let t = Term::from_literals([Literal::negative("A"), Literal::positive("B")]);
        assert_eq!(t.to_string(), "A'B");
    }

    #[test]
    fn test_term_product() {
        let a = Term::literal(Literal::positive("A"));
        let na = Term::literal(Literal::negative("A"));
        let b = Term::literal(Literal::positive("B"));
        assert_eq!(a.and(&b).to_string(), "AB");
        assert!(a.and(&na).is_contradictory());
        assert!(!a.and(&a).is_contradictory());
        assert_eq!(a.and(&a), a);
    }
}
