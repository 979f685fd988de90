//! Parsing of infix boolean expressions.
//!
//! The grammar is deliberately small. An expression is one of:
//!
//! - a parenthesized expression, when the opening parenthesis at the start
//!   is closed by the very last token;
//! - a negation `¬E`, when the input starts with a negation sign;
//! - a binary application `L op R`, split on the **first** top-level
//!   occurrence of the first operator from [`BinOp::PRIORITY`] that appears
//!   at parenthesis depth 0;
//! - a single variable (`A`..`Z`) or constant (`0`, `1`).
//!
//! A leading negation takes everything after it: `¬P ∧ Q` reads as
//! `¬(P ∧ Q)`. Write `(¬P) ∧ Q` to negate `P` alone.
//!
//! There is no operator precedence beyond the priority list: `A ∨ B ∧ C`
//! splits on `∧` and reads as `(A ∨ B) ∧ C`. Chains of one operator split
//! on the leftmost occurrence, so `A → B → C` reads as `A → (B → C)`.
//!
//! Two symbol dialects are accepted and can be mixed:
//!
//! ```text
//! NOT      ~  !  ¬
//! AND      &  *  ·  ∧
//! OR       |  +  ∨
//! XOR      ^  ⊕
//! IMPLIES  -> => →
//! IFF      <-> <=> ↔
//! ```

use std::collections::BTreeSet;

use log::trace;

use crate::ast::{BinOp, Expr};
use crate::error::ParseError;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
enum Token {
    Var(char),
    Const(bool),
    Not,
    Op(BinOp),
    LParen,
    RParen,
}

#[derive(Debug, Copy, Clone)]
struct Spanned {
    token: Token,
    /// Character offset of the token in the input.
    pos: usize,
}

fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    let chars: Vec<char> = input.chars().collect();
    let followed_by = |i: usize, rest: &str| rest.chars().enumerate().all(|(k, c)| chars.get(i + 1 + k) == Some(&c));

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c.is_whitespace() {
            i += 1;
            continue;
        }
        let (token, len) = match c {
            'A'..='Z' => (Token::Var(c), 1),
            '0' => (Token::Const(false), 1),
            '1' => (Token::Const(true), 1),
            '~' | '!' | '¬' => (Token::Not, 1),
            '&' | '*' | '·' | '∧' => (Token::Op(BinOp::And), 1),
            '|' | '+' | '∨' => (Token::Op(BinOp::Or), 1),
            '^' | '⊕' => (Token::Op(BinOp::Xor), 1),
            '→' => (Token::Op(BinOp::Implies), 1),
            '↔' => (Token::Op(BinOp::Iff), 1),
            '-' | '=' if followed_by(i, ">") => (Token::Op(BinOp::Implies), 2),
            '<' if followed_by(i, "->") || followed_by(i, "=>") => (Token::Op(BinOp::Iff), 3),
            '(' => (Token::LParen, 1),
            ')' => (Token::RParen, 1),
            _ => return Err(ParseError::UnexpectedChar { ch: c, pos: i }),
        };
        tokens.push(Spanned { token, pos: i });
        i += len;
    }
    Ok(tokens)
}

fn check_balanced(tokens: &[Spanned]) -> Result<(), ParseError> {
    let mut open = Vec::new();
    for t in tokens {
        match t.token {
            Token::LParen => open.push(t.pos),
            Token::RParen => {
                if open.pop().is_none() {
                    return Err(ParseError::UnbalancedParens { pos: t.pos });
                }
            }
            _ => {}
        }
    }
    match open.pop() {
        Some(pos) => Err(ParseError::UnbalancedParens { pos }),
        None => Ok(()),
    }
}

/// Index of the parenthesis closing the one at `start`.
fn matching_paren(tokens: &[Spanned], start: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (i, t) in tokens.iter().enumerate().skip(start) {
        match t.token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Index of the leftmost `op` at parenthesis depth 0.
fn find_top_level(tokens: &[Spanned], op: BinOp) -> Option<usize> {
    let mut depth = 0usize;
    for (i, t) in tokens.iter().enumerate() {
        match t.token {
            Token::LParen => depth += 1,
            Token::RParen => depth -= 1,
            Token::Op(o) if o == op && depth == 0 => return Some(i),
            _ => {}
        }
    }
    None
}

/// Parse a balanced token slice. `at` is the input position the slice starts at.
fn parse_slice(tokens: &[Spanned], at: usize) -> Result<Expr, ParseError> {
    let Some(first) = tokens.first() else {
        return Err(ParseError::MissingOperand { pos: at });
    };
    let last = tokens.len() - 1;

    if first.token == Token::LParen && matching_paren(tokens, 0) == Some(last) {
        return parse_slice(&tokens[1..last], first.pos + 1);
    }

    if first.token == Token::Not {
        return Ok(Expr::not(parse_slice(&tokens[1..], first.pos + 1)?));
    }

    for op in BinOp::PRIORITY {
        if let Some(i) = find_top_level(tokens, op) {
            trace!("split on {:?} at position {}", op, tokens[i].pos);
            let lhs = parse_slice(&tokens[..i], tokens[i].pos)?;
            let rhs = parse_slice(&tokens[i + 1..], tokens[i].pos + 1)?;
            return Ok(Expr::binary(op, lhs, rhs));
        }
    }

    if last == 0 {
        return match first.token {
            Token::Var(v) => Ok(Expr::var(v)),
            Token::Const(b) => Ok(Expr::constant(b)),
            _ => Err(ParseError::MissingOperand { pos: first.pos }),
        };
    }

    // Several operands with no operator between them.
    let end = match first.token {
        Token::LParen => matching_paren(tokens, 0).unwrap_or(0),
        _ => 0,
    };
    let pos = tokens.get(end + 1).map_or(first.pos, |t| t.pos);
    Err(ParseError::ExpectedOperator { pos })
}

/// Parse a boolean expression.
///
/// ```
/// use logic_rs::ast::Expr;
/// use logic_rs::parser::parse;
///
/// let e = parse("(~A) & (B | C)").unwrap();
/// assert_eq!(
///     e,
///     Expr::and(
///         Expr::not(Expr::var('A')),
///         Expr::or(Expr::var('B'), Expr::var('C')),
///     )
/// );
/// assert!(parse("(A & B").is_err());
/// ```
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    let tokens = tokenize(input)?;
    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    check_balanced(&tokens)?;
    parse_slice(&tokens, 0)
}

/// Variables referenced by `expression`, in ascending order.
///
/// This is a plain character scan and succeeds even on input that does not
/// parse, so a panel can show its variable columns while the user is typing.
pub fn extract_variables(expression: &str) -> BTreeSet<char> {
    expression.chars().filter(|c| c.is_ascii_uppercase()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(c: char) -> Expr {
        Expr::var(c)
    }

    #[test]
    fn test_literals() {
        assert_eq!(parse("A").unwrap(), v('A'));
        assert_eq!(parse(" 1 ").unwrap(), Expr::constant(true));
        assert_eq!(parse("0").unwrap(), Expr::constant(false));
        assert_eq!(parse("((Q))").unwrap(), v('Q'));
    }

    #[test]
    fn test_dialects_agree() {
        let expected = Expr::and(v('P'), v('Q'));
        for s in ["P & Q", "P ∧ Q", "P*Q", "P·Q"] {
            assert_eq!(parse(s).unwrap(), expected, "input {:?}", s);
        }
        let expected = Expr::implies(v('P'), v('Q'));
        for s in ["P -> Q", "P → Q", "P=>Q"] {
            assert_eq!(parse(s).unwrap(), expected, "input {:?}", s);
        }
        let expected = Expr::iff(v('P'), v('Q'));
        for s in ["P <-> Q", "P ↔ Q", "P<=>Q"] {
            assert_eq!(parse(s).unwrap(), expected, "input {:?}", s);
        }
        let expected = Expr::xor(v('A'), v('B'));
        for s in ["A ^ B", "A ⊕ B"] {
            assert_eq!(parse(s).unwrap(), expected, "input {:?}", s);
        }
    }

    #[test]
    fn test_first_match_priority() {
        // AND is tried first, even though OR comes first in the text.
        assert_eq!(parse("A | B & C").unwrap(), Expr::and(Expr::or(v('A'), v('B')), v('C')));
        // Leftmost occurrence of one operator.
        assert_eq!(
            parse("A -> B -> C").unwrap(),
            Expr::implies(v('A'), Expr::implies(v('B'), v('C')))
        );
        // Operators inside parentheses are skipped.
        assert_eq!(parse("(A & B) | C").unwrap(), Expr::or(Expr::and(v('A'), v('B')), v('C')));
    }

    #[test]
    fn test_leading_negation_takes_the_rest() {
        assert_eq!(parse("¬P ∧ Q").unwrap(), Expr::not(Expr::and(v('P'), v('Q'))));
        assert_eq!(parse("(¬P) ∧ Q").unwrap(), Expr::and(Expr::not(v('P')), v('Q')));
        assert_eq!(parse("P ∧ ¬Q").unwrap(), Expr::and(v('P'), Expr::not(v('Q'))));
        assert_eq!(parse("~A | B & C").unwrap(), Expr::not(Expr::and(Expr::or(v('A'), v('B')), v('C'))));
        assert_eq!(parse("~(A | B)").unwrap(), Expr::not(Expr::or(v('A'), v('B'))));
        assert_eq!(parse("!!A").unwrap(), Expr::not(Expr::not(v('A'))));
    }

    #[test]
    fn test_wrapping_parens_must_match_each_other() {
        // The outer pair does not enclose the whole input here.
        assert_eq!(parse("(A) & (B)").unwrap(), Expr::and(v('A'), v('B')));
    }

    #[test]
    fn test_errors() {
        assert_eq!(parse(""), Err(ParseError::Empty));
        assert_eq!(parse("   "), Err(ParseError::Empty));
        assert_eq!(parse("(A & B"), Err(ParseError::UnbalancedParens { pos: 0 }));
        assert_eq!(parse("A & B)"), Err(ParseError::UnbalancedParens { pos: 5 }));
        assert_eq!(parse("A & "), Err(ParseError::MissingOperand { pos: 3 }));
        assert_eq!(parse("& A"), Err(ParseError::MissingOperand { pos: 0 }));
        assert_eq!(parse("A B"), Err(ParseError::ExpectedOperator { pos: 2 }));
        assert_eq!(parse("(A)(B)"), Err(ParseError::ExpectedOperator { pos: 3 }));
        assert_eq!(parse("a & b"), Err(ParseError::UnexpectedChar { ch: 'a', pos: 0 }));
        assert_eq!(parse("A - B"), Err(ParseError::UnexpectedChar { ch: '-', pos: 2 }));
        assert_eq!(parse("~"), Err(ParseError::MissingOperand { pos: 1 }));
    }

    #[test]
    fn test_extract_variables() {
        let vars: Vec<char> = extract_variables("R ∨ (P → Q) ∧ P").into_iter().collect();
        assert_eq!(vars, vec!['P', 'Q', 'R']);
        assert!(extract_variables("1 & 0").is_empty());
        // Works on incomplete input too.
        let vars: Vec<char> = extract_variables("(B & A").into_iter().collect();
        assert_eq!(vars, vec!['A', 'B']);
    }
}
