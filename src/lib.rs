//! # logic-rs: Digital Logic in Rust
//!
//! **`logic-rs`** is a small engine for working with **combinational logic** three ways at once:
//! as a circuit of gates, as a three-variable Karnaugh map, and as a sum-of-products equation.
//! Edit any one of them and the other two follow.
//!
//! It also ships a standalone **boolean expression evaluator** with truth tables,
//! for the propositional side of things (`P → Q`, `¬(A ∧ B) ↔ ¬A ∨ ¬B`, ...).
//!
//! ## Key Features
//!
//! - **One Source of Truth**: The [`Workbench`][crate::workbench::Workbench] owns a single circuit. The map and the equation are derived from it on demand, so they never go stale.
//! - **Always a DAG**: [`Circuit::connect`][crate::circuit::Circuit::connect] refuses edges into inputs, edges past a gate's fan-in, and edges that would close a loop. A refused edge leaves the circuit untouched.
//! - **Side-Effect-Free Probing**: Karnaugh maps are built by [simulating][crate::circuit::Circuit::simulate] the circuit, never by poking its inputs.
//! - **Typed Errors**: Every failure is a value (see [`error`]); nothing in the library panics on bad input.
//!
//! ## Basic Usage
//!
//! ```rust
//! use logic_rs::workbench::Workbench;
//!
//! // 1. A fresh workbench has inputs A, B and C
//! let mut wb = Workbench::new();
//!
//! // 2. Type an equation: the circuit is rebuilt to compute it
//! wb.set_equation_text("f = AB + A'C").unwrap();
//!
//! // 3. The Karnaugh map follows
//! let map = wb.karnaugh_map();
//! assert_eq!(map.get(1, 2), Ok(true)); // A=1, B=1, C=1
//! assert_eq!(map.get(0, 0), Ok(false)); // A=0, B=0, C=0
//!
//! // 4. Flip a map cell: the circuit is rebuilt again
//! wb.set_karnaugh_cell(0, 0, true).unwrap();
//! assert_eq!(wb.karnaugh_map().get(0, 0), Ok(true));
//! ```
//!
//! Expressions are evaluated independently of any circuit:
//!
//! ```rust
//! use logic_rs::table::{Classification, TruthTable};
//!
//! let table = TruthTable::parse("P ∨ ¬P").unwrap();
//! assert_eq!(table.classification(), Classification::Tautology);
//! ```
//!
//! ## Core Components
//!
//! - **[`circuit`]** and **[`eval`]**: The gate graph and how it is evaluated.
//! - **[`kmap`]**: Karnaugh maps, probing and simplification.
//! - **[`equation`]** and **[`synth`]**: Sum-of-products text and its translation to and from circuits.
//! - **[`parser`]**, **[`ast`]** and **[`table`]**: Boolean expressions and their truth tables.
//! - **[`workbench`]**: Ties all of the above together.

pub mod ast;
pub mod circuit;
pub mod debug;
pub mod dot;
pub mod equation;
pub mod error;
pub mod eval;
pub mod gate;
pub mod kmap;
pub mod layout;
pub mod literal;
pub mod parser;
pub mod synth;
pub mod table;
pub mod types;
pub mod utils;
pub mod workbench;
