//! Circuit to DOT (Graphviz) conversion.
//!
//! The generated graph follows these conventions:
//! - **Inputs** are drawn at the top (source rank), **outputs** at the bottom (sink rank)
//! - **Gates** are labelled with their name and kind
//! - **Edges** point in the direction the signal flows
//! - Components whose last evaluated value is `1` are filled
//!
//! # Examples
//!
//! ```
//! use logic_rs::workbench::Workbench;
//!
//! let mut wb = Workbench::new();
//! wb.set_equation_text("f = AB + A'C").unwrap();
//!
//! let dot = wb.circuit().to_dot().unwrap();
//! // Write to file and render with: dot -Tpng output.dot -o output.png
//! assert!(dot.starts_with("digraph {"));
//! ```

use std::fmt::Write as _;

use crate::circuit::{Circuit, Component};
use crate::gate::ComponentKind;

/// Configuration options for DOT output generation.
///
/// ```
/// use logic_rs::dot::DotConfig;
/// use logic_rs::workbench::Workbench;
///
/// let wb = Workbench::new();
/// let config = DotConfig {
///     gate_shape: "circle",
///     ..DotConfig::default()
/// };
/// let dot = wb.circuit().to_dot_with_config(&config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for input nodes (default: "invtriangle")
    pub input_shape: &'static str,
    /// Shape for output nodes (default: "doublecircle")
    pub output_shape: &'static str,
    /// Shape for gate nodes (default: "box")
    pub gate_shape: &'static str,
    /// Fill color for components currently at `1` (default: "palegreen")
    pub active_color: &'static str,
    /// Whether to annotate nodes with their current value (default: true)
    pub show_values: bool,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            input_shape: "invtriangle",
            output_shape: "doublecircle",
            gate_shape: "box",
            active_color: "palegreen",
            show_values: true,
        }
    }
}

impl Circuit {
    /// Converts the circuit to DOT format with the default configuration.
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    /// Converts the circuit to DOT format.
    ///
    /// Nodes are named by component id, so two components sharing a display
    /// name are still drawn apart.
    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;
        writeln!(dot, "rankdir=TB;")?;

        for (rank, kind) in [("source", ComponentKind::Input), ("sink", ComponentKind::Output)] {
            writeln!(dot, "{{ rank={}", rank)?;
            for c in self.components_of(kind) {
                let shape = if kind.is_input() { config.input_shape } else { config.output_shape };
                writeln!(dot, "c{} [shape={}, label=\"{}\"{}];", c.id().get(), shape, label(c, config), fill(c, config))?;
            }
            writeln!(dot, "}}")?;
        }

        for c in self.components().iter().filter(|c| c.kind().is_gate()) {
            writeln!(
                dot,
                "c{} [shape={}, label=\"{}\\n{}\"{}];",
                c.id().get(),
                config.gate_shape,
                c.name(),
                c.kind(),
                fill(c, config)
            )?;
        }

        for c in self.components() {
            for input in c.inputs() {
                writeln!(dot, "c{} -> c{};", input.get(), c.id().get())?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

fn label(c: &Component, config: &DotConfig) -> String {
    if config.show_values {
        format!("{} = {}", c.name(), c.value() as u8)
    } else {
        c.name().to_string()
    }
}

fn fill(c: &Component, config: &DotConfig) -> String {
    if c.value() {
        format!(", style=filled, fillcolor={}", config.active_color)
    } else {
        String::new()
    }
}
