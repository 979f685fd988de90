//! The workbench: one circuit viewed three ways.
//!
//! A [`Workbench`] owns a single [`Circuit`]. The Karnaugh map, the equation
//! text and the output value are not stored next to it but derived from it on
//! every request, so the three views can never disagree.
//!
//! Editing the map or the equation rebuilds the circuit from scratch (inputs
//! are kept), and every mutation re-evaluates the circuit before returning.
//!
//! ```
//! use logic_rs::workbench::Workbench;
//!
//! let mut wb = Workbench::new();
//! wb.set_equation_text("f = AB + A'C").unwrap();
//! assert_eq!(wb.karnaugh_map().get(1, 2), Ok(true));
//! assert_eq!(wb.equation_text(), "f = AB + A'C");
//!
//! wb.set_karnaugh_cell(0, 0, true).unwrap();
//! assert_eq!(wb.karnaugh_map().minterms(), vec![0, 1, 3, 6, 7]);
//! ```

use log::debug;

use crate::circuit::{Circuit, Component};
use crate::equation::Equation;
use crate::error::{CellOutOfRange, CircuitError, EquationError};
use crate::gate::ComponentKind;
use crate::kmap::KarnaughMap;
use crate::layout::find_free_position;
use crate::types::{ComponentId, Position, Variable};

/// Configuration for a [`Workbench`].
///
/// The Karnaugh map and the equation are always over `A`, `B` and `C`.
/// Other letters in `inputs` become ordinary inputs: they hold their current
/// value while the map is built, and synthesis adds any of `A`, `B`, `C` that
/// is missing.
///
/// ```
/// use logic_rs::workbench::{Workbench, WorkbenchConfig};
///
/// let config = WorkbenchConfig {
///     inputs: vec!['A', 'B'],
///     ..WorkbenchConfig::default()
/// };
/// let wb = Workbench::with_config(config);
/// assert_eq!(wb.variables().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct WorkbenchConfig {
    /// Inputs present on a fresh workbench (default: `A`, `B`, `C`).
    /// Only `A`, `B` and `C` are Karnaugh map variables.
    pub inputs: Vec<char>,
    /// Minimum spacing between auto-placed components (default: 60)
    pub grid_size: f64,
    /// How many spiral steps auto-placement tries (default: 20)
    pub placement_attempts: usize,
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            inputs: vec!['A', 'B', 'C'],
            grid_size: 60.0,
            placement_attempts: 20,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Workbench {
    circuit: Circuit,
    config: WorkbenchConfig,
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

// Constructors
impl Workbench {
    pub fn new() -> Self {
        Self::with_config(WorkbenchConfig::default())
    }

    pub fn with_config(config: WorkbenchConfig) -> Self {
        let mut wb = Self {
            circuit: Circuit::new(),
            config,
        };
        wb.add_initial_inputs();
        wb
    }

    fn add_initial_inputs(&mut self) {
        for (i, name) in self.config.inputs.iter().enumerate() {
            let position = Position::new(200.0, 100.0 * (i + 1) as f64);
            self.circuit.add_component(ComponentKind::Input, name.to_string(), position);
        }
    }

    /// Go back to the initial inputs, all low, with nothing else on the canvas.
    ///
    /// Ids handed out before the reset stay retired.
    pub fn reset(&mut self) {
        debug!("reset()");
        self.circuit.clear();
        self.add_initial_inputs();
        self.circuit.evaluate();
    }
}

// Getters
impl Workbench {
    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    pub fn config(&self) -> &WorkbenchConfig {
        &self.config
    }

    pub fn components(&self) -> &[Component] {
        self.circuit.components()
    }

    /// Input components, as named variables.
    pub fn variables(&self) -> Vec<Variable> {
        self.circuit
            .components_of(ComponentKind::Input)
            .map(|c| Variable::new(c.name(), c.value()))
            .collect()
    }

    pub fn output_value(&self) -> bool {
        self.circuit.output_value()
    }

    pub fn karnaugh_map(&self) -> KarnaughMap {
        KarnaughMap::from_circuit(&self.circuit)
    }

    /// The circuit as a sum of products.
    ///
    /// Circuits built by synthesis, or drawn by hand in the same two-level
    /// shape over `A`, `B` and `C`, are read structurally. Anything else,
    /// including a network reading another input, is described by a
    /// simplification of its Karnaugh map.
    pub fn equation(&self) -> Equation {
        self.circuit
            .read_equation()
            .unwrap_or_else(|| Equation::from(&self.karnaugh_map()))
    }

    pub fn equation_text(&self) -> String {
        self.equation().to_string()
    }
}

// Graph edits
impl Workbench {
    pub fn add_component(&mut self, kind: ComponentKind, name: impl Into<String>, position: Position) -> ComponentId {
        self.circuit.add_component(kind, name, position)
    }

    /// Add a component with a generated name at a free spot near where its kind is usually drawn.
    pub fn add_gate(&mut self, kind: ComponentKind) -> ComponentId {
        let name = self.next_name(kind);
        let occupied: Vec<Position> = self.components().iter().map(|c| c.position()).collect();
        let position = find_free_position(
            kind.base_position(),
            &occupied,
            self.config.grid_size,
            self.config.placement_attempts,
        );
        debug!("add_gate(kind = {}) -> {} at {}", kind, name, position);
        self.circuit.add_component(kind, name, position)
    }

    pub fn add_gates(&mut self, kind: ComponentKind, count: usize) -> Vec<ComponentId> {
        (0..count).map(|_| self.add_gate(kind)).collect()
    }

    fn next_name(&self, kind: ComponentKind) -> String {
        let count = self.circuit.components_of(kind).count();
        match kind {
            ComponentKind::Input => ('A'..='Z')
                .map(String::from)
                .find(|name| self.circuit.find_input(name).is_none())
                .unwrap_or_else(|| format!("I{}", count + 1)),
            ComponentKind::Output if count == 0 => kind.name_prefix().to_string(),
            _ => format!("{}{}", kind.name_prefix(), count + 1),
        }
    }

    pub fn move_component(&mut self, id: ComponentId, position: Position) -> Result<(), CircuitError> {
        self.circuit.move_component(id, position)
    }

    pub fn connect(&mut self, from: ComponentId, to: ComponentId) -> Result<(), CircuitError> {
        self.circuit.connect(from, to)
    }

    pub fn delete_component(&mut self, id: ComponentId) -> Result<Component, CircuitError> {
        self.circuit.delete_component(id)
    }

    pub fn set_input_value(&mut self, id: ComponentId, value: bool) -> Result<(), CircuitError> {
        self.circuit.set_input_value(id, value)
    }

    pub fn toggle_input(&mut self, id: ComponentId) -> Result<bool, CircuitError> {
        self.circuit.toggle_input(id)
    }
}

// Map and equation edits
impl Workbench {
    /// Set one cell of the current map and rebuild the circuit for the new map.
    pub fn set_karnaugh_cell(&mut self, row: usize, col: usize, value: bool) -> Result<(), CellOutOfRange> {
        debug!("set_karnaugh_cell(row = {}, col = {}, value = {})", row, col, value);
        let mut map = self.karnaugh_map();
        map.set(row, col, value)?;
        self.set_karnaugh_map(&map);
        Ok(())
    }

    /// Rebuild the circuit to compute `map`.
    pub fn set_karnaugh_map(&mut self, map: &KarnaughMap) {
        let equation = Equation::from(map);
        self.circuit.synthesize(&equation);
    }

    /// Set every cell to `value`.
    pub fn fill_karnaugh(&mut self, value: bool) {
        debug!("fill_karnaugh(value = {})", value);
        self.set_karnaugh_map(&KarnaughMap::filled(value));
    }

    /// Parse `text` and rebuild the circuit to compute it.
    ///
    /// On error the workbench is left as it was.
    pub fn set_equation_text(&mut self, text: &str) -> Result<(), EquationError> {
        debug!("set_equation_text({:?})", text);
        let equation = Equation::parse(text)?;
        self.circuit.synthesize(&equation);
        Ok(())
    }
}
