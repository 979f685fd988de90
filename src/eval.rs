//! Circuit evaluation.
//!
//! A pass goes through three phases:
//!
//! 1. **Reset.** Every non-input value is cleared to `false`. Inputs keep
//!    their value, or take the one supplied by the caller.
//! 2. **Ordered.** A depth-first post-order walk upstream from every output
//!    and every OR gate yields a list in which each component comes after all
//!    of its inputs.
//! 3. **Evaluated.** Components are computed in that order.
//!
//! Components that do not feed an output or an OR gate are left out of the
//! order and keep the reset value `false`.
//!
//! [`Circuit::simulate`] runs a pass without touching the circuit, which is
//! what Karnaugh map probing uses. [`Circuit::evaluate`] runs a pass on the
//! current input values and stores the results.

use std::collections::{HashMap, HashSet};

use log::trace;

use crate::circuit::{Circuit, Component};
use crate::gate::ComponentKind;
use crate::types::ComponentId;

/// Result of one evaluation pass.
#[derive(Debug, Clone)]
pub struct Evaluation {
    values: HashMap<ComponentId, bool>,
    order: Vec<ComponentId>,
    output: bool,
}

impl Evaluation {
    /// Value of component `id` in this pass.
    pub fn value(&self, id: ComponentId) -> Option<bool> {
        self.values.get(&id).copied()
    }

    /// Components in the order they were computed.
    pub fn order(&self) -> &[ComponentId] {
        &self.order
    }

    /// Value of the first output, or `false` if there is none.
    pub fn output(&self) -> bool {
        self.output
    }
}

impl ComponentKind {
    /// Compute a gate from the values of its inputs.
    ///
    /// A gate with nothing connected is `false`: an AND gate is not vacuously
    /// `true`, and a NOT gate without an input is not the negation of anything.
    pub fn compute(self, inputs: &[bool]) -> bool {
        match self {
            ComponentKind::Input => false,
            ComponentKind::Output => inputs.first().copied().unwrap_or(false),
            ComponentKind::AndGate => !inputs.is_empty() && inputs.iter().all(|&v| v),
            ComponentKind::OrGate => inputs.iter().any(|&v| v),
            ComponentKind::NotGate => inputs.first().is_some_and(|&v| !v),
        }
    }
}

impl Circuit {
    /// Components in evaluation order.
    ///
    /// Roots are visited in component order. Within a component, inputs are
    /// visited in connection order.
    pub fn evaluation_order(&self) -> Vec<ComponentId> {
        let index: HashMap<ComponentId, &Component> = self.components().iter().map(|c| (c.id(), c)).collect();
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        for root in self
            .components()
            .iter()
            .filter(|c| matches!(c.kind(), ComponentKind::Output | ComponentKind::OrGate))
        {
            visit(root.id(), &index, &mut visited, &mut order);
        }
        order
    }

    /// Evaluate the circuit without modifying it.
    ///
    /// `input_value` supplies the value of each input component.
    pub fn simulate<F>(&self, input_value: F) -> Evaluation
    where
        F: Fn(&Component) -> bool,
    {
        // Reset
        let mut values: HashMap<ComponentId, bool> = self
            .components()
            .iter()
            .map(|c| {
                let value = if c.kind().is_input() { input_value(c) } else { false };
                (c.id(), value)
            })
            .collect();

        // Ordered
        let order = self.evaluation_order();

        // Evaluated
        for &id in &order {
            let Some(c) = self.component(id) else { continue };
            if c.kind().is_input() {
                continue;
            }
            // Inputs past the cap are ignored.
            let inputs: Vec<bool> = c
                .inputs()
                .iter()
                .take(c.kind().max_inputs())
                .map(|i| values.get(i).copied().unwrap_or(false))
                .collect();
            let value = c.kind().compute(&inputs);
            trace!("{} {} = {}", c.kind(), c.name(), value);
            values.insert(id, value);
        }

        let output = self
            .first_output()
            .and_then(|out| values.get(&out.id()).copied())
            .unwrap_or(false);
        Evaluation { values, order, output }
    }

    /// Evaluate the circuit on its current input values and store the results.
    ///
    /// Returns the new output value.
    pub fn evaluate(&mut self) -> bool {
        let evaluation = self.simulate(|c| c.value());
        let ids: Vec<ComponentId> = self.components().iter().map(|c| c.id()).collect();
        for id in ids {
            if let (Some(value), Some(c)) = (evaluation.value(id), self.component_mut(id)) {
                c.set_value(value);
            }
        }
        self.set_output_value(evaluation.output());
        evaluation.output()
    }
}

fn visit(
    id: ComponentId,
    index: &HashMap<ComponentId, &Component>,
    visited: &mut HashSet<ComponentId>,
    order: &mut Vec<ComponentId>,
) {
    if !visited.insert(id) {
        return;
    }
    let Some(c) = index.get(&id) else { return };
    for &input in c.inputs() {
        visit(input, index, visited, order);
    }
    order.push(id);
}
