//! The circuit graph.
//!
//! A [`Circuit`] owns a list of [`Component`]s. Each component lists the ids
//! of the components it receives a signal from, so edges point upstream:
//! `and.inputs() == [a, b]` means `a` and `b` both feed `and`.
//!
//! The graph keeps three invariants at all times:
//!
//! - inputs never receive connections, and every other kind stays within its
//!   [fan-in cap][ComponentKind::max_inputs];
//! - the graph is acyclic;
//! - no component refers to a deleted id.
//!
//! Every mutation that would break one of them is rejected with a
//! [`CircuitError`] and leaves the circuit untouched. Every successful
//! mutation re-evaluates the circuit before returning.

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::error::CircuitError;
use crate::gate::ComponentKind;
use crate::types::{ComponentId, Position};

#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    id: ComponentId,
    kind: ComponentKind,
    name: String,
    position: Position,
    inputs: Vec<ComponentId>,
    value: bool,
}

impl Component {
    fn new(id: ComponentId, kind: ComponentKind, name: String, position: Position) -> Self {
        Self {
            id,
            kind,
            name,
            position,
            inputs: Vec::new(),
            value: false,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn kind(&self) -> ComponentKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Components feeding this one, in connection order.
    pub fn inputs(&self) -> &[ComponentId] {
        &self.inputs
    }

    /// Value computed by the last evaluation (or driven, for inputs).
    pub fn value(&self) -> bool {
        self.value
    }

    pub(crate) fn set_value(&mut self, value: bool) {
        self.value = value;
    }
}

#[derive(Debug, Clone)]
pub struct Circuit {
    components: Vec<Component>,
    next_id: ComponentId,
    output_value: bool,
}

impl Default for Circuit {
    fn default() -> Self {
        Self::new()
    }
}

impl Circuit {
    pub fn new() -> Self {
        Self {
            components: Vec::new(),
            next_id: ComponentId::new(1),
            output_value: false,
        }
    }
}

// Getters
impl Circuit {
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    pub(crate) fn component_mut(&mut self, id: ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    fn get(&self, id: ComponentId) -> Result<&Component, CircuitError> {
        self.component(id).ok_or(CircuitError::UnknownComponent(id))
    }

    pub fn components_of(&self, kind: ComponentKind) -> impl Iterator<Item = &Component> + '_ {
        self.components.iter().filter(move |c| c.kind == kind)
    }

    /// The first input component called `name`.
    pub fn find_input(&self, name: &str) -> Option<&Component> {
        self.components_of(ComponentKind::Input).find(|c| c.name == name)
    }

    /// The output that equations are read from.
    ///
    /// Several outputs may exist; only the first one added counts.
    pub fn first_output(&self) -> Option<&Component> {
        self.components_of(ComponentKind::Output).next()
    }

    /// The value of the circuit, as of the last evaluation.
    pub fn output_value(&self) -> bool {
        self.output_value
    }

    pub(crate) fn set_output_value(&mut self, value: bool) {
        self.output_value = value;
    }
}

// Mutators
impl Circuit {
    /// Add a disconnected component and return its id.
    pub fn add_component(&mut self, kind: ComponentKind, name: impl Into<String>, position: Position) -> ComponentId {
        let id = self.next_id;
        self.next_id = id.next();
        let name = name.into();
        debug!("add_component(kind = {}, name = {:?}, position = {}) -> {}", kind, name, position, id);
        self.components.push(Component::new(id, kind, name, position));
        self.evaluate();
        id
    }

    /// Move a component on the canvas. Does not affect evaluation.
    pub fn move_component(&mut self, id: ComponentId, position: Position) -> Result<(), CircuitError> {
        let component = self.component_mut(id).ok_or(CircuitError::UnknownComponent(id))?;
        component.position = position;
        Ok(())
    }

    /// Delete a component together with every edge that mentions it.
    pub fn delete_component(&mut self, id: ComponentId) -> Result<Component, CircuitError> {
        let index = self
            .components
            .iter()
            .position(|c| c.id == id)
            .ok_or(CircuitError::UnknownComponent(id))?;
        debug!("delete_component(id = {})", id);
        let removed = self.components.remove(index);
        for c in self.components.iter_mut() {
            c.inputs.retain(|&i| i != id);
        }
        self.evaluate();
        Ok(removed)
    }

    /// Check whether `from -> to` could be added, without adding it.
    pub fn can_connect(&self, from: ComponentId, to: ComponentId) -> Result<(), CircuitError> {
        self.get(from)?;
        let target = self.get(to)?;
        if target.kind.is_input() {
            return Err(CircuitError::TargetIsInput(to));
        }
        let max = target.kind.max_inputs();
        if target.inputs.len() >= max {
            return Err(CircuitError::FanInExceeded {
                id: to,
                kind: target.kind,
                max,
            });
        }
        // The new edge closes a cycle iff `to` already feeds `from`.
        if self.is_upstream(to, from) {
            return Err(CircuitError::WouldCreateCycle { from, to });
        }
        Ok(())
    }

    /// Feed the output of `from` into `to`.
    pub fn connect(&mut self, from: ComponentId, to: ComponentId) -> Result<(), CircuitError> {
        if let Err(e) = self.can_connect(from, to) {
            debug!("connect(from = {}, to = {}) rejected: {}", from, to, e);
            return Err(e);
        }
        debug!("connect(from = {}, to = {})", from, to);
        self.link(from, to);
        self.evaluate();
        Ok(())
    }

    /// Add an edge the caller has already validated.
    pub(crate) fn link(&mut self, from: ComponentId, to: ComponentId) {
        debug_assert!(self.can_connect(from, to).is_ok(), "invalid link {} -> {}", from, to);
        if let Some(target) = self.component_mut(to) {
            target.inputs.push(from);
        }
    }

    /// Drive an input component.
    pub fn set_input_value(&mut self, id: ComponentId, value: bool) -> Result<(), CircuitError> {
        let component = self.component_mut(id).ok_or(CircuitError::UnknownComponent(id))?;
        if !component.kind.is_input() {
            return Err(CircuitError::NotAnInput(id));
        }
        debug!("set_input_value(id = {}, value = {})", id, value);
        component.value = value;
        self.evaluate();
        Ok(())
    }

    /// Flip an input component and return its new value.
    pub fn toggle_input(&mut self, id: ComponentId) -> Result<bool, CircuitError> {
        let value = !self.get(id)?.value;
        self.set_input_value(id, value)?;
        Ok(value)
    }

    /// Drop every component that is not an input.
    pub(crate) fn clear_gates(&mut self) {
        self.components.retain(|c| c.kind.is_input());
        for c in self.components.iter_mut() {
            c.inputs.clear();
        }
    }

    /// Drop every component.
    pub fn clear(&mut self) {
        self.components.clear();
        self.output_value = false;
    }
}

// Graph queries
impl Circuit {
    /// Whether `source` feeds `sink`, directly or through other components.
    ///
    /// Walks upstream from `sink` breadth-first. A component is considered
    /// upstream of itself.
    pub fn is_upstream(&self, source: ComponentId, sink: ComponentId) -> bool {
        let mut visited = HashSet::new();
        let mut queue = VecDeque::from([sink]);
        while let Some(current) = queue.pop_front() {
            if current == source {
                return true;
            }
            if !visited.insert(current) {
                continue;
            }
            if let Some(c) = self.component(current) {
                queue.extend(c.inputs.iter().copied());
            }
        }
        false
    }

    /// Whether no component feeds itself.
    pub fn is_acyclic(&self) -> bool {
        self.components
            .iter()
            .all(|c| c.inputs.iter().all(|&i| !self.is_upstream(c.id, i)))
    }
}
