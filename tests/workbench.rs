use std::collections::HashMap;

use test_log::test;

use logic_rs::ast::evaluate;
use logic_rs::equation::Equation;
use logic_rs::error::CircuitError;
use logic_rs::gate::ComponentKind;
use logic_rs::kmap::KarnaughMap;
use logic_rs::table::TruthTable;
use logic_rs::types::ComponentId;
use logic_rs::workbench::Workbench;

const EQUATIONS: &[&str] = &[
    "f = 0",
    "f = 1",
    "f = A",
    "f = A'",
    "f = AB + A'C",
    "f = AB'C + A'BC' + ABC",
    "f = A + B + C",
    "f = A'B'C'",
    "f = AC + BC' + A'B'",
    "f = AA' + B",
    "AB+BC+CA",
];

#[test]
fn test_every_map_survives_synthesis() {
    let mut wb = Workbench::new();
    for bits in 0..=255u8 {
        let map = KarnaughMap::from_minterm_bits(bits);
        wb.set_karnaugh_map(&map);
        assert_eq!(wb.karnaugh_map(), map, "minterm bits {:#010b}", bits);

        // The equation shown for the map denotes the same map.
        let text = wb.equation_text();
        let reparsed = Equation::parse(&text).unwrap();
        assert_eq!(reparsed.to_karnaugh_map(), map, "equation {:?}", text);

        assert!(wb.circuit().is_acyclic());
        assert!(wb
            .components()
            .iter()
            .all(|c| c.inputs().len() <= c.kind().max_inputs()));
    }
}

#[test]
fn test_equation_round_trip() {
    let mut wb = Workbench::new();
    for &text in EQUATIONS {
        wb.set_equation_text(text).unwrap();
        let expected = Equation::parse(text).unwrap().to_karnaugh_map();
        assert_eq!(wb.karnaugh_map(), expected, "equation {:?}", text);
        assert!(wb.circuit().verify_truth_table(|a, b, c| expected.value(a, b, c)).is_empty());
    }
}

#[test]
fn test_set_equation_text_is_idempotent() {
    for &text in EQUATIONS {
        let mut wb = Workbench::new();
        wb.set_equation_text(text).unwrap();
        let netlist = wb.circuit().canonical_text();
        let map = wb.karnaugh_map();
        let shown = wb.equation_text();

        wb.set_equation_text(text).unwrap();
        assert_eq!(wb.circuit().canonical_text(), netlist, "equation {:?}", text);
        assert_eq!(wb.karnaugh_map(), map);
        assert_eq!(wb.equation_text(), shown);
    }
}

#[test]
fn test_shown_equation_is_stable() {
    // Typing back what the workbench shows does not change anything.
    let mut wb = Workbench::new();
    for &text in EQUATIONS {
        wb.set_equation_text(text).unwrap();
        let shown = wb.equation_text();
        let netlist = wb.circuit().canonical_text();
        wb.set_equation_text(&shown).unwrap();
        assert_eq!(wb.equation_text(), shown);
        assert_eq!(wb.circuit().canonical_text(), netlist);
    }
}

#[test]
fn test_two_term_equation_cells() {
    let mut wb = Workbench::new();
    wb.set_equation_text("f = AB + A'C").unwrap();
    let map = wb.karnaugh_map();
    for (row, col) in KarnaughMap::cells() {
        let expected = matches!((row, col), (1, 2) | (1, 3) | (0, 1) | (0, 2));
        assert_eq!(map.get(row, col), Ok(expected), "cell ({}, {})", row, col);
    }
}

#[test]
fn test_and_truth_table_has_one_true_row() {
    let table = TruthTable::parse("A ∧ B").unwrap();
    let true_rows: Vec<_> = table.rows().filter(|r| r.result).collect();
    assert_eq!(true_rows.len(), 1);
    assert_eq!(true_rows[0].assignment, vec![('A', true), ('B', true)]);
}

#[test]
fn test_feedback_connection_rejected() {
    let mut wb = Workbench::new();
    let a = wb.circuit().find_input("A").unwrap().id();
    let b = wb.circuit().find_input("B").unwrap().id();
    let and = wb.add_gate(ComponentKind::AndGate);
    let or = wb.add_gate(ComponentKind::OrGate);
    let out = wb.add_gate(ComponentKind::Output);
    wb.connect(a, and).unwrap();
    wb.connect(and, or).unwrap();
    wb.connect(or, out).unwrap();

    let before = wb.components().to_vec();
    let err = wb.connect(or, and).unwrap_err();
    assert!(err.is_rejected_connection());
    assert_eq!(err, CircuitError::WouldCreateCycle { from: or, to: and });
    assert_eq!(wb.components(), &before[..]);

    // The free slot on AND is still usable.
    wb.connect(b, and).unwrap();
}

#[test]
fn test_deleting_not_gate_prunes_edge() {
    let mut wb = Workbench::new();
    let a = wb.circuit().find_input("A").unwrap().id();
    let b = wb.circuit().find_input("B").unwrap().id();
    let not = wb.add_gate(ComponentKind::NotGate);
    let and = wb.add_gate(ComponentKind::AndGate);
    let out = wb.add_gate(ComponentKind::Output);
    wb.connect(a, not).unwrap();
    wb.connect(not, and).unwrap();
    wb.connect(b, and).unwrap();
    wb.connect(and, out).unwrap();
    assert_eq!(wb.equation_text(), "f = A'B");

    wb.delete_component(not).unwrap();
    let and_gate = wb.circuit().component(and).unwrap();
    assert_eq!(and_gate.inputs(), &[b]);
    assert!(wb.components().iter().all(|c| !c.inputs().contains(&not)));
    assert_eq!(wb.equation_text(), "f = B");
}

/// Minimal linear congruential generator, enough to shuffle connect attempts.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        self.0 >> 33
    }

    fn pick<T: Copy>(&mut self, items: &[T]) -> T {
        items[(self.next() % items.len() as u64) as usize]
    }
}

#[test]
fn test_random_connects_keep_a_dag() {
    for seed in 0..20u64 {
        let mut rng = Lcg(seed);
        let mut wb = Workbench::new();
        let mut ids: Vec<ComponentId> = wb.components().iter().map(|c| c.id()).collect();
        for kind in [
            ComponentKind::AndGate,
            ComponentKind::AndGate,
            ComponentKind::OrGate,
            ComponentKind::OrGate,
            ComponentKind::NotGate,
            ComponentKind::NotGate,
            ComponentKind::Output,
        ] {
            ids.push(wb.add_gate(kind));
        }

        for _ in 0..200 {
            let from = rng.pick(&ids);
            let to = rng.pick(&ids);
            let before = wb.components().to_vec();
            match wb.connect(from, to) {
                Ok(()) => {}
                Err(e) => {
                    assert!(e.is_rejected_connection(), "seed {}: {}", seed, e);
                    assert_eq!(wb.components(), &before[..]);
                }
            }
            assert!(wb.circuit().is_acyclic(), "seed {}", seed);
            assert!(wb
                .components()
                .iter()
                .all(|c| c.inputs().len() <= c.kind().max_inputs()));
        }

        // Evaluation is a function of the graph and the inputs only.
        let first = wb.output_value();
        let mut circuit = wb.circuit().clone();
        assert_eq!(circuit.evaluate(), first);
        assert_eq!(circuit.components(), wb.components());
    }
}

#[test]
fn test_probing_does_not_disturb_inputs() {
    let mut wb = Workbench::new();
    wb.set_equation_text("f = AB + A'C").unwrap();
    let b = wb.circuit().find_input("B").unwrap().id();
    wb.set_input_value(b, true).unwrap();
    let before = wb.components().to_vec();
    let _ = wb.karnaugh_map();
    let _ = wb.equation_text();
    assert_eq!(wb.components(), &before[..]);
}

#[test]
fn test_unconnected_not_gate_is_low() {
    let mut wb = Workbench::new();
    let not = wb.add_gate(ComponentKind::NotGate);
    let out = wb.add_gate(ComponentKind::Output);
    wb.connect(not, out).unwrap();
    assert!(!wb.output_value());
    assert_eq!(wb.equation_text(), "f = 0");
    assert_eq!(wb.karnaugh_map(), KarnaughMap::new());
}

#[test]
fn test_leading_negation_scope() {
    let assignment = |p, q| HashMap::from([('P', p), ('Q', q)]);
    for (p, q) in [(false, false), (false, true), (true, false), (true, true)] {
        let a = assignment(p, q);
        assert_eq!(evaluate("¬P ∧ Q", &a), Ok(!(p && q)));
        assert_eq!(evaluate("(¬P) ∧ Q", &a), Ok(!p && q));
    }
    assert_eq!(
        TruthTable::parse("¬P ∧ Q").unwrap().minterms(),
        TruthTable::parse("¬(P ∧ Q)").unwrap().minterms()
    );
}

#[test]
fn test_shown_equation_matches_map_with_extra_input() {
    let mut wb = Workbench::new();
    let a = wb.circuit().find_input("A").unwrap().id();
    let d = wb.add_gate(ComponentKind::Input);
    let and = wb.add_gate(ComponentKind::AndGate);
    let out = wb.add_gate(ComponentKind::Output);
    wb.connect(a, and).unwrap();
    wb.connect(d, and).unwrap();
    wb.connect(and, out).unwrap();
    wb.set_input_value(d, true).unwrap();

    let shown = wb.equation_text();
    assert_eq!(shown, "f = A");
    assert_eq!(Equation::parse(&shown).unwrap().to_karnaugh_map(), wb.karnaugh_map());
    wb.set_equation_text(&shown).unwrap();
    assert_eq!(wb.equation_text(), shown);
}
