use atomlab_core::{
    AtomConfiguration, AtomEngine, EngineConfig, RandomSource, SeededRandom, TOTAL_SHELL_CAPACITY,
};
use std::collections::VecDeque;

/// Replays scripted draws, clamped into the requested range.
struct ScriptedRandom {
    values: VecDeque<i64>,
}

impl ScriptedRandom {
    fn new(values: &[i64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }
}

impl RandomSource for ScriptedRandom {
    fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        let value = self.values.pop_front().expect("scripted value available");
        value.clamp(low, high)
    }
}

fn seeded_engine(seed: u64) -> AtomEngine<SeededRandom> {
    AtomEngine::with_random(EngineConfig::default(), SeededRandom::new(seed))
}

fn config(protons: u32, neutrons: u32, electrons: u32, ion_mode: bool) -> AtomConfiguration {
    AtomConfiguration {
        protons,
        neutrons,
        electrons,
        ion_mode,
    }
}

#[test]
fn setters_clamp_every_input() {
    let mut engine = seeded_engine(1);
    for value in [-1_000, -1, 0, 1, 2, 57, 117, 118, 119, 10_000] {
        engine.set_protons(value);
        assert_eq!(i64::from(engine.configuration().protons), value.clamp(1, 118));

        engine.set_neutrons(value);
        assert_eq!(i64::from(engine.configuration().neutrons), value.max(0));

        engine.set_electrons(value);
        assert_eq!(i64::from(engine.configuration().electrons), value.max(1));
    }
}

#[test]
fn derived_values_track_current_state() {
    let mut engine = seeded_engine(2);
    for (p, n, e) in [(1, 0, 1), (8, 10, 10), (92, 146, 88), (12, 0, 1)] {
        engine.update_atom(p, n, e);
        let current = engine.configuration();
        assert_eq!(
            engine.charge(),
            i64::from(current.electrons) - i64::from(current.protons)
        );
        assert_eq!(
            engine.mass_number(),
            u64::from(current.protons) + u64::from(current.neutrons)
        );
        assert_eq!(engine.atomic_number(), current.protons);

        let derived = engine.derived();
        assert_eq!(derived.charge, engine.charge());
        assert_eq!(derived.electron_configuration, engine.electron_configuration());
    }
}

#[test]
fn each_mutation_appends_one_history_entry() {
    let mut engine = seeded_engine(3);
    assert_eq!(engine.history_index(), 0);
    assert!(!engine.can_undo());

    engine.set_protons(7);
    engine.set_neutrons(7);
    engine.set_electrons(8);
    engine.set_ion_mode(true);
    engine.randomize_atom();
    engine.reset_atom();

    assert_eq!(engine.history_index(), 6);
    assert_eq!(engine.history_len(), 7);
    assert_eq!(engine.can_undo(), engine.history_index() > 0);
    assert!(!engine.can_redo());
}

#[test]
fn carbon_to_oxygen_and_back() {
    let mut engine = seeded_engine(4);
    assert_eq!(engine.configuration(), config(6, 6, 6, false));

    engine.set_protons(8);
    assert_eq!(engine.configuration(), config(8, 6, 6, false));
    assert_eq!(engine.charge(), -2);
    assert_eq!(engine.mass_number(), 14);

    assert!(engine.undo());
    assert_eq!(engine.configuration(), config(6, 6, 6, false));

    assert!(engine.redo());
    assert_eq!(engine.configuration(), config(8, 6, 6, false));
}

#[test]
fn undo_restores_state_before_last_mutation() {
    let mut engine = seeded_engine(5);
    engine.set_protons(3);
    engine.set_neutrons(4);
    let before_last = engine.configuration();

    engine.set_electrons(1);
    let after_last = engine.configuration();

    engine.undo();
    assert_eq!(engine.configuration(), before_last);
    engine.redo();
    assert_eq!(engine.configuration(), after_last);
}

#[test]
fn new_mutation_after_undo_discards_redo_branch() {
    let mut engine = seeded_engine(6);
    engine.set_protons(2);
    engine.set_protons(3);
    engine.undo();
    assert!(engine.can_redo());

    engine.set_neutrons(9);
    assert!(!engine.can_redo());
    assert!(!engine.redo());
    assert_eq!(engine.configuration(), config(2, 9, 6, false));
}

#[test]
fn repeated_boundary_moves_do_not_corrupt_history() {
    let mut engine = seeded_engine(7);
    engine.set_protons(10);

    for _ in 0..10 {
        engine.undo();
    }
    assert_eq!(engine.history_index(), 0);
    assert_eq!(engine.configuration(), config(6, 6, 6, false));

    for _ in 0..10 {
        engine.redo();
    }
    assert_eq!(engine.history_index(), 1);
    assert_eq!(engine.history_len(), 2);
    assert_eq!(engine.configuration(), config(10, 6, 6, false));
}

#[test]
fn ion_mode_on_moves_electrons_away_from_neutral() {
    for seed in 0..200 {
        let mut engine = seeded_engine(seed);
        engine.set_ion_mode(true);
        let electrons = engine.configuration().electrons;
        assert!(
            [3, 4, 5, 7, 8, 9].contains(&electrons),
            "seed {seed} produced {electrons}"
        );
        assert!(engine.configuration().ion_mode);
    }
}

#[test]
fn ion_mode_uses_injected_source_exactly() {
    // magnitude 2, sign draw 0 => negative
    let mut engine = AtomEngine::with_random(EngineConfig::default(), ScriptedRandom::new(&[2, 0]));
    engine.set_ion_mode(true);
    assert_eq!(engine.configuration(), config(6, 6, 4, true));
    assert_eq!(engine.charge(), -2);

    let mut engine = AtomEngine::with_random(EngineConfig::default(), ScriptedRandom::new(&[3, 1]));
    engine.set_ion_mode(true);
    assert_eq!(engine.configuration().electrons, 9);
}

#[test]
fn ion_mode_floors_electrons_at_one() {
    let mut engine = AtomEngine::with_random(EngineConfig::default(), ScriptedRandom::new(&[3, 0]));
    engine.set_protons(1);
    engine.set_ion_mode(true);
    assert_eq!(engine.configuration().electrons, 1);
}

#[test]
fn ion_mode_off_neutralizes() {
    let mut engine = seeded_engine(8);
    engine.set_electrons(2);
    engine.set_ion_mode(false);
    assert_eq!(engine.configuration(), config(6, 6, 6, false));
    assert_eq!(engine.charge(), 0);
}

#[test]
fn randomize_respects_ranges_and_neutrality() {
    let mut engine = seeded_engine(9);
    for _ in 0..300 {
        let next = engine.randomize_atom();
        assert!((1..=12).contains(&next.protons));
        assert!(next.neutrons <= 13);
        assert_eq!(next.electrons, next.protons);
    }
}

#[test]
fn randomize_in_ion_mode_offsets_electrons() {
    let mut engine = seeded_engine(10);
    engine.set_ion_mode(true);
    for _ in 0..300 {
        let next = engine.randomize_atom();
        let offset = i64::from(next.electrons) - i64::from(next.protons);
        assert!(next.electrons >= 1);
        assert!((-2..=2).contains(&offset) || next.electrons == 1);
        assert!(next.ion_mode);
    }
}

#[test]
fn randomize_uses_injected_source_exactly() {
    let mut engine =
        AtomEngine::with_random(EngineConfig::default(), ScriptedRandom::new(&[11, 12]));
    assert_eq!(engine.randomize_atom(), config(11, 12, 11, false));

    // ion on: magnitude 1, positive; then protons 1, neutrons 0, offset -2
    let mut engine = AtomEngine::with_random(
        EngineConfig::default(),
        ScriptedRandom::new(&[1, 1, 1, 0, -2]),
    );
    engine.set_ion_mode(true);
    assert_eq!(engine.randomize_atom(), config(1, 0, 1, true));
}

#[test]
fn reset_appends_instead_of_clearing() {
    let mut engine = seeded_engine(11);
    engine.set_protons(1);
    engine.set_ion_mode(true);
    engine.reset_atom();

    assert_eq!(engine.configuration(), config(6, 6, 6, false));
    assert_eq!(engine.history_index(), 3);
    engine.undo();
    assert!(engine.configuration().ion_mode);
}

#[test]
fn reset_uses_configured_defaults() {
    let defaults = config(1, 0, 1, false);
    let mut engine = AtomEngine::with_random(
        EngineConfig {
            defaults,
            history_capacity: 10,
        },
        SeededRandom::new(12),
    );
    engine.set_protons(50);
    engine.reset_atom();
    assert_eq!(engine.configuration(), defaults);
}

#[test]
fn history_capacity_bounds_the_log() {
    let mut engine = AtomEngine::with_random(
        EngineConfig {
            defaults: AtomConfiguration::default(),
            history_capacity: 4,
        },
        SeededRandom::new(13),
    );
    for protons in 1..=10 {
        engine.set_protons(protons);
    }
    assert_eq!(engine.history_len(), 4);
    assert_eq!(engine.history_index(), 3);

    while engine.undo() {}
    assert_eq!(engine.configuration().protons, 7);
}

#[test]
fn electron_configuration_caps_at_total_capacity() {
    let mut engine = seeded_engine(14);
    engine.set_electrons(500);
    let configuration = engine.electron_configuration();
    let total: u32 = configuration
        .split_whitespace()
        .map(|token| token[2..].parse::<u32>().expect("numeric count"))
        .sum();
    assert_eq!(total, TOTAL_SHELL_CAPACITY);
    assert!(configuration.ends_with("7p6"));
}

#[test]
fn restoring_from_snapshot_starts_fresh_history() {
    let snapshot = config(11, 12, 10, true);
    let engine =
        AtomEngine::from_configuration(EngineConfig::default(), snapshot, SeededRandom::new(15));
    assert_eq!(engine.configuration(), snapshot);
    assert_eq!(engine.history_index(), 0);
    assert_eq!(engine.element().map(|element| element.name), Some("Sodium"));
    assert_eq!(engine.charge(), -1);
}
