//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `atomlab_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use atomlab_core::{AtomEngine, EngineConfig, SeededRandom};

const SMOKE_SEED: u64 = 42;

fn main() {
    println!("atomlab_core version={}", atomlab_core::core_version());

    let mut engine = AtomEngine::with_random(EngineConfig::default(), SeededRandom::new(SMOKE_SEED));
    engine.set_protons(8);
    engine.set_neutrons(8);
    engine.set_electrons(8);
    print_atom("oxygen", &engine);

    engine.set_ion_mode(true);
    engine.randomize_atom();
    print_atom("seeded-random", &engine);

    engine.undo();
    print_atom("after-undo", &engine);
}

fn print_atom(label: &str, engine: &AtomEngine<SeededRandom>) {
    let config = engine.configuration();
    let derived = engine.derived();
    let symbol = engine.element().map_or("?", |element| element.symbol);
    println!(
        "{label}: element={symbol} p={} n={} e={} charge={} mass={} stable={} config={} history={}",
        config.protons,
        config.neutrons,
        config.electrons,
        derived.charge,
        derived.mass_number,
        derived.is_stable,
        derived.electron_configuration,
        engine.history_index()
    );
}
