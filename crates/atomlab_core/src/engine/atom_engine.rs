//! Atom builder state engine.
//!
//! # Responsibility
//! - Own the current `AtomConfiguration` and its undo/redo history.
//! - Apply clamp rules on every write and record exactly one history entry.
//! - Expose derived properties as pure reads over current state.
//!
//! # Invariants
//! - Setters never fail; out-of-range input is clamped and logged at `warn`.
//! - Each mutating call fully updates state and history before returning.
//! - History is seeded with the initial configuration, so every mutation is undoable.
//! - History is only reachable read-only from outside the engine.

use crate::engine::history::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
use crate::engine::random::{RandomSource, ThreadRandom};
use crate::model::atom::{clamp_electrons, clamp_neutrons, clamp_protons, AtomConfiguration};
use crate::model::derived::{self, DerivedProperties};
use crate::model::element::{element_by_atomic_number, Element};
use log::{debug, warn};

/// Proton range drawn by `randomize_atom`.
const RANDOM_PROTONS: (i64, i64) = (1, 12);
/// Neutron range drawn by `randomize_atom`.
const RANDOM_NEUTRONS: (i64, i64) = (0, 13);
/// Electron offset drawn by `randomize_atom` in ion mode.
const RANDOM_ION_OFFSET: (i64, i64) = (-2, 2);
/// Charge magnitude applied when ion mode is switched on.
const ION_MODE_CHARGE: (i64, i64) = (1, 3);

/// Construction-time engine settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Initial configuration and `reset_atom` target.
    pub defaults: AtomConfiguration,
    /// Maximum retained history entries; floors at 1.
    pub history_capacity: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            defaults: AtomConfiguration::default(),
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Caller-owned atom state with linear undo/redo.
#[derive(Debug)]
pub struct AtomEngine<R: RandomSource = ThreadRandom> {
    current: AtomConfiguration,
    history: HistoryLog,
    config: EngineConfig,
    random: R,
}

impl AtomEngine<ThreadRandom> {
    /// Creates an engine backed by the thread RNG.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_random(config, ThreadRandom)
    }
}

impl Default for AtomEngine<ThreadRandom> {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl<R: RandomSource> AtomEngine<R> {
    /// Creates an engine starting at `config.defaults`.
    pub fn with_random(config: EngineConfig, random: R) -> Self {
        let initial = config.defaults;
        Self::from_configuration(config, initial, random)
    }

    /// Creates an engine starting at a previously saved configuration.
    ///
    /// The snapshot is re-clamped; history starts fresh with it as the only entry.
    pub fn from_configuration(
        config: EngineConfig,
        initial: AtomConfiguration,
        random: R,
    ) -> Self {
        let config = EngineConfig {
            defaults: config.defaults.normalized(),
            history_capacity: config.history_capacity.max(1),
        };
        let initial = initial.normalized();
        debug!(
            "event=engine_init module=engine status=ok protons={} neutrons={} electrons={} ion_mode={} history_capacity={}",
            initial.protons,
            initial.neutrons,
            initial.electrons,
            initial.ion_mode,
            config.history_capacity
        );
        Self {
            current: initial,
            history: HistoryLog::seeded(config.history_capacity, initial),
            config,
            random,
        }
    }

    pub fn set_protons(&mut self, value: i64) -> AtomConfiguration {
        let protons = clamp_protons(value);
        warn_if_clamped("set_protons", value, protons);
        let next = AtomConfiguration {
            protons,
            ..self.current
        };
        self.commit("set_protons", next.normalized())
    }

    pub fn set_neutrons(&mut self, value: i64) -> AtomConfiguration {
        let neutrons = clamp_neutrons(value);
        warn_if_clamped("set_neutrons", value, neutrons);
        let next = AtomConfiguration {
            neutrons,
            ..self.current
        };
        self.commit("set_neutrons", next)
    }

    pub fn set_electrons(&mut self, value: i64) -> AtomConfiguration {
        let electrons = clamp_electrons(value);
        warn_if_clamped("set_electrons", value, electrons);
        let next = AtomConfiguration {
            electrons,
            ..self.current
        };
        self.commit("set_electrons", next)
    }

    /// Switches ion mode and applies its electron policy.
    ///
    /// Turning on moves electrons to `protons ± k` with `k` in `1..=3`
    /// (floored at 1). Turning off makes the atom neutral. Either way the
    /// electron count may change even if the flag already had this value.
    pub fn set_ion_mode(&mut self, enabled: bool) -> AtomConfiguration {
        let protons = i64::from(self.current.protons);
        let electrons = if enabled {
            let magnitude = self.random.next_in_range(ION_MODE_CHARGE.0, ION_MODE_CHARGE.1);
            let sign = if self.random.next_in_range(0, 1) == 0 { -1 } else { 1 };
            clamp_electrons(protons + sign * magnitude)
        } else {
            self.current.protons
        };
        let next = AtomConfiguration {
            electrons,
            ion_mode: enabled,
            ..self.current
        };
        self.commit("set_ion_mode", next)
    }

    /// Writes all three counts at once as a single history entry.
    pub fn update_atom(&mut self, protons: i64, neutrons: i64, electrons: i64) -> AtomConfiguration {
        let next = AtomConfiguration::clamped(protons, neutrons, electrons, self.current.ion_mode);
        warn_if_clamped("update_atom", protons, next.protons);
        warn_if_clamped("update_atom", neutrons, next.neutrons);
        warn_if_clamped("update_atom", electrons, next.electrons);
        self.commit("update_atom", next)
    }

    /// Adds (or removes, when negative) electrons.
    pub fn create_ion(&mut self, charge_change: i64) -> AtomConfiguration {
        let requested = i64::from(self.current.electrons).saturating_add(charge_change);
        self.set_electrons(requested)
    }

    /// Adds (or removes, when negative) neutrons.
    pub fn create_isotope(&mut self, neutron_change: i64) -> AtomConfiguration {
        let requested = i64::from(self.current.neutrons).saturating_add(neutron_change);
        self.set_neutrons(requested)
    }

    /// Restores the configured defaults as a new history entry.
    pub fn reset_atom(&mut self) -> AtomConfiguration {
        let defaults = self.config.defaults;
        self.commit("reset_atom", defaults)
    }

    /// Draws a small random atom; keeps it neutral unless ion mode is on.
    pub fn randomize_atom(&mut self) -> AtomConfiguration {
        let protons = self.random.next_in_range(RANDOM_PROTONS.0, RANDOM_PROTONS.1);
        let neutrons = self.random.next_in_range(RANDOM_NEUTRONS.0, RANDOM_NEUTRONS.1);
        let electrons = if self.current.ion_mode {
            protons + self.random.next_in_range(RANDOM_ION_OFFSET.0, RANDOM_ION_OFFSET.1)
        } else {
            protons
        };
        let next = AtomConfiguration::clamped(protons, neutrons, electrons, self.current.ion_mode);
        self.commit("randomize_atom", next)
    }

    /// Steps back one history entry. Returns whether the state changed position.
    pub fn undo(&mut self) -> bool {
        match self.history.undo() {
            Some(previous) => {
                self.current = previous;
                debug!(
                    "event=atom_undo module=engine status=ok history_index={}",
                    self.history.index()
                );
                true
            }
            None => false,
        }
    }

    /// Steps forward one history entry. Returns whether the state changed position.
    pub fn redo(&mut self) -> bool {
        match self.history.redo() {
            Some(next) => {
                self.current = next;
                debug!(
                    "event=atom_redo module=engine status=ok history_index={}",
                    self.history.index()
                );
                true
            }
            None => false,
        }
    }

    pub fn configuration(&self) -> AtomConfiguration {
        self.current
    }

    pub fn engine_config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history_index(&self) -> i64 {
        self.history.index()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn atomic_number(&self) -> u32 {
        self.current.protons
    }

    pub fn mass_number(&self) -> u64 {
        derived::mass_number(self.current.protons, self.current.neutrons)
    }

    pub fn charge(&self) -> i64 {
        derived::charge(self.current.protons, self.current.electrons)
    }

    pub fn is_stable(&self) -> bool {
        derived::is_stable(
            self.current.protons,
            self.current.neutrons,
            self.current.electrons,
        )
    }

    pub fn electron_configuration(&self) -> String {
        derived::electron_configuration(self.current.electrons)
    }

    pub fn derived(&self) -> DerivedProperties {
        DerivedProperties::of(&self.current)
    }

    /// Reference record for the current proton count, if seeded.
    pub fn element(&self) -> Option<&'static Element> {
        element_by_atomic_number(self.current.protons)
    }

    fn commit(&mut self, operation: &'static str, next: AtomConfiguration) -> AtomConfiguration {
        self.current = next;
        self.history.push(next);
        debug!(
            "event=atom_update module=engine status=ok op={} protons={} neutrons={} electrons={} ion_mode={} history_index={}",
            operation,
            next.protons,
            next.neutrons,
            next.electrons,
            next.ion_mode,
            self.history.index()
        );
        next
    }
}

fn warn_if_clamped(operation: &'static str, requested: i64, applied: u32) {
    if requested != i64::from(applied) {
        warn!(
            "event=input_clamped module=engine status=clamped op={} requested={} applied={}",
            operation, requested, applied
        );
    }
}
