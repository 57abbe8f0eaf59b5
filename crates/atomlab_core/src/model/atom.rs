//! Atom configuration value type.
//!
//! # Responsibility
//! - Define the canonical `(protons, neutrons, electrons, ion_mode)` record.
//! - Provide the clamp rules shared by every write path.
//!
//! # Invariants
//! - `protons` is within `[MIN_PROTONS, MAX_PROTONS]`.
//! - `electrons >= MIN_ELECTRONS`; `neutrons` is unsigned.
//! - `ion_mode` is a policy flag only; it does not tie electrons to protons.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Lowest allowed proton count (hydrogen).
pub const MIN_PROTONS: u32 = 1;
/// Highest allowed proton count (oganesson).
pub const MAX_PROTONS: u32 = 118;
/// Lowest allowed electron count.
pub const MIN_ELECTRONS: u32 = 1;

/// One snapshot of the atom being built.
///
/// Serialized with exactly four fields. Deserialization rejects values that
/// violate the clamp invariants instead of normalizing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AtomConfigurationWire")]
pub struct AtomConfiguration {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub ion_mode: bool,
}

#[derive(Deserialize)]
struct AtomConfigurationWire {
    protons: u32,
    neutrons: u32,
    electrons: u32,
    ion_mode: bool,
}

impl TryFrom<AtomConfigurationWire> for AtomConfiguration {
    type Error = AtomValidationError;

    fn try_from(value: AtomConfigurationWire) -> Result<Self, Self::Error> {
        let config = Self {
            protons: value.protons,
            neutrons: value.neutrons,
            electrons: value.electrons,
            ion_mode: value.ion_mode,
        };
        config.validate()?;
        Ok(config)
    }
}

impl Default for AtomConfiguration {
    /// Neutral carbon-12.
    fn default() -> Self {
        Self {
            protons: 6,
            neutrons: 6,
            electrons: 6,
            ion_mode: false,
        }
    }
}

impl AtomConfiguration {
    /// Builds a configuration from raw signed inputs, clamping each count.
    pub fn clamped(protons: i64, neutrons: i64, electrons: i64, ion_mode: bool) -> Self {
        Self {
            protons: clamp_protons(protons),
            neutrons: clamp_neutrons(neutrons),
            electrons: clamp_electrons(electrons),
            ion_mode,
        }
    }

    /// Checks the stored counts against the clamp invariants.
    ///
    /// Only reachable for values that bypassed the clamped constructors, e.g.
    /// struct literals or persisted rows.
    pub fn validate(&self) -> Result<(), AtomValidationError> {
        if !(MIN_PROTONS..=MAX_PROTONS).contains(&self.protons) {
            return Err(AtomValidationError::ProtonsOutOfRange(self.protons));
        }
        if self.electrons < MIN_ELECTRONS {
            return Err(AtomValidationError::ElectronsBelowMinimum(self.electrons));
        }
        Ok(())
    }

    /// Re-applies the clamp rules to already stored counts.
    pub fn normalized(self) -> Self {
        Self::clamped(
            i64::from(self.protons),
            i64::from(self.neutrons),
            i64::from(self.electrons),
            self.ion_mode,
        )
    }
}

/// Clamps a requested proton count into `[1, 118]`.
pub fn clamp_protons(value: i64) -> u32 {
    u32::try_from(value.clamp(i64::from(MIN_PROTONS), i64::from(MAX_PROTONS)))
        .unwrap_or(MAX_PROTONS)
}

/// Clamps a requested neutron count to `>= 0`, saturating at `u32::MAX`.
pub fn clamp_neutrons(value: i64) -> u32 {
    u32::try_from(value.max(0)).unwrap_or(u32::MAX)
}

/// Clamps a requested electron count to `>= 1`, saturating at `u32::MAX`.
pub fn clamp_electrons(value: i64) -> u32 {
    u32::try_from(value.max(i64::from(MIN_ELECTRONS))).unwrap_or(u32::MAX)
}

/// Invariant violations for configurations that did not pass through clamping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtomValidationError {
    ProtonsOutOfRange(u32),
    ElectronsBelowMinimum(u32),
}

impl Display for AtomValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ProtonsOutOfRange(value) => write!(
                f,
                "protons ({value}) must be within {MIN_PROTONS}..={MAX_PROTONS}"
            ),
            Self::ElectronsBelowMinimum(value) => {
                write!(f, "electrons ({value}) must be >= {MIN_ELECTRONS}")
            }
        }
    }
}

impl Error for AtomValidationError {}
