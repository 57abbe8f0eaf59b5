//! Derived atomic properties.
//!
//! # Responsibility
//! - Compute everything the builder shows from `(protons, neutrons, electrons)`.
//! - Keep every calculation a pure function of its inputs.
//!
//! # Invariants
//! - Nothing here is stored; callers recompute on demand.
//! - Electron configuration never places more electrons in an orbital than
//!   its capacity and never exceeds `TOTAL_SHELL_CAPACITY` electrons.

use crate::model::atom::AtomConfiguration;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// One orbital in Madelung filling order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Orbital {
    /// Display label such as `2p`.
    pub label: &'static str,
    /// Maximum electron count.
    pub capacity: u32,
}

const fn orbital(label: &'static str, capacity: u32) -> Orbital {
    Orbital { label, capacity }
}

/// Orbitals in the order electrons are filled.
pub const SHELL_TABLE: &[Orbital] = &[
    orbital("1s", 2),
    orbital("2s", 2),
    orbital("2p", 6),
    orbital("3s", 2),
    orbital("3p", 6),
    orbital("4s", 2),
    orbital("3d", 10),
    orbital("4p", 6),
    orbital("5s", 2),
    orbital("4d", 10),
    orbital("5p", 6),
    orbital("6s", 2),
    orbital("4f", 14),
    orbital("5d", 10),
    orbital("6p", 6),
    orbital("7s", 2),
    orbital("5f", 14),
    orbital("6d", 10),
    orbital("7p", 6),
];

/// Sum of every orbital capacity in `SHELL_TABLE`.
pub const TOTAL_SHELL_CAPACITY: u32 = 118;

/// Snapshot of every derived value for one configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DerivedProperties {
    pub atomic_number: u32,
    pub mass_number: u64,
    pub charge: i64,
    pub is_stable: bool,
    pub electron_configuration: String,
}

impl DerivedProperties {
    pub fn of(config: &AtomConfiguration) -> Self {
        Self {
            atomic_number: config.protons,
            mass_number: mass_number(config.protons, config.neutrons),
            charge: charge(config.protons, config.electrons),
            is_stable: is_stable(config.protons, config.neutrons, config.electrons),
            electron_configuration: electron_configuration(config.electrons),
        }
    }
}

pub fn mass_number(protons: u32, neutrons: u32) -> u64 {
    u64::from(protons) + u64::from(neutrons)
}

/// Net charge: electrons minus protons.
pub fn charge(protons: u32, electrons: u32) -> i64 {
    i64::from(electrons) - i64::from(protons)
}

/// Superscript-style charge suffix: empty when neutral, `+n` or `-n` otherwise.
pub fn charge_symbol(charge: i64) -> String {
    match charge {
        0 => String::new(),
        c if c > 0 => format!("+{c}"),
        c => c.to_string(),
    }
}

/// Builder stability rule: small net charge and a near-balanced nucleus.
pub fn is_stable(protons: u32, neutrons: u32, electrons: u32) -> bool {
    let neutron_delta = i64::from(neutrons) - i64::from(protons);
    charge(protons, electrons).abs() <= 2 && neutron_delta.abs() <= 2
}

/// Nuclear stability estimate.
///
/// Light nuclei (Z <= 20) need N close to Z; heavier nuclei need a
/// neutron/proton ratio within `[1.0, 1.5]`.
pub fn nucleus_is_stable(protons: u32, neutrons: u32) -> bool {
    if protons == 0 {
        return false;
    }
    if protons <= 20 {
        return (i64::from(neutrons) - i64::from(protons)).abs() <= 2;
    }
    let ratio = f64::from(neutrons) / f64::from(protons);
    (1.0..=1.5).contains(&ratio)
}

/// Greedy orbital fill, returning `(orbital, electrons placed)` pairs.
///
/// Electrons beyond `TOTAL_SHELL_CAPACITY` are not placed.
pub fn electron_shells(electrons: u32) -> Vec<(Orbital, u32)> {
    let mut remaining = electrons;
    let mut filled = Vec::new();
    for orbital in SHELL_TABLE {
        if remaining == 0 {
            break;
        }
        let placed = remaining.min(orbital.capacity);
        filled.push((*orbital, placed));
        remaining -= placed;
    }
    filled
}

/// Space separated configuration string such as `1s2 2s2 2p2`.
pub fn electron_configuration(electrons: u32) -> String {
    electron_shells(electrons)
        .iter()
        .map(|(orbital, count)| format!("{}{}", orbital.label, count))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Rough binding energy in MeV.
pub fn binding_energy_mev(protons: u32, neutrons: u32) -> f64 {
    let a = mass_number(protons, neutrons) as f64;
    8.5 * a - 0.00085 * a * a
}

/// Coarse half-life bucket for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HalfLifeEstimate {
    Stable,
    HoursToYears,
    MinutesToHours,
    SecondsToMinutes,
    MillisecondsToSeconds,
}

impl HalfLifeEstimate {
    pub fn label(self) -> &'static str {
        match self {
            Self::Stable => "Stable",
            Self::HoursToYears => "Hours to years",
            Self::MinutesToHours => "Minutes to hours",
            Self::SecondsToMinutes => "Seconds to minutes",
            Self::MillisecondsToSeconds => "Milliseconds to seconds",
        }
    }
}

pub fn estimate_half_life(protons: u32, neutrons: u32, is_stable: bool) -> HalfLifeEstimate {
    if is_stable {
        return HalfLifeEstimate::Stable;
    }
    match (i64::from(neutrons) - i64::from(protons)).abs() {
        d if d > 10 => HalfLifeEstimate::MillisecondsToSeconds,
        d if d > 5 => HalfLifeEstimate::SecondsToMinutes,
        d if d > 2 => HalfLifeEstimate::MinutesToHours,
        _ => HalfLifeEstimate::HoursToYears,
    }
}

/// Amount left after `time` given a half-life in the same unit.
pub fn decay_remaining(initial_amount: f64, half_life: f64, time: f64) -> f64 {
    initial_amount * 0.5_f64.powf(time / half_life)
}

/// pH from a hydrogen-ion concentration in mol/L: `-log10([H+])`.
///
/// `None` unless the concentration is finite and positive.
pub fn ph_from_concentration(h_plus_concentration: f64) -> Option<f64> {
    (h_plus_concentration.is_finite() && h_plus_concentration > 0.0)
        .then(|| -h_plus_concentration.log10())
}

/// Hydrogen-like energy level in eV: `-13.6 / n^2`. `None` for `n == 0`.
pub fn energy_level_ev(n: u32) -> Option<f64> {
    if n == 0 {
        return None;
    }
    let n = f64::from(n);
    Some(-13.6 / (n * n))
}

/// Photon wavelength in nm for a transition between two levels.
///
/// `None` when either level is 0. Returns `Some(0.0)` when both levels
/// have the same energy.
pub fn transition_wavelength_nm(initial_level: u32, final_level: u32) -> Option<f64> {
    let delta = (energy_level_ev(final_level)? - energy_level_ev(initial_level)?).abs();
    if delta == 0.0 {
        return Some(0.0);
    }
    Some(1240.0 / delta)
}

/// Isotope entry for abundance-weighted averages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsotopeAbundance {
    pub mass: f64,
    /// Fraction in `[0, 1]`.
    pub abundance: f64,
}

pub fn average_atomic_mass(isotopes: &[IsotopeAbundance]) -> f64 {
    isotopes
        .iter()
        .map(|isotope| isotope.mass * isotope.abundance)
        .sum()
}

/// Simplified `(n, l, m, s)` quantum numbers for one electron.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantumNumbers {
    pub n: u32,
    pub l: u32,
    pub m: i32,
    pub s: f64,
}

static ORBITAL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([1-7])([spdf])(\d+)$").expect("orbital token pattern is valid")
});

/// Expands a configuration string into one quantum-number tuple per electron.
///
/// Uses the simplified classroom assignment: `m` counts up from
/// `-(count / 2)` and spin alternates `+1/2`, `-1/2`.
///
/// # Errors
/// - Tokens that are not `<n><s|p|d|f><count>`.
/// - Orbitals missing from `SHELL_TABLE`, such as `1p` or `2d`.
/// - Counts above the orbital capacity.
pub fn quantum_numbers(configuration: &str) -> Result<Vec<QuantumNumbers>, ConfigurationParseError> {
    let mut results = Vec::new();
    for token in configuration.split_whitespace() {
        let invalid = || ConfigurationParseError::InvalidToken(token.to_string());
        let captures = ORBITAL_TOKEN.captures(token).ok_or_else(invalid)?;
        let n: u32 = captures[1].parse().map_err(|_| invalid())?;
        let subshell = &captures[2];
        let count: u32 = captures[3].parse().map_err(|_| invalid())?;

        let label = format!("{n}{subshell}");
        let orbital = SHELL_TABLE
            .iter()
            .find(|orbital| orbital.label == label)
            .ok_or(ConfigurationParseError::UnknownOrbital(label))?;
        if count > orbital.capacity {
            return Err(ConfigurationParseError::OverCapacity {
                orbital: orbital.label,
                count,
                capacity: orbital.capacity,
            });
        }

        let l = azimuthal_quantum_number(subshell);
        let count = i32::try_from(count).map_err(|_| invalid())?;
        for i in 0..count {
            results.push(QuantumNumbers {
                n,
                l,
                m: i - count / 2,
                s: if i % 2 == 0 { 0.5 } else { -0.5 },
            });
        }
    }
    Ok(results)
}

fn azimuthal_quantum_number(subshell: &str) -> u32 {
    match subshell {
        "p" => 1,
        "d" => 2,
        "f" => 3,
        _ => 0,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationParseError {
    InvalidToken(String),
    UnknownOrbital(String),
    OverCapacity {
        orbital: &'static str,
        count: u32,
        capacity: u32,
    },
}

impl Display for ConfigurationParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken(token) => write!(f, "invalid orbital token `{token}`"),
            Self::UnknownOrbital(label) => write!(f, "orbital `{label}` does not exist"),
            Self::OverCapacity {
                orbital,
                count,
                capacity,
            } => write!(
                f,
                "orbital `{orbital}` holds at most {capacity} electrons, got {count}"
            ),
        }
    }
}

impl Error for ConfigurationParseError {}

/// Very coarse material class by atomic number.
pub fn predict_element_properties(protons: u32) -> &'static str {
    match protons {
        0..=2 => "Nonmetal, gas",
        3..=5 => "Metalloid",
        6..=10 => "Nonmetal",
        11..=12 => "Metal",
        13..=18 => "Nonmetal to metalloid",
        _ => "Metal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_table_capacity_matches_constant() {
        let total: u32 = SHELL_TABLE.iter().map(|orbital| orbital.capacity).sum();
        assert_eq!(total, TOTAL_SHELL_CAPACITY);
    }

    #[test]
    fn electron_configuration_formats_known_atoms() {
        assert_eq!(electron_configuration(1), "1s1");
        assert_eq!(electron_configuration(6), "1s2 2s2 2p2");
        assert_eq!(electron_configuration(11), "1s2 2s2 2p6 3s1");
        assert_eq!(electron_configuration(26), "1s2 2s2 2p6 3s2 3p6 4s2 3d6");
    }

    #[test]
    fn electron_shells_sum_and_capacity_hold_for_every_count() {
        for electrons in 0..=200u32 {
            let shells = electron_shells(electrons);
            let placed: u32 = shells.iter().map(|(_, count)| *count).sum();
            assert_eq!(placed, electrons.min(TOTAL_SHELL_CAPACITY));
            assert!(shells
                .iter()
                .all(|(orbital, count)| *count >= 1 && *count <= orbital.capacity));
        }
    }

    #[test]
    fn charge_symbol_marks_sign() {
        assert_eq!(charge_symbol(0), "");
        assert_eq!(charge_symbol(2), "+2");
        assert_eq!(charge_symbol(-3), "-3");
    }

    #[test]
    fn stability_rules() {
        assert!(is_stable(6, 6, 6));
        assert!(is_stable(6, 8, 4));
        assert!(!is_stable(6, 9, 6));
        assert!(!is_stable(6, 6, 9));

        assert!(nucleus_is_stable(8, 10));
        assert!(!nucleus_is_stable(8, 11));
        assert!(nucleus_is_stable(26, 30));
        assert!(!nucleus_is_stable(26, 20));
    }

    #[test]
    fn half_life_buckets_follow_imbalance() {
        assert_eq!(estimate_half_life(6, 6, true), HalfLifeEstimate::Stable);
        assert_eq!(estimate_half_life(6, 8, false), HalfLifeEstimate::HoursToYears);
        assert_eq!(estimate_half_life(6, 9, false), HalfLifeEstimate::MinutesToHours);
        assert_eq!(estimate_half_life(6, 12, false), HalfLifeEstimate::SecondsToMinutes);
        assert_eq!(
            estimate_half_life(6, 17, false),
            HalfLifeEstimate::MillisecondsToSeconds
        );
    }

    #[test]
    fn energy_and_wavelength() {
        let ground = energy_level_ev(1).expect("level 1");
        assert!((ground + 13.6).abs() < 1e-9);
        assert!((energy_level_ev(2).expect("level 2") + 3.4).abs() < 1e-9);
        assert_eq!(transition_wavelength_nm(2, 2), Some(0.0));
        let balmer_alpha = transition_wavelength_nm(3, 2).expect("valid levels");
        assert!((balmer_alpha - 656.5).abs() < 1.0, "got {balmer_alpha}");
    }

    #[test]
    fn level_zero_has_no_energy_or_wavelength() {
        assert_eq!(energy_level_ev(0), None);
        assert_eq!(transition_wavelength_nm(0, 2), None);
        assert_eq!(transition_wavelength_nm(3, 0), None);
    }

    #[test]
    fn ph_follows_negative_log() {
        let neutral = ph_from_concentration(1e-7).expect("positive concentration");
        assert!((neutral - 7.0).abs() < 1e-9);
        let acidic = ph_from_concentration(0.01).expect("positive concentration");
        assert!((acidic - 2.0).abs() < 1e-9);
        assert_eq!(ph_from_concentration(0.0), None);
        assert_eq!(ph_from_concentration(-1.0), None);
        assert_eq!(ph_from_concentration(f64::NAN), None);
    }

    #[test]
    fn decay_and_average_mass() {
        assert!((decay_remaining(100.0, 5.0, 10.0) - 25.0).abs() < 1e-9);

        let chlorine = [
            IsotopeAbundance { mass: 34.969, abundance: 0.7576 },
            IsotopeAbundance { mass: 36.966, abundance: 0.2424 },
        ];
        assert!((average_atomic_mass(&chlorine) - 35.45).abs() < 0.01);
        assert!((binding_energy_mev(6, 6) - (102.0 - 0.1224)).abs() < 1e-9);
    }

    #[test]
    fn quantum_numbers_expand_each_electron() {
        let numbers = quantum_numbers("1s2 2p3").expect("valid configuration");
        assert_eq!(numbers.len(), 5);
        assert_eq!(numbers[0], QuantumNumbers { n: 1, l: 0, m: -1, s: 0.5 });
        assert_eq!(numbers[1], QuantumNumbers { n: 1, l: 0, m: 0, s: -0.5 });
        assert_eq!(numbers[2].n, 2);
        assert_eq!(numbers[2].l, 1);
        assert_eq!(numbers[2].m, -1);

        let err = quantum_numbers("1s2 2x1").unwrap_err();
        assert_eq!(err, ConfigurationParseError::InvalidToken("2x1".to_string()));
    }

    #[test]
    fn quantum_numbers_reject_counts_above_capacity() {
        let err = quantum_numbers("1s1000000").unwrap_err();
        assert_eq!(
            err,
            ConfigurationParseError::OverCapacity {
                orbital: "1s",
                count: 1_000_000,
                capacity: 2,
            }
        );
        assert!(matches!(
            quantum_numbers("2p7"),
            Err(ConfigurationParseError::OverCapacity { capacity: 6, .. })
        ));
        assert_eq!(quantum_numbers("4f14").map(|numbers| numbers.len()), Ok(14));

        let err = quantum_numbers("1s99999999999999999999").unwrap_err();
        assert!(matches!(err, ConfigurationParseError::InvalidToken(_)));
    }

    #[test]
    fn quantum_numbers_reject_orbitals_outside_shell_table() {
        assert_eq!(
            quantum_numbers("1f3"),
            Err(ConfigurationParseError::UnknownOrbital("1f".to_string()))
        );
        assert_eq!(
            quantum_numbers("1s2 2d1"),
            Err(ConfigurationParseError::UnknownOrbital("2d".to_string()))
        );
    }

    #[test]
    fn element_class_prediction() {
        assert_eq!(predict_element_properties(1), "Nonmetal, gas");
        assert_eq!(predict_element_properties(6), "Nonmetal");
        assert_eq!(predict_element_properties(12), "Metal");
        assert_eq!(predict_element_properties(16), "Nonmetal to metalloid");
        assert_eq!(predict_element_properties(80), "Metal");
    }
}
