//! Static element reference table.
//!
//! # Responsibility
//! - Provide read-only element records keyed by atomic number.
//! - Offer the lookup helpers the builder and the periodic-table browser use.
//!
//! # Invariants
//! - `ELEMENTS` is sorted by `atomic_number` with no gaps, starting at 1.
//! - Lookups outside the seeded range return `None`; they never panic.

use serde::{Deserialize, Serialize};

/// Periodic table category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementCategory {
    AlkaliMetal,
    AlkalineEarthMetal,
    TransitionMetal,
    PostTransitionMetal,
    Metalloid,
    Nonmetal,
    Halogen,
    NobleGas,
    Lanthanide,
    Actinide,
}

/// All categories in display order.
pub const ELEMENT_CATEGORIES: [ElementCategory; 10] = [
    ElementCategory::AlkaliMetal,
    ElementCategory::AlkalineEarthMetal,
    ElementCategory::TransitionMetal,
    ElementCategory::PostTransitionMetal,
    ElementCategory::Metalloid,
    ElementCategory::Nonmetal,
    ElementCategory::Halogen,
    ElementCategory::NobleGas,
    ElementCategory::Lanthanide,
    ElementCategory::Actinide,
];

impl ElementCategory {
    /// Stable kebab-case id.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AlkaliMetal => "alkali-metal",
            Self::AlkalineEarthMetal => "alkaline-earth-metal",
            Self::TransitionMetal => "transition-metal",
            Self::PostTransitionMetal => "post-transition-metal",
            Self::Metalloid => "metalloid",
            Self::Nonmetal => "nonmetal",
            Self::Halogen => "halogen",
            Self::NobleGas => "noble-gas",
            Self::Lanthanide => "lanthanide",
            Self::Actinide => "actinide",
        }
    }

    /// Parses a kebab-case id; surrounding whitespace and case are ignored.
    pub fn parse(value: &str) -> Option<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        ELEMENT_CATEGORIES
            .iter()
            .copied()
            .find(|category| category.as_str() == normalized)
    }
}

/// Standard state at room temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Solid,
    Liquid,
    Gas,
}

/// One element reference record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub atomic_number: u32,
    pub symbol: &'static str,
    pub name: &'static str,
    /// Standard atomic weight in u.
    pub atomic_mass: f64,
    pub category: ElementCategory,
    pub period: u32,
    pub group: u32,
    pub electron_configuration: &'static str,
    /// Pauling scale; `None` for noble gases without a defined value.
    pub electronegativity: Option<f64>,
    pub description: &'static str,
    pub uses: &'static [&'static str],
    pub discovered_by: &'static str,
    /// `None` when known since antiquity.
    pub discovery_year: Option<i32>,
    pub phase: Phase,
    /// g/cm^3.
    pub density: f64,
    /// Melting point in K.
    pub melt: f64,
    /// Boiling point in K.
    pub boil: f64,
    /// CPK-style display color.
    pub color: &'static str,
}

pub static ELEMENTS: &[Element] = &[
    Element {
        atomic_number: 1,
        symbol: "H",
        name: "Hydrogen",
        atomic_mass: 1.008,
        category: ElementCategory::Nonmetal,
        period: 1,
        group: 1,
        electron_configuration: "1s1",
        electronegativity: Some(2.2),
        description: "Hydrogen is the lightest and most abundant element in the universe. It is a colorless, odorless gas that is highly flammable.",
        uses: &[
            "Rocket fuel",
            "Hydrogenation of fats and oils",
            "Production of ammonia",
            "Welding processes",
        ],
        discovered_by: "Henry Cavendish",
        discovery_year: Some(1766),
        phase: Phase::Gas,
        density: 0.00008988,
        melt: 14.01,
        boil: 20.28,
        color: "#ffffff",
    },
    Element {
        atomic_number: 2,
        symbol: "He",
        name: "Helium",
        atomic_mass: 4.0026,
        category: ElementCategory::NobleGas,
        period: 1,
        group: 18,
        electron_configuration: "1s2",
        electronegativity: None,
        description: "Helium is a noble gas that is lighter than air and non-flammable. It is the second most abundant element in the universe.",
        uses: &[
            "Balloons and airships",
            "Cooling MRI magnets",
            "Pressurizing rocket fuel",
            "Deep-sea diving mixtures",
        ],
        discovered_by: "Pierre Janssen",
        discovery_year: Some(1868),
        phase: Phase::Gas,
        density: 0.0001785,
        melt: 0.95,
        boil: 4.22,
        color: "#d9ffff",
    },
    Element {
        atomic_number: 3,
        symbol: "Li",
        name: "Lithium",
        atomic_mass: 6.94,
        category: ElementCategory::AlkaliMetal,
        period: 2,
        group: 1,
        electron_configuration: "1s2 2s1",
        electronegativity: Some(0.98),
        description: "Lithium is the lightest metal and is highly reactive. It is soft enough to be cut with a knife.",
        uses: &[
            "Lithium-ion batteries",
            "Psychiatric medications",
            "Aluminum production",
            "Glass and ceramics",
        ],
        discovered_by: "Johan August Arfwedson",
        discovery_year: Some(1817),
        phase: Phase::Solid,
        density: 0.534,
        melt: 453.69,
        boil: 1560.0,
        color: "#cc80ff",
    },
    Element {
        atomic_number: 4,
        symbol: "Be",
        name: "Beryllium",
        atomic_mass: 9.0122,
        category: ElementCategory::AlkalineEarthMetal,
        period: 2,
        group: 2,
        electron_configuration: "1s2 2s2",
        electronegativity: Some(1.57),
        description: "Beryllium is a lightweight but extremely stiff metal. It is toxic and must be handled with care.",
        uses: &[
            "X-ray equipment windows",
            "Aerospace components",
            "Nuclear reactors",
            "Precision instruments",
        ],
        discovered_by: "Louis Nicolas Vauquelin",
        discovery_year: Some(1798),
        phase: Phase::Solid,
        density: 1.85,
        melt: 1560.0,
        boil: 2742.0,
        color: "#c2ff00",
    },
    Element {
        atomic_number: 5,
        symbol: "B",
        name: "Boron",
        atomic_mass: 10.81,
        category: ElementCategory::Metalloid,
        period: 2,
        group: 13,
        electron_configuration: "1s2 2s2 2p1",
        electronegativity: Some(2.04),
        description: "Boron is a metalloid that exists in several allotropic forms. It is essential for plant growth.",
        uses: &[
            "Glass and ceramics",
            "Detergents and bleaches",
            "Semiconductors",
            "Neutron absorption",
        ],
        discovered_by: "Joseph Louis Gay-Lussac",
        discovery_year: Some(1808),
        phase: Phase::Solid,
        density: 2.34,
        melt: 2349.0,
        boil: 4200.0,
        color: "#ffb5b5",
    },
    Element {
        atomic_number: 6,
        symbol: "C",
        name: "Carbon",
        atomic_mass: 12.011,
        category: ElementCategory::Nonmetal,
        period: 2,
        group: 14,
        electron_configuration: "1s2 2s2 2p2",
        electronegativity: Some(2.55),
        description: "Carbon is the basis of all known life. It forms more compounds than any other element.",
        uses: &[
            "Steel production",
            "Diamonds and graphite",
            "Organic chemistry",
            "Carbon dating",
        ],
        discovered_by: "Ancient times",
        discovery_year: None,
        phase: Phase::Solid,
        density: 2.267,
        melt: 3915.0,
        boil: 3915.0,
        color: "#909090",
    },
    Element {
        atomic_number: 7,
        symbol: "N",
        name: "Nitrogen",
        atomic_mass: 14.007,
        category: ElementCategory::Nonmetal,
        period: 2,
        group: 15,
        electron_configuration: "1s2 2s2 2p3",
        electronegativity: Some(3.04),
        description: "Nitrogen makes up 78% of Earth's atmosphere. It is essential for proteins and DNA.",
        uses: &["Fertilizers", "Refrigerant", "Explosives", "Food packaging"],
        discovered_by: "Daniel Rutherford",
        discovery_year: Some(1772),
        phase: Phase::Gas,
        density: 0.001251,
        melt: 63.15,
        boil: 77.36,
        color: "#3050f8",
    },
    Element {
        atomic_number: 8,
        symbol: "O",
        name: "Oxygen",
        atomic_mass: 15.999,
        category: ElementCategory::Nonmetal,
        period: 2,
        group: 16,
        electron_configuration: "1s2 2s2 2p4",
        electronegativity: Some(3.44),
        description: "Oxygen is essential for respiration and combustion. It is the most abundant element in Earth's crust.",
        uses: &[
            "Medical treatment",
            "Steel production",
            "Water treatment",
            "Rocket propulsion",
        ],
        discovered_by: "Carl Wilhelm Scheele",
        discovery_year: Some(1771),
        phase: Phase::Gas,
        density: 0.001429,
        melt: 54.36,
        boil: 90.2,
        color: "#ff0d0d",
    },
    Element {
        atomic_number: 9,
        symbol: "F",
        name: "Fluorine",
        atomic_mass: 18.998,
        category: ElementCategory::Halogen,
        period: 2,
        group: 17,
        electron_configuration: "1s2 2s2 2p5",
        electronegativity: Some(3.98),
        description: "Fluorine is the most reactive and electronegative element. It is a pale yellow gas.",
        uses: &[
            "Toothpaste additive",
            "Teflon production",
            "Uranium processing",
            "Refrigerants",
        ],
        discovered_by: "Henri Moissan",
        discovery_year: Some(1886),
        phase: Phase::Gas,
        density: 0.001696,
        melt: 53.53,
        boil: 85.03,
        color: "#90e050",
    },
    Element {
        atomic_number: 10,
        symbol: "Ne",
        name: "Neon",
        atomic_mass: 20.18,
        category: ElementCategory::NobleGas,
        period: 2,
        group: 18,
        electron_configuration: "1s2 2s2 2p6",
        electronegativity: None,
        description: "Neon is a noble gas that produces a distinctive orange-red glow when used in signs.",
        uses: &[
            "Advertising signs",
            "High-voltage indicators",
            "Cryogenic refrigerant",
            "Lasers",
        ],
        discovered_by: "William Ramsay",
        discovery_year: Some(1898),
        phase: Phase::Gas,
        density: 0.0008999,
        melt: 24.56,
        boil: 27.07,
        color: "#b3e3f5",
    },
    Element {
        atomic_number: 11,
        symbol: "Na",
        name: "Sodium",
        atomic_mass: 22.99,
        category: ElementCategory::AlkaliMetal,
        period: 3,
        group: 1,
        electron_configuration: "1s2 2s2 2p6 3s1",
        electronegativity: Some(0.93),
        description: "Sodium is a soft, silvery-white metal that is highly reactive. It is essential for nerve function.",
        uses: &[
            "Table salt (sodium chloride)",
            "Street lighting",
            "Coolant in nuclear reactors",
            "Organic synthesis",
        ],
        discovered_by: "Humphry Davy",
        discovery_year: Some(1807),
        phase: Phase::Solid,
        density: 0.968,
        melt: 370.87,
        boil: 1156.0,
        color: "#ab5cf2",
    },
    Element {
        atomic_number: 12,
        symbol: "Mg",
        name: "Magnesium",
        atomic_mass: 24.305,
        category: ElementCategory::AlkalineEarthMetal,
        period: 3,
        group: 2,
        electron_configuration: "1s2 2s2 2p6 3s2",
        electronegativity: Some(1.31),
        description: "Magnesium is a lightweight metal that burns with a bright white flame. It is essential for plant photosynthesis.",
        uses: &[
            "Aluminum alloys",
            "Fireworks and flares",
            "Medical supplements",
            "Automotive parts",
        ],
        discovered_by: "Joseph Black",
        discovery_year: Some(1755),
        phase: Phase::Solid,
        density: 1.738,
        melt: 923.0,
        boil: 1363.0,
        color: "#8aff00",
    },
];

/// Returns every seeded element in atomic-number order.
pub fn all_elements() -> &'static [Element] {
    ELEMENTS
}

/// Looks up an element by atomic number.
pub fn element_by_atomic_number(atomic_number: u32) -> Option<&'static Element> {
    let index = usize::try_from(atomic_number).ok()?.checked_sub(1)?;
    ELEMENTS
        .get(index)
        .filter(|element| element.atomic_number == atomic_number)
}

/// Case-insensitive symbol lookup.
pub fn element_by_symbol(symbol: &str) -> Option<&'static Element> {
    let symbol = symbol.trim();
    ELEMENTS
        .iter()
        .find(|element| element.symbol.eq_ignore_ascii_case(symbol))
}

pub fn elements_by_category(category: ElementCategory) -> Vec<&'static Element> {
    ELEMENTS
        .iter()
        .filter(|element| element.category == category)
        .collect()
}

pub fn elements_by_period(period: u32) -> Vec<&'static Element> {
    ELEMENTS
        .iter()
        .filter(|element| element.period == period)
        .collect()
}

pub fn elements_by_group(group: u32) -> Vec<&'static Element> {
    ELEMENTS
        .iter()
        .filter(|element| element.group == group)
        .collect()
}

/// Substring search over name, symbol, atomic number and category id.
///
/// Case-insensitive. An empty query matches everything.
pub fn search_elements(query: &str) -> Vec<&'static Element> {
    let term = query.trim().to_lowercase();
    ELEMENTS
        .iter()
        .filter(|element| {
            matches_term(element, &term) || element.category.as_str().contains(term.as_str())
        })
        .collect()
}

/// Name, symbol or number match used by both search paths.
pub(crate) fn matches_term(element: &Element, term: &str) -> bool {
    element.name.to_lowercase().contains(term)
        || element.symbol.to_lowercase().contains(term)
        || element.atomic_number.to_string().contains(term)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_contiguous_from_one() {
        for (index, element) in ELEMENTS.iter().enumerate() {
            assert_eq!(element.atomic_number as usize, index + 1);
        }
    }

    #[test]
    fn lookup_by_number_handles_out_of_range() {
        assert_eq!(element_by_atomic_number(6).map(|e| e.symbol), Some("C"));
        assert!(element_by_atomic_number(0).is_none());
        assert!(element_by_atomic_number(13).is_none());
        assert!(element_by_atomic_number(118).is_none());
    }

    #[test]
    fn category_round_trips_through_id() {
        for category in ELEMENT_CATEGORIES {
            assert_eq!(ElementCategory::parse(category.as_str()), Some(category));
        }
        assert_eq!(
            ElementCategory::parse(" Noble-Gas "),
            Some(ElementCategory::NobleGas)
        );
        assert_eq!(ElementCategory::parse("gas"), None);
    }
}
