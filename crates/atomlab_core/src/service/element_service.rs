//! Periodic-table browser use-cases.
//!
//! # Responsibility
//! - Hold search/filter/sort selection for the element list.
//! - Compute table statistics and the period/group grid layout.
//!
//! # Invariants
//! - The browser never mutates the static element table.
//! - Sorting is stable; string keys compare case-insensitively.

use crate::model::element::{all_elements, matches_term, Element, ElementCategory};
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Grid row used for lanthanides (period 6, group 3 placeholders).
pub const LANTHANIDE_ROW: usize = 8;
/// Grid row used for actinides (period 7, group 3 placeholders).
pub const ACTINIDE_ROW: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ElementCategory),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    AtomicNumber,
    Name,
    Symbol,
    AtomicMass,
    Electronegativity,
    Period,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Aggregate figures over the whole table.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementStats {
    pub total: usize,
    pub by_category: BTreeMap<ElementCategory, usize>,
    pub average_atomic_mass: f64,
    pub heaviest: Option<&'static Element>,
    pub lightest: Option<&'static Element>,
}

/// Element list selection state.
#[derive(Debug, Clone, Default)]
pub struct ElementBrowser {
    search_term: String,
    category: CategoryFilter,
    sort_key: SortKey,
    sort_order: SortOrder,
    selected: Option<u32>,
}

impl ElementBrowser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.search_term = term.into();
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn set_sort(&mut self, key: SortKey, order: SortOrder) {
        self.sort_key = key;
        self.sort_order = order;
    }

    /// Same key flips the order; a new key resets to ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_key = key;
            self.sort_order = SortOrder::Ascending;
        }
    }

    pub fn sort(&self) -> (SortKey, SortOrder) {
        (self.sort_key, self.sort_order)
    }

    /// Selects an element by atomic number; unknown numbers clear the selection.
    pub fn select_element(&mut self, atomic_number: Option<u32>) {
        self.selected = atomic_number.filter(|number| {
            all_elements()
                .iter()
                .any(|element| element.atomic_number == *number)
        });
    }

    pub fn selected_element(&self) -> Option<&'static Element> {
        let number = self.selected?;
        all_elements()
            .iter()
            .find(|element| element.atomic_number == number)
    }

    /// Applies search, then category, then sort.
    pub fn filtered(&self) -> Vec<&'static Element> {
        let term = self.search_term.trim().to_lowercase();
        let mut elements = all_elements()
            .iter()
            .filter(|element| term.is_empty() || matches_term(element, &term))
            .filter(|element| match self.category {
                CategoryFilter::All => true,
                CategoryFilter::Only(category) => element.category == category,
            })
            .collect::<Vec<_>>();

        elements.sort_by(|a, b| {
            let ordering = compare_by(self.sort_key, a, b);
            match self.sort_order {
                SortOrder::Ascending => ordering,
                SortOrder::Descending => ordering.reverse(),
            }
        });
        elements
    }

    pub fn total_results(&self) -> usize {
        self.filtered().len()
    }

    pub fn is_empty(&self) -> bool {
        self.total_results() == 0
    }
}

fn compare_by(key: SortKey, a: &Element, b: &Element) -> Ordering {
    match key {
        SortKey::AtomicNumber => a.atomic_number.cmp(&b.atomic_number),
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Symbol => a.symbol.to_lowercase().cmp(&b.symbol.to_lowercase()),
        SortKey::AtomicMass => a.atomic_mass.total_cmp(&b.atomic_mass),
        // Missing electronegativity sorts first.
        SortKey::Electronegativity => match (a.electronegativity, b.electronegativity) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Period => a.period.cmp(&b.period),
        SortKey::Group => a.group.cmp(&b.group),
    }
}

/// Computes totals, per-category counts and mass extremes.
pub fn element_stats() -> ElementStats {
    let elements = all_elements();
    let mut by_category = BTreeMap::new();
    for element in elements {
        *by_category.entry(element.category).or_insert(0) += 1;
    }

    let total_mass: f64 = elements.iter().map(|element| element.atomic_mass).sum();
    let average_atomic_mass = if elements.is_empty() {
        0.0
    } else {
        total_mass / elements.len() as f64
    };

    ElementStats {
        total: elements.len(),
        by_category,
        average_atomic_mass,
        heaviest: elements
            .iter()
            .max_by(|a, b| a.atomic_mass.total_cmp(&b.atomic_mass)),
        lightest: elements
            .iter()
            .min_by(|a, b| a.atomic_mass.total_cmp(&b.atomic_mass)),
    }
}

/// Lays elements out as rows by period with `None` padding for empty groups.
///
/// Period 6/7 group 3 entries go to the separate f-block rows.
pub fn periodic_layout() -> Vec<Vec<Option<&'static Element>>> {
    let mut rows: Vec<Vec<Option<&'static Element>>> = Vec::new();
    for element in all_elements() {
        let row = match (element.period, element.group) {
            (6, 3) => LANTHANIDE_ROW,
            (7, 3) => ACTINIDE_ROW,
            (period, _) => period.saturating_sub(1) as usize,
        };
        if rows.len() <= row {
            rows.resize_with(row + 1, Vec::new);
        }

        let cells = &mut rows[row];
        if row == LANTHANIDE_ROW || row == ACTINIDE_ROW {
            cells.push(Some(element));
            continue;
        }

        let column = element.group.saturating_sub(1) as usize;
        if cells.len() <= column {
            cells.resize(column + 1, None);
        }
        cells[column] = Some(element);
    }
    rows
}
