//! Core domain logic for AtomLab.
//! This crate is the single source of truth for atom builder invariants.

pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use engine::atom_engine::{AtomEngine, EngineConfig};
pub use engine::history::{HistoryLog, DEFAULT_HISTORY_CAPACITY};
pub use engine::random::{RandomSource, SeededRandom, ThreadRandom};
pub use logging::{default_log_level, init_logging, logging_status, LogLevel};
pub use model::atom::{
    AtomConfiguration, AtomValidationError, MAX_PROTONS, MIN_ELECTRONS, MIN_PROTONS,
};
pub use model::derived::{DerivedProperties, HalfLifeEstimate, TOTAL_SHELL_CAPACITY};
pub use model::element::{
    element_by_atomic_number, element_by_symbol, Element, ElementCategory, Phase,
    ELEMENT_CATEGORIES,
};
pub use model::quiz::{quiz_questions, QuizQuestion, DEFAULT_QUIZ_ID};
pub use repo::snapshot_repo::{
    RepoError, RepoResult, SnapshotRepository, SqliteSnapshotRepository, DEFAULT_SNAPSHOT_SLOT,
};
pub use service::atom_service::AtomService;
pub use service::element_service::{
    element_stats, periodic_layout, CategoryFilter, ElementBrowser, ElementStats, SortKey,
    SortOrder,
};
pub use service::quiz_service::{
    AnswerRecord, PerformanceRating, QuizProgress, QuizProgressBoard, QuizService, QuizSession,
    QuizStats, StepOutcome,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
