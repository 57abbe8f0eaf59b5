//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the atom builder, element lookup and quiz flows to Dart via FRB.
//! - Own the single process-wide engine and quiz service instances.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Every engine call reads and mutates state under one lock acquisition.
//! - A poisoned lock is recovered, never propagated as a panic.

use atomlab_core::db::open_db;
use atomlab_core::model::derived::charge_symbol;
use atomlab_core::model::element::search_elements;
use atomlab_core::{
    core_version as core_version_inner, element_by_atomic_number,
    init_logging as init_logging_inner, AtomEngine, AtomService, EngineConfig, Element, Phase,
    QuizService, RepoResult, SqliteSnapshotRepository, ThreadRandom, DEFAULT_SNAPSHOT_SLOT,
};
use log::{info, warn};
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

const SNAPSHOT_DB_FILE_NAME: &str = "atomlab_snapshots.sqlite3";
static SNAPSHOT_DB_PATH: OnceLock<PathBuf> = OnceLock::new();
static ENGINE: OnceLock<Mutex<AtomEngine>> = OnceLock::new();
static QUIZ: OnceLock<Mutex<QuizService>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Reconfiguration attempts with different level or directory return error.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Current atom plus everything the builder screen renders from it.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomView {
    pub protons: u32,
    pub neutrons: u32,
    pub electrons: u32,
    pub ion_mode: bool,
    pub atomic_number: u32,
    pub mass_number: u64,
    pub charge: i64,
    /// Display form such as `+2` or `-1`; empty for neutral atoms.
    pub charge_symbol: String,
    pub is_stable: bool,
    pub electron_configuration: String,
    /// `None` outside the seeded element table.
    pub element_symbol: Option<String>,
    pub element_name: Option<String>,
    pub can_undo: bool,
    pub can_redo: bool,
    pub history_index: i64,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionResponse {
    /// Whether operation succeeded.
    pub ok: bool,
    /// Human-readable response message for diagnostics/UI.
    pub message: String,
    /// Atom state after the action; `None` on failure.
    pub atom: Option<AtomView>,
}

impl ActionResponse {
    fn success(message: impl Into<String>, atom: AtomView) -> Self {
        Self {
            ok: true,
            message: message.into(),
            atom: Some(atom),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
            atom: None,
        }
    }
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_state() -> AtomView {
    with_engine(|engine| to_atom_view(engine))
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_set_protons(value: i64) -> AtomView {
    mutate_engine(|engine| {
        engine.set_protons(value);
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_set_neutrons(value: i64) -> AtomView {
    mutate_engine(|engine| {
        engine.set_neutrons(value);
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_set_electrons(value: i64) -> AtomView {
    mutate_engine(|engine| {
        engine.set_electrons(value);
    })
}

/// Turning ion mode on re-rolls the electron count around the proton count.
#[flutter_rust_bridge::frb(sync)]
pub fn atom_set_ion_mode(enabled: bool) -> AtomView {
    mutate_engine(|engine| {
        engine.set_ion_mode(enabled);
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_create_ion(charge_change: i64) -> AtomView {
    mutate_engine(|engine| {
        engine.create_ion(charge_change);
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_create_isotope(neutron_change: i64) -> AtomView {
    mutate_engine(|engine| {
        engine.create_isotope(neutron_change);
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_reset() -> AtomView {
    mutate_engine(|engine| {
        engine.reset_atom();
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn atom_randomize() -> AtomView {
    mutate_engine(|engine| {
        engine.randomize_atom();
    })
}

/// Steps back one history entry; no-op at the oldest entry.
#[flutter_rust_bridge::frb(sync)]
pub fn atom_undo() -> AtomView {
    mutate_engine(|engine| {
        engine.undo();
    })
}

/// Steps forward one history entry; no-op at the newest entry.
#[flutter_rust_bridge::frb(sync)]
pub fn atom_redo() -> AtomView {
    mutate_engine(|engine| {
        engine.redo();
    })
}

/// Saves the current atom under `slot` (default slot when `None`).
///
/// # FFI contract
/// - Sync call, DB-backed execution.
/// - Never panics.
#[flutter_rust_bridge::frb(sync)]
pub fn atom_save_snapshot(slot: Option<String>) -> ActionResponse {
    let slot = slot.unwrap_or_else(|| DEFAULT_SNAPSHOT_SLOT.to_string());
    with_engine(|engine| {
        match with_atom_service(|service| service.save_engine(&slot, &*engine).map(|_| ())) {
            Ok(()) => ActionResponse::success("Snapshot saved.", to_atom_view(engine)),
            Err(err) => {
                warn!("event=ffi_snapshot_save module=ffi status=error error={err}");
                ActionResponse::failure(format!("atom_save_snapshot failed: {err}"))
            }
        }
    })
}

/// Replaces the current atom with the snapshot in `slot`.
///
/// History restarts from the loaded atom. A missing slot leaves the
/// current atom untouched and reports failure.
#[flutter_rust_bridge::frb(sync)]
pub fn atom_load_snapshot(slot: Option<String>) -> ActionResponse {
    let slot = slot.unwrap_or_else(|| DEFAULT_SNAPSHOT_SLOT.to_string());
    let loaded = match with_atom_service(|service| service.load_snapshot(&slot)) {
        Ok(Some(config)) => config,
        Ok(None) => return ActionResponse::failure(format!("No snapshot saved in `{slot}`.")),
        Err(err) => {
            warn!("event=ffi_snapshot_load module=ffi status=error error={err}");
            return ActionResponse::failure(format!("atom_load_snapshot failed: {err}"));
        }
    };

    with_engine(|engine| {
        *engine = AtomEngine::from_configuration(EngineConfig::default(), loaded, ThreadRandom);
        info!("event=ffi_snapshot_load module=ffi status=ok slot={}", slot.trim());
        ActionResponse::success("Snapshot loaded.", to_atom_view(engine))
    })
}

/// Element reference card.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementView {
    pub atomic_number: u32,
    pub symbol: String,
    pub name: String,
    pub atomic_mass: f64,
    /// Kebab-case category id.
    pub category: String,
    pub period: u32,
    pub group: u32,
    pub electron_configuration: String,
    pub electronegativity: Option<f64>,
    pub description: String,
    pub uses: Vec<String>,
    pub discovered_by: String,
    pub discovery_year: Option<i32>,
    /// `solid|liquid|gas`.
    pub phase: String,
    pub color: String,
}

#[flutter_rust_bridge::frb(sync)]
pub fn element_lookup(atomic_number: u32) -> Option<ElementView> {
    element_by_atomic_number(atomic_number).map(to_element_view)
}

/// Case-insensitive search over name, symbol, number and category.
#[flutter_rust_bridge::frb(sync)]
pub fn element_search(query: String) -> Vec<ElementView> {
    search_elements(&query)
        .into_iter()
        .map(to_element_view)
        .collect()
}

/// Running quiz state. `question` is `None` before start and after completion.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    /// Empty before any quiz has been started.
    pub quiz_id: String,
    pub question_index: u32,
    pub total_questions: u32,
    pub question: Option<String>,
    pub options: Vec<String>,
    pub selected_answer: Option<u32>,
    pub score: u32,
    pub completed: bool,
    pub progress_percent: f64,
    pub hint_used: bool,
    /// Rating text once the quiz is completed.
    pub rating: Option<String>,
}

/// Starts (or restarts) `quiz_id`; unknown ids start the default quiz.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_start(quiz_id: String, now_epoch_ms: i64) -> QuizView {
    with_quiz(|quiz| {
        quiz.start_quiz(quiz_id.trim(), now_epoch_ms);
        to_quiz_view(quiz)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn quiz_select_answer(answer_index: u32) -> QuizView {
    with_quiz(|quiz| {
        quiz.select_answer(answer_index as usize);
        to_quiz_view(quiz)
    })
}

/// Scores the selected answer; no-op when nothing is selected.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_submit(now_epoch_ms: i64) -> QuizView {
    with_quiz(|quiz| {
        quiz.submit_answer(now_epoch_ms);
        to_quiz_view(quiz)
    })
}

#[flutter_rust_bridge::frb(sync)]
pub fn quiz_skip(now_epoch_ms: i64) -> QuizView {
    with_quiz(|quiz| {
        quiz.skip_question(now_epoch_ms);
        to_quiz_view(quiz)
    })
}

/// Returns the current question's hint the first time it is requested.
#[flutter_rust_bridge::frb(sync)]
pub fn quiz_hint() -> Option<String> {
    with_quiz(|quiz| quiz.use_hint().map(str::to_string))
}

fn lock_or_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

fn with_engine<T>(f: impl FnOnce(&mut AtomEngine) -> T) -> T {
    let mutex = ENGINE.get_or_init(|| Mutex::new(AtomEngine::default()));
    let mut guard = lock_or_recover(mutex);
    f(&mut guard)
}

fn mutate_engine(f: impl FnOnce(&mut AtomEngine)) -> AtomView {
    with_engine(|engine| {
        f(engine);
        to_atom_view(engine)
    })
}

fn with_quiz<T>(f: impl FnOnce(&mut QuizService) -> T) -> T {
    let mutex = QUIZ.get_or_init(|| Mutex::new(QuizService::new()));
    let mut guard = lock_or_recover(mutex);
    f(&mut guard)
}

fn resolve_snapshot_db_path() -> PathBuf {
    SNAPSHOT_DB_PATH
        .get_or_init(|| {
            if let Ok(raw) = std::env::var("ATOMLAB_DB_PATH") {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    return PathBuf::from(trimmed);
                }
            }
            std::env::temp_dir().join(SNAPSHOT_DB_FILE_NAME)
        })
        .clone()
}

fn with_atom_service<T>(
    f: impl FnOnce(&AtomService<SqliteSnapshotRepository<'_>>) -> RepoResult<T>,
) -> Result<T, String> {
    let db_path = resolve_snapshot_db_path();
    let conn = open_db(&db_path).map_err(|err| format!("snapshot DB open failed: {err}"))?;
    let service = AtomService::new(SqliteSnapshotRepository::new(&conn));
    f(&service).map_err(|err| err.to_string())
}

fn to_atom_view(engine: &AtomEngine) -> AtomView {
    let config = engine.configuration();
    let derived = engine.derived();
    let element = engine.element();
    AtomView {
        protons: config.protons,
        neutrons: config.neutrons,
        electrons: config.electrons,
        ion_mode: config.ion_mode,
        atomic_number: derived.atomic_number,
        mass_number: derived.mass_number,
        charge: derived.charge,
        charge_symbol: charge_symbol(derived.charge),
        is_stable: derived.is_stable,
        electron_configuration: derived.electron_configuration,
        element_symbol: element.map(|element| element.symbol.to_string()),
        element_name: element.map(|element| element.name.to_string()),
        can_undo: engine.can_undo(),
        can_redo: engine.can_redo(),
        history_index: engine.history_index(),
    }
}

fn to_element_view(element: &Element) -> ElementView {
    ElementView {
        atomic_number: element.atomic_number,
        symbol: element.symbol.to_string(),
        name: element.name.to_string(),
        atomic_mass: element.atomic_mass,
        category: element.category.as_str().to_string(),
        period: element.period,
        group: element.group,
        electron_configuration: element.electron_configuration.to_string(),
        electronegativity: element.electronegativity,
        description: element.description.to_string(),
        uses: element.uses.iter().map(|item| item.to_string()).collect(),
        discovered_by: element.discovered_by.to_string(),
        discovery_year: element.discovery_year,
        phase: phase_label(element.phase).to_string(),
        color: element.color.to_string(),
    }
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Solid => "solid",
        Phase::Liquid => "liquid",
        Phase::Gas => "gas",
    }
}

fn to_quiz_view(quiz: &QuizService) -> QuizView {
    let Some(session) = quiz.session() else {
        return QuizView {
            quiz_id: String::new(),
            question_index: 0,
            total_questions: 0,
            question: None,
            options: Vec::new(),
            selected_answer: None,
            score: 0,
            completed: false,
            progress_percent: 0.0,
            hint_used: false,
            rating: None,
        };
    };

    let current = if session.is_completed() {
        None
    } else {
        session.current_question()
    };
    QuizView {
        quiz_id: session.quiz_id().to_string(),
        question_index: session.current_index() as u32,
        total_questions: session.total_questions() as u32,
        question: current.map(|question| question.question.to_string()),
        options: current
            .map(|question| question.options.iter().map(|o| o.to_string()).collect())
            .unwrap_or_default(),
        selected_answer: session.selected_answer().map(|index| index as u32),
        score: session.score() as u32,
        completed: session.is_completed(),
        progress_percent: if session.is_completed() {
            100.0
        } else {
            session.progress_percent()
        },
        hint_used: session.hint_used(),
        rating: session
            .is_completed()
            .then(|| session.performance_rating().text().to_string()),
    }
}
