use atomlab_core::db::open_db_in_memory;
use atomlab_core::{
    AtomConfiguration, AtomEngine, AtomService, AtomValidationError, EngineConfig, RepoError,
    SeededRandom, SnapshotRepository, SqliteSnapshotRepository, DEFAULT_SNAPSHOT_SLOT,
};

fn sodium_ion() -> AtomConfiguration {
    AtomConfiguration {
        protons: 11,
        neutrons: 12,
        electrons: 10,
        ion_mode: true,
    }
}

#[test]
fn save_and_load_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_snapshot(DEFAULT_SNAPSHOT_SLOT, &sodium_ion()).unwrap();

    let loaded = repo.load_snapshot(DEFAULT_SNAPSHOT_SLOT).unwrap();
    assert_eq!(loaded, Some(sodium_ion()));
}

#[test]
fn save_overwrites_existing_slot() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_snapshot("lab", &AtomConfiguration::default()).unwrap();
    repo.save_snapshot(" lab ", &sodium_ion()).unwrap();

    assert_eq!(repo.load_snapshot("lab").unwrap(), Some(sodium_ion()));
    assert_eq!(repo.list_slots().unwrap(), vec!["lab".to_string()]);
}

#[test]
fn load_missing_slot_returns_none() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    assert_eq!(repo.load_snapshot("nothing-here").unwrap(), None);
}

#[test]
fn empty_slot_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let err = repo
        .save_snapshot("  ", &AtomConfiguration::default())
        .unwrap_err();
    assert!(matches!(err, RepoError::EmptySlot));
}

#[test]
fn save_rejects_unclamped_configuration() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let invalid = AtomConfiguration {
        protons: 200,
        neutrons: 0,
        electrons: 1,
        ion_mode: false,
    };
    let err = repo.save_snapshot("bad", &invalid).unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(AtomValidationError::ProtonsOutOfRange(200))
    ));
    assert!(repo.list_slots().unwrap().is_empty());
}

#[test]
fn load_rejects_corrupted_rows() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch(
        "INSERT INTO atom_snapshots (slot, protons, neutrons, electrons, ion_mode)
         VALUES ('flag', 6, 6, 6, 7),
                ('negative', 6, -1, 6, 0),
                ('zero-electrons', 6, 6, 0, 0);",
    )
    .unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    let err = repo.load_snapshot("flag").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("ion_mode")));

    let err = repo.load_snapshot("negative").unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(ref message) if message.contains("neutrons")));

    let err = repo.load_snapshot("zero-electrons").unwrap_err();
    assert!(
        matches!(err, RepoError::InvalidData(ref message) if message.contains("electrons (0)")),
        "unexpected error: {err}"
    );
}

#[test]
fn delete_removes_slot_and_reports_missing() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteSnapshotRepository::new(&conn);

    repo.save_snapshot("a", &sodium_ion()).unwrap();
    repo.save_snapshot("b", &sodium_ion()).unwrap();
    repo.delete_snapshot("a").unwrap();

    assert_eq!(repo.list_slots().unwrap(), vec!["b".to_string()]);
    let err = repo.delete_snapshot("a").unwrap_err();
    assert!(matches!(err, RepoError::NotFound(ref slot) if slot == "a"));
}

#[test]
fn service_persists_configuration_but_not_history() {
    let conn = open_db_in_memory().unwrap();
    let service = AtomService::new(SqliteSnapshotRepository::new(&conn));

    let mut engine = AtomEngine::with_random(EngineConfig::default(), SeededRandom::new(1));
    engine.set_protons(11);
    engine.set_neutrons(12);
    engine.set_electrons(10);
    let saved = service.save_engine(DEFAULT_SNAPSHOT_SLOT, &engine).unwrap();
    assert_eq!(saved, engine.configuration());

    let restored = service
        .restore_engine(DEFAULT_SNAPSHOT_SLOT, EngineConfig::default(), SeededRandom::new(2))
        .unwrap();
    assert_eq!(restored.configuration(), engine.configuration());
    assert_eq!(restored.history_index(), 0);
    assert!(!restored.can_undo());
}

#[test]
fn service_restore_without_snapshot_uses_defaults() {
    let conn = open_db_in_memory().unwrap();
    let service = AtomService::new(SqliteSnapshotRepository::new(&conn));

    let engine = service
        .restore_engine("fresh", EngineConfig::default(), SeededRandom::new(3))
        .unwrap();
    assert_eq!(engine.configuration(), AtomConfiguration::default());
}
