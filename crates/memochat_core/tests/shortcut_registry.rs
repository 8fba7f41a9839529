use memochat_core::db::open_db_in_memory;
use memochat_core::{
    FieldRule, KvStore, RegistryError, Shortcut, ShortcutChange, ShortcutDraft, ShortcutField,
    ShortcutRegistry, SqliteKvStore,
};

fn draft(key: &str, name: &str, icon: &str) -> ShortcutDraft {
    ShortcutDraft {
        key: key.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
    }
}

fn assert_unique_fields(shortcuts: &[Shortcut]) {
    for (i, a) in shortcuts.iter().enumerate() {
        for b in shortcuts.iter().skip(i + 1) {
            assert_ne!(a.key, b.key, "duplicate key between {} and {}", a.id, b.id);
            assert_ne!(a.name, b.name, "duplicate name between {} and {}", a.id, b.id);
            assert_ne!(a.icon, b.icon, "duplicate icon between {} and {}", a.id, b.id);
        }
    }
}

#[test]
fn add_then_load_round_trips_shortcuts() {
    let conn = open_db_in_memory().unwrap();
    let created = {
        let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
        registry.load().unwrap();
        registry.add(draft("m", "Memo", "bookmark")).unwrap()
    };

    let mut reloaded = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    reloaded.load().unwrap();
    assert_eq!(reloaded.shortcuts(), &[created]);
}

#[test]
fn uniqueness_holds_after_add_and_edit_sequences() {
    let conn = open_db_in_memory().unwrap();
    let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    registry.load().unwrap();

    let memo = registry.add(draft("m", "Memo", "bookmark")).unwrap();
    registry.add(draft("w", "Work", "briefcase")).unwrap();
    assert_unique_fields(registry.shortcuts());

    // Taking an occupied key must fail and change nothing.
    let err = registry
        .edit(memo.id, ShortcutChange::Key("w".to_string()))
        .unwrap_err();
    match err {
        RegistryError::Validation(errors) => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].field, ShortcutField::Key);
            assert_eq!(errors[0].rule, FieldRule::Duplicate);
        }
        other => panic!("expected validation error, got {other}"),
    }
    assert_unique_fields(registry.shortcuts());

    // Moving to a free key succeeds, as does re-writing the current value.
    registry
        .edit(memo.id, ShortcutChange::Key("x".to_string()))
        .unwrap();
    registry
        .edit(memo.id, ShortcutChange::Name("Memo".to_string()))
        .unwrap();
    assert_unique_fields(registry.shortcuts());
}

#[test]
fn rejected_add_reports_every_offending_field_and_mutates_nothing() {
    let conn = open_db_in_memory().unwrap();
    let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    registry.load().unwrap();
    registry.add(draft("m", "Memo", "bookmark")).unwrap();

    let err = registry.add(draft("m", "", "no-such-icon")).unwrap_err();
    let errors = match err {
        RegistryError::Validation(errors) => errors,
        other => panic!("expected validation error, got {other}"),
    };
    let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
    assert!(fields.contains(&ShortcutField::Key));
    assert!(fields.contains(&ShortcutField::Name));
    assert!(fields.contains(&ShortcutField::Icon));

    assert_eq!(registry.shortcuts().len(), 1);
    let store = SqliteKvStore::new(&conn);
    assert_eq!(store.get_by_prefix("shortcut:").unwrap().len(), 1);
}

#[test]
fn delete_removes_memory_and_persistence() {
    let conn = open_db_in_memory().unwrap();
    let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    registry.load().unwrap();
    let memo = registry.add(draft("m", "Memo", "bookmark")).unwrap();
    let work = registry.add(draft("w", "Work", "briefcase")).unwrap();

    registry.delete(&[memo.id]).unwrap();
    assert_eq!(registry.shortcuts(), &[work]);

    let mut reloaded = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    reloaded.load().unwrap();
    assert_eq!(reloaded.shortcuts().len(), 1);
}

#[test]
fn corrupt_persisted_shortcut_is_skipped_on_load() {
    let conn = open_db_in_memory().unwrap();
    {
        let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
        registry.load().unwrap();
        registry.add(draft("m", "Memo", "bookmark")).unwrap();
    }
    let store = SqliteKvStore::new(&conn);
    store.put("shortcut:corrupt", "{not json").unwrap();
    store
        .put("shortcut:wrong-shape", r#"{"id":"x"}"#)
        .unwrap();

    let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    registry.load().unwrap();
    assert_eq!(registry.shortcuts().len(), 1);
    assert_eq!(registry.shortcuts()[0].name, "Memo");
}

#[test]
fn editing_missing_shortcut_reports_not_found() {
    let conn = open_db_in_memory().unwrap();
    let mut registry = ShortcutRegistry::new(SqliteKvStore::new(&conn));
    registry.load().unwrap();

    let err = registry
        .edit(uuid::Uuid::new_v4(), ShortcutChange::Key("m".to_string()))
        .unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(_)));
}
