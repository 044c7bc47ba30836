use super::*;
use crate::core::coffee::{CoffeeType, RoastDegree};
use tempfile::tempdir;

fn empty_store() -> CoffeeStore {
    let mut store = CoffeeStore::open_in_memory().unwrap().with_seed(false);
    store.ensure_schema().unwrap();
    store
}

fn sample(name: &str, price: f64) -> NewCoffee {
    NewCoffee {
        name: name.to_string(),
        roast_degree: RoastDegree::Light,
        coffee_type: CoffeeType::Beans,
        description: format!("{name} notes"),
        price,
        volume: 250.0,
    }
}

#[test]
fn test_fresh_store_seeds_seven_rows() {
    let mut store = CoffeeStore::open_in_memory().unwrap();
    let report = store.ensure_schema().unwrap();

    assert!(report.initialised);
    assert_eq!(report.seeded, 7);

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 7);

    let first = &rows[0];
    assert_eq!(first.id, 1);
    assert_eq!(first.name, "Эфиопия Иргачефф");
    assert_eq!(first.roast_degree, RoastDegree::Medium);
    assert_eq!(first.roast_degree.label(), "Средняя");
    assert_eq!(first.coffee_type.label(), "Зерна");
    assert_eq!(first.price, 1250.0);
    assert_eq!(first.volume, 250.0);

    assert_eq!(rows[6].name, "Коста Рика Тарразу");
}

#[test]
fn test_ensure_schema_twice_does_not_duplicate_seed() {
    let mut store = CoffeeStore::open_in_memory().unwrap();
    store.ensure_schema().unwrap();

    let report = store.ensure_schema().unwrap();
    assert_eq!(report, SchemaReport::default());
    assert_eq!(store.count().unwrap(), 7);
}

#[test]
fn test_emptied_table_is_not_reseeded() {
    let mut store = CoffeeStore::open_in_memory().unwrap();
    store.ensure_schema().unwrap();
    for item in store.list_all().unwrap() {
        store.delete(item.id).unwrap();
    }

    let report = store.ensure_schema().unwrap();
    assert_eq!(report.seeded, 0);
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_seed_disabled_leaves_table_empty() {
    let store = empty_store();
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_insert_then_list_roundtrips_fields() {
    let store = empty_store();
    let inputs = [sample("Alpha", 100.5), sample("Beta", 200.25), sample("Gamma", 0.01)];

    let ids: Vec<_> = inputs.iter().map(|c| store.insert(c).unwrap()).collect();

    let rows = store.list_all().unwrap();
    assert_eq!(rows.len(), 3);
    for (id, input) in ids.iter().zip(&inputs) {
        let fetched = store.get(*id).unwrap().unwrap();
        assert_eq!(fetched, input.clone().with_id(*id));
    }
}

#[test]
fn test_ids_are_unique_and_not_reused() {
    let store = empty_store();
    let a = store.insert(&sample("A", 1.0)).unwrap();
    let b = store.insert(&sample("B", 1.0)).unwrap();
    assert_ne!(a, b);

    store.delete(b).unwrap();
    let c = store.insert(&sample("C", 1.0)).unwrap();
    assert!(c > b, "AUTOINCREMENT must not hand out a freed id");
}

#[test]
fn test_update_touches_only_target_row() {
    let store = empty_store();
    let a = store.insert(&sample("A", 10.0)).unwrap();
    let b = store.insert(&sample("B", 20.0)).unwrap();

    let mut changed = sample("A", 10.0);
    changed.price = 15.0;
    changed.roast_degree = RoastDegree::Dark;
    store.update(a, &changed).unwrap();

    assert_eq!(store.get(a).unwrap().unwrap(), changed.with_id(a));
    assert_eq!(store.get(b).unwrap().unwrap(), sample("B", 20.0).with_id(b));
}

#[test]
fn test_update_missing_id_reports_not_found() {
    let store = empty_store();
    let err = store.update(42, &sample("Ghost", 1.0)).unwrap_err();
    assert!(matches!(err, StoreError::NotFound(42)));
    assert!(store.list_all().unwrap().is_empty());
}

#[test]
fn test_insert_rejects_non_positive_amounts() {
    let store = empty_store();

    let mut negative = sample("Negative", -5.0);
    negative.volume = 0.0;
    let err = store.insert(&negative).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "price", .. }));

    let mut no_volume = sample("Empty bag", 10.0);
    no_volume.volume = 0.0;
    let err = store.insert(&no_volume).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "volume", .. }));

    let err = store.insert(&sample("Infinite", f64::INFINITY)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "price", .. }));

    assert_eq!(store.count().unwrap(), 0);
}

#[test]
fn test_update_rejects_non_positive_amounts_and_keeps_row() {
    let store = empty_store();
    let id = store.insert(&sample("Kept", 10.0)).unwrap();

    let err = store.update(id, &sample("Kept", -1.0)).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "price", .. }));

    let mut nan_volume = sample("Kept", 10.0);
    nan_volume.volume = f64::NAN;
    let err = store.update(id, &nan_volume).unwrap_err();
    assert!(matches!(err, StoreError::InvalidValue { field: "volume", .. }));

    assert_eq!(store.get(id).unwrap().unwrap(), sample("Kept", 10.0).with_id(id));
}

#[test]
fn test_delete_removes_row_and_missing_is_noop() {
    let store = empty_store();
    let id = store.insert(&sample("Doomed", 5.0)).unwrap();

    assert!(store.delete(id).unwrap());
    assert!(store.get(id).unwrap().is_none());
    assert!(store.list_all().unwrap().is_empty());

    assert!(!store.delete(id).unwrap());
}

#[test]
fn test_end_to_end_insert_update_delete() {
    let store = empty_store();
    let original = NewCoffee {
        name: "Test Roast".to_string(),
        roast_degree: RoastDegree::Dark,
        coffee_type: CoffeeType::Ground,
        description: String::new(),
        price: 500.0,
        volume: 100.0,
    };

    let id = store.insert(&original).unwrap();
    assert!(store.list_all().unwrap().iter().any(|c| c.id == id));

    let mut repriced = original.clone();
    repriced.price = 600.0;
    store.update(id, &repriced).unwrap();

    let fetched = store.get(id).unwrap().unwrap();
    assert_eq!(fetched.price, 600.0);
    assert_eq!(fetched.name, original.name);
    assert_eq!(fetched.roast_degree, original.roast_degree);
    assert_eq!(fetched.coffee_type, original.coffee_type);
    assert_eq!(fetched.description, original.description);
    assert_eq!(fetched.volume, original.volume);

    store.delete(id).unwrap();
    assert!(store.get(id).unwrap().is_none());
}

#[test]
fn test_unknown_enum_label_surfaces_as_invalid_row() {
    let store = empty_store();
    store
        .conn
        .execute(
            "INSERT INTO coffee (name, roast_degree, type, description, price, volume)
             VALUES ('Odd', 'Extra', 'Зерна', NULL, 1.0, 1.0)",
            [],
        )
        .unwrap();

    let err = store.list_all().unwrap_err();
    match err {
        StoreError::InvalidRow { column, .. } => assert_eq!(column, "roast_degree"),
        other => panic!("expected InvalidRow, got {other:?}"),
    }
}

#[test]
fn test_null_description_reads_as_empty() {
    let store = empty_store();
    store
        .conn
        .execute(
            "INSERT INTO coffee (name, roast_degree, type, description, price, volume)
             VALUES ('Plain', 'Темная', 'Молотый', NULL, 3.0, 4.0)",
            [],
        )
        .unwrap();

    let rows = store.list_all().unwrap();
    assert_eq!(rows[0].description, "");
    assert_eq!(rows[0].coffee_type, CoffeeType::Ground);
}

#[test]
fn test_open_creates_parent_directory_and_persists() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("data").join("coffee.sqlite");

    {
        let mut store = CoffeeStore::open(&path).unwrap();
        assert_eq!(store.path(), Some(path.as_path()));
        store.ensure_schema().unwrap();
        store.insert(&sample("Persisted", 9.0)).unwrap();
    }

    assert!(path.exists());

    let mut reopened = CoffeeStore::open(&path).unwrap();
    let report = reopened.ensure_schema().unwrap();
    assert_eq!(report.seeded, 0);
    assert_eq!(reopened.count().unwrap(), 8);
}

#[test]
fn test_legacy_file_with_rows_is_marked_without_seeding() {
    let tmp = tempdir().unwrap();
    let path = tmp.path().join("coffee.sqlite");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE coffee (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                roast_degree TEXT NOT NULL,
                type TEXT NOT NULL,
                description TEXT,
                price REAL NOT NULL,
                volume REAL NOT NULL
            );
            INSERT INTO coffee (name, roast_degree, type, description, price, volume)
            VALUES ('Old', 'Светлая', 'Зерна', 'kept', 10.0, 20.0);",
        )
        .unwrap();
    }

    let mut store = CoffeeStore::open(&path).unwrap();
    let report = store.ensure_schema().unwrap();
    assert!(report.initialised);
    assert_eq!(report.seeded, 0);
    assert_eq!(store.list_all().unwrap()[0].name, "Old");
}

#[test]
fn test_list_before_schema_is_storage_error() {
    let store = CoffeeStore::open_in_memory().unwrap();
    let err = store.list_all().unwrap_err();
    assert!(matches!(err, StoreError::Sqlite { .. }));
    assert!(err.to_string().contains("listing coffees"));
}
