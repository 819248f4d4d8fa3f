use rtimesheet::core::grid::{HourRules, build_grid};
use rtimesheet::core::save::SaveLogic;
use rtimesheet::models::category::Category;
use rtimesheet::models::period::Period;
use rtimesheet::models::record::TimeRecord;
use rtimesheet::store::{DocumentStore, RecordStore, SqliteStore};
use std::fs;
use std::path::Path;

mod common;
use common::{d, rec, setup_test_db, temp_dir, ts};

fn stores(name: &str) -> Vec<Box<dyn RecordStore>> {
    let db = setup_test_db(name);
    let docs = temp_dir(name);
    vec![
        Box::new(SqliteStore::open(Path::new(&db)).expect("sqlite store")),
        Box::new(DocumentStore::open(Path::new(&docs)).expect("document store")),
    ]
}

fn user_records(store: &mut dyn RecordStore, user: &str) -> Vec<TimeRecord> {
    let mut out: Vec<TimeRecord> = store
        .load_all()
        .expect("load")
        .into_iter()
        .filter(|r| r.user == user)
        .collect();
    out.sort_by(|a, b| a.date.cmp(&b.date).then(a.category.cmp(&b.category)));
    out
}

#[test]
fn test_save_replaces_period_and_keeps_other_periods() {
    for mut store in stores("save_keeps_other_periods") {
        let store = store.as_mut();
        let rules = HourRules::default();

        // Aaron already has hours in December and in the January period
        store
            .save_user_slice(
                "Aaron",
                &[
                    rec("Aaron", d(2023, 12, 20), Category::Regular, 8.0),
                    rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0),
                    rec("Aaron", d(2024, 1, 4), Category::Sick, 8.0),
                ],
            )
            .expect("seed");
        store
            .save_user_slice("Daisy", &[rec("Daisy", d(2024, 1, 3), Category::Regular, 6.0)])
            .expect("seed");

        let period = Period::new(d(2024, 1, 2));
        let records = store.load_all().expect("load");
        let mut grid = build_grid(&records, "Aaron", period);
        grid.set(d(2024, 1, 4), Category::Sick, 0.0);
        grid.set(d(2024, 1, 5), Category::Vacation, 8.0);

        let now = ts(2024, 1, 10, 9, 15);
        let outcome = SaveLogic::apply(store, "Aaron", &grid, now, &rules).expect("save");
        assert_eq!(outcome.written, 2);
        assert_eq!(outcome.replaced, 2);
        assert_eq!(outcome.kept, 1);

        let aaron = user_records(store, "Aaron");
        assert_eq!(aaron.len(), 3);
        // December survives untouched
        assert_eq!(aaron[0].date, d(2023, 12, 20));
        assert_eq!(aaron[0].last_updated, ts(2024, 1, 1, 9, 0));
        // zeroed cell is gone, new cell is present
        assert!(!aaron.iter().any(|r| r.category == Category::Sick));
        assert!(aaron.iter().any(|r| r.date == d(2024, 1, 5)
            && r.category == Category::Vacation
            && r.last_updated == now));

        // other users are not touched
        let daisy = user_records(store, "Daisy");
        assert_eq!(daisy.len(), 1);
        assert_eq!(daisy[0].hours, 6.0);
    }
}

#[test]
fn test_saving_same_grid_twice_is_stable() {
    for mut store in stores("save_idempotent") {
        let store = store.as_mut();
        let rules = HourRules::default();
        let period = Period::new(d(2024, 1, 2));
        let now = ts(2024, 1, 10, 9, 15);

        let mut grid = build_grid(&[], "Cindy", period);
        grid.set(d(2024, 1, 8), Category::Regular, 7.5);
        grid.set(d(2024, 1, 9), Category::Holiday, 8.0);

        SaveLogic::apply(store, "Cindy", &grid, now, &rules).expect("first save");
        let first = user_records(store, "Cindy");

        SaveLogic::apply(store, "Cindy", &grid, now, &rules).expect("second save");
        let second = user_records(store, "Cindy");

        assert_eq!(first.len(), 2);
        assert_eq!(first, second);

        let reloaded = build_grid(&store.load_all().expect("load"), "Cindy", period);
        assert_eq!(reloaded, grid);
    }
}

#[test]
fn test_invalid_grid_writes_nothing() {
    for mut store in stores("save_invalid") {
        let store = store.as_mut();
        store
            .save_user_slice("Aaron", &[rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0)])
            .expect("seed");

        let period = Period::new(d(2024, 1, 2));
        let mut grid = build_grid(&store.load_all().expect("load"), "Aaron", period);
        grid.set(d(2024, 1, 3), Category::Regular, 4.0);
        grid.set(d(2024, 1, 4), Category::Regular, 30.0);

        let res = SaveLogic::apply(
            store,
            "Aaron",
            &grid,
            ts(2024, 1, 10, 9, 0),
            &HourRules::default(),
        );
        assert!(res.is_err());

        let aaron = user_records(store, "Aaron");
        assert_eq!(aaron.len(), 1);
        assert_eq!(aaron[0].hours, 8.0);
    }
}

#[test]
fn test_saving_empty_grid_clears_the_period() {
    for mut store in stores("save_clear_period") {
        let store = store.as_mut();
        store
            .save_user_slice(
                "Stacey",
                &[
                    rec("Stacey", d(2024, 1, 3), Category::Regular, 8.0),
                    rec("Stacey", d(2024, 1, 17), Category::Regular, 8.0),
                ],
            )
            .expect("seed");

        let grid = build_grid(&[], "Stacey", Period::new(d(2024, 1, 2)));
        let outcome = SaveLogic::apply(
            store,
            "Stacey",
            &grid,
            ts(2024, 1, 10, 9, 0),
            &HourRules::default(),
        )
        .expect("save");
        assert_eq!(outcome.written, 0);

        let stacey = user_records(store, "Stacey");
        assert_eq!(stacey.len(), 1);
        assert_eq!(stacey[0].date, d(2024, 1, 17));
    }
}

#[test]
fn test_adding_sick_hours_next_to_regular_hours() {
    for mut store in stores("save_add_sick") {
        let store = store.as_mut();
        let rules = HourRules::default();
        let period = Period::new(d(2024, 1, 2));

        store
            .save_user_slice(
                "Aaron",
                &[
                    rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0),
                    rec("Aaron", d(2024, 2, 14), Category::Vacation, 8.0),
                ],
            )
            .expect("seed");

        let grid = build_grid(&store.load_all().expect("load"), "Aaron", period);
        let wed = &grid.rows[1];
        assert_eq!(wed.label(), "Wed 01/03");
        assert_eq!(wed.get(Category::Regular), 8.0);
        assert_eq!(wed.total(), 8.0);
        assert_eq!(grid.non_zero_rows().len(), 1);

        let mut edited = grid.clone();
        edited.set(d(2024, 1, 3), Category::Sick, 4.0);
        SaveLogic::apply(store, "Aaron", &edited, ts(2024, 1, 10, 9, 0), &rules).expect("save");

        let aaron = user_records(store, "Aaron");
        let on_wed: Vec<_> = aaron.iter().filter(|r| r.date == d(2024, 1, 3)).collect();
        assert_eq!(on_wed.len(), 2);
        assert!(on_wed.iter().any(|r| r.category == Category::Regular && r.hours == 8.0));
        assert!(on_wed.iter().any(|r| r.category == Category::Sick && r.hours == 4.0));

        let february = aaron
            .iter()
            .find(|r| r.date == d(2024, 2, 14))
            .expect("other period kept");
        assert_eq!(february.last_updated, ts(2024, 1, 1, 9, 0));
    }
}

#[test]
fn test_save_keeps_rows_that_could_not_be_read() {
    let db = setup_test_db("save_keeps_malformed");
    let mut store = SqliteStore::open(Path::new(&db)).expect("sqlite");
    store
        .save_user_slice("Aaron", &[rec("Aaron", d(2024, 3, 5), Category::Regular, 8.0)])
        .expect("seed");

    let conn = rusqlite::Connection::open(&db).expect("open db");
    conn.execute(
        "INSERT INTO records (user, date, category, hours, last_updated, entered_payment)
         VALUES ('Aaron', '2024-03-06', 'Overtime', 2, '2024-03-06 10:00:00', '')",
        [],
    )
    .expect("insert raw row");

    let period = Period::new(d(2024, 1, 2));
    let mut grid = build_grid(&store.load_all().expect("load"), "Aaron", period);
    grid.set(d(2024, 1, 3), Category::Regular, 8.0);
    SaveLogic::apply(&mut store, "Aaron", &grid, ts(2024, 1, 10, 9, 0), &HourRules::default())
        .expect("save");

    let on_march_6: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM records WHERE user = 'Aaron' AND date = '2024-03-06'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(on_march_6, 1);

    let aaron = user_records(&mut store, "Aaron");
    assert_eq!(aaron.len(), 2);
    assert!(aaron.iter().any(|r| r.date == d(2024, 3, 5)));

    // saving again does not duplicate or drop anything
    SaveLogic::apply(&mut store, "Aaron", &grid, ts(2024, 1, 10, 9, 5), &HourRules::default())
        .expect("save again");
    let total: i64 = conn
        .query_row("SELECT COUNT(*) FROM records", [], |row| row.get(0))
        .expect("count");
    assert_eq!(total, 3);
}

#[test]
fn test_save_keeps_document_entries_that_could_not_be_read() {
    let docs = temp_dir("save_keeps_bad_entries");
    let dir = Path::new(&docs);
    fs::write(
        dir.join("Aaron.json"),
        r#"{"records": [
            {"User": "Aaron", "Date": "2024-03-05", "TimeType": "Regular", "Hours": 8,
             "LastUpdated": "2024-03-05 17:00:00", "EnteredPayment": ""},
            {"User": "Aaron", "Date": "2024-03-06", "TimeType": "Overtime", "Hours": 2,
             "LastUpdated": "2024-03-06 17:00:00", "EnteredPayment": ""},
            {"User": "Daisy", "Date": "2024-01-03", "TimeType": "Regular", "Hours": 5,
             "LastUpdated": "2024-01-03 17:00:00", "EnteredPayment": ""}
        ]}"#,
    )
    .expect("write Aaron");

    let mut store = DocumentStore::open(dir).expect("docs");

    // an entry naming another user is not loaded for anyone
    let records = store.load_all().expect("load");
    assert_eq!(records.len(), 1);
    assert!(build_grid(&records, "Daisy", Period::new(d(2024, 1, 2))).is_empty());

    let period = Period::new(d(2024, 1, 2));
    let mut grid = build_grid(&records, "Aaron", period);
    grid.set(d(2024, 1, 3), Category::Regular, 8.0);
    SaveLogic::apply(&mut store, "Aaron", &grid, ts(2024, 1, 10, 9, 0), &HourRules::default())
        .expect("save");

    let content = fs::read_to_string(dir.join("Aaron.json")).expect("Aaron");
    assert!(content.contains("Overtime"));
    assert!(content.contains("\"User\": \"Daisy\""));

    let aaron = user_records(&mut store, "Aaron");
    assert_eq!(aaron.len(), 2);
    assert_eq!(aaron[0].date, d(2024, 1, 3));
    assert_eq!(aaron[1].date, d(2024, 3, 5));
}
