use rtimesheet::core::payment::{
    PaymentChange, PaymentLogic, is_period_paid, latest_payment, mark_paid, reset_paid,
};
use rtimesheet::models::category::Category;
use rtimesheet::models::period::Period;
use rtimesheet::store::{DocumentStore, RecordStore, SqliteStore};
use std::fs;
use std::path::Path;

mod common;
use common::{d, rec, setup_test_db, temp_dir, ts};

fn users(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn jan() -> Period {
    Period::new(d(2024, 1, 2))
}

#[test]
fn test_empty_period_is_never_paid() {
    assert!(!is_period_paid(&[], &users(&["Aaron"]), &jan()));

    // records outside the period or for other users do not count
    let records = vec![
        rec("Aaron", d(2024, 1, 16), Category::Regular, 8.0),
        rec("Daisy", d(2024, 1, 3), Category::Regular, 8.0),
    ];
    let marked = mark_paid(records, &users(&["Daisy"]), &jan(), ts(2024, 1, 16, 10, 0));
    assert!(!is_period_paid(&marked, &users(&["Aaron"]), &jan()));
}

#[test]
fn test_paid_only_when_every_matching_record_is_marked() {
    let period = jan();
    let all = users(&["Aaron", "Daisy"]);
    let when = ts(2024, 1, 16, 10, 0);

    let records = vec![
        rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0),
        rec("Daisy", d(2024, 1, 4), Category::Sick, 8.0),
    ];
    assert!(!is_period_paid(&records, &all, &period));

    // only Aaron marked: partial
    let partial = mark_paid(records.clone(), &users(&["Aaron"]), &period, when);
    assert!(!is_period_paid(&partial, &all, &period));
    assert!(is_period_paid(&partial, &users(&["Aaron"]), &period));

    let marked = mark_paid(records, &all, &period, when);
    assert!(is_period_paid(&marked, &all, &period));
    assert_eq!(latest_payment(&marked, &all, &period), Some(when));

    let cleared = reset_paid(marked, &all, &period);
    assert!(!is_period_paid(&cleared, &all, &period));
    assert!(cleared.iter().all(|r| r.entered_for_payment.is_none()));
}

#[test]
fn test_mark_leaves_other_periods_alone() {
    let when = ts(2024, 1, 16, 10, 0);
    let records = vec![
        rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0),
        rec("Aaron", d(2024, 1, 17), Category::Regular, 8.0),
    ];

    let marked = mark_paid(records, &users(&["Aaron"]), &jan(), when);
    assert_eq!(marked[0].entered_for_payment, Some(when));
    assert_eq!(marked[1].entered_for_payment, None);
}

#[test]
fn test_reviewer_enters_and_resets_period_on_both_backends() {
    let db = setup_test_db("payment_enter_reset");
    let docs = temp_dir("payment_enter_reset");
    let backends: Vec<Box<dyn RecordStore>> = vec![
        Box::new(SqliteStore::open(Path::new(&db)).expect("sqlite")),
        Box::new(DocumentStore::open(Path::new(&docs)).expect("docs")),
    ];

    let roster = users(&["Stacey", "Aaron", "Daisy", "Cindy", "Alan"]);
    let period = jan();
    let when = ts(2024, 1, 16, 11, 30);

    for mut store in backends {
        let store = store.as_mut();

        // nothing entered yet
        assert_eq!(
            PaymentLogic::enter(store, &roster, &period, when).expect("enter"),
            PaymentChange::NothingToMark
        );

        store
            .save_user_slice("Aaron", &[rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0)])
            .expect("seed");
        store
            .save_user_slice(
                "Daisy",
                &[
                    rec("Daisy", d(2024, 1, 4), Category::Vacation, 8.0),
                    rec("Daisy", d(2024, 1, 18), Category::Regular, 8.0),
                ],
            )
            .expect("seed");

        assert_eq!(
            PaymentLogic::enter(store, &roster, &period, when).expect("enter"),
            PaymentChange::Updated(2)
        );
        let records = store.load_all().expect("load");
        assert!(is_period_paid(&records, &roster, &period));
        assert_eq!(latest_payment(&records, &roster, &period), Some(when));
        // next period untouched
        assert!(records
            .iter()
            .filter(|r| r.date == d(2024, 1, 18))
            .all(|r| r.entered_for_payment.is_none()));

        // second enter is a no-op
        assert_eq!(
            PaymentLogic::enter(store, &roster, &period, ts(2024, 1, 17, 8, 0)).expect("enter"),
            PaymentChange::Unchanged
        );
        let records = store.load_all().expect("load");
        assert_eq!(latest_payment(&records, &roster, &period), Some(when));

        assert_eq!(
            PaymentLogic::reset(store, &roster, &period).expect("reset"),
            PaymentChange::Updated(2)
        );
        let records = store.load_all().expect("load");
        assert!(!is_period_paid(&records, &roster, &period));
        assert_eq!(records.len(), 3);

        assert_eq!(
            PaymentLogic::reset(store, &roster, &period).expect("reset"),
            PaymentChange::Unchanged
        );
    }
}

#[test]
fn test_pay_leaves_unreadable_document_untouched() {
    let docs = temp_dir("payment_unreadable_doc");
    let dir = Path::new(&docs);
    let mut store = DocumentStore::open(dir).expect("docs");
    store
        .save_user_slice("Aaron", &[rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0)])
        .expect("seed");

    // trailing comma: not valid JSON
    let broken = r#"{"records": [
        {"User": "Daisy", "Date": "2024-02-01", "TimeType": "Regular", "Hours": 8,
         "LastUpdated": "2024-02-01 17:00:00", "EnteredPayment": ""},
    ]}"#;
    fs::write(dir.join("Daisy.json"), broken).expect("write Daisy");

    let roster = users(&["Aaron", "Daisy"]);
    let when = ts(2024, 1, 16, 10, 0);
    assert_eq!(
        PaymentLogic::enter(&mut store, &roster, &jan(), when).expect("enter"),
        PaymentChange::Updated(1)
    );
    assert_eq!(fs::read_to_string(dir.join("Daisy.json")).expect("Daisy"), broken);

    assert_eq!(
        PaymentLogic::reset(&mut store, &roster, &jan()).expect("reset"),
        PaymentChange::Updated(1)
    );
    assert_eq!(fs::read_to_string(dir.join("Daisy.json")).expect("Daisy"), broken);

    // Daisy's own document cannot be rewritten until it is repaired
    assert!(
        store
            .save_user_slice("Daisy", &[rec("Daisy", d(2024, 1, 3), Category::Sick, 8.0)])
            .is_err()
    );
    assert_eq!(fs::read_to_string(dir.join("Daisy.json")).expect("Daisy"), broken);
}

#[test]
fn test_pay_keeps_entries_that_could_not_be_decoded() {
    let db = setup_test_db("payment_keeps_malformed");
    let docs = temp_dir("payment_keeps_malformed");

    let mut sqlite = SqliteStore::open(Path::new(&db)).expect("sqlite");
    sqlite
        .save_user_slice("Aaron", &[rec("Aaron", d(2024, 1, 3), Category::Regular, 8.0)])
        .expect("seed");
    let conn = rusqlite::Connection::open(&db).expect("open db");
    conn.execute(
        "INSERT INTO records (user, date, category, hours, last_updated, entered_payment)
         VALUES ('Daisy', '2024-03-06', 'Overtime', 2, '2024-03-06 10:00:00', '')",
        [],
    )
    .expect("insert raw row");

    PaymentLogic::enter(&mut sqlite, &users(&["Aaron", "Daisy"]), &jan(), ts(2024, 1, 16, 10, 0))
        .expect("enter sqlite");
    let overtime: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM records WHERE category = 'Overtime'",
            [],
            |row| row.get(0),
        )
        .expect("count");
    assert_eq!(overtime, 1);

    let dir = Path::new(&docs);
    let mut documents = DocumentStore::open(dir).expect("docs");
    fs::write(
        dir.join("Daisy.json"),
        r#"{"records": [
            {"User": "Daisy", "Date": "2024-01-04", "TimeType": "Sick", "Hours": 8,
             "LastUpdated": "2024-01-04 17:00:00", "EnteredPayment": ""},
            {"User": "Daisy", "Date": "2024-03-06", "TimeType": "Overtime", "Hours": 2,
             "LastUpdated": "2024-03-06 10:00:00", "EnteredPayment": ""}
        ]}"#,
    )
    .expect("write Daisy");

    PaymentLogic::enter(&mut documents, &users(&["Daisy"]), &jan(), ts(2024, 1, 16, 10, 0))
        .expect("enter documents");
    let content = fs::read_to_string(dir.join("Daisy.json")).expect("Daisy");
    assert!(content.contains("Overtime"));
    assert!(content.contains("\"EnteredPayment\": \"2024-01-16 10:00:00\""));
    assert!(is_period_paid(&documents.load_all().expect("load"), &users(&["Daisy"]), &jan()));
}
