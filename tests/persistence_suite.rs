use cashbook_core::{
    config::StoreConfig,
    core::LedgerStore,
    ledger::{DayStatus, EntryKind, PaymentMethod},
    storage::{JsonStorage, StorageBackend},
};
use chrono::NaiveDate;
use rust_decimal_macros::dec;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn jan(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
}

fn storage_in(dir: &Path) -> JsonStorage {
    JsonStorage::new(StoreConfig::with_data_dir(dir.to_path_buf())).expect("storage")
}

#[test]
fn a_closed_ledger_survives_a_save_load_cycle() {
    let temp = tempdir().expect("temp dir");

    {
        let store = LedgerStore::open(Box::new(storage_in(temp.path())), "shop").expect("open");
        store
            .record_transaction(
                jan(1),
                EntryKind::Income,
                "Sales",
                "till",
                dec!(750),
                PaymentMethod::Cash,
            )
            .expect("record");
        store
            .record_transaction(
                jan(1),
                EntryKind::Expense,
                "Rent",
                "january",
                dec!(250),
                PaymentMethod::Bank,
            )
            .expect("record");
        store.close_day(jan(1)).expect("close");
        store.save().expect("save");
    }

    // Re-open from disk: statuses, balances, and transaction order survive.
    let store = LedgerStore::open(Box::new(storage_in(temp.path())), "shop").expect("reopen");
    let day = store.day_summary(jan(1)).expect("day restored");
    assert_eq!(day.status, DayStatus::Closed);
    assert_eq!(day.closing_balance, Some(dec!(500)));
    assert_eq!(day.transactions.len(), 2);
    assert_eq!(day.transactions[0].category, "Sales");
    assert_eq!(day.transactions[1].category, "Rent");

    let next = store.day_summary(jan(2)).expect("successor restored");
    assert_eq!(next.opening_balance, dec!(500));
    assert_eq!(next.status, DayStatus::Open);
}

#[test]
fn books_are_keyed_by_iso_date_on_disk() {
    let temp = tempdir().expect("temp dir");
    let storage = storage_in(temp.path());

    let store = LedgerStore::open(Box::new(storage.clone()), "shop").expect("open");
    store.ensure_day(jan(1));
    store.save().expect("save");

    let raw = fs::read_to_string(storage.book_path("shop")).expect("read raw json");
    assert!(
        raw.contains("\"2024-01-01\""),
        "days must serialize keyed by ISO date, got: {raw}"
    );
}

#[test]
fn failed_staged_write_preserves_the_original_file() {
    let temp = tempdir().expect("temp dir");
    let storage = storage_in(temp.path());

    let store = LedgerStore::open(Box::new(storage.clone()), "reliable").expect("open");
    store
        .record_transaction(
            jan(1),
            EntryKind::Income,
            "Sales",
            "",
            dec!(42),
            PaymentMethod::Cash,
        )
        .expect("record");
    store.save().expect("initial save");

    let path = storage.book_path("reliable");
    let original = fs::read_to_string(&path).expect("read original");

    // A directory squatting on the staging path forces the write to fail.
    let mut tmp = path.clone();
    tmp.set_extension("json.tmp");
    fs::create_dir_all(&tmp).expect("block staging path");

    store
        .record_transaction(
            jan(2),
            EntryKind::Income,
            "Sales",
            "",
            dec!(99),
            PaymentMethod::Cash,
        )
        .expect("record more");
    let result = store.save();
    assert!(
        result.is_err(),
        "save must fail while the staging path is blocked"
    );

    let current = fs::read_to_string(&path).expect("read after failure");
    assert_eq!(current, original, "original file untouched after failed save");
}

#[test]
fn restore_rolls_a_book_back_to_a_backup() {
    let temp = tempdir().expect("temp dir");
    let storage = storage_in(temp.path());

    let store = LedgerStore::open(Box::new(storage.clone()), "shop").expect("open");
    store
        .record_transaction(
            jan(1),
            EntryKind::Income,
            "Sales",
            "",
            dec!(100),
            PaymentMethod::Cash,
        )
        .expect("record");
    store.save().expect("save v1");
    storage
        .backup(&store.book_snapshot(), "shop", Some("end of day one"))
        .expect("backup");

    store.ensure_day(jan(2));
    store.save().expect("save v2");
    assert_eq!(storage.load("shop").expect("load v2").day_count(), 2);

    let backups = storage.list_backups("shop").expect("list backups");
    let named = backups
        .iter()
        .find(|b| b.contains("end-of-day-one"))
        .expect("named backup present");
    let restored = storage.restore("shop", named).expect("restore");
    assert_eq!(restored.day_count(), 1);
}
