//! Tab persistence tests
//!
//! Exercises the revision guard and the open-tab uniqueness index directly
//! against the repository, plus an on-disk round trip.

use chrono::Utc;
use rust_decimal::Decimal;

use thali_server::db::DbService;
use thali_server::db::models::TableTab;
use thali_server::db::repository::{RepoError, TabRepository};
use thali_server::orders::{OrderedItemInput, build_entry};

fn dosa_entry() -> thali_server::db::models::OrderEntry {
    let items = vec![OrderedItemInput {
        name: "Dosa".to_string(),
        item_price: Decimal::from(80),
        status: None,
        category: None,
    }];
    build_entry(items, Decimal::from(80), Utc::now())
}

#[tokio::test]
async fn stale_revision_is_rejected() {
    let db = DbService::open_in_memory().await.unwrap();
    let repo = TabRepository::new(db.db);

    repo.create(TableTab::open("5".to_string(), dosa_entry()))
        .await
        .unwrap();

    // Two readers pick up the same revision
    let mut first = repo.find_open_by_table("5").await.unwrap().unwrap();
    let mut second = repo.find_open_by_table("5").await.unwrap().unwrap();
    assert_eq!(first.revision, second.revision);

    first.entries.push(dosa_entry());
    let saved = repo.save_with_revision(&first).await.unwrap();
    assert!(saved.is_some(), "first writer lands");

    // The second writer's revision is now stale
    second.entries.push(dosa_entry());
    let saved = repo.save_with_revision(&second).await.unwrap();
    assert!(saved.is_none(), "stale writer is turned away");

    // Only the first append is visible
    let tab = repo.find_open_by_table("5").await.unwrap().unwrap();
    assert_eq!(tab.entries.len(), 2);
    assert_eq!(tab.revision, first.revision + 1);
}

#[tokio::test]
async fn rereading_after_conflict_succeeds() {
    let db = DbService::open_in_memory().await.unwrap();
    let repo = TabRepository::new(db.db);

    repo.create(TableTab::open("5".to_string(), dosa_entry()))
        .await
        .unwrap();

    let mut stale = repo.find_open_by_table("5").await.unwrap().unwrap();
    let mut winner = repo.find_open_by_table("5").await.unwrap().unwrap();
    winner.entries.push(dosa_entry());
    repo.save_with_revision(&winner).await.unwrap().unwrap();

    stale.entries.push(dosa_entry());
    assert!(repo.save_with_revision(&stale).await.unwrap().is_none());

    // Retry path: re-read, re-apply, save
    let mut fresh = repo.find_open_by_table("5").await.unwrap().unwrap();
    fresh.entries.push(dosa_entry());
    let saved = repo.save_with_revision(&fresh).await.unwrap();
    assert!(saved.is_some());
    assert_eq!(saved.unwrap().entries.len(), 3);
}

#[tokio::test]
async fn one_open_tab_per_table() {
    let db = DbService::open_in_memory().await.unwrap();
    let repo = TabRepository::new(db.db);

    repo.create(TableTab::open("9".to_string(), dosa_entry()))
        .await
        .unwrap();

    // The uniqueness index on (tableNumber, status) blocks a second open
    // tab, reported as a duplicate so the placement loop can retry it
    let result = repo
        .create(TableTab::open("9".to_string(), dosa_entry()))
        .await;
    assert!(matches!(result, Err(RepoError::Duplicate(_))));

    // A different table is unaffected
    repo.create(TableTab::open("10".to_string(), dosa_entry()))
        .await
        .unwrap();
}

#[tokio::test]
async fn tabs_survive_a_disk_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tabs.db");
    let db = DbService::new(path.to_str().unwrap()).await.unwrap();
    let repo = TabRepository::new(db.db);

    let created = repo
        .create(TableTab::open("5".to_string(), dosa_entry()))
        .await
        .unwrap();
    assert!(created.id.is_some());

    let loaded = repo.find_open_by_table("5").await.unwrap().unwrap();
    assert_eq!(loaded.table_number, "5");
    assert_eq!(loaded.entries.len(), 1);
    assert_eq!(loaded.entries[0].items[0].name, "Dosa");
    assert_eq!(loaded.entries[0].price, Decimal::from(80));
}
