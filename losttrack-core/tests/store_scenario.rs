//! End-to-end store scenario: add, collide, search, delete.

use losttrack_core::{ItemDraft, ItemStore, StoreError};

#[tokio::test]
async fn test_full_item_lifecycle() {
    let store = ItemStore::in_memory().await.unwrap();

    // Add a jacket
    let jacket = ItemDraft::new("Jacket", "Blue, size M", "A100").unwrap();
    store.add(&jacket).await.unwrap();

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Jacket");
    assert_eq!(all[0].description, "Blue, size M");
    assert_eq!(all[0].barcode, "A100");

    // A second item reusing the barcode is rejected, store unchanged
    let scarf = ItemDraft::new("Scarf", "Red wool", "A100").unwrap();
    let err = store.add(&scarf).await.unwrap_err();
    assert!(matches!(err, StoreError::DuplicateBarcode { .. }));
    assert_eq!(store.count().await.unwrap(), 1);

    // Substring search hits the description, case-insensitively
    let hits = store.search("blue").await.unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].name, "Jacket");

    let hits = store.search("Z999").await.unwrap();
    assert!(hits.is_empty());

    // Deleting by barcode empties the store
    let removed = store.delete_by_barcode("A100").await.unwrap();
    assert_eq!(removed, 1);
    assert!(store.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_search_covers_every_column() {
    let store = ItemStore::in_memory().await.unwrap();

    for (name, description, barcode) in [
        ("Umbrella", "Black, wooden handle", "U001"),
        ("Headphones", "Over-ear, umbrella logo", "H002"),
        ("Wallet", "Brown leather", "UMB-3"),
    ] {
        let draft = ItemDraft::new(name, description, barcode).unwrap();
        store.add(&draft).await.unwrap();
    }

    let hits = store.search("umb").await.unwrap();
    let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, ["Umbrella", "Headphones", "Wallet"]);
}

#[tokio::test]
async fn test_delete_removes_every_match_only() {
    let store = ItemStore::in_memory().await.unwrap();

    let keys = ItemDraft::new("Keys", "Three keys, red fob", "K010").unwrap();
    let phone = ItemDraft::new("Phone", "Cracked screen", "P020").unwrap();
    store.add(&keys).await.unwrap();
    store.add(&phone).await.unwrap();

    assert_eq!(store.delete_by_barcode("K010").await.unwrap(), 1);

    let all = store.list_all().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].barcode, "P020");
}
