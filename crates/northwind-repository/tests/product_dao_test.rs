//! Integration tests for SqliteProductDao.

mod common;

use common::{category, product, TestDatabase};
use futures::TryStreamExt;
use northwind_core::NorthwindError;
use northwind_repository::{
    ProductCategoryDao, ProductDao, ProductTransferObject, SqliteProductCategoryDao,
    SqliteProductDao,
};

#[tokio::test]
async fn test_insert_and_find() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let mut chai = ProductTransferObject {
        name: "Chai".to_string(),
        supplier_id: Some(1),
        quantity_per_unit: Some("10 boxes x 20 bags".to_string()),
        unit_price: Some(18.0),
        units_in_stock: Some(39),
        units_on_order: Some(0),
        reorder_level: Some(10),
        ..ProductTransferObject::default()
    };

    let id = dao.insert(&chai).await.expect("Failed to insert product");
    assert!(id > 0);

    let found = dao.find(id).await.expect("Product not found");
    chai.id = id;
    assert_eq!(found, chai);
}

#[tokio::test]
async fn test_null_fields_persist_as_null() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let id = dao.insert(&product("Chang")).await.unwrap();
    let found = dao.find(id).await.unwrap();

    assert_eq!(found.supplier_id, None);
    assert_eq!(found.category_id, None);
    assert_eq!(found.unit_price, None);
    assert!(!found.discontinued);

    let stored_nulls: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM Products WHERE ProductID = ? AND UnitPrice IS NULL AND SupplierID IS NULL",
    )
    .bind(id)
    .fetch_one(db.pool().inner())
    .await
    .unwrap();
    assert_eq!(stored_nulls, 1);
}

#[tokio::test]
async fn test_find_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let err = dao.find(999_999).await.unwrap_err();
    assert!(matches!(err, NorthwindError::NotFound { .. }));
}

#[tokio::test]
async fn test_non_positive_ids_are_rejected() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    for id in [0, -1] {
        assert!(matches!(dao.find(id).await, Err(NorthwindError::InvalidArgument(_))));
        assert!(matches!(dao.delete(id).await, Err(NorthwindError::InvalidArgument(_))));

        let mut p = product("Chai");
        p.id = id;
        assert!(matches!(dao.update(&p).await, Err(NorthwindError::InvalidArgument(_))));
    }
}

#[tokio::test]
async fn test_select_rejects_bad_window() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    assert!(matches!(dao.select(-1, 10), Err(NorthwindError::InvalidArgument(_))));
    assert!(matches!(dao.select(0, 0), Err(NorthwindError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_select_pages_in_id_order() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let mut ids = Vec::new();
    for name in ["Chai", "Chang", "Aniseed Syrup", "Ikura", "Konbu"] {
        ids.push(dao.insert(&product(name)).await.unwrap());
    }

    let page: Vec<_> = dao.select(1, 3).unwrap().try_collect().await.unwrap();
    let page_ids: Vec<i32> = page.iter().map(|p| p.id).collect();
    assert_eq!(page_ids, ids[1..4].to_vec());

    let tail: Vec<_> = dao.select(4, 10).unwrap().try_collect().await.unwrap();
    assert_eq!(tail.len(), 1);
    assert_eq!(tail[0].name, "Konbu");

    let past_end: Vec<_> = dao.select(10, 10).unwrap().try_collect().await.unwrap();
    assert!(past_end.is_empty());
}

#[tokio::test]
async fn test_dropped_stream_releases_connection() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    for name in ["Chai", "Chang", "Ikura"] {
        dao.insert(&product(name)).await.unwrap();
    }

    let mut stream = dao.select(0, 10).unwrap();
    let first = stream.try_next().await.unwrap().unwrap();
    assert_eq!(first.name, "Chai");
    drop(stream);

    // The in-memory pool has a single connection; this would time out if
    // the abandoned stream still held it.
    assert!(dao.find(first.id).await.is_ok());
}

#[tokio::test]
async fn test_select_by_name() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    for name in ["Chai", "Chang", "Ikura", "Konbu"] {
        dao.insert(&product(name)).await.unwrap();
    }

    let names = vec!["Konbu".to_string(), "Chai".to_string(), "Tofu".to_string()];
    let found: Vec<_> = dao.select_by_name(&names).unwrap().try_collect().await.unwrap();
    let found_names: Vec<&str> = found.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(found_names, vec!["Chai", "Konbu"]);

    assert!(matches!(dao.select_by_name(&[]), Err(NorthwindError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_select_by_category() {
    let db = TestDatabase::new().await;
    let categories = SqliteProductCategoryDao::new(db.pool());
    let dao = SqliteProductDao::new(db.pool());

    let beverages = categories.insert(&category("Beverages")).await.unwrap();
    let seafood = categories.insert(&category("Seafood")).await.unwrap();

    for (name, category_id) in [("Chai", beverages), ("Ikura", seafood), ("Chang", beverages)] {
        let mut p = product(name);
        p.category_id = Some(category_id);
        dao.insert(&p).await.unwrap();
    }
    dao.insert(&product("Uncategorized")).await.unwrap();

    let drinks: Vec<_> = dao.select_by_category(&[beverages]).unwrap().try_collect().await.unwrap();
    assert_eq!(drinks.len(), 2);
    assert!(drinks.iter().all(|p| p.category_id == Some(beverages)));

    let both: Vec<_> = dao
        .select_by_category(&[seafood, beverages])
        .unwrap()
        .try_collect()
        .await
        .unwrap();
    assert_eq!(both.len(), 3);

    assert!(matches!(dao.select_by_category(&[]), Err(NorthwindError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_update_replaces_row() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let id = dao.insert(&product("Chai")).await.unwrap();
    let replacement = ProductTransferObject {
        id,
        name: "Chai Tea".to_string(),
        unit_price: Some(19.5),
        discontinued: true,
        ..ProductTransferObject::default()
    };

    assert!(dao.update(&replacement).await.unwrap());
    assert_eq!(dao.find(id).await.unwrap(), replacement);
}

#[tokio::test]
async fn test_update_missing_returns_false() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let mut ghost = product("Ghost");
    ghost.id = 4242;
    assert!(!dao.update(&ghost).await.unwrap());
}

#[tokio::test]
async fn test_delete() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let id = dao.insert(&product("Chai")).await.unwrap();
    assert!(dao.delete(id).await.unwrap());
    assert!(!dao.delete(id).await.unwrap());
    assert!(dao.find(id).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn test_unknown_category_is_conflict() {
    let db = TestDatabase::new().await;
    let dao = SqliteProductDao::new(db.pool());

    let mut orphan = product("Orphan");
    orphan.category_id = Some(77);
    let err = dao.insert(&orphan).await.unwrap_err();
    assert!(matches!(err, NorthwindError::Conflict(_)));
}
