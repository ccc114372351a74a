//! Picture service tests against in-memory SQLite.

mod common;

use common::TestDatabase;
use northwind_repository::DataAccessFactory;
use northwind_service::{
    EmployeePictureService, PictureService, ProductCategoryPictureService, RESERVED_HEADER_LEN,
};

fn category_pictures(db: &TestDatabase) -> ProductCategoryPictureService {
    ProductCategoryPictureService::new(db.factory.product_category_dao())
}

fn employee_pictures(db: &TestDatabase) -> EmployeePictureService {
    EmployeePictureService::new(db.factory.employee_dao())
}

#[tokio::test]
async fn test_update_then_get_returns_written_bytes() {
    let db = TestDatabase::new().await;
    let id = db.insert_category("Beverages", None).await;
    let service = category_pictures(&db);

    let image = b"BM\x00\x01\x02\x03".to_vec();
    assert!(service.update_picture(id, &mut image.as_slice()).await.unwrap());

    assert_eq!(service.try_get_picture(id).await.unwrap(), Some(image.clone()));
    let blob = db.category_blob(id).await.unwrap();
    assert_eq!(blob.len(), RESERVED_HEADER_LEN + image.len());
    assert!(blob[..RESERVED_HEADER_LEN].iter().all(|b| *b == 0));
}

#[tokio::test]
async fn test_update_preserves_existing_header() {
    let db = TestDatabase::new().await;
    let mut blob = vec![0x5A; RESERVED_HEADER_LEN];
    blob.extend_from_slice(&[1; 500]);
    let id = db.insert_category("Condiments", Some(blob)).await;
    let service = category_pictures(&db);

    assert!(service.update_picture(id, &mut &b"small"[..]).await.unwrap());

    let stored = db.category_blob(id).await.unwrap();
    assert_eq!(stored.len(), RESERVED_HEADER_LEN + 5);
    assert!(stored[..RESERVED_HEADER_LEN].iter().all(|b| *b == 0x5A));
    assert_eq!(service.try_get_picture(id).await.unwrap(), Some(b"small".to_vec()));
}

#[tokio::test]
async fn test_get_picture_none_cases() {
    let db = TestDatabase::new().await;
    let no_picture = db.insert_category("Confections", None).await;
    let truncated = db
        .insert_category("Dairy", Some(vec![3; RESERVED_HEADER_LEN - 1]))
        .await;
    let service = category_pictures(&db);

    assert_eq!(service.try_get_picture(no_picture).await.unwrap(), None);
    assert_eq!(service.try_get_picture(truncated).await.unwrap(), None);
    assert_eq!(service.try_get_picture(999).await.unwrap(), None);
}

#[tokio::test]
async fn test_header_only_blob_is_empty_picture() {
    let db = TestDatabase::new().await;
    let id = db
        .insert_category("Grains", Some(vec![3; RESERVED_HEADER_LEN]))
        .await;
    let service = category_pictures(&db);

    assert_eq!(service.try_get_picture(id).await.unwrap(), Some(Vec::new()));
}

#[tokio::test]
async fn test_empty_upload_round_trips() {
    let db = TestDatabase::new().await;
    let id = db.insert_category("Produce", None).await;
    let service = category_pictures(&db);

    assert!(service.update_picture(id, &mut &b""[..]).await.unwrap());

    assert_eq!(db.category_blob(id).await, Some(vec![0; RESERVED_HEADER_LEN]));
    assert_eq!(service.try_get_picture(id).await.unwrap(), Some(Vec::new()));
}

#[tokio::test]
async fn test_missing_row_returns_false() {
    let db = TestDatabase::new().await;
    let service = category_pictures(&db);

    assert!(!service.update_picture(999, &mut &b"img"[..]).await.unwrap());
    assert!(!service.delete_picture(999).await.unwrap());
}

#[tokio::test]
async fn test_delete_picture_clears_blob() {
    let db = TestDatabase::new().await;
    let id = db.insert_category("Seafood", None).await;
    let service = category_pictures(&db);
    service.update_picture(id, &mut &b"fish"[..]).await.unwrap();

    assert!(service.delete_picture(id).await.unwrap());
    assert_eq!(db.category_blob(id).await, None);
    assert_eq!(service.try_get_picture(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_employee_photo_roundtrip() {
    let db = TestDatabase::new().await;
    let id = db.insert_employee("Davolio", None).await;
    let service = employee_pictures(&db);

    let photo: Vec<u8> = (0..=255).collect();
    assert!(service.update_picture(id, &mut photo.as_slice()).await.unwrap());
    assert_eq!(service.try_get_picture(id).await.unwrap(), Some(photo));

    assert!(service.delete_picture(id).await.unwrap());
    assert_eq!(service.try_get_picture(id).await.unwrap(), None);
}

#[tokio::test]
async fn test_invalid_id_is_an_error() {
    let db = TestDatabase::new().await;
    let service = employee_pictures(&db);

    assert!(service.try_get_picture(0).await.is_err());
    assert!(service.delete_picture(-1).await.is_err());
}
