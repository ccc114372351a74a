//! Integration tests for SqliteEmployeeDao.

mod common;

use chrono::NaiveDate;
use common::TestDatabase;
use futures::TryStreamExt;
use northwind_core::NorthwindError;
use northwind_repository::{EmployeeDao, EmployeeTransferObject, SqliteEmployeeDao};

fn employee(first_name: &str, last_name: &str) -> EmployeeTransferObject {
    EmployeeTransferObject {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        ..EmployeeTransferObject::default()
    }
}

#[tokio::test]
async fn test_insert_and_find_all_columns() {
    let db = TestDatabase::new().await;
    let dao = SqliteEmployeeDao::new(db.pool());

    let fuller = dao.insert(&employee("Andrew", "Fuller")).await.unwrap();

    let mut davolio = EmployeeTransferObject {
        last_name: "Davolio".to_string(),
        first_name: "Nancy".to_string(),
        title: Some("Sales Representative".to_string()),
        title_of_courtesy: Some("Ms.".to_string()),
        birth_date: NaiveDate::from_ymd_opt(1948, 12, 8).and_then(|d| d.and_hms_opt(0, 0, 0)),
        hire_date: NaiveDate::from_ymd_opt(1992, 5, 1).and_then(|d| d.and_hms_opt(0, 0, 0)),
        address: Some("507 - 20th Ave. E. Apt. 2A".to_string()),
        city: Some("Seattle".to_string()),
        region: Some("WA".to_string()),
        postal_code: Some("98122".to_string()),
        country: Some("USA".to_string()),
        home_phone: Some("(206) 555-9857".to_string()),
        extension: Some("5467".to_string()),
        photo: Some(vec![7u8; 100]),
        notes: Some("Education includes a BA in psychology.".to_string()),
        reports_to: Some(fuller),
        photo_path: Some("http://accweb/emmployees/davolio.bmp".to_string()),
        ..EmployeeTransferObject::default()
    };

    let id = dao.insert(&davolio).await.unwrap();
    davolio.id = id;
    assert_eq!(dao.find(id).await.unwrap(), davolio);
}

#[tokio::test]
async fn test_select_window() {
    let db = TestDatabase::new().await;
    let dao = SqliteEmployeeDao::new(db.pool());

    for (first, last) in [("Nancy", "Davolio"), ("Andrew", "Fuller"), ("Janet", "Leverling")] {
        dao.insert(&employee(first, last)).await.unwrap();
    }

    let page: Vec<_> = dao.select(1, 5).unwrap().try_collect().await.unwrap();
    let names: Vec<&str> = page.iter().map(|e| e.last_name.as_str()).collect();
    assert_eq!(names, vec!["Fuller", "Leverling"]);

    assert!(matches!(dao.select(-3, 5), Err(NorthwindError::InvalidArgument(_))));
}

#[tokio::test]
async fn test_update_and_delete() {
    let db = TestDatabase::new().await;
    let dao = SqliteEmployeeDao::new(db.pool());

    let id = dao.insert(&employee("Janet", "Leverling")).await.unwrap();
    let mut janet = dao.find(id).await.unwrap();
    janet.title = Some("Sales Representative".to_string());
    janet.photo = None;

    assert!(dao.update(&janet).await.unwrap());
    assert_eq!(dao.find(id).await.unwrap(), janet);

    assert!(dao.delete(id).await.unwrap());
    assert!(matches!(dao.find(id).await, Err(NorthwindError::NotFound { .. })));
    assert!(!dao.update(&janet).await.unwrap());
}

#[tokio::test]
async fn test_invalid_ids() {
    let db = TestDatabase::new().await;
    let dao = SqliteEmployeeDao::new(db.pool());

    assert!(matches!(dao.find(0).await, Err(NorthwindError::InvalidArgument(_))));
    assert!(matches!(dao.delete(0).await, Err(NorthwindError::InvalidArgument(_))));
    assert!(matches!(
        dao.update(&employee("No", "Id")).await,
        Err(NorthwindError::InvalidArgument(_))
    ));
}
