// tests/unit/service_tests.rs

use boilerplate_backend::api::dto::boilerplate_dto::BoilerplatePaginationQuery;
use boilerplate_backend::domain::boilerplate_sort::BoilerplateSort;
use boilerplate_backend::error::AppError;
use boilerplate_backend::service::boilerplate_service::BoilerplateService;
use boilerplate_backend::service::health_service::HealthService;
use boilerplate_backend::types::SortOrder;
use std::sync::Arc;

use crate::common::{db::TestDatabase, test_data};

#[tokio::test]
async fn test_get_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    let result = service.get_boilerplate(1).await;

    assert!(matches!(result, Err(AppError::NotFound(m)) if m == "Boilerplate '1' not found"));
}

#[tokio::test]
async fn test_duplicate_create_is_conflict() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    service
        .create_boilerplate(test_data::create_test_boilerplate("a@x.com"))
        .await
        .unwrap();
    let result = service
        .create_boilerplate(test_data::create_test_boilerplate("a@x.com"))
        .await;

    assert!(matches!(result, Err(AppError::Conflict(m)) if m == "Boilerplate 'a@x.com' already exists"));
}

#[tokio::test]
async fn test_update_to_taken_email_is_conflict() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    service
        .create_boilerplate(test_data::create_test_boilerplate("a@x.com"))
        .await
        .unwrap();
    let second = service
        .create_boilerplate(test_data::create_test_boilerplate("b@x.com"))
        .await
        .unwrap();

    let result = service
        .update_boilerplate(second.id, test_data::update_email("a@x.com"))
        .await;
    assert!(matches!(result, Err(AppError::Conflict(_))));

    // 失敗した更新は何も変えない
    let fetched = service.get_boilerplate(second.id).await.unwrap();
    assert_eq!(fetched, second);
}

#[tokio::test]
async fn test_update_changes_only_given_fields() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    let created = service
        .create_boilerplate(test_data::create_test_boilerplate_with_names(
            "a@x.com",
            Some("first"),
            None,
        ))
        .await
        .unwrap();

    let updated = service
        .update_boilerplate(created.id, test_data::update_first_name("second"))
        .await
        .unwrap();

    assert_eq!(updated.first_name.as_deref(), Some("second"));
    assert_eq!(updated.last_name, None);
    assert_eq!(updated.email, "a@x.com");
    assert!(updated.update_date > created.update_date);
}

#[tokio::test]
async fn test_update_missing_is_not_found() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    let result = service
        .update_boilerplate(3, test_data::update_first_name("x"))
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_returns_whether_row_existed() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    let created = service
        .create_boilerplate(test_data::create_test_boilerplate("a@x.com"))
        .await
        .unwrap();

    assert!(service.delete_boilerplate(created.id).await.unwrap());
    assert!(!service.delete_boilerplate(created.id).await.unwrap());
}

#[tokio::test]
async fn test_list_builds_page_metadata() {
    let db = TestDatabase::new().await;
    let service = BoilerplateService::new(db.connection.clone());

    for email in ["a@x.com", "b@x.com", "c@x.com"] {
        service
            .create_boilerplate(test_data::create_test_boilerplate(email))
            .await
            .unwrap();
    }

    let page = service
        .list_boilerplate(BoilerplatePaginationQuery {
            page: 1,
            size: 2,
            sort: BoilerplateSort::Email,
            order: SortOrder::Desc,
        })
        .await
        .unwrap();

    assert_eq!(page.meta.total, 3);
    assert_eq!(page.meta.pages, 2);
    assert_eq!(
        page.boilerplate
            .iter()
            .map(|b| b.email.as_str())
            .collect::<Vec<_>>(),
        vec!["c@x.com", "b@x.com"]
    );
}

#[tokio::test]
async fn test_health_service_pings_database() {
    let db = TestDatabase::new().await;
    let health = HealthService::new(Arc::new(db.connection.clone()));

    let status = health.check().await;

    assert!(status.api);
    assert!(status.database);
}
