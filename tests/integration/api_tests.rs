//! HTTP API tests
//!
//! Drives the full actix application (routes, JSON config, error mapping).

#[cfg(test)]
mod tests {
    use crate::common::{FlakyRepository, ItemFactory, TestDatabase};
    use actix_web::{http::StatusCode, test, web};
    use item_service::config::Config;
    use item_service::server::{AppState, HttpServer};
    use item_service::storage::{InMemoryItemRepository, ItemRepository, StorageLayer};
    use item_service::utils::error::ErrorResponse;
    use item_service::{AggregateResult, Item};
    use std::sync::Arc;
    use std::time::Duration;

    fn state(repository: Arc<dyn ItemRepository>) -> web::Data<AppState> {
        let mut config = Config::default();
        config.service.processing.delay_ms = 0;
        config.service.processing.pool_size = 4;
        web::Data::new(AppState::new(
            config,
            StorageLayer::with_repository(repository),
        ))
    }

    fn memory_state() -> web::Data<AppState> {
        state(Arc::new(InMemoryItemRepository::new()))
    }

    #[actix_web::test]
    async fn test_create_then_get() {
        let app = test::init_service(HttpServer::create_app(memory_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::payload())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Item = test::read_body_json(resp).await;
        let id = created.id.unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/items/{}", id))
            .to_request();
        let fetched: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(fetched, created);
    }

    #[actix_web::test]
    async fn test_create_invalid_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(memory_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .set_json(ItemFactory::invalid_payload())
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(body.error.code, "VALIDATION_ERROR");
        assert!(body.error.message.contains("Invalid email format"));
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(memory_state())).await;

        let req = test::TestRequest::post()
            .uri("/api/items")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"name\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_missing_item_is_not_found() {
        let app = test::init_service(HttpServer::create_app(memory_state())).await;

        let req = test::TestRequest::get().uri("/api/items/99").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::put()
            .uri("/api/items/99")
            .set_json(ItemFactory::payload())
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );

        let req = test::TestRequest::delete().uri("/api/items/99").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NOT_FOUND
        );
    }

    #[actix_web::test]
    async fn test_non_numeric_id_is_bad_request() {
        let app = test::init_service(HttpServer::create_app(memory_state())).await;

        let req = test::TestRequest::get().uri("/api/items/abc").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[actix_web::test]
    async fn test_update_and_delete() {
        let repo = Arc::new(InMemoryItemRepository::with_items(vec![ItemFactory::create()]));
        let app = test::init_service(HttpServer::create_app(state(repo.clone()))).await;

        let mut payload = ItemFactory::payload();
        payload.name = "Renamed".to_string();
        let req = test::TestRequest::put()
            .uri("/api/items/1")
            .set_json(&payload)
            .to_request();
        let updated: Item = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated.id, Some(1));
        assert_eq!(updated.name, "Renamed");

        let req = test::TestRequest::delete().uri("/api/items/1").to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::NO_CONTENT
        );
        assert!(repo.is_empty());
    }

    #[actix_web::test]
    async fn test_list_items() {
        let repo = Arc::new(InMemoryItemRepository::with_items(vec![
            ItemFactory::create(),
            ItemFactory::processed(),
        ]));
        let app = test::init_service(HttpServer::create_app(state(repo))).await;

        let req = test::TestRequest::get().uri("/api/items").to_request();
        let items: Vec<Item> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(items.len(), 2);
    }

    #[actix_web::test]
    async fn test_process_endpoint_on_sqlite() {
        let db = TestDatabase::seeded(3).await;
        let app = test::init_service(HttpServer::create_app(state(db.repository()))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let result: AggregateResult = test::call_and_read_body_json(&app, req).await;

        assert_eq!(result.processed_ids(), vec![1, 2, 3]);
        assert!(result.skipped.is_empty());
        assert!(result.failed.is_empty());
    }

    #[actix_web::test]
    async fn test_process_endpoint_reports_partial_failure() {
        let db = TestDatabase::seeded(3).await;
        let flaky = Arc::new(FlakyRepository::new(db.repository()));
        flaky.fail_next_save(1);
        let app = test::init_service(HttpServer::create_app(state(flaky))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let result: AggregateResult = test::read_body_json(resp).await;
        assert_eq!(result.failed_ids(), vec![1]);
        assert_eq!(result.processed_ids(), vec![2, 3]);
    }

    #[actix_web::test]
    async fn test_process_endpoint_single_save_failure_is_ok() {
        let db = TestDatabase::seeded(1).await;
        let flaky = Arc::new(FlakyRepository::new(db.repository()));
        flaky.fail_next_save(1);
        let app = test::init_service(HttpServer::create_app(state(flaky))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let result: AggregateResult = test::read_body_json(resp).await;
        assert_eq!(result.failed_ids(), vec![1]);
        assert!(result.processed.is_empty());
    }

    #[actix_web::test]
    async fn test_process_endpoint_systemic_failure() {
        let db = TestDatabase::seeded(2).await;
        let flaky = Arc::new(FlakyRepository::new(db.repository()));
        flaky.set_offline(true);
        let app = test::init_service(HttpServer::create_app(state(flaky))).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_process_endpoint_times_out() {
        let mut config = Config::default();
        config.service.processing.delay_ms = 5_000;
        config.service.processing.batch_timeout_secs = Some(1);
        let repo = Arc::new(InMemoryItemRepository::with_items(vec![ItemFactory::create()]));
        let data = web::Data::new(AppState::new(
            config,
            StorageLayer::with_repository(repo.clone()),
        ));
        let app = test::init_service(HttpServer::create_app(data)).await;

        let req = test::TestRequest::get().uri("/api/items/process").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

        // The abandoned unit never writes
        tokio::time::sleep(Duration::from_millis(50)).await;
        let item = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(item.status, "NEW");
    }
}
