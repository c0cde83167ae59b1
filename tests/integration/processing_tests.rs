//! Batch processing over real storage

#[cfg(test)]
mod tests {
    use crate::common::{FlakyRepository, TestDatabase};
    use item_service::config::ProcessingConfig;
    use item_service::core::models::{STATUS_NEW, STATUS_PROCESSED};
    use item_service::{FailureCause, ItemService, ServiceError};
    use std::sync::Arc;
    use std::time::Duration;

    fn config() -> ProcessingConfig {
        ProcessingConfig::default()
            .with_pool_size(4)
            .with_delay(Duration::from_millis(5))
    }

    #[tokio::test]
    async fn test_process_all_on_sqlite() {
        let db = TestDatabase::seeded(10).await;
        let service = ItemService::new(db.repository(), &config());

        let result = service.process_all().await.unwrap();

        assert_eq!(result.processed.len(), 10);
        assert_eq!(result.total(), 10);
        for item in service.find_all().await.unwrap() {
            assert_eq!(item.status, STATUS_PROCESSED);
        }
    }

    #[tokio::test]
    async fn test_transient_failure_on_first_item() {
        let db = TestDatabase::seeded(3).await;
        let flaky = Arc::new(FlakyRepository::new(db.repository()));
        flaky.fail_next_save(1);
        let service = ItemService::new(flaky.clone(), &config());

        let result = service.process_all().await.unwrap();

        assert_eq!(result.processed_ids(), vec![2, 3]);
        assert_eq!(result.failed_ids(), vec![1]);
        assert_eq!(
            result.failed[0].cause,
            FailureCause::SaveFailed("transient failure saving 1".to_string())
        );
        assert_eq!(
            service.get(1).await.unwrap().status,
            STATUS_NEW,
            "failed item must not be half-written"
        );

        // A second run picks the item up again
        let rerun = service.process_all().await.unwrap();
        assert_eq!(rerun.processed_ids(), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_deleted_between_snapshot_and_work() {
        let db = TestDatabase::seeded(3).await;
        let service = ItemService::new(
            db.repository(),
            &config().with_delay(Duration::from_millis(100)),
        );

        let running = {
            let service = service.clone();
            tokio::spawn(async move { service.process_all().await })
        };
        tokio::time::sleep(Duration::from_millis(20)).await;
        service.delete(2).await.unwrap();

        let result = running.await.unwrap().unwrap();
        assert_eq!(result.processed_ids(), vec![1, 3]);
        assert_eq!(result.skipped, vec![2]);
    }

    #[tokio::test]
    async fn test_repository_offline_is_systemic() {
        let db = TestDatabase::seeded(3).await;
        let flaky = Arc::new(FlakyRepository::new(db.repository()));
        flaky.set_offline(true);
        let service = ItemService::new(flaky, &config());

        let result = service.process_all().await;
        assert!(matches!(result, Err(ServiceError::Storage(_))));
    }

    #[tokio::test]
    async fn test_empty_database() {
        let db = TestDatabase::new().await;
        let service = ItemService::new(db.repository(), &config());

        let result = service.process_all().await.unwrap();
        assert!(result.is_empty());
    }
}
