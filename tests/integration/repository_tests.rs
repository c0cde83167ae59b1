//! Database repository tests
//!
//! Runs the SeaORM repository against an in-memory SQLite database.

#[cfg(test)]
mod tests {
    use crate::common::{ItemFactory, TestDatabase};
    use item_service::storage::ItemRepository;
    use item_service::storage::database::DatabaseBackendType;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_database_health_check() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().health_check().await);
        assert_eq!(db.db().backend_type(), DatabaseBackendType::SQLite);
    }

    #[tokio::test]
    async fn test_migration_is_repeatable() {
        let db = TestDatabase::new().await;
        assert_ok!(db.db().migrate().await);
    }

    #[tokio::test]
    async fn test_health_check_fails_without_schema() {
        let db = item_service::storage::database::Database::new(
            &crate::common::database::test_db_config(),
        )
        .await
        .unwrap();
        assert_err!(db.health_check().await);
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let db = TestDatabase::new().await;

        let saved = db.db().save(ItemFactory::create()).await.unwrap();

        assert_eq!(saved.id, Some(1));
        assert_eq!(saved.name, "Widget");
        assert_eq!(saved.description.as_deref(), Some("A test widget"));
    }

    #[tokio::test]
    async fn test_save_with_known_id_updates() {
        let db = TestDatabase::new().await;
        let saved = db.db().save(ItemFactory::create()).await.unwrap();

        let updated = db
            .db()
            .save(saved.clone().with_status("PROCESSED"))
            .await
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(db.db().find_all().await.unwrap().len(), 1);
        let found = db.db().find_by_id(1).await.unwrap().unwrap();
        assert_eq!(found.status, "PROCESSED");
    }

    #[tokio::test]
    async fn test_list_ids_and_find_all_are_ordered() {
        let db = TestDatabase::seeded(4).await;

        assert_eq!(db.db().list_all_ids().await.unwrap(), vec![1, 2, 3, 4]);
        let names: Vec<String> = db
            .db()
            .find_all()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["item-0", "item-1", "item-2", "item-3"]);
    }

    #[tokio::test]
    async fn test_delete() {
        let db = TestDatabase::seeded(2).await;

        assert!(db.db().delete_by_id(1).await.unwrap());
        assert!(!db.db().delete_by_id(1).await.unwrap());
        assert!(db.db().find_by_id(1).await.unwrap().is_none());
        assert_eq!(db.db().list_all_ids().await.unwrap(), vec![2]);
    }
}
