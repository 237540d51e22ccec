use sea_orm::{Database, DatabaseConnection};

use engine::{
    BankAccountCmd, BankCmd, CurrencyCmd, Engine, EngineError, PersonCmd, TransactionCategory,
    TransactionCategoryCmd, TransactionCmd,
};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let engine = Engine::builder()
        .database(db.clone())
        .build()
        .await
        .unwrap();
    (engine, db)
}

fn in_use() -> EngineError {
    EngineError::Conflict {
        code: "category_in_use",
        message: "transaction category is in use",
    }
}

#[tokio::test]
async fn parent_with_children_cannot_be_deleted() {
    let (engine, _db) = engine_with_db().await;

    let salary = engine
        .create_transaction_category(TransactionCategoryCmd::new("Salary"))
        .await
        .unwrap();
    let job = engine
        .create_transaction_category(TransactionCategoryCmd::new("Job 1").parent(salary.id))
        .await
        .unwrap();

    assert_eq!(
        engine.delete_transaction_category(salary.id).await.unwrap_err(),
        in_use()
    );
    engine.delete_transaction_category(job.id).await.unwrap();
    engine.delete_transaction_category(salary.id).await.unwrap();
    assert!(engine.list_transaction_categories().await.unwrap().is_empty());
}

#[tokio::test]
async fn category_cannot_be_its_own_parent() {
    let (engine, _db) = engine_with_db().await;

    let food = engine
        .create_transaction_category(TransactionCategoryCmd::new("Food"))
        .await
        .unwrap();
    let err = engine
        .update_transaction_category(food.id, TransactionCategoryCmd::new("Food").parent(food.id))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("category cannot be its own parent".to_string())
    );
}

#[tokio::test]
async fn category_cannot_move_under_a_descendant() {
    let (engine, _db) = engine_with_db().await;

    let a = engine
        .create_transaction_category(TransactionCategoryCmd::new("A"))
        .await
        .unwrap();
    let b = engine
        .create_transaction_category(TransactionCategoryCmd::new("B").parent(a.id))
        .await
        .unwrap();
    let c = engine
        .create_transaction_category(TransactionCategoryCmd::new("C").parent(b.id))
        .await
        .unwrap();

    let err = engine
        .update_transaction_category(a.id, TransactionCategoryCmd::new("A").parent(c.id))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload(
            "category cannot be moved under one of its descendants".to_string()
        )
    );
    assert_eq!(engine.transaction_category(a.id).await.unwrap().parent_id, None);

    // Re-parenting a leaf to an ancestor is fine.
    engine
        .update_transaction_category(c.id, TransactionCategoryCmd::new("C").parent(a.id))
        .await
        .unwrap();
}

#[tokio::test]
async fn names_are_unique_under_the_same_parent() {
    let (engine, _db) = engine_with_db().await;

    let home = engine
        .create_transaction_category(TransactionCategoryCmd::new("Home"))
        .await
        .unwrap();
    let work = engine
        .create_transaction_category(TransactionCategoryCmd::new("Work"))
        .await
        .unwrap();
    engine
        .create_transaction_category(TransactionCategoryCmd::new("Food").parent(home.id))
        .await
        .unwrap();

    let err = engine
        .create_transaction_category(TransactionCategoryCmd::new(" Food ").parent(home.id))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "duplicate_transaction_category");

    engine
        .create_transaction_category(TransactionCategoryCmd::new("Food").parent(work.id))
        .await
        .unwrap();

    let err = engine
        .create_transaction_category(TransactionCategoryCmd::new("Home"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "duplicate_transaction_category");
}

#[tokio::test]
async fn reads_include_the_parent_name() {
    let (engine, _db) = engine_with_db().await;

    let salary = engine
        .create_transaction_category(TransactionCategoryCmd::new("Salary"))
        .await
        .unwrap();
    let job = engine
        .create_transaction_category(TransactionCategoryCmd::new("Job 1").parent(salary.id))
        .await
        .unwrap();

    assert_eq!(
        job,
        TransactionCategory {
            id: job.id,
            name: "Job 1".to_string(),
            parent_id: Some(salary.id),
            parent_name: Some("Salary".to_string()),
        }
    );
    let all = engine.list_transaction_categories().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].parent_name, None);
    assert_eq!(all[1], job);
}

#[tokio::test]
async fn parent_must_exist() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_transaction_category(TransactionCategoryCmd::new("Orphan").parent(12))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("parent category must exist".to_string())
    );
}

#[tokio::test]
async fn category_used_by_transactions_cannot_be_deleted() {
    let (engine, _db) = engine_with_db().await;

    let usd = engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let bank = engine.create_bank(BankCmd::new("X", "US")).await.unwrap();
    let account = engine
        .create_bank_account(BankAccountCmd::new(bank.id, usd.id, "A1"))
        .await
        .unwrap();
    let person = engine.create_person(PersonCmd::new("Ana")).await.unwrap();
    let food = engine
        .create_transaction_category(TransactionCategoryCmd::new("Food"))
        .await
        .unwrap();
    engine
        .create_transaction(TransactionCmd::new(
            "2026-02-01",
            "expense",
            20.0,
            person.id,
            account.id,
            food.id,
        ))
        .await
        .unwrap();

    assert_eq!(
        engine.delete_transaction_category(food.id).await.unwrap_err(),
        in_use()
    );
    assert_eq!(
        engine.delete_transaction_category(999).await.unwrap_err(),
        EngineError::KeyNotFound("transaction category not found".to_string())
    );
}
