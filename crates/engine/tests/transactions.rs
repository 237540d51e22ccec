use chrono::NaiveDate;
use sea_orm::{Database, DatabaseConnection};

use engine::{
    BankAccountCmd, BankCmd, CurrencyCmd, Engine, EngineError, PersonCmd, Transaction,
    TransactionCategoryCmd, TransactionCmd, TransactionType,
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

/// Person, bank account and category ids.
async fn references(engine: &Engine) -> (i64, i64, i64) {
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
    let category = engine
        .create_transaction_category(TransactionCategoryCmd::new("Salary"))
        .await
        .unwrap();
    (person.id, account.id, category.id)
}

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidPayload(message.to_string())
}

#[tokio::test]
async fn transaction_round_trips() {
    let (engine, _db) = engine_with_db().await;
    let (person, account, category) = references(&engine).await;

    let created = engine
        .create_transaction(
            TransactionCmd::new("2026-02-28", " INCOME ", 2500.0, person, account, category)
                .notes("  february  "),
        )
        .await
        .unwrap();

    assert_eq!(
        engine.transaction(created.id).await.unwrap(),
        Transaction {
            id: created.id,
            transaction_date: NaiveDate::from_ymd_opt(2026, 2, 28).unwrap(),
            kind: TransactionType::Income,
            amount: 2500.0,
            notes: Some("february".to_string()),
            person_id: person,
            bank_account_id: account,
            category_id: category,
        }
    );
}

#[tokio::test]
async fn every_reference_must_exist() {
    let (engine, _db) = engine_with_db().await;
    let (person, account, category) = references(&engine).await;

    let cases = [
        ((999, account, category), "person must exist"),
        ((person, 999, category), "bank account must exist"),
        ((person, account, 999), "transaction category must exist"),
        ((0, account, category), "person_id must be a positive integer"),
        ((person, -3, category), "bank_account_id must be a positive integer"),
        ((person, account, 0), "category_id must be a positive integer"),
    ];
    for ((person_id, bank_account_id, category_id), message) in cases {
        let err = engine
            .create_transaction(TransactionCmd::new(
                "2026-02-28",
                "expense",
                10.0,
                person_id,
                bank_account_id,
                category_id,
            ))
            .await
            .unwrap_err();
        assert_eq!(err, invalid(message));
    }
    assert!(engine.list_transactions().await.unwrap().is_empty());
}

#[tokio::test]
async fn type_and_amount_are_validated() {
    let (engine, _db) = engine_with_db().await;
    let (person, account, category) = references(&engine).await;

    let err = engine
        .create_transaction(TransactionCmd::new(
            "2026-02-28",
            "refund",
            10.0,
            person,
            account,
            category,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("type must be either income or expense"));

    let err = engine
        .create_transaction(TransactionCmd::new(
            "2026-02-28",
            "expense",
            -1.0,
            person,
            account,
            category,
        ))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("amount must be greater than zero"));

    let err = engine
        .create_transaction(TransactionCmd::new(
            "28/02/2026",
            "expense",
            1.0,
            person,
            account,
            category,
        ))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        invalid("transaction_date must be a valid date in YYYY-MM-DD format")
    );
}

#[tokio::test]
async fn update_and_delete() {
    let (engine, _db) = engine_with_db().await;
    let (person, account, category) = references(&engine).await;

    let created = engine
        .create_transaction(
            TransactionCmd::new("2026-02-28", "income", 10.0, person, account, category)
                .notes("tip"),
        )
        .await
        .unwrap();
    let updated = engine
        .update_transaction(
            created.id,
            TransactionCmd::new("2026-03-01", "expense", 4.5, person, account, category),
        )
        .await
        .unwrap();
    assert_eq!(updated.kind, TransactionType::Expense);
    assert_eq!(updated.notes, None);
    assert_eq!(engine.list_transactions().await.unwrap(), vec![updated]);

    // The account is in use while a transaction points at it.
    assert_eq!(
        engine.delete_bank_account(account).await.unwrap_err().code(),
        "bank_account_in_use"
    );

    engine.delete_transaction(created.id).await.unwrap();
    assert_eq!(
        engine.delete_transaction(created.id).await.unwrap_err(),
        EngineError::KeyNotFound("transaction not found".to_string())
    );
}
