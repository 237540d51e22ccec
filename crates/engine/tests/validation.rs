use sea_orm::{Database, DatabaseConnection};

use engine::{
    Bank, BankAccount, BankAccountCmd, BankCmd, Currency, CurrencyCmd, Engine, EngineError,
    Person, PersonCmd, Reference,
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

fn invalid(message: &str) -> EngineError {
    EngineError::InvalidPayload(message.to_string())
}

#[tokio::test]
async fn duplicate_currency_conflicts_without_locking_out_other_keys() {
    let (engine, _db) = engine_with_db().await;

    engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let err = engine
        .create_currency(CurrencyCmd::new("US Dollar", "usd"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict {
            code: "duplicate_currency",
            message: "name and code must be unique",
        }
    );

    // The natural key is the (name, code) pair.
    engine
        .create_currency(CurrencyCmd::new("Dollar", "USD"))
        .await
        .unwrap();
    engine
        .create_currency(CurrencyCmd::new("Euro", "EUR"))
        .await
        .unwrap();
    assert_eq!(engine.list_currencies().await.unwrap().len(), 3);
}

#[tokio::test]
async fn created_rows_read_back_normalized() {
    let (engine, _db) = engine_with_db().await;

    let currency = engine
        .create_currency(CurrencyCmd::new("  Peso ", " ars"))
        .await
        .unwrap();
    assert_eq!(
        engine.currency(currency.id).await.unwrap(),
        Currency {
            id: currency.id,
            name: "Peso".to_string(),
            code: "ARS".to_string(),
        }
    );

    let bank = engine
        .create_bank(BankCmd::new(" Bank X ", "us"))
        .await
        .unwrap();
    assert_eq!(
        engine.bank(bank.id).await.unwrap(),
        Bank {
            id: bank.id,
            name: "Bank X".to_string(),
            country: "US".to_string(),
        }
    );

    let person = engine.create_person(PersonCmd::new(" Ana ")).await.unwrap();
    assert_eq!(
        engine.person(person.id).await.unwrap(),
        Person {
            id: person.id,
            name: "Ana".to_string(),
        }
    );

    let account = engine
        .create_bank_account(BankAccountCmd::new(bank.id, currency.id, " A1 ").balance(-12.5))
        .await
        .unwrap();
    assert_eq!(
        engine.bank_account(account.id).await.unwrap(),
        BankAccount {
            id: account.id,
            bank_id: bank.id,
            currency_id: currency.id,
            account_number: "A1".to_string(),
            balance: -12.5,
        }
    );
}

#[tokio::test]
async fn bank_country_must_be_seeded() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_bank(BankCmd::new("Bank X", "zz"))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("country must exist"));
    assert!(engine.list_banks().await.unwrap().is_empty());

    let err = engine.create_bank(BankCmd::new("", "US")).await.unwrap_err();
    assert_eq!(err, invalid("name is required"));
}

#[tokio::test]
async fn duplicate_bank_is_scoped_to_country() {
    let (engine, _db) = engine_with_db().await;

    engine.create_bank(BankCmd::new("Bank X", "US")).await.unwrap();
    let err = engine
        .create_bank(BankCmd::new("Bank X", "us"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "duplicate_bank");
    engine.create_bank(BankCmd::new("Bank X", "CA")).await.unwrap();
}

#[tokio::test]
async fn duplicate_bank_account_is_a_conflict() {
    let (engine, _db) = engine_with_db().await;

    let usd = engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let bank = engine.create_bank(BankCmd::new("X", "US")).await.unwrap();

    engine
        .create_bank_account(BankAccountCmd::new(bank.id, usd.id, "A1"))
        .await
        .unwrap();
    let err = engine
        .create_bank_account(BankAccountCmd::new(bank.id, usd.id, "A1"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict {
            code: "duplicate_bank_account",
            message: "bank, currency and account number combination must be unique",
        }
    );

    engine
        .create_bank_account(BankAccountCmd::new(bank.id, usd.id, "A2"))
        .await
        .unwrap();
}

#[tokio::test]
async fn bank_account_references_are_checked_before_writing() {
    let (engine, _db) = engine_with_db().await;

    let usd = engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let bank = engine.create_bank(BankCmd::new("X", "US")).await.unwrap();

    for bank_id in [0, -1] {
        let err = engine
            .create_bank_account(BankAccountCmd::new(bank_id, usd.id, "A1"))
            .await
            .unwrap_err();
        assert_eq!(err, invalid("bank_id must be a positive integer"));
    }
    let err = engine
        .create_bank_account(BankAccountCmd::new(999, usd.id, "A1"))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("bank must exist"));

    let err = engine
        .create_bank_account(BankAccountCmd::new(bank.id, 0, "A1"))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("currency_id must be a positive integer"));
    let err = engine
        .create_bank_account(BankAccountCmd::new(bank.id, 999, "A1"))
        .await
        .unwrap_err();
    assert_eq!(err, invalid("currency must exist"));

    assert!(engine.list_bank_accounts().await.unwrap().is_empty());
}

#[tokio::test]
async fn update_replaces_every_field() {
    let (engine, _db) = engine_with_db().await;

    let usd = engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let eur = engine
        .create_currency(CurrencyCmd::new("Euro", "EUR"))
        .await
        .unwrap();
    let bank = engine.create_bank(BankCmd::new("X", "US")).await.unwrap();
    let account = engine
        .create_bank_account(BankAccountCmd::new(bank.id, usd.id, "A1").balance(10.0))
        .await
        .unwrap();

    let updated = engine
        .update_bank_account(account.id, BankAccountCmd::new(bank.id, eur.id, "B7"))
        .await
        .unwrap();
    assert_eq!(updated.currency_id, eur.id);
    assert_eq!(updated.account_number, "B7");
    assert_eq!(updated.balance, 0.0);
    assert_eq!(engine.bank_account(account.id).await.unwrap(), updated);
}

#[tokio::test]
async fn update_into_an_existing_natural_key_conflicts() {
    let (engine, _db) = engine_with_db().await;

    engine
        .create_currency(CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap();
    let eur = engine
        .create_currency(CurrencyCmd::new("Euro", "EUR"))
        .await
        .unwrap();

    let err = engine
        .update_currency(eur.id, CurrencyCmd::new("US Dollar", "USD"))
        .await
        .unwrap_err();
    assert_eq!(err.code(), "duplicate_currency");
    assert_eq!(engine.currency(eur.id).await.unwrap().code, "EUR");
}

#[tokio::test]
async fn missing_rows_are_not_found() {
    let (engine, _db) = engine_with_db().await;

    assert_eq!(
        engine.person(42).await.unwrap_err(),
        EngineError::KeyNotFound("person not found".to_string())
    );
    assert_eq!(
        engine
            .update_person(42, PersonCmd::new("Ana"))
            .await
            .unwrap_err(),
        EngineError::KeyNotFound("person not found".to_string())
    );
    assert_eq!(
        engine.delete_currency(42).await.unwrap_err(),
        EngineError::KeyNotFound("currency not found".to_string())
    );
}

#[tokio::test]
async fn referenced_rows_cannot_be_deleted() {
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

    let err = engine.delete_currency(usd.id).await.unwrap_err();
    assert_eq!(err.code(), "currency_in_use");
    let err = engine.delete_bank(bank.id).await.unwrap_err();
    assert_eq!(err.code(), "bank_in_use");
    assert!(engine.bank_account(account.id).await.is_ok());

    engine.delete_bank_account(account.id).await.unwrap();
    engine.delete_bank(bank.id).await.unwrap();
    engine.delete_currency(usd.id).await.unwrap();
}

#[tokio::test]
async fn exists_probes_each_kind_of_row() {
    let (engine, _db) = engine_with_db().await;

    assert!(engine.exists(Reference::Country("US")).await.unwrap());
    assert!(engine.exists(Reference::Country("CA")).await.unwrap());
    assert!(!engine.exists(Reference::Country("ZZ")).await.unwrap());
    assert!(!engine.exists(Reference::Currency(1)).await.unwrap());

    let person = engine.create_person(PersonCmd::new("Ana")).await.unwrap();
    assert!(engine.exists(Reference::Person(person.id)).await.unwrap());
    assert!(!engine.exists(Reference::Person(person.id + 1)).await.unwrap());
}

#[tokio::test]
async fn countries_are_listed_by_code() {
    let (engine, _db) = engine_with_db().await;

    let countries = engine.list_countries().await.unwrap();
    assert!(countries.windows(2).all(|pair| pair[0].code < pair[1].code));
    assert!(countries.iter().any(|c| c.code == "US"));
}
