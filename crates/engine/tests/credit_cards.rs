use sea_orm::{Database, DatabaseConnection};

use engine::{BankCmd, CreditCardCmd, CurrencyCmd, Engine, EngineError, PersonCmd};
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

struct Fixture {
    bank_id: i64,
    person_id: i64,
    currency_ids: Vec<i64>,
}

async fn fixture(engine: &Engine) -> Fixture {
    let bank = engine.create_bank(BankCmd::new("X", "US")).await.unwrap();
    let person = engine.create_person(PersonCmd::new("Ana")).await.unwrap();
    let mut currency_ids = Vec::new();
    for (name, code) in [("US Dollar", "USD"), ("Euro", "EUR"), ("Peso", "ARS")] {
        let currency = engine
            .create_currency(CurrencyCmd::new(name, code))
            .await
            .unwrap();
        currency_ids.push(currency.id);
    }
    Fixture {
        bank_id: bank.id,
        person_id: person.id,
        currency_ids,
    }
}

fn linked(links: &[engine::CreditCardCurrency]) -> Vec<i64> {
    links.iter().map(|link| link.currency_id).collect()
}

#[tokio::test]
async fn create_deduplicates_and_sorts_currencies() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let (usd, eur) = (fx.currency_ids[0], fx.currency_ids[1]);

    let card = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111")
                .name("  ")
                .currency_ids([eur, usd, eur]),
        )
        .await
        .unwrap();

    assert_eq!(card.currency_ids, vec![usd, eur]);
    assert_eq!(card.name, None);
    assert_eq!(engine.credit_card(card.id).await.unwrap(), card);
}

#[tokio::test]
async fn replacement_leaves_no_residual_links() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let (usd, eur) = (fx.currency_ids[0], fx.currency_ids[1]);

    let card = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([usd, eur, usd]),
        )
        .await
        .unwrap();

    let links = engine
        .replace_credit_card_currencies(card.id, &[eur])
        .await
        .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].credit_card_id, card.id);
    assert_eq!(links[0].currency_id, eur);

    let links = engine.credit_card_currencies(card.id).await.unwrap();
    assert_eq!(linked(&links), vec![eur]);

    // Same input twice yields the same set.
    engine
        .replace_credit_card_currencies(card.id, &[eur])
        .await
        .unwrap();
    assert_eq!(engine.credit_card(card.id).await.unwrap().currency_ids, vec![eur]);
}

#[tokio::test]
async fn failed_replacement_keeps_previous_links() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let (usd, eur) = (fx.currency_ids[0], fx.currency_ids[1]);

    let card = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([usd, eur]),
        )
        .await
        .unwrap();

    let err = engine
        .replace_credit_card_currencies(card.id, &[eur, 999])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("all currencies must exist".to_string())
    );

    let err = engine
        .replace_credit_card_currencies(card.id, &[eur, 0])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("currency_ids must contain only positive integers".to_string())
    );

    let links = engine.credit_card_currencies(card.id).await.unwrap();
    assert_eq!(linked(&links), vec![usd, eur]);
}

#[tokio::test]
async fn replacing_currencies_of_a_missing_card_is_not_found() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;

    let err = engine
        .replace_credit_card_currencies(77, &[fx.currency_ids[0]])
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("credit card not found".to_string())
    );
    assert!(engine.credit_card_currencies(77).await.is_err());
}

#[tokio::test]
async fn create_with_missing_reference_writes_nothing() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;

    let err = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([fx.currency_ids[0], 999]),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("all currencies must exist".to_string())
    );

    let err = engine
        .create_credit_card(CreditCardCmd::new(fx.bank_id, 999, "4111"))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::InvalidPayload("person must exist".to_string())
    );

    assert!(engine.list_credit_cards().await.unwrap().is_empty());
}

#[tokio::test]
async fn listing_aggregates_currencies_per_card() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let (usd, eur, ars) = (fx.currency_ids[0], fx.currency_ids[1], fx.currency_ids[2]);

    let first = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([ars, usd]),
        )
        .await
        .unwrap();
    let bare = engine
        .create_credit_card(CreditCardCmd::new(fx.bank_id, fx.person_id, "5500"))
        .await
        .unwrap();
    let third = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "3400")
                .name("Gold")
                .currency_ids([eur]),
        )
        .await
        .unwrap();

    let cards = engine.list_credit_cards().await.unwrap();
    let ids: Vec<i64> = cards.iter().map(|card| card.id).collect();
    assert_eq!(ids, vec![first.id, bare.id, third.id]);
    assert_eq!(cards[0].currency_ids, vec![usd, ars]);
    assert!(cards[1].currency_ids.is_empty());
    assert_eq!(cards[2].currency_ids, vec![eur]);
    assert_eq!(cards[2].name.as_deref(), Some("Gold"));
}

#[tokio::test]
async fn update_replaces_card_and_currency_set() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let (usd, eur) = (fx.currency_ids[0], fx.currency_ids[1]);

    let card = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([usd]),
        )
        .await
        .unwrap();

    let updated = engine
        .update_credit_card(
            card.id,
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111-9")
                .name("Travel")
                .currency_ids([eur]),
        )
        .await
        .unwrap();
    assert_eq!(updated.number, "4111-9");
    assert_eq!(updated.name.as_deref(), Some("Travel"));
    assert_eq!(updated.currency_ids, vec![eur]);

    let err = engine
        .update_credit_card(
            999,
            CreditCardCmd::new(fx.bank_id, fx.person_id, "1"),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::KeyNotFound("credit card not found".to_string())
    );
}

#[tokio::test]
async fn duplicate_number_is_a_conflict() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;

    engine
        .create_credit_card(CreditCardCmd::new(fx.bank_id, fx.person_id, "4111"))
        .await
        .unwrap();
    let err = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, " 4111 ").currency_ids([fx.currency_ids[0]]),
        )
        .await
        .unwrap_err();
    assert_eq!(
        err,
        EngineError::Conflict {
            code: "duplicate_credit_card",
            message: "credit card number must be unique",
        }
    );
    assert_eq!(engine.list_credit_cards().await.unwrap().len(), 1);
}

#[tokio::test]
async fn deleting_a_card_removes_its_links() {
    let (engine, _db) = engine_with_db().await;
    let fx = fixture(&engine).await;
    let usd = fx.currency_ids[0];

    let card = engine
        .create_credit_card(
            CreditCardCmd::new(fx.bank_id, fx.person_id, "4111").currency_ids([usd]),
        )
        .await
        .unwrap();
    assert_eq!(
        engine.delete_currency(usd).await.unwrap_err().code(),
        "currency_in_use"
    );

    engine.delete_credit_card(card.id).await.unwrap();
    engine.delete_currency(usd).await.unwrap();
}
