use sea_orm::{QueryFilter, QueryOrder, Set, TransactionTrait, prelude::*};

use crate::{
    CreditCard, CreditCardCmd, CreditCardCurrency, EngineError, ResultEngine,
    credit_card_currencies, credit_cards,
};

use super::{
    Engine,
    currency_links::CurrencySet,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
    with_tx,
};

const RULES: WriteRules = WriteRules {
    label: "credit card",
    duplicate: Some(("duplicate_credit_card", "credit card number must be unique")),
    dangling: "bank and person must exist",
    in_use: ("credit_card_in_use", "credit card is in use"),
};

impl Engine {
    /// Return every credit card with its currencies, ordered by id.
    ///
    /// Cards and links are read in one joined query; a card without links
    /// has an empty `currency_ids`.
    pub async fn list_credit_cards(&self) -> ResultEngine<Vec<CreditCard>> {
        let rows = credit_cards::Entity::find()
            .find_with_related(credit_card_currencies::Entity)
            .order_by_asc(credit_cards::Column::Id)
            .order_by_asc(credit_card_currencies::Column::CurrencyId)
            .all(&self.database)
            .await?;
        Ok(rows
            .into_iter()
            .map(|(card, links)| CreditCard::from_model(card, links))
            .collect())
    }

    pub async fn credit_card(&self, id: i64) -> ResultEngine<CreditCard> {
        let row = credit_cards::Entity::find_by_id(id)
            .find_with_related(credit_card_currencies::Entity)
            .order_by_asc(credit_card_currencies::Column::CurrencyId)
            .all(&self.database)
            .await?
            .into_iter()
            .next();
        let (card, links) = RULES.found(row)?;
        Ok(CreditCard::from_model(card, links))
    }

    /// Add a credit card and link its currencies in one transaction.
    pub async fn create_credit_card(&self, cmd: CreditCardCmd) -> ResultEngine<CreditCard> {
        let cmd = cmd.normalize()?;
        let currencies = CurrencySet::parse(&cmd.currency_ids)?;
        let id = with_tx!(self, |db_tx| {
            require_all(
                &db_tx,
                &[Reference::Bank(cmd.bank_id), Reference::Person(cmd.person_id)],
            )
            .await?;
            let currencies = currencies.resolve(&db_tx).await?;
            let model = credit_cards::ActiveModel {
                bank_id: Set(cmd.bank_id),
                person_id: Set(cmd.person_id),
                number: Set(cmd.number),
                name: Set(cmd.name),
                ..Default::default()
            };
            let card = RULES.written(model.insert(&db_tx).await)?;
            currencies.replace(&db_tx, card.id).await?;
            Ok::<_, EngineError>(card.id)
        })?;
        self.credit_card(id).await
    }

    /// Replace every field of a credit card, currency set included.
    pub async fn update_credit_card(
        &self,
        id: i64,
        cmd: CreditCardCmd,
    ) -> ResultEngine<CreditCard> {
        let cmd = cmd.normalize()?;
        let currencies = CurrencySet::parse(&cmd.currency_ids)?;
        with_tx!(self, |db_tx| {
            require_all(
                &db_tx,
                &[Reference::Bank(cmd.bank_id), Reference::Person(cmd.person_id)],
            )
            .await?;
            let currencies = currencies.resolve(&db_tx).await?;
            let model = credit_cards::ActiveModel {
                id: Set(id),
                bank_id: Set(cmd.bank_id),
                person_id: Set(cmd.person_id),
                number: Set(cmd.number),
                name: Set(cmd.name),
            };
            RULES.updated(model.update(&db_tx).await)?;
            currencies.replace(&db_tx, id).await?;
            Ok::<_, EngineError>(())
        })?;
        self.credit_card(id).await
    }

    /// Delete a credit card; its currency links go with it.
    pub async fn delete_credit_card(&self, id: i64) -> ResultEngine<()> {
        delete_row::<credit_cards::Entity, _>(&self.database, &RULES, id).await
    }

    /// Return the currency links of a card, ordered by currency id.
    pub async fn credit_card_currencies(
        &self,
        credit_card_id: i64,
    ) -> ResultEngine<Vec<CreditCardCurrency>> {
        find_row::<credit_cards::Entity, _>(&self.database, &RULES, credit_card_id).await?;
        let links = credit_card_currencies::Entity::find()
            .filter(credit_card_currencies::Column::CreditCardId.eq(credit_card_id))
            .order_by_asc(credit_card_currencies::Column::CurrencyId)
            .all(&self.database)
            .await?;
        Ok(links.into_iter().map(CreditCardCurrency::from).collect())
    }

    /// Make `currency_ids` the exact currency set of a card.
    ///
    /// Repeated ids are linked once. Either every id is linked or, on any
    /// failure, the previous links stay untouched.
    pub async fn replace_credit_card_currencies(
        &self,
        credit_card_id: i64,
        currency_ids: &[i64],
    ) -> ResultEngine<Vec<CreditCardCurrency>> {
        let currencies = CurrencySet::parse(currency_ids)?;
        with_tx!(self, |db_tx| {
            find_row::<credit_cards::Entity, _>(&db_tx, &RULES, credit_card_id).await?;
            let currencies = currencies.resolve(&db_tx).await?;
            currencies.replace(&db_tx, credit_card_id).await?;
            Ok::<_, EngineError>(())
        })?;
        self.credit_card_currencies(credit_card_id).await
    }
}
