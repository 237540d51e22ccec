//! Wholesale replacement of the currencies linked to a credit card.
//!
//! The incoming id list is the new ground truth. It goes through two steps
//! before anything is written: [`CurrencySet::parse`] drops repeats and
//! rejects ids that cannot exist, [`CurrencySet::resolve`] checks every id
//! against storage. Only a [`ResolvedCurrencySet`] can replace links, and only
//! inside a transaction, so a failure leaves the previous set in place.

use std::collections::HashSet;

use sea_orm::{DatabaseTransaction, QueryFilter, Set, prelude::*};

use crate::{EngineError, ResultEngine, credit_card_currencies};

use super::{
    references::{Reference, exists},
    rules::WriteRules,
};

const RULES: WriteRules = WriteRules {
    label: "credit card currency",
    duplicate: Some((
        "duplicate_credit_card_currency",
        "credit card and currency combination must be unique",
    )),
    dangling: "all currencies must exist",
    in_use: ("credit_card_currency_in_use", "credit card currency is in use"),
};

/// Currency ids in first-seen order, without repeats.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct CurrencySet(Vec<i64>);

/// A [`CurrencySet`] whose ids all name stored currencies.
#[derive(Debug)]
pub(crate) struct ResolvedCurrencySet(Vec<i64>);

impl CurrencySet {
    pub(crate) fn parse(ids: &[i64]) -> ResultEngine<Self> {
        let mut seen = HashSet::with_capacity(ids.len());
        let mut ordered = Vec::with_capacity(ids.len());
        for &id in ids {
            if id <= 0 {
                return Err(EngineError::invalid(
                    "currency_ids must contain only positive integers",
                ));
            }
            if seen.insert(id) {
                ordered.push(id);
            }
        }
        Ok(Self(ordered))
    }

    pub(crate) async fn resolve<C: ConnectionTrait>(
        self,
        db: &C,
    ) -> ResultEngine<ResolvedCurrencySet> {
        for &id in &self.0 {
            if !exists(db, Reference::Currency(id)).await? {
                return Err(EngineError::invalid("all currencies must exist"));
            }
        }
        Ok(ResolvedCurrencySet(self.0))
    }
}

impl ResolvedCurrencySet {
    /// Drop every link of `credit_card_id` and write one per id.
    pub(crate) async fn replace(
        self,
        db_tx: &DatabaseTransaction,
        credit_card_id: i64,
    ) -> ResultEngine<()> {
        let removed = credit_card_currencies::Entity::delete_many()
            .filter(credit_card_currencies::Column::CreditCardId.eq(credit_card_id))
            .exec(db_tx)
            .await?;

        if !self.0.is_empty() {
            let links = self
                .0
                .iter()
                .map(|&currency_id| credit_card_currencies::ActiveModel {
                    credit_card_id: Set(credit_card_id),
                    currency_id: Set(currency_id),
                    ..Default::default()
                });
            RULES.written(
                credit_card_currencies::Entity::insert_many(links)
                    .exec(db_tx)
                    .await,
            )?;
        }

        tracing::debug!(
            "credit card {credit_card_id}: replaced {} currency links with {:?}",
            removed.rows_affected,
            self.0
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_keeps_first_occurrence() {
        assert_eq!(
            CurrencySet::parse(&[3, 1, 3, 2, 1]).unwrap(),
            CurrencySet(vec![3, 1, 2])
        );
    }

    #[test]
    fn parse_accepts_empty_list() {
        assert_eq!(CurrencySet::parse(&[]).unwrap(), CurrencySet(vec![]));
    }

    #[test]
    fn parse_rejects_non_positive_ids() {
        assert_eq!(
            CurrencySet::parse(&[1, 0]).unwrap_err(),
            EngineError::InvalidPayload(
                "currency_ids must contain only positive integers".to_string()
            )
        );
        assert!(CurrencySet::parse(&[-2]).is_err());
    }
}
