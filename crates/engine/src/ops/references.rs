//! Existence checks for the foreign keys a command carries.

use sea_orm::{ConnectionTrait, EntityTrait, PrimaryKeyTrait};

use crate::{
    EngineError, ResultEngine, bank_accounts, banks, countries, credit_card_cycles, credit_cards,
    currencies, people, transaction_categories,
};

/// A foreign key about to be written, by the kind of row it points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reference<'a> {
    Country(&'a str),
    Currency(i64),
    Bank(i64),
    Person(i64),
    BankAccount(i64),
    CreditCard(i64),
    CreditCardCycle(i64),
    TransactionCategory(i64),
    /// A category referenced as the parent of another one.
    ParentCategory(i64),
}

impl Reference<'_> {
    fn missing(self) -> &'static str {
        match self {
            Self::Country(_) => "country must exist",
            Self::Currency(_) => "currency must exist",
            Self::Bank(_) => "bank must exist",
            Self::Person(_) => "person must exist",
            Self::BankAccount(_) => "bank account must exist",
            Self::CreditCard(_) => "credit card must exist",
            Self::CreditCardCycle(_) => "credit card cycle must exist",
            Self::TransactionCategory(_) => "transaction category must exist",
            Self::ParentCategory(_) => "parent category must exist",
        }
    }
}

async fn probe<E, C, K>(db: &C, key: K) -> ResultEngine<bool>
where
    E: EntityTrait,
    C: ConnectionTrait,
    K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
{
    E::find_by_id(key)
        .one(db)
        .await
        .map(|model| model.is_some())
        .map_err(Into::into)
}

pub(crate) async fn exists<C: ConnectionTrait>(db: &C, reference: Reference<'_>) -> ResultEngine<bool> {
    match reference {
        Reference::Country(code) => probe::<countries::Entity, _, _>(db, code.to_string()).await,
        Reference::Currency(id) => probe::<currencies::Entity, _, _>(db, id).await,
        Reference::Bank(id) => probe::<banks::Entity, _, _>(db, id).await,
        Reference::Person(id) => probe::<people::Entity, _, _>(db, id).await,
        Reference::BankAccount(id) => probe::<bank_accounts::Entity, _, _>(db, id).await,
        Reference::CreditCard(id) => probe::<credit_cards::Entity, _, _>(db, id).await,
        Reference::CreditCardCycle(id) => probe::<credit_card_cycles::Entity, _, _>(db, id).await,
        Reference::TransactionCategory(id) | Reference::ParentCategory(id) => {
            probe::<transaction_categories::Entity, _, _>(db, id).await
        }
    }
}

/// Check references in order, failing on the first one that is missing.
pub(crate) async fn require_all<C: ConnectionTrait>(
    db: &C,
    references: &[Reference<'_>],
) -> ResultEngine<()> {
    for reference in references {
        if !exists(db, *reference).await? {
            return Err(EngineError::invalid(reference.missing()));
        }
    }
    Ok(())
}
