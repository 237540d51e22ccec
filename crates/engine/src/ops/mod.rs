use sea_orm::DatabaseConnection;

use crate::ResultEngine;

mod bank_accounts;
mod banks;
mod countries;
mod credit_card_cycles;
mod credit_cards;
mod currencies;
mod currency_links;
mod cycle_balances;
mod installments;
mod people;
mod references;
mod rules;
mod subscriptions;
mod transaction_categories;
mod transactions;

pub use references::Reference;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

/// Entry point for every read and write.
///
/// Writes run the same pipeline: normalize the command, check the references
/// it carries, persist, then translate storage failures through the write
/// rules of the table.
#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Tell whether the row a reference points at is stored.
    pub async fn exists(&self, reference: Reference<'_>) -> ResultEngine<bool> {
        references::exists(&self.database, reference).await
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    database: DatabaseConnection,
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        Ok(Engine {
            database: self.database,
        })
    }
}
