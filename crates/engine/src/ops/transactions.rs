use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{ResultEngine, Transaction, TransactionCmd, commands::TransactionFields, transactions};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

// Transactions have no natural key.
const RULES: WriteRules = WriteRules {
    label: "transaction",
    duplicate: None,
    dangling: "person, bank account and transaction category must exist",
    in_use: ("transaction_in_use", "transaction is in use"),
};

fn references(fields: &TransactionFields) -> [Reference<'static>; 3] {
    [
        Reference::Person(fields.person_id),
        Reference::BankAccount(fields.bank_account_id),
        Reference::TransactionCategory(fields.category_id),
    ]
}

impl Engine {
    pub async fn list_transactions(&self) -> ResultEngine<Vec<Transaction>> {
        transactions::Entity::find()
            .order_by_asc(transactions::Column::Id)
            .all(&self.database)
            .await?
            .into_iter()
            .map(Transaction::try_from)
            .collect()
    }

    pub async fn transaction(&self, id: i64) -> ResultEngine<Transaction> {
        find_row::<transactions::Entity, _>(&self.database, &RULES, id)
            .await
            .and_then(Transaction::try_from)
    }

    /// Record an income or an expense.
    ///
    /// The person, the bank account and the category must all exist; the
    /// first missing one is reported.
    pub async fn create_transaction(&self, cmd: TransactionCmd) -> ResultEngine<Transaction> {
        let fields = cmd.normalize()?;
        require_all(&self.database, &references(&fields)).await?;
        let model = transactions::ActiveModel {
            transaction_date: Set(fields.transaction_date),
            kind: Set(fields.kind.as_str().to_string()),
            amount: Set(fields.amount),
            notes: Set(fields.notes),
            person_id: Set(fields.person_id),
            bank_account_id: Set(fields.bank_account_id),
            category_id: Set(fields.category_id),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .and_then(Transaction::try_from)
    }

    pub async fn update_transaction(
        &self,
        id: i64,
        cmd: TransactionCmd,
    ) -> ResultEngine<Transaction> {
        let fields = cmd.normalize()?;
        require_all(&self.database, &references(&fields)).await?;
        let model = transactions::ActiveModel {
            id: Set(id),
            transaction_date: Set(fields.transaction_date),
            kind: Set(fields.kind.as_str().to_string()),
            amount: Set(fields.amount),
            notes: Set(fields.notes),
            person_id: Set(fields.person_id),
            bank_account_id: Set(fields.bank_account_id),
            category_id: Set(fields.category_id),
        };
        RULES
            .updated(model.update(&self.database).await)
            .and_then(Transaction::try_from)
    }

    pub async fn delete_transaction(&self, id: i64) -> ResultEngine<()> {
        delete_row::<transactions::Entity, _>(&self.database, &RULES, id).await
    }
}
