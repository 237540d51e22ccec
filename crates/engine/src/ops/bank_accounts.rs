use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{BankAccount, BankAccountCmd, ResultEngine, bank_accounts};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "bank account",
    duplicate: Some((
        "duplicate_bank_account",
        "bank, currency and account number combination must be unique",
    )),
    dangling: "bank and currency must exist",
    in_use: ("bank_account_in_use", "bank account is in use"),
};

impl Engine {
    pub async fn list_bank_accounts(&self) -> ResultEngine<Vec<BankAccount>> {
        let models = bank_accounts::Entity::find()
            .order_by_asc(bank_accounts::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(BankAccount::from).collect())
    }

    pub async fn bank_account(&self, id: i64) -> ResultEngine<BankAccount> {
        find_row::<bank_accounts::Entity, _>(&self.database, &RULES, id)
            .await
            .map(BankAccount::from)
    }

    pub async fn create_bank_account(&self, cmd: BankAccountCmd) -> ResultEngine<BankAccount> {
        let cmd = cmd.normalize()?;
        require_all(
            &self.database,
            &[Reference::Bank(cmd.bank_id), Reference::Currency(cmd.currency_id)],
        )
        .await?;
        let model = bank_accounts::ActiveModel {
            bank_id: Set(cmd.bank_id),
            currency_id: Set(cmd.currency_id),
            account_number: Set(cmd.account_number),
            balance: Set(cmd.balance),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(BankAccount::from)
    }

    pub async fn update_bank_account(
        &self,
        id: i64,
        cmd: BankAccountCmd,
    ) -> ResultEngine<BankAccount> {
        let cmd = cmd.normalize()?;
        require_all(
            &self.database,
            &[Reference::Bank(cmd.bank_id), Reference::Currency(cmd.currency_id)],
        )
        .await?;
        let model = bank_accounts::ActiveModel {
            id: Set(id),
            bank_id: Set(cmd.bank_id),
            currency_id: Set(cmd.currency_id),
            account_number: Set(cmd.account_number),
            balance: Set(cmd.balance),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(BankAccount::from)
    }

    pub async fn delete_bank_account(&self, id: i64) -> ResultEngine<()> {
        delete_row::<bank_accounts::Entity, _>(&self.database, &RULES, id).await
    }
}
