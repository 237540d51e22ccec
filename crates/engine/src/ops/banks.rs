use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{Bank, BankCmd, ResultEngine, banks};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "bank",
    duplicate: Some(("duplicate_bank", "name and country combination must be unique")),
    dangling: "country must exist",
    in_use: ("bank_in_use", "bank is in use"),
};

impl Engine {
    /// Return every bank, ordered by id.
    pub async fn list_banks(&self) -> ResultEngine<Vec<Bank>> {
        let models = banks::Entity::find()
            .order_by_asc(banks::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Bank::from).collect())
    }

    pub async fn bank(&self, id: i64) -> ResultEngine<Bank> {
        find_row::<banks::Entity, _>(&self.database, &RULES, id)
            .await
            .map(Bank::from)
    }

    /// Add a bank. The country code is upper-cased and must be one of the
    /// seeded countries.
    pub async fn create_bank(&self, cmd: BankCmd) -> ResultEngine<Bank> {
        let cmd = cmd.normalize()?;
        require_all(&self.database, &[Reference::Country(&cmd.country)]).await?;
        let model = banks::ActiveModel {
            name: Set(cmd.name),
            country: Set(cmd.country),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(Bank::from)
    }

    pub async fn update_bank(&self, id: i64, cmd: BankCmd) -> ResultEngine<Bank> {
        let cmd = cmd.normalize()?;
        require_all(&self.database, &[Reference::Country(&cmd.country)]).await?;
        let model = banks::ActiveModel {
            id: Set(id),
            name: Set(cmd.name),
            country: Set(cmd.country),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(Bank::from)
    }

    pub async fn delete_bank(&self, id: i64) -> ResultEngine<()> {
        delete_row::<banks::Entity, _>(&self.database, &RULES, id).await
    }
}
