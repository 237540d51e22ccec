use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{Currency, CurrencyCmd, ResultEngine, currencies};

use super::{
    Engine,
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "currency",
    duplicate: Some(("duplicate_currency", "name and code must be unique")),
    dangling: "currency must exist",
    in_use: ("currency_in_use", "currency is in use"),
};

impl Engine {
    /// Return every currency, ordered by id.
    pub async fn list_currencies(&self) -> ResultEngine<Vec<Currency>> {
        let models = currencies::Entity::find()
            .order_by_asc(currencies::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Currency::from).collect())
    }

    pub async fn currency(&self, id: i64) -> ResultEngine<Currency> {
        find_row::<currencies::Entity, _>(&self.database, &RULES, id)
            .await
            .map(Currency::from)
    }

    pub async fn create_currency(&self, cmd: CurrencyCmd) -> ResultEngine<Currency> {
        let cmd = cmd.normalize()?;
        let model = currencies::ActiveModel {
            name: Set(cmd.name),
            code: Set(cmd.code),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(Currency::from)
    }

    pub async fn update_currency(&self, id: i64, cmd: CurrencyCmd) -> ResultEngine<Currency> {
        let cmd = cmd.normalize()?;
        let model = currencies::ActiveModel {
            id: Set(id),
            name: Set(cmd.name),
            code: Set(cmd.code),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(Currency::from)
    }

    /// Delete a currency. Storage refuses it while anything is priced in it.
    pub async fn delete_currency(&self, id: i64) -> ResultEngine<()> {
        delete_row::<currencies::Entity, _>(&self.database, &RULES, id).await
    }
}
