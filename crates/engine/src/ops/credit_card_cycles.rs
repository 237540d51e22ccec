use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{CreditCardCycle, CreditCardCycleCmd, ResultEngine, credit_card_cycles};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "credit card cycle",
    duplicate: Some(("duplicate_credit_card_cycle", "credit card cycle already exists")),
    dangling: "credit card must exist",
    in_use: ("credit_card_cycle_in_use", "credit card cycle is in use"),
};

impl Engine {
    pub async fn list_credit_card_cycles(&self) -> ResultEngine<Vec<CreditCardCycle>> {
        let models = credit_card_cycles::Entity::find()
            .order_by_asc(credit_card_cycles::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(CreditCardCycle::from).collect())
    }

    pub async fn credit_card_cycle(&self, id: i64) -> ResultEngine<CreditCardCycle> {
        find_row::<credit_card_cycles::Entity, _>(&self.database, &RULES, id)
            .await
            .map(CreditCardCycle::from)
    }

    /// Open a billing cycle. The due date may not precede the closing date.
    pub async fn create_credit_card_cycle(
        &self,
        cmd: CreditCardCycleCmd,
    ) -> ResultEngine<CreditCardCycle> {
        let fields = cmd.normalize()?;
        require_all(
            &self.database,
            &[Reference::CreditCard(fields.credit_card_id)],
        )
        .await?;
        let model = credit_card_cycles::ActiveModel {
            credit_card_id: Set(fields.credit_card_id),
            closing_date: Set(fields.closing_date),
            due_date: Set(fields.due_date),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(CreditCardCycle::from)
    }

    pub async fn update_credit_card_cycle(
        &self,
        id: i64,
        cmd: CreditCardCycleCmd,
    ) -> ResultEngine<CreditCardCycle> {
        let fields = cmd.normalize()?;
        require_all(
            &self.database,
            &[Reference::CreditCard(fields.credit_card_id)],
        )
        .await?;
        let model = credit_card_cycles::ActiveModel {
            id: Set(id),
            credit_card_id: Set(fields.credit_card_id),
            closing_date: Set(fields.closing_date),
            due_date: Set(fields.due_date),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(CreditCardCycle::from)
    }

    /// Delete a cycle. Storage refuses it while balances are recorded on it.
    pub async fn delete_credit_card_cycle(&self, id: i64) -> ResultEngine<()> {
        delete_row::<credit_card_cycles::Entity, _>(&self.database, &RULES, id).await
    }
}
