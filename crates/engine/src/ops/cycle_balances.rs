//! Balances are addressed through the cycle they belong to: a balance id
//! under the wrong cycle is not found.

use sea_orm::{QueryFilter, QueryOrder, Set, prelude::*};

use crate::{CycleBalance, CycleBalanceCmd, ResultEngine, credit_card_cycles, cycle_balances};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "credit card cycle balance",
    duplicate: Some((
        "duplicate_credit_card_cycle_balance",
        "credit card cycle and currency combination must be unique",
    )),
    dangling: "credit card cycle and currency must exist",
    in_use: (
        "credit_card_cycle_balance_in_use",
        "credit card cycle balance is in use",
    ),
};

const CYCLE_RULES: WriteRules = WriteRules {
    label: "credit card cycle",
    duplicate: None,
    dangling: "credit card cycle must exist",
    in_use: ("credit_card_cycle_in_use", "credit card cycle is in use"),
};

impl Engine {
    /// Return the balances of a cycle, ordered by id.
    pub async fn list_cycle_balances(&self, cycle_id: i64) -> ResultEngine<Vec<CycleBalance>> {
        find_row::<credit_card_cycles::Entity, _>(&self.database, &CYCLE_RULES, cycle_id).await?;
        let models = cycle_balances::Entity::find()
            .filter(cycle_balances::Column::CreditCardCycleId.eq(cycle_id))
            .order_by_asc(cycle_balances::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(CycleBalance::from).collect())
    }

    pub async fn cycle_balance(&self, cycle_id: i64, id: i64) -> ResultEngine<CycleBalance> {
        let model = cycle_balances::Entity::find_by_id(id)
            .filter(cycle_balances::Column::CreditCardCycleId.eq(cycle_id))
            .one(&self.database)
            .await?;
        RULES.found(model).map(CycleBalance::from)
    }

    /// Record the balance of a cycle in one currency. `cmd` must name
    /// `cycle_id` as its cycle.
    pub async fn create_cycle_balance(
        &self,
        cycle_id: i64,
        cmd: CycleBalanceCmd,
    ) -> ResultEngine<CycleBalance> {
        let cmd = cmd.normalize(cycle_id)?;
        require_all(
            &self.database,
            &[
                Reference::CreditCardCycle(cmd.credit_card_cycle_id),
                Reference::Currency(cmd.currency_id),
            ],
        )
        .await?;
        let model = cycle_balances::ActiveModel {
            credit_card_cycle_id: Set(cmd.credit_card_cycle_id),
            currency_id: Set(cmd.currency_id),
            balance: Set(cmd.balance),
            paid: Set(cmd.paid),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(CycleBalance::from)
    }

    pub async fn update_cycle_balance(
        &self,
        cycle_id: i64,
        id: i64,
        cmd: CycleBalanceCmd,
    ) -> ResultEngine<CycleBalance> {
        let cmd = cmd.normalize(cycle_id)?;
        require_all(
            &self.database,
            &[
                Reference::CreditCardCycle(cmd.credit_card_cycle_id),
                Reference::Currency(cmd.currency_id),
            ],
        )
        .await?;
        let model = cycle_balances::ActiveModel {
            currency_id: Set(cmd.currency_id),
            balance: Set(cmd.balance),
            paid: Set(cmd.paid),
            ..Default::default()
        };
        let outcome = RULES.written(
            cycle_balances::Entity::update_many()
                .set(model)
                .filter(cycle_balances::Column::Id.eq(id))
                .filter(cycle_balances::Column::CreditCardCycleId.eq(cycle_id))
                .exec(&self.database)
                .await,
        )?;
        RULES.affected(outcome.rows_affected)?;
        self.cycle_balance(cycle_id, id).await
    }

    pub async fn delete_cycle_balance(&self, cycle_id: i64, id: i64) -> ResultEngine<()> {
        RULES.deleted(
            cycle_balances::Entity::delete_many()
                .filter(cycle_balances::Column::Id.eq(id))
                .filter(cycle_balances::Column::CreditCardCycleId.eq(cycle_id))
                .exec(&self.database)
                .await,
        )
    }
}
