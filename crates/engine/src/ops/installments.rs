use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{Installment, InstallmentCmd, ResultEngine, installments};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "credit card installment",
    duplicate: Some((
        "duplicate_credit_card_installment",
        "credit card and concept combination must be unique",
    )),
    dangling: "credit card and currency must exist",
    in_use: (
        "credit_card_installment_in_use",
        "credit card installment is in use",
    ),
};

impl Engine {
    pub async fn list_installments(&self) -> ResultEngine<Vec<Installment>> {
        let models = installments::Entity::find()
            .order_by_asc(installments::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Installment::from).collect())
    }

    pub async fn installment(&self, id: i64) -> ResultEngine<Installment> {
        find_row::<installments::Entity, _>(&self.database, &RULES, id)
            .await
            .map(Installment::from)
    }

    pub async fn create_installment(&self, cmd: InstallmentCmd) -> ResultEngine<Installment> {
        let fields = cmd.normalize()?;
        require_all(
            &self.database,
            &[
                Reference::CreditCard(fields.credit_card_id),
                Reference::Currency(fields.currency_id),
            ],
        )
        .await?;
        let model = installments::ActiveModel {
            credit_card_id: Set(fields.credit_card_id),
            currency_id: Set(fields.currency_id),
            concept: Set(fields.concept),
            amount: Set(fields.amount),
            start_date: Set(fields.start_date),
            count: Set(fields.count),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(Installment::from)
    }

    pub async fn update_installment(
        &self,
        id: i64,
        cmd: InstallmentCmd,
    ) -> ResultEngine<Installment> {
        let fields = cmd.normalize()?;
        require_all(
            &self.database,
            &[
                Reference::CreditCard(fields.credit_card_id),
                Reference::Currency(fields.currency_id),
            ],
        )
        .await?;
        let model = installments::ActiveModel {
            id: Set(id),
            credit_card_id: Set(fields.credit_card_id),
            currency_id: Set(fields.currency_id),
            concept: Set(fields.concept),
            amount: Set(fields.amount),
            start_date: Set(fields.start_date),
            count: Set(fields.count),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(Installment::from)
    }

    pub async fn delete_installment(&self, id: i64) -> ResultEngine<()> {
        delete_row::<installments::Entity, _>(&self.database, &RULES, id).await
    }
}
