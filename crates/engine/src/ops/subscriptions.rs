use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{ResultEngine, Subscription, SubscriptionCmd, subscriptions};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row, find_row},
};

const RULES: WriteRules = WriteRules {
    label: "credit card subscription",
    duplicate: Some((
        "duplicate_credit_card_subscription",
        "credit card, currency and concept combination must be unique",
    )),
    dangling: "credit card and currency must exist",
    in_use: (
        "credit_card_subscription_in_use",
        "credit card subscription is in use",
    ),
};

impl Engine {
    pub async fn list_subscriptions(&self) -> ResultEngine<Vec<Subscription>> {
        let models = subscriptions::Entity::find()
            .order_by_asc(subscriptions::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Subscription::from).collect())
    }

    pub async fn subscription(&self, id: i64) -> ResultEngine<Subscription> {
        find_row::<subscriptions::Entity, _>(&self.database, &RULES, id)
            .await
            .map(Subscription::from)
    }

    pub async fn create_subscription(&self, cmd: SubscriptionCmd) -> ResultEngine<Subscription> {
        let cmd = cmd.normalize()?;
        require_all(
            &self.database,
            &[
                Reference::CreditCard(cmd.credit_card_id),
                Reference::Currency(cmd.currency_id),
            ],
        )
        .await?;
        let model = subscriptions::ActiveModel {
            credit_card_id: Set(cmd.credit_card_id),
            currency_id: Set(cmd.currency_id),
            concept: Set(cmd.concept),
            amount: Set(cmd.amount),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(Subscription::from)
    }

    pub async fn update_subscription(
        &self,
        id: i64,
        cmd: SubscriptionCmd,
    ) -> ResultEngine<Subscription> {
        let cmd = cmd.normalize()?;
        require_all(
            &self.database,
            &[
                Reference::CreditCard(cmd.credit_card_id),
                Reference::Currency(cmd.currency_id),
            ],
        )
        .await?;
        let model = subscriptions::ActiveModel {
            id: Set(id),
            credit_card_id: Set(cmd.credit_card_id),
            currency_id: Set(cmd.currency_id),
            concept: Set(cmd.concept),
            amount: Set(cmd.amount),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(Subscription::from)
    }

    pub async fn delete_subscription(&self, id: i64) -> ResultEngine<()> {
        delete_row::<subscriptions::Entity, _>(&self.database, &RULES, id).await
    }
}
