//! Link rows between a credit card and a currency.
//!
//! The set for a card is only ever replaced as a whole, see
//! [`Engine::replace_credit_card_currencies`](crate::Engine::replace_credit_card_currencies).

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreditCardCurrency {
    pub id: i64,
    pub credit_card_id: i64,
    pub currency_id: i64,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_card_currencies")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub credit_card_id: i64,
    pub currency_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_cards::Entity",
        from = "Column::CreditCardId",
        to = "super::credit_cards::Column::Id",
        on_update = "NoAction",
        on_delete = "Cascade"
    )]
    CreditCard,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyId",
        to = "super::currencies::Column::Id"
    )]
    Currency,
}

impl Related<super::credit_cards::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CreditCard.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CreditCardCurrency {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            credit_card_id: model.credit_card_id,
            currency_id: model.currency_id,
        }
    }
}
