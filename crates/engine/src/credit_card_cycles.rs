//! Billing cycles of a credit card and the balance owed per currency.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreditCardCycle {
    pub id: i64,
    pub credit_card_id: i64,
    pub closing_date: NaiveDate,
    pub due_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_card_cycles")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub credit_card_id: i64,
    pub closing_date: Date,
    pub due_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_cards::Entity",
        from = "Column::CreditCardId",
        to = "super::credit_cards::Column::Id"
    )]
    CreditCard,
    #[sea_orm(has_many = "super::cycle_balances::Entity")]
    Balances,
}

impl Related<super::cycle_balances::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Balances.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CreditCardCycle {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            credit_card_id: model.credit_card_id,
            closing_date: model.closing_date,
            due_date: model.due_date,
        }
    }
}
