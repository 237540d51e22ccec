//! Purchases paid off in a fixed number of installments.

use chrono::NaiveDate;
use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Installment {
    pub id: i64,
    pub credit_card_id: i64,
    pub currency_id: i64,
    pub concept: String,
    pub amount: f64,
    pub start_date: NaiveDate,
    pub count: i64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_card_installments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub credit_card_id: i64,
    pub currency_id: i64,
    pub concept: String,
    pub amount: f64,
    pub start_date: Date,
    pub count: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_cards::Entity",
        from = "Column::CreditCardId",
        to = "super::credit_cards::Column::Id"
    )]
    CreditCard,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyId",
        to = "super::currencies::Column::Id"
    )]
    Currency,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Installment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            credit_card_id: model.credit_card_id,
            currency_id: model.currency_id,
            concept: model.concept,
            amount: model.amount,
            start_date: model.start_date,
            count: model.count,
        }
    }
}
