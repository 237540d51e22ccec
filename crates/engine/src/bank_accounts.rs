use sea_orm::entity::prelude::*;
use serde::Serialize;

/// An account held at a bank, in one currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BankAccount {
    pub id: i64,
    pub bank_id: i64,
    pub currency_id: i64,
    pub account_number: String,
    pub balance: f64,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "bank_accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub bank_id: i64,
    pub currency_id: i64,
    pub account_number: String,
    pub balance: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::banks::Entity",
        from = "Column::BankId",
        to = "super::banks::Column::Id"
    )]
    Bank,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyId",
        to = "super::currencies::Column::Id"
    )]
    Currency,
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for BankAccount {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            bank_id: model.bank_id,
            currency_id: model.currency_id,
            account_number: model.account_number,
            balance: model.balance,
        }
    }
}
