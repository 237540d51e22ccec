use sea_orm::entity::prelude::*;
use serde::Serialize;

/// Amount owed on one cycle in one currency.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CycleBalance {
    pub id: i64,
    pub credit_card_cycle_id: i64,
    pub currency_id: i64,
    pub balance: f64,
    pub paid: bool,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_card_cycle_balances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub credit_card_cycle_id: i64,
    pub currency_id: i64,
    pub balance: f64,
    pub paid: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::credit_card_cycles::Entity",
        from = "Column::CreditCardCycleId",
        to = "super::credit_card_cycles::Column::Id"
    )]
    Cycle,
    #[sea_orm(
        belongs_to = "super::currencies::Entity",
        from = "Column::CurrencyId",
        to = "super::currencies::Column::Id"
    )]
    Currency,
}

impl Related<super::credit_card_cycles::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cycle.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CycleBalance {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            credit_card_cycle_id: model.credit_card_cycle_id,
            currency_id: model.currency_id,
            balance: model.balance,
            paid: model.paid,
        }
    }
}
