//! Credit cards and the set of currencies each one operates in.

use sea_orm::entity::prelude::*;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CreditCard {
    pub id: i64,
    pub bank_id: i64,
    pub person_id: i64,
    pub number: String,
    pub name: Option<String>,
    /// Linked currencies, ascending.
    pub currency_ids: Vec<i64>,
}

impl CreditCard {
    pub(crate) fn from_model(model: Model, links: Vec<super::credit_card_currencies::Model>) -> Self {
        Self {
            id: model.id,
            bank_id: model.bank_id,
            person_id: model.person_id,
            number: model.number,
            name: model.name,
            currency_ids: links.into_iter().map(|link| link.currency_id).collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "credit_cards")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub bank_id: i64,
    pub person_id: i64,
    #[sea_orm(unique)]
    pub number: String,
    pub name: Option<String>,
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
        belongs_to = "super::people::Entity",
        from = "Column::PersonId",
        to = "super::people::Column::Id"
    )]
    Person,
    #[sea_orm(has_many = "super::credit_card_currencies::Entity")]
    Currencies,
}

impl Related<super::credit_card_currencies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Currencies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
