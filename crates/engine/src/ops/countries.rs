use sea_orm::{QueryOrder, prelude::*};

use crate::{Country, ResultEngine, countries};

use super::Engine;

impl Engine {
    /// Return the country reference set, ordered by code.
    pub async fn list_countries(&self) -> ResultEngine<Vec<Country>> {
        let models = countries::Entity::find()
            .order_by_asc(countries::Column::Code)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Country::from).collect())
    }
}
