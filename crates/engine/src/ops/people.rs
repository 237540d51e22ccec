use sea_orm::{QueryOrder, Set, prelude::*};

use crate::{Person, PersonCmd, ResultEngine, people};

use super::{
    Engine,
    rules::{WriteRules, delete_row, find_row},
};

// People have no natural key: two people may share a name.
const RULES: WriteRules = WriteRules {
    label: "person",
    duplicate: None,
    dangling: "person must exist",
    in_use: ("person_in_use", "person is in use"),
};

impl Engine {
    pub async fn list_people(&self) -> ResultEngine<Vec<Person>> {
        let models = people::Entity::find()
            .order_by_asc(people::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Person::from).collect())
    }

    pub async fn person(&self, id: i64) -> ResultEngine<Person> {
        find_row::<people::Entity, _>(&self.database, &RULES, id)
            .await
            .map(Person::from)
    }

    pub async fn create_person(&self, cmd: PersonCmd) -> ResultEngine<Person> {
        let cmd = cmd.normalize()?;
        let model = people::ActiveModel {
            name: Set(cmd.name),
            ..Default::default()
        };
        RULES
            .written(model.insert(&self.database).await)
            .map(Person::from)
    }

    pub async fn update_person(&self, id: i64, cmd: PersonCmd) -> ResultEngine<Person> {
        let cmd = cmd.normalize()?;
        let model = people::ActiveModel {
            id: Set(id),
            name: Set(cmd.name),
        };
        RULES
            .updated(model.update(&self.database).await)
            .map(Person::from)
    }

    pub async fn delete_person(&self, id: i64) -> ResultEngine<()> {
        delete_row::<people::Entity, _>(&self.database, &RULES, id).await
    }
}
