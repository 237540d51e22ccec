use std::collections::HashSet;

use sea_orm::{FromQueryResult, PaginatorTrait, QueryFilter, Set, Statement, prelude::*};

use crate::{
    EngineError, ResultEngine, TransactionCategory, TransactionCategoryCmd,
    transaction_categories,
};

use super::{
    Engine,
    references::{Reference, require_all},
    rules::{WriteRules, delete_row},
};

const RULES: WriteRules = WriteRules {
    label: "transaction category",
    duplicate: Some((
        "duplicate_transaction_category",
        "category name must be unique under the same parent",
    )),
    dangling: "parent category must exist",
    in_use: ("category_in_use", "transaction category is in use"),
};

const SELECT_WITH_PARENT: &str = "SELECT c.id, c.name, c.parent_id, p.name AS parent_name \
     FROM transaction_categories c \
     LEFT JOIN transaction_categories p ON p.id = c.parent_id";

impl Engine {
    /// Return every category with its parent's name, ordered by id.
    pub async fn list_transaction_categories(&self) -> ResultEngine<Vec<TransactionCategory>> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_string(backend, format!("{SELECT_WITH_PARENT} ORDER BY c.id"));
        Ok(TransactionCategory::find_by_statement(stmt)
            .all(&self.database)
            .await?)
    }

    pub async fn transaction_category(&self, id: i64) -> ResultEngine<TransactionCategory> {
        let backend = self.database.get_database_backend();
        let stmt = Statement::from_sql_and_values(
            backend,
            format!("{SELECT_WITH_PARENT} WHERE c.id = ?"),
            [id.into()],
        );
        let row = TransactionCategory::find_by_statement(stmt)
            .one(&self.database)
            .await?;
        RULES.found(row)
    }

    pub async fn create_transaction_category(
        &self,
        cmd: TransactionCategoryCmd,
    ) -> ResultEngine<TransactionCategory> {
        let cmd = cmd.normalize()?;
        if let Some(parent_id) = cmd.parent_id {
            require_all(&self.database, &[Reference::ParentCategory(parent_id)]).await?;
        }
        let model = transaction_categories::ActiveModel {
            name: Set(cmd.name),
            parent_id: Set(cmd.parent_id),
            ..Default::default()
        };
        let created = RULES.written(model.insert(&self.database).await)?;
        self.transaction_category(created.id).await
    }

    /// Rename a category or move it in the tree.
    ///
    /// A category can be neither its own parent nor the child of one of its
    /// descendants.
    pub async fn update_transaction_category(
        &self,
        id: i64,
        cmd: TransactionCategoryCmd,
    ) -> ResultEngine<TransactionCategory> {
        let cmd = cmd.normalize()?;
        if let Some(parent_id) = cmd.parent_id {
            if parent_id == id {
                return Err(EngineError::invalid("category cannot be its own parent"));
            }
            require_all(&self.database, &[Reference::ParentCategory(parent_id)]).await?;
            self.ensure_not_descendant(id, parent_id).await?;
        }
        let model = transaction_categories::ActiveModel {
            id: Set(id),
            name: Set(cmd.name),
            parent_id: Set(cmd.parent_id),
        };
        RULES.updated(model.update(&self.database).await)?;
        self.transaction_category(id).await
    }

    /// Delete a category that has no children.
    ///
    /// Children are counted first so the caller gets `category_in_use`
    /// before storage is asked; transactions filed under the category make
    /// storage refuse the delete with the same code.
    pub async fn delete_transaction_category(&self, id: i64) -> ResultEngine<()> {
        let children = transaction_categories::Entity::find()
            .filter(transaction_categories::Column::ParentId.eq(id))
            .count(&self.database)
            .await?;
        if children > 0 {
            let (code, message) = RULES.in_use;
            return Err(EngineError::Conflict { code, message });
        }
        delete_row::<transaction_categories::Entity, _>(&self.database, &RULES, id).await
    }

    /// Walk up from `parent_id`; reaching `id` means the move closes a loop.
    async fn ensure_not_descendant(&self, id: i64, parent_id: i64) -> ResultEngine<()> {
        let mut visited = HashSet::new();
        let mut cursor = Some(parent_id);
        while let Some(current) = cursor {
            if current == id {
                return Err(EngineError::invalid(
                    "category cannot be moved under one of its descendants",
                ));
            }
            if !visited.insert(current) {
                break;
            }
            cursor = transaction_categories::Entity::find_by_id(current)
                .one(&self.database)
                .await?
                .and_then(|model| model.parent_id);
        }
        Ok(())
    }
}
