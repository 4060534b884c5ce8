use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, Set,
};

use crate::errors::InternalError;
use crate::types::db::todo_item::{self, ActiveModel, Entity as TodoItem, Model};
use crate::types::dto::todo::ItemStatusFilter;

/// TodoStore manages to-do item records in the database
pub struct TodoStore {
    db: DatabaseConnection,
}

impl TodoStore {
    /// Create a new TodoStore with the given database connection
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// List items matching the given status filter, ordered by id
    pub async fn list(&self, filter: ItemStatusFilter) -> Result<Vec<Model>, InternalError> {
        let mut query = TodoItem::find();

        match filter {
            ItemStatusFilter::Todo => {
                query = query.filter(todo_item::Column::IsCompleted.eq(false));
            }
            ItemStatusFilter::Completed => {
                query = query.filter(todo_item::Column::IsCompleted.eq(true));
            }
            ItemStatusFilter::All => {}
        }

        query
            .order_by_asc(todo_item::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| InternalError::database("list_todo_items", e))
    }

    /// Look up a single item by id
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Model>, InternalError> {
        TodoItem::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| InternalError::database("find_todo_item", e))
    }

    /// Insert a new item and return it with its store-assigned id
    pub async fn insert(
        &self,
        title: String,
        is_completed: bool,
    ) -> Result<Model, InternalError> {
        let item = ActiveModel {
            title: Set(title),
            is_completed: Set(is_completed),
            ..Default::default()
        };

        item.insert(&self.db)
            .await
            .map_err(|e| InternalError::database("insert_todo_item", e))
    }

    /// Apply the provided fields to an existing item and return the result
    ///
    /// Fields passed as `None` keep their stored values. An update with no
    /// fields to apply returns the item unchanged without touching the
    /// database.
    pub async fn update(
        &self,
        item: Model,
        title: Option<String>,
        is_completed: Option<bool>,
    ) -> Result<Model, InternalError> {
        if title.is_none() && is_completed.is_none() {
            return Ok(item);
        }

        let mut item: ActiveModel = item.into();

        if let Some(title) = title {
            item.title = Set(title);
        }
        if let Some(is_completed) = is_completed {
            item.is_completed = Set(is_completed);
        }

        item.update(&self.db)
            .await
            .map_err(|e| InternalError::database("update_todo_item", e))
    }

    /// Remove an item from the store
    pub async fn delete(&self, item: Model) -> Result<(), InternalError> {
        item.delete(&self.db)
            .await
            .map_err(|e| InternalError::database("delete_todo_item", e))?;

        Ok(())
    }
}
