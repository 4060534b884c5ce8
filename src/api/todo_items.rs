use std::sync::Arc;

use poem_openapi::param::{Path, Query};
use poem_openapi::payload::Json;
use poem_openapi::types::MaybeUndefined;
use poem_openapi::{ApiResponse, OpenApi, Tags};

use crate::errors::ItemError;
use crate::stores::TodoStore;
use crate::types::dto::todo::{
    CreateTodoItemRequest, ItemStatusFilter, PatchTodoItemRequest, TodoItemResponse,
};

/// To-do item API endpoints
pub struct TodoItemsApi {
    store: Arc<TodoStore>,
}

impl TodoItemsApi {
    /// Create a new TodoItemsApi backed by the given store
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self { store }
    }
}

/// API tags for item endpoints
#[derive(Tags)]
enum ApiTags {
    /// To-do item management endpoints
    Items,
}

/// Response for item creation
#[derive(ApiResponse)]
pub enum CreatedItemResponse {
    /// Item created; Location points at the new resource
    #[oai(status = 201)]
    Created(Json<TodoItemResponse>, #[oai(header = "Location")] String),
}

/// Response for item deletion
#[derive(ApiResponse)]
pub enum DeletedItemResponse {
    /// Item removed
    #[oai(status = 204)]
    NoContent,
}

#[OpenApi]
impl TodoItemsApi {
    /// List to-do items, optionally filtered by completion state
    ///
    /// An absent filter behaves like `all`.
    #[oai(path = "/items", method = "get", tag = "ApiTags::Items")]
    pub async fn list_items(
        &self,
        filter: Query<Option<ItemStatusFilter>>,
    ) -> Result<Json<Vec<TodoItemResponse>>, ItemError> {
        let items = self
            .store
            .list(filter.0.unwrap_or(ItemStatusFilter::All))
            .await?;

        Ok(Json(items.into_iter().map(TodoItemResponse::from).collect()))
    }

    /// Fetch a single to-do item by id
    #[oai(path = "/items/:id", method = "get", tag = "ApiTags::Items")]
    pub async fn get_item(&self, id: Path<i32>) -> Result<Json<TodoItemResponse>, ItemError> {
        let item = self
            .store
            .find_by_id(id.0)
            .await?
            .ok_or(ItemError::NotFound)?;

        Ok(Json(item.into()))
    }

    /// Create a new to-do item
    ///
    /// The store assigns the id; completion defaults to false when absent.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    pub async fn create_item(
        &self,
        body: Json<CreateTodoItemRequest>,
    ) -> Result<CreatedItemResponse, ItemError> {
        if body.title.trim().is_empty() {
            return Err(ItemError::validation_failed("title must not be blank"));
        }

        let item = self
            .store
            .insert(body.0.title, body.0.is_completed.unwrap_or(false))
            .await?;

        let location = format!("/api/items/{}", item.id);
        Ok(CreatedItemResponse::Created(Json(item.into()), location))
    }

    /// Partially update a to-do item
    ///
    /// Fields absent from the payload keep their stored values.
    #[oai(path = "/items/:id", method = "patch", tag = "ApiTags::Items")]
    pub async fn patch_item(
        &self,
        id: Path<i32>,
        body: Json<PatchTodoItemRequest>,
    ) -> Result<Json<TodoItemResponse>, ItemError> {
        // A present but blank title is rejected; null counts as absent since
        // the title is required and cannot be cleared
        if let MaybeUndefined::Value(title) = &body.title {
            if title.trim().is_empty() {
                return Err(ItemError::validation_failed("title must not be blank"));
            }
        }

        let item = self
            .store
            .find_by_id(id.0)
            .await?
            .ok_or(ItemError::NotFound)?;

        let title = match body.0.title {
            MaybeUndefined::Value(title) => Some(title),
            _ => None,
        };
        let is_completed = match body.0.is_completed {
            MaybeUndefined::Value(is_completed) => Some(is_completed),
            _ => None,
        };

        let updated = self.store.update(item, title, is_completed).await?;

        Ok(Json(updated.into()))
    }

    /// Delete a to-do item
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    pub async fn delete_item(&self, id: Path<i32>) -> Result<DeletedItemResponse, ItemError> {
        let item = self
            .store
            .find_by_id(id.0)
            .await?
            .ok_or(ItemError::NotFound)?;

        self.store.delete(item).await?;

        Ok(DeletedItemResponse::NoContent)
    }
}
