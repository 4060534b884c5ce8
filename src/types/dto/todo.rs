use poem_openapi::types::MaybeUndefined;
use poem_openapi::{Enum, Object};

use crate::types::db::todo_item;

/// Selects which subset of items a list request returns
#[derive(Enum, Debug, Copy, Clone, PartialEq, Eq)]
#[oai(rename_all = "lowercase")]
pub enum ItemStatusFilter {
    /// Every item regardless of completion state
    All,
    /// Items that have not been completed yet
    Todo,
    /// Items that have been completed
    Completed,
}

/// Request model for creating a new to-do item
#[derive(Object, Debug)]
#[oai(rename_all = "camelCase")]
pub struct CreateTodoItemRequest {
    /// Title of the item (1-200 characters)
    #[oai(validator(min_length = 1, max_length = 200))]
    pub title: String,

    /// Completion state; treated as false when absent
    pub is_completed: Option<bool>,
}

/// Request model for partially updating an item
///
/// Fields left out of the payload keep their stored values.
#[derive(Object, Debug, Default)]
#[oai(rename_all = "camelCase")]
pub struct PatchTodoItemRequest {
    /// New title for the item
    pub title: MaybeUndefined<String>,

    /// New completion state
    pub is_completed: MaybeUndefined<bool>,
}

/// Response model representing a to-do item
#[derive(Object, Debug, Clone, PartialEq)]
#[oai(rename_all = "camelCase")]
pub struct TodoItemResponse {
    /// Identifier assigned by the store on creation
    pub id: i32,

    /// Title of the item
    pub title: String,

    /// Whether the item has been completed
    pub is_completed: bool,
}

impl From<todo_item::Model> for TodoItemResponse {
    fn from(item: todo_item::Model) -> Self {
        Self {
            id: item.id,
            title: item.title,
            is_completed: item.is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use poem_openapi::types::{ParseFromJSON, ParseFromParameter, ToJSON};

    #[test]
    fn test_item_response_serializes_with_camel_case_names() {
        let response = TodoItemResponse {
            id: 1,
            title: "Task 1".to_string(),
            is_completed: false,
        };

        let value = response.to_json().expect("Failed to serialize response");

        assert_eq!(
            value,
            serde_json::json!({"id": 1, "title": "Task 1", "isCompleted": false})
        );
    }

    #[test]
    fn test_patch_request_distinguishes_absent_from_null() {
        let patch = PatchTodoItemRequest::parse_from_json(Some(
            serde_json::json!({"isCompleted": true}),
        ))
        .unwrap_or_else(|_| panic!("Failed to parse patch payload"));

        assert!(patch.title.is_undefined());
        assert_eq!(patch.is_completed, MaybeUndefined::Value(true));

        let patch =
            PatchTodoItemRequest::parse_from_json(Some(serde_json::json!({"title": null})))
                .unwrap_or_else(|_| panic!("Failed to parse patch payload"));

        assert!(patch.title.is_null());
        assert!(patch.is_completed.is_undefined());
    }

    #[test]
    fn test_status_filter_parses_lowercase_values() {
        let filter = ItemStatusFilter::parse_from_parameter("todo")
            .unwrap_or_else(|_| panic!("Failed to parse filter"));
        assert_eq!(filter, ItemStatusFilter::Todo);

        let filter = ItemStatusFilter::parse_from_parameter("completed")
            .unwrap_or_else(|_| panic!("Failed to parse filter"));
        assert_eq!(filter, ItemStatusFilter::Completed);

        let filter = ItemStatusFilter::parse_from_parameter("all")
            .unwrap_or_else(|_| panic!("Failed to parse filter"));
        assert_eq!(filter, ItemStatusFilter::All);
    }
}
