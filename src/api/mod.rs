// API layer - HTTP endpoints

pub mod health;
pub mod todo_items;

pub use health::HealthApi;
pub use todo_items::TodoItemsApi;
