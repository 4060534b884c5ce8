// Database entities - SeaORM models

pub mod todo_item;
