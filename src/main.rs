use std::sync::Arc;

use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use todo_backend::api::{HealthApi, TodoItemsApi};
use todo_backend::config::{database, logging};
use todo_backend::stores::TodoStore;

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    logging::init_logging().expect("Failed to initialize logging");

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| database::DEFAULT_DATABASE_URL.to_string());

    let db = database::init_database(&database_url)
        .await
        .expect("Failed to connect to database");

    database::migrate_database(&db)
        .await
        .expect("Failed to run migrations");

    let todo_store = Arc::new(TodoStore::new(db));
    let items_api = TodoItemsApi::new(todo_store);

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new((HealthApi, items_api), "Todo API", "1.0.0")
        .server("http://localhost:3000/api");

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: nest API service under /api and Swagger UI under /swagger
    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    let bind_address =
        std::env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at /swagger");

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
