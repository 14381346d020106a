//! In-memory backend for the todo API, served under `/api`.
//!
//! The server owns ids: every create takes the next value of a counter and
//! ignores any id the client sent. Todos are kept in insertion order, which
//! is the order `GET /todo` returns.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub item: String,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    pub id: Option<String>,
    pub item: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub item: String,
}

#[derive(Debug, Default)]
pub struct Db {
    todos: Vec<Todo>,
    next_id: u64,
}

impl Db {
    pub fn seeded(todos: Vec<Todo>) -> Self {
        let next_id = todos
            .iter()
            .filter_map(|t| t.id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        Self { todos, next_id }
    }

    fn insert(&mut self, item: String) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id.to_string(),
            item,
        };
        self.todos.push(todo.clone());
        todo
    }
}

pub type SharedDb = Arc<RwLock<Db>>;

/// The todo the standalone binary starts with.
pub fn sample() -> Vec<Todo> {
    vec![Todo {
        id: "1".to_string(),
        item: "Sample todo".to_string(),
    }]
}

pub fn app() -> Router {
    app_with(Db::default())
}

pub fn app_with(db: Db) -> Router {
    let db: SharedDb = Arc::new(RwLock::new(db));
    let api = Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route("/todo/{id}", put(update_todo).delete(delete_todo))
        .with_state(db);
    Router::new().nest("/api", api)
}

pub async fn serve(listener: TcpListener, app: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("todo backend listening on {addr}");
    }
    axum::serve(listener, app).await
}

type Reply = (StatusCode, Json<Value>);

fn not_found(id: &str) -> Reply {
    tracing::debug!(id, "todo not found");
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "data": format!("Todo with id {id} not found.") })),
    )
}

async fn list_todos(State(db): State<SharedDb>) -> Json<Value> {
    let db = db.read().await;
    Json(json!({ "data": db.todos }))
}

async fn create_todo(State(db): State<SharedDb>, Json(input): Json<CreateTodo>) -> Reply {
    let todo = db.write().await.insert(input.item);
    tracing::debug!(id = %todo.id, "todo added");
    (StatusCode::OK, Json(json!({ "data": "Todo added." })))
}

async fn update_todo(
    State(db): State<SharedDb>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTodo>,
) -> Reply {
    let mut db = db.write().await;
    let Some(todo) = db.todos.iter_mut().find(|t| t.id == id) else {
        return not_found(&id);
    };
    todo.item = input.item;
    tracing::debug!(%id, "todo updated");
    (
        StatusCode::OK,
        Json(json!({ "data": format!("Todo with id {id} has been updated.") })),
    )
}

async fn delete_todo(State(db): State<SharedDb>, Path(id): Path<String>) -> Reply {
    let mut db = db.write().await;
    let Some(index) = db.todos.iter().position(|t| t.id == id) else {
        return not_found(&id);
    };
    db.todos.remove(index);
    tracing::debug!(%id, "todo removed");
    (
        StatusCode::OK,
        Json(json!({ "data": format!("Todo with id {id} has been removed.") })),
    )
}
