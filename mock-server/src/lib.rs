use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::debug;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

/// Body of both POST and PUT. Any `id` in the body is ignored; the path or
/// the server decides the id.
#[derive(Deserialize)]
pub struct TodoPayload {
    #[serde(default)]
    pub id: Option<i64>,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// Ids are handed out sequentially, so iteration order is creation order.
#[derive(Debug, Default)]
pub struct Store {
    last_id: i64,
    todos: BTreeMap<i64, Todo>,
}

impl Store {
    pub fn insert(&mut self, text: String, completed: bool) -> Todo {
        self.last_id += 1;
        let todo = Todo {
            id: self.last_id,
            text,
            completed,
        };
        self.todos.insert(todo.id, todo.clone());
        todo
    }

    pub fn list(&self) -> Vec<Todo> {
        self.todos.values().cloned().collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    app_with_db(Db::default())
}

/// Router over a caller-held store, so tests can inspect or seed it.
pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/todos", get(list_todos).post(create_todo))
        .route("/todos/{id}", get(get_todo).put(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn list_todos(State(db): State<Db>) -> Json<Vec<Todo>> {
    Json(db.read().await.list())
}

async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<TodoPayload>,
) -> (StatusCode, Json<Todo>) {
    let todo = db.write().await.insert(input.text, input.completed);
    debug!(id = todo.id, "todo created");
    (StatusCode::CREATED, Json(todo))
}

async fn get_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Todo>, StatusCode> {
    let store = db.read().await;
    store.todos.get(&id).cloned().map(Json).ok_or(StatusCode::NOT_FOUND)
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<TodoPayload>,
) -> Result<Json<Todo>, StatusCode> {
    let mut store = db.write().await;
    let todo = store.todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    todo.text = input.text;
    todo.completed = input.completed;
    debug!(id, completed = todo.completed, "todo replaced");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, StatusCode> {
    let mut store = db.write().await;
    store
        .todos
        .remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_to_json() {
        let todo = Todo {
            id: 1,
            text: "Test".to_string(),
            completed: false,
        };
        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json, serde_json::json!({"id": 1, "text": "Test", "completed": false}));
    }

    #[test]
    fn payload_defaults_completed_to_false() {
        let input: TodoPayload = serde_json::from_str(r#"{"text":"No completed field"}"#).unwrap();
        assert_eq!(input.text, "No completed field");
        assert!(!input.completed);
        assert!(input.id.is_none());
    }

    #[test]
    fn payload_accepts_full_item() {
        let input: TodoPayload =
            serde_json::from_str(r#"{"id":4,"text":"Done","completed":true}"#).unwrap();
        assert_eq!(input.id, Some(4));
        assert!(input.completed);
    }

    #[test]
    fn payload_rejects_missing_text() {
        let result: Result<TodoPayload, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn store_ids_are_sequential_and_never_reused() {
        let mut store = Store::default();
        let a = store.insert("a".into(), false);
        let b = store.insert("b".into(), false);
        store.todos.remove(&b.id);
        let c = store.insert("c".into(), true);
        assert_eq!((a.id, b.id, c.id), (1, 2, 3));
        let ids: Vec<i64> = store.list().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }
}
