//! Stateless HTTP request builder and response parser for the todo API.
//!
//! # Design
//! `TodoClient` holds only a `base_url` and carries no mutable state between
//! calls. Each operation is split into a `build_*` method that produces an
//! `HttpRequest` and a `parse_*` method that consumes an `HttpResponse`.
//! Executing the round trip is left to a `Transport`.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::TransportError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Item, NewItem};

/// Synchronous, stateless client for the todo API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn build_list_items(&self) -> HttpRequest {
        self.bare(HttpMethod::Get, self.collection_url())
    }

    pub fn build_get_item(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Get, self.item_url(id))
    }

    pub fn build_create_item(&self, input: &NewItem) -> Result<HttpRequest, TransportError> {
        self.with_json(HttpMethod::Post, self.collection_url(), input)
    }

    /// Full replace: the whole item, id included, is sent to `/todos/{id}`.
    pub fn build_update_item(&self, item: &Item) -> Result<HttpRequest, TransportError> {
        self.with_json(HttpMethod::Put, self.item_url(item.id), item)
    }

    pub fn build_delete_item(&self, id: i64) -> HttpRequest {
        self.bare(HttpMethod::Delete, self.item_url(id))
    }

    pub fn parse_list_items(&self, response: HttpResponse) -> Result<Vec<Item>, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_get_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_create_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_update_item(&self, response: HttpResponse) -> Result<Item, TransportError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// The body of a successful delete (empty or the removed item) is ignored.
    pub fn parse_delete_item(&self, response: HttpResponse) -> Result<(), TransportError> {
        check_status(&response)
    }

    fn collection_url(&self) -> String {
        format!("{}/todos", self.base_url)
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/todos/{id}", self.base_url)
    }

    fn bare(&self, method: HttpMethod, path: String) -> HttpRequest {
        HttpRequest {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    fn with_json<B: Serialize>(
        &self,
        method: HttpMethod,
        path: String,
        payload: &B,
    ) -> Result<HttpRequest, TransportError> {
        let body = serde_json::to_string(payload).map_err(|e| TransportError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path,
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }
}

/// Map non-2xx status codes to the appropriate `TransportError` variant.
fn check_status(response: &HttpResponse) -> Result<(), TransportError> {
    if response.is_success() {
        return Ok(());
    }
    if response.status == 404 {
        return Err(TransportError::NotFound);
    }
    Err(TransportError::Status {
        status: response.status,
        body: response.body.clone(),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, TransportError> {
    serde_json::from_str(body).map_err(|e| TransportError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TodoClient {
        TodoClient::new("http://localhost:8000")
    }

    #[test]
    fn build_list_items_produces_correct_request() {
        let req = client().build_list_items();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/todos");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_get_item_produces_correct_request() {
        let req = client().build_get_item(42);
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/todos/42");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_item_produces_correct_request() {
        let req = client().build_create_item(&NewItem::pending("Buy milk")).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/todos");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["text"], "Buy milk");
        assert_eq!(body["completed"], false);
        assert!(body.get("id").is_none());
    }

    #[test]
    fn build_update_item_sends_full_item() {
        let item = Item {
            id: 1,
            text: "a".to_string(),
            completed: true,
        };
        let req = client().build_update_item(&item).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/todos/1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body, serde_json::json!({"id": 1, "text": "a", "completed": true}));
    }

    #[test]
    fn build_delete_item_produces_correct_request() {
        let req = client().build_delete_item(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert_eq!(req.path, "http://localhost:8000/todos/7");
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_items_keeps_server_order() {
        let response = HttpResponse::new(
            200,
            r#"[{"id":3,"text":"c","completed":false},{"id":1,"text":"a","completed":true}]"#,
        );
        let items = client().parse_list_items(response).unwrap();
        let ids: Vec<i64> = items.iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn parse_get_item_not_found() {
        let err = client().parse_get_item(HttpResponse::new(404, "")).unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn parse_create_item_accepts_any_2xx() {
        let body = r#"{"id":5,"text":"New","completed":false}"#;
        for status in [200, 201] {
            let item = client().parse_create_item(HttpResponse::new(status, body)).unwrap();
            assert_eq!(item.id, 5);
            assert_eq!(item.text, "New");
        }
    }

    #[test]
    fn parse_create_item_wrong_status() {
        let err = client()
            .parse_create_item(HttpResponse::new(500, "internal error"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Status { status: 500, .. }));
    }

    #[test]
    fn parse_update_item_not_found() {
        let err = client()
            .parse_update_item(HttpResponse::new(404, r#"{"detail":"Todo not found"}"#))
            .unwrap_err();
        assert!(matches!(err, TransportError::NotFound));
    }

    #[test]
    fn parse_delete_item_ignores_body() {
        assert!(client().parse_delete_item(HttpResponse::new(204, "")).is_ok());
        assert!(client()
            .parse_delete_item(HttpResponse::new(200, r#"{"id":1,"text":"a","completed":false}"#))
            .is_ok());
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TodoClient::new("http://localhost:8000/");
        let req = client.build_list_items();
        assert_eq!(req.path, "http://localhost:8000/todos");
    }

    #[test]
    fn parse_list_items_bad_json() {
        let err = client()
            .parse_list_items(HttpResponse::new(200, "not json"))
            .unwrap_err();
        assert!(matches!(err, TransportError::Decode(_)));
    }
}
