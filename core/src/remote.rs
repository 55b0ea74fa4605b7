//! Async Remote Client: one `build → execute → parse` round trip per call.
//!
//! Every failure is logged here and then returned unchanged to the caller.
//! There are no retries and no caching.

use tracing::{debug, error};

use crate::client::TodoClient;
use crate::config::ClientConfig;
use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;
use crate::types::{Item, NewItem};

pub struct RemoteClient<T> {
    client: TodoClient,
    transport: T,
}

impl<T: Transport> RemoteClient<T> {
    pub fn new(config: &ClientConfig, transport: T) -> Self {
        Self {
            client: TodoClient::new(config.base_url()),
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    /// Fetch the full collection in service order.
    pub async fn list_items(&self) -> Result<Vec<Item>, TransportError> {
        let request = self.client.build_list_items();
        let result = self.round_trip(Ok(request), TodoClient::parse_list_items).await;
        logged("list", None, result)
    }

    pub async fn get_item(&self, id: i64) -> Result<Item, TransportError> {
        let request = self.client.build_get_item(id);
        let result = self.round_trip(Ok(request), TodoClient::parse_get_item).await;
        logged("get", Some(id), result)
    }

    /// Create an item; the returned value carries the service-assigned id.
    pub async fn create_item(&self, text: &str, completed: bool) -> Result<Item, TransportError> {
        let input = NewItem {
            text: text.to_string(),
            completed,
        };
        let request = self.client.build_create_item(&input);
        let result = self.round_trip(request, TodoClient::parse_create_item).await;
        logged("create", None, result)
    }

    /// Replace `text` and `completed` of the addressed item.
    pub async fn update_item(
        &self,
        id: i64,
        text: &str,
        completed: bool,
    ) -> Result<Item, TransportError> {
        let item = Item {
            id,
            text: text.to_string(),
            completed,
        };
        let request = self.client.build_update_item(&item);
        let result = self.round_trip(request, TodoClient::parse_update_item).await;
        logged("update", Some(id), result)
    }

    pub async fn delete_item(&self, id: i64) -> Result<(), TransportError> {
        let request = self.client.build_delete_item(id);
        let result = self.round_trip(Ok(request), TodoClient::parse_delete_item).await;
        logged("delete", Some(id), result)
    }

    async fn round_trip<V>(
        &self,
        request: Result<HttpRequest, TransportError>,
        parse: fn(&TodoClient, HttpResponse) -> Result<V, TransportError>,
    ) -> Result<V, TransportError> {
        let request = request?;
        debug!(method = %request.method, url = %request.path, "sending request");
        let response = self.transport.execute(request).await?;
        parse(&self.client, response)
    }
}

fn logged<V>(
    operation: &'static str,
    id: Option<i64>,
    result: Result<V, TransportError>,
) -> Result<V, TransportError> {
    if let Err(err) = &result {
        error!(operation, ?id, error = %err, "todo API call failed");
    }
    result
}
