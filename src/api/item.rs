//! Item Resource Client
//!
//! The four REST operations on `/v1/items`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::de::DeserializeOwned;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemId, ItemListResponse};

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Result of a successful save
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// POST succeeded; the id is known when the backend reported it
    Created { id: Option<ItemId> },
    /// PUT succeeded
    Updated,
}

#[derive(Debug, Clone)]
pub struct ItemClient<T> {
    transport: T,
    collection_url: String,
}

impl<T: HttpTransport> ItemClient<T> {
    pub fn new(config: &ApiConfig, transport: T) -> Self {
        Self {
            transport,
            collection_url: config.collection_url(),
        }
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    fn item_url(&self, id: &ItemId) -> String {
        let segment = id.to_string();
        format!("{}/{}", self.collection_url, utf8_percent_encode(&segment, PATH_SEGMENT))
    }

    async fn execute(&self, request: HttpRequest, target: Option<&ItemId>) -> ApiResult<HttpResponse> {
        log::debug!("{} {}", request.method.as_str(), request.url);
        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("Items API unreachable: {}", e);
            e
        })?;

        if response.is_success() {
            return Ok(response);
        }
        let err = match target {
            Some(id) if response.status == 404 => ApiError::NotFound(id.clone()),
            _ => ApiError::from_status(response.status, &response.body),
        };
        log::warn!("Items API error: {}", err);
        Err(err)
    }

    /// `GET /v1/items`
    pub async fn list(&self) -> ApiResult<Vec<Item>> {
        let request = HttpRequest::new(Method::Get, self.collection_url.clone());
        let response = self.execute(request, None).await?;
        let envelope: ItemListResponse = decode(&response.body)?;

        if envelope.item_responses.iter().any(|item| item.id.is_none()) {
            return Err(ApiError::Decode("list response contains an item without id".to_string()));
        }
        log::debug!("Loaded {} items", envelope.item_responses.len());
        Ok(envelope.item_responses)
    }

    /// `GET /v1/items/{id}`
    pub async fn get(&self, id: &ItemId) -> ApiResult<Item> {
        let request = HttpRequest::new(Method::Get, self.item_url(id));
        let response = self.execute(request, Some(id)).await?;
        let mut item: Item = decode(&response.body)?;
        item.id.get_or_insert_with(|| id.clone());
        Ok(item)
    }

    /// `PUT /v1/items/{id}` for persisted items, `POST /v1/items` for drafts.
    pub async fn save(&self, item: &Item) -> ApiResult<SaveOutcome> {
        let body = serde_json::to_string(item).map_err(|e| ApiError::Encode(e.to_string()))?;

        match &item.id {
            Some(id) => {
                let request = HttpRequest::new(Method::Put, self.item_url(id)).with_json_body(body);
                self.execute(request, Some(id)).await?;
                log::info!("Updated item {}", id);
                Ok(SaveOutcome::Updated)
            }
            None => {
                let request = HttpRequest::new(Method::Post, self.collection_url.clone()).with_json_body(body);
                let response = self.execute(request, None).await?;
                let id = created_id(&response);
                match &id {
                    Some(id) => log::info!("Created item {}", id),
                    None => log::info!("Created item"),
                }
                Ok(SaveOutcome::Created { id })
            }
        }
    }

    /// `DELETE /v1/items/{id}`
    pub async fn delete(&self, id: &ItemId) -> ApiResult<()> {
        let request = HttpRequest::new(Method::Delete, self.item_url(id));
        self.execute(request, Some(id)).await?;
        log::info!("Deleted item {}", id);
        Ok(())
    }
}

fn decode<D: DeserializeOwned>(body: &str) -> ApiResult<D> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Prefer an item echoed in the body, else the last `Location` segment.
fn created_id(response: &HttpResponse) -> Option<ItemId> {
    if let Ok(Item { id: Some(id), .. }) = serde_json::from_str::<Item>(&response.body) {
        return Some(id);
    }
    let location = response.location.as_deref()?;
    // A trailing slash means the collection itself, not a created item
    let segment = location.rsplit('/').next()?;
    if segment.is_empty() {
        return None;
    }
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    Some(ItemId::parse(&decoded))
}
