//! In-memory items backend for tests.
//!
//! Answers like the reference REST service: `201` + `Location` on create,
//! `204` on update and delete, `404` for unknown ids, `400` when name or
//! colour is blank. Every request is recorded.

use std::cell::RefCell;

use async_trait::async_trait;
use percent_encoding::percent_decode_str;

use super::{HttpRequest, HttpResponse, HttpTransport, Method};
use crate::config::ITEMS_PATH;
use crate::error::{ApiError, ApiResult};
use crate::models::{Item, ItemId, ItemListResponse};

#[derive(Debug, Default)]
struct BackendState {
    items: Vec<Item>,
    next_id: u64,
    requests: Vec<HttpRequest>,
    canned: Option<HttpResponse>,
    offline: bool,
}

#[derive(Debug)]
pub struct FakeBackend {
    state: RefCell<BackendState>,
}

impl Default for FakeBackend {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl FakeBackend {
    pub fn with_items(items: Vec<Item>) -> Self {
        let next_id = items
            .iter()
            .filter_map(|item| match item.id {
                Some(ItemId::Number(n)) => Some(n),
                _ => None,
            })
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            state: RefCell::new(BackendState {
                items,
                next_id,
                ..Default::default()
            }),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.state.borrow().requests.clone()
    }

    pub fn items(&self) -> Vec<Item> {
        self.state.borrow().items.clone()
    }

    /// Answer the next request with this status and body instead of routing it.
    pub fn respond_next_with(&self, status: u16, body: &str) {
        self.state.borrow_mut().canned = Some(HttpResponse {
            status,
            location: None,
            body: body.to_string(),
        });
    }

    pub fn set_offline(&self, offline: bool) {
        self.state.borrow_mut().offline = offline;
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeBackend {
    async fn send(&self, request: HttpRequest) -> ApiResult<HttpResponse> {
        let mut state = self.state.borrow_mut();
        state.requests.push(request.clone());

        if state.offline {
            return Err(ApiError::Network("Failed to fetch".to_string()));
        }
        if let Some(canned) = state.canned.take() {
            return Ok(canned);
        }
        Ok(state.route(&request))
    }
}

impl BackendState {
    fn route(&mut self, request: &HttpRequest) -> HttpResponse {
        let Some(rest) = request.url.find(ITEMS_PATH).map(|at| &request.url[at + ITEMS_PATH.len()..]) else {
            return status(404);
        };
        let id = rest
            .strip_prefix('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| ItemId::parse(&percent_decode_str(segment).decode_utf8_lossy()));

        match (request.method, id) {
            (Method::Get, None) => json(200, &ItemListResponse { item_responses: self.items.clone() }),
            (Method::Post, None) => self.create(request),
            (Method::Get, Some(id)) => match self.position(&id) {
                Some(at) => json(200, &self.items[at]),
                None => status(404),
            },
            (Method::Put, Some(id)) => self.update(&id, request),
            (Method::Delete, Some(id)) => match self.position(&id) {
                Some(at) => {
                    self.items.remove(at);
                    status(204)
                }
                None => status(404),
            },
            _ => status(405),
        }
    }

    fn position(&self, id: &ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id.as_ref() == Some(id))
    }

    fn create(&mut self, request: &HttpRequest) -> HttpResponse {
        let Some(body) = valid_body(request) else {
            return status(400);
        };
        let id = ItemId::Number(self.next_id);
        self.next_id += 1;
        self.items.push(Item {
            id: Some(id.clone()),
            name: body.name,
            colour: body.colour,
        });
        HttpResponse {
            status: 201,
            location: Some(id.to_string()),
            body: String::new(),
        }
    }

    fn update(&mut self, id: &ItemId, request: &HttpRequest) -> HttpResponse {
        let Some(at) = self.position(id) else {
            return status(404);
        };
        let Some(body) = valid_body(request) else {
            return status(400);
        };
        self.items[at].name = body.name;
        self.items[at].colour = body.colour;
        status(204)
    }
}

fn valid_body(request: &HttpRequest) -> Option<Item> {
    let item: Item = serde_json::from_str(request.body.as_deref()?).ok()?;
    if item.name.trim().is_empty() || item.colour.trim().is_empty() {
        return None;
    }
    Some(item)
}

fn status(code: u16) -> HttpResponse {
    HttpResponse {
        status: code,
        ..Default::default()
    }
}

fn json<S: serde::Serialize>(code: u16, value: &S) -> HttpResponse {
    HttpResponse {
        status: code,
        location: None,
        body: serde_json::to_string(value).unwrap_or_default(),
    }
}
