//! Application Context
//!
//! The items API client, provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::{FetchTransport, ItemClient};
use crate::config::ApiConfig;

/// Client used by the views
pub type ItemApi = ItemClient<FetchTransport>;

/// App-wide values provided via context
#[derive(Clone)]
pub struct ApiContext {
    client: ItemApi,
}

impl ApiContext {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            client: ItemClient::new(config, FetchTransport),
        }
    }
}

/// Get the items API client from context
pub fn use_item_api() -> ItemApi {
    expect_context::<ApiContext>().client
}
