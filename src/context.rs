//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpPackingApi;
use crate::config::ClientConfig;

/// Which page is on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    /// Overview of all lists
    Manager,
    /// Editor for one list, by store id
    Planner(String),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Collection URL of the packing API
    api_base: StoredValue<String>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: ClientConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            api_base: StoredValue::new(config.api_base),
        }
    }

    /// Switch pages; the old page's handlers are dropped with its view
    pub fn navigate(&self, page: Page) {
        log::debug!("[APP] navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// REST client for the configured API
    pub fn api(&self) -> HttpPackingApi {
        self.api_base.with_value(|base| HttpPackingApi::new(base))
    }
}
