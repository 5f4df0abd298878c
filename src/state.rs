//! Shared application state for all routes.

use crate::store::Datastore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Datastore>,
    /// Bearer token required on resource routes.
    pub api_token: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn Datastore>, api_token: impl Into<Arc<str>>) -> Self {
        AppState {
            store,
            api_token: api_token.into(),
        }
    }
}
