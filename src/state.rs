// SPDX-License-Identifier: AGPL-3.0-or-later

use std::sync::Arc;

use crate::service::QueryService;

/// Shared application state injected into handlers.
///
/// Built once at startup; nothing in it is mutated afterwards, so no
/// locking is needed. Generic over the contract binding so handler tests
/// can run against a mock.
pub struct AppState<C> {
    pub query: Arc<QueryService<C>>,
}

impl<C> AppState<C> {
    pub fn new(query: Arc<QueryService<C>>) -> Self {
        Self { query }
    }
}

// Manual impl: `C` itself does not need to be `Clone` behind the Arc.
impl<C> Clone for AppState<C> {
    fn clone(&self) -> Self {
        Self {
            query: Arc::clone(&self.query),
        }
    }
}
