//! Service client context for Glowquiz.
//!
//! Provides the RecommendClient instance to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let client = use_client();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use glowquiz_core::RecommendClient;
use tokio::sync::RwLock;

/// Shared client type for context.
///
/// The client is wrapped in Arc<RwLock<>> so components can read it
/// concurrently while the root component fills it in after startup.
pub type SharedClient = Arc<RwLock<Option<RecommendClient>>>;

/// Get the recommendation service base URL.
/// Uses the global URL set from command line args.
pub fn get_service_url() -> String {
    crate::get_service_url()
}

/// Hook to access the RecommendClient from context.
///
/// Returns a Signal containing the shared client state.
pub fn use_client() -> Signal<SharedClient> {
    use_context::<Signal<SharedClient>>()
}

/// Hook to check if the client is ready.
///
/// Returns a reactive signal that updates when the client is built.
pub fn use_client_ready() -> Signal<bool> {
    use_context::<Signal<bool>>()
}
