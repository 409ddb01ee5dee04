use std::sync::Arc;

use dioxus::prelude::*;
use tokio::sync::RwLock;

use crate::context::{get_service_url, SharedClient};
use crate::pages::Quiz;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and the recommendation service client context,
/// then renders the single-page quiz flow.
#[component]
pub fn App() -> Element {
    // Shared client state, filled in after startup
    let client: Signal<SharedClient> = use_signal(|| Arc::new(RwLock::new(None)));
    let mut client_ready: Signal<bool> = use_signal(|| false);

    // Provide client context to all child components
    use_context_provider(|| client);
    use_context_provider(|| client_ready);

    // Build the HTTP client on mount
    use_effect(move || {
        spawn(async move {
            let service_url = get_service_url();
            match glowquiz_core::RecommendClient::new(service_url.as_str()) {
                Ok(service) => {
                    let shared = client();
                    let mut guard = shared.write().await;
                    *guard = Some(service);
                    drop(guard);
                    client_ready.set(true);
                    tracing::info!("Recommendation client ready against {}", service_url);
                }
                Err(e) => {
                    tracing::error!("Failed to build recommendation client: {}", e);
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Quiz {}
    }
}
