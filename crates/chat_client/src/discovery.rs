use chat_logging::{chat_info, chat_warn};

use crate::ChatApi;

/// Tries each candidate base URL in order and returns the first one whose
/// liveness check answers with any 2xx. Later candidates are not contacted
/// once one answers.
pub async fn discover(api: &dyn ChatApi, candidates: &[String]) -> Option<String> {
    for candidate in candidates {
        match api.ping(candidate).await {
            Ok(_) => {
                chat_info!("API found at {}", candidate);
                return Some(candidate.clone());
            }
            Err(err) => {
                chat_info!("API not available at {}: {}", candidate, err);
            }
        }
    }
    chat_warn!(
        "Could not connect to the API on any of {} candidates",
        candidates.len()
    );
    None
}
