//! Webhook payloads and intent dispatch.

use axum::{extract::State, Json};
use catalogbot_filter::filter_products;
use catalogbot_model::{Intent, Product, SearchParameters};
use catalogbot_query::FilterCriteria;
use catalogbot_reply::{search_reply, Fulfillment, ReplyConfig};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::AppState;

/// Request body sent by the conversational platform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebhookRequest {
    pub query_result: QueryResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResult {
    pub intent: IntentInfo,

    #[serde(default)]
    pub parameters: SearchParameters,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentInfo {
    pub display_name: String,
}

/// POST /webhook
pub async fn webhook(
    State(state): State<AppState>,
    Json(request): Json<WebhookRequest>,
) -> Json<Fulfillment> {
    let QueryResult { intent, parameters } = request.query_result;
    info!(intent = %intent.display_name, parameters = ?parameters, "Webhook invoked");

    let intent = Intent::from(intent.display_name.as_str());
    Json(respond(&intent, &parameters, state.catalog.products(), &state.reply))
}

/// Fulfill one intent against `catalog`.
pub fn respond(
    intent: &Intent,
    parameters: &SearchParameters,
    catalog: &[Product],
    config: &ReplyConfig,
) -> Fulfillment {
    match intent {
        Intent::SearchProduct => {
            let criteria = FilterCriteria::from_parameters(parameters);
            if let Some(category) = criteria.unknown_category() {
                warn!(category, "Unknown category, filtering literally");
            }

            let results = filter_products(catalog, &criteria);
            debug!(criteria = ?criteria, matches = results.len(), "Products filtered");
            Fulfillment::new(search_reply(&results, config))
        }
        Intent::Other(name) => {
            debug!(intent = %name, "No handler for intent");
            Fulfillment::fallback()
        }
    }
}
