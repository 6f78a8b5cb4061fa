//! Public client configuration endpoint.
//!
//! Surfaces the identity-provider and map-provider values the front end
//! needs at boot. Authentication itself happens against the provider, not
//! here.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::AppState;
use crate::response::ApiResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PublicConfig {
    pub auth: AuthClientConfig,
    pub maps: MapsClientConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthClientConfig {
    pub domain: String,
    pub client_id: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct MapsClientConfig {
    pub api_key: String,
}

pub async fn public_config(State(state): State<AppState>) -> Json<ApiResponse<PublicConfig>> {
    ApiResponse::ok(PublicConfig {
        auth: AuthClientConfig {
            domain: state.config.auth.domain.clone(),
            client_id: state.config.auth.client_id.clone(),
        },
        maps: MapsClientConfig {
            api_key: state.config.maps.api_key.clone(),
        },
    })
}
