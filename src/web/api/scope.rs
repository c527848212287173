use axum::{extract::State, Json};

use crate::scope::ScopeState;
use crate::web::server::AppState;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Current scope state", body = ScopeState)
    ),
    tag = "scope"
)]
pub async fn get_scope(State(state): State<AppState>) -> Json<ScopeState> {
    Json(state.store.snapshot())
}
