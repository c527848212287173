use utoipa::OpenApi;

use crate::scope::ScopeState;

#[derive(OpenApi)]
#[openapi(
    paths(super::api::scope::get_scope),
    components(schemas(ScopeState)),
    info(
        title = "wheresmyscope API",
        description = "Live telescope pointing bridged from MQTT",
        version = "0.1.0"
    ),
    tags(
        (name = "scope", description = "Scope state")
    )
)]
pub struct ApiDoc;
