use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};

use crate::application::http::{
    authentication::router::AuthenticationApiDoc, judge::router::JudgeApiDoc,
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nutripilot API"
    ),
    modifiers(&SecurityAddon),
    paths(crate::application::http::health::health),
    nest(
        (path = "/auth", api = AuthenticationApiDoc),
        (path = "/judge", api = JudgeApiDoc),
    )
)]
pub struct ApiDoc;
