use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::params::requests::common::IdParams;
use crate::params::responses::article::ArticleDetail;

/// Declares the bearer-token scheme on the generated document.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

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
    modifiers(&SecurityAddon),
    info(title = "blog-serve", description = "接口文档", version = "1.0"),
    security(("bearer" = [])),
    paths(
        crate::handles::articles::detail,
        crate::handles::articles::list,
    ),
    components(schemas(IdParams, ArticleDetail))
)]
pub struct ApiDoc;
