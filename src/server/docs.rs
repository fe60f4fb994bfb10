//! OpenAPI document for the catalog endpoints, served through Swagger UI.

use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    model::{
        api::ErrorDto,
        game::{
            CreateGameDto, GameDetailDto, GameDto, GameWithRelationsDto, ReferenceDto,
            ReferenceNameDto, UpdateGameDto,
        },
    },
    server::controller::game,
};

pub const DOCS_PATH: &str = "/api/docs";
pub const OPENAPI_PATH: &str = "/api/docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    paths(
        game::list_games,
        game::get_games_by_category,
        game::search_games,
        game::get_game,
        game::create_game,
        game::edit_game,
        game::delete_game,
    ),
    components(schemas(
        ErrorDto,
        GameDto,
        ReferenceDto,
        ReferenceNameDto,
        GameWithRelationsDto,
        GameDetailDto,
        CreateGameDto,
        UpdateGameDto,
    )),
    modifiers(&BearerAuth),
    tags((name = "game", description = "Game catalog"))
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
