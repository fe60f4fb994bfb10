use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        game::{CreateGameDto, GameDetailDto, GameDto, GameWithRelationsDto, UpdateGameDto},
    },
    server::{
        data::game::SeaCatalog,
        error::AppError,
        middleware::auth::AuthGuard,
        model::game::{CreateGameParams, UpdateGameParams},
        service::{catalog::CatalogService, game::GameService},
        state::AppState,
    },
};

/// Tag for grouping game endpoints in OpenAPI documentation
pub static GAME_TAG: &str = "game";

#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Fragment matched anywhere in the game name. Omitted matches every game.
    #[serde(default)]
    pub name: Option<String>,
}

/// List every game.
///
/// Returns all games without their relations. Open to anonymous callers.
///
/// # Returns
/// - `200 OK` - All games
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games",
    tag = GAME_TAG,
    responses(
        (status = 200, description = "All games", body = Vec<GameDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_games(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let games = CatalogService::new(&state.db).list_all().await?;

    let dtos: Vec<GameDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// List games in a genre.
///
/// Returns the games that have a genre named exactly `category`, with their genres,
/// developers, platforms and tags.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Matching games with relations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/category/{category}",
    tag = GAME_TAG,
    params(
        ("category" = String, Path, description = "Exact genre name")
    ),
    responses(
        (status = 200, description = "Games in the genre", body = Vec<GameWithRelationsDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn get_games_by_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(category): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let games = CatalogService::new(&state.db)
        .list_by_category(&category)
        .await?;

    let dtos: Vec<GameWithRelationsDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Search games by name.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Games whose name contains the fragment, with relations
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/games/search",
    tag = GAME_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Matching games", body = Vec<GameWithRelationsDto>),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn search_games(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let fragment = params.name.unwrap_or_default();
    let games = CatalogService::new(&state.db).search(&fragment).await?;

    let dtos: Vec<GameWithRelationsDto> = games.into_iter().map(|g| g.into_dto()).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a single game.
///
/// Returns the game with only the names of its related rows, or `null` when no game has
/// that id. Open to anonymous callers.
#[utoipa::path(
    get,
    path = "/games/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    responses(
        (status = 200, description = "Game with relation names, or null", body = GameDetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_game(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let game = CatalogService::new(&state.db).get_by_id(id).await?;

    let dto: Option<GameDetailDto> = game.map(|g| g.into_dto());

    Ok((StatusCode::OK, Json(dto)))
}

/// Create a game.
///
/// The name is trimmed and must not already exist. Genre, developer and platform names
/// are matched against existing rows; unknown names are ignored.
///
/// # Access Control
/// - `Admin` - Only admins can create games
///
/// # Returns
/// - `201 Created` - Created game with relations
/// - `400 Bad Request` - Blank name or malformed JSON
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `403 Forbidden` - A game with that name already exists
/// - `422 Unprocessable Entity` - Body does not match the create payload
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/games/admin/create",
    tag = GAME_TAG,
    request_body = CreateGameDto,
    responses(
        (status = 201, description = "Created game", body = GameWithRelationsDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 403, description = "Game already exists", body = ErrorDto),
        (status = 422, description = "Body does not match the create payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn create_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let Json(payload) = payload?;

    let store = SeaCatalog::new(&state.db);
    let game = GameService::new(&store)
        .create(&user, CreateGameParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(game.into_dto())))
}

/// Edit a game.
///
/// Omitted fields are left untouched. A relation list that is present, even empty,
/// replaces that relation with exactly the named existing rows.
///
/// # Access Control
/// - `Admin` - Only admins can edit games
///
/// # Returns
/// - `200 OK` - Updated game with relations
/// - `400 Bad Request` - Blank name or malformed JSON
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `403 Forbidden` - New name collides with another game
/// - `404 Not Found` - No game with that id
/// - `422 Unprocessable Entity` - Body does not match the edit payload
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/games/admin/edit/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    request_body = UpdateGameDto,
    responses(
        (status = 200, description = "Updated game", body = GameWithRelationsDto),
        (status = 400, description = "Blank name", body = ErrorDto),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 403, description = "Name already used by another game", body = ErrorDto),
        (status = 404, description = "Game not found", body = ErrorDto),
        (status = 422, description = "Body does not match the edit payload", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn edit_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let Json(payload) = payload?;

    let store = SeaCatalog::new(&state.db);
    let game = GameService::new(&store)
        .update(&user, UpdateGameParams::from_dto(id, payload))
        .await?;

    Ok((StatusCode::OK, Json(game.into_dto())))
}

/// Delete a game.
///
/// Removes the game and its relation links. Succeeds whether or not the game existed.
///
/// # Access Control
/// - `Admin` - Only admins can delete games
///
/// # Returns
/// - `204 No Content` - Game deleted or already absent
/// - `401 Unauthorized` - Not authenticated or not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/games/admin/delete/{id}",
    tag = GAME_TAG,
    params(
        ("id" = i32, Path, description = "Game id")
    ),
    responses(
        (status = 204, description = "Game deleted"),
        (status = 401, description = "Not authenticated or not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer_auth" = [])),
)]
pub async fn delete_game(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &state.tokens, &headers)
        .authenticate()
        .await?;

    let store = SeaCatalog::new(&state.db);
    GameService::new(&store).delete(&user, id).await?;

    Ok(StatusCode::NO_CONTENT)
}
