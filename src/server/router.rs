use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::server::{
    controller::game::{
        create_game, delete_game, edit_game, get_game, get_games_by_category, list_games,
        search_games,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/games", get(list_games))
        .route("/games/search", get(search_games))
        .route("/games/category/{category}", get(get_games_by_category))
        .route("/games/{id}", get(get_game))
        .route("/games/admin/create", post(create_game))
        .route("/games/admin/edit/{id}", put(edit_game))
        .route("/games/admin/delete/{id}", delete(delete_game))
}
