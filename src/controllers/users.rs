use super::utils;

use crate::{models::User, prelude::*};

use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/users", get(list_users).post(create_user))
        .route("/users/", get(list_users).post(create_user));
}

async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    let mut conn = state.db.acquire().await?;
    let users = User::find_all(&mut conn).await?;

    return Ok(Json(users));
}

#[derive(Debug, Default, Deserialize)]
struct NewUser {
    username: Option<String>,
}

async fn create_user(
    State(state): State<AppState>,
    form: std::result::Result<Form<NewUser>, FormRejection>,
) -> Result<Json<User>> {
    let body = utils::form_or_empty(form)?;
    let username = utils::require_param(body.username, "username")?;

    let mut conn = state.db.acquire().await?;
    let user = User::create(&mut conn, &username).await?;

    tracing::info!(user_id = user.id, "created user");

    return Ok(Json(user));
}
