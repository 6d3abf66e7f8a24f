use super::utils;

use crate::{models::Tweet, prelude::*};

use axum::{
    extract::{rejection::FormRejection, State},
    routing::get,
    Form, Json, Router,
};
use serde::Deserialize;

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    return router
        .route("/tweets", get(list_tweets).post(create_tweet))
        .route("/tweets/", get(list_tweets).post(create_tweet));
}

async fn list_tweets(State(state): State<AppState>) -> Result<Json<Vec<Tweet>>> {
    let mut conn = state.db.acquire().await?;
    let tweets = Tweet::find_all(&mut conn).await?;

    return Ok(Json(tweets));
}

// user_id stays a string so a bad value is reported as a parameter error.
#[derive(Debug, Default, Deserialize)]
struct NewTweet {
    tweet_body: Option<String>,
    user_id: Option<String>,
}

async fn create_tweet(
    State(state): State<AppState>,
    form: std::result::Result<Form<NewTweet>, FormRejection>,
) -> Result<Json<Tweet>> {
    let body = utils::form_or_empty(form)?;
    let tweet_body = utils::require_param(body.tweet_body, "tweet_body")?;
    let user_id = utils::require_id_param(body.user_id, "user_id")?;

    let mut conn = state.db.acquire().await?;
    let tweet = Tweet::create(&mut conn, &tweet_body, user_id).await?;

    tracing::info!(tweet_id = tweet.id, user_id, "created tweet");

    return Ok(Json(tweet));
}
