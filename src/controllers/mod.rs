mod tweets;
mod users;
mod utils;

use crate::prelude::*;

use axum::{http::StatusCode, routing::get, Router};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    let router = users::add_routes(router);
    let router = tweets::add_routes(router);

    return router.route("/health", get(|| async { StatusCode::NO_CONTENT }));
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::{app, config::Config, init::db::init_test_pool, AppState};

    use std::sync::Arc;

    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
        Router,
    };
    use serde_json::Value;
    use tower::ServiceExt;

    pub async fn test_app() -> Router {
        let cfg = Config {
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            db_connection_url: "sqlite::memory:".to_string(),
            db_max_connections: 1,
        };

        let state = AppState {
            cfg: Arc::new(cfg),
            db: init_test_pool().await,
        };

        return app(state);
    }

    pub async fn get(router: &Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("GET")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        return send(router, req).await;
    }

    pub async fn post_form(router: &Router, uri: &str, form: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form.to_string()))
            .unwrap();

        return send(router, req).await;
    }

    pub async fn post_empty(router: &Router, uri: &str) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        return send(router, req).await;
    }

    async fn send(router: &Router, req: Request<Body>) -> (StatusCode, Value) {
        let resp = router.clone().oneshot(req).await.unwrap();
        let status = resp.status();
        let bytes = hyper::body::to_bytes(resp.into_body()).await.unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        return (status, json);
    }
}
