//! Post handlers.

use actix_web::{HttpResponse, web};

use board_core::domain::{NewPost, Post, RECENT_POSTS_LIMIT};
use board_shared::dto::{CreatePostRequest, PostResponse};

use crate::middleware::error::{AppResult, deserialize_body};
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        username: post.username,
        created_at: post.created_at,
    }
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<serde_json::Value>,
) -> AppResult<HttpResponse> {
    let req: CreatePostRequest = deserialize_body(body.into_inner())?;

    let draft = NewPost::new(req.title, req.content, req.username)?;
    let post = state.posts.insert(draft).await?;

    tracing::info!(post_id = post.id, "Post created");

    Ok(HttpResponse::Ok().json(to_response(post)))
}

/// GET /posts - the 30 most recent posts, newest first.
pub async fn list_recent_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.list_recent(RECENT_POSTS_LIMIT).await?;

    let body: Vec<PostResponse> = posts.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(body))
}

#[cfg(test)]
mod tests {
    use actix_web::body::MessageBody;
    use actix_web::dev::{Service, ServiceResponse};
    use actix_web::http::{StatusCode, header::ContentType};
    use actix_web::{App, test, web};
    use board_infra::database::DatabaseConfig;
    use board_shared::ErrorResponse;
    use serde_json::json;

    use super::*;
    use crate::handlers::{configure_routes, json_config};

    async fn test_state() -> AppState {
        AppState::init(&DatabaseConfig::in_memory()).await.unwrap()
    }

    async fn test_app(
        state: AppState,
    ) -> impl Service<actix_http::Request, Response = ServiceResponse<impl MessageBody>, Error = actix_web::Error>
    {
        test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(json_config(1024 * 1024))
                .configure(configure_routes),
        )
        .await
    }

    fn create_request(title: &str, content: &str, username: &str) -> actix_http::Request {
        test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": title, "content": content, "username": username }))
            .to_request()
    }

    fn list_request() -> actix_http::Request {
        test::TestRequest::get().uri("/posts").to_request()
    }

    #[actix_web::test]
    async fn test_create_post() {
        let app = test_app(test_state().await).await;

        let before = chrono::Utc::now();
        let resp = test::call_service(&app, create_request("Hello", "World", "alice")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let post: PostResponse = test::read_body_json(resp).await;
        assert!(post.id > 0);
        assert_eq!(post.title, "Hello");
        assert_eq!(post.content, "World");
        assert_eq!(post.username, "alice");
        assert!(post.created_at >= before);
    }

    #[actix_web::test]
    async fn test_list_empty_board() {
        let app = test_app(test_state().await).await;

        let resp = test::call_service(&app, list_request()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let posts: Vec<PostResponse> = test::read_body_json(resp).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_list_newest_first() {
        let app = test_app(test_state().await).await;

        let a: PostResponse = test::read_body_json(
            test::call_service(&app, create_request("Hello", "World", "alice")).await,
        )
        .await;
        let b: PostResponse = test::read_body_json(
            test::call_service(&app, create_request("Hi", "There", "bob")).await,
        )
        .await;

        assert!(b.id > a.id);
        assert!(b.created_at >= a.created_at);

        let posts: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        assert_eq!(posts, vec![b, a]);
    }

    #[actix_web::test]
    async fn test_list_returns_thirty_most_recent() {
        let app = test_app(test_state().await).await;

        for i in 0..35 {
            let resp =
                test::call_service(&app, create_request(&format!("post {i}"), "body", "anon"))
                    .await;
            assert_eq!(resp.status(), StatusCode::OK);
        }

        let posts: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        assert_eq!(posts.len(), 30);
        assert_eq!(posts[0].title, "post 34");
        assert_eq!(posts[29].title, "post 5");
        assert!(posts.windows(2).all(|w| w[0].id > w[1].id));
    }

    #[actix_web::test]
    async fn test_repeated_lists_match() {
        let app = test_app(test_state().await).await;
        test::call_service(&app, create_request("Hello", "World", "alice")).await;

        let first: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        let second: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        assert_eq!(first, second);
    }

    #[actix_web::test]
    async fn test_title_length_boundary() {
        let app = test_app(test_state().await).await;

        let resp = test::call_service(&app, create_request(&"t".repeat(200), "c", "u")).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, create_request(&"t".repeat(201), "c", "u")).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.status, 422);
        assert_eq!(error.invalid_params[0].name, "title");
    }

    #[actix_web::test]
    async fn test_username_length_boundary() {
        let app = test_app(test_state().await).await;

        let resp = test::call_service(&app, create_request("t", "c", &"u".repeat(100))).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, create_request("t", "c", &"u".repeat(101))).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.invalid_params[0].name, "username");
    }

    #[actix_web::test]
    async fn test_missing_username_persists_nothing() {
        let app = test_app(test_state().await).await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": "Hello", "content": "World" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_client_error());

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.invalid_params[0].name, "username");

        let posts: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_wrong_field_type_rejected() {
        let app = test_app(test_state().await).await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .set_json(json!({ "title": 42, "content": "World", "username": "alice" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.invalid_params[0].name, "title");

        let posts: Vec<PostResponse> =
            test::read_body_json(test::call_service(&app, list_request()).await).await;
        assert!(posts.is_empty());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = test_app(test_state().await).await;

        let req = test::TestRequest::post()
            .uri("/posts")
            .insert_header(ContentType::json())
            .set_payload("{\"title\": ")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_storage_failure_is_generic_500() {
        let state = test_state().await;
        state.shutdown().await;
        let app = test_app(state).await;

        let resp = test::call_service(&app, list_request()).await;
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let error: ErrorResponse = test::read_body_json(resp).await;
        assert_eq!(error.title, "Internal Server Error");
        assert!(error.detail.is_none());
    }
}
