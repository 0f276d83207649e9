//! HTTP handlers and route configuration.

mod posts;

use actix_web::web;

use crate::middleware::error::json_error_handler;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/posts")
            .route(web::get().to(posts::list_recent_posts))
            .route(web::post().to(posts::create_post)),
    );
}

/// JSON extractor settings: body size limit and problem-document errors.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(json_error_handler)
}
