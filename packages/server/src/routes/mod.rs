use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

use crate::handlers;
use crate::state::AppState;

/// Every API route, mounted under `/api` by [`crate::build_router`].
pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .merge(auth_routes())
        .merge(topic_routes())
        .merge(content_routes())
        .merge(webpage_routes())
}

fn auth_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::auth::register))
        .routes(routes!(handlers::auth::login))
}

fn topic_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new().routes(routes!(
        handlers::topic::list_topics,
        handlers::topic::create_topic
    ))
}

fn content_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::blog::generate))
        .routes(routes!(handlers::blog::save_blog))
        .routes(routes!(handlers::blog::get_blog))
        .routes(routes!(handlers::image::generate_image))
}

fn webpage_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::webpage::generate_template))
        .routes(routes!(handlers::webpage::save_webpage))
        .routes(routes!(handlers::webpage::get_webpage))
        .routes(routes!(handlers::webpage::upload_to_s3))
}
