pub mod document_handler;
pub mod graphql_handler;
pub mod link_handler;
pub mod session_handler;

use actix_web::web;

pub use document_handler::{download_draft, generate_draft, generate_questions};
pub use graphql_handler::{graphiql, graphql_endpoint};
pub use link_handler::{accept_link, add_link, discover_links, fetch_more_links, reject_link};
pub use session_handler::{create_session, delete_session, get_session, health_check};

/// Registers every route. Expects `AppState` and the GraphQL `Schema` as app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(create_session)
        .service(get_session)
        .service(delete_session)
        .service(discover_links)
        .service(accept_link)
        .service(reject_link)
        .service(add_link)
        .service(fetch_more_links)
        .service(generate_questions)
        .service(generate_draft)
        .service(download_draft)
        .service(graphql_endpoint)
        .service(graphiql);
}
