//! GraphQL endpoint

use std::sync::Arc;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};

use crate::http::server::AppState;

/// POST /graphql - execute one operation
async fn execute(State(state): State<Arc<AppState>>, req: GraphQLRequest) -> GraphQLResponse {
    state.schema.execute(req.into_inner()).await.into()
}

/// GET /graphql - GraphiQL explorer
async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// GraphQL routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/graphql", get(graphiql).post(execute))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::http::{build_router, AppState};
    use crate::service::{PersonService, UniquePolicy};

    async fn post(app: axum::Router, query: &str) -> Value {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/graphql")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json!({ "query": query }).to_string()))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn mutation_then_rest_listing_agree() {
        let service = PersonService::in_memory(UniquePolicy::Name);
        let app = build_router(AppState::new(service.clone()), false);

        let added = post(
            app.clone(),
            r#"mutation { addPerson(name: "Alice", age: 25) { id canDrink } }"#,
        )
        .await;
        assert_eq!(added["data"]["addPerson"], json!({ "id": "1", "canDrink": true }));

        let count = post(app, "{ personCount }").await;
        assert_eq!(count["data"]["personCount"], json!(1));
        assert_eq!(service.list().await.unwrap()[0].name, "Alice");
    }

    #[tokio::test]
    async fn graphiql_page_is_served() {
        let app = build_router(AppState::new(PersonService::in_memory(UniquePolicy::Name)), false);
        let response = app
            .oneshot(Request::builder().uri("/graphql").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(String::from_utf8_lossy(&body).contains("graphiql"));
    }
}
