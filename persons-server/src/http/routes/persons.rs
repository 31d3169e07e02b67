//! REST listing of persons

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::Person;

/// GET /persons - every stored row, column names as keys
async fn list_persons(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Person>>, ApiError> {
    let persons = state.service.list().await?;
    Ok(Json(persons))
}

/// Person routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/persons", get(list_persons))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::http::{build_router, AppState};
    use crate::models::NewPerson;
    use crate::service::{PersonService, UniquePolicy};

    async fn get_persons(service: PersonService) -> (StatusCode, Value) {
        let app = build_router(AppState::new(service), false);
        let response = app
            .oneshot(Request::builder().uri("/persons").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn empty_table_is_empty_array() {
        let (status, body) = get_persons(PersonService::in_memory(UniquePolicy::Name)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!([]));
    }

    #[tokio::test]
    async fn lists_rows_with_column_names() {
        let service = PersonService::in_memory(UniquePolicy::Name);
        for (name, age) in [("Alice", 25), ("Bob", 30)] {
            service
                .add(NewPerson {
                    name: name.into(),
                    age: Some(age),
                    ..Default::default()
                })
                .await
                .unwrap();
        }

        let (status, body) = get_persons(service).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!([
                { "id": 1, "name": "Alice", "age": 25, "phone": null, "street": null,
                  "city": null, "mail": null, "password": null },
                { "id": 2, "name": "Bob", "age": 30, "phone": null, "street": null,
                  "city": null, "mail": null, "password": null }
            ])
        );
    }
}
