//! REST handlers for the `persons` collection.

use crate::server::AppState;
use crate::store::StoreError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use person_mirror::{Person, PersonId, PersonSortingOptions, SortField, SortingOrder};
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Query parameters accepted by `GET /persons`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub sort_field: Option<String>,
    pub sorting_order: Option<String>,
}

impl ListParams {
    /// Parse the raw literals, defaulting to id ascending.
    fn sorting_options(&self) -> Result<PersonSortingOptions, ApiError> {
        let sort_field = match self.sort_field.as_deref() {
            Some(raw) => raw.parse::<SortField>().map_err(ApiError::BadRequest)?,
            None => SortField::default(),
        };
        let sorting_order = match self.sorting_order.as_deref() {
            Some(raw) => raw.parse::<SortingOrder>().map_err(ApiError::BadRequest)?,
            None => SortingOrder::default(),
        };
        Ok(PersonSortingOptions::new(sort_field, sorting_order))
    }
}

/// Error response with a JSON `{"error": ...}` body.
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::NotFound(err.to_string()),
            StoreError::IdProvided(_) | StoreError::IdMismatch { .. } => {
                ApiError::BadRequest(err.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };
        warn!("Request rejected ({}): {}", status, message);
        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// `GET /persons`
pub async fn list_persons(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<Person>>, ApiError> {
    let options = params.sorting_options()?;
    let persons = state.store.read().await.list(&options);
    debug!(
        "Listing {} persons by {} {}",
        persons.len(),
        options.sort_field,
        options.sorting_order
    );
    Ok(Json(persons))
}

/// `POST /persons`
pub async fn create_person(
    State(state): State<Arc<AppState>>,
    Json(person): Json<Person>,
) -> Result<(StatusCode, Json<Person>), ApiError> {
    let created = state.store.write().await.create(person)?;
    info!("Created person {:?} ({})", created.id, created.name);
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PUT /persons/{id}`
pub async fn update_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PersonId>,
    Json(person): Json<Person>,
) -> Result<Json<Person>, ApiError> {
    let updated = state.store.write().await.update(id, person)?;
    info!("Updated person {} ({})", id, updated.name);
    Ok(Json(updated))
}

/// `DELETE /persons/{id}`
pub async fn delete_person(
    State(state): State<Arc<AppState>>,
    Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError> {
    state.store.write().await.delete(id)?;
    info!("Deleted person {}", id);
    Ok(StatusCode::OK)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_params_defaults() {
        let options = ListParams::default().sorting_options().unwrap();
        assert_eq!(options, PersonSortingOptions::default());
    }

    #[test]
    fn test_list_params_parse() {
        let params = ListParams {
            sort_field: Some("NAME".into()),
            sorting_order: Some("DESCENDING".into()),
        };
        assert_eq!(
            params.sorting_options().unwrap(),
            PersonSortingOptions::new(SortField::Name, SortingOrder::Descending)
        );
    }

    #[test]
    fn test_list_params_unknown_literal() {
        let params = ListParams {
            sort_field: Some("AGE".into()),
            sorting_order: None,
        };
        assert!(matches!(
            params.sorting_options(),
            Err(ApiError::BadRequest(_))
        ));
    }

    #[test]
    fn test_store_error_status_mapping() {
        let not_found = ApiError::from(StoreError::NotFound(3)).into_response();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let mismatch =
            ApiError::from(StoreError::IdMismatch { path: 1, body: 2 }).into_response();
        assert_eq!(mismatch.status(), StatusCode::BAD_REQUEST);
    }
}
