//! Contact endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use persistence::repositories::ContactRepository;
use shared::pagination::OffsetPage;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::middleware::metrics::{record_contact_created, record_contact_deleted};
use domain::models::contact::{ContactResponse, ContactWrite};
use domain::models::Contact;

const CONTACT_NOT_FOUND: &str = "Contact not found";

fn not_found() -> ApiError {
    ApiError::NotFound(CONTACT_NOT_FOUND.to_string())
}

fn to_response(entity: persistence::entities::ContactEntity) -> ContactResponse {
    let contact: Contact = entity.into();
    contact.into()
}

/// Create a new contact.
///
/// POST /contacts/
pub async fn create_contact(
    State(state): State<AppState>,
    WithRejection(Json(request), _): WithRejection<Json<ContactWrite>, ApiError>,
) -> Result<Json<ContactResponse>, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let entity = repo.create(&request).await?;

    record_contact_created();
    info!(contact_id = entity.id, "Contact created");

    Ok(Json(to_response(entity)))
}

/// List contacts, one page at a time.
///
/// GET /contacts/?skip=<n>&limit=<n>
pub async fn list_contacts(
    State(state): State<AppState>,
    WithRejection(Query(page), _): WithRejection<Query<OffsetPage>, ApiError>,
) -> Result<Json<Vec<ContactResponse>>, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let entities = repo.list(page).await?;

    Ok(Json(entities.into_iter().map(to_response).collect()))
}

/// Get a single contact by ID.
///
/// GET /contacts/:contact_id
pub async fn get_contact(
    State(state): State<AppState>,
    WithRejection(Path(contact_id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<ContactResponse>, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let entity = repo.find_by_id(contact_id).await?.ok_or_else(not_found)?;

    Ok(Json(to_response(entity)))
}

/// Replace every field of a contact.
///
/// PUT /contacts/:contact_id
pub async fn update_contact(
    State(state): State<AppState>,
    WithRejection(Path(contact_id), _): WithRejection<Path<i64>, ApiError>,
    WithRejection(Json(request), _): WithRejection<Json<ContactWrite>, ApiError>,
) -> Result<Json<ContactResponse>, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let entity = repo
        .update(contact_id, request)
        .await?
        .ok_or_else(not_found)?;

    info!(contact_id = entity.id, "Contact updated");

    Ok(Json(to_response(entity)))
}

/// Delete a contact, returning it as it was before removal.
///
/// DELETE /contacts/:contact_id
pub async fn delete_contact(
    State(state): State<AppState>,
    WithRejection(Path(contact_id), _): WithRejection<Path<i64>, ApiError>,
) -> Result<Json<ContactResponse>, ApiError> {
    let repo = ContactRepository::new(state.pool.clone());
    let entity = repo.delete(contact_id).await?.ok_or_else(not_found)?;

    record_contact_deleted();
    info!(contact_id = entity.id, "Contact deleted");

    Ok(Json(to_response(entity)))
}
