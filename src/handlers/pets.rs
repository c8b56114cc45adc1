//! Pet pages.

use crate::backend::Row;
use crate::error::AppError;
use crate::response::page;
use crate::service::PetService;
use crate::state::AppState;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Serialize;

#[derive(Serialize)]
struct AllPetsContext {
    pets: Vec<Row>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PetDetailsContext {
    pet_details: Option<Row>,
}

/// GET /allPets
pub async fn all_pets(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let pets = PetService::all(state.backend.as_ref()).await?;
    page(&state, "allPets", AllPetsContext { pets })
}

/// GET /petDetails/:petId. An unknown id renders the page with no details.
pub async fn pet_details(
    State(state): State<AppState>,
    pet_id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Path(pet_id) = pet_id?;
    let pet_details = PetService::details(state.backend.as_ref(), pet_id).await?;
    page(&state, "petDetails", PetDetailsContext { pet_details })
}
