//! Price change form and submission.

use crate::error::AppError;
use crate::response::{see_other, static_page};
use crate::service::{PriceChange, PricingService};
use crate::state::AppState;
use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Form;
use rust_decimal::Decimal;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceChangeForm {
    pub datum_promjene: String,
    #[serde(default)]
    pub napomena: String,
    pub id_ljubimci: i64,
    pub cijena: Decimal,
}

impl From<PriceChangeForm> for PriceChange {
    fn from(f: PriceChangeForm) -> Self {
        PriceChange {
            date: f.datum_promjene,
            note: f.napomena,
            pet_id: f.id_ljubimci,
            price: f.cijena,
        }
    }
}

/// GET /form
pub async fn price_form(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    static_page(&state, "form")
}

/// POST /insertPricing
pub async fn insert_pricing(
    State(state): State<AppState>,
    form: Result<Form<PriceChangeForm>, FormRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Form(form) = form?;
    PricingService::record(state.backend.as_ref(), &form.into()).await?;
    Ok(see_other("/getTables"))
}
