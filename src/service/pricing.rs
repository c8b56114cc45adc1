//! Price changes: one header row plus one line item pointing at it.

use crate::backend::{Backend, BindValue};
use crate::error::AppError;
use rust_decimal::Decimal;

pub const INSERT_HEADER_SQL: &str =
    "INSERT INTO zaglavlje_cjenovnika (datum_promjene, napomena) VALUES (?, ?)";
pub const INSERT_ITEM_SQL: &str =
    "INSERT INTO stavke_cjenovnika (id_zaglavlje, id_ljubimci, cijena) VALUES (?, ?, ?)";

#[derive(Clone, Debug, PartialEq)]
pub struct PriceChange {
    /// Date of the change as submitted; the database parses it.
    pub date: String,
    pub note: String,
    pub pet_id: i64,
    /// Exact decimal price; NaN and infinities cannot be represented.
    pub price: Decimal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PriceChangeIds {
    pub header_id: u64,
}

pub struct PricingService;

impl PricingService {
    /// Insert the header, then the line item carrying the header's generated id.
    ///
    /// The two inserts are not wrapped in a transaction: if the second one fails the
    /// header stays behind without items.
    pub async fn record(backend: &dyn Backend, change: &PriceChange) -> Result<PriceChangeIds, AppError> {
        let header = backend
            .execute(
                INSERT_HEADER_SQL,
                &[
                    BindValue::from(change.date.as_str()),
                    BindValue::from(change.note.as_str()),
                ],
            )
            .await?;
        let header_id = header.last_insert_id;

        backend
            .execute(
                INSERT_ITEM_SQL,
                &[
                    BindValue::from(header_id),
                    BindValue::I64(change.pet_id),
                    BindValue::Decimal(change.price),
                ],
            )
            .await
            .inspect_err(|_| tracing::warn!(header_id, "price change header left without line item"))?;

        tracing::info!(header_id, pet_id = change.pet_id, "price change recorded");
        Ok(PriceChangeIds { header_id })
    }
}
