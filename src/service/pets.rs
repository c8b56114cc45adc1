//! Pet listing (one join) and single-pet detail view.

use crate::backend::{Backend, BindValue, Row};
use crate::error::AppError;

/// Pets with their subcategory and category names, resolved in a single query.
pub const ALL_PETS_SQL: &str = r#"
SELECT
    kucni_ljubimci.id_ljubimci,
    kucni_ljubimci.naziv AS ljubimac_naziv,
    kucni_ljubimci.datum_nabavke,
    kucni_ljubimci.datum_rodjenja,
    podkategorije_kucnih_ljubimaca.naziv AS podkategorija_naziv,
    kategorije_kucnih_ljubimaca.naziv AS kategorija_naziv
FROM kucni_ljubimci
JOIN podkategorije_kucnih_ljubimaca
    ON kucni_ljubimci.podkategorija_id = podkategorije_kucnih_ljubimaca.podkategorija_id
JOIN kategorije_kucnih_ljubimaca
    ON podkategorije_kucnih_ljubimaca.kategorija_id = kategorije_kucnih_ljubimaca.kategorija_id
"#;

pub const PET_DETAILS_SQL: &str = "SELECT * FROM PregledLjubimaca WHERE id_ljubimci = ?";

pub struct PetService;

impl PetService {
    pub async fn all(backend: &dyn Backend) -> Result<Vec<Row>, AppError> {
        backend.fetch_all(ALL_PETS_SQL, &[]).await
    }

    /// Detail row for one pet, or `None` when the id matches nothing.
    pub async fn details(backend: &dyn Backend, pet_id: i64) -> Result<Option<Row>, AppError> {
        backend
            .fetch_optional(PET_DETAILS_SQL, &[BindValue::I64(pet_id)])
            .await
    }
}
