//! Page and form routes.

use crate::handlers::{
    add_supplier, all_pets, delete_supplier, generate_report, insert_pricing, list_tables,
    pet_details, price_form, report_form, supplier_form, table_data, update_supplier,
};
use crate::state::AppState;
use axum::{routing::get, routing::post, Router};

pub fn page_routes(state: AppState) -> Router {
    Router::new()
        .route("/getTables", get(list_tables))
        .route("/getTableData/", get(table_data))
        .route("/getTableData/:tableName", get(table_data))
        .route("/allPets", get(all_pets))
        .route("/petDetails/:petId", get(pet_details))
        .route("/reportForm", get(report_form))
        .route("/generateReport/:reportType", get(generate_report))
        .route("/form", get(price_form))
        .route("/insertPricing", post(insert_pricing))
        .route("/supplierForm", get(supplier_form))
        .route("/addSupplier", post(add_supplier))
        .route("/updateSupplier/:supplierId", get(update_supplier))
        .route("/deleteSupplier/:supplierId", post(delete_supplier))
        .with_state(state)
}
