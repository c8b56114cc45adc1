//! Use-case logic over the data backend: the SQL each page needs and the order it runs in.

pub mod catalog;
pub mod pets;
pub mod pricing;
pub mod reports;
pub mod suppliers;

pub use catalog::CatalogService;
pub use pets::PetService;
pub use pricing::{PriceChange, PriceChangeIds, PricingService};
pub use reports::{ReportDispatcher, ReportProcedure, REPORTS};
pub use suppliers::{NewSupplier, SupplierService};
