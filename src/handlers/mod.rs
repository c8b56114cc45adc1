//! HTTP handlers, one per page or form action.

pub mod catalog;
pub mod pets;
pub mod pricing;
pub mod reports;
pub mod suppliers;

pub use catalog::*;
pub use pets::*;
pub use pricing::*;
pub use reports::*;
pub use suppliers::*;
