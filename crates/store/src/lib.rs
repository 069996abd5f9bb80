//! `makerstock-store` — persistence seams for catalog and transaction history.
//!
//! The rebuild engine only needs to enumerate history and write derived
//! fields back, so the traits here are deliberately narrow. In-memory
//! implementations back the test suites.

pub mod error;
pub mod in_memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use in_memory::{InMemoryCatalogStore, InMemoryPurchaseStore, InMemorySaleStore};
pub use traits::{CatalogStore, PurchaseStore, SaleStore};
