//! Sell Core
//!
//! Resource framework shared by the Partner Center Sell provider: attribute
//! values and state, schemas with validators, typed resource data access,
//! composite identifiers and merge-patch construction.

pub mod differ;
pub mod ident;
pub mod patch;
pub mod provider;
pub mod resource;
pub mod resource_data;
pub mod schema;
