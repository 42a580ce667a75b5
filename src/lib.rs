//! Music Catalog - domain model for a classical-aware music library.
//!
//! Albums hold ordered entries that are either compositions (works made of
//! movements) or standalone singles. The crate keeps denormalized foreign
//! keys and sort keys consistent through explicit update operations,
//! produces display labels for albums, and classifies remote catalog
//! outcomes into a closed taxonomy.
//!
//! - [`model`] - entities and update propagation
//! - [`sort_key`] - sort-key normalization
//! - [`describe`] - album display labels
//! - [`remote`] - catalog client and outcome classification

pub mod cli;
pub mod config;
pub mod describe;
pub mod error;
pub mod model;
pub mod remote;
pub mod sort_key;
#[cfg(test)]
pub mod test_utils;
