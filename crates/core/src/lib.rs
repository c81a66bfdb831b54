//! Domain types shared across the clipstream backend.
//!
//! This crate is I/O-free: errors, id/timestamp aliases, pagination math,
//! engagement relationship kinds, and the typed feed filter/sort
//! configuration. Persistence lives in `clipstream-db`, HTTP in
//! `clipstream-api`.

pub mod engagement;
pub mod error;
pub mod feed;
pub mod pagination;
pub mod types;
