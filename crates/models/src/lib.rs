//! Entity definitions and connection helpers for the records backend.
//! - One module per persisted entity (`customer`, `student`).
//! - `db` owns connection setup; pool configuration comes from `configs`.
pub mod customer;
pub mod db;
pub mod student;
