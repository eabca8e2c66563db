//! Service layer exposing boundary-facing CRUD operations over the entities
//! in `models`.
//! - One vertical slice per entity (`customer`, `student`).
//! - Each service delegates to an injected repository; storage details stay
//!   behind the `CrudRepository` trait.
//! - The composition root (an external HTTP layer) constructs services with
//!   a concrete repository and a live `DatabaseConnection`.

pub mod customer;
pub mod errors;
pub mod repository;
pub mod student;
#[cfg(test)]
pub mod test_support;
