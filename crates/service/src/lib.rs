//! Service layer providing CRUD operations for pigs, wolves and houses on top of `models`.
//! - Separates persistence calls from the HTTP handlers.
//! - Reuses entity definitions in the `models` crate.
//! - Reports absent rows as `ServiceError::NotFound` and everything else as `ServiceError::Db`.

pub mod errors;
pub mod pig_service;
pub mod wolf_service;
pub mod house_service;
#[cfg(test)]
pub mod test_support;
