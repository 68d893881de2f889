/// Repository pattern implementation for the client store
///
/// Handlers depend on the `ClientRepository` trait, not the concrete
/// diesel-backed type.

pub mod client_repository;

pub use client_repository::{ClientRepository, ClientRepositoryImpl};
