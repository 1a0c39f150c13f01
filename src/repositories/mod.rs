// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO business logic
// - NO invariant enforcement
// - NO cross-repository calls
// - Serialization format never leaks to callers

pub mod set_repository;

pub use set_repository::{KvSetRepository, SetRepository};

#[cfg(test)]
pub use set_repository::MockSetRepository;
