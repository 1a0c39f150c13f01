// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod browse_service;
pub mod import_service;
pub mod set_service;

#[cfg(test)]
mod import_service_tests;

// Re-export all services and their types
pub use browse_service::BrowseService;

pub use import_service::ImportService;

pub use set_service::{CreateSetRequest, SetService};
