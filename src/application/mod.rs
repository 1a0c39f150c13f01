// src/application/mod.rs
//
// Application Layer - composition root for embedding frontends

pub mod state;

pub use state::AppState;
