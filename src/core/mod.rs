//! Core request/response binding

pub mod blocking;
pub mod client;
pub mod config;
pub mod errors;
pub mod language;
pub mod models;
pub mod pending;
pub mod request;
