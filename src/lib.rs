// HTTP server modules
pub mod cors;
pub mod handlers;
pub mod models;
pub mod routes;

// Request handling core
pub mod error;
pub mod gateway;
pub mod personas;

// Process setup
pub mod config;
pub mod logging;

// LLM abstraction layer
pub mod llm;
