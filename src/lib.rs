// Core game logic modules
pub mod core;

// Persistence
pub mod storage;

// Services (pure game rules and display helpers)
pub mod services;

// Runtime configuration
pub mod config;

// API models (requests/responses)
pub mod models;

// HTTP routes
pub mod routes;

// Application state
pub mod state;
