pub mod config;
pub mod error;
pub mod feedback;
pub mod pipeline;
pub mod schemas;
pub mod server;
pub mod tools;

// Load env from a simple, standardized location resolution.
// This uses dotenvy::dotenv() which loads .env if present and silently ignores if missing.
pub fn load_env() {
    let _ = dotenvy::dotenv();
}
