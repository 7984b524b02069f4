//! Bridge module - page wiring between the browser and the client logic
//!
//! Re-exports only in mod.rs, logic in submodules.

mod handlers;
mod session;

pub use handlers::launch;
