// Public library interface for integration tests and the binary.
pub mod app;
pub mod cli;
pub mod core;
pub mod input;
pub mod launch;
pub mod runtime;
pub mod store;
pub mod trace;
pub mod ui;

pub use app::App;
