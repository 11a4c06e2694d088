pub mod actions;
pub mod config;
pub mod status;

pub use actions::*;
pub use config::*;
pub use status::*;
