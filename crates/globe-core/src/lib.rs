pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod host;
pub mod markers;
pub mod regions;
pub mod session;
pub mod state;

pub use config::*;
pub use controller::*;
pub use error::*;
pub use host::{CommandBatch, HostCommand, SceneHost};
pub use markers::*;
pub use regions::*;
pub use session::*;
pub use state::*;
