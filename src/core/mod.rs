pub mod animation;
pub mod config;
pub mod constants;
pub mod explain;
pub mod model;
pub mod projection;
pub mod scene;

pub use animation::*;
pub use config::*;
pub use explain::*;
pub use model::*;
pub use scene::*;
