// Platform-independent core modules, mounted as `crate::core` for host tests.
// The main crate is wasm-only, so the sources are included directly.

pub mod animation {
    include!("../../src/core/animation.rs");
}
pub mod config {
    include!("../../src/core/config.rs");
}
pub mod constants {
    include!("../../src/core/constants.rs");
}
pub mod explain {
    include!("../../src/core/explain.rs");
}
pub mod model {
    include!("../../src/core/model.rs");
}
pub mod projection {
    include!("../../src/core/projection.rs");
}
pub mod scene {
    include!("../../src/core/scene.rs");
}

pub use animation::*;
pub use config::*;
pub use explain::*;
pub use model::*;
pub use scene::*;
