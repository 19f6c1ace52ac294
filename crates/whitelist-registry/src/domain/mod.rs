pub mod derivation;
pub mod entities;
pub mod errors;
pub mod guard;
pub mod registry;

pub use derivation::*;
pub use entities::*;
pub use errors::*;
pub use guard::*;
pub use registry::*;
