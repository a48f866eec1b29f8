pub use error::*;
pub use http::*;
pub use loader::*;
pub use source::*;
pub use wire::*;

mod error;
mod http;
mod loader;
mod source;
mod wire;
