//! Composition rules for the quark merging toy.
//!
//! Nothing in here touches the DOM: the web frontend feeds compositions and
//! element centres in, and renders whatever comes back out.

pub mod board;
pub mod composition;
pub mod constants;
pub mod error;
pub mod label;
pub mod proximity;
pub mod registry;
pub mod resolver;

pub use board::*;
pub use composition::*;
pub use constants::*;
pub use error::*;
pub use label::*;
pub use proximity::*;
pub use registry::*;
pub use resolver::*;
