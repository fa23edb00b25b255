//! Shared building blocks for the item store workspace.
//!
//! Holds the wire types every HTTP surface returns verbatim and the
//! tracing initialisation used by the binary and the server crate.

pub mod types;
pub mod utils;
