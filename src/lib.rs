//! Linear data structures built from individually allocated, owned nodes.
//!
//! Every container reports misuse, such as popping from an empty container or
//! indexing past its end, through [`Error`] instead of panicking.

#![deny(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod collections;
pub mod error;

pub use error::{Error, Result};

/// Structures Prelude
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::collections::prelude::*;

    #[doc(no_inline)]
    pub use crate::error::Error;
}
