//! Output generation for fetched search responses.
//!
//! One submodule, one concern:
//!
//! - [`json`]: writes the opaque search response to `output.json`

pub mod json;
