//! Shared plumbing for the `rfx-decode` and `rfx-encode` tools.

pub mod frames;
pub mod logging;
