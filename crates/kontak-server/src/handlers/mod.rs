//! Request handlers, grouped by resource.

pub mod contacts;
pub mod exports;
pub mod session;
pub mod stats;
pub mod suffixes;
