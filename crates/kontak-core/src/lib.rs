//! Core types and trait definitions for the Kontak contact store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod contact;
pub mod phone;
pub mod session;
pub mod store;
pub mod suffix;
pub mod validate;

pub use contact::{Contact, NewContact};
pub use session::AdminSession;
pub use store::ContactStore;
pub use suffix::{NewSuffix, Suffix, SuffixPatch};
pub use validate::{FieldError, ValidationError};
