//! Service layer for stronghold
//!
//! Validates requests and turns them into storage calls and print plans for the
//! HTTP and CLI front ends.

#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]

mod draft;
mod error;
mod set_service;

pub use draft::{CardDraft, SetDraft};
pub use error::ServiceError;
pub use set_service::SetService;
