// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Sits above the domain and the services
// - Read-side projections (DTOs) for the query layer
// - Error translation for whatever transport embeds this crate

pub mod dto;
pub mod error_handling;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
