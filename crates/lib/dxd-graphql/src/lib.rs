//! GraphQL wire layer for the DXD content service.
//!
//! This crate defines the response data model shared by the projector and
//! content tools, the fixed query template library, and the HTTP transport
//! (with OAuth2 client-credentials auth) that executes those templates.

pub mod auth;
pub mod client;
pub mod queries;
pub mod types;

pub use client::{GraphQlTransport, HttpGraphQlClient, TransportError};
pub use queries::QueryTemplate;
