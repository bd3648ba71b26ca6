//! # Gestão de Roupas
//!
//! Management API for a clothing store (suppliers, customers, garments,
//! orders and order line-items) exposed as a REST service backed by MongoDB.
//!
//! ## Architecture
//!
//! - [`entities`]: typed payload structs for the five resources, plus the
//!   [`entities::Resource`] trait binding each one to its collection and
//!   response messages
//! - [`storage`]: the MongoDB adapter, one [`storage::DataStore`] per
//!   collection, raw `Document` in, JSON out
//! - [`server`]: axum routers, one CRUD router per resource, a filter
//!   endpoint for suppliers and customers, and the reporting routes
//! - [`core`]: error taxonomy, pagination envelope, request extractors
//! - [`config`]: environment-driven startup configuration
//!
//! Requests flow router → store → MongoDB; responses reshape the stored
//! documents so every identifier (including nested ones) is a hex string.

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;
