//! bookshelf - an in-memory book catalog with a REST API
//!
//! The catalog holds book records for the lifetime of the process and
//! serves create, list, detail, update and delete over HTTP with
//! localized response envelopes.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod observability;
