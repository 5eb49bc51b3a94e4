//! Network modules for HTTP calls to the server.

pub mod api;
