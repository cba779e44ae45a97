//! Outbound adapters: HTTP transport and the TMDB catalogue.

pub mod http;
pub mod tmdb;
