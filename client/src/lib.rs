//! Popular movies client library.
//!
//! The crate is split along hexagonal lines: `domain` holds the movie entity,
//! the repository and query ports, and the page-fetch use case; `outbound`
//! talks to the TMDB catalogue over HTTP; `inbound` owns the list
//! accumulation state machine, the display projection, and the terminal
//! render surface. `config` and `wiring` assemble the graph at the binary
//! boundary.

pub mod config;
pub mod domain;
pub mod inbound;
pub mod outbound;
pub mod wiring;
