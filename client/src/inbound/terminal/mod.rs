//! Plain-text render surface for the command-line client.

mod render;

pub use render::{COMMAND_HINT, render_list};
