//! Incremental list loading.
//!
//! [`ListState`] is a plain value advanced by [`reduce`]; the
//! [`MovieListController`] pairs it with the injected query port and runs the
//! request/complete cycle for one list view.

mod controller;
mod state;

pub use controller::{MovieListController, PendingLoad};
pub use state::{
    Generation, ListEvent, ListOperation, ListPhase, ListState, LoadMode, LoadRequest, reduce,
};
