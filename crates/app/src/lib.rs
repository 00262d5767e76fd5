//! Composition root for embedding the RacketLab core behind a presentation
//! adapter. The adapter renders state and forwards user intents as typed
//! commands; everything else lives below this crate.

pub mod bootstrap;
pub mod commands;

pub use bootstrap::{bootstrap, init_logging, BootstrapError, RacketLab};
pub use commands::{Command, Outcome};
