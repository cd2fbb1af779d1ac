//! HTTP Handlers

mod tts;
mod usage;
mod voices;

pub use tts::*;
pub use usage::*;
pub use voices::*;
