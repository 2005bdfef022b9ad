#![allow(clippy::module_inception, clippy::redundant_field_names, clippy::upper_case_acronyms)]

pub use bind::Bind;

pub use knock::Knock;
pub use knock::Knocker;
pub use knock::Outcome;
pub use knock::Probe;
pub use knock::Protocol;
pub use knock::Sockets;
pub use knock::Transport;

pub use payload::DecodeError;
pub use payload::Payload;
pub use payload::Source;

pub use report::Report;

pub use target::Targets;

pub mod knock;
pub mod payload;
pub mod report;

mod bind;
mod target;
