pub use knock::Knock;
pub use knock::Knocker;
pub use outcome::Outcome;
pub use probe::Probe;
pub use probe::Protocol;
pub use sock::Sockets;
pub use sock::Transport;

mod knock;
mod outcome;
mod probe;
mod sock;
