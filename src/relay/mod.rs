pub mod classifier;
mod executor;
pub mod interpreter;
mod types;

pub use classifier::classify;
pub use executor::{GENERIC_ERROR_MESSAGE, Relay};
pub use interpreter::interpret;
pub use types::{InboundMessage, MessageKind, OutboundAction, Replier};
