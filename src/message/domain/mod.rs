//! Message value types: envelopes, names, identifiers and results.

mod envelope;
mod ids;
mod kind;
mod name;
mod result;

pub use envelope::{Command, Event, Message, Query, Request};
pub use ids::MessageId;
pub use kind::MessageKind;
pub use name::MessageName;
pub use result::ResultMessage;
