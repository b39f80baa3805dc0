//! Command, query and event envelopes.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{MessageId, MessageKind, MessageName};
use crate::message::error::{BusError, BusResult};

/// Behaviour shared by every message exchanged on a bus.
pub trait Message {
    /// Returns the kind of the message.
    fn kind(&self) -> MessageKind;

    /// Returns the routing name of the message.
    fn name(&self) -> &MessageName;

    /// Returns the payload of the message.
    fn body(&self) -> &Value;

    /// Returns the identifier assigned at construction.
    fn message_id(&self) -> MessageId;

    /// Deserializes the payload into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`BusError::Body`] when the payload does not match `T`.
    fn body_as<T: DeserializeOwned>(&self) -> BusResult<T>
    where
        Self: Sized,
    {
        T::deserialize(self.body()).map_err(BusError::body)
    }
}

/// A message answered by a [`super::ResultMessage`]: a command or a query.
pub trait Request: Message + private::Sealed {}

mod private {
    pub trait Sealed {}
}

macro_rules! envelope {
    ($(#[$meta:meta])* $type:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct $type {
            name: MessageName,
            body: Value,
            message_id: MessageId,
        }

        impl $type {
            /// Creates a message with a fresh identifier.
            #[must_use]
            pub fn new(name: impl Into<MessageName>, body: Value) -> Self {
                Self {
                    name: name.into(),
                    body,
                    message_id: MessageId::new(),
                }
            }

            /// Creates a message without payload.
            #[must_use]
            pub fn named(name: impl Into<MessageName>) -> Self {
                Self::new(name, Value::Null)
            }

            /// Creates a message whose payload is serialized from `body`.
            ///
            /// # Errors
            ///
            /// Returns [`BusError::Body`] when `body` cannot be serialized.
            pub fn with_body<B: Serialize + ?Sized>(
                name: impl Into<MessageName>,
                body: &B,
            ) -> BusResult<Self> {
                let value = serde_json::to_value(body).map_err(BusError::body)?;
                Ok(Self::new(name, value))
            }
        }

        impl Message for $type {
            fn kind(&self) -> MessageKind {
                $kind
            }

            fn name(&self) -> &MessageName {
                &self.name
            }

            fn body(&self) -> &Value {
                &self.body
            }

            fn message_id(&self) -> MessageId {
                self.message_id
            }
        }
    };
}

envelope!(
    /// A request for a state-changing action.
    ///
    /// A command is routed to exactly one handler, which answers with a
    /// result and may emit events.
    ///
    /// # Examples
    ///
    /// ```
    /// use palladio::message::domain::{Command, Message, MessageKind};
    /// use serde_json::json;
    ///
    /// let command = Command::new("CreateOrder", json!({ "sku": "A-1" }));
    /// assert_eq!(command.kind(), MessageKind::Command);
    /// assert_eq!(command.name().as_str(), "CreateOrder");
    /// ```
    Command,
    MessageKind::Command
);

envelope!(
    /// A request for data, answered by exactly one handler.
    Query,
    MessageKind::Query
);

envelope!(
    /// A notification that something happened.
    ///
    /// Events are delivered to zero or more listeners and never return a
    /// value to the publisher.
    Event,
    MessageKind::Event
);

impl private::Sealed for Command {}
impl private::Sealed for Query {}
impl Request for Command {}
impl Request for Query {}
