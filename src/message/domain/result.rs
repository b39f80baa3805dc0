//! Results returned by command and query handlers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{Message, MessageId, MessageKind, MessageName, Request};

/// The answer to a command or a query.
///
/// A result created from a request carries the request identifier as its
/// correlation identifier. The bus fills the correlation identifier of an
/// uncorrelated result after dispatch, so callers always receive a result
/// correlated with the request they sent.
///
/// # Examples
///
/// ```
/// use palladio::message::domain::{Message, Query, ResultMessage};
/// use serde_json::json;
///
/// let query = Query::named("FindOrder");
/// let result = ResultMessage::create(&query, json!({ "id": 7 }));
/// assert_eq!(result.correlation_id(), Some(query.message_id()));
/// assert_eq!(result.name(), query.name());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMessage {
    name: MessageName,
    body: Value,
    message_id: MessageId,
    correlation_id: Option<MessageId>,
}

impl ResultMessage {
    /// Creates an uncorrelated result.
    #[must_use]
    pub fn new(name: impl Into<MessageName>, body: Value) -> Self {
        Self {
            name: name.into(),
            body,
            message_id: MessageId::new(),
            correlation_id: None,
        }
    }

    /// Creates a result correlated with `request` and named after it.
    #[must_use]
    pub fn create<R: Request>(request: &R, body: Value) -> Self {
        Self {
            correlation_id: Some(request.message_id()),
            ..Self::new(request.name(), body)
        }
    }

    /// Creates a correlated result without payload.
    #[must_use]
    pub fn empty<R: Request>(request: &R) -> Self {
        Self::create(request, Value::Null)
    }

    /// Returns the identifier of the request this result answers.
    #[must_use]
    pub const fn correlation_id(&self) -> Option<MessageId> {
        self.correlation_id
    }

    pub(crate) fn correlate_with(&mut self, request: MessageId) {
        self.correlation_id.get_or_insert(request);
    }
}

impl Message for ResultMessage {
    fn kind(&self) -> MessageKind {
        MessageKind::Result
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
