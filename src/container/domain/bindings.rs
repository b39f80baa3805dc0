//! Registration records pairing message names with a handler.
//!
//! Modules register bindings under the well-known handler keys; the
//! container reads them back during initialization and wires every name to
//! the main message bus.

use std::fmt;
use std::sync::Arc;

use crate::message::{
    domain::MessageName,
    ports::{CommandHandler, EventListener, QueryHandler},
};

macro_rules! binding {
    ($(#[$meta:meta])* $type:ident, $handler:ident, $accessor:ident) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $type {
            names: Vec<MessageName>,
            $accessor: Arc<dyn $handler>,
        }

        impl $type {
            /// Creates a binding for a fixed set of names.
            #[must_use]
            pub fn new<I, N>(names: I, $accessor: Arc<dyn $handler>) -> Self
            where
                I: IntoIterator<Item = N>,
                N: Into<MessageName>,
            {
                Self {
                    names: names.into_iter().map(Into::into).collect(),
                    $accessor,
                }
            }

            /// Returns the bound message names.
            #[must_use]
            pub fn names(&self) -> &[MessageName] {
                &self.names
            }

            /// Returns a shared handle to the bound handler.
            #[must_use]
            pub fn $accessor(&self) -> Arc<dyn $handler> {
                Arc::clone(&self.$accessor)
            }
        }

        impl fmt::Debug for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($type))
                    .field("names", &self.names)
                    .finish_non_exhaustive()
            }
        }
    };
}

binding!(
    /// Binds command names to a [`CommandHandler`].
    CommandHandlerBinding,
    CommandHandler,
    handler
);

binding!(
    /// Binds query names to a [`QueryHandler`].
    QueryHandlerBinding,
    QueryHandler,
    handler
);

binding!(
    /// Binds event names to an [`EventListener`].
    EventListenerBinding,
    EventListener,
    listener
);
