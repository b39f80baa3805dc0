//! Recording handlers and listeners shared by the bus tests.

use std::sync::{Arc, Mutex, Weak};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::message::adapters::local::LocalMessageBus;
use crate::message::domain::{Command, Event, Message, MessageName, Query, ResultMessage};
use crate::message::error::{BusError, BusResult};
use crate::message::ports::{
    CommandHandler, CommandOutcome, EventListener, MessageBus, QueryHandler,
};

#[derive(Debug, Error)]
#[error("{0}")]
pub(super) struct Boom(pub(super) &'static str);

#[derive(Debug, Clone, Default)]
pub(super) struct Journal(Arc<Mutex<Vec<String>>>);

impl Journal {
    pub(super) fn push(&self, entry: String) {
        self.0.lock().expect("journal lock").push(entry);
    }

    pub(super) fn entries(&self) -> Vec<String> {
        self.0.lock().expect("journal lock").clone()
    }
}

/// Records `label:event` for every delivery.
pub(super) struct Recorder {
    label: &'static str,
    journal: Journal,
    delay: Option<Duration>,
    failure: Option<&'static str>,
}

impl Recorder {
    pub(super) fn new(label: &'static str, journal: &Journal) -> Arc<Self> {
        Arc::new(Self {
            label,
            journal: journal.clone(),
            delay: None,
            failure: None,
        })
    }

    pub(super) fn slow(label: &'static str, journal: &Journal, delay: Duration) -> Arc<Self> {
        Arc::new(Self {
            label,
            journal: journal.clone(),
            delay: Some(delay),
            failure: None,
        })
    }

    pub(super) fn failing(label: &'static str, journal: &Journal, reason: &'static str) -> Arc<Self> {
        Arc::new(Self {
            label,
            journal: journal.clone(),
            delay: None,
            failure: Some(reason),
        })
    }
}

#[async_trait]
impl EventListener for Recorder {
    async fn listen(&self, event: &Event) -> BusResult<()> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.journal.push(format!("{}:{}", self.label, event.name()));
        match self.failure {
            Some(reason) => Err(BusError::handler(Boom(reason))),
            None => Ok(()),
        }
    }
}

/// Publishes the event it receives again, from inside its own delivery.
pub(super) struct Republisher {
    pub(super) bus: Weak<LocalMessageBus>,
    pub(super) journal: Journal,
}

#[async_trait]
impl EventListener for Republisher {
    async fn listen(&self, event: &Event) -> BusResult<()> {
        self.journal.push(format!("republisher:{}", event.name()));
        if let Some(bus) = self.bus.upgrade() {
            bus.publish(&[Event::named(event.name())]).await?;
        }
        Ok(())
    }
}

/// Registers `late` under the delivered event name on its first delivery.
pub(super) struct Subscriber {
    pub(super) bus: Weak<LocalMessageBus>,
    pub(super) late: Arc<dyn EventListener>,
    pub(super) journal: Journal,
}

#[async_trait]
impl EventListener for Subscriber {
    async fn listen(&self, event: &Event) -> BusResult<()> {
        self.journal.push(format!("subscriber:{}", event.name()));
        if let Some(bus) = self.bus.upgrade()
            && bus.listener_count(event.name()) == 1
        {
            bus.on(event.name().clone(), Arc::clone(&self.late));
        }
        Ok(())
    }
}

/// Answers with an uncorrelated result and emits the configured events.
pub(super) struct Emitter {
    pub(super) events: Vec<MessageName>,
}

#[async_trait]
impl CommandHandler for Emitter {
    async fn handle(&self, command: &Command) -> BusResult<CommandOutcome> {
        let events = self.events.iter().map(Event::named).collect();
        Ok((ResultMessage::new(command.name(), Value::Bool(true)), events))
    }
}

/// Echoes the query body in an uncorrelated result.
pub(super) struct Echo;

#[async_trait]
impl QueryHandler for Echo {
    async fn handle(&self, query: &Query) -> BusResult<ResultMessage> {
        Ok(ResultMessage::new(query.name(), query.body().clone()))
    }
}

/// Always fails.
pub(super) struct Broken;

#[async_trait]
impl QueryHandler for Broken {
    async fn handle(&self, _query: &Query) -> BusResult<ResultMessage> {
        Err(BusError::handler(Boom("query failed")))
    }
}
