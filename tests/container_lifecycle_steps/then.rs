//! Then steps for container lifecycle BDD scenarios.

use super::world::{ContainerWorld, run_async};
use palladio::container::{domain::ContainerState, error::ContainerError};
use palladio::message::{
    domain::{Message, Query},
    error::BusError,
};
use rstest_bdd_macros::then;

#[then("the command result is correlated with the command")]
fn result_is_correlated(world: &ContainerWorld) -> Result<(), eyre::Report> {
    let (command, result) = world
        .executed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no command was executed"))?;
    if result.correlation_id() != Some(command.message_id()) {
        return Err(eyre::eyre!(
            "expected correlation with {}, got {:?}",
            command.message_id(),
            result.correlation_id()
        ));
    }
    Ok(())
}

#[then(r#"the component "{name}" was configured {count:usize} time"#)]
fn component_configured(world: &ContainerWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let configured = world.journal.count(&format!("{name}:configure"));
    if configured != count {
        return Err(eyre::eyre!("expected {count} configuration(s) of {name}, found {configured}"));
    }
    Ok(())
}

#[then(r#"the component "{name}" was disposed {count:usize} time"#)]
fn component_disposed(world: &ContainerWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let disposed = world.journal.count(&format!("{name}:dispose"));
    if disposed != count {
        return Err(eyre::eyre!("expected {count} disposal(s) of {name}, found {disposed}"));
    }
    Ok(())
}

#[then(r#"module "{later}" was disposed before module "{earlier}""#)]
fn module_disposal_order(
    world: &ContainerWorld,
    later: String,
    earlier: String,
) -> Result<(), eyre::Report> {
    let first = world
        .journal
        .position(&format!("{later}:dispose"))
        .ok_or_else(|| eyre::eyre!("module {later} was not disposed"))?;
    let second = world
        .journal
        .position(&format!("{earlier}:dispose"))
        .ok_or_else(|| eyre::eyre!("module {earlier} was not disposed"))?;
    if first >= second {
        return Err(eyre::eyre!(
            "expected {later} to be disposed before {earlier}: {:?}",
            world.journal.entries()
        ));
    }
    let state = world.container()?.state();
    if state != ContainerState::Disposed {
        return Err(eyre::eyre!("expected a disposed container, found {state}"));
    }
    Ok(())
}

#[then("initialization fails with an invalid configuration")]
fn initialization_fails(world: &ContainerWorld) -> Result<(), eyre::Report> {
    let result = world
        .initialization
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the container was not initialized"))?;
    if !matches!(result, Err(ContainerError::ConfigurationInvalid(_))) {
        return Err(eyre::eyre!("expected an invalid configuration, got {result:?}"));
    }
    let state = world.container()?.state();
    if state != ContainerState::Failed {
        return Err(eyre::eyre!("expected a failed container, found {state}"));
    }
    Ok(())
}

#[then(r#"calling the query "{query}" fails with a missing handler error"#)]
fn query_fails_after_dispose(world: &ContainerWorld, query: String) -> Result<(), eyre::Report> {
    let bus = world
        .bus
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the container has no message bus"))?;
    let result = run_async(bus.call(&Query::named(query.clone())));
    match result {
        Err(err @ BusError::HandlerNotFound { .. }) if err.to_string().contains(&query) => Ok(()),
        other => Err(eyre::eyre!("expected a missing handler error, got {other:?}")),
    }
}
