//! When steps for container lifecycle BDD scenarios.

use super::world::{ContainerWorld, run_async};
use eyre::WrapErr;
use palladio::message::domain::Command;
use rstest_bdd_macros::when;

#[when("the container is initialized")]
fn container_is_initialized(world: &mut ContainerWorld) {
    let container = world.build();
    let result = run_async(container.initialize());
    if result.is_ok() {
        world.bus = container.message_bus().ok();
    }
    world.initialization = Some(result);
}

#[when(r#"the command "{command}" is executed"#)]
fn command_is_executed(world: &mut ContainerWorld, command: String) -> Result<(), eyre::Report> {
    let bus = world
        .bus
        .clone()
        .ok_or_else(|| eyre::eyre!("the container has no message bus"))?;
    let message = Command::named(command);
    let (result, _) = run_async(bus.execute(&message)).wrap_err("execute scenario command")?;
    world.executed = Some((message, result));
    Ok(())
}

#[when("the container is disposed")]
fn container_is_disposed(world: &mut ContainerWorld) -> Result<(), eyre::Report> {
    let container = world.container()?;
    run_async(container.dispose()).wrap_err("dispose scenario container")?;
    Ok(())
}
