//! Given steps for container lifecycle BDD scenarios.

use super::world::{Binding, ContainerWorld};
use rstest_bdd_macros::given;

#[given(r#"a module "{name}" binding a command handler for "{command}""#)]
fn module_binding_command_handler(world: &mut ContainerWorld, name: String, command: String) {
    world.add_module(name, Binding::CommandHandler(command));
}

#[given(r#"a module "{name}" binding a query handler for "{query}""#)]
fn module_binding_query_handler(world: &mut ContainerWorld, name: String, query: String) {
    world.add_module(name, Binding::QueryHandler(query));
}

#[given(r#"a module "{name}" binding a component "{component}""#)]
fn module_binding_component(world: &mut ContainerWorld, name: String, component: String) {
    world.add_module(name, Binding::Component(component));
}

#[given("a container without infrastructure")]
fn container_without_infrastructure(world: &mut ContainerWorld) {
    world.with_infrastructure = false;
}
