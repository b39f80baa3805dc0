//! Behaviour tests for the container lifecycle.

mod container_lifecycle_steps;

use container_lifecycle_steps::world::{ContainerWorld, world};
use rstest_bdd_macros::scenario;

#[scenario(
    path = "tests/features/container_lifecycle.feature",
    name = "Modules wire handlers and components"
)]
#[tokio::test(flavor = "multi_thread")]
async fn modules_wire_handlers_and_components(world: ContainerWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/container_lifecycle.feature",
    name = "Missing main services fail validation"
)]
#[tokio::test(flavor = "multi_thread")]
async fn missing_main_services_fail_validation(world: ContainerWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/container_lifecycle.feature",
    name = "Disposed containers stop answering queries"
)]
#[tokio::test(flavor = "multi_thread")]
async fn disposed_containers_stop_answering_queries(world: ContainerWorld) {
    let _ = world;
}
