//! When steps for drag-and-drop BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use mondrian::board::services::MoveRequest;
use rstest_bdd_macros::when;

#[when("task {task_id:u64} is dropped on column {column_id:u64} at position {rank:u64}")]
fn drop_task(
    world: &mut BoardMoveWorld,
    task_id: u64,
    column_id: u64,
    rank: u64,
) -> Result<(), eyre::Report> {
    let request = MoveRequest::from_raw(world.project_id.value(), task_id, column_id, rank, 1)
        .map_err(eyre::Report::new)?;
    let result = run_async(world.service.move_card(request));
    world.last_move = Some(result);
    Ok(())
}
