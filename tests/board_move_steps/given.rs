//! Given steps for drag-and-drop BDD scenarios.

use super::world::{BoardMoveWorld, run_async};
use eyre::WrapErr;
use mondrian::board::domain::{
    BoardGrid, BucketKey, Column, ColumnId, Swimlane, SwimlaneId, TaskCard, TaskId,
};
use mondrian::board::ports::BoardRepository;
use rstest_bdd_macros::given;

#[given("a board with tasks 1, 2 and 3 stacked in the first column")]
fn board_with_stacked_tasks(world: &mut BoardMoveWorld) -> Result<(), eyre::Report> {
    let columns = vec![
        Column::new(ColumnId::new(1).map_err(eyre::Report::new)?, "Backlog")
            .map_err(eyre::Report::new)?,
        Column::new(ColumnId::new(2).map_err(eyre::Report::new)?, "Done")
            .map_err(eyre::Report::new)?,
    ];
    let lanes = vec![Swimlane::new(
        SwimlaneId::new(1).map_err(eyre::Report::new)?,
        "Frontend",
    )];
    let mut grid =
        BoardGrid::new(world.project_id, columns, lanes).map_err(eyre::Report::new)?;

    let bucket = BucketKey::new(
        ColumnId::new(1).map_err(eyre::Report::new)?,
        SwimlaneId::new(1).map_err(eyre::Report::new)?,
    );
    for id in 1..=3u64 {
        let card = TaskCard::new(
            TaskId::new(id).map_err(eyre::Report::new)?,
            format!("Task {id}"),
        )
        .map_err(eyre::Report::new)?;
        grid.place_card(bucket, card).map_err(eyre::Report::new)?;
    }

    run_async(world.boards.save(&grid)).wrap_err("seed board for scenario")?;
    Ok(())
}
