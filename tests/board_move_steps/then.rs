//! Then steps for drag-and-drop BDD scenarios.

use super::world::{BoardMoveWorld, DROP_INSTANT_SECS, FixedClock, run_async};
use eyre::WrapErr;
use mockable::Clock;
use mondrian::activity::ports::ActivityRepository;
use mondrian::board::domain::{BucketKey, ColumnId, SwimlaneId};
use mondrian::board::ports::BoardRepository;
use rstest_bdd_macros::then;

fn column_ids(world: &BoardMoveWorld, column_id: u64) -> Result<Vec<u64>, eyre::Report> {
    let grid = run_async(world.boards.load(world.project_id))
        .wrap_err("load board for assertion")?
        .ok_or_else(|| eyre::eyre!("missing board in scenario world"))?;

    let bucket = BucketKey::new(
        ColumnId::new(column_id).map_err(eyre::Report::new)?,
        SwimlaneId::new(1).map_err(eyre::Report::new)?,
    );
    Ok(grid
        .cards_in(bucket)
        .iter()
        .map(|card| card.id().value())
        .collect())
}

fn parse_expected(expected: &str) -> Result<Vec<u64>, eyre::Report> {
    expected
        .split(',')
        .map(|item| {
            item.trim()
                .parse::<u64>()
                .wrap_err("invalid expected id in scenario")
        })
        .collect()
}

fn assert_column_reads(
    world: &BoardMoveWorld,
    column_id: u64,
    expected: &str,
) -> Result<(), eyre::Report> {
    let actual = column_ids(world, column_id)?;
    let wanted = parse_expected(expected)?;
    if actual != wanted {
        return Err(eyre::eyre!(
            "expected column {column_id} to read {wanted:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"the first column reads "{expected}""#)]
fn first_column_reads(world: &BoardMoveWorld, expected: String) -> Result<(), eyre::Report> {
    assert_column_reads(world, 1, &expected)
}

#[then(r#"the second column reads "{expected}""#)]
fn second_column_reads(world: &BoardMoveWorld, expected: String) -> Result<(), eyre::Report> {
    assert_column_reads(world, 2, &expected)
}

#[then("the move is rejected")]
fn move_is_rejected(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_move
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no move was attempted in this scenario"))?;
    if result.is_ok() {
        return Err(eyre::eyre!("expected the move to be rejected"));
    }
    Ok(())
}

#[then("the board reports activity")]
fn board_reports_activity(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let marker = run_async(world.activity.last_modified(world.project_id))
        .wrap_err("read activity marker")?;
    let expected = FixedClock::at(DROP_INSTANT_SECS).utc();
    if marker != Some(expected) {
        return Err(eyre::eyre!(
            "expected the marker at the drop instant, found {marker:?}"
        ));
    }
    Ok(())
}

#[then("the board reports no activity")]
fn board_reports_no_activity(world: &BoardMoveWorld) -> Result<(), eyre::Report> {
    let marker = run_async(world.activity.last_modified(world.project_id))
        .wrap_err("read activity marker")?;
    if marker.is_some() {
        return Err(eyre::eyre!("expected no recorded activity, found {marker:?}"));
    }
    Ok(())
}
