//! `PostgreSQL` repository implementation for board placement storage.

use super::{
    models::{CardPlacementChangeset, CardRow, ColumnRow, SwimlaneRow},
    schema::{board_cards, board_columns, board_swimlanes},
};
use crate::board::{
    domain::{
        BoardGrid, BucketKey, Column, ColumnId, ProjectId, Swimlane, SwimlaneId, TaskCard, TaskId,
    },
    ports::{BoardRepository, BoardRepositoryError, BoardRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::Error as DieselError;

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

// Required by `diesel`'s transaction API so rollback failures surface as
// repository errors.
impl From<DieselError> for BoardRepositoryError {
    fn from(err: DieselError) -> Self {
        Self::persistence(err)
    }
}

/// `PostgreSQL`-backed board repository.
#[derive(Debug, Clone)]
pub struct PostgresBoardRepository {
    pool: BoardPgPool,
}

impl PostgresBoardRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> BoardRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(BoardRepositoryError::persistence)?
    }
}

#[async_trait]
impl BoardRepository for PostgresBoardRepository {
    async fn load(&self, project_id: ProjectId) -> BoardRepositoryResult<Option<BoardGrid>> {
        let db_project = db_id(project_id.value())?;
        self.run_blocking(move |connection| {
            // Repeatable read keeps the three queries on one snapshot, so
            // a concurrent move can never be observed mid-renumber.
            connection
                .build_transaction()
                .repeatable_read()
                .read_only()
                .run(|transaction| load_grid(transaction, project_id, db_project))
        })
        .await
    }

    async fn save(&self, grid: &BoardGrid) -> BoardRepositoryResult<()> {
        let db_project = db_id(grid.project_id().value())?;
        let placements = grid
            .iter()
            .map(|(bucket, card)| placement_row(bucket, card))
            .collect::<BoardRepositoryResult<Vec<_>>>()?;

        self.run_blocking(move |connection| {
            connection.transaction(|transaction| {
                for (card_id, changeset) in &placements {
                    let updated = diesel::update(
                        board_cards::table
                            .filter(board_cards::id.eq(*card_id))
                            .filter(board_cards::project_id.eq(db_project)),
                    )
                    .set(changeset)
                    .execute(transaction)
                    .map_err(BoardRepositoryError::persistence)?;

                    if updated == 0 {
                        return Err(BoardRepositoryError::Corrupt(format!(
                            "card {card_id} is on the grid but missing from storage"
                        )));
                    }
                }
                Ok(())
            })
        })
        .await
    }
}

fn load_grid(
    connection: &mut PgConnection,
    project_id: ProjectId,
    db_project: i64,
) -> BoardRepositoryResult<Option<BoardGrid>> {
    let column_rows = board_columns::table
        .filter(board_columns::project_id.eq(db_project))
        .order(board_columns::ordinal.asc())
        .select(ColumnRow::as_select())
        .load::<ColumnRow>(connection)
        .map_err(BoardRepositoryError::persistence)?;

    if column_rows.is_empty() {
        return Ok(None);
    }

    let swimlane_rows = board_swimlanes::table
        .filter(board_swimlanes::project_id.eq(db_project))
        .order(board_swimlanes::ordinal.asc())
        .select(SwimlaneRow::as_select())
        .load::<SwimlaneRow>(connection)
        .map_err(BoardRepositoryError::persistence)?;

    let card_rows = board_cards::table
        .filter(board_cards::project_id.eq(db_project))
        .order((
            board_cards::column_id.asc(),
            board_cards::swimlane_id.asc(),
            board_cards::position.asc(),
        ))
        .select(CardRow::as_select())
        .load::<CardRow>(connection)
        .map_err(BoardRepositoryError::persistence)?;

    assemble_grid(project_id, column_rows, swimlane_rows, card_rows).map(Some)
}

/// Rebuilds the grid aggregate from ordered storage rows.
///
/// Cards are appended in stored rank order, which renumbers them
/// `1..=len` as they land; a bucket persisted with gaps (by older
/// software or manual edits) heals on the next load.
fn assemble_grid(
    project_id: ProjectId,
    column_rows: Vec<ColumnRow>,
    swimlane_rows: Vec<SwimlaneRow>,
    card_rows: Vec<CardRow>,
) -> BoardRepositoryResult<BoardGrid> {
    let columns = column_rows
        .into_iter()
        .map(row_to_column)
        .collect::<BoardRepositoryResult<Vec<_>>>()?;
    let swimlanes = swimlane_rows
        .into_iter()
        .map(row_to_swimlane)
        .collect::<BoardRepositoryResult<Vec<_>>>()?;

    let mut grid = BoardGrid::new(project_id, columns, swimlanes).map_err(corrupt)?;
    for row in card_rows {
        let (bucket, card) = row_to_card(row)?;
        grid.place_card(bucket, card).map_err(corrupt)?;
    }
    Ok(grid)
}

fn row_to_column(row: ColumnRow) -> BoardRepositoryResult<Column> {
    let id = ColumnId::new(domain_id(row.id)?).map_err(corrupt)?;
    Column::new(id, row.title).map_err(corrupt)
}

fn row_to_swimlane(row: SwimlaneRow) -> BoardRepositoryResult<Swimlane> {
    let id = SwimlaneId::new(domain_id(row.id)?).map_err(corrupt)?;
    Ok(Swimlane::new(id, row.name))
}

fn row_to_card(row: CardRow) -> BoardRepositoryResult<(BucketKey, TaskCard)> {
    let task_id = TaskId::new(domain_id(row.id)?).map_err(corrupt)?;
    let bucket = BucketKey::new(
        ColumnId::new(domain_id(row.column_id)?).map_err(corrupt)?,
        SwimlaneId::new(domain_id(row.swimlane_id)?).map_err(corrupt)?,
    );

    let mut card = TaskCard::new(task_id, row.title)
        .map_err(corrupt)?
        .with_tags(row.tags);
    if let Some(text) = row.description {
        card = card.with_description(text);
    }
    if let Some(name) = row.assignee {
        card = card.with_assignee(name);
    }
    if let Some(value) = row.color {
        card = card.with_color(value);
    }
    if let Some(date) = row.due_date {
        card = card.with_due_date(date);
    }
    Ok((bucket, card))
}

fn placement_row(
    bucket: BucketKey,
    card: &TaskCard,
) -> BoardRepositoryResult<(i64, CardPlacementChangeset)> {
    let card_id = db_id(card.id().value())?;
    let changeset = CardPlacementChangeset {
        column_id: db_id(bucket.column_id().value())?,
        swimlane_id: db_id(bucket.swimlane_id().value())?,
        position: db_position(card.position().get())?,
    };
    Ok((card_id, changeset))
}

fn db_id(value: u64) -> BoardRepositoryResult<i64> {
    i64::try_from(value)
        .map_err(|_| BoardRepositoryError::Corrupt(format!("identifier {value} exceeds BIGINT")))
}

fn domain_id(value: i64) -> BoardRepositoryResult<u64> {
    u64::try_from(value)
        .map_err(|_| BoardRepositoryError::Corrupt(format!("negative identifier {value} in storage")))
}

fn db_position(value: usize) -> BoardRepositoryResult<i32> {
    i32::try_from(value)
        .map_err(|_| BoardRepositoryError::Corrupt(format!("position {value} exceeds INTEGER")))
}

fn corrupt(err: impl std::error::Error) -> BoardRepositoryError {
    BoardRepositoryError::Corrupt(err.to_string())
}
