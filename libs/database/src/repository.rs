//! Soft-delete aware query helpers shared by the Postgres repositories.
//!
//! Each domain entity implements [`SoftDelete`] to expose its id and
//! `deleted_at` columns, and its search enum implements [`FilterColumn`] to
//! map search fields onto columns. [`BaseRepository`] then builds the common
//! queries: live rows only, by-id lookups with or without trashed rows, and
//! id-ordered pagination.

use sea_orm::sea_query::Expr;
use sea_orm::{
    ColumnTrait, ColumnType, DatabaseConnection, DbErr, EntityName, EntityTrait, IdenStatic, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};
use std::marker::PhantomData;
use uuid::Uuid;

use crate::pagination::{Page, PageRequest};
use crate::search::{Filter, SearchField};

/// An entity whose rows are hidden, not removed, by a `deleted_at` timestamp.
pub trait SoftDelete: EntityTrait {
    fn id_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
}

/// Maps a search field onto the column it filters.
pub trait FilterColumn<E: EntityTrait> {
    fn column(&self) -> E::Column;
}

/// Narrows `select` with one `CAST(col AS TEXT) ILIKE '%value%'` per filter.
///
/// Boolean columns go through `INT` first so they read as `1`/`0`, the same
/// text [`crate::search::flag_text`] gives in memory. The value is bound as a
/// parameter but `%`/`_` are not escaped.
pub fn apply_filters<E, F>(select: Select<E>, filters: &[Filter<F>]) -> Select<E>
where
    E: EntityTrait,
    F: SearchField + FilterColumn<E>,
{
    let table = E::default().table_name().to_owned();
    filters.iter().fold(select, |select, filter| {
        let column = filter.field.column();
        let qualified = format!(r#""{table}"."{}""#, column.as_str());
        let text = match column.def().get_column_type() {
            ColumnType::Boolean => format!("CAST(CAST({qualified} AS INT) AS TEXT)"),
            _ => format!("CAST({qualified} AS TEXT)"),
        };
        select.filter(Expr::cust_with_values(
            format!("{text} ILIKE $1"),
            [format!("%{}%", filter.value)],
        ))
    })
}

pub struct BaseRepository<E> {
    db: DatabaseConnection,
    _entity: PhantomData<E>,
}

impl<E> Clone for BaseRepository<E> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E> BaseRepository<E>
where
    E: SoftDelete,
    E::Model: Sync,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Rows that have not been soft-deleted, ordered by id.
    pub fn live(&self) -> Select<E> {
        E::find()
            .filter(E::deleted_at_column().is_null())
            .order_by_asc(E::id_column())
    }

    pub fn live_by_id(&self, id: Uuid) -> Select<E> {
        self.live().filter(E::id_column().eq(id))
    }

    pub async fn find_live(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        self.live_by_id(id).one(&self.db).await
    }

    /// Looks a row up regardless of its `deleted_at`.
    pub async fn find_with_trashed(&self, id: Uuid) -> Result<Option<E::Model>, DbErr> {
        E::find()
            .filter(E::id_column().eq(id))
            .one(&self.db)
            .await
    }

    /// Fetches one 1-indexed page of `select`.
    pub async fn fetch_page(
        &self,
        select: Select<E>,
        request: PageRequest,
    ) -> Result<Page<E::Model>, DbErr> {
        let paginator = select.paginate(&self.db, request.per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(request.page.saturating_sub(1)).await?;
        Ok(Page::new(items, total, request))
    }
}
