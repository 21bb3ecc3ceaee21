//! Server grid service — fetch servers and lay them out as cards.

use ssmgr_domain::error::{NotFoundError, SsmgrError};
use ssmgr_domain::grid::{self, ColumnsPerRow, GridLayout};
use ssmgr_domain::id::ServerId;
use ssmgr_domain::server::ServerRecord;

use crate::ports::ServerSource;

/// Application service behind the manager view.
///
/// Holds the column count configured for the console; callers may override
/// it per request.
pub struct ServerGridService<S> {
    source: S,
    default_columns: ColumnsPerRow,
}

impl<S: ServerSource> ServerGridService<S> {
    /// Create a new service reading from `source`.
    pub fn new(source: S, default_columns: ColumnsPerRow) -> Self {
        Self {
            source,
            default_columns,
        }
    }

    /// Column count used when a request does not ask for one.
    pub fn default_columns(&self) -> ColumnsPerRow {
        self.default_columns
    }

    /// Fetch every server and lay them out in rows.
    ///
    /// The column count is validated before the source is queried.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::InvalidArgument`] when `columns` is `Some(n)`
    /// with `n <= 0`, or an error propagated from the source.
    #[tracing::instrument(skip(self))]
    pub async fn grid(&self, columns: Option<i64>) -> Result<GridLayout, SsmgrError> {
        let columns = match columns {
            Some(count) => ColumnsPerRow::new(count)?,
            None => self.default_columns,
        };
        let servers = self.source.list_servers().await?;
        let layout = grid::layout_with(servers, columns);
        tracing::debug!(
            rows = layout.rows.len(),
            records = layout.record_count(),
            "laid out server grid"
        );
        Ok(layout)
    }

    /// List all servers in display order.
    ///
    /// # Errors
    ///
    /// Returns an error propagated from the source.
    pub async fn list_servers(&self) -> Result<Vec<ServerRecord>, SsmgrError> {
        self.source.list_servers().await
    }

    /// Look up a server by code, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SsmgrError::NotFound`] when no server with `id` exists,
    /// or an error from the source.
    #[tracing::instrument(skip(self))]
    pub async fn get_server(&self, id: &ServerId) -> Result<ServerRecord, SsmgrError> {
        self.source.get_server(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Server",
                id: id.to_string(),
            }
            .into()
        })
    }
}
