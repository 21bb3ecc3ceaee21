//! Card grid paginator.
//!
//! Splits an ordered list of [`ServerRecord`]s into rows of a fixed number of
//! cards and computes the width hint each card gets. Ten percent of the row
//! width is kept back for gutters; the remaining ninety is shared evenly
//! (integer floor) between the columns.

use std::num::NonZeroUsize;

use serde::Serialize;

use crate::error::{InvalidArgumentError, SsmgrError};
use crate::server::ServerRecord;

/// Share of the row width distributed across cards, in percent.
pub const FLEX_BUDGET_PERCENT: u32 = 90;

/// A validated, strictly positive column count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColumnsPerRow(NonZeroUsize);

impl ColumnsPerRow {
    /// Validate a raw column count.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgumentError::ColumnsPerRow`] when `count <= 0`.
    pub fn new(count: i64) -> Result<Self, InvalidArgumentError> {
        usize::try_from(count)
            .ok()
            .and_then(NonZeroUsize::new)
            .map(Self)
            .ok_or(InvalidArgumentError::ColumnsPerRow(count))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Width hint for one card: `floor(90 / columns)`.
    #[must_use]
    pub fn card_flex_percent(self) -> u32 {
        u32::try_from(self.get()).map_or(0, |n| FLEX_BUDGET_PERCENT / n)
    }
}

/// Row-partitioned arrangement of server records for a card grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridLayout {
    pub rows: Vec<Vec<ServerRecord>>,
    pub columns_per_row: usize,
    pub card_flex_percent: u32,
}

impl GridLayout {
    /// Number of records across all rows.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// Lay `servers` out in rows of `columns_per_row` cards.
///
/// # Errors
///
/// Returns [`SsmgrError::InvalidArgument`] when `columns_per_row <= 0`. No
/// partial layout is produced in that case.
pub fn layout(servers: Vec<ServerRecord>, columns_per_row: i64) -> Result<GridLayout, SsmgrError> {
    let columns = ColumnsPerRow::new(columns_per_row)?;
    Ok(layout_with(servers, columns))
}

/// Infallible variant of [`layout`] for an already validated column count.
#[must_use]
pub fn layout_with(servers: Vec<ServerRecord>, columns: ColumnsPerRow) -> GridLayout {
    let width = columns.get();
    let rows = servers.chunks(width).map(<[ServerRecord]>::to_vec).collect();

    GridLayout {
        rows,
        columns_per_row: width,
        card_flex_percent: columns.card_flex_percent(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn server(code: &str) -> ServerRecord {
        ServerRecord::builder()
            .id(code)
            .address(format!("{}.example.net", code.to_lowercase()))
            .port(8388)
            .password("secret")
            .build()
            .unwrap()
    }

    fn servers(count: usize) -> Vec<ServerRecord> {
        (0..count).map(|idx| server(&format!("S{idx}"))).collect()
    }

    fn row_ids(layout: &GridLayout) -> Vec<Vec<&str>> {
        layout
            .rows
            .iter()
            .map(|row| row.iter().map(|rec| rec.id.as_str()).collect())
            .collect()
    }

    #[test]
    fn should_split_three_regions_into_two_rows() {
        let input = vec![server("JP"), server("US"), server("CN")];
        let grid = layout(input, 2).unwrap();

        assert_eq!(row_ids(&grid), vec![vec!["JP", "US"], vec!["CN"]]);
        assert_eq!(grid.columns_per_row, 2);
        assert_eq!(grid.card_flex_percent, 45);
    }

    #[test]
    fn should_return_no_rows_when_input_is_empty() {
        let grid = layout(Vec::new(), 3).unwrap();
        assert!(grid.rows.is_empty());
        assert_eq!(grid.card_flex_percent, 30);
    }

    #[test]
    fn should_place_each_record_on_its_own_row_when_single_column() {
        let grid = layout(servers(5), 1).unwrap();
        assert_eq!(grid.rows.len(), 5);
        assert!(grid.rows.iter().all(|row| row.len() == 1));
        assert_eq!(grid.card_flex_percent, 90);
    }

    #[test]
    fn should_reject_zero_columns() {
        let result = layout(servers(2), 0);
        assert!(matches!(
            result,
            Err(SsmgrError::InvalidArgument(
                InvalidArgumentError::ColumnsPerRow(0)
            ))
        ));
    }

    #[test]
    fn should_reject_negative_columns() {
        let result = layout(servers(2), -4);
        assert!(matches!(
            result,
            Err(SsmgrError::InvalidArgument(
                InvalidArgumentError::ColumnsPerRow(-4)
            ))
        ));
    }

    #[test]
    fn should_preserve_count_order_and_row_widths() {
        for count in 0..12 {
            for columns in 1..7_i64 {
                let input = servers(count);
                let grid = layout(input.clone(), columns).unwrap();
                let width = usize::try_from(columns).unwrap();

                assert_eq!(grid.record_count(), count);
                if let Some((_, full)) = grid.rows.split_last() {
                    assert!(full.iter().all(|row| row.len() == width));
                }
                assert!(grid.rows.iter().all(|row| !row.is_empty()));
                assert_eq!(grid.rows.is_empty(), input.is_empty());

                let flattened: Vec<ServerRecord> = grid.rows.into_iter().flatten().collect();
                assert_eq!(flattened, input);
            }
        }
    }

    #[test]
    fn should_floor_flex_percent_for_every_column_count() {
        for columns in 1..=120_i64 {
            let expected = 90 / u32::try_from(columns).unwrap();
            let grid = layout(Vec::new(), columns).unwrap();
            assert_eq!(grid.card_flex_percent, expected, "columns = {columns}");
        }
    }

    #[test]
    fn should_keep_short_last_row() {
        let grid = layout(servers(7), 3).unwrap();
        let widths: Vec<usize> = grid.rows.iter().map(Vec::len).collect();
        assert_eq!(widths, vec![3, 3, 1]);
    }

    #[test]
    fn should_expose_validated_column_count() {
        let columns = ColumnsPerRow::new(4).unwrap();
        assert_eq!(columns.get(), 4);
        assert_eq!(columns.card_flex_percent(), 22);
        assert_eq!(
            ColumnsPerRow::new(0),
            Err(InvalidArgumentError::ColumnsPerRow(0))
        );
    }
}
