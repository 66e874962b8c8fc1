//! Bulk phone-number cleanup over a grid of cells.

use cardex_core::digits::clean_cell;
use cardex_core::types::CellValue;

/// Which cells of a grid a cleanup applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    All,
    /// Zero-based column indexes.
    Columns(Vec<usize>),
}

impl Selection {
    #[must_use]
    pub fn contains(&self, column: usize) -> bool {
        match self {
            Self::All => true,
            Self::Columns(columns) => columns.contains(&column),
        }
    }
}

/// Result of cleaning a grid.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleanupReport {
    /// The grid with every cleaned cell replaced.
    pub rows: Vec<Vec<CellValue>>,
    /// Number of cells whose text actually changed.
    pub modified: usize,
}

/// ## Summary
/// Strips non-digits from every selected non-blank text cell of `rows`.
///
/// Cells that are blank, already all digits, or not text are kept as they
/// are and not counted. Rows may have different lengths.
#[must_use]
pub fn clean_grid(rows: Vec<Vec<CellValue>>, selection: &Selection) -> CleanupReport {
    let mut modified = 0;

    let rows = rows
        .into_iter()
        .map(|row| {
            row.into_iter()
                .enumerate()
                .map(|(column, cell)| {
                    if !selection.contains(column) {
                        return cell;
                    }
                    match clean_cell(&cell) {
                        Some(cleaned) => {
                            modified += 1;
                            cleaned
                        }
                        None => cell,
                    }
                })
                .collect()
        })
        .collect();

    tracing::debug!(modified, "Cleaned phone cells");

    CleanupReport { rows, modified }
}
