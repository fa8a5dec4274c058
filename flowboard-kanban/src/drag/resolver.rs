//! Drop-zone resolution: which column and which slot the pointer targets.
//!
//! Everything here is a pure function of the pointer position and measured
//! geometry, linear in the number of cards of the hovered column, so it is
//! cheap enough to run on every pointer move.

use super::layout::{BoardLayout, ColumnLayout};
use crate::types::{Status, TaskId};
use serde::{Deserialize, Serialize};

/// The (column, insertion index) pair a drag currently resolves to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropTarget {
    pub column: Status,
    /// Slot among the column's cards, with the dragged card left out
    pub insert_index: usize,
}

/// Insertion index for a pointer over a column.
///
/// `midpoints` are card vertical midpoints relative to `column_origin_y`, in
/// display order. Returns the index of the first card whose midpoint is at or
/// below the pointer (a pointer exactly on a midpoint inserts before that
/// card), or `midpoints.len()` when the pointer is below every card.
pub fn resolve_insert_index(pointer_y: f64, column_origin_y: f64, midpoints: &[f64]) -> usize {
    let relative = pointer_y - column_origin_y;
    midpoints
        .iter()
        .position(|&mid| relative <= mid)
        .unwrap_or(midpoints.len())
}

/// Card midpoints of a column relative to its origin, skipping `exclude`
pub fn card_midpoints(column: &ColumnLayout, exclude: Option<&TaskId>) -> Vec<f64> {
    column
        .cards
        .iter()
        .filter(|card| Some(&card.task_id) != exclude)
        .map(|card| card.midpoint_from(column.origin_y))
        .collect()
}

/// Column under the pointer, as an index into `column_count` equal-width columns.
///
/// `None` when the pointer is left or right of the board, or when the board
/// has no width or no columns.
pub fn resolve_column_index(
    pointer_x: f64,
    board_origin_x: f64,
    board_width: f64,
    column_count: usize,
) -> Option<usize> {
    if column_count == 0 || board_width <= 0.0 || !board_width.is_finite() {
        return None;
    }

    let column_width = board_width / column_count as f64;
    let index = ((pointer_x - board_origin_x) / column_width).floor();
    if !index.is_finite() || index < 0.0 || index >= column_count as f64 {
        return None;
    }
    Some(index as usize)
}

/// Full drop target for a pointer position, or `None` when the pointer is
/// outside the board horizontally.
pub fn resolve_drop_target(
    layout: &BoardLayout,
    pointer_x: f64,
    pointer_y: f64,
    dragged: Option<&TaskId>,
) -> Option<DropTarget> {
    let index = resolve_column_index(
        pointer_x,
        layout.origin_x,
        layout.width,
        layout.column_count(),
    )?;
    let column = &layout.columns[index];
    let midpoints = card_midpoints(column, dragged);

    Some(DropTarget {
        column: column.status,
        insert_index: resolve_insert_index(pointer_y, column.origin_y, &midpoints),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drag::layout::ColumnLayout;

    #[test]
    fn test_empty_column_is_always_zero() {
        assert_eq!(resolve_insert_index(-50.0, 0.0, &[]), 0);
        assert_eq!(resolve_insert_index(500.0, 0.0, &[]), 0);
    }

    #[test]
    fn test_boundaries() {
        let mids = [20.0, 60.0, 100.0];
        assert_eq!(resolve_insert_index(100.0, 100.0, &mids), 0);
        assert_eq!(resolve_insert_index(105.0, 100.0, &mids), 0);
        assert_eq!(resolve_insert_index(150.0, 100.0, &mids), 1);
        assert_eq!(resolve_insert_index(180.0, 100.0, &mids), 2);
        assert_eq!(resolve_insert_index(900.0, 100.0, &mids), 3);
    }

    #[test]
    fn test_tie_inserts_before_card() {
        let mids = [20.0, 60.0];
        assert_eq!(resolve_insert_index(60.0, 0.0, &mids), 1);
        assert_eq!(resolve_insert_index(60.5, 0.0, &mids), 2);
    }

    #[test]
    fn test_dragged_card_is_excluded() {
        let column = ColumnLayout::stacked(Status::Todo, 0.0, 40.0, ["a", "b", "c"]);
        let a: TaskId = "a".into();

        let mids = card_midpoints(&column, Some(&a));
        assert_eq!(mids, vec![60.0, 100.0]);

        // Pointer over a's old spot: first remaining card is below, so slot 0
        assert_eq!(resolve_insert_index(20.0, 0.0, &mids), 0);
        assert_eq!(resolve_insert_index(500.0, 0.0, &mids), 2);
    }

    #[test]
    fn test_column_with_only_dragged_card_behaves_as_empty() {
        let column = ColumnLayout::stacked(Status::Done, 0.0, 40.0, ["only"]);
        let only: TaskId = "only".into();
        let mids = card_midpoints(&column, Some(&only));
        assert!(mids.is_empty());
        assert_eq!(resolve_insert_index(1000.0, 0.0, &mids), 0);
    }

    #[test]
    fn test_column_index() {
        assert_eq!(resolve_column_index(0.0, 0.0, 300.0, 3), Some(0));
        assert_eq!(resolve_column_index(99.9, 0.0, 300.0, 3), Some(0));
        assert_eq!(resolve_column_index(100.0, 0.0, 300.0, 3), Some(1));
        assert_eq!(resolve_column_index(299.0, 0.0, 300.0, 3), Some(2));
        assert_eq!(resolve_column_index(300.0, 0.0, 300.0, 3), None);
        assert_eq!(resolve_column_index(-1.0, 0.0, 300.0, 3), None);
        assert_eq!(resolve_column_index(150.0, 50.0, 300.0, 3), Some(1));
    }

    #[test]
    fn test_column_index_respects_column_count() {
        assert_eq!(resolve_column_index(150.0, 0.0, 400.0, 4), Some(1));
        assert_eq!(resolve_column_index(150.0, 0.0, 400.0, 2), Some(0));
        assert_eq!(resolve_column_index(150.0, 0.0, 400.0, 0), None);
        assert_eq!(resolve_column_index(150.0, 0.0, 0.0, 3), None);
    }

    #[test]
    fn test_resolve_drop_target() {
        let layout = BoardLayout::new(
            0.0,
            300.0,
            vec![
                ColumnLayout::stacked(Status::Todo, 0.0, 40.0, ["a", "b"]),
                ColumnLayout::stacked(Status::InProgress, 0.0, 40.0, ["c"]),
                ColumnLayout::new(Status::Done, 0.0),
            ],
        );

        let target = resolve_drop_target(&layout, 150.0, 5.0, None).unwrap();
        assert_eq!(target.column, Status::InProgress);
        assert_eq!(target.insert_index, 0);

        let target = resolve_drop_target(&layout, 250.0, 5.0, None).unwrap();
        assert_eq!(target, DropTarget { column: Status::Done, insert_index: 0 });

        assert!(resolve_drop_target(&layout, 400.0, 5.0, None).is_none());
    }
}
