//! End-to-end tests for bulk range edits (fill -> format -> inspect)

use pretty_assertions::assert_eq;
use quill_sheets::prelude::*;

/// Test filling and formatting a block through a mutable range view
#[test]
fn test_fill_and_format_block() {
    let mut wb = Workbook::new();
    let banner = wb.styles_mut().cell_formats_mut().create();

    let sheet = wb.worksheet_mut(0).unwrap();
    {
        let mut block = sheet.range_mut("B2:D4").unwrap();
        block.fill(0.0).unwrap();
        block.set_format(banner).unwrap();
    }

    assert_eq!(sheet.cell_count(), 9, "3x3 block should be stored");
    for row in 2..=4u32 {
        for col in 2..=4u16 {
            assert_eq!(sheet.get_value_at(row, col), CellValue::Number(0.0));
            assert_eq!(sheet.cell_format_at(row, col), Some(banner));
        }
    }

    // Neighbors are untouched
    assert!(sheet.get_value_at(1, 1).is_empty());
    assert_eq!(sheet.cell_format_at(5, 5), None);
}

/// Test clearing a block through a mutable range view
#[test]
fn test_clear_through_view() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet
        .fill_range(&CellRange::parse("A1:C3").unwrap(), 1.0)
        .unwrap();

    sheet.range_mut("B2:C3").unwrap().clear().unwrap();

    assert_eq!(sheet.cell_count(), 5, "only the view's cells are removed");
    assert_eq!(sheet.get_value("A1").unwrap().as_number(), Some(1.0));
    assert!(sheet.get_value_at(2, 2).is_empty());
    assert!(sheet.get_value_at(3, 3).is_empty());
}

/// Test that formatting a range never disturbs the values in it
#[test]
fn test_format_range_preserves_values() {
    let mut wb = Workbook::new();
    let highlight = wb.styles_mut().cell_formats_mut().create();

    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("A1", "north").unwrap();
    sheet.set_cell_value("B1", 12.5).unwrap();
    sheet.set_cell_value("C2", true).unwrap();

    let range = CellRange::parse("A1:C2").unwrap();
    sheet.format_range(&range, highlight).unwrap();

    assert_eq!(sheet.get_value("A1").unwrap().as_string(), Some("north"));
    assert_eq!(sheet.get_value("B1").unwrap().as_number(), Some(12.5));
    assert_eq!(sheet.get_value("C2").unwrap().as_bool(), Some(true));

    // Every cell in the block carries the override, stored value or not
    for addr in range.cells() {
        assert_eq!(sheet.cell_format_at(addr.row, addr.col), Some(highlight));
    }
}

/// Test reading a block through an immutable range view
#[test]
fn test_read_view_offsets_and_iteration() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("B2", 1.0).unwrap();
    sheet.set_cell_value("C3", 2.0).unwrap();

    let view = wb.worksheet(0).unwrap().range("B2:D4").unwrap();
    assert_eq!(view.address(), "B2:D4");
    assert_eq!(view.row_count(), 3);
    assert_eq!(view.col_count(), 3);
    assert_eq!(view.cell_count(), 9);

    // Offsets are relative to the view's top-left corner
    assert_eq!(view.value(0, 0), CellValue::Number(1.0));
    assert_eq!(view.value(1, 1), CellValue::Number(2.0));
    assert!(view.value(2, 2).is_empty());
    assert!(view.cell(0, 1).is_none(), "unstored cell has no record");
    assert!(view.cell(9, 9).is_none(), "offsets outside the view read as nothing");

    // Iteration is row-major and covers the whole block
    let visited: Vec<(u32, u16)> = view.cells().map(|c| (c.row(), c.col())).collect();
    assert_eq!(visited.len(), 9);
    assert_eq!(visited[0], (2, 2));
    assert_eq!(visited[1], (2, 3));
    assert_eq!(visited[8], (4, 4));

    let stored: Vec<(u32, u16)> = view
        .cells()
        .filter(|c| !c.is_empty())
        .map(|c| (c.row(), c.col()))
        .collect();
    assert_eq!(stored, vec![(2, 2), (3, 3)]);
}

/// Test building a range from two corner cells in either order
#[test]
fn test_corner_pairs_normalize() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    sheet
        .range_corners_mut("D10", "A3")
        .unwrap()
        .fill(1.0)
        .unwrap();

    // Same rectangle as the string form, corner order ignored
    let view = sheet.range_corners("A3", "D10").unwrap();
    assert_eq!(view.address(), "A3:D10");
    assert_eq!(view.cell_count(), 32);
    assert!(view.cells().all(|c| c.value() == CellValue::Number(1.0)));
    assert_eq!(sheet.cell_count(), 32);
}

/// Test that writes through a mutable view are clamped to the view
#[test]
fn test_mutable_view_rejects_outside_offsets() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    let mut block = sheet.range_mut("A1:B2").unwrap();
    block.set_value(1, 1, 9.0).unwrap();
    let err = block.set_value(2, 0, 9.0).unwrap_err();
    assert!(matches!(err, Error::InvalidRange(_)));

    // The in-view write landed at B2, nothing else
    assert_eq!(sheet.cell_count(), 1);
    assert_eq!(sheet.get_value("B2").unwrap().as_number(), Some(9.0));
}

/// Test that a bad range leaves the sheet untouched
#[test]
fn test_bulk_edits_are_atomic() {
    let mut wb = Workbook::new();
    let format = wb.styles_mut().cell_formats_mut().create();
    let sheet = wb.worksheet_mut(0).unwrap();
    sheet.set_cell_value("A1", "keep").unwrap();

    // Corner past the last row: validation fails before any write
    let bad = CellRange::from_indices(1, 1, 2_000_000, 2);
    assert!(matches!(
        sheet.fill_range(&bad, 0.0).unwrap_err(),
        Error::InvalidAddress(_)
    ));
    assert!(matches!(
        sheet.format_range(&bad, format).unwrap_err(),
        Error::InvalidAddress(_)
    ));
    assert!(matches!(
        sheet.clear_range(&bad).unwrap_err(),
        Error::InvalidAddress(_)
    ));

    assert_eq!(sheet.cell_count(), 1, "no partial writes or removals");
    assert_eq!(sheet.cell_format("A1").unwrap(), None);

    // Out-of-range specs are rejected at parse time
    assert!(sheet.range_mut("A1:ZZZZ9").is_err());
    assert!(sheet.range_mut("$A$1:B2").is_err());
}

/// Test single-cell ranges and the used-range bounds
#[test]
fn test_single_cell_range_and_used_bounds() {
    let mut wb = Workbook::new();
    let sheet = wb.worksheet_mut(0).unwrap();

    assert!(sheet.used_range().is_none(), "empty sheet has no used range");

    sheet.set_cell_value("C3", 3.0).unwrap();
    sheet.set_cell_value("E7", 7.0).unwrap();

    let single = sheet.range("C3").unwrap();
    assert_eq!(single.cell_count(), 1);
    assert_eq!(single.value(0, 0), CellValue::Number(3.0));

    let used = sheet.used_range().unwrap();
    assert_eq!(used.to_a1_string(), "C3:E7");

    // Clearing a range shrinks the used bounds
    let range = CellRange::parse("E7").unwrap();
    sheet.clear_range(&range).unwrap();
    assert_eq!(sheet.used_range().unwrap().to_a1_string(), "C3");
}
