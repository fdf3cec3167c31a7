use super::*;
use proptest::prelude::*;

fn list_with(newlines: &[u32]) -> NewlineList {
    let mut list = NewlineList::new();
    for &pos in newlines {
        list.append(pos);
    }
    list
}

#[test]
fn sentinel_only_maps_to_start_line() {
    let list = NewlineList::new();
    assert_eq!(list.offsets(), &[0]);
    assert_eq!(list.line(0, 1), 1);
    assert_eq!(list.line(100, 1), 1);
    assert_eq!(list.line_column(7, 10), LineColumn { line: 10, column: 7 });
}

#[test]
fn line_column_round_trip() {
    let list = list_with(&[5, 12, 20]);
    assert_eq!(list.offsets(), &[0, 6, 13, 21]);

    assert_eq!(list.line_column(0, 1), LineColumn { line: 1, column: 0 });
    // The newline byte itself still belongs to the line it ends.
    assert_eq!(list.line_column(5, 1), LineColumn { line: 1, column: 5 });
    assert_eq!(list.line_column(6, 1), LineColumn { line: 2, column: 0 });
    assert_eq!(list.line_column(13, 1), LineColumn { line: 3, column: 0 });
    assert_eq!(list.line_column(25, 1), LineColumn { line: 4, column: 4 });
}

#[test]
fn start_line_bias_applies() {
    let list = list_with(&[3]);
    assert_eq!(list.line(0, 0), 0);
    assert_eq!(list.line(4, -5), -4);
}

#[test]
fn clear_keeps_sentinel() {
    let mut list = list_with(&[1, 2, 3]);
    list.clear();
    assert_eq!(list.offsets(), &[0]);
    assert_eq!(list.len(), 1);
    list.append(9);
    assert_eq!(list.offsets(), &[0, 10]);
}

#[test]
fn last_offset_tracks_appends() {
    let mut list = NewlineList::new();
    assert_eq!(list.last_offset(), 0);
    list.append(4);
    assert_eq!(list.last_offset(), 5);
}

proptest! {
    #[test]
    fn line_is_monotonic(gaps in proptest::collection::vec(1u32..50, 0..64), queries in proptest::collection::vec(0u32..4000, 1..64)) {
        let mut list = NewlineList::new();
        let mut pos = 0;
        for gap in gaps {
            pos += gap;
            list.append(pos);
        }

        let mut queries = queries;
        queries.sort_unstable();
        let mut previous = i32::MIN;
        for offset in queries {
            let at = list.line_column(offset, 1);
            prop_assert!(at.line >= previous);
            previous = at.line;
        }
    }
}
