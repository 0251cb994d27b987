//! Ordered-sequence moves
//!
//! Single-element moves on an ordered list: the element at `source` is taken
//! out and reinserted at `destination`, and everything in between shifts by
//! one to close the gap.

use crate::error::SchemaError;

/// Move the element at `source` to `destination`
///
/// Both indices address the list as it is before the move. On error the list
/// is untouched.
///
/// # Errors
/// Returns [`SchemaError::IndexOutOfBounds`] if either index is `>= len`
pub fn move_item<T>(items: &mut [T], source: usize, destination: usize) -> Result<(), SchemaError> {
    let len = items.len();
    for index in [source, destination] {
        if index >= len {
            return Err(SchemaError::IndexOutOfBounds { index, len });
        }
    }

    if source < destination {
        items[source..=destination].rotate_left(1);
    } else if destination < source {
        items[destination..=source].rotate_right(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn move_forward() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        move_item(&mut items, 1, 3).unwrap();
        assert_eq!(items, vec!['a', 'c', 'd', 'b', 'e']);
    }

    #[test]
    fn move_backward() {
        let mut items = vec!['a', 'b', 'c', 'd', 'e'];
        move_item(&mut items, 4, 0).unwrap();
        assert_eq!(items, vec!['e', 'a', 'b', 'c', 'd']);
    }

    #[test]
    fn move_is_not_swap() {
        let mut items = vec![1, 2, 3];
        move_item(&mut items, 0, 2).unwrap();
        assert_eq!(items, vec![2, 3, 1]);
    }

    #[test]
    fn out_of_bounds_leaves_list() {
        let mut items = vec![1, 2, 3];
        assert_eq!(
            move_item(&mut items, 0, 3),
            Err(SchemaError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert_eq!(
            move_item(&mut items, 7, 0),
            Err(SchemaError::IndexOutOfBounds { index: 7, len: 3 })
        );
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn empty_list_rejects() {
        let mut items: Vec<u8> = vec![];
        assert!(move_item(&mut items, 0, 0).is_err());
    }

    proptest! {
        #[test]
        fn prop_move_round_trips(
            items in proptest::collection::vec(any::<u16>(), 1..40),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let i = a.index(items.len());
            let j = b.index(items.len());
            let mut moved = items.clone();

            move_item(&mut moved, i, j).unwrap();
            move_item(&mut moved, j, i).unwrap();

            prop_assert_eq!(moved, items);
        }

        #[test]
        fn prop_move_preserves_membership(
            items in proptest::collection::vec(any::<u16>(), 1..40),
            a in any::<prop::sample::Index>(),
            b in any::<prop::sample::Index>(),
        ) {
            let i = a.index(items.len());
            let j = b.index(items.len());
            let mut moved = items.clone();

            move_item(&mut moved, i, j).unwrap();

            prop_assert_eq!(moved[j], items[i]);
            let mut sorted_before = items.clone();
            let mut sorted_after = moved.clone();
            sorted_before.sort_unstable();
            sorted_after.sort_unstable();
            prop_assert_eq!(sorted_before, sorted_after);
        }
    }
}
