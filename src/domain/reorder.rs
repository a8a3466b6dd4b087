//! Moving links to new positions.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Link, LinkId};

/// Errors returned by [`move_item`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    #[error("source index {index} is out of range for {len} items")]
    SourceOutOfRange { index: usize, len: usize },

    #[error("target index {index} is out of range for {len} items")]
    TargetOutOfRange { index: usize, len: usize },
}

/// Moves the element at `from` so that it ends up at index `to`.
///
/// This is a splice, not a swap: the element is removed first and then
/// inserted at `to` in the shortened sequence, shifting everything in between
/// by one. Moving down (`from < to`) therefore places the element just after
/// the item that was at `to`; moving up places it just before.
///
/// Equal indices return an unchanged copy.
///
/// # Errors
///
/// Returns [`ReorderError`] if either index is not a valid position in `items`.
pub fn move_item<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, ReorderError> {
    let len = items.len();

    if from >= len {
        return Err(ReorderError::SourceOutOfRange { index: from, len });
    }
    if to >= len {
        return Err(ReorderError::TargetOutOfRange { index: to, len });
    }

    let mut reordered = items.to_vec();
    if from != to {
        let moved = reordered.remove(from);
        reordered.insert(to, moved);
    }

    Ok(reordered)
}

/// Errors returned by [`arrange_by_ids`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderError {
    #[error("link id {0} appears more than once")]
    DuplicateId(LinkId),

    #[error("unknown link id {0}")]
    UnknownId(LinkId),

    #[error("order is missing {} link(s)", .0.len())]
    MissingIds(Vec<LinkId>),
}

/// Rearranges `links` into the order given by `ids`.
///
/// `ids` must name every link exactly once. Missing ids are reported in their
/// current collection order.
///
/// # Errors
///
/// Returns [`OrderError`] for a duplicate, unknown or missing id.
pub fn arrange_by_ids(links: &[Link], ids: &[LinkId]) -> Result<Vec<Link>, OrderError> {
    let mut by_id: HashMap<&LinkId, &Link> = links.iter().map(|l| (&l.id, l)).collect();
    let mut seen = HashSet::with_capacity(ids.len());
    let mut arranged = Vec::with_capacity(ids.len());

    for id in ids {
        if !seen.insert(id) {
            return Err(OrderError::DuplicateId(id.clone()));
        }
        let link = by_id
            .remove(id)
            .ok_or_else(|| OrderError::UnknownId(id.clone()))?;
        arranged.push(link.clone());
    }

    if !by_id.is_empty() {
        let missing = links
            .iter()
            .filter(|l| by_id.contains_key(&l.id))
            .map(|l| l.id.clone())
            .collect();
        return Err(OrderError::MissingIds(missing));
    }

    Ok(arranged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::seed::sample_links;

    fn ids(values: &[&str]) -> Vec<LinkId> {
        values.iter().map(|v| LinkId::from(*v)).collect()
    }

    #[test]
    fn test_move_down() {
        let result = move_item(&["A", "B", "C", "D"], 0, 2).unwrap();
        assert_eq!(result, vec!["B", "C", "A", "D"]);
    }

    #[test]
    fn test_move_up() {
        let result = move_item(&["A", "B", "C", "D"], 3, 1).unwrap();
        assert_eq!(result, vec!["A", "D", "B", "C"]);
    }

    #[test]
    fn test_move_to_end() {
        let result = move_item(&["A", "B", "C", "D"], 1, 3).unwrap();
        assert_eq!(result, vec!["A", "C", "D", "B"]);
    }

    #[test]
    fn test_adjacent_move_is_not_a_swap_of_distant_items() {
        let result = move_item(&["A", "B", "C", "D", "E"], 0, 3).unwrap();
        // A swap would give [D, B, C, A, E].
        assert_eq!(result, vec!["B", "C", "D", "A", "E"]);
    }

    #[test]
    fn test_same_index_is_noop() {
        let result = move_item(&["A", "B", "C"], 1, 1).unwrap();
        assert_eq!(result, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_preserves_length_and_elements() {
        let items = vec![1, 2, 3, 4, 5, 6];
        for from in 0..items.len() {
            for to in 0..items.len() {
                let mut result = move_item(&items, from, to).unwrap();
                assert_eq!(result.len(), items.len());
                assert_eq!(result[to], items[from]);
                result.sort();
                assert_eq!(result, items);
            }
        }
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(
            move_item(&["A", "B"], 2, 0),
            Err(ReorderError::SourceOutOfRange { index: 2, len: 2 })
        );
        assert_eq!(
            move_item(&["A", "B"], 0, 5),
            Err(ReorderError::TargetOutOfRange { index: 5, len: 2 })
        );
        assert!(move_item::<u8>(&[], 0, 0).is_err());
    }

    #[test]
    fn test_arrange_by_ids() {
        let arranged = arrange_by_ids(&sample_links(), &ids(&["3", "1", "2"])).unwrap();

        let order: Vec<&str> = arranged.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(order, vec!["3", "1", "2"]);
    }

    #[test]
    fn test_arrange_by_ids_errors() {
        let links = sample_links();

        assert_eq!(
            arrange_by_ids(&links, &ids(&["1", "1", "2"])),
            Err(OrderError::DuplicateId(LinkId::from("1")))
        );
        assert_eq!(
            arrange_by_ids(&links, &ids(&["1", "2", "9"])),
            Err(OrderError::UnknownId(LinkId::from("9")))
        );
        assert_eq!(
            arrange_by_ids(&links, &ids(&["2"])),
            Err(OrderError::MissingIds(ids(&["1", "3"])))
        );
    }
}
