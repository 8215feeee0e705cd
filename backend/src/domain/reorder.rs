//! Drag-reorder controller: translates a drag gesture (or its keyboard
//! equivalent) into a validated permutation of a day's items. Pure
//! computation, no storage access; committing the new order is the state
//! manager's job.

use shared::ItineraryItem;

/// Compute the new ordering for a drag of `source_id` onto `target_id`.
///
/// List-splice semantics: the source is removed and re-inserted at the
/// target's post-removal index, preserving the relative order of all
/// untouched items. Returns `None` (caller must not reorder) when the
/// gesture is a no-op: source and target are the same item, or either id is
/// not present.
pub fn reorder_by_target(
    items: &[ItineraryItem],
    source_id: &str,
    target_id: &str,
) -> Option<Vec<ItineraryItem>> {
    if source_id == target_id {
        return None;
    }

    let from = items.iter().position(|item| item.id == source_id)?;
    let to = items.iter().position(|item| item.id == target_id)?;

    Some(array_move(items, from, to))
}

/// Move the element at `from` to position `to` (its index in the resulting
/// sequence), shifting everything in between.
pub fn array_move<T: Clone>(items: &[T], from: usize, to: usize) -> Vec<T> {
    let mut out = items.to_vec();
    let moved = out.remove(from);
    let to = to.min(out.len());
    out.insert(to, moved);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Location;

    fn item(id: &str) -> ItineraryItem {
        ItineraryItem {
            id: id.to_string(),
            name: format!("Tappa {}", id),
            time: "09:00".to_string(),
            duration: "2 ore".to_string(),
            item_type: "Attrazione".to_string(),
            rating: 4.0,
            image: "🎯".to_string(),
            description: None,
            location: Location::default(),
            estimated_cost: Some("€0".to_string()),
            notes: None,
        }
    }

    fn ids(items: &[ItineraryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_move_first_item_after_last() {
        let items = vec![item("a"), item("b"), item("c")];
        let reordered = reorder_by_target(&items, "a", "c").unwrap();
        assert_eq!(ids(&reordered), vec!["b", "c", "a"]);
    }

    #[test]
    fn test_move_last_item_to_front() {
        let items = vec![item("a"), item("b"), item("c")];
        let reordered = reorder_by_target(&items, "c", "a").unwrap();
        assert_eq!(ids(&reordered), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_move_between_neighbors() {
        let items = vec![item("a"), item("b"), item("c"), item("d")];
        let reordered = reorder_by_target(&items, "b", "c").unwrap();
        assert_eq!(ids(&reordered), vec!["a", "c", "b", "d"]);
    }

    #[test]
    fn test_reorder_is_a_permutation() {
        let items = vec![item("a"), item("b"), item("c"), item("d")];
        let reordered = reorder_by_target(&items, "d", "b").unwrap();

        assert_eq!(reordered.len(), items.len());
        let mut sorted: Vec<&str> = ids(&reordered);
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_same_source_and_target_is_noop() {
        let items = vec![item("a"), item("b")];
        assert!(reorder_by_target(&items, "a", "a").is_none());
    }

    #[test]
    fn test_missing_ids_are_noop() {
        let items = vec![item("a"), item("b")];
        assert!(reorder_by_target(&items, "a", "x").is_none());
        assert!(reorder_by_target(&items, "x", "b").is_none());
        assert!(reorder_by_target(&[], "a", "b").is_none());
    }

    #[test]
    fn test_array_move_clamps_target_index() {
        let moved = array_move(&["a", "b", "c"], 0, 9);
        assert_eq!(moved, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_array_move_to_same_index_keeps_order() {
        let moved = array_move(&["a", "b", "c"], 1, 1);
        assert_eq!(moved, vec!["a", "b", "c"]);
    }
}
