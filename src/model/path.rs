//! Reconstructs a solve path by walking parent links back to the initial state.

use super::arena::{StateArena, StateId};
use super::node::NodeTable;
use super::state::State;

/// Walks `end`'s parent chain back to the root and returns it start-to-end.
pub fn reconstruct(arena: &StateArena, nodes: &NodeTable, end: StateId) -> Vec<State> {
    let mut path = vec![arena.get(end).clone()];
    let mut current = end;

    while let Some(parent) = nodes.get(current).and_then(|n| n.parent) {
        path.push(arena.get(parent).clone());
        current = parent;
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_state_path_when_no_parent() {
        let mut arena = StateArena::new();
        let nodes = NodeTable::new();
        let (id, _) = arena.intern(State::goal(3));

        let path = reconstruct(&arena, &nodes, id);
        assert_eq!(path, vec![State::goal(3)]);
    }

    #[test]
    fn test_walks_parent_chain_in_order() {
        let mut arena = StateArena::new();
        let mut nodes = NodeTable::new();

        let start = State::goal(3);
        let mid = start.neighbours().remove(0);
        let end = mid.neighbours().remove(0);

        let (start_id, _) = arena.intern(start.clone());
        let (mid_id, _) = arena.intern(mid.clone());
        let (end_id, _) = arena.intern(end.clone());

        nodes.set(start_id, 0, None, 0);
        nodes.set(mid_id, 1, Some(start_id), 1);
        nodes.set(end_id, 2, Some(mid_id), 2);

        let path = reconstruct(&arena, &nodes, end_id);
        assert_eq!(path, vec![start, mid, end]);
    }
}
