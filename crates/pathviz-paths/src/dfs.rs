use pathviz_core::{Grid, Point, Role};

use crate::pacer::Pacer;
use crate::path::{mark_lookahead, trace_path};
use crate::search::Outcome;

/// Depth-first search from `start` to `end`.
///
/// Uses an explicit stack of `(node, predecessor)` entries. Neighbours are
/// pushed in reverse so the first one in adjacency order is explored first,
/// and its whole subtree is finished before its next sibling is looked at,
/// exactly like a recursive pre-order descent. Explorability is checked when
/// an entry is popped. Reaching `end` returns at once, dropping every pending
/// entry. The path is valid but generally not shortest.
pub fn dfs<P: Pacer + ?Sized>(grid: &Grid, start: Point, end: Point, pacer: &mut P) -> Outcome {
    let mut stack: Vec<(Point, Point)> = Vec::new();
    push_neighbours(grid, &mut stack, start);

    while let Some((node, from)) = stack.pop() {
        if node == end {
            grid.set_parent(end, Some(from));
            return trace_path(grid, start, end);
        }
        if !grid.role(node).is_explorable() {
            continue;
        }
        if pacer.pause().is_break() {
            return Outcome::Cancelled;
        }
        grid.set_parent(node, Some(from));
        grid.mark(node, Role::Visited);
        mark_lookahead(grid, node);
        push_neighbours(grid, &mut stack, node);
    }

    Outcome::NoPath
}

fn push_neighbours(grid: &Grid, stack: &mut Vec<(Point, Point)>, p: Point) {
    stack.extend(grid.neighbours(p).iter().rev().map(|&q| (q, p)));
}
