use std::collections::VecDeque;

use pathviz_core::{Grid, Point, Role};

use crate::pacer::Pacer;
use crate::path::{mark_lookahead, trace_path};
use crate::search::Outcome;

/// Breadth-first search from `start` to `end`.
///
/// Each explorable neighbour of a dequeued node is marked `Visited` with the
/// node as parent, enqueued, and its open neighbours are highlighted as
/// `Frontier`. The first time `end` shows up as a neighbour the path is
/// reconstructed. Each unit-cost layer is exhausted before the next, so the
/// path is a shortest one.
pub fn bfs<P: Pacer + ?Sized>(grid: &Grid, start: Point, end: Point, pacer: &mut P) -> Outcome {
    let mut queue = VecDeque::from([start]);

    while let Some(node) = queue.pop_front() {
        for &next in grid.neighbours(node) {
            if next == end {
                grid.set_parent(end, Some(node));
                return trace_path(grid, start, end);
            }
            if !grid.role(next).is_explorable() {
                continue;
            }
            grid.set_parent(next, Some(node));
            grid.mark(next, Role::Visited);
            queue.push_back(next);
            mark_lookahead(grid, next);

            if pacer.pause().is_break() {
                return Outcome::Cancelled;
            }
        }
    }

    Outcome::NoPath
}
