use std::cmp::Reverse;
use std::collections::BinaryHeap;

use pathviz_core::{Grid, Point, Role};

use crate::pacer::Pacer;
use crate::path::trace_path;
use crate::search::Outcome;

/// Heap entry. The derived ordering compares `f` first and then the
/// insertion sequence, so equal-`f` nodes pop in insertion order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
struct OpenEntry {
    f: u32,
    seq: u64,
    idx: usize,
}

/// A* search from `start` to `end` with unit edge costs and a Manhattan
/// heuristic.
///
/// Relaxed neighbours become `Frontier` and are pushed onto the open heap; a
/// node whose `g` improves while queued is pushed again and the stale entry
/// is skipped on pop. Popped nodes other than `start` become `Visited`. When
/// `end` appears as a neighbour of the popped node the path is reconstructed
/// and the `Start`/`End` roles are re-stamped.
pub fn astar<P: Pacer + ?Sized>(grid: &Grid, start: Point, end: Point, pacer: &mut P) -> Outcome {
    let Some(si) = grid.index_of(start) else {
        return Outcome::NoPath;
    };
    let h = |p: Point| p.manhattan(end) as u32;

    let mut g = vec![u32::MAX; grid.len()];
    let mut f = vec![u32::MAX; grid.len()];
    let mut queued = vec![false; grid.len()];
    let mut open = BinaryHeap::new();
    let mut seq = 0u64;

    g[si] = 0;
    f[si] = h(start);
    queued[si] = true;
    open.push(Reverse(OpenEntry {
        f: f[si],
        seq,
        idx: si,
    }));

    while let Some(Reverse(entry)) = open.pop() {
        let ci = entry.idx;
        if !queued[ci] || entry.f != f[ci] {
            continue;
        }
        queued[ci] = false;
        let node = grid.point_at(ci);

        for &next in grid.neighbours(node) {
            if next == end {
                grid.set_parent(end, Some(node));
                let outcome = trace_path(grid, start, end);
                grid.restore_landmarks();
                return outcome;
            }
            let Some(ni) = grid.index_of(next) else {
                continue;
            };
            if !grid.role(next).is_explorable() {
                continue;
            }
            let tentative = g[ci] + 1;
            if g[ni] <= tentative {
                continue;
            }
            g[ni] = tentative;
            f[ni] = tentative + h(next);
            grid.set_parent(next, Some(node));
            if !queued[ni] {
                grid.mark(next, Role::Frontier);
            }
            queued[ni] = true;
            seq += 1;
            open.push(Reverse(OpenEntry {
                f: f[ni],
                seq,
                idx: ni,
            }));

            if pacer.pause().is_break() {
                return Outcome::Cancelled;
            }
        }

        if node != start {
            grid.mark(node, Role::Visited);
        }
    }

    Outcome::NoPath
}
