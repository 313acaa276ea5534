use pathviz_core::{Grid, Point, Role};

use crate::search::Outcome;

/// Walk parents from `end` back to `start`, mark every intermediate node
/// `Path` and return the ordered path.
///
/// A chain that is broken or longer than the grid yields `NoPath` without
/// marking anything.
pub(crate) fn trace_path(grid: &Grid, start: Point, end: Point) -> Outcome {
    let mut points = vec![end];
    let mut cur = end;
    while cur != start {
        let Some(prev) = grid.parent(cur) else {
            log::warn!("parent chain from {end} broken at {cur}");
            return Outcome::NoPath;
        };
        if points.len() > grid.len() {
            log::warn!("parent chain from {end} does not reach {start}");
            return Outcome::NoPath;
        }
        points.push(prev);
        cur = prev;
    }
    points.reverse();
    if let [_, inner @ .., _] = points.as_slice() {
        for &p in inner {
            grid.mark(p, Role::Path);
        }
    }
    Outcome::PathFound(points)
}

/// Mark the still-open neighbours of `p` as `Frontier`.
pub(crate) fn mark_lookahead(grid: &Grid, p: Point) {
    for &q in grid.neighbours(p) {
        if grid.role(q) == Role::Open {
            grid.mark(q, Role::Frontier);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::parse;

    #[test]
    fn marks_inner_nodes_only() {
        let g = parse(&["#####", "#S.E#", "#####"]);
        let (s, e) = (Point::new(1, 1), Point::new(3, 1));
        g.mark(Point::new(2, 1), Role::Visited);
        g.set_parent(Point::new(2, 1), Some(s));
        g.set_parent(e, Some(Point::new(2, 1)));

        let outcome = trace_path(&g, s, e);
        assert_eq!(outcome.path(), Some(&[s, Point::new(2, 1), e][..]));
        assert_eq!(g.role(Point::new(2, 1)), Role::Path);
        assert_eq!(g.role(s), Role::Start);
        assert_eq!(g.role(e), Role::End);
    }

    #[test]
    fn broken_chain_is_no_path() {
        let g = parse(&["######", "#S..E#", "######"]);
        let e = Point::new(4, 1);
        g.set_parent(e, Some(Point::new(3, 1)));
        assert_eq!(trace_path(&g, Point::new(1, 1), e), Outcome::NoPath);
        assert_eq!(g.count(Role::Path), 0);
    }

    #[test]
    fn cyclic_chain_is_no_path() {
        let g = parse(&["######", "#S..E#", "######"]);
        let (a, b, e) = (Point::new(2, 1), Point::new(3, 1), Point::new(4, 1));
        g.set_parent(e, Some(b));
        g.set_parent(b, Some(a));
        g.set_parent(a, Some(b));
        assert_eq!(trace_path(&g, Point::new(1, 1), e), Outcome::NoPath);
    }
}
