use std::fmt;
use std::time::Duration;

use pathviz_core::{Grid, Point};

use crate::pacer::Pacer;

/// The search algorithms pathviz can animate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Algorithm {
    Bfs,
    Dfs,
    AStar,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bfs, Algorithm::Dfs, Algorithm::AStar];

    /// Default per-step pacing delay.
    pub const fn default_delay(self) -> Duration {
        match self {
            Self::Bfs | Self::Dfs => Duration::from_millis(10),
            Self::AStar => Duration::from_millis(1),
        }
    }

    /// Run this algorithm from `start` to `end`.
    pub fn run<P: Pacer + ?Sized>(
        self,
        grid: &Grid,
        start: Point,
        end: Point,
        pacer: &mut P,
    ) -> Outcome {
        match self {
            Self::Bfs => crate::bfs(grid, start, end, pacer),
            Self::Dfs => crate::dfs(grid, start, end, pacer),
            Self::AStar => crate::astar(grid, start, end, pacer),
        }
    }

    /// Short display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
            Self::AStar => "A*",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a search run ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// End was reached. The points run from start to end, both included.
    PathFound(Vec<Point>),
    /// The working set ran dry without reaching End.
    NoPath,
    /// The pacer stopped the run before it terminated.
    Cancelled,
}

impl Outcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&[Point]> {
        match self {
            Self::PathFound(points) => Some(points),
            _ => None,
        }
    }

    /// Number of steps on the path (one less than its point count).
    pub fn path_len(&self) -> Option<usize> {
        self.path().map(|p| p.len().saturating_sub(1))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(points) => {
                write!(f, "path found ({} steps)", points.len().saturating_sub(1))
            }
            Self::NoPath => f.write_str("no path"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Errors that prevent a search from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start or End has not been placed.
    #[error("both a start and an end node must be placed")]
    MissingEndpoints,
}

/// Run `algorithm` on `grid` from its Start to its End node.
pub fn search<P: Pacer + ?Sized>(
    algorithm: Algorithm,
    grid: &Grid,
    pacer: &mut P,
) -> Result<Outcome, SearchError> {
    let (Some(start), Some(end)) = (grid.start(), grid.end()) else {
        return Err(SearchError::MissingEndpoints);
    };
    log::debug!("{algorithm} search from {start} to {end}");
    Ok(algorithm.run(grid, start, end, pacer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Unpaced;
    use crate::testutil::{is_walkable, parse};
    use pathviz_core::Role;

    const OPEN_ROOM: [&str; 8] = [
        "########",
        "#S.....#",
        "#......#",
        "#..##..#",
        "#..#...#",
        "#..#..E#",
        "#......#",
        "########",
    ];

    const WALLED: [&str; 7] = [
        "#######",
        "#S.#..#",
        "#..#..#",
        "####..#",
        "#....E#",
        "#.....#",
        "#######",
    ];

    #[test]
    fn missing_endpoints() {
        let mut g = parse(&OPEN_ROOM);
        let end = g.end().unwrap();
        g.set_role(end, Role::Open).unwrap();
        for alg in Algorithm::ALL {
            assert_eq!(
                search(alg, &g, &mut Unpaced),
                Err(SearchError::MissingEndpoints)
            );
        }
        assert_eq!(g.count(Role::Visited), 0);
    }

    #[test]
    fn every_algorithm_finds_a_walkable_path() {
        for alg in Algorithm::ALL {
            let g = parse(&OPEN_ROOM);
            let outcome = search(alg, &g, &mut Unpaced).unwrap();
            let path = outcome.path().unwrap_or_else(|| panic!("{alg}: {outcome}"));
            assert_eq!(path.first(), g.start().as_ref(), "{alg}");
            assert_eq!(path.last(), g.end().as_ref(), "{alg}");
            assert!(is_walkable(&g, path), "{alg}: {path:?}");
            assert_eq!(g.count(Role::Path), path.len() - 2, "{alg}");
            assert_eq!(g.role(g.start().unwrap()), Role::Start, "{alg}");
            assert_eq!(g.role(g.end().unwrap()), Role::End, "{alg}");
        }
    }

    #[test]
    fn walled_off_end_is_no_path() {
        for alg in Algorithm::ALL {
            let g = parse(&WALLED);
            assert_eq!(search(alg, &g, &mut Unpaced), Ok(Outcome::NoPath), "{alg}");
            assert_eq!(g.count(Role::Path), 0, "{alg}");
            assert_eq!(g.count(Role::Start), 1);
            assert_eq!(g.count(Role::End), 1);
        }
    }

    #[test]
    fn astar_matches_bfs_length() {
        let bfs_grid = parse(&OPEN_ROOM);
        let astar_grid = parse(&OPEN_ROOM);
        let by_bfs = search(Algorithm::Bfs, &bfs_grid, &mut Unpaced).unwrap();
        let by_astar = search(Algorithm::AStar, &astar_grid, &mut Unpaced).unwrap();
        assert_eq!(by_bfs.path_len(), Some(9));
        assert_eq!(by_astar.path_len(), by_bfs.path_len());
    }

    #[test]
    fn rerun_after_clear_search() {
        let g = parse(&OPEN_ROOM);
        let first = search(Algorithm::Bfs, &g, &mut Unpaced).unwrap();
        g.clear_search();
        let second = search(Algorithm::Bfs, &g, &mut Unpaced).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn outcome_display() {
        let p = Outcome::PathFound(vec![Point::new(1, 1), Point::new(2, 1)]);
        assert_eq!(p.to_string(), "path found (1 steps)");
        assert_eq!(Outcome::NoPath.to_string(), "no path");
        assert_eq!(Algorithm::AStar.to_string(), "A*");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn algorithm_serde() {
        let alg: Algorithm = serde_json::from_str("\"AStar\"").unwrap();
        assert_eq!(alg, Algorithm::AStar);
    }
}
