//! The [`Grid`] type: an N×N board of nodes with a permanent barrier border.
//!
//! Structural edits (placing or clearing landmarks, resets) take `&mut self`.
//! Search-side writes ([`mark`](Grid::mark), [`set_parent`](Grid::set_parent))
//! and every read take `&self` and touch a single node's atomics, so a search
//! thread and a render loop can share one `Grid` behind an `Arc` while the
//! shape and adjacency stay frozen.

use crate::error::GridError;
use crate::geom::{Point, Range};
use crate::node::{Node, Role};

/// Default number of rows and columns.
pub const DEFAULT_SIZE: i32 = 40;

/// Largest side whose node indices fit in an `i32`.
pub const MAX_SIZE: i32 = 46_340;

/// The search board.
#[derive(Debug)]
pub struct Grid {
    bounds: Range,
    nodes: Box<[Node]>,
    neighbours: Vec<Vec<Point>>,
    start: Option<Point>,
    end: Option<Point>,
}

impl Grid {
    /// Build a `size`×`size` grid. The outer ring is barrier, the interior
    /// open, and adjacency is computed. `size` must be in `1..=MAX_SIZE`.
    pub fn new(size: i32) -> Result<Self, GridError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(GridError::InvalidGridSize(size));
        }
        let bounds = Range::new(0, 0, size, size);
        let interior = bounds.shrink(1);
        let nodes = bounds
            .iter()
            .map(|p| {
                if interior.contains(p) {
                    Node::new(Role::Open)
                } else {
                    Node::new(Role::Barrier)
                }
            })
            .collect();
        let mut grid = Self {
            bounds,
            nodes,
            neighbours: vec![Vec::new(); bounds.len()],
            start: None,
            end: None,
        };
        grid.connect_neighbours();
        Ok(grid)
    }

    /// Number of rows (equal to the number of columns).
    #[inline]
    pub fn size(&self) -> i32 {
        self.bounds.width()
    }

    /// Total number of nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always `false`: a grid has at least one node.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The full bounding range.
    #[inline]
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// The editable interior (everything except the border ring).
    #[inline]
    pub fn interior(&self) -> Range {
        self.bounds.shrink(1)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// Whether `p` is on the permanent border ring.
    #[inline]
    pub fn is_border(&self, p: Point) -> bool {
        self.contains(p) && !self.interior().contains(p)
    }

    /// Dense node index of `p`, if in bounds.
    #[inline]
    pub fn index_of(&self, p: Point) -> Option<usize> {
        self.contains(p).then(|| (p.y * self.size() + p.x) as usize)
    }

    /// Point of the node at dense index `i`.
    #[inline]
    pub fn point_at(&self, i: usize) -> Point {
        let n = self.size() as usize;
        Point::new((i % n) as i32, (i / n) as i32)
    }

    /// Role of the node at `p`. Points outside the grid read as
    /// [`Role::Barrier`].
    #[inline]
    pub fn role(&self, p: Point) -> Role {
        self.index_of(p).map_or(Role::Barrier, |i| self.nodes[i].role())
    }

    /// Predecessor of `p` on the current search tree.
    pub fn parent(&self, p: Point) -> Option<Point> {
        let i = self.index_of(p)?;
        self.nodes[i].parent().map(|j| self.point_at(j))
    }

    /// Record `parent` as the predecessor of `p`. No-op outside the grid.
    pub fn set_parent(&self, p: Point, parent: Option<Point>) {
        if let Some(i) = self.index_of(p) {
            let j = parent.and_then(|q| self.index_of(q));
            self.nodes[i].set_parent(j);
        }
    }

    /// Apply a search transition to `p` (see [`Role::can_transition_to`]).
    /// Returns whether the role changed; illegal transitions, including any
    /// attempt to overwrite a landmark, are ignored.
    pub fn mark(&self, p: Point, role: Role) -> bool {
        let Some(i) = self.index_of(p) else {
            return false;
        };
        let changed = self.nodes[i].advance(role);
        if !changed {
            log::trace!("ignored transition of {p} to {role:?}");
        }
        changed
    }

    /// Adjacent non-barrier nodes of `p`, in up/left/down/right order.
    /// Empty for barriers and points outside the grid.
    #[inline]
    pub fn neighbours(&self, p: Point) -> &[Point] {
        self.index_of(p).map_or(&[][..], |i| self.neighbours[i].as_slice())
    }

    /// Position of the start node, if placed.
    #[inline]
    pub fn start(&self) -> Option<Point> {
        self.start
    }

    /// Position of the end node, if placed.
    #[inline]
    pub fn end(&self) -> Option<Point> {
        self.end
    }

    /// Number of nodes currently holding `role`.
    pub fn count(&self, role: Role) -> usize {
        self.nodes.iter().filter(|n| n.role() == role).count()
    }

    /// Row-major iterator over `(Point, Role)` pairs.
    pub fn iter(&self) -> GridIter<'_> {
        GridIter {
            grid: self,
            inner: self.bounds.iter(),
        }
    }

    /// Row-major copy of every node's role, read one node at a time.
    pub fn roles(&self) -> Vec<Role> {
        self.nodes.iter().map(Node::role).collect()
    }

    /// Place a user role at `p`.
    ///
    /// - `Start`, `End` and `Barrier` are only placed on an `Open` cell;
    ///   anything else is silently rejected. A new `Start`/`End` demotes the
    ///   previous holder to `Open`.
    /// - `Open` clears an interior cell of whatever role it holds.
    /// - Search roles are rejected; they belong to [`mark`](Grid::mark).
    ///
    /// Returns `Ok(true)` when the grid changed. Adjacency is recomputed
    /// whenever a barrier appears or disappears.
    pub fn set_role(&mut self, p: Point, role: Role) -> Result<bool, GridError> {
        let i = self.index_of(p).ok_or(GridError::InvalidPosition(p))?;
        let current = self.nodes[i].role();
        if role.is_search_mark() {
            log::trace!("rejected search role {role:?} on {p} through set_role");
            return Ok(false);
        }
        if role.is_landmark() {
            if current != Role::Open {
                log::trace!("rejected {role:?} on {p}: cell is {current:?}");
                return Ok(false);
            }
            let previous = match role {
                Role::Start => self.start.replace(p),
                Role::End => self.end.replace(p),
                _ => None,
            };
            if let Some(old) = previous.and_then(|q| self.index_of(q)) {
                self.nodes[old].store(Role::Open);
            }
        } else {
            if self.is_border(p) || current == Role::Open {
                return Ok(false);
            }
            if self.start == Some(p) {
                self.start = None;
            }
            if self.end == Some(p) {
                self.end = None;
            }
            self.nodes[i].set_parent(None);
        }
        self.nodes[i].store(role);
        if current == Role::Barrier || role == Role::Barrier {
            self.connect_neighbours();
        }
        Ok(true)
    }

    /// Recompute every adjacency list: each non-barrier node links to its
    /// non-barrier cardinal neighbours.
    pub fn connect_neighbours(&mut self) {
        for i in 0..self.nodes.len() {
            let p = self.point_at(i);
            let mut list = std::mem::take(&mut self.neighbours[i]);
            list.clear();
            if self.nodes[i].role() != Role::Barrier {
                list.extend(
                    p.neighbors_4()
                        .into_iter()
                        .filter(|&q| self.contains(q) && self.role(q) != Role::Barrier),
                );
            }
            self.neighbours[i] = list;
        }
    }

    /// Restore every interior node to `Open` and clear all parents. The start
    /// and end positions are forgotten since their cells are open again.
    /// Idempotent.
    pub fn reset_interior(&mut self) {
        let interior = self.interior();
        let mut barriers_changed = false;
        for p in interior {
            if let Some(i) = self.index_of(p) {
                barriers_changed |= self.nodes[i].role() == Role::Barrier;
                self.nodes[i].store(Role::Open);
            }
        }
        for node in self.nodes.iter() {
            node.set_parent(None);
        }
        self.start = None;
        self.end = None;
        if barriers_changed {
            self.connect_neighbours();
        }
    }

    /// Demote every search mark (`Visited`, `Frontier`, `Path`) to `Open` and
    /// clear all parents. Landmarks are kept. Idempotent.
    pub fn clear_search(&self) {
        for node in self.nodes.iter() {
            if node.role().is_search_mark() {
                node.store(Role::Open);
            }
            node.set_parent(None);
        }
    }

    /// Re-stamp the `Start` and `End` roles on their recorded positions.
    pub fn restore_landmarks(&self) {
        for (p, role) in [(self.start, Role::Start), (self.end, Role::End)] {
            if let Some(i) = p.and_then(|p| self.index_of(p)) {
                self.nodes[i].store(role);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GridIter
// ---------------------------------------------------------------------------

/// Iterator over `(Point, Role)` pairs in a [`Grid`].
pub struct GridIter<'a> {
    grid: &'a Grid,
    inner: crate::geom::RangeIter,
}

impl Iterator for GridIter<'_> {
    type Item = (Point, Role);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let p = self.inner.next()?;
        Some((p, self.grid.role(p)))
    }
}
