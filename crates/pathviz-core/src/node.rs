//! Per-cell state: the [`Role`] state machine and the atomic [`Node`] slot.
//!
//! A node's role and parent are stored as two independent atomics. A reader
//! running concurrently with a search sees each field atomically, but not the
//! `(role, parent)` pair as one transaction.

use std::sync::atomic::{AtomicU8, AtomicU32, Ordering};

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

/// The mutually exclusive role of a grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Role {
    /// Free cell, not yet touched by a search.
    #[default]
    Open = 0,
    /// Obstacle. The border ring is permanently a barrier.
    Barrier = 1,
    /// Search origin.
    Start = 2,
    /// Search target.
    End = 3,
    /// Explored and finalized for the current run.
    Visited = 4,
    /// Discovered, awaiting exploration.
    Frontier = 5,
    /// On the reconstructed path.
    Path = 6,
}

impl Role {
    /// All roles, in discriminant order.
    pub const ALL: [Role; 7] = [
        Role::Open,
        Role::Barrier,
        Role::Start,
        Role::End,
        Role::Visited,
        Role::Frontier,
        Role::Path,
    ];

    #[inline]
    const fn from_u8(v: u8) -> Self {
        match v {
            1 => Self::Barrier,
            2 => Self::Start,
            3 => Self::End,
            4 => Self::Visited,
            5 => Self::Frontier,
            6 => Self::Path,
            _ => Self::Open,
        }
    }

    /// Whether a search may still explore a cell with this role.
    #[inline]
    pub const fn is_explorable(self) -> bool {
        matches!(self, Self::Open | Self::Frontier)
    }

    /// Roles placed by the user: start, end and barriers.
    #[inline]
    pub const fn is_landmark(self) -> bool {
        matches!(self, Self::Start | Self::End | Self::Barrier)
    }

    /// Roles written by a search run and wiped before the next one.
    #[inline]
    pub const fn is_search_mark(self) -> bool {
        matches!(self, Self::Visited | Self::Frontier | Self::Path)
    }

    /// Whether a search may move a cell from `self` to `next`.
    ///
    /// Only `Open → Frontier`, `Open|Frontier → Visited` and
    /// `Visited|Frontier → Path` are legal. Landmarks never change during a
    /// search.
    #[inline]
    pub const fn can_transition_to(self, next: Role) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Frontier)
                | (Self::Open | Self::Frontier, Self::Visited)
                | (Self::Visited | Self::Frontier, Self::Path)
        )
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

const NO_PARENT: u32 = u32::MAX;

/// Storage for one grid cell. Owned by [`Grid`](crate::Grid); the parent is a
/// node index, never a reference.
#[derive(Debug)]
pub(crate) struct Node {
    role: AtomicU8,
    parent: AtomicU32,
}

impl Node {
    pub(crate) fn new(role: Role) -> Self {
        Self {
            role: AtomicU8::new(role as u8),
            parent: AtomicU32::new(NO_PARENT),
        }
    }

    #[inline]
    pub(crate) fn role(&self) -> Role {
        Role::from_u8(self.role.load(Ordering::Relaxed))
    }

    #[inline]
    pub(crate) fn store(&self, role: Role) {
        self.role.store(role as u8, Ordering::Relaxed);
    }

    /// Apply a search transition if it is legal from the current role.
    pub(crate) fn advance(&self, next: Role) -> bool {
        self.role
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |cur| {
                Role::from_u8(cur)
                    .can_transition_to(next)
                    .then_some(next as u8)
            })
            .is_ok()
    }

    #[inline]
    pub(crate) fn parent(&self) -> Option<usize> {
        match self.parent.load(Ordering::Relaxed) {
            NO_PARENT => None,
            i => Some(i as usize),
        }
    }

    #[inline]
    pub(crate) fn set_parent(&self, parent: Option<usize>) {
        let v = parent.map_or(NO_PARENT, |i| i as u32);
        self.parent.store(v, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_round_trip() {
        for role in Role::ALL {
            assert_eq!(Role::from_u8(role as u8), role);
        }
    }

    #[test]
    fn explorable_roles() {
        let explorable: Vec<_> = Role::ALL.into_iter().filter(|r| r.is_explorable()).collect();
        assert_eq!(explorable, vec![Role::Open, Role::Frontier]);
    }

    #[test]
    fn legal_search_transitions() {
        assert!(Role::Open.can_transition_to(Role::Frontier));
        assert!(Role::Open.can_transition_to(Role::Visited));
        assert!(Role::Frontier.can_transition_to(Role::Visited));
        assert!(Role::Visited.can_transition_to(Role::Path));
        assert!(Role::Frontier.can_transition_to(Role::Path));

        assert!(!Role::Visited.can_transition_to(Role::Frontier));
        assert!(!Role::Frontier.can_transition_to(Role::Frontier));
        assert!(!Role::Path.can_transition_to(Role::Visited));
        assert!(!Role::Open.can_transition_to(Role::Path));
    }

    #[test]
    fn landmarks_never_move() {
        for landmark in [Role::Start, Role::End, Role::Barrier] {
            assert!(landmark.is_landmark());
            assert!(!landmark.is_search_mark());
            for next in Role::ALL {
                assert!(!landmark.can_transition_to(next), "{landmark:?} -> {next:?}");
            }
        }
    }

    #[test]
    fn node_advance_respects_rules() {
        let n = Node::new(Role::Open);
        assert!(n.advance(Role::Frontier));
        assert!(!n.advance(Role::Frontier));
        assert!(n.advance(Role::Visited));
        assert!(n.advance(Role::Path));
        assert_eq!(n.role(), Role::Path);

        let s = Node::new(Role::Start);
        assert!(!s.advance(Role::Visited));
        assert_eq!(s.role(), Role::Start);
    }

    #[test]
    fn node_parent_slot() {
        let n = Node::new(Role::Open);
        assert_eq!(n.parent(), None);
        n.set_parent(Some(17));
        assert_eq!(n.parent(), Some(17));
        n.set_parent(None);
        assert_eq!(n.parent(), None);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn roles_serialize_by_name() {
        let json = serde_json::to_string(&Role::Frontier).unwrap();
        assert_eq!(json, "\"Frontier\"");
        assert_eq!(serde_json::from_str::<Role>("\"Barrier\"").unwrap(), Role::Barrier);
    }
}
