use pathviz_core::{Grid, Role};

/// Build a square grid from a picture: `#` barrier, `S` start, `E` end,
/// anything else open. Interior cells missing from the picture are barriers.
pub(crate) fn parse(rows: &[&str]) -> Grid {
    let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
    let n = rows.len().max(width) as i32;
    let mut g = Grid::new(n).unwrap();
    for p in g.interior() {
        let ch = rows
            .get(p.y as usize)
            .and_then(|r| r.as_bytes().get(p.x as usize))
            .copied()
            .unwrap_or(b'#');
        let role = match ch {
            b'#' => Role::Barrier,
            b'S' => Role::Start,
            b'E' => Role::End,
            _ => continue,
        };
        g.set_role(p, role).unwrap();
    }
    g
}

/// Whether `path` is a chain of adjacent, non-barrier cells.
pub(crate) fn is_walkable(g: &Grid, path: &[pathviz_core::Point]) -> bool {
    path.windows(2).all(|w| w[0].is_adjacent(w[1]))
        && path.iter().all(|&p| g.role(p) != Role::Barrier)
}
