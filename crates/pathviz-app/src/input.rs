//! The [`InputMapper`]: device-independent messages to [`Command`]s.

use pathviz_core::{Key, MouseAction, Msg, Point};
use pathviz_paths::Algorithm;

use crate::visualizer::Command;

/// Translates pointer positions into grid cells and keys into commands.
///
/// A held mouse button repeats its command on every new cell the pointer
/// enters, so barriers can be painted by dragging.
#[derive(Clone, Debug)]
pub struct InputMapper {
    grid_size: i32,
    cell_width: i32,
    cell_height: i32,
    held: Option<MouseAction>,
    last_cell: Option<Point>,
}

impl InputMapper {
    /// `cell_width`/`cell_height` are in the back-end's pointer units.
    pub fn new(grid_size: i32, cell_width: i32, cell_height: i32) -> Self {
        Self {
            grid_size,
            cell_width: cell_width.max(1),
            cell_height: cell_height.max(1),
            held: None,
            last_cell: None,
        }
    }

    /// Grid cell under pointer position `pos`, if any.
    pub fn cell_at(&self, pos: Point) -> Option<Point> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let cell = Point::new(pos.x / self.cell_width, pos.y / self.cell_height);
        (cell.x < self.grid_size && cell.y < self.grid_size).then_some(cell)
    }

    /// Map one message, returning the command it triggers.
    pub fn map(&mut self, msg: &Msg) -> Option<Command> {
        match msg {
            Msg::Quit => Some(Command::Quit),
            Msg::KeyDown { key } => key_command(key),
            Msg::Mouse { action, pos } => self.mouse_command(*action, *pos),
        }
    }

    fn mouse_command(&mut self, action: MouseAction, pos: Point) -> Option<Command> {
        match action {
            MouseAction::Main | MouseAction::Secondary => {
                self.held = Some(action);
                self.last_cell = None;
            }
            MouseAction::Move if self.held.is_some() => {}
            MouseAction::Release => {
                self.held = None;
                self.last_cell = None;
                return None;
            }
            _ => return None,
        }
        let cell = self.cell_at(pos)?;
        if self.last_cell == Some(cell) {
            return None;
        }
        self.last_cell = Some(cell);
        match self.held {
            Some(MouseAction::Main) => Some(Command::PlaceOrAdvance(cell)),
            Some(MouseAction::Secondary) => Some(Command::Clear(cell)),
            _ => None,
        }
    }
}

fn key_command(key: &Key) -> Option<Command> {
    let cmd = match key {
        Key::Escape => Command::Quit,
        Key::Char(c) => match c.to_ascii_lowercase() {
            'b' => Command::RunAlgorithm(Algorithm::Bfs),
            'd' => Command::RunAlgorithm(Algorithm::Dfs),
            'a' => Command::RunAlgorithm(Algorithm::AStar),
            'r' => Command::Reset,
            'q' => Command::Quit,
            _ => return None,
        },
        _ => return None,
    };
    Some(cmd)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> InputMapper {
        InputMapper::new(40, 15, 15)
    }

    #[test]
    fn pixel_to_cell() {
        let m = mapper();
        assert_eq!(m.cell_at(Point::new(0, 0)), Some(Point::new(0, 0)));
        assert_eq!(m.cell_at(Point::new(14, 15)), Some(Point::new(0, 1)));
        assert_eq!(m.cell_at(Point::new(599, 300)), Some(Point::new(39, 20)));
        assert_eq!(m.cell_at(Point::new(600, 10)), None);
        assert_eq!(m.cell_at(Point::new(-1, 10)), None);
    }

    #[test]
    fn key_bindings() {
        let mut m = mapper();
        let cases = [
            ('b', Some(Command::RunAlgorithm(Algorithm::Bfs))),
            ('D', Some(Command::RunAlgorithm(Algorithm::Dfs))),
            ('a', Some(Command::RunAlgorithm(Algorithm::AStar))),
            ('r', Some(Command::Reset)),
            ('q', Some(Command::Quit)),
            ('x', None),
        ];
        for (c, want) in cases {
            assert_eq!(m.map(&Msg::char(c)), want, "{c}");
        }
        assert_eq!(m.map(&Msg::KeyDown { key: Key::Escape }), Some(Command::Quit));
        assert_eq!(m.map(&Msg::KeyDown { key: Key::Enter }), None);
        assert_eq!(m.map(&Msg::Quit), Some(Command::Quit));
    }

    #[test]
    fn clicks_map_to_cells() {
        let mut m = mapper();
        assert_eq!(
            m.map(&Msg::mouse(MouseAction::Main, Point::new(31, 46))),
            Some(Command::PlaceOrAdvance(Point::new(2, 3)))
        );
        m.map(&Msg::mouse(MouseAction::Release, Point::new(31, 46)));
        assert_eq!(
            m.map(&Msg::mouse(MouseAction::Secondary, Point::new(31, 46))),
            Some(Command::Clear(Point::new(2, 3)))
        );
    }

    #[test]
    fn drag_repeats_once_per_cell() {
        let mut m = mapper();
        let mut cmds = Vec::new();
        cmds.extend(m.map(&Msg::mouse(MouseAction::Main, Point::new(16, 16))));
        for x in [17, 20, 29, 30, 44, 45] {
            cmds.extend(m.map(&Msg::mouse(MouseAction::Move, Point::new(x, 16))));
        }
        m.map(&Msg::mouse(MouseAction::Release, Point::new(45, 16)));
        cmds.extend(m.map(&Msg::mouse(MouseAction::Move, Point::new(70, 16))));

        assert_eq!(
            cmds,
            vec![
                Command::PlaceOrAdvance(Point::new(1, 1)),
                Command::PlaceOrAdvance(Point::new(2, 1)),
                Command::PlaceOrAdvance(Point::new(3, 1)),
            ]
        );
    }

    #[test]
    fn moves_without_button_do_nothing() {
        let mut m = mapper();
        assert_eq!(m.map(&Msg::mouse(MouseAction::Move, Point::new(30, 30))), None);
        assert_eq!(m.map(&Msg::mouse(MouseAction::Auxiliary, Point::new(30, 30))), None);
    }
}
