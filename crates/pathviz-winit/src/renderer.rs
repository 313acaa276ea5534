//! Rasterizes the grid into a pixel buffer: one filled square per node plus
//! the grid-line overlay.

use pathviz_core::{Color, Grid, LINE_COLOR, Renderer, role_color};

pub(crate) struct CanvasRenderer {
    cell: usize,
    cells_per_side: usize,
    /// 0x00RRGGBB pixels, `pixel_width()` squared.
    pixels: Vec<u32>,
}

impl CanvasRenderer {
    pub fn new(cells_per_side: usize, cell: usize) -> Self {
        let cell = cell.max(1);
        let side = cells_per_side * cell;
        Self {
            cell,
            cells_per_side,
            pixels: vec![Color::WHITE.0; side * side],
        }
    }

    /// Canvas side in pixels.
    pub fn pixel_width(&self) -> usize {
        self.cells_per_side * self.cell
    }

    fn fill_cell(&mut self, col: usize, row: usize, color: Color) {
        let side = self.pixel_width();
        let x0 = col * self.cell;
        for y in row * self.cell..(row + 1) * self.cell {
            let start = y * side + x0;
            self.pixels[start..start + self.cell].fill(color.0);
        }
    }

    fn draw_lines(&mut self) {
        let side = self.pixel_width();
        for i in 0..self.cells_per_side {
            let at = i * self.cell;
            self.pixels[at * side..(at + 1) * side].fill(LINE_COLOR.0);
            for y in 0..side {
                self.pixels[y * side + at] = LINE_COLOR.0;
            }
        }
    }

    /// Copy the internal pixel buffer into the softbuffer surface buffer.
    pub fn blit_to_buffer(&self, buf: &mut [u32], buf_width: usize, buf_height: usize) {
        let src_w = self.pixel_width();
        let copy_w = src_w.min(buf_width);
        let copy_h = src_w.min(buf_height);

        if buf_width > src_w || buf_height > src_w {
            buf.fill(Color::BLACK.0);
        }

        for y in 0..copy_h {
            let src = y * src_w;
            let dst = y * buf_width;
            if dst + copy_w <= buf.len() {
                buf[dst..dst + copy_w].copy_from_slice(&self.pixels[src..src + copy_w]);
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn draw(&mut self, grid: &Grid) {
        let n = self.cells_per_side as i32;
        for (p, role) in grid.iter() {
            if p.x < n && p.y < n {
                self.fill_cell(p.x as usize, p.y as usize, role_color(role));
            }
        }
        self.draw_lines();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathviz_core::{Point, Role};

    fn pixel(r: &CanvasRenderer, x: usize, y: usize) -> Color {
        Color(r.pixels[y * r.pixel_width() + x])
    }

    #[test]
    fn nodes_are_filled_with_role_colors() {
        let mut grid = Grid::new(5).unwrap();
        grid.set_role(Point::new(1, 2), Role::Start).unwrap();
        grid.set_role(Point::new(3, 3), Role::End).unwrap();
        let mut r = CanvasRenderer::new(5, 4);
        r.draw(&grid);

        assert_eq!(r.pixel_width(), 20);
        // Interior of node (col 1, row 2).
        assert_eq!(pixel(&r, 6, 10), Color::YELLOW);
        assert_eq!(pixel(&r, 14, 14), Color::CYAN);
        assert_eq!(pixel(&r, 10, 6), Color::WHITE);
        assert_eq!(pixel(&r, 2, 2), Color::BLACK);
    }

    #[test]
    fn grid_lines_are_drawn_on_cell_edges() {
        let grid = Grid::new(5).unwrap();
        let mut r = CanvasRenderer::new(5, 4);
        r.draw(&grid);
        for i in 0..20 {
            assert_eq!(pixel(&r, 8, i), LINE_COLOR);
            assert_eq!(pixel(&r, i, 12), LINE_COLOR);
        }
        assert_eq!(pixel(&r, 9, 9), Color::WHITE);
    }

    #[test]
    fn search_marks_show_up_on_redraw() {
        let grid = Grid::new(4).unwrap();
        let mut r = CanvasRenderer::new(4, 3);
        r.draw(&grid);
        assert_eq!(pixel(&r, 4, 4), Color::WHITE);
        assert!(grid.mark(Point::new(1, 1), Role::Visited));
        r.draw(&grid);
        assert_eq!(pixel(&r, 4, 4), role_color(Role::Visited));
    }

    #[test]
    fn blit_pads_larger_buffers() {
        let grid = Grid::new(3).unwrap();
        let mut r = CanvasRenderer::new(3, 2);
        r.draw(&grid);
        let mut buf = vec![7u32; 8 * 8];
        r.blit_to_buffer(&mut buf, 8, 8);
        assert_eq!(buf[3 * 8 + 3], Color::WHITE.0);
        assert_eq!(buf[7 * 8 + 7], Color::BLACK.0);
        assert_eq!(buf[0], LINE_COLOR.0);
    }
}
