/// Character-cell surface adapter for terminal rendering
use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use nalgebra::Point2;
use std::io::Write;
use wirecube_core::Surface;

/// Stroke styling for the wireframe lines
#[derive(Debug, Clone, Copy)]
pub struct Stroke {
    pub character: char,
    pub color: Color,
}

impl Default for Stroke {
    fn default() -> Self {
        // Dim lines, matching the thin decorative look of the wireframe
        Self {
            character: '#',
            color: Color::DarkGrey,
        }
    }
}

/// Line renderer over a grid of terminal cells.
///
/// Terminal cells are roughly twice as tall as wide, so the renderer exposes
/// a logical surface of (cols, rows * 2) and halves y at plot time to keep
/// the cube's proportions square.
pub struct LineRenderer {
    cols: usize,
    rows: usize,
    stroke: Stroke,
    cells: Vec<char>,
}

impl LineRenderer {
    pub fn new(cols: usize, rows: usize, stroke: Stroke) -> Self {
        Self {
            cols,
            rows,
            stroke,
            cells: vec![' '; cols * rows],
        }
    }

    /// Cell grid size (columns, rows)
    pub fn grid_size(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Reallocate the cell buffer for a new terminal size and reapply the
    /// stroke styling, which does not survive a surface reset.
    pub fn resize(&mut self, cols: usize, rows: usize, stroke: Stroke) {
        self.cols = cols;
        self.rows = rows;
        self.stroke = stroke;
        self.cells = vec![' '; cols * rows];
    }

    fn plot(&mut self, x: i32, y: i32) {
        if x < 0 || y < 0 || x >= self.cols as i32 || y >= self.rows as i32 {
            return;
        }
        self.cells[y as usize * self.cols + x as usize] = self.stroke.character;
    }

    /// Bresenham line walk between two cell coordinates
    fn draw_segment(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.plot(x, y);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    #[cfg(test)]
    fn cell_at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.cols + x]
    }

    /// Queue the whole frame to the terminal
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.queue(SetForegroundColor(self.stroke.color))?;
        for y in 0..self.rows {
            writer.queue(cursor::MoveTo(0, y as u16))?;
            let row: String = self.cells[y * self.cols..(y + 1) * self.cols]
                .iter()
                .collect();
            writer.queue(Print(row))?;
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

impl Surface for LineRenderer {
    fn dimensions(&self) -> (f64, f64) {
        (self.cols as f64, (self.rows * 2) as f64)
    }

    fn clear(&mut self) {
        self.cells.fill(' ');
    }

    fn draw_line(&mut self, from: Point2<f64>, to: Point2<f64>) {
        self.draw_segment(
            from.x.round() as i32,
            (from.y / 2.0).round() as i32,
            to.x.round() as i32,
            (to.y / 2.0).round() as i32,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logical_height_is_doubled() {
        let renderer = LineRenderer::new(80, 24, Stroke::default());
        assert_eq!(renderer.dimensions(), (80.0, 48.0));
    }

    #[test]
    fn test_line_endpoints_are_plotted() {
        let mut renderer = LineRenderer::new(20, 10, Stroke::default());
        renderer.draw_line(Point2::new(2.0, 4.0), Point2::new(10.0, 4.0));

        assert_eq!(renderer.cell_at(2, 2), '#');
        assert_eq!(renderer.cell_at(10, 2), '#');
        for x in 3..10 {
            assert_eq!(renderer.cell_at(x, 2), '#');
        }
    }

    #[test]
    fn test_diagonal_line_touches_both_corners() {
        let mut renderer = LineRenderer::new(10, 10, Stroke::default());
        renderer.draw_line(Point2::new(0.0, 0.0), Point2::new(9.0, 18.0));

        assert_eq!(renderer.cell_at(0, 0), '#');
        assert_eq!(renderer.cell_at(9, 9), '#');
    }

    #[test]
    fn test_out_of_bounds_lines_are_clipped() {
        let mut renderer = LineRenderer::new(8, 4, Stroke::default());
        renderer.draw_line(Point2::new(-20.0, -20.0), Point2::new(30.0, 30.0));
        renderer.draw_line(Point2::new(100.0, 0.0), Point2::new(200.0, 0.0));
    }

    #[test]
    fn test_clear_erases_previous_frame() {
        let mut renderer = LineRenderer::new(10, 5, Stroke::default());
        renderer.draw_line(Point2::new(0.0, 0.0), Point2::new(9.0, 0.0));
        renderer.clear();

        for x in 0..10 {
            assert_eq!(renderer.cell_at(x, 0), ' ');
        }
    }

    #[test]
    fn test_resize_reallocates_and_restyles() {
        let mut renderer = LineRenderer::new(10, 5, Stroke::default());
        renderer.draw_line(Point2::new(0.0, 0.0), Point2::new(9.0, 0.0));

        let stroke = Stroke {
            character: '*',
            color: Color::White,
        };
        renderer.resize(16, 8, stroke);
        assert_eq!(renderer.grid_size(), (16, 8));
        assert_eq!(renderer.cell_at(0, 0), ' ');

        renderer.draw_line(Point2::new(0.0, 0.0), Point2::new(3.0, 0.0));
        assert_eq!(renderer.cell_at(0, 0), '*');
    }
}
