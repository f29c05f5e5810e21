use std::io::{self, Write};

use crate::{Glyphs, Grid};

pub use clear::{ClearRegistry, ClearStrategy, Clearer};
pub mod clear;

/// Renders `grid` as a bordered block of `rows + 2` lines, each
/// `cols + 2` characters wide.
pub fn frame(grid: &Grid, glyphs: &Glyphs) -> String {
    let width = grid.cols() + 2;
    let border: String = std::iter::repeat(glyphs.border).take(width).collect();
    let mut result = String::with_capacity((width + 1) * (grid.rows() + 2));

    result += &border;
    result.push('\n');
    for row in 0..grid.rows() {
        result.push(glyphs.border);
        for cell in grid.row(row).unwrap_or_default() {
            result.push(if cell.is_active() {
                glyphs.alive
            } else {
                glyphs.dead
            });
        }
        result.push(glyphs.border);
        result.push('\n');
    }
    result += &border;
    result.push('\n');
    result
}

pub fn render(grid: &Grid, glyphs: &Glyphs, out: &mut impl Write) -> io::Result<()> {
    out.write_all(frame(grid, glyphs).as_bytes())?;
    out.flush()
}

/// Draws frames into a text sink.
pub struct View<W: Write> {
    out: W,
    glyphs: Glyphs,
}

impl<W: Write> View<W> {
    pub fn new(out: W, glyphs: Glyphs) -> Self {
        Self { out, glyphs }
    }

    pub fn draw(&mut self, grid: &Grid) -> io::Result<()> {
        render(grid, &self.glyphs, &mut self.out)
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
