use itertools::Itertools;

use crate::dots::prelude::*;

impl Board {
    /// Pretty-prints the board with plain glyphs.
    pub fn pretty(&self) -> String {
        self.draw(|cell| cell.glyph().to_string())
    }

    /// Draws the board for a terminal, each glyph in its colour.
    pub fn render(&self) -> String {
        self.draw(Cell::styled)
    }

    /// The board in map notation.
    pub fn notate(&self) -> String {
        notate_grid(&self.cells)
    }

    /// Lays the board out under a header of column letters, with 1-based row numbers down the side.
    fn draw(&self, glyph: impl Fn(&Cell) -> String) -> String {
        let label_width = self.length.to_string().len();
        let cell_width = column_letters(self.width.saturating_sub(1)).len();

        let header = format!("{:label_width$}  {}", "",
            (0..self.width).map(|c| format!("{:<cell_width$}", column_letters(c))).join(" "));

        let rows = self.cells.0.iter().enumerate().map(|(r, row)| {
            let cells = row.iter()
                .map(|cell| format!("{}{}", glyph(cell), " ".repeat(cell_width - 1)))
                .join(" ");
            format!("{:>label_width$}  {}", r + 1, cells)
        });

        std::iter::once(header).chain(rows).join("\n")
    }
}
