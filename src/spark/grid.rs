/// Fixed-size character grid, blank-filled, one column per sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) {
        debug_assert!(row < self.height && col < self.width);
        self.cells[row * self.width + col] = ch;
    }

    /// Blanks every cell whose 1-based position in its row is not a
    /// multiple of `tick`. A tick of 1 keeps everything.
    pub fn mask_ticks(&mut self, tick: usize) {
        if tick <= 1 || self.width == 0 {
            return;
        }
        for row in self.cells.chunks_mut(self.width) {
            for (col, cell) in row.iter_mut().enumerate() {
                if (col + 1) % tick != 0 {
                    *cell = ' ';
                }
            }
        }
    }

    pub fn into_rows(self) -> Vec<String> {
        if self.width == 0 {
            return vec![String::new(); self.height];
        }
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().collect())
            .collect()
    }
}
