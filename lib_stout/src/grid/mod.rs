pub mod history;
pub mod model;

pub use history::History;
pub use model::GridModel;

/// Fixed-size monochrome cell buffer, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: u32,
    height: u32,
}

impl Grid {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            cells: vec![false; width as usize * height as usize],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Accepts signed coordinates since screen-derived cells can fall left of or above the grid.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.cells[self.index(x, y)])
    }

    /// Returns false and leaves the buffer alone when (x, y) is outside the grid.
    pub fn set(&mut self, x: u32, y: u32, value: bool) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = self.index(x, y);
        self.cells[index] = value;
        true
    }

    pub fn fill(&mut self, value: bool) {
        self.cells.iter_mut().for_each(|cell| *cell = value);
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Iterates `(x, y, value)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u32, bool)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| (i as u32 % width, i as u32 / width, value))
    }
}
