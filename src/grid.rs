//! Flattened 2D storage
//!
//! A fixed height x width grid kept in one contiguous `Vec`, addressed by
//! (row, column). The mapping is `index(x, y) = x * width + y`, so cells of
//! a row sit next to each other in memory.

use serde::{Deserialize, Serialize};

/// Dense 2D container over a single backing vector.
///
/// The grid itself does no bounds checking beyond debug assertions:
/// out-of-range coordinates are a programming error here, and callers
/// (the map) validate ranges before indexing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid<T> {
    height: u32,
    width: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by calling `f(x, y)` for every cell in row-major order.
    ///
    /// Panics when either dimension is zero.
    pub fn from_fn(height: u32, width: u32, mut f: impl FnMut(u32, u32) -> T) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be positive");
        let mut cells = Vec::with_capacity((height * width) as usize);
        for x in 0..height {
            for y in 0..width {
                cells.push(f(x, y));
            }
        }
        Self {
            height,
            width,
            cells,
        }
    }

    /// Build a grid with every cell set to a clone of `value`.
    pub fn filled(height: u32, width: u32, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_fn(height, width, |_, _| value.clone())
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// (height, width)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.height, self.width)
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.height && y < self.width);
        (x * self.width + y) as usize
    }

    pub fn get(&self, x: u32, y: u32) -> &T {
        &self.cells[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> &mut T {
        let idx = self.index(x, y);
        &mut self.cells[idx]
    }

    pub fn set(&mut self, x: u32, y: u32, value: T) {
        let idx = self.index(x, y);
        self.cells[idx] = value;
    }

    /// Cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}
