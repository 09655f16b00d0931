use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    ShapeMismatch {
        rows: usize,
        cols: usize,
        cells: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { rows, cols, cells } => {
                write!(
                    f,
                    "grid shape {}x{} does not match cell count {}",
                    rows, cols, cells
                )
            }
        }
    }
}

impl Error for GridError {}

/// Dense row-major 2D array. Row 0 is the top of the sampled region.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    rows: usize,
    cols: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    pub fn from_cells(rows: usize, cols: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if rows.checked_mul(cols) != Some(cells.len()) {
            return Err(GridError::ShapeMismatch {
                rows,
                cols,
                cells: cells.len(),
            });
        }

        Ok(Self { rows, cols, cells })
    }

    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .map(|(row, col)| f(row, col))
            .collect();

        Self { rows, cols, cells }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[T]> {
        if row < self.rows {
            Some(&self.cells[row * self.cols..(row + 1) * self.cols])
        } else {
            None
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.iter().map(f).collect(),
        }
    }
}

impl<T, E> Grid<Result<T, E>> {
    /// Turns a grid of results into a grid of values, or the first error in row-major order.
    pub fn transpose(self) -> Result<Grid<T>, E> {
        let cells = self.cells.into_iter().collect::<Result<Vec<T>, E>>()?;

        Ok(Grid {
            rows: self.rows,
            cols: self.cols,
            cells,
        })
    }
}
