use rayon::prelude::*;
use serde::Serialize;

/// Dense square matrix stored row by row in a single vector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Matrix<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Clone> Matrix<T> {
    /// Creates a `size` x `size` matrix filled with `value`
    pub fn new(size: usize, value: T) -> Self {
        Matrix {
            size,
            cells: vec![value; size * size],
        }
    }

    /// Copies row `row` out of the matrix
    pub fn row_to_vec(&self, row: usize) -> Vec<T> {
        self.row(row).to_vec()
    }
}

impl<T> Matrix<T> {
    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.cells[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.cells[row * self.size + col] = value;
    }

    /// Borrows row `row` as a slice
    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    /// Mutable row slices, one per row, handed out to rayon workers
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, T>
    where
        T: Send,
    {
        // chunk size zero panics; an empty matrix has no rows either way
        self.cells.par_chunks_mut(self.size.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_major_layout() {
        let mut matrix = Matrix::new(3, 0);
        matrix.set(1, 2, 7);
        matrix.set(2, 0, 4);

        assert_eq!(*matrix.get(1, 2), 7);
        assert_eq!(matrix.row(1), &[0, 0, 7]);
        assert_eq!(matrix.row_to_vec(2), vec![4, 0, 0]);
        assert_eq!(matrix.par_rows_mut().count(), 3);
    }

    #[test]
    fn empty_matrix_has_no_rows() {
        let mut matrix: Matrix<u8> = Matrix::new(0, 0);
        assert_eq!(matrix.size(), 0);
        assert_eq!(matrix.par_rows_mut().count(), 0);
    }
}
