//! # Matrix implementations
//!
//! Only a dense, row-major matrix is needed: the input matrix of a Hoffman search is read once and
//! then only rows are selected and the result is transposed.
use std::slice::Iter;

use crate::data::subset::Subset;
use crate::error::Error;

/// Uses a Vec<Vec<f64>> as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl DenseMatrix {
    /// Create a `DenseMatrix` from the provided row data.
    ///
    /// # Arguments
    ///
    /// * `data`: Rows of the matrix, all of the same length and containing finite values only.
    ///
    /// # Return value
    ///
    /// A matrix, or an error if the rows are ragged or a value is not finite.
    pub fn from_data(data: Vec<Vec<f64>>) -> Result<Self, Error> {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);

        for (i, row) in data.iter().enumerate() {
            if row.len() != nr_columns {
                return Err(Error::Dimension(format!(
                    "row {} has length {}, while row 0 has length {}", i, row.len(), nr_columns,
                )));
            }
            if let Some(j) = row.iter().position(|value| !value.is_finite()) {
                return Err(Error::NonFinite { row: i, column: j });
            }
        }

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a matrix without rows, but with a known number of columns.
    pub fn without_rows(nr_columns: usize) -> Self {
        Self { data: Vec::new(), nr_rows: 0, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { 1_f64 } else { 0_f64 }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { data: vec![vec![0_f64; columns]; rows], nr_rows: rows, nr_columns: columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> f64 {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> Iter<'_, f64> {
        debug_assert!(i < self.nr_rows);

        self.data[i].iter()
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<f64> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Iterate over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.data.iter().map(Vec::as_slice)
    }

    /// Keep only the rows that are in a subset.
    ///
    /// The order of the remaining rows is preserved.
    ///
    /// # Arguments
    ///
    /// * `subset`: Indicator over the rows of this matrix.
    pub fn select_rows(&self, subset: &Subset) -> Self {
        debug_assert_eq!(subset.len(), self.nr_rows);

        let data = subset.support().map(|i| self.data[i].clone()).collect::<Vec<_>>();

        Self { nr_rows: data.len(), data, nr_columns: self.nr_columns }
    }

    /// Swap rows and columns.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let data = (0..self.nr_columns).map(|j| self.column(j)).collect();

        Self { data, nr_rows: self.nr_columns, nr_columns: self.nr_rows }
    }

    /// Multiply this matrix with a vector.
    pub fn multiply(&self, x: &[f64]) -> Vec<f64> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter()
            .map(|row| row.iter().zip(x).map(|(a, b)| a * b).sum())
            .collect()
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Get the number of values in this matrix.
    pub fn size(&self) -> usize {
        self.nr_rows * self.nr_columns
    }
}
