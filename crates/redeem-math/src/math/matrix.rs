use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::{Result, VectorError};
use crate::math::dense::DenseVector;
use crate::math::vector::{check_cardinality, Vector};

/// Row-major dense matrix. Only what outer products need lives here.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl DenseMatrix {
    pub fn from_shape_vec(shape: (usize, usize), data: Vec<f64>) -> Result<Self> {
        let (rows, cols) = shape;
        if data.len() != rows * cols {
            return Err(VectorError::Shape {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { data, rows, cols })
    }

    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.rows {
            return Err(VectorError::Index {
                index: row,
                size: self.rows,
            });
        }
        if col >= self.cols {
            return Err(VectorError::Index {
                index: col,
                size: self.cols,
            });
        }
        Ok(())
    }

    /// Unchecked read; `row` and `col` must be in range.
    pub fn get_quick(&self, row: usize, col: usize) -> f64 {
        self.data[self.offset(row, col)]
    }

    /// Unchecked write; `row` and `col` must be in range.
    pub fn set_quick(&mut self, row: usize, col: usize, value: f64) {
        let offset = self.offset(row, col);
        self.data[offset] = value;
    }

    pub fn get(&self, row: usize, col: usize) -> Result<f64> {
        self.check_bounds(row, col)?;
        Ok(self.get_quick(row, col))
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        self.check_bounds(row, col)?;
        self.set_quick(row, col, value);
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    pub fn row(&self, row: usize) -> Result<DenseVector> {
        if row >= self.rows {
            return Err(VectorError::Index {
                index: row,
                size: self.rows,
            });
        }
        Ok(DenseVector::from_slice(self.row_slice(row)))
    }

    pub fn column(&self, col: usize) -> Result<DenseVector> {
        if col >= self.cols {
            return Err(VectorError::Index {
                index: col,
                size: self.cols,
            });
        }
        Ok((0..self.rows).map(|row| self.get_quick(row, col)).collect())
    }

    /// Overwrite one row with the values of `other`.
    pub fn assign_row<V: Vector + ?Sized>(&mut self, row: usize, other: &V) -> Result<()> {
        check_cardinality(self.cols, other.size())?;
        if row >= self.rows {
            return Err(VectorError::Index {
                index: row,
                size: self.rows,
            });
        }
        let start = self.offset(row, 0);
        let slots = &mut self.data[start..start + self.cols];
        for (col, slot) in slots.iter_mut().enumerate() {
            *slot = other.get_quick(col);
        }
        Ok(())
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for DenseMatrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

impl fmt::Display for DenseMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for row in 0..self.rows {
            if row > 0 {
                write!(f, ", ")?;
            }
            write!(f, "[")?;
            for (col, value) in self.row_slice(row).iter().enumerate() {
                if col > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", value)?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
