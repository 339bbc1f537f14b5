//! Dense matrix multiplication probe.
//!
//! Both operands are filled with uniform random values before the clock starts;
//! only the multiply is timed.

use super::timer::measure;
use super::{random_f64s, Probe};
use crate::error::ProbeError;
use crate::models::ProbeId;

/// Side length of the square operands.
pub const MATRIX_SIZE: usize = 3000;

/// Row-major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Matrix {
            rows,
            cols,
            data: vec![0.0; rows * cols],
        }
    }

    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self, ProbeError> {
        if data.len() != rows * cols {
            return Err(ProbeError::InvalidWorkload(format!(
                "{}x{} matrix needs {} values, got {}",
                rows,
                cols,
                rows * cols,
                data.len()
            )));
        }
        Ok(Matrix { rows, cols, data })
    }

    /// Square matrix of uniform values in [0, 1).
    pub fn random(size: usize) -> Self {
        Matrix {
            rows: size,
            cols: size,
            data: random_f64s(size * size),
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// `self * rhs`, accumulating in i-k-j order so the inner loop walks both
    /// `rhs` and the output row contiguously.
    pub fn multiply(&self, rhs: &Matrix) -> Result<Matrix, ProbeError> {
        if self.cols != rhs.rows {
            return Err(ProbeError::InvalidWorkload(format!(
                "cannot multiply {}x{} by {}x{}",
                self.rows, self.cols, rhs.rows, rhs.cols
            )));
        }

        let mut out = Matrix::zeros(self.rows, rhs.cols);
        if rhs.cols == 0 {
            return Ok(out);
        }
        for (i, out_row) in out.data.chunks_exact_mut(rhs.cols).enumerate() {
            let lhs_row = &self.data[i * self.cols..(i + 1) * self.cols];
            for (k, &lhs) in lhs_row.iter().enumerate() {
                let rhs_row = &rhs.data[k * rhs.cols..(k + 1) * rhs.cols];
                for (acc, &r) in out_row.iter_mut().zip(rhs_row) {
                    *acc += lhs * r;
                }
            }
        }
        Ok(out)
    }
}

#[derive(Clone, Debug)]
pub struct MatrixProbe {
    size: usize,
}

impl Default for MatrixProbe {
    fn default() -> Self {
        MatrixProbe { size: MATRIX_SIZE }
    }
}

impl MatrixProbe {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }
}

impl Probe for MatrixProbe {
    fn id(&self) -> ProbeId {
        ProbeId::Matrix
    }

    fn run(&self) -> Result<f64, ProbeError> {
        log::debug!("[MATRIX] Generating two {0}x{0} operands", self.size);
        let a = Matrix::random(self.size);
        let b = Matrix::random(self.size);

        let (product, elapsed) = measure(|| a.multiply(&b));
        product?;
        Ok(elapsed)
    }
}
