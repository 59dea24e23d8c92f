//! Dense pairwise similarity matrix
//!
//! Sentence counts are small (one document), so a row-major `n × n` buffer
//! is simpler and faster than a sparse layout.

use super::vector::UnitVector;
use rayon::prelude::*;

/// Row count at which rows are computed on the rayon pool
pub const PARALLEL_THRESHOLD: usize = 256;

/// A square, symmetric matrix of sentence similarities
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Cosine similarity between every pair of vectors
    ///
    /// The diagonal is 1.0 (self-similarity), including for zero vectors.
    pub fn from_vectors(vectors: &[UnitVector]) -> Self {
        let size = vectors.len();
        let row = |i: usize| -> Vec<f64> {
            (0..size)
                .map(|j| {
                    if i == j {
                        1.0
                    } else {
                        vectors[i].cosine_similarity(&vectors[j])
                    }
                })
                .collect()
        };

        // Rows are independent; both paths produce identical values.
        let rows: Vec<Vec<f64>> = if size >= PARALLEL_THRESHOLD {
            (0..size).into_par_iter().map(row).collect()
        } else {
            (0..size).map(row).collect()
        };

        Self {
            size,
            values: rows.into_iter().flatten().collect(),
        }
    }

    /// Every entry 1.0: all sentences equally similar
    pub fn uniform(size: usize) -> Self {
        Self {
            size,
            values: vec![1.0; size * size],
        }
    }

    /// Build from explicit rows; returns `None` unless the rows form a square
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|r| r.len() != size) {
            return None;
        }
        Some(Self {
            size,
            values: rows.into_iter().flatten().collect(),
        })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Check if the matrix has no rows
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Entry (i, j)
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.size + j]
    }

    /// Row `i` as a slice
    pub fn row(&self, i: usize) -> &[f64] {
        &self.values[i * self.size..(i + 1) * self.size]
    }

    /// Check symmetry within `tolerance`
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| (self.get(i, j) - self.get(j, i)).abs() <= tolerance)
        })
    }
}
