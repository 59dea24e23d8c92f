//! Sparse unit vectors for sentence features
//!
//! Dimensions are vocabulary term ids kept in ascending order, so the dot
//! product is a linear merge and `a.dot(b) == b.dot(a)` bit for bit.

/// An L2-normalized sparse vector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UnitVector {
    /// Non-zero dimensions: (term id, weight), sorted by term id
    dimensions: Vec<(u32, f64)>,
    /// L2 norm before normalization
    pub norm: f64,
}

impl UnitVector {
    /// Create a new empty (zero) vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from raw `(term id, weight)` pairs
    ///
    /// Pairs are sorted, duplicate ids summed, zero weights dropped, and the
    /// result scaled to unit length. An all-zero input stays the zero vector.
    pub fn from_dimensions(mut dimensions: Vec<(u32, f64)>) -> Self {
        dimensions.sort_by_key(|&(id, _)| id);
        dimensions.dedup_by(|next, kept| {
            if next.0 == kept.0 {
                kept.1 += next.1;
                true
            } else {
                false
            }
        });
        dimensions.retain(|&(_, w)| w != 0.0);

        let norm = Self::compute_norm(&dimensions);
        if norm > 0.0 {
            for (_, value) in dimensions.iter_mut() {
                *value /= norm;
            }
        }
        Self { dimensions, norm }
    }

    fn compute_norm(dimensions: &[(u32, f64)]) -> f64 {
        dimensions.iter().map(|(_, v)| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity with another vector
    ///
    /// Both vectors are normalized, so this is the dot product. The zero
    /// vector has similarity 0 with everything.
    pub fn cosine_similarity(&self, other: &UnitVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut dot = 0.0;
        while i < self.dimensions.len() && j < other.dimensions.len() {
            let (a_id, a) = self.dimensions[i];
            let (b_id, b) = other.dimensions[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a * b;
                    i += 1;
                    j += 1;
                }
            }
        }
        dot
    }

    /// Weight of a dimension (0 when absent)
    pub fn weight(&self, id: u32) -> f64 {
        self.dimensions
            .binary_search_by_key(&id, |&(d, _)| d)
            .map(|pos| self.dimensions[pos].1)
            .unwrap_or(0.0)
    }

    /// Non-zero dimensions in ascending id order
    pub fn dimensions(&self) -> &[(u32, f64)] {
        &self.dimensions
    }

    /// Number of non-zero dimensions
    pub fn nnz(&self) -> usize {
        self.dimensions.len()
    }

    /// Check if this is the zero vector
    pub fn is_empty(&self) -> bool {
        self.dimensions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical() {
        let v1 = UnitVector::from_dimensions(vec![(0, 1.0), (1, 2.0)]);
        let v2 = UnitVector::from_dimensions(vec![(1, 2.0), (0, 1.0)]);

        let sim = v1.cosine_similarity(&v2);
        assert!((sim - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_cosine_similarity_orthogonal() {
        let v1 = UnitVector::from_dimensions(vec![(0, 1.0)]);
        let v2 = UnitVector::from_dimensions(vec![(1, 1.0)]);

        assert_eq!(v1.cosine_similarity(&v2), 0.0);
    }

    #[test]
    fn test_cosine_similarity_symmetric() {
        let v1 = UnitVector::from_dimensions(vec![(0, 0.3), (2, 1.7), (5, 0.2)]);
        let v2 = UnitVector::from_dimensions(vec![(2, 0.9), (3, 1.1), (5, 2.5)]);

        assert_eq!(v1.cosine_similarity(&v2), v2.cosine_similarity(&v1));
    }

    #[test]
    fn test_empty_vector() {
        let v = UnitVector::new();
        assert!(v.is_empty());
        assert_eq!(v.norm, 0.0);

        let other = UnitVector::from_dimensions(vec![(0, 1.0)]);
        assert_eq!(v.cosine_similarity(&other), 0.0);
    }

    #[test]
    fn test_unit_normalization() {
        let v = UnitVector::from_dimensions(vec![(0, 3.0), (1, 4.0)]);

        assert!((v.norm - 5.0).abs() < 1e-12);
        assert!((v.weight(0) - 0.6).abs() < 1e-12);
        assert!((v.weight(1) - 0.8).abs() < 1e-12);
        assert_eq!(v.weight(7), 0.0);
    }

    #[test]
    fn test_duplicate_ids_are_summed() {
        let v = UnitVector::from_dimensions(vec![(4, 1.0), (4, 1.0), (9, 0.0)]);

        assert_eq!(v.nnz(), 1);
        assert!((v.norm - 2.0).abs() < 1e-12);
        assert!((v.weight(4) - 1.0).abs() < 1e-12);
    }
}
