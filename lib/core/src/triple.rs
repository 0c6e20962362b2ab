use serde::{Deserialize, Serialize};

/// An N-P-K composition triple (conventionally three nutrient percentages)
///
/// No range constraint is enforced; the matcher only needs the three
/// values to be present and numeric.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct NpkTriple {
    pub n: f64,
    pub p: f64,
    pub k: f64,
}

impl NpkTriple {
    #[inline]
    #[must_use]
    pub fn new(n: f64, p: f64, k: f64) -> Self {
        Self { n, p, k }
    }

    /// Compute Euclidean distance to another triple
    #[inline]
    pub fn distance(&self, other: &NpkTriple) -> f64 {
        let dn = self.n - other.n;
        let dp = self.p - other.p;
        let dk = self.k - other.k;
        (dn * dn + dp * dp + dk * dk).sqrt()
    }
}
