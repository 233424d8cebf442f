#[cfg(test)]
#[path = "../../../tests/unit/algorithms/math/distance_test.rs"]
mod distance_test;

use crate::utils::Float;

/// Calculates squared euclidean distance between two vectors: D = sum((a_i - b_i)^2).
///
/// NOTE: the square root is never taken: ranking needs only monotonicity, so the returned value
/// must not be compared against absolute euclidean thresholds without squaring them first.
pub fn squared_euclidean<A, B>(a: A, b: B) -> Float
where
    A: Iterator<Item = Float>,
    B: Iterator<Item = Float>,
{
    a.zip(b).fold(Float::default(), |acc, (a, b)| {
        let diff = a - b;
        acc + diff * diff
    })
}
