// File: src/scoring/distance.rs

/// Cosine distance `1 - a·b / (|a| |b|)` over quantized components.
///
/// Products are accumulated in `i64`, so no intermediate overflows; the
/// division happens once in `f64`. If either vector has zero norm the
/// distance is `0.0`. Colinear vectors are detected in integers, so
/// `cosine_distance(v, v)` is exactly `0.0`; otherwise the result is
/// clamped to `[0, 2]`.
pub fn cosine_distance(a: &[i8], b: &[i8]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "embedding dimensions must match");

    let mut dot = 0i64;
    let mut norm_a = 0i64;
    let mut norm_b = 0i64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (x as i64, y as i64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }
    // |dot| <= 300 * 128 * 128, so the squares below stay in range.
    if dot * dot == norm_a * norm_b {
        return if dot > 0 { 0.0 } else { 2.0 };
    }
    let similarity = dot as f64 / ((norm_a as f64).sqrt() * (norm_b as f64).sqrt());
    1.0 - similarity.clamp(-1.0, 1.0)
}
