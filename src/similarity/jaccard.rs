//! Jaccard similarity over word sets

use rustc_hash::FxHashSet;

/// |A ∩ B| / |A ∪ B|
///
/// Returns 0 when either set is empty, so empty sentences never count as
/// redundant.
pub fn jaccard_similarity(a: &FxHashSet<&str>, b: &FxHashSet<&str>) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|w| large.contains(*w)).count();
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
