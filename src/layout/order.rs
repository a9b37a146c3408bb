use crate::catalog::Label;

/// Produce the processing order for one placement pass: heaviest labels
/// first so they claim central spiral positions, with a fixed swap pass so
/// same-weight labels do not render in source-list order. The permutation
/// depends only on list length and index; no RNG, identical across runs.
pub fn processing_order(labels: &[Label]) -> Vec<Label> {
    let mut ordered: Vec<Label> = labels.to_vec();
    ordered.sort_by(|a, b| b.weight.cmp(&a.weight));
    let n = ordered.len();
    for i in 0..n {
        // n - i >= 1 inside the loop; at i = n - 1 the swap is a no-op.
        let j = i + (i * 7) % (n - i);
        ordered.swap(i, j);
    }
    ordered
}
