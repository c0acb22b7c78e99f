/// Lazy permutation generator over `0..n` in lexicographic order.
///
/// The order is the one produced by the classic recursive generator that picks each
/// element in turn as the head and permutes the rest, so callers that stop after the
/// first `k` permutations see exactly the same prefix. Each step is the standard
/// next-permutation transformation, so no recursion or per-level buffers are needed.
///
/// # Example
/// ```
/// use graph_cycles::solver::permutations::Permutations;
///
/// let perms: Vec<Vec<usize>> = Permutations::new(3).collect();
/// assert_eq!(perms, vec![
///     vec![0, 1, 2],
///     vec![0, 2, 1],
///     vec![1, 0, 2],
///     vec![1, 2, 0],
///     vec![2, 0, 1],
///     vec![2, 1, 0],
/// ]);
///
/// // Bounded use: only the first few are ever built.
/// assert_eq!(Permutations::new(10).take(4).count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Permutations {
    current: Option<Vec<usize>>,
}

impl Permutations {
    pub fn new(n: usize) -> Self {
        Self {
            current: Some((0..n).collect()),
        }
    }
}

impl Iterator for Permutations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current.take()?;
        let mut successor = current.clone();
        if advance(&mut successor) {
            self.current = Some(successor);
        }
        Some(current)
    }
}

/// Rearrange `items` into the next lexicographic permutation.
/// Returns false (leaving `items` untouched) when it is already the last one.
fn advance(items: &mut [usize]) -> bool {
    // 1. Longest non-increasing suffix; its left neighbor is the pivot.
    let Some(pivot) = items.windows(2).rposition(|w| w[0] < w[1]) else {
        return false;
    };

    // 2. Rightmost element larger than the pivot (the suffix is non-increasing).
    let Some(successor) = items.iter().rposition(|&x| x > items[pivot]) else {
        return false;
    };

    // 3. Swap, then restore the suffix to ascending order.
    items.swap(pivot, successor);
    items[pivot + 1..].reverse();
    true
}
