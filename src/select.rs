use compare::Compare;

/// Keeps the `k` smallest elements of `items` under `cmp`, in no particular
/// order, and drops the rest. Runs in expected linear time.
///
/// Among elements equal to the `k`-th smallest, which ones survive is
/// unspecified.
pub fn select_smallest<T, C: Compare<T>>(items: &mut Vec<T>, k: usize, cmp: &C) {
    if k >= items.len() {
        return;
    }
    if k > 0 {
        items.select_nth_unstable_by(k - 1, |a, b| cmp.compare(a, b));
    }
    items.truncate(k);
}
