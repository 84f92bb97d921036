/// Merges the sorted runs `xs` and `ys` into `out`.
///
/// `out` must hold exactly `xs.len() + ys.len()` elements. Each cursor is
/// checked for exhaustion before its run is read, so neither input is ever
/// indexed past its end. Ties take from `xs` first, which keeps the merge
/// stable.
pub(crate) fn merge_by<T, F>(out: &mut [T], xs: &[T], ys: &[T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    debug_assert_eq!(out.len(), xs.len() + ys.len());

    let mut i = 0usize;
    let mut j = 0usize;
    for slot in out.iter_mut() {
        *slot = match (xs.get(i), ys.get(j)) {
            (Some(x), Some(y)) => {
                if is_less(y, x) {
                    j += 1;
                    *y
                } else {
                    i += 1;
                    *x
                }
            }
            (Some(x), None) => {
                i += 1;
                *x
            }
            (None, Some(y)) => {
                j += 1;
                *y
            }
            (None, None) => break,
        };
    }
}
