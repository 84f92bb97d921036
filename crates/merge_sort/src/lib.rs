mod merge;
mod run;
mod sort;

use std::collections::TryReserveError;

use thiserror::Error;

pub use run::Run;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SortError {
    #[error("failed to allocate a scratch buffer of {len} elements")]
    ScratchAlloc {
        len: usize,
        #[source]
        source: TryReserveError,
    },
    #[error("run [{offset}, {offset} + {len}) is outside a sequence of {sequence_len} elements")]
    RunOutOfBounds {
        offset: usize,
        len: usize,
        sequence_len: usize,
    },
}

/// Sorts `seq` in place, ascending and stable.
///
/// Scratch buffers come from the global allocator, which aborts the process
/// if it cannot satisfy a request. Use [`try_sort`] to observe that failure
/// instead.
pub fn sort(seq: &mut [i32]) {
    sort::sort_by(seq, &mut i32::lt);
}

/// Like [`sort`], but reports scratch-buffer allocation failure.
///
/// On error `seq` still holds a permutation of its original elements.
pub fn try_sort(seq: &mut [i32]) -> Result<(), SortError> {
    try_sort_run(Run::whole(seq))
}

pub fn sort_run(run: Run<'_, i32>) {
    sort::sort_run_with(run, &mut i32::lt);
}

pub fn try_sort_run(run: Run<'_, i32>) -> Result<(), SortError> {
    sort::sort_run_by(run, &mut i32::lt, &mut sort::try_scratch_copy)
}

/// Merges the sorted runs `xs` and `ys` into `out`, preferring `xs` on ties.
///
/// `out.len()` must equal `xs.len() + ys.len()`. Unsorted inputs are not
/// detected and produce unsorted output.
pub fn merge(out: &mut [i32], xs: &[i32], ys: &[i32]) {
    merge::merge_by(out, xs, ys, &mut i32::lt);
}

#[inline]
pub fn is_sorted(seq: &[i32]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}
