use tracing::{debug, trace};

use crate::SortError;
use crate::merge::merge_by;
use crate::run::Run;

/// Top-down merge sort over `run`.
///
/// `acquire` hands out the scratch buffer for each non-trivial merge as a copy
/// of the run it will be merged for, so the buffer length always matches the
/// combined length of the two halves. The buffer is dropped before returning.
pub(crate) fn sort_run_by<T, F, A, E>(
    mut run: Run<'_, T>,
    is_less: &mut F,
    acquire: &mut A,
) -> Result<(), E>
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
    A: FnMut(&[T]) -> Result<Vec<T>, E>,
{
    let len = run.len();
    trace!(offset = run.offset(), len, "sort run");
    if len <= 1 {
        return Ok(());
    }

    {
        let (left, right) = run.split_half();
        sort_run_by(left, is_less, acquire)?;
        sort_run_by(right, is_less, acquire)?;
    }

    let mid = len / 2;
    debug_assert_eq!(mid + (len - mid), len);

    let mut scratch = acquire(run.as_slice())?;
    let (xs, ys) = run.as_slice().split_at(mid);
    merge_by(&mut scratch, xs, ys, is_less);
    run.as_mut_slice().copy_from_slice(&scratch);
    Ok(())
}

pub(crate) fn sort_by<T, F>(seq: &mut [T], is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    sort_run_with(Run::whole(seq), is_less);
}

pub(crate) fn sort_run_with<T, F>(run: Run<'_, T>, is_less: &mut F)
where
    T: Copy,
    F: FnMut(&T, &T) -> bool,
{
    let Ok(()) = sort_run_by(run, is_less, &mut scratch_copy);
}

#[inline]
fn scratch_copy<T: Copy>(run: &[T]) -> Result<Vec<T>, std::convert::Infallible> {
    Ok(run.to_vec())
}

pub(crate) fn try_scratch_copy<T: Copy>(run: &[T]) -> Result<Vec<T>, SortError> {
    let len = run.len();
    let mut scratch = Vec::new();
    if let Err(source) = scratch.try_reserve_exact(len) {
        debug!(len, "scratch buffer allocation failed");
        return Err(SortError::ScratchAlloc { len, source });
    }
    scratch.extend_from_slice(run);
    Ok(scratch)
}
