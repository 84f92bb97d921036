use crate::SortError;

/// A borrowed window `[offset, offset + len)` over the sequence being sorted.
///
/// The offset is kept relative to the original sequence so that nested
/// halves still report where they live.
#[derive(Debug)]
pub struct Run<'a, T = i32> {
    data: &'a mut [T],
    offset: usize,
}

impl<'a, T> Run<'a, T> {
    pub fn new(seq: &'a mut [T], offset: usize, len: usize) -> Result<Self, SortError> {
        let sequence_len = seq.len();
        let out_of_bounds = || SortError::RunOutOfBounds {
            offset,
            len,
            sequence_len,
        };
        let end = offset.checked_add(len).ok_or_else(out_of_bounds)?;
        let data = seq.get_mut(offset..end).ok_or_else(out_of_bounds)?;
        Ok(Self { data, offset })
    }

    /// The whole sequence as a single run.
    pub fn whole(seq: &'a mut [T]) -> Self {
        Self {
            data: seq,
            offset: 0,
        }
    }

    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &*self.data
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut *self.data
    }

    /// Splits into `floor(n/2)` and `n - floor(n/2)` elements; the right run
    /// takes the extra element when `n` is odd.
    pub fn split_half(&mut self) -> (Run<'_, T>, Run<'_, T>) {
        let offset = self.offset;
        let mid = self.data.len() / 2;
        let (left, right) = self.data.split_at_mut(mid);
        (
            Run { data: left, offset },
            Run {
                data: right,
                offset: offset + mid,
            },
        )
    }
}
