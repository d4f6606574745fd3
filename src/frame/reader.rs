use super::{FrameArray, FrameMetadata};
use crate::interop::NativeFrameRecord;
use anyhow::bail;
use log::{debug, warn};
use std::slice;

/// Bounds-checked access to the records behind a [`FrameArray`].
///
/// This is the one place that knows the element stride and actually reads
/// the engine's buffer. Every read copies a record out by value; no
/// reference into the buffer ever escapes.
pub struct FrameReader<'a> {
    records: &'a [NativeFrameRecord],
}

impl<'a> FrameReader<'a> {
    /// Borrow the buffer behind `array` as a typed slice.
    ///
    /// Fails if the engine handed out a null address with a positive count.
    /// A negative count reads as empty.
    ///
    /// # Safety
    ///
    /// The engine-owned buffer described by `array` must be live, aligned
    /// for [`NativeFrameRecord`], and unmodified for the whole lifetime of
    /// the returned reader. The engine is the single writer and must not
    /// write while the reader exists.
    pub unsafe fn over(array: &'a FrameArray) -> anyhow::Result<Self> {
        let len = array.len();
        if len < 0 {
            warn!("native frame array reports negative length {len}, treating as empty");
            return Ok(Self { records: &[] });
        }
        let base = array.as_ptr();
        if base.is_null() {
            if len > 0 {
                bail!("native frame array has a null base address but claims {len} records");
            }
            return Ok(Self { records: &[] });
        }
        debug!("reading {len} frame records from native buffer");
        let records = unsafe { slice::from_raw_parts(base, len as usize) };
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Detached snapshot of the record at `index`, if it is in bounds.
    pub fn get(&self, index: usize) -> Option<FrameMetadata> {
        self.records.get(index).copied().map(FrameMetadata::new)
    }

    /// Detached snapshots of every record, in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = FrameMetadata> + '_ {
        self.records.iter().copied().map(FrameMetadata::new)
    }

    /// Detach the whole table, so the result can outlive the engine's
    /// validity window for the underlying buffer.
    pub fn snapshot(&self) -> Vec<FrameMetadata> {
        self.iter().collect()
    }
}
