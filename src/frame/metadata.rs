use crate::interop::NativeFrameRecord;
use serde::{Deserialize, Serialize};

/// Immutable, fully detached snapshot of one frame's metadata.
///
/// Holds its own copy of the native record, so it stays valid no matter what
/// the engine does with the memory the record originally came from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameMetadata {
    record: NativeFrameRecord,
}

impl FrameMetadata {
    pub fn new(record: NativeFrameRecord) -> Self {
        Self { record }
    }

    /// Decoding timestamp in the track's native time-base units.
    ///
    /// Callers wanting wallclock milliseconds compute
    /// `(pts * time_base_numerator) / time_base_denominator` with the track's
    /// time base; that conversion happens upstream, not here.
    pub fn pts(&self) -> i64 {
        self.record.pts
    }

    pub fn repeat_picture(&self) -> i32 {
        self.record.repeat_pict
    }

    /// Whether this frame is a random-access point. Any nonzero engine flag
    /// counts as true; the raw integer stays untouched in the record.
    pub fn is_key_frame(&self) -> bool {
        self.record.key_frame != 0
    }

    pub fn file_offset(&self) -> i64 {
        self.record.file_pos
    }

    pub fn frame_index(&self) -> i32 {
        self.record.frame
    }
}

impl From<NativeFrameRecord> for FrameMetadata {
    fn from(record: NativeFrameRecord) -> Self {
        Self::new(record)
    }
}
