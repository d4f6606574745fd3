use serde::{Deserialize, Serialize};

/// One frame's metadata exactly as the native indexer lays it out in memory.
///
/// Field order, signedness, and width mirror the engine's published struct;
/// reordering or resizing any member breaks the ABI at the boundary. Values
/// are passed through unvalidated: a negative frame index is the engine's
/// problem, not ours.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, bytemuck::Zeroable, Serialize, Deserialize)]
pub struct NativeFrameRecord {
    pub pts: i64,
    pub repeat_pict: i32,
    pub key_frame: i32,
    pub file_pos: i64,
    pub frame: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytemuck::Zeroable;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn layout_matches_engine_abi() {
        assert_eq!(size_of::<NativeFrameRecord>(), 32);
        assert_eq!(align_of::<NativeFrameRecord>(), 8);
        assert_eq!(offset_of!(NativeFrameRecord, pts), 0);
        assert_eq!(offset_of!(NativeFrameRecord, repeat_pict), 8);
        assert_eq!(offset_of!(NativeFrameRecord, key_frame), 12);
        assert_eq!(offset_of!(NativeFrameRecord, file_pos), 16);
        assert_eq!(offset_of!(NativeFrameRecord, frame), 24);
    }

    #[test]
    fn zeroed_record_is_all_zero() {
        let record = NativeFrameRecord::zeroed();
        assert_eq!(record.pts, 0);
        assert_eq!(record.repeat_pict, 0);
        assert_eq!(record.key_frame, 0);
        assert_eq!(record.file_pos, 0);
        assert_eq!(record.frame, 0);
    }
}
