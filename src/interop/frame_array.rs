use super::NativeFrameRecord;

/// Descriptor for an engine-owned contiguous run of [`NativeFrameRecord`]s,
/// as returned by the engine's bulk metadata query.
///
/// Carries the base address and element count verbatim and owns nothing.
/// The address may be null and the count is whatever the engine reported,
/// sign included.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Zeroable)]
pub struct NativeFrameArray {
    pub frames: *const NativeFrameRecord,
    pub len: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{align_of, offset_of, size_of};

    #[test]
    fn layout_matches_engine_abi() {
        let ptr_width = size_of::<*const NativeFrameRecord>();
        assert_eq!(offset_of!(NativeFrameArray, frames), 0);
        assert_eq!(offset_of!(NativeFrameArray, len), ptr_width);
        assert_eq!(size_of::<NativeFrameArray>(), ptr_width * 2);
        assert_eq!(align_of::<NativeFrameArray>(), ptr_width);
    }
}
