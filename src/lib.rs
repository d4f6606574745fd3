//! Read-only, typed views over the per-frame metadata a native media
//! indexing engine hands across its boundary.
//!
//! The raw `#[repr(C)]` layer lives in [`interop`]; the safe surface callers
//! should use lives in [`frame`] and is re-exported here.

pub mod frame;
pub mod interop;

pub use frame::{FrameArray, FrameMetadata, FrameReader};
