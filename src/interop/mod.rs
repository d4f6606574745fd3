mod frame_array;
mod frame_record;

pub use frame_array::*;
pub use frame_record::*;
