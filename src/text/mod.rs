pub mod offsets;
pub mod whitespace;

pub use offsets::{CharOffsetMapper, OffsetMapper, Utf16OffsetMapper};
pub use whitespace::{collapse_inward, expand_outward};
