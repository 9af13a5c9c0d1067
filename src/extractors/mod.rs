//! Request extractors whose rejections are rendered as `{message}` bodies.

mod id;
mod payload;

pub use id::{RecordId, INVALID_ID};
pub use payload::Payload;
