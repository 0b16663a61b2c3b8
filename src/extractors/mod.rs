//! Request extractors whose rejections are answered with the envelope.

mod id;

pub use id::IdPath;
