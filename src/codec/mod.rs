//! String list encoding.

pub mod length_prefixed;

pub use length_prefixed::{decode, encode, Codec, CodecConfig};
