//! Structures and utilities used for decoding bit streams with a [`Codebook`](crate::Codebook)

mod codebook_decoder;
pub mod errors;
#[cfg(feature = "std")]
mod stream;

pub use codebook_decoder::{CodebookDecoder, DecodedTokens};
pub use errors::DecodeError;
#[cfg(feature = "std")]
pub use errors::DecodeStreamError;
#[cfg(feature = "std")]
pub use stream::DEFAULT_SEPARATOR;
