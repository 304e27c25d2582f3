//! Errors that might occur while decoding a bit stream.

#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("Encountered non-binary character in code stream: {got:?} (at character {offset})")]
    NonBinaryCharacter { got: char, offset: usize },
    #[error("Traversal hit a missing branch at character {offset}: code stream is inconsistent with the codebook")]
    BrokenTraversal { offset: usize },
    #[error("Reached a leaf without a token at character {offset}: the codebook is corrupt")]
    CorruptLeaf { offset: usize },
    #[error("Code stream ended mid-symbol, {pending_bits} bits into an incomplete code")]
    TruncatedStream { pending_bits: usize },
}

/// Failure of a decode pass that reads from a [`std::io::Read`] and writes into a [`std::io::Write`].
#[cfg(feature = "std")]
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeStreamError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Decode(#[from] DecodeError),
}
