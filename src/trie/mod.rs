/// A prefix code assigns every token a string of bits such that no code is a
/// prefix of another one. Because of that a decoder can walk a binary trie from
/// the root, one bit at a time, and knows it has seen a complete code exactly when
/// it lands on a leaf.
///
/// The trie in this module is built once from an externally supplied codebook and
/// never changes afterwards.
mod builder;
mod codebook;

pub use builder::*;
pub use codebook::*;
