use alloc::string::String;
use alloc::vec;
use alloc::vec::Vec;

/// Index of the root node in the node arena. The root always exists, even for an empty codebook.
pub(crate) const ROOT: usize = 0;

#[derive(Debug, Clone, Default)]
pub(crate) struct Node {
    /// Set if and only if this node is a leaf.
    pub(crate) token: Option<String>,
    /// Child reached by reading `'0'` (slot 0) or `'1'` (slot 1).
    pub(crate) children: [Option<usize>; 2],
}

impl Node {
    pub(crate) fn is_leaf(&self) -> bool {
        self.children[0].is_none() && self.children[1].is_none()
    }
}

/// A validated, immutable trie mapping bit codes to tokens.
///
/// Nodes live in a flat arena and refer to their children by index, so dropping the
/// codebook frees the whole trie at once. Construct it with [`Codebook::build`].
#[derive(Debug, Clone)]
pub struct Codebook {
    pub(crate) nodes: Vec<Node>,
    pub(crate) num_tokens: usize,
    pub(crate) max_code_len: usize,
}

impl Codebook {
    pub(crate) fn empty() -> Codebook {
        Codebook {
            nodes: vec![Node::default()],
            num_tokens: 0,
            max_code_len: 0,
        }
    }

    pub(crate) fn node(&self, idx: usize) -> &Node {
        &self.nodes[idx]
    }

    /// Number of tokens (leaves) in the codebook.
    pub fn len(&self) -> usize {
        self.num_tokens
    }

    pub fn is_empty(&self) -> bool {
        self.num_tokens == 0
    }

    /// Length in bits of the longest code.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Returns true if every internal node has both children.
    ///
    /// An incomplete codebook is still usable, but some bit strings do not lead to any
    /// leaf and will make the decoder fail with [`DecodeError::BrokenTraversal`](crate::DecodeError::BrokenTraversal).
    pub fn is_complete(&self) -> bool {
        !self.is_empty()
            && self
                .nodes
                .iter()
                .all(|node| node.is_leaf() || (node.children[0].is_some() && node.children[1].is_some()))
    }

    /// Iterates over all `(token, code)` pairs, ordered by code (a `'0'` edge sorts before a `'1'` edge).
    ///
    /// The codes are reconstructed from the trie paths.
    pub fn entries(&self) -> Entries<'_> {
        let stack = if self.is_empty() {
            Vec::new()
        } else {
            vec![(ROOT, String::new())]
        };
        Entries {
            codebook: self,
            stack,
        }
    }
}

/// Iterator returned by [`Codebook::entries`].
pub struct Entries<'cb> {
    codebook: &'cb Codebook,
    stack: Vec<(usize, String)>,
}

impl<'cb> Iterator for Entries<'cb> {
    type Item = (&'cb str, String);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((idx, code)) = self.stack.pop() {
            let node = self.codebook.node(idx);
            if let Some(token) = &node.token {
                return Some((token.as_str(), code));
            }
            // push '1' first so the '0' branch is visited first
            for (bit, child) in [('1', node.children[1]), ('0', node.children[0])] {
                if let Some(child) = child {
                    let mut child_code = code.clone();
                    child_code.push(bit);
                    self.stack.push((child, child_code));
                }
            }
        }
        None
    }
}
