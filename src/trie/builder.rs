use super::codebook::{Codebook, Node, ROOT};
use alloc::string::String;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuildError {
    #[error("Codebook entry {index} has an empty token")]
    EmptyToken { index: usize },
    #[error("Empty code for token: {token}")]
    EmptyCode { token: String },
    #[error("Invalid bit '{bit}' in code for token: {token}")]
    InvalidBit { bit: char, token: String },
    #[error("Duplicate code: token '{token}' uses the same code as '{existing}'")]
    DuplicateCode { token: String, existing: String },
    #[error("Prefix conflict: code for '{token}' is a prefix of another code or has another code as its prefix")]
    PrefixConflict { token: String },
}

impl Codebook {
    /// Builds a fresh codebook trie from `(token, code)` pairs.
    ///
    /// Every token must be non-empty and every code a non-empty string over `'0'`/`'1'`.
    /// The codes must be distinct and prefix free. The first violation aborts the build;
    /// no partially built trie is ever returned.
    ///
    /// The insertion order only decides which token is blamed in a conflict, valid inputs
    /// produce the same trie in any order.
    pub fn build<I, T, C>(pairs: I) -> Result<Codebook, BuildError>
    where
        I: IntoIterator<Item = (T, C)>,
        T: AsRef<str>,
        C: AsRef<str>,
    {
        use BuildError as err;

        let mut codebook = Codebook::empty();

        for (index, (token, code)) in pairs.into_iter().enumerate() {
            let token = token.as_ref();
            let code = code.as_ref();

            if token.is_empty() {
                return Err(err::EmptyToken { index });
            }
            if code.is_empty() {
                return Err(err::EmptyCode {
                    token: token.into(),
                });
            }
            if let Some(bit) = code.chars().find(|c| *c != '0' && *c != '1') {
                return Err(err::InvalidBit {
                    bit,
                    token: token.into(),
                });
            }

            codebook.insert(token, code)?;
        }

        vprintln!(
            "Built codebook with {} tokens in {} nodes, longest code: {} bits",
            codebook.num_tokens,
            codebook.nodes.len(),
            codebook.max_code_len
        );
        Ok(codebook)
    }

    /// Walks `code` from the root, creating missing nodes, and labels the terminal node.
    ///
    /// `code` must already be validated to only contain `'0'` and `'1'`.
    fn insert(&mut self, token: &str, code: &str) -> Result<(), BuildError> {
        use BuildError as err;

        let mut current = ROOT;
        for bit in code.bytes() {
            // a labeled node is a leaf and must never get children
            if self.nodes[current].token.is_some() {
                return Err(err::PrefixConflict {
                    token: token.into(),
                });
            }

            let slot = usize::from(bit - b'0');
            current = match self.nodes[current].children[slot] {
                Some(next) => next,
                None => {
                    let next = self.nodes.len();
                    self.nodes.push(Node::default());
                    self.nodes[current].children[slot] = Some(next);
                    next
                }
            };
        }

        let terminal = &mut self.nodes[current];
        if let Some(existing) = &terminal.token {
            return Err(err::DuplicateCode {
                token: token.into(),
                existing: existing.clone(),
            });
        }
        if !terminal.is_leaf() {
            return Err(err::PrefixConflict {
                token: token.into(),
            });
        }
        terminal.token = Some(token.into());

        self.num_tokens += 1;
        self.max_code_len = self.max_code_len.max(code.len());
        Ok(())
    }
}
