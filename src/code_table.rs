use crate::error::{HuffmanError, Result};
use crate::tree::{HuffmanNode, HuffmanTree};
use std::collections::BTreeMap;

/// Bit-string code for every byte that appears in the tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<u8, String>,
}

impl CodeTable {
    /// Assigns `0` to every left edge and `1` to every right edge. A tree made
    /// of a single leaf gives that byte the empty code.
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = BTreeMap::new();
        let mut path = String::new();
        assign_codes(tree.root(), &mut path, &mut codes);
        CodeTable { codes }
    }

    pub fn get(&self, symbol: u8) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Translates `data` into one string of `'0'`/`'1'` characters.
    pub fn encode(&self, data: &[u8]) -> Result<String> {
        let mut bits = String::new();
        for &symbol in data {
            let code = self
                .get(symbol)
                .ok_or(HuffmanError::MissingCode { symbol })?;
            bits.push_str(code);
        }
        Ok(bits)
    }
}

fn assign_codes(node: &HuffmanNode, path: &mut String, codes: &mut BTreeMap<u8, String>) {
    match (node.left(), node.right()) {
        (Some(left), Some(right)) => {
            path.push('0');
            assign_codes(left, path, codes);
            path.pop();

            path.push('1');
            assign_codes(right, path, codes);
            path.pop();
        }
        _ => {
            codes.insert(node.symbol(), path.clone());
        }
    }
}
