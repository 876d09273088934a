//! # huffman
//!
//! Byte-oriented Huffman coding with a deterministic tree, so the decoder can
//! rebuild the encoder's code from the frequency header alone.
//!
//! ```no_run
//! use std::path::Path;
//!
//! // Writes out.txt (plain form) and out_compressed.txt (packed form).
//! huffman::encode(Path::new("input.txt"), Path::new("out.txt"))?;
//! huffman::decode(Path::new("out_compressed.txt"), Path::new("restored.txt"))?;
//! # Ok::<(), huffman::HuffmanError>(())
//! ```

pub mod bit_io;
pub mod code_table;
pub mod codec;
pub mod error;
pub mod frequency;
pub mod header;
pub mod ordered_list;
pub mod tree;

pub use code_table::CodeTable;
pub use codec::{
    compressed_path, decode, decode_compressed, decode_plain, decode_plain_text, encode,
    encode_bytes, Decoded, Encoding,
};
pub use error::{HuffmanError, Result};
pub use frequency::FrequencyTable;
pub use ordered_list::OrderedList;
pub use tree::{HuffmanNode, HuffmanTree};
