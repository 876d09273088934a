//! Encoding and decoding, in memory and between files.
//!
//! `encode` writes two files: the plain form (`header`, newline, then the
//! code as `'0'`/`'1'` text) and a packed sibling holding the same header line
//! followed by the code as real bits. Both are empty for an empty input.

use crate::bit_io::{BitSource, HuffmanBitReader, HuffmanBitWriter, TextBits};
use crate::code_table::CodeTable;
use crate::error::{HuffmanError, Result};
use crate::frequency::FrequencyTable;
use crate::header;
use crate::tree::{HuffmanNode, HuffmanTree};
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Inserted before the extension of the plain output to name the packed one.
pub const COMPRESSED_SUFFIX: &str = "_compressed";

/// `out.txt` -> `out_compressed.txt`; `out` -> `out_compressed`.
pub fn compressed_path(output: &Path) -> PathBuf {
    let mut name = output.file_stem().unwrap_or_default().to_os_string();
    name.push(COMPRESSED_SUFFIX);
    if let Some(extension) = output.extension() {
        name.push(".");
        name.push(extension);
    }
    output.with_file_name(name)
}

/// Header and code bits produced for one input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Encoding {
    header: String,
    bits: String,
}

impl Encoding {
    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn bits(&self) -> &str {
        &self.bits
    }

    /// True for an empty input: no header and no bits.
    pub fn is_empty(&self) -> bool {
        self.header.is_empty()
    }

    pub fn plain_text(&self) -> String {
        if self.is_empty() {
            String::new()
        } else {
            format!("{}\n{}", self.header, self.bits)
        }
    }

    pub fn write_compressed<W: Write>(&self, writer: W) -> io::Result<()> {
        let mut bits = HuffmanBitWriter::new(writer);
        if !self.is_empty() {
            bits.write_str(&format!("{}\n", self.header))?;
            bits.write_code(&self.bits)?;
        }
        bits.close()
    }
}

pub fn encode_bytes(data: &[u8]) -> Result<Encoding> {
    let table = FrequencyTable::from_bytes(data);
    let Some(tree) = HuffmanTree::from_frequencies(&table)? else {
        return Ok(Encoding::default());
    };

    let codes = CodeTable::from_tree(&tree);
    debug!(codes = codes.len(), "derived code table");
    Ok(Encoding {
        header: header::encode(&table),
        bits: codes.encode(data)?,
    })
}

/// Encodes `input` into the plain file `output` and the packed file at
/// `compressed_path(output)`.
///
/// Any failure, whatever its cause, is reported as
/// [`HuffmanError::UnreadableInput`] for `input`.
pub fn encode(input: &Path, output: &Path) -> Result<()> {
    let encoding = encode_files(input, output).map_err(|source| HuffmanError::UnreadableInput {
        path: input.to_path_buf(),
        source,
    })?;
    info!(
        input = %input.display(),
        output = %output.display(),
        bits = encoding.bits().len(),
        "encoded file"
    );
    Ok(())
}

fn encode_files(input: &Path, output: &Path) -> io::Result<Encoding> {
    let data = fs::read(input)?;
    let encoding =
        encode_bytes(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(output, encoding.plain_text())?;
    let packed = File::create(compressed_path(output))?;
    encoding.write_compressed(BufWriter::new(packed))?;
    Ok(encoding)
}

/// Bytes recovered by a decode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    pub bytes: Vec<u8>,
    /// Number of bytes the header announced.
    pub expected: u64,
}

impl Decoded {
    /// The bit stream ended before every announced byte was recovered.
    pub fn is_truncated(&self) -> bool {
        (self.bytes.len() as u64) < self.expected
    }
}

/// What to do once the header has been read.
enum DecodePlan {
    Empty,
    SingleSymbolReplay { symbol: u8, count: u64 },
    TreeWalk {
        root: Box<(HuffmanNode, HuffmanNode)>,
        expected: u64,
    },
}

impl DecodePlan {
    fn from_header(line: &str) -> Result<Self> {
        let table = header::decode(line)?;
        let Some(tree) = HuffmanTree::from_frequencies(&table)? else {
            return Ok(DecodePlan::Empty);
        };
        // One pair builds no merges: the root is that byte's leaf.
        Ok(match tree.into_root().into_branches() {
            Ok(root) => DecodePlan::TreeWalk {
                root,
                expected: table.total(),
            },
            Err(leaf) => DecodePlan::SingleSymbolReplay {
                symbol: leaf.symbol(),
                count: leaf.freq(),
            },
        })
    }

    fn run<S: BitSource>(self, bits: &mut S) -> Result<Decoded> {
        match self {
            DecodePlan::Empty => Ok(Decoded::default()),
            DecodePlan::SingleSymbolReplay { symbol, count } => {
                let too_large =
                    || HuffmanError::invalid_header(format!("count {} is too large to replay", count));
                let len = usize::try_from(count).map_err(|_| too_large())?;
                let mut bytes = Vec::new();
                bytes.try_reserve_exact(len).map_err(|_| too_large())?;
                bytes.resize(len, symbol);
                Ok(Decoded {
                    bytes,
                    expected: count,
                })
            }
            DecodePlan::TreeWalk { root, expected } => Ok(Decoded {
                bytes: walk_tree(&root, expected, bits)?,
                expected,
            }),
        }
    }
}

/// Follows bits from the root's branches, emitting a byte at every leaf, until
/// `expected` bytes are out. Running out of bits ends the walk early with
/// whatever has been decoded so far.
fn walk_tree<S: BitSource>(
    root: &(HuffmanNode, HuffmanNode),
    expected: u64,
    bits: &mut S,
) -> io::Result<Vec<u8>> {
    let mut output = Vec::new();
    let mut current = root;

    while (output.len() as u64) < expected {
        let Some(bit) = bits.read_bit()? else {
            break;
        };
        let next = if bit { &current.1 } else { &current.0 };
        match next.branches() {
            Some(branches) => current = branches,
            None => {
                output.push(next.symbol());
                current = root;
            }
        }
    }
    Ok(output)
}

/// Decodes a packed stream: a header line followed by the code bits.
pub fn decode_compressed<R: Read>(reader: R) -> Result<Decoded> {
    let mut stream = HuffmanBitReader::new(reader);
    let decoded = decode_packed(&mut stream);
    stream.close();
    decoded
}

fn decode_packed<R: Read>(stream: &mut HuffmanBitReader<R>) -> Result<Decoded> {
    let line = stream.read_str()?;
    DecodePlan::from_header(&line)?.run(stream)
}

/// Decodes the plain form: a header line followed by `'0'`/`'1'` text.
pub fn decode_plain_text(text: &str) -> Result<Decoded> {
    let (line, bits) = text.split_once('\n').unwrap_or((text, ""));
    DecodePlan::from_header(line)?.run(&mut TextBits::new(bits))
}

/// Decodes the packed file `encoded` into `decoded`.
///
/// A truncated stream is not an error: the bytes recovered before the cut are
/// written and the result reports [`Decoded::is_truncated`].
pub fn decode(encoded: &Path, decoded: &Path) -> Result<Decoded> {
    let mut stream =
        HuffmanBitReader::open(encoded).map_err(|source| HuffmanError::UnreadableInput {
            path: encoded.to_path_buf(),
            source,
        })?;
    let result = decode_packed(&mut stream);
    stream.close();

    finish_decode(encoded, decoded, result?)
}

/// Decodes the plain file `encoded` into `decoded`.
pub fn decode_plain(encoded: &Path, decoded: &Path) -> Result<Decoded> {
    let text = fs::read_to_string(encoded).map_err(|source| HuffmanError::UnreadableInput {
        path: encoded.to_path_buf(),
        source,
    })?;
    finish_decode(encoded, decoded, decode_plain_text(&text)?)
}

fn finish_decode(encoded: &Path, decoded: &Path, result: Decoded) -> Result<Decoded> {
    fs::write(decoded, &result.bytes)?;
    if result.is_truncated() {
        warn!(
            encoded = %encoded.display(),
            recovered = result.bytes.len(),
            expected = result.expected,
            "bit stream ended early, wrote partial output"
        );
    } else {
        info!(
            encoded = %encoded.display(),
            decoded = %decoded.display(),
            bytes = result.bytes.len(),
            "decoded file"
        );
    }
    Ok(result)
}
