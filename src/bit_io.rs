//! Bit-granular reader and writer for the packed encoding.
//!
//! Bits are packed most-significant first. `close` pads the final byte with
//! zeros; the decoder never reads the padding because it stops once it has
//! produced as many bytes as the header counts.

use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::Path;

/// Anything that yields one bit at a time; `None` marks the end of the bits.
pub trait BitSource {
    fn read_bit(&mut self) -> io::Result<Option<bool>>;
}

pub struct HuffmanBitWriter<W: Write> {
    inner: BitWriter<W, BigEndian>,
}

impl<W: Write> HuffmanBitWriter<W> {
    pub fn new(writer: W) -> Self {
        HuffmanBitWriter {
            inner: BitWriter::endian(writer, BigEndian),
        }
    }

    /// Writes `text` as whole bytes.
    pub fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.inner.write_bytes(text.as_bytes())
    }

    /// Packs each `'0'`/`'1'` character of `code` as one bit.
    pub fn write_code(&mut self, code: &str) -> io::Result<()> {
        for c in code.chars() {
            let bit = match c {
                '0' => false,
                '1' => true,
                other => {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        format!("`{}` is not a bit character", other),
                    ));
                }
            };
            self.inner.write_bit(bit)?;
        }
        Ok(())
    }

    /// Pads to a byte boundary and flushes the underlying writer.
    pub fn close(mut self) -> io::Result<()> {
        self.inner.byte_align()?;
        let mut writer = self.inner.into_writer();
        writer.flush()
    }
}

pub struct HuffmanBitReader<R: Read> {
    inner: BitReader<R, BigEndian>,
}

impl HuffmanBitReader<BufReader<File>> {
    pub fn open(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufReader::new(File::open(path)?)))
    }
}

impl<R: Read> HuffmanBitReader<R> {
    pub fn new(reader: R) -> Self {
        HuffmanBitReader {
            inner: BitReader::endian(reader, BigEndian),
        }
    }

    /// Reads whole bytes up to (and consuming) the next `'\n'` or the end of
    /// the stream, and returns them without the newline.
    pub fn read_str(&mut self) -> io::Result<String> {
        let mut line = Vec::new();
        let mut byte = [0u8; 1];
        loop {
            match self.inner.read_bytes(&mut byte) {
                Ok(()) if byte[0] == b'\n' => break,
                Ok(()) => line.push(byte[0]),
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e),
            }
        }
        String::from_utf8(line).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }

    /// Releases the underlying reader. Dropping the reader does the same; this
    /// makes the release point explicit at call sites.
    pub fn close(self) {
        drop(self.inner);
    }
}

impl<R: Read> BitSource for HuffmanBitReader<R> {
    fn read_bit(&mut self) -> io::Result<Option<bool>> {
        match self.inner.read_bit() {
            Ok(bit) => Ok(Some(bit)),
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(e) => Err(e),
        }
    }
}

/// Bits spelled out as `'0'`/`'1'` characters, as in the plain encoded file.
/// Any other character ends the stream.
pub struct TextBits<'a> {
    chars: std::str::Chars<'a>,
}

impl<'a> TextBits<'a> {
    pub fn new(text: &'a str) -> Self {
        TextBits {
            chars: text.chars(),
        }
    }
}

impl BitSource for TextBits<'_> {
    fn read_bit(&mut self) -> io::Result<Option<bool>> {
        Ok(match self.chars.next() {
            Some('0') => Some(false),
            Some('1') => Some(true),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<S: BitSource>(source: &mut S) -> String {
        let mut bits = String::new();
        while let Some(bit) = source.read_bit().unwrap() {
            bits.push(if bit { '1' } else { '0' });
        }
        bits
    }

    #[test]
    fn packs_header_then_bits() {
        let mut out = Vec::new();
        let mut writer = HuffmanBitWriter::new(&mut out);
        writer.write_str("97 3 98 4 99 2\n").unwrap();
        writer.write_code("11111100001010").unwrap();
        writer.close().unwrap();

        assert_eq!(&out[..15], b"97 3 98 4 99 2\n");
        assert_eq!(&out[15..], &[0b1111_1100, 0b0010_1000]);
    }

    #[test]
    fn reads_back_header_and_padded_bits() {
        let mut data = b"65 1 66 1\n".to_vec();
        data.push(0b0110_0000);
        let mut reader = HuffmanBitReader::new(data.as_slice());
        assert_eq!(reader.read_str().unwrap(), "65 1 66 1");
        assert_eq!(drain(&mut reader), "01100000");
        reader.close();
    }

    #[test]
    fn empty_stream_reads_empty_header() {
        let mut reader = HuffmanBitReader::new(&b""[..]);
        assert_eq!(reader.read_str().unwrap(), "");
        assert_eq!(reader.read_bit().unwrap(), None);
    }

    #[test]
    fn rejects_non_bit_characters() {
        let mut writer = HuffmanBitWriter::new(Vec::new());
        assert!(writer.write_code("0120").is_err());
    }

    #[test]
    fn text_bits_stop_at_first_foreign_character() {
        assert_eq!(drain(&mut TextBits::new("0110\n1")), "0110");
        assert_eq!(drain(&mut TextBits::new("")), "");
    }
}
