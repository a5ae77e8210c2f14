use std::fmt::{Display, Formatter};
use std::str::FromStr;

use tracing::trace;

use super::bitstream::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Charset
//------------------------------------------------------------------------------

/// How text is turned into byte mode codewords
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default)]
pub enum Charset {
    /// ISO-8859-1, rejecting code points above U+00FF
    #[default]
    Latin1,
    /// Keeps the low 8 bits of every code point
    Latin1Lossy,
    /// Raw UTF-8 bytes
    Utf8,
}

impl Display for Charset {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Latin1 => "latin1",
            Self::Latin1Lossy => "latin1-lossy",
            Self::Utf8 => "utf8",
        };
        f.write_str(name)
    }
}

impl FromStr for Charset {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latin1" | "iso-8859-1" => Ok(Self::Latin1),
            "latin1-lossy" => Ok(Self::Latin1Lossy),
            "utf8" | "utf-8" => Ok(Self::Utf8),
            _ => Err(QRError::InvalidCharset(s.to_string())),
        }
    }
}

pub fn encode_text(text: &str, charset: Charset) -> QRResult<Vec<u8>> {
    match charset {
        Charset::Latin1 => {
            if !encoding_rs::mem::is_str_latin1(text) {
                let (index, ch) = text
                    .chars()
                    .enumerate()
                    .find(|(_, ch)| *ch as u32 > 0xff)
                    .unwrap_or_default();
                return Err(QRError::NonLatinCodepoint { ch, index });
            }
            Ok(encoding_rs::mem::encode_latin1_lossy(text).into_owned())
        }
        Charset::Latin1Lossy => Ok(text.chars().map(|ch| ch as u32 as u8).collect()),
        Charset::Utf8 => Ok(text.as_bytes().to_vec()),
    }
}


// Version selection
//------------------------------------------------------------------------------

/// Smallest version whose byte mode capacity holds `len` bytes at `ecl`
pub fn select_version(len: usize, ecl: ECLevel) -> QRResult<Version> {
    let bit_len = len << 3;
    Version::all()
        .find(|ver| bit_len <= ver.byte_mode_bit_capacity(ecl))
        .ok_or(QRError::CapacityExceeded { len, ecl })
}


// Byte mode encoder
//------------------------------------------------------------------------------

const BYTE_MODE_INDICATOR: u8 = 0b0100;

/// Mode indicator, character count and data bits of a single byte segment
pub fn encode_byte_mode(data: &[u8], ver: Version) -> QRResult<BitStream> {
    let bit_len = ver.mode_bits() + ver.char_cnt_bits() + (data.len() << 3);
    let mut bs = BitStream::new(bit_len);
    push_segment(data, ver, &mut bs)?;
    Ok(bs)
}

fn push_segment(data: &[u8], ver: Version, out: &mut BitStream) -> QRResult<()> {
    let len = data.len();
    let len_bits = ver.char_cnt_bits();
    if len >= 1 << len_bits {
        return Err(QRError::CharacterCountOverflow { len, bits: len_bits });
    }

    out.push_bits(BYTE_MODE_INDICATOR, ver.mode_bits());
    out.push_bits(len as u16, len_bits);
    for &b in data {
        out.push_bits(b, 8);
    }
    Ok(())
}


// Writer
//------------------------------------------------------------------------------

/// Byte mode bitstream padded to the data capacity of the smallest fitting
/// version
pub fn encode(data: &[u8], ecl: ECLevel) -> QRResult<(BitStream, Version)> {
    let ver = select_version(data.len(), ecl)?;
    trace!(version = *ver, "Selected version");
    let bs = encode_with_version(data, ver, ecl)?;
    Ok((bs, ver))
}

pub fn encode_with_version(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    let len = data.len();
    if len << 3 > ver.byte_mode_bit_capacity(ecl) {
        return Err(QRError::DataTooLong { len, version: ver, ecl });
    }

    let mut bs = BitStream::new(ver.data_bit_capacity(ecl));
    push_segment(data, ver, &mut bs)?;
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);
    Ok(bs)
}

// Up to four zero bits, cut short when the capacity runs out first
fn push_terminator(out: &mut BitStream) {
    let term_len = out.remaining().min(TERMINATOR_LEN);
    out.push_bits(0u8, term_len);
}

// Zero bits up to the next byte boundary, then alternating pad codewords
// until the stream is full
fn pad_remaining_capacity(out: &mut BitStream) {
    let misalign = out.len() % 8;
    if misalign != 0 {
        out.push_bits(0u8, 8 - misalign);
    }
    let pad_count = out.remaining() / 8;
    for &pad in PADDING_CODEWORDS.iter().cycle().take(pad_count) {
        out.push_bits(pad, 8);
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b11101100, 0b00010001];

const TERMINATOR_LEN: usize = 4;
