use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};
use std::str::FromStr;

use super::error::{QRError, QRResult};
use super::mask::MaskPattern;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Color {
    Dark,
    Light,
}

impl Color {
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash, Default)]
pub enum ECLevel {
    L = 0,
    #[default]
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const ALL: [ECLevel; 4] = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];

    /// Column of the capacity and block tables.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Two bit indicator written into the format information.
    pub fn format_bits(self) -> u32 {
        match self {
            Self::L => 0b01,
            Self::M => 0b00,
            Self::Q => 0b11,
            Self::H => 0b10,
        }
    }
}

impl Display for ECLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl FromStr for ECLevel {
    type Err = QRError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "L" => Ok(Self::L),
            "M" => Ok(Self::M),
            "Q" => Ok(Self::Q),
            "H" => Ok(Self::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(MAX_VERSION);

    pub fn new(version: usize) -> QRResult<Self> {
        if !(1..=MAX_VERSION).contains(&version) {
            return Err(QRError::InvalidVersion(version));
        }
        Ok(Self(version))
    }

    pub fn all() -> impl Iterator<Item = Version> {
        (1..=MAX_VERSION).map(Version)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    pub fn alignment_pattern(self) -> &'static [usize] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 - 1]
    }

    pub fn char_cnt_bits(self) -> usize {
        match self.0 {
            1..=9 => 8,
            _ => 16,
        }
    }

    pub fn mode_bits(self) -> usize {
        4
    }

    pub fn remainder_bits(self) -> usize {
        match self.0 {
            2..=6 => 7,
            _ => 0,
        }
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        EC_BLOCKS[self.0 - 1][ecl.index()].0
    }

    /// Returns (block1 size, block1 count, block2 size, block2 count)
    pub fn data_codewords_per_block(self, ecl: ECLevel) -> (usize, usize, usize, usize) {
        let (_, b1_sz, b1_cnt, b2_sz, b2_cnt) = EC_BLOCKS[self.0 - 1][ecl.index()];
        (b1_sz, b1_cnt, b2_sz, b2_cnt)
    }

    pub fn block_count(self, ecl: ECLevel) -> usize {
        let (_, b1_cnt, _, b2_cnt) = self.data_codewords_per_block(ecl);
        b1_cnt + b2_cnt
    }

    pub fn data_codewords(self, ecl: ECLevel) -> usize {
        let (b1_sz, b1_cnt, b2_sz, b2_cnt) = self.data_codewords_per_block(ecl);
        b1_sz * b1_cnt + b2_sz * b2_cnt
    }

    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) << 3
    }

    pub fn total_codewords(self, ecl: ECLevel) -> usize {
        self.data_codewords(ecl) + self.block_count(ecl) * self.ecc_per_block(ecl)
    }

    /// Byte mode payload capacity in bits, after mode and count headers
    pub fn byte_mode_bit_capacity(self, ecl: ECLevel) -> usize {
        BYTE_MODE_CAPACITY[self.0 - 1][ecl.index()] << 3
    }

    /// 18-bit version information, versions 7 and above only
    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info is only drawn for version 7 and above");

        let ver = self.0 as u32;
        let mut rem = ver;
        for _ in 0..12 {
            rem = (rem << 1) ^ ((rem >> 11) * VERSION_INFO_GENERATOR);
        }
        (ver << 12) | rem
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Format information
//------------------------------------------------------------------------------

/// 15-bit format information: BCH(15,5) over ec level and mask, xor-ed with
/// the format mask.
pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    let data = (ecl.format_bits() << 3) | *mask as u32;
    let mut rem = data;
    for _ in 0..10 {
        rem = (rem << 1) ^ ((rem >> 9) * FORMAT_INFO_GENERATOR);
    }
    ((data << 10) | rem) ^ FORMAT_MASK
}


// Global constants
//------------------------------------------------------------------------------

pub const MAX_VERSION: usize = 10;

pub const FORMAT_INFO_BIT_LEN: usize = 15;

pub const VERSION_INFO_BIT_LEN: usize = 18;

pub const FORMAT_MASK: u32 = 0b101010000010010;

const FORMAT_INFO_GENERATOR: u32 = 0b10100110111;

const VERSION_INFO_GENERATOR: u32 = 0b1111100100101;

static ALIGNMENT_PATTERN_POSITIONS: [&[usize]; MAX_VERSION] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
];

// (ecc per block, block1 size, block1 count, block2 size, block2 count) for L, M, Q, H
static EC_BLOCKS: [[(usize, usize, usize, usize, usize); 4]; MAX_VERSION] = [
    [(7, 19, 1, 0, 0), (10, 16, 1, 0, 0), (13, 13, 1, 0, 0), (17, 9, 1, 0, 0)],
    [(10, 34, 1, 0, 0), (16, 28, 1, 0, 0), (22, 22, 1, 0, 0), (28, 16, 1, 0, 0)],
    [(15, 55, 1, 0, 0), (26, 44, 1, 0, 0), (18, 17, 2, 0, 0), (22, 13, 2, 0, 0)],
    [(20, 80, 1, 0, 0), (18, 32, 2, 0, 0), (26, 24, 2, 0, 0), (16, 9, 4, 0, 0)],
    [(26, 108, 1, 0, 0), (24, 43, 2, 0, 0), (18, 15, 2, 16, 2), (22, 11, 2, 12, 2)],
    [(18, 68, 2, 0, 0), (16, 27, 4, 0, 0), (24, 19, 4, 0, 0), (28, 15, 4, 0, 0)],
    [(20, 78, 2, 0, 0), (18, 31, 4, 0, 0), (18, 14, 2, 15, 4), (26, 13, 4, 14, 1)],
    [(24, 97, 2, 0, 0), (22, 38, 2, 39, 2), (22, 18, 4, 19, 2), (26, 14, 4, 15, 2)],
    [(30, 116, 2, 0, 0), (22, 36, 3, 37, 2), (20, 16, 4, 17, 4), (24, 12, 4, 13, 4)],
    [(18, 68, 2, 69, 2), (26, 43, 4, 44, 1), (24, 19, 6, 20, 2), (28, 15, 6, 16, 2)],
];

// Byte mode character capacity for L, M, Q, H
static BYTE_MODE_CAPACITY: [[usize; 4]; MAX_VERSION] = [
    [17, 14, 11, 7],
    [32, 26, 20, 14],
    [53, 42, 32, 24],
    [78, 62, 46, 34],
    [106, 84, 60, 44],
    [134, 106, 74, 58],
    [154, 122, 86, 64],
    [192, 152, 108, 84],
    [230, 180, 130, 98],
    [271, 213, 151, 119],
];
