use std::ops::Deref;

use super::error::{QRError, QRResult};

/// Data mask pattern reference, 0 through 7
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash, Default)]
pub struct MaskPattern(u8);

impl MaskPattern {
    pub fn new(pattern: u8) -> QRResult<Self> {
        if pattern >= 8 {
            return Err(QRError::InvalidMaskPattern(pattern));
        }
        Ok(Self(pattern))
    }

    /// Whether the data module at (row, column) is inverted by this pattern
    pub fn is_inverted(self, r: usize, c: usize) -> bool {
        let (sum, prod) = (r + c, r * c);
        match self.0 {
            0 => sum % 2 == 0,
            1 => r % 2 == 0,
            2 => c % 3 == 0,
            3 => sum % 3 == 0,
            4 => (r / 2 + c / 3) % 2 == 0,
            5 => prod % 2 + prod % 3 == 0,
            6 => (prod % 2 + prod % 3) % 2 == 0,
            _ => (sum % 2 + prod % 3) % 2 == 0,
        }
    }
}

impl Deref for MaskPattern {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
