//! Arithmetic over GF(256) with the QR reduction polynomial
//! x^8 + x^4 + x^3 + x^2 + 1.

const PRIMITIVE_POLY: u16 = 0x11d;

// Order of the multiplicative group
const GROUP_ORDER: usize = 255;

/// Exponent and logarithm tables of GF(256) with generator α = 2.
///
/// The tables are built by a `const fn`, so a field can live in a `static`
/// and be shared between threads without synchronisation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaloisField {
    exp: [u8; 256],
    log: [u8; 256],
}

impl GaloisField {
    pub const fn new() -> Self {
        let mut exp = [0u8; 256];
        let mut log = [0u8; 256];

        let mut x: u16 = 1;
        let mut i = 0;
        while i < GROUP_ORDER {
            exp[i] = x as u8;
            log[x as usize] = i as u8;
            x <<= 1;
            if x & 0x100 != 0 {
                x ^= PRIMITIVE_POLY;
            }
            i += 1;
        }
        // α^255 = α^0
        exp[GROUP_ORDER] = exp[0];

        Self { exp, log }
    }

    /// α^i
    pub fn exp(&self, i: usize) -> u8 {
        self.exp[i % GROUP_ORDER]
    }

    /// Discrete logarithm of a non-zero element
    pub fn log(&self, x: u8) -> Option<u8> {
        if x == 0 {
            return None;
        }
        Some(self.log[x as usize])
    }

    pub fn multiply(&self, a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let log_sum = self.log[a as usize] as usize + self.log[b as usize] as usize;
        self.exp[log_sum % GROUP_ORDER]
    }

    pub fn power(&self, base: u8, exponent: usize) -> u8 {
        if exponent == 0 {
            return 1;
        }
        if base == 0 {
            return 0;
        }
        let log_prod = self.log[base as usize] as usize * (exponent % GROUP_ORDER);
        self.exp[log_prod % GROUP_ORDER]
    }
}

impl Default for GaloisField {
    fn default() -> Self {
        Self::new()
    }
}
