use std::fmt::{Display, Formatter};

use crate::common::{ECLevel, MaskPattern, Version};
use crate::render;

/// Finished QR symbol: `size × size` modules in row-major order, `true` for
/// dark.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QrMatrix {
    modules: Vec<bool>,
    size: usize,
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
}

impl QrMatrix {
    pub(crate) fn new(
        modules: Vec<bool>,
        size: usize,
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
    ) -> Self {
        debug_assert_eq!(modules.len(), size * size, "Module count doesn't match size {size}");

        Self { modules, size, version, ec_level, mask }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    /// Module at row `r`, column `c`.
    ///
    /// # Panics
    ///
    /// If either coordinate is outside the symbol.
    pub fn get(&self, r: usize, c: usize) -> bool {
        assert!(r < self.size && c < self.size, "({r}, {c}) out of bounds for size {}", self.size);
        self.modules[r * self.size + c]
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.modules.chunks_exact(self.size)
    }

    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    pub fn count_dark_modules(&self) -> usize {
        self.modules.iter().filter(|&&m| m).count()
    }
}

impl Display for QrMatrix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render::to_str(self, 0))
    }
}
