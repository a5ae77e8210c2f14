use std::ops::Deref;

use crate::common::{
    format_info, BitStream, Color, ECLevel, MaskPattern, Version, ZigzagWalk, FORMAT_INFO_BIT_LEN,
    VERSION_INFO_BIT_LEN,
};
use crate::matrix::QrMatrix;

/// Cell of a symbol under construction, tagged with the region it belongs to
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Function(Color),
    FormatInfo(Color),
    VersionInfo(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Function(c)
            | Module::FormatInfo(c)
            | Module::VersionInfo(c)
            | Module::Data(c) => c,
        }
    }
}

/// Symbol under construction.
///
/// Built in a fixed order: every cell starts `Empty`, function patterns are
/// stamped, the format and version areas are reserved, data fills the cells
/// still empty, and the mask is applied last.
#[derive(Debug, Clone)]
pub struct Grid {
    cells: Vec<Module>,
    size: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// Grid access
//------------------------------------------------------------------------------

impl Grid {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let size = ver.width();
        Self { cells: vec![Module::Empty; size * size], size, ver, ecl, mask: None }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, r: usize, c: usize) -> Module {
        assert!(r < self.size && c < self.size, "({r}, {c}) outside {0}x{0} grid", self.size);
        self.cells[r * self.size + c]
    }

    fn put(&mut self, r: usize, c: usize, module: Module) {
        assert!(r < self.size && c < self.size, "({r}, {c}) outside {0}x{0} grid", self.size);
        self.cells[r * self.size + c] = module;
    }

    fn is_empty_at(&self, r: usize, c: usize) -> bool {
        self.get(r, c) == Module::Empty
    }

    pub fn count_dark_modules(&self) -> usize {
        self.cells.iter().filter(|m| m.is_dark()).count()
    }

    #[cfg(test)]
    pub fn count_empty_modules(&self) -> usize {
        self.cells.iter().filter(|&&m| m == Module::Empty).count()
    }

    // One line per row, upper case for dark. Function: F, format: I,
    // version: V, data: D, empty: '.'
    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        self.cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|m| {
                        let tag = match m {
                            Module::Empty => return '.',
                            Module::Function(_) => 'f',
                            Module::FormatInfo(_) => 'i',
                            Module::VersionInfo(_) => 'v',
                            Module::Data(_) => 'd',
                        };
                        if m.is_dark() {
                            tag.to_ascii_uppercase()
                        } else {
                            tag
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn into_matrix(self) -> QrMatrix {
        debug_assert!(!self.cells.contains(&Module::Empty), "Empty module left in symbol");

        let modules = self.cells.iter().map(|m| m.is_dark()).collect();
        QrMatrix::new(modules, self.size, self.ver, self.ecl, self.mask.unwrap_or_default())
    }
}


// Function patterns
//------------------------------------------------------------------------------

impl Grid {
    /// Finders with their separators, then alignment marks, then timing
    /// lines through whatever is still empty.
    pub fn draw_function_patterns(&mut self) {
        self.draw_finders();
        self.draw_alignment_marks();
        self.draw_timing_lines();
    }

    // Square of side 2 * radius + 1 at (top, left). Each cell's color follows
    // its Chebyshev distance to the center: only the ring one step inside the
    // border is light. Radius 3 gives a finder, radius 2 an alignment mark.
    fn stamp_concentric(&mut self, top: usize, left: usize, radius: usize) {
        let side = 2 * radius + 1;
        for i in 0..side {
            for j in 0..side {
                let dist = i.abs_diff(radius).max(j.abs_diff(radius));
                let color = Color::from(dist + 1 != radius);
                self.put(top + i, left + j, Module::Function(color));
            }
        }
    }

    fn draw_finders(&mut self) {
        let far = self.size - FINDER_SIDE;
        for (top, left) in [(0, 0), (0, far), (far, 0)] {
            self.stamp_concentric(top, left, FINDER_SIDE / 2);
        }

        // Separators: light strip of 8 modules along each inner edge
        let sep = Module::Function(Color::Light);
        let last = self.size - 1;
        for i in 0..=FINDER_SIDE {
            self.put(FINDER_SIDE, i, sep);
            self.put(i, FINDER_SIDE, sep);
            self.put(FINDER_SIDE, last - i, sep);
            self.put(i, last - FINDER_SIDE, sep);
            self.put(last - FINDER_SIDE, i, sep);
            self.put(last - i, FINDER_SIDE, sep);
        }
    }

    // Every pairing of the listed centers, except those landing on a finder
    fn draw_alignment_marks(&mut self) {
        let centers = self.ver.alignment_pattern();
        for &r in centers {
            for &c in centers {
                if self.is_empty_at(r, c) {
                    self.stamp_concentric(r - 2, c - 2, 2);
                }
            }
        }
    }

    // Row 6 and column 6 between the separators, dark on even indices
    fn draw_timing_lines(&mut self) {
        for i in FINDER_SIDE + 1..self.size - FINDER_SIDE - 1 {
            let m = Module::Function(Color::from(i % 2 == 0));
            if self.is_empty_at(TIMING_LINE, i) {
                self.put(TIMING_LINE, i, m);
            }
            if self.is_empty_at(i, TIMING_LINE) {
                self.put(i, TIMING_LINE, m);
            }
        }
    }
}


// Format and version information
//------------------------------------------------------------------------------

impl Grid {
    /// Claims the format area (with the always dark module) and, from version
    /// 7, the version area. Format bits are rewritten once the mask is known.
    pub fn reserve_info_areas(&mut self) {
        self.draw_format_info(0);
        self.draw_version_info();
    }

    // Both copies, bit 0 being the least significant
    fn format_info_positions(&self, i: usize) -> [(usize, usize); 2] {
        let near = match i {
            0..=5 => (i, 8),
            6 | 7 => (i + 1, 8),
            8 => (8, 7),
            _ => (8, 14 - i),
        };
        let split = if i < 8 { (8, self.size - 1 - i) } else { (self.size - 15 + i, 8) };
        [near, split]
    }

    fn draw_format_info(&mut self, info: u32) {
        for i in 0..FORMAT_INFO_BIT_LEN {
            let m = Module::FormatInfo(Color::from((info >> i) & 1 == 1));
            for (r, c) in self.format_info_positions(i) {
                self.put(r, c, m);
            }
        }
        self.put(self.size - 8, 8, Module::FormatInfo(Color::Dark));
    }

    // 6x3 block left of the top right finder and its transpose above the
    // bottom left finder
    fn draw_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let info = self.ver.info();
        let base = self.size - 11;
        for i in 0..VERSION_INFO_BIT_LEN {
            let m = Module::VersionInfo(Color::from((info >> i) & 1 == 1));
            let (a, b) = (i / 3, base + i % 3);
            self.put(a, b, m);
            self.put(b, a, m);
        }
    }
}


// Data and mask
//------------------------------------------------------------------------------

impl Grid {
    /// Writes the payload along the zigzag walk into cells still empty.
    /// Cells past the end of the payload become light remainder bits.
    pub fn place_data(&mut self, payload: BitStream) {
        let free = ZigzagWalk::new(self.ver)
            .filter(|&(r, c)| self.is_empty_at(r, c))
            .collect::<Vec<_>>();
        debug_assert!(
            payload.len() <= free.len(),
            "Payload overflows data area: Payload {}, Free modules {}",
            payload.len(),
            free.len()
        );

        let mut bits = payload;
        for (r, c) in free {
            let dark = bits.next().unwrap_or(false);
            self.put(r, c, Module::Data(Color::from(dark)));
        }
    }

    /// Inverts data modules selected by `pattern`, then writes the matching
    /// format information
    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        for (i, cell) in self.cells.iter_mut().enumerate() {
            if let Module::Data(clr) = *cell {
                if pattern.is_inverted(i / self.size, i % self.size) {
                    *cell = Module::Data(!clr);
                }
            }
        }
        self.mask = Some(pattern);
        self.draw_format_info(format_info(self.ecl, pattern));
    }
}


// Global constants
//------------------------------------------------------------------------------

const FINDER_SIDE: usize = 7;

const TIMING_LINE: usize = 6;
