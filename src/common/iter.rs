use super::metadata::Version;

// Data placement walk
//------------------------------------------------------------------------------

/// Walks the symbol in two column strips from the right edge, the first strip
/// upwards and each next one in the opposite direction. Within a row the right
/// column comes first. The strip that would cover the vertical timing line is
/// shifted one column left, so that column is never visited. Yields
/// (row, column).
#[derive(Debug, Clone)]
pub struct ZigzagWalk {
    size: usize,
    // Right column of the current strip
    right: usize,
    upward: bool,
    // Modules visited in the current strip
    step: usize,
    done: bool,
}

impl ZigzagWalk {
    pub fn new(ver: Version) -> Self {
        let size = ver.width();
        Self { size, right: size - 1, upward: true, step: 0, done: false }
    }

    fn next_strip(&mut self) {
        self.step = 0;
        self.upward = !self.upward;
        if self.right == 1 {
            self.done = true;
            return;
        }
        self.right -= 2;
        if self.right == TIMING_COL {
            self.right -= 1;
        }
    }
}

impl Iterator for ZigzagWalk {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let offset = self.step / 2;
        let row = if self.upward { self.size - 1 - offset } else { offset };
        let col = self.right - self.step % 2;

        self.step += 1;
        if self.step == 2 * self.size {
            self.next_strip();
        }

        Some((row, col))
    }
}


// Global constants
//------------------------------------------------------------------------------

const TIMING_COL: usize = 6;
