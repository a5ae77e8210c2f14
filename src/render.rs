use base64::{engine::general_purpose::STANDARD, Engine};

use crate::matrix::QrMatrix;

// Svg
//------------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SvgOptions {
    /// Quiet zone in modules
    pub margin: usize,
    /// Pixels per module
    pub scale: usize,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self { margin: 4, scale: 4 }
    }
}

/// Square canvas of `(size + 2 * margin) * scale` pixels: one light background
/// rect, then one rect per dark module.
pub fn svg(qr: &QrMatrix, opts: SvgOptions) -> String {
    let SvgOptions { margin, scale } = opts;
    let canvas_sz = (qr.size() + 2 * margin) * scale;

    let mut out = String::with_capacity(256 + qr.count_dark_modules() * 64);
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{canvas_sz}\" height=\"{canvas_sz}\" \
         viewBox=\"0 0 {canvas_sz} {canvas_sz}\" shape-rendering=\"crispEdges\">"
    ));
    out.push_str(&rect(0, 0, canvas_sz, LIGHT_FILL));
    for (r, row) in qr.rows().enumerate() {
        for (c, &dark) in row.iter().enumerate() {
            if dark {
                out.push_str(&rect((c + margin) * scale, (r + margin) * scale, scale, DARK_FILL));
            }
        }
    }
    out.push_str("</svg>");
    out
}

fn rect(x: usize, y: usize, side: usize, fill: &str) -> String {
    format!("<rect x=\"{x}\" y=\"{y}\" width=\"{side}\" height=\"{side}\" fill=\"{fill}\"/>")
}

/// Svg wrapped in a base64 `data:` URI for inline embedding
pub fn svg_data_uri(qr: &QrMatrix, opts: SvgOptions) -> String {
    let svg = svg(qr, opts);
    format!("{SVG_DATA_URI_PREFIX}{}", STANDARD.encode(svg.as_bytes()))
}

// Terminal
//------------------------------------------------------------------------------

/// Two characters per module with light modules drawn solid, so the symbol
/// reads correctly on dark terminal backgrounds.
pub fn to_str(qr: &QrMatrix, margin: usize) -> String {
    let w = qr.size() + 2 * margin;
    let mut canvas = String::with_capacity(w * (w * 2 * LIGHT_CELL.len() + 1));
    for i in 0..w {
        for j in 0..w {
            let in_symbol = (margin..margin + qr.size()).contains(&i)
                && (margin..margin + qr.size()).contains(&j);
            if in_symbol && qr.get(i - margin, j - margin) {
                canvas.push_str(DARK_CELL);
            } else {
                canvas.push_str(LIGHT_CELL);
            }
        }
        canvas.push('\n');
    }
    canvas
}


// Global constants
//------------------------------------------------------------------------------

pub const SVG_DATA_URI_PREFIX: &str = "data:image/svg+xml;base64,";

const LIGHT_FILL: &str = "#ffffff";
const DARK_FILL: &str = "#000000";

const LIGHT_CELL: &str = "██";
const DARK_CELL: &str = "  ";
