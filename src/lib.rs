//! # qrmint
//!
//! A small, dependency-light QR Code encoder written from the ground up: GF(256) arithmetic,
//! Reed-Solomon error correction, capacity-driven version selection, byte mode encoding and
//! bit-exact matrix construction.
//!
//! ## Features
//!
//! - **QR Code Generation**: Byte mode symbols for versions 1-10 at levels L, M, Q and H
//! - **Reed-Solomon Error Correction**: Standard block structure and interleaving
//! - **Text Policies**: Strict Latin-1 (default), lossy Latin-1 or raw UTF-8 payload bytes
//! - **Rendering**: SVG, base64 SVG data URI and terminal output
//!
//! ## Quick Start
//!
//! ### Simple QR Code Generation
//!
//! ```rust
//! use qrmint::{encode, EncodeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Smallest version that fits at error correction level M, mask pattern 0
//! let qr = encode("Hello, World!", &EncodeOptions::default())?;
//! assert_eq!(qr.size(), 21);
//!
//! println!("{qr}");
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrmint::{render, Charset, ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let qr = QRBuilder::new("Hello, World!")
//!     .version(Version::new(3)?)  // Symbol size, smallest fitting version if not provided
//!     .ec_level(ECLevel::H)       // Error correction level, ECLevel::M if not provided
//!     .mask(MaskPattern::new(2)?) // Mask pattern, pattern 0 if not provided
//!     .charset(Charset::Utf8)     // Text to bytes policy, strict Latin-1 if not provided
//!     .build()?;
//!
//! let svg = render::svg(&qr, render::SvgOptions { margin: 4, scale: 8 });
//! assert!(svg.starts_with("<svg"));
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! - **Normal QR**: Versions 1-10, with sizes from 21x21 to 57x57 modules
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ### Galois Field
//!
//! The GF(256) tables are built at compile time. A custom field instance can be handed to the
//! builder with [`QRBuilder::field`]; it is only ever read, so one instance can be shared across
//! threads.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod matrix;
pub mod render;

pub use builder::{encode, EncodeOptions, QRBuilder};
pub use common::bitstream::BitStream;
pub use common::codec::{encode_byte_mode, encode_text, select_version, Charset};
pub use common::ec::{GaloisField, ReedSolomon};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Version};
pub use matrix::QrMatrix;
