mod galois;
mod rs;

pub use galois::GaloisField;
pub use rs::ReedSolomon;
