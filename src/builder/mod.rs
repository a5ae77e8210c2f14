mod qr;

use qr::Grid;

use std::ops::Deref;

use tracing::debug;

use crate::common::{
    codec::{self, Charset},
    ec::{GaloisField, ReedSolomon},
    error::QRResult,
    mask::MaskPattern,
    metadata::{ECLevel, Version},
    BitStream,
};
use crate::matrix::QrMatrix;

static DEFAULT_FIELD: GaloisField = GaloisField::new();

pub struct QRBuilder<'a> {
    text: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: MaskPattern,
    charset: Charset,
    field: &'a GaloisField,
}

impl<'a> QRBuilder<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            version: None,
            ec_level: ECLevel::M,
            mask: MaskPattern::default(),
            charset: Charset::default(),
            field: &DEFAULT_FIELD,
        }
    }

    pub fn text(&mut self, text: &'a str) -> &mut Self {
        self.text = text;
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = mask;
        self
    }

    pub fn charset(&mut self, charset: Charset) -> &mut Self {
        self.charset = charset;
        self
    }

    /// Galois field used by the Reed-Solomon encoder
    pub fn field(&mut self, field: &'a GaloisField) -> &mut Self {
        self.field = field;
        self
    }

    pub fn metadata(&self) -> String {
        match self.version {
            Some(v) => format!(
                "{{ Version: {}, Ec level: {}, Mask: {}, Charset: {} }}",
                v, self.ec_level, *self.mask, self.charset
            ),
            None => format!(
                "{{ Version: None, Ec level: {}, Mask: {}, Charset: {} }}",
                self.ec_level, *self.mask, self.charset
            ),
        }
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QrMatrix> {
        debug!("Generating QR {}", self.metadata());

        let data = codec::encode_text(self.text, self.charset)?;

        debug!(len = data.len(), "Encoding data");
        let (encoded_data, version) = match self.version {
            Some(v) => (codec::encode_with_version(&data, v, self.ec_level)?, v),
            None => {
                debug!("Finding smallest version");
                codec::encode(&data, self.ec_level)?
            }
        };

        debug!("Constructing payload with ecc & interleaving");
        let rs = ReedSolomon::new(self.field);
        let payload = Self::construct_payload(&rs, encoded_data.data(), version, self.ec_level);

        debug!(version = *version, "Constructing QR");
        let mut qr = Grid::new(version, self.ec_level);
        qr.draw_function_patterns();
        qr.reserve_info_areas();
        qr.place_data(payload);

        debug!(mask = *self.mask, "Applying mask");
        qr.apply_mask(self.mask);

        let total_modules = qr.size() * qr.size();
        let dark_modules = qr.count_dark_modules();
        let ecl = self.ec_level;
        debug!(
            version = *version,
            data_codewords = version.data_codewords(ecl),
            ec_codewords = version.ecc_per_block(ecl) * version.block_count(ecl),
            dark_modules,
            balance = dark_modules * 100 / total_modules,
            "QR generated"
        );

        Ok(qr.into_matrix())
    }

    // Interleaved data codewords followed by interleaved EC codewords
    fn construct_payload(
        rs: &ReedSolomon,
        data: &[u8],
        version: Version,
        ec_level: ECLevel,
    ) -> BitStream {
        let (blocks, ecc) = Self::compute_ecc(rs, data, version, ec_level);
        let mut payload = BitStream::new(version.total_codewords(ec_level) * 8);
        for group in [Self::interleave(&blocks), Self::interleave(&ecc)] {
            payload.extend(&group);
        }
        payload
    }

    // Splits data into blocks and computes the EC codewords of each
    fn compute_ecc<'d>(
        rs: &ReedSolomon,
        data: &'d [u8],
        version: Version,
        ec_level: ECLevel,
    ) -> (Vec<&'d [u8]>, Vec<Vec<u8>>) {
        let blocks = Self::blockify(data, version, ec_level);
        let ecc_len = version.ecc_per_block(ec_level);
        let ecc = blocks.iter().map(|b| rs.ec_codewords(b, ecc_len)).collect();
        (blocks, ecc)
    }

    // Short blocks first, then the blocks one codeword longer
    fn blockify(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<&[u8]> {
        let (short_len, short_cnt, long_len, long_cnt) =
            version.data_codewords_per_block(ec_level);
        debug_assert_eq!(
            short_len * short_cnt + long_len * long_cnt,
            data.len(),
            "Data codewords don't fill the blocks of version {version} {ec_level}"
        );

        let (short, long) = data.split_at(short_len * short_cnt);
        let mut blocks = short.chunks(short_len).collect::<Vec<_>>();
        if long_cnt > 0 {
            blocks.extend(long.chunks(long_len));
        }
        blocks
    }

    /// Reads the blocks column by column, shorter blocks drop out once exhausted
    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let longest = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        (0..longest).flat_map(|i| blocks.iter().filter_map(move |b| b.get(i).copied())).collect()
    }
}


// Options
//------------------------------------------------------------------------------

/// Plain value form of the builder settings
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub ec_level: ECLevel,
    /// Smallest fitting version when unset
    pub version: Option<Version>,
    pub mask: MaskPattern,
    pub charset: Charset,
}

/// Encodes `text` into a QR symbol with the default Galois field
pub fn encode(text: &str, options: &EncodeOptions) -> QRResult<QrMatrix> {
    let mut builder = QRBuilder::new(text);
    builder.ec_level(options.ec_level).mask(options.mask).charset(options.charset);
    if let Some(v) = options.version {
        builder.version(v);
    }
    builder.build()
}
