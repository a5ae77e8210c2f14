use super::galois::GaloisField;

/// Systematic Reed-Solomon encoder over a borrowed GF(256).
#[derive(Debug, Clone, Copy)]
pub struct ReedSolomon<'gf> {
    gf: &'gf GaloisField,
}

impl<'gf> ReedSolomon<'gf> {
    pub fn new(gf: &'gf GaloisField) -> Self {
        Self { gf }
    }

    /// Product of (x - α^i) for i in 0..degree, leading coefficient first.
    pub fn generator_polynomial(&self, degree: usize) -> Vec<u8> {
        let mut poly = Vec::with_capacity(degree + 1);
        poly.push(1u8);
        for i in 0..degree {
            let root = self.gf.exp(i);
            poly.push(0);
            for j in (1..poly.len()).rev() {
                poly[j] ^= self.gf.multiply(poly[j - 1], root);
            }
        }
        poly
    }

    // Performs polynomial long division with data polynomial(num)
    // and generator polynomial(den) to compute remainder polynomial,
    // the coefficients of which are the ecc
    pub fn ec_codewords(&self, data: &[u8], ecc_count: usize) -> Vec<u8> {
        if ecc_count == 0 {
            return Vec::new();
        }

        let len = data.len();
        let gen_poly = self.generator_polynomial(ecc_count);

        let mut res = data.to_vec();
        res.resize(len + ecc_count, 0);

        for i in 0..len {
            let lead_coeff = res[i];
            if lead_coeff == 0 {
                continue;
            }

            for (u, &v) in res[i..].iter_mut().zip(gen_poly.iter()) {
                *u ^= self.gf.multiply(v, lead_coeff);
            }
        }

        res.split_off(len)
    }
}

#[cfg(test)]
mod rs_tests {
    use super::ReedSolomon;
    use crate::common::ec::galois::GaloisField;

    static GF: GaloisField = GaloisField::new();

    #[test]
    fn test_generator_polynomial() {
        let rs = ReedSolomon::new(&GF);
        assert_eq!(rs.generator_polynomial(0), vec![1]);
        assert_eq!(rs.generator_polynomial(1), vec![1, 1]);
        assert_eq!(rs.generator_polynomial(2), vec![1, 3, 2]);

        // Exponents of the published degree 7 generator
        let exp = [0, 87, 229, 146, 149, 238, 102, 21].map(|e| GF.exp(e)).to_vec();
        assert_eq!(rs.generator_polynomial(7), exp);
    }

    #[test]
    fn test_poly_mod_1() {
        let rs = ReedSolomon::new(&GF);
        let res = rs.ec_codewords(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec\x11\xec\x11", 10);
        assert_eq!(&*res, b"\xc4#'w\xeb\xd7\xe7\xe2]\x17");
    }

    #[test]
    fn test_poly_mod_2() {
        let rs = ReedSolomon::new(&GF);
        let res = rs.ec_codewords(b" [\x0bx\xd1r\xdcMC@\xec\x11\xec", 13);
        assert_eq!(&*res, b"\xa8H\x16R\xd96\x9c\x00.\x0f\xb4z\x10");
    }

    #[test]
    fn test_poly_mod_3() {
        let rs = ReedSolomon::new(&GF);
        let res = rs.ec_codewords(b"CUF\x86W&U\xc2w2\x06\x12\x06g&", 18);
        assert_eq!(&*res, b"\xd5\xc7\x0b-s\xf7\xf1\xdf\xe5\xf8\x9au\x9aoV\xa1o'");
    }

    #[test]
    fn test_degenerate_inputs() {
        let rs = ReedSolomon::new(&GF);
        assert!(rs.ec_codewords(b"abc", 0).is_empty());
        assert_eq!(rs.ec_codewords(&[], 5), vec![0; 5]);
        assert_eq!(rs.ec_codewords(&[0, 0, 0], 4), vec![0; 4]);
    }

    #[test]
    fn test_codeword_is_multiple_of_generator() {
        let rs = ReedSolomon::new(&GF);
        let data = b"qrmint reed solomon";
        let ecc = rs.ec_codewords(data, 16);
        let mut codeword = data.to_vec();
        codeword.extend(&ecc);

        // Every root of the generator is a root of the full codeword
        for i in 0..16 {
            let root = GF.exp(i);
            let eval = codeword.iter().fold(0u8, |acc, &c| GF.multiply(acc, root) ^ c);
            assert_eq!(eval, 0, "α^{i} is not a root");
        }
    }
}
