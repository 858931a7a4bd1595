//! Polynomial mixing model.
//!
//! Maps four pigment concentrations `(c0, c1, c2, c3)` to the RGB color
//! their mixture produces. The model is a cubic polynomial fitted offline
//! against a Kubelka–Munk-style pigment simulation; its terms and
//! coefficients are a calibrated constant and must not be tuned.
//!
//! The output is not clamped.

/// One monomial of the mixing polynomial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Power of each of `c0..c3`.
    pub exponents: [u8; 4],
    /// Weight of the monomial in the R, G and B outputs.
    pub coefficients: [f64; 3],
}

const fn term(exponents: [u8; 4], r: f64, g: f64, b: f64) -> Term {
    Term {
        exponents,
        coefficients: [r, g, b],
    }
}

/// The mixing polynomial, one entry per monomial.
#[rustfmt::skip]
pub const TERMS: [Term; 20] = [
    // Pure pigments
    term([3, 0, 0, 0],  0.07717053,  0.02826978,  0.24832992),
    term([0, 3, 0, 0],  0.95912302,  0.80256528,  0.03561839),
    term([0, 0, 3, 0],  0.74683774,  0.04868586,  0.00000000),
    term([0, 0, 0, 3],  0.99518138,  0.99978149,  0.99704802),
    // Pairs
    term([2, 1, 0, 0],  0.04819146,  0.83363781,  0.32515377),
    term([1, 2, 0, 0], -0.68146950,  1.46107803,  1.06980936),
    term([2, 0, 1, 0],  0.27058419, -0.15324870,  1.98735057),
    term([1, 0, 2, 0],  0.80478189,  0.67093710,  0.18424500),
    term([2, 0, 0, 1], -0.35031003,  1.37855826,  3.68865000),
    term([1, 0, 0, 2],  1.05128046,  1.97815239,  2.82989073),
    term([0, 2, 1, 0],  3.21607125,  0.81270228,  1.03384539),
    term([0, 1, 2, 0],  2.78893374,  0.41565549, -0.04487295),
    term([0, 2, 0, 1],  3.02162577,  2.55374103,  0.32766114),
    term([0, 1, 0, 2],  2.95124691,  2.81201112,  1.17578442),
    term([0, 0, 2, 1],  2.82677043,  0.79933038,  1.81715262),
    term([0, 0, 1, 2],  2.99691099,  1.22593053,  1.80653661),
    // Triples
    term([1, 1, 1, 0],  1.87394106,  2.05027182, -0.29835996),
    term([1, 1, 0, 1],  2.56609566,  7.03428198,  0.62575374),
    term([1, 0, 1, 1],  4.08329484, -1.40408358,  2.14995522),
    term([0, 1, 1, 1],  6.00078678,  2.55552042,  1.90739502),
];

/// Evaluate the mixing polynomial at `(c0, c1, c2, c3)`.
pub fn evaluate(c: [f64; 4]) -> [f64; 3] {
    // powers[i][e] = c[i]^e for e in 0..=3
    let powers = c.map(|v| [1.0, v, v * v, v * v * v]);

    let mut rgb = [0.0f64; 3];
    for term in &TERMS {
        let monomial = term
            .exponents
            .iter()
            .zip(powers.iter())
            .fold(1.0, |acc, (&e, p)| acc * p[e as usize]);
        for (out, &coefficient) in rgb.iter_mut().zip(term.coefficients.iter()) {
            *out += coefficient * monomial;
        }
    }
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Term-by-term expansion, written out independently of [`TERMS`].
    fn expanded(c0: f64, c1: f64, c2: f64, c3: f64) -> [f64; 3] {
        let m = [
            c0 * c0 * c0,
            c1 * c1 * c1,
            c2 * c2 * c2,
            c3 * c3 * c3,
            c0 * c0 * c1,
            c0 * c1 * c1,
            c0 * c0 * c2,
            c0 * c2 * c2,
            c0 * c0 * c3,
            c0 * c3 * c3,
            c1 * c1 * c2,
            c1 * c2 * c2,
            c1 * c1 * c3,
            c1 * c3 * c3,
            c2 * c2 * c3,
            c2 * c3 * c3,
            c0 * c1 * c2,
            c0 * c1 * c3,
            c0 * c2 * c3,
            c1 * c2 * c3,
        ];
        let r = [
            0.07717053, 0.95912302, 0.74683774, 0.99518138, 0.04819146, -0.68146950,
            0.27058419, 0.80478189, -0.35031003, 1.05128046, 3.21607125, 2.78893374,
            3.02162577, 2.95124691, 2.82677043, 2.99691099, 1.87394106, 2.56609566,
            4.08329484, 6.00078678,
        ];
        let g = [
            0.02826978, 0.80256528, 0.04868586, 0.99978149, 0.83363781, 1.46107803,
            -0.15324870, 0.67093710, 1.37855826, 1.97815239, 0.81270228, 0.41565549,
            2.55374103, 2.81201112, 0.79933038, 1.22593053, 2.05027182, 7.03428198,
            -1.40408358, 2.55552042,
        ];
        let b = [
            0.24832992, 0.03561839, 0.0, 0.99704802, 0.32515377, 1.06980936, 1.98735057,
            0.18424500, 3.68865000, 2.82989073, 1.03384539, -0.04487295, 0.32766114,
            1.17578442, 1.81715262, 1.80653661, -0.29835996, 0.62575374, 2.14995522,
            1.90739502,
        ];
        let dot = |w: &[f64; 20]| w.iter().zip(m.iter()).map(|(w, m)| w * m).sum::<f64>();
        [dot(&r), dot(&g), dot(&b)]
    }

    #[test]
    fn test_terms_are_cubic() {
        for term in &TERMS {
            let degree: u8 = term.exponents.iter().sum();
            assert_eq!(degree, 3, "term {:?} is not cubic", term.exponents);
            assert!(term.exponents.iter().all(|&e| e <= 3));
        }
    }

    #[test]
    fn test_terms_are_unique() {
        for (i, a) in TERMS.iter().enumerate() {
            for b in &TERMS[i + 1..] {
                assert_ne!(a.exponents, b.exponents);
            }
        }
    }

    #[test]
    fn test_pure_pigments_hit_cube_coefficients() {
        assert_eq!(evaluate([1.0, 0.0, 0.0, 0.0]), TERMS[0].coefficients);
        assert_eq!(evaluate([0.0, 1.0, 0.0, 0.0]), TERMS[1].coefficients);
        assert_eq!(evaluate([0.0, 0.0, 1.0, 0.0]), TERMS[2].coefficients);
        assert_eq!(evaluate([0.0, 0.0, 0.0, 1.0]), TERMS[3].coefficients);
    }

    #[test]
    fn test_matches_explicit_expansion() {
        let points = [
            [0.25, 0.25, 0.25, 0.25],
            [0.1, 0.7, 0.05, 0.15],
            [0.9, 0.0, 0.3, -0.2],
            [0.0, 0.0, 0.0, 0.0],
        ];
        for c in points {
            let got = evaluate(c);
            let want = expanded(c[0], c[1], c[2], c[3]);
            for ch in 0..3 {
                assert!(
                    (got[ch] - want[ch]).abs() < 1e-12,
                    "channel {ch} at {c:?}: {} vs {}",
                    got[ch],
                    want[ch]
                );
            }
        }
    }

    #[test]
    fn test_zero_input_is_black() {
        assert_eq!(evaluate([0.0; 4]), [0.0; 3]);
    }

    #[test]
    fn test_output_is_not_clamped() {
        // Concentrations summing past 1.0 push the prediction out of gamut.
        let rgb = evaluate([0.0, 1.0, 0.0, 1.0]);
        assert!(rgb[0] > 1.0, "red {} should exceed 1.0", rgb[0]);
    }
}
