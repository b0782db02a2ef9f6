use crate::params::{INV_N_MONT2, MONT, N, Q, ROOT_OF_UNITY, centered, pow_mod};
use crate::reduce::montgomery_reduce;

/// Powers of the 512-th root of unity used by the butterflies, in bit-reversed order and in
/// Montgomery form:
///
/// * `ZETAS[k] = MONT * ROOT_OF_UNITY^{BitRev_8(k)} mod q`, centered around zero.
///
/// Operator overloading and `for` loops aren't available in a `const` context, so the exponentiation
/// and reductions are written out with `while` loops and `%`. Entry 0 is never read by the
/// transforms.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_lossless,
    clippy::integer_division_remainder_used
)]
pub(crate) const ZETAS: [i32; N] = {
    let q = Q as i64;
    let mont = (MONT as i64).rem_euclid(q);

    let mut zetas = [0i32; N];
    let mut k = 0;
    while k < N {
        let brv = (k as u8).reverse_bits() as i64;
        let root = pow_mod(ROOT_OF_UNITY as i64, brv, q);
        zetas[k] = centered(mont * root % q, q) as i32;
        k += 1;
    }
    zetas
};

/// Forward NTT, in place, with the output in bit-reversed order.
///
/// No reduction is done after the additions and subtractions: for inputs bounded by `q` in
/// absolute value the outputs are bounded by `9q`.
pub(crate) fn ntt(a: &mut [i32; N]) {
    let mut k = 0;
    for len in [128, 64, 32, 16, 8, 4, 2, 1] {
        for start in (0..N).step_by(2 * len) {
            k += 1;
            let zeta = i64::from(ZETAS[k]);

            for j in start..(start + len) {
                let t = montgomery_reduce(zeta * i64::from(a[j + len]));
                a[j + len] = a[j] - t;
                a[j] += t;
            }
        }
    }
}

/// Inverse NTT, in place, followed by multiplication by the Montgomery factor `2^32`.
///
/// Inputs must be bounded by `q` in absolute value; outputs are again bounded by `q`.
pub(crate) fn invntt_tomont(a: &mut [i32; N]) {
    let mut k = N;
    for len in [1, 2, 4, 8, 16, 32, 64, 128] {
        for start in (0..N).step_by(2 * len) {
            k -= 1;
            let zeta = -i64::from(ZETAS[k]);

            for j in start..(start + len) {
                let t = a[j];
                a[j] = t + a[j + len];
                a[j + len] = montgomery_reduce(zeta * i64::from(t - a[j + len]));
            }
        }
    }

    let f = i64::from(INV_N_MONT2);
    for x in a.iter_mut() {
        *x = montgomery_reduce(f * i64::from(*x));
    }
}
