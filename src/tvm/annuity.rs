//! Closed-form solutions of the annuity equation
//!
//! ```text
//! fv + pv*(1+rate)^nper + pmt*(1+rate*w)/rate*((1+rate)^nper - 1) = 0    (rate != 0)
//! fv + pv + pmt*nper = 0                                               (rate == 0)
//! ```
//!
//! where `w` is 1 for payments at the beginning of a period and 0 otherwise.
//! Each function isolates one unknown; the zero-rate case always takes the
//! linear branch because the general form divides by `rate`.

use crate::due_time::PaymentDueTime;

/// Future value after `nper` periods.
///
/// Saving $100 a month for 10 years at 5% compounded monthly, on top of
/// $100 today:
///
/// ```
/// use financial::{fv, PaymentDueTime};
///
/// let value = fv(0.05 / 12.0, 120.0, -100.0, -100.0, PaymentDueTime::End);
/// assert!((value - 15692.928894335748).abs() < 1e-6);
/// ```
pub fn fv(rate: f64, nper: f64, pmt: f64, pv: f64, when: PaymentDueTime) -> f64 {
    if rate == 0.0 {
        return -(pv + pmt * nper);
    }

    let temp = (1.0 + rate).powf(nper);
    -pv * temp - pmt * (1.0 + rate * when.multiplier()) / rate * (temp - 1.0)
}

/// Fixed periodic payment against principal plus interest.
///
/// Monthly payment on a $200,000 loan over 15 years at 7.5%:
///
/// ```
/// use financial::{pmt, PaymentDueTime};
///
/// let payment = pmt(0.075 / 12.0, 180.0, 200_000.0, 0.0, PaymentDueTime::End);
/// assert!((payment + 1854.0247200054619).abs() < 1e-6);
/// ```
pub fn pmt(rate: f64, nper: f64, pv: f64, fv: f64, when: PaymentDueTime) -> f64 {
    let temp = (1.0 + rate).powf(nper);
    let fact = if rate == 0.0 {
        nper
    } else {
        (1.0 + rate * when.multiplier()) * (temp - 1.0) / rate
    };

    -(fv + pv * temp) / fact
}

/// Number of periodic payments.
///
/// A zero payment at zero rate divides by zero and returns an infinity;
/// that is a result, not an error.
pub fn nper(rate: f64, pmt: f64, pv: f64, fv: f64, when: PaymentDueTime) -> f64 {
    if rate == 0.0 {
        return -(fv + pv) / pmt;
    }

    let z = pmt * (1.0 + rate * when.multiplier()) / rate;
    ((z - fv) / (pv + z)).ln() / (1.0 + rate).ln()
}

/// Present value of an annuity with constant payments and rate.
pub fn pv(rate: f64, nper: f64, pmt: f64, fv: f64, when: PaymentDueTime) -> f64 {
    let temp = (1.0 + rate).powf(nper);
    let fact = if rate == 0.0 {
        nper
    } else {
        (1.0 + rate * when.multiplier()) * (temp - 1.0) / rate
    };

    -(fv + pmt * fact) / temp
}

/// Interest portion of the payment for period `per` (1-indexed).
///
/// Returns `NaN` for `per < 1`. With payments at the beginning of a period
/// nothing has accrued before the first payment, so period 1 is exactly 0.
pub fn ipmt(rate: f64, per: f64, nper: f64, pv: f64, fv: f64, when: PaymentDueTime) -> f64 {
    if per < 1.0 {
        return f64::NAN;
    }

    if when.is_begin() && per == 1.0 {
        return 0.0;
    }

    let total_pmt = pmt(rate, nper, pv, fv, when);
    let interest = remaining_balance(rate, per, total_pmt, pv, when) * rate;

    // Beginning-of-period payments are discounted back one period
    if when.is_begin() && per > 1.0 {
        interest / (1.0 + rate)
    } else {
        interest
    }
}

/// Principal portion of the payment for period `per` (1-indexed).
pub fn ppmt(rate: f64, per: f64, nper: f64, pv: f64, fv: f64, when: PaymentDueTime) -> f64 {
    let total = pmt(rate, nper, pv, fv, when);
    total - ipmt(rate, per, nper, pv, fv, when)
}

/// Balance carried into period `per`, i.e. the future value after `per - 1` payments
fn remaining_balance(rate: f64, per: f64, pmt: f64, pv: f64, when: PaymentDueTime) -> f64 {
    fv(rate, per - 1.0, pmt, pv, when)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use PaymentDueTime::{Begin, End};

    #[test]
    fn test_fv() {
        assert_abs_diff_eq!(fv(0.075, 20.0, -2000.0, 0.0, End), 86609.362673042924, epsilon = 1e-6);
        assert_abs_diff_eq!(fv(0.075, 20.0, -2000.0, 0.0, Begin), 93105.064874, epsilon = 1e-6);
        assert_abs_diff_eq!(fv(0.1, 5.0, 100.0, 0.0, End), -610.51, epsilon = 1e-6);
        assert_abs_diff_eq!(fv(0.05 / 12.0, 120.0, -100.0, -100.0, End), 15692.928894335748, epsilon = 1e-6);
    }

    #[test]
    fn test_fv_zero_rate_is_linear() {
        assert_eq!(fv(0.0, 5.0, 100.0, 0.0, End), -500.0);
        for &(n, p, v) in &[(12.0, -250.0, 3000.0), (7.5, 10.0, -1.25), (0.0, 99.0, 1.0)] {
            assert_eq!(fv(0.0, n, p, v, End), -(v + p * n));
            assert_eq!(fv(0.0, n, p, v, Begin), -(v + p * n));
        }
    }

    #[test]
    fn test_pmt() {
        assert_abs_diff_eq!(pmt(0.08 / 12.0, 60.0, 15000.0, 0.0, End), -304.145914, epsilon = 1e-6);
        assert_abs_diff_eq!(pmt(0.08 / 12.0, 60.0, 15000.0, 0.0, Begin), -302.13170297305413, epsilon = 1e-6);
        assert_abs_diff_eq!(pmt(0.0, 60.0, 15000.0, 0.0, End), -250.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pmt(0.075 / 12.0, 180.0, 200000.0, 0.0, End), -1854.0247200054619, epsilon = 1e-6);
    }

    #[test]
    fn test_nper() {
        assert_abs_diff_eq!(nper(0.0, -2000.0, 0.0, 100000.0, End), 50.0, epsilon = 1e-6);
        assert_abs_diff_eq!(nper(0.075, -2000.0, 0.0, 100000.0, End), 21.5449442, epsilon = 1e-6);
        assert_abs_diff_eq!(nper(0.1, 0.0, -500.0, 1500.0, End), 11.52670461, epsilon = 1e-6);
        assert_abs_diff_eq!(nper(0.075, -2000.0, 0.0, 100000.0, Begin), 20.76156441, epsilon = 1e-6);
        assert_abs_diff_eq!(nper(0.0, -100.0, 1000.0, 0.0, End), 10.0, epsilon = 1e-6);
        assert_abs_diff_eq!(nper(0.07 / 12.0, -150.0, 8000.0, 0.0, End), 64.07334877066185, epsilon = 1e-6);
    }

    #[test]
    fn test_nper_zero_payment_is_infinite() {
        assert_eq!(nper(0.0, -0.0, 1000.0, 0.0, End), f64::INFINITY);
    }

    #[test]
    fn test_pv() {
        let expected_end = [
            -127128.1709461939,
            -130026.327987097,
            -132734.88596925,
            -135266.248569392,
            -137632.008008778,
            -139842.998139045,
        ];
        let expected_begin = [
            -136027.1429124,
            -139128.1709461,
            -142026.327987,
            -144734.8859692,
            -147266.2485693,
            -149632.0080087,
        ];
        for (i, (&end, &begin)) in expected_end.iter().zip(expected_begin.iter()).enumerate() {
            let n = 20.0 + i as f64;
            assert_abs_diff_eq!(pv(0.07, n, 12000.0, 0.0, End), end, epsilon = 1e-6);
            assert_abs_diff_eq!(pv(0.07, n, 12000.0, 0.0, Begin), begin, epsilon = 1e-6);
        }

        assert_abs_diff_eq!(pv(0.0, 20.0, 12000.0, 0.0, End), -240000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pv(0.0, 20.0, 12000.0, 1000.0, End), -241000.0, epsilon = 1e-6);
        assert_abs_diff_eq!(pv(0.05 / 12.0, 120.0, -100.0, 15692.93, End), -100.00067131625819, epsilon = 1e-6);
    }

    #[test]
    fn test_ipmt_end() {
        assert_abs_diff_eq!(ipmt(0.1 / 12.0, 1.0, 24.0, 2000.0, 0.0, End), -16.666667, epsilon = 1e-6);
        assert_abs_diff_eq!(ipmt(0.1 / 12.0, 2.0, 24.0, 2000.0, 0.0, End), -16.03647345, epsilon = 1e-6);
        assert_abs_diff_eq!(ipmt(0.1 / 12.0, 3.0, 24.0, 2000.0, 0.0, End), -15.40102862, epsilon = 1e-6);
        assert_abs_diff_eq!(ipmt(0.1 / 12.0, 4.0, 24.0, 2000.0, 0.0, End), -14.76028842, epsilon = 1e-6);
    }

    #[test]
    fn test_ipmt_begin() {
        let rate = 0.001988079518355057;
        assert_eq!(ipmt(0.1 / 12.0, 1.0, 24.0, 2000.0, 0.0, Begin), 0.0);
        assert!(ipmt(rate, 0.0, 360.0, 300000.0, 0.0, Begin).is_nan());
        assert_eq!(ipmt(rate, 1.0, 360.0, 300000.0, 0.0, Begin), 0.0);
        assert_abs_diff_eq!(ipmt(rate, 2.0, 360.0, 300000.0, 0.0, Begin), -594.107158, epsilon = 1e-6);
        assert_abs_diff_eq!(ipmt(rate, 3.0, 360.0, 300000.0, 0.0, Begin), -592.971592, epsilon = 1e-6);
    }

    #[test]
    fn test_ipmt_invalid_period() {
        assert!(ipmt(0.05, 0.0, 10.0, 1000.0, 0.0, End).is_nan());
        assert!(ipmt(0.05, -3.0, 10.0, 1000.0, 0.0, Begin).is_nan());
        assert!(ipmt(0.05, 0.5, 10.0, 1000.0, 0.0, End).is_nan());
        assert!(ppmt(0.05, 0.0, 10.0, 1000.0, 0.0, End).is_nan());
    }

    #[test]
    fn test_ipmt_amortization_example() {
        let expected = [
            -17.166666666666668,
            -15.789337457350777,
            -14.402550587464257,
            -13.006241114404524,
            -11.600343649629737,
            -10.18479235559687,
            -8.759520942678298,
            -7.324462666057678,
            -5.879550322604295,
            -4.424716247725826,
            -2.9598923121998877,
            -1.4850099189833388,
        ];
        let ipmts: Vec<f64> = (1..=12)
            .map(|per| ipmt(0.0824 / 12.0, per as f64, 12.0, 2500.0, 0.0, End))
            .collect();

        for (actual, expected) in ipmts.iter().zip(expected.iter()) {
            assert_abs_diff_eq!(*actual, *expected, epsilon = 1e-9);
        }
        assert_abs_diff_eq!(ipmts.iter().sum::<f64>(), -112.98308424136215, epsilon = 1e-6);
    }

    #[test]
    fn test_ppmt() {
        assert_abs_diff_eq!(ppmt(0.1 / 12.0, 1.0, 60.0, 55000.0, 0.0, End), -710.25412578642, epsilon = 1e-6);
        assert_abs_diff_eq!(ppmt(0.08 / 12.0, 1.0, 60.0, 15000.0, 0.0, End), -204.145914, epsilon = 1e-6);
        assert_abs_diff_eq!(ppmt(0.1 / 12.0, 1.0, 60.0, 55000.0, 0.0, Begin), -1158.929712, epsilon = 1e-6);
        assert_abs_diff_eq!(ppmt(0.08 / 12.0, 1.0, 60.0, 15000.0, 0.0, Begin), -302.131703, epsilon = 1e-6);
    }

    #[test]
    fn test_split_identity() {
        for when in [Begin, End] {
            for per in 1..=36 {
                let per = per as f64;
                let total = pmt(0.045 / 12.0, 36.0, 18000.0, -2000.0, when);
                let split = ipmt(0.045 / 12.0, per, 36.0, 18000.0, -2000.0, when)
                    + ppmt(0.045 / 12.0, per, 36.0, 18000.0, -2000.0, when);
                assert_abs_diff_eq!(split, total, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_pmt_inverts_fv() {
        let cases = [
            (0.05 / 12.0, 120.0, -100.0, -100.0),
            (0.07, 20.0, 1500.0, -20000.0),
            (0.0, 30.0, -50.0, 400.0),
            (-0.01, 15.0, 200.0, 1000.0),
        ];
        for &(rate, n, payment, present) in &cases {
            for when in [Begin, End] {
                let future = fv(rate, n, payment, present, when);
                assert_abs_diff_eq!(pmt(rate, n, present, future, when), payment, epsilon = 1e-6);
                assert_abs_diff_eq!(pv(rate, n, payment, future, when), present, epsilon = 1e-6);
            }
        }
    }
}
