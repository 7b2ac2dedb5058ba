//! Exact edge intercepts

use std::cmp::Ordering;

/// Mixed number `whole + num / den` with `0 <= num < den`
///
/// Intercepts and inverse slopes of integer edges are exact multiples of
///   `1/dy`, so they are kept as fractions and advanced without rounding
///   error, however long the edge.
///
///     use scanfill::Rational;
///
///     let step = Rational::ratio(-7, 2);        // -3.5 = -4 + 1/2
///     assert_eq!((step.whole(), step.num(), step.den()), (-4, 1, 2));
///
///     let mut x = Rational::new(10, 0, 2);
///     x.advance(step);
///     assert_eq!(x, Rational::new(6, 1, 2));
///     assert_eq!(x.round_half_up(), 7);
///
#[derive(Debug, Copy, Clone)]
pub struct Rational {
    whole: i128,
    num: u64,
    den: u64,
}

impl Rational {
    /// `whole + num / den`; panics if `den` is zero
    pub fn new(whole: i128, num: u64, den: u64) -> Self {
        assert!(den > 0, "rational with zero denominator");
        Rational { whole: whole + i128::from(num / den), num: num % den, den }
    }
    /// `n / d`; panics if `d` is zero
    pub fn ratio(n: i128, d: u64) -> Self {
        assert!(d > 0, "rational with zero denominator");
        let d128 = i128::from(d);
        Rational { whole: n.div_euclid(d128), num: n.rem_euclid(d128) as u64, den: d }
    }
    /// `floor` of the value
    pub fn whole(&self) -> i128 {
        self.whole
    }
    pub fn num(&self) -> u64 {
        self.num
    }
    pub fn den(&self) -> u64 {
        self.den
    }
    /// Add `step`, which must share this denominator
    pub fn advance(&mut self, step: Rational) {
        debug_assert_eq!(self.den, step.den);
        self.whole += step.whole;
        let num = u128::from(self.num) + u128::from(step.num);
        if num >= u128::from(self.den) {
            self.whole += 1;
            self.num = (num - u128::from(self.den)) as u64;
        } else {
            self.num = num as u64;
        }
    }
    /// Nearest integer, halves up
    pub fn round_half_up(&self) -> i128 {
        if 2 * u128::from(self.num) >= u128::from(self.den) {
            self.whole + 1
        } else {
            self.whole
        }
    }
    pub fn floor(&self) -> i128 {
        self.whole
    }
    pub fn ceil(&self) -> i128 {
        if self.num > 0 { self.whole + 1 } else { self.whole }
    }
    /// Nearest `f64`, for display
    pub fn to_f64(&self) -> f64 {
        self.whole as f64 + self.num as f64 / self.den as f64
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Rational) -> Ordering {
        // num < den < 2^64, so the cross products fit in u128
        self.whole.cmp(&other.whole).then_with(|| {
            (u128::from(self.num) * u128::from(other.den))
                .cmp(&(u128::from(other.num) * u128::from(self.den)))
        })
    }
}
impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Rational) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Rational {
    fn eq(&self, other: &Rational) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Rational {}
