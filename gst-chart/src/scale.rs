//! Linear domain-to-pixel scaling.

/// Maps a numeric domain onto a pixel range, the way the year axis of the
/// heat map maps `[min_year, max_year]` onto `[padding, width - padding]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to its pixel position.
    ///
    /// A degenerate domain (both endpoints equal) maps everything to the
    /// start of the range; callers reject such datasets before building a
    /// scale, so this only guards against NaN leaking into geometry.
    pub fn scale(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return r0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Evenly spaced round values covering the domain, aiming for roughly
    /// `count` of them. Steps are chosen from 1/2/5 times a power of ten.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (d0, d1) = self.domain;
        if count == 0 || d0 == d1 {
            return vec![d0];
        }
        let (lo, hi) = if d0 < d1 { (d0, d1) } else { (d1, d0) };
        let step = tick_step(lo, hi, count);
        let start = (lo / step).ceil() as i64;
        let stop = (hi / step).floor() as i64;
        (start..=stop).map(|i| i as f64 * step).collect()
    }
}

/// Round tick step for the interval, d3-fashion: the candidate step
/// `span / count` is snapped to 1, 2, 5, or 10 times its power of ten.
fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let raw = (hi - lo) / count as f64;
    let power = raw.log10().floor();
    let base = 10f64.powf(power);
    let error = raw / base;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    base * factor
}

#[cfg(test)]
mod test {
    use super::LinearScale;

    #[test]
    fn maps_domain_endpoints_to_range_endpoints() {
        let scale = LinearScale::new((1753.0, 2015.0), (80.0, 820.0));
        assert_eq!(scale.scale(1753.0), 80.0);
        assert_eq!(scale.scale(2015.0), 820.0);
    }

    #[test]
    fn interpolates_linearly() {
        let scale = LinearScale::new((0.0, 10.0), (0.0, 100.0));
        assert_eq!(scale.scale(2.5), 25.0);
        assert_eq!(scale.scale(7.5), 75.0);
    }

    #[test]
    fn degenerate_domain_pins_to_range_start() {
        let scale = LinearScale::new((5.0, 5.0), (80.0, 820.0));
        assert_eq!(scale.scale(5.0), 80.0);
        assert_eq!(scale.scale(9999.0), 80.0);
    }

    #[test]
    fn year_domain_produces_round_ticks() {
        let scale = LinearScale::new((1753.0, 2015.0), (80.0, 820.0));
        let ticks = scale.ticks(10);
        assert_eq!(ticks.first().copied(), Some(1760.0));
        assert_eq!(ticks.last().copied(), Some(2000.0));
        // 262-year span at ~10 ticks snaps to a 20-year step
        assert!(ticks.windows(2).all(|w| w[1] - w[0] == 20.0));
    }

    #[test]
    fn ticks_stay_inside_the_domain() {
        let scale = LinearScale::new((1.0, 99.0), (0.0, 1.0));
        let ticks = scale.ticks(10);
        assert!(ticks.iter().all(|&t| (1.0..=99.0).contains(&t)));
        assert!(!ticks.is_empty());
    }
}
