/// Affine map from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Map a domain value to the range. A zero-width domain maps everything
    /// to the range midpoint.
    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    /// Inverse of `map`.
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span.abs() < f64::EPSILON {
            return (d0 + d1) / 2.0;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_and_inverts() {
        let s = LinearScale::new((5.0, 15.0), (0.0, 400.0));
        assert_eq!(s.map(5.0), 0.0);
        assert_eq!(s.map(15.0), 400.0);
        assert!((s.map(10.0) - 200.0).abs() < 1e-9);
        assert!((s.invert(100.0) - 7.5).abs() < 1e-9);
    }

    #[test]
    fn degenerate_domain_maps_to_midpoint() {
        let s = LinearScale::new((3.0, 3.0), (0.0, 10.0));
        assert_eq!(s.map(3.0), 5.0);
    }
}
