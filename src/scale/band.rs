use std::collections::BTreeMap;

/// Ordinal band scale: each category gets an equal slice of the pixel range,
/// in domain order, with no inner or outer padding.
#[derive(Debug, Clone, PartialEq)]
pub struct BandScale<T: Ord + Clone> {
    domain: Vec<T>,
    index: BTreeMap<T, usize>,
    start: f64,
    end: f64,
}

impl<T: Ord + Clone> BandScale<T> {
    /// Duplicate categories keep their first slot.
    pub fn new(domain: impl IntoIterator<Item = T>, range: (f64, f64)) -> Self {
        let mut ordered = Vec::new();
        let mut index = BTreeMap::new();
        for value in domain {
            if !index.contains_key(&value) {
                index.insert(value.clone(), ordered.len());
                ordered.push(value);
            }
        }
        Self {
            domain: ordered,
            index,
            start: range.0,
            end: range.1,
        }
    }

    pub fn domain(&self) -> &[T] {
        &self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        (self.start, self.end)
    }

    /// Distance between the starts of adjacent bands.
    pub fn step(&self) -> f64 {
        if self.domain.is_empty() {
            return 0.0;
        }
        (self.end - self.start) / self.domain.len() as f64
    }

    /// Width of one band (equal to `step` without padding).
    pub fn bandwidth(&self) -> f64 {
        self.step()
    }

    /// Start of the band for `value`, or `None` for an unknown category.
    pub fn position(&self, value: &T) -> Option<f64> {
        self.index
            .get(value)
            .map(|i| self.start + *i as f64 * self.step())
    }

    /// Centre of the band for `value`; where axis ticks go.
    pub fn center(&self, value: &T) -> Option<f64> {
        self.position(value).map(|p| p + self.bandwidth() / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bands_divide_range_evenly() {
        let s = BandScale::new(0u32..12, (0.0, 480.0));
        assert_eq!(s.bandwidth(), 40.0);
        assert_eq!(s.position(&0), Some(0.0));
        assert_eq!(s.position(&11), Some(440.0));
        assert_eq!(s.center(&1), Some(60.0));
        assert_eq!(s.position(&12), None);
    }

    #[test]
    fn duplicates_are_collapsed() {
        let s = BandScale::new([1900, 1900, 1901], (10.0, 30.0));
        assert_eq!(s.domain(), &[1900, 1901]);
        assert_eq!(s.position(&1901), Some(20.0));
    }
}
