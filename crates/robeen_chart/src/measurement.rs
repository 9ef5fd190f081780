use std::sync::Arc;

/// One benchmark result: a fully-qualified label and its score.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub value: f32,
}

impl Measurement {
    pub fn new(label: impl Into<String>, value: f32) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn category_key(&self) -> &str {
        category_key_of(&self.label)
    }
}

/// Short category key for a label: everything after the last `.`.
///
/// `"org.bench.Foo.method"` becomes `"method"`; a label without a dot is its
/// own key. Band lookups at draw time and at hover time both go through here.
pub fn category_key_of(label: &str) -> &str {
    match label.rfind('.') {
        Some(dot) => &label[dot + 1..],
        None => label,
    }
}

/// Ordered, immutable sequence of measurements in source order.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementSet {
    items: Arc<[Measurement]>,
}

impl Default for MeasurementSet {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MeasurementSet {
    pub fn new(items: Vec<Measurement>) -> Self {
        Self {
            items: items.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, idx: usize) -> Option<&Measurement> {
        self.items.get(idx)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Measurement> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Measurement] {
        &self.items
    }

    /// Largest finite value, or 0 for an empty set.
    pub fn max_value(&self) -> f32 {
        self.items
            .iter()
            .map(|m| m.value)
            .filter(|v| v.is_finite())
            .fold(None, |acc: Option<f32>, v| Some(acc.map_or(v, |a| a.max(v))))
            .unwrap_or(0.0)
    }

    /// True when at least one bar would be drawn.
    pub fn has_data(&self) -> bool {
        self.items.iter().any(|m| m.value.is_finite() && m.value > 0.0)
    }

    /// Indices ordered by ascending value. Ties keep source order.
    pub fn ascending_order(&self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.sort_by(|&a, &b| self.items[a].value.total_cmp(&self.items[b].value));
        order
    }
}

impl From<Vec<Measurement>> for MeasurementSet {
    fn from(items: Vec<Measurement>) -> Self {
        Self::new(items)
    }
}

impl FromIterator<Measurement> for MeasurementSet {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a MeasurementSet {
    type Item = &'a Measurement;
    type IntoIter = std::slice::Iter<'a, Measurement>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_key_takes_last_segment() {
        assert_eq!(category_key_of("org.bench.Foo.method"), "method");
        assert_eq!(category_key_of("simple"), "simple");
        assert_eq!(category_key_of("trailing."), "");
    }

    #[test]
    fn max_value_of_empty_set_is_zero() {
        assert_eq!(MeasurementSet::default().max_value(), 0.0);
    }

    #[test]
    fn max_value_ignores_non_finite() {
        let set = MeasurementSet::new(vec![
            Measurement::new("a", 3.0),
            Measurement::new("b", f32::NAN),
            Measurement::new("c", 7.5),
        ]);
        assert_eq!(set.max_value(), 7.5);
    }

    #[test]
    fn has_data_requires_a_positive_value() {
        let zeros = MeasurementSet::new(vec![
            Measurement::new("a", 0.0),
            Measurement::new("b", -1.0),
        ]);
        assert!(!zeros.has_data());
        assert!(!MeasurementSet::default().has_data());

        let some = MeasurementSet::new(vec![
            Measurement::new("a", 0.0),
            Measurement::new("b", 2.0),
        ]);
        assert!(some.has_data());
    }

    #[test]
    fn ascending_order_is_stable() {
        let set = MeasurementSet::new(vec![
            Measurement::new("a", 5.0),
            Measurement::new("b", 1.0),
            Measurement::new("c", 5.0),
            Measurement::new("d", 0.5),
        ]);
        assert_eq!(set.ascending_order(), vec![3, 1, 0, 2]);
    }
}
