use indexmap::IndexSet;

use crate::config::ChartConfig;
use crate::layout::PlotArea;
use crate::measurement::{category_key_of, MeasurementSet};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    pub fn new(domain_min: f32, domain_max: f32, range_min: f32, range_max: f32) -> Self {
        Self {
            domain_min,
            domain_max,
            range_min,
            range_max,
        }
    }

    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    pub fn is_degenerate(&self) -> bool {
        (self.domain_max - self.domain_min).abs() < 1e-12
    }

    pub fn map(&self, value: f32) -> f32 {
        let d = self.domain_max - self.domain_min;
        if d.abs() < 1e-12 {
            return self.range_min;
        }
        let t = (value - self.domain_min) / d;
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Round tick values covering the domain, roughly `count` of them.
    ///
    /// Steps are 1, 2 or 5 times a power of ten. A degenerate domain has no
    /// ticks.
    pub fn ticks(&self, count: usize) -> Vec<f32> {
        if count == 0 || self.is_degenerate() {
            return Vec::new();
        }
        let (lo, hi) = if self.domain_min <= self.domain_max {
            (self.domain_min as f64, self.domain_max as f64)
        } else {
            (self.domain_max as f64, self.domain_min as f64)
        };
        if !lo.is_finite() || !hi.is_finite() {
            return Vec::new();
        }
        let Some((i1, i2, inc)) = tick_spec(lo, hi, count as f64) else {
            return Vec::new();
        };
        (i1..=i2)
            .map(|i| {
                if inc < 0.0 {
                    (i as f64 / -inc) as f32
                } else {
                    (i as f64 * inc) as f32
                }
            })
            .collect()
    }
}

/// Integer tick range and increment; a negative increment means "divide by".
fn tick_spec(start: f64, stop: f64, count: f64) -> Option<(i64, i64, f64)> {
    let step = (stop - start) / count;
    if !step.is_finite() || step <= 0.0 {
        return None;
    }
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };

    let (i1, i2, inc) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start {
            i1 += 1;
        }
        if (i2 as f64) / inc > stop {
            i2 -= 1;
        }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start {
            i1 += 1;
        }
        if (i2 as f64) * inc > stop {
            i2 -= 1;
        }
        (i1, i2, inc)
    };

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    if i2 < i1 || !inc.is_finite() || inc == 0.0 {
        return None;
    }
    Some((i1, i2, inc))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BandScale {
    count: usize,
    start: f32,
    step: f32,
    band_width: f32,
}

impl BandScale {
    pub fn new(
        count: usize,
        range_min: f32,
        range_max: f32,
        padding_inner: f32,
        padding_outer: f32,
    ) -> Self {
        if count == 0 {
            return Self {
                count: 0,
                start: range_min,
                step: 0.0,
                band_width: 0.0,
            };
        }
        let count_f = count as f32;
        let span = (range_max - range_min).max(0.0);
        let denom = (count_f - padding_inner + 2.0 * padding_outer).max(1e-6);
        let step = span / denom;
        let band_width = step * (1.0 - padding_inner).max(0.0);
        let start = range_min + step * padding_outer;
        Self {
            count,
            start,
            step,
            band_width,
        }
    }

    /// Bands of `span / count` with `padding` of each step split evenly
    /// around the bar.
    pub fn uniform(count: usize, range_min: f32, range_max: f32, padding: f32) -> Self {
        Self::new(count, range_min, range_max, padding, padding * 0.5)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn band_width(&self) -> f32 {
        self.band_width
    }

    pub fn band_start(&self, idx: usize) -> Option<f32> {
        if idx >= self.count {
            return None;
        }
        Some(self.start + self.step * idx as f32)
    }

    pub fn center(&self, idx: usize) -> Option<f32> {
        self.band_start(idx).map(|x| x + self.band_width * 0.5)
    }
}

/// Band scale keyed by category key, in first-seen order.
///
/// Labels that reduce to the same key share one band.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoryBands {
    keys: IndexSet<String>,
    bands: BandScale,
}

impl CategoryBands {
    pub fn new<'a, I>(keys: I, range_min: f32, range_max: f32, padding: f32) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let keys: IndexSet<String> = keys.into_iter().map(str::to_string).collect();
        let bands = BandScale::uniform(keys.len(), range_min, range_max, padding);
        Self { keys, bands }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    /// Band start for a category key.
    pub fn position(&self, key: &str) -> Option<f32> {
        self.index_of(key).and_then(|i| self.bands.band_start(i))
    }

    /// Band start for a full measurement label.
    pub fn position_of_label(&self, label: &str) -> Option<f32> {
        self.position(category_key_of(label))
    }

    pub fn center(&self, key: &str) -> Option<f32> {
        self.index_of(key).and_then(|i| self.bands.center(i))
    }

    pub fn band_width(&self) -> f32 {
        self.bands.band_width()
    }

    pub fn bands(&self) -> &BandScale {
        &self.bands
    }
}

/// The value and category scales for one redraw pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Scales {
    pub x: LinearScale,
    pub y: CategoryBands,
    /// Area both scales map into
    pub plot: PlotArea,
}

impl Scales {
    pub fn build(measurements: &MeasurementSet, plot: PlotArea, config: &ChartConfig) -> Self {
        let domain_max = domain_max_for(measurements.max_value());
        let x = LinearScale::new(0.0, domain_max, 0.0, plot.width);

        let order: Vec<usize> = if config.sort_data {
            measurements.ascending_order()
        } else {
            (0..measurements.len()).collect()
        };
        let keys = order
            .iter()
            .filter_map(|&i| measurements.get(i))
            .map(|m| m.category_key());
        let y = CategoryBands::new(keys, 0.0, plot.height, config.padding);

        Self { x, y, plot }
    }

    pub fn domain_max(&self) -> f32 {
        self.x.domain().1
    }
}

/// Upper domain bound: the max value rounded up to the next hundred.
///
/// Values too close to `f32::MAX` to round up keep their own value.
pub fn domain_max_for(max_value: f32) -> f32 {
    if !max_value.is_finite() {
        return 0.0;
    }
    let rounded = ((max_value as f64 / 100.0).ceil() * 100.0) as f32;
    let bound = if rounded.is_finite() { rounded } else { max_value };
    bound.max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::Measurement;

    #[test]
    fn linear_ticks_use_round_steps() {
        let s = LinearScale::new(0.0, 300.0, 0.0, 600.0);
        let t = s.ticks(10);
        assert_eq!(t.first(), Some(&0.0));
        assert_eq!(t.last(), Some(&300.0));
        assert_eq!(t[1], 20.0);
    }

    #[test]
    fn fractional_domain_ticks() {
        let s = LinearScale::new(0.0, 1.0, 0.0, 100.0);
        let t = s.ticks(5);
        assert_eq!(t.len(), 6);
        assert!((t[1] - 0.2).abs() < 1e-6);
    }

    #[test]
    fn degenerate_domain_has_no_ticks() {
        let s = LinearScale::new(0.0, 0.0, 0.0, 100.0);
        assert!(s.ticks(10).is_empty());
        assert_eq!(s.map(50.0), 0.0);
    }

    #[test]
    fn bar_lengths_scale_against_the_rounded_domain() {
        let s = LinearScale::new(0.0, domain_max_for(241.0), 0.0, 600.0);
        assert_eq!(s.map(150.0), 300.0);
        assert_eq!(s.map(300.0), 600.0);
        assert_eq!(s.map(0.0), 0.0);
    }

    #[test]
    fn no_categories_means_no_bands() {
        let bands = CategoryBands::new(std::iter::empty::<&str>(), 0.0, 100.0, 0.2);
        assert!(bands.is_empty());
        assert_eq!(bands.band_width(), 0.0);
        assert!(bands.bands().band_start(0).is_none());
        assert!(bands.center("anything").is_none());
    }

    #[test]
    fn centers_sit_mid_band_and_stop_at_the_last_category() {
        let bands = CategoryBands::new(["alpha", "beta", "gamma"], 0.0, 300.0, 0.2);
        assert!((bands.position("gamma").unwrap() - 210.0).abs() < 1e-3);
        assert!((bands.center("gamma").unwrap() - 250.0).abs() < 1e-3);
        assert!(bands.bands().band_start(3).is_none());
    }

    #[test]
    fn uniform_bands_split_padding_evenly() {
        let b = BandScale::uniform(3, 0.0, 100.0, 0.2);
        assert!((b.step() - 33.333).abs() < 1e-2);
        assert!((b.band_width() - 26.667).abs() < 1e-2);
        assert!((b.band_start(0).unwrap() - 3.333).abs() < 1e-2);
    }

    #[test]
    fn domain_max_rounds_up_to_hundreds() {
        assert_eq!(domain_max_for(241.0), 300.0);
        assert_eq!(domain_max_for(300.0), 300.0);
        assert_eq!(domain_max_for(0.5), 100.0);
        assert_eq!(domain_max_for(0.0), 0.0);
        assert_eq!(domain_max_for(-40.0), 0.0);
    }

    #[test]
    fn domain_max_near_float_limit_stays_finite() {
        assert_eq!(domain_max_for(f32::MAX), f32::MAX);
        assert_eq!(domain_max_for(f32::INFINITY), 0.0);
        let s = LinearScale::new(0.0, domain_max_for(f32::MAX), 0.0, 300.0);
        assert_eq!(s.map(f32::MAX), 300.0);
        assert!(!s.ticks(10).is_empty());
    }

    #[test]
    fn duplicate_keys_share_a_band() {
        let keys = ["run", "a.run", "b.run", "walk"].map(category_key_of);
        let bands = CategoryBands::new(keys, 0.0, 100.0, 0.2);
        assert_eq!(bands.len(), 2);
        assert_eq!(bands.position_of_label("x.y.run"), bands.position("run"));
        assert!(bands.position("fly").is_none());
    }

    #[test]
    fn sort_mode_orders_bands_by_value() {
        let set = MeasurementSet::new(vec![
            Measurement::new("p.big", 200.0),
            Measurement::new("p.small", 10.0),
            Measurement::new("p.mid", 50.0),
        ]);
        let plot = PlotArea::new(300.0, 90.0);

        let natural = Scales::build(&set, plot, &ChartConfig::default());
        assert_eq!(natural.y.keys().collect::<Vec<_>>(), vec!["big", "small", "mid"]);

        let config = ChartConfig {
            sort_data: true,
            ..ChartConfig::default()
        };
        let sorted = Scales::build(&set, plot, &config);
        assert_eq!(sorted.y.keys().collect::<Vec<_>>(), vec!["small", "mid", "big"]);
        assert_eq!(sorted.domain_max(), 200.0);
    }
}
