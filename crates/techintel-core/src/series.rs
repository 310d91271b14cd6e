//! Deterministic mock series generation.
//!
//! Chart data has to stay stable across re-renders without a real random
//! source, so every draw is a pure function of the item set:
//!
//! - `derive_seed()`: `count + sum(title lengths)`
//! - `value_at()`: fractional part of `sin(seed + offset) * 10000`
//! - `map_range()` / `bucket()`: scale a draw into integers or categories
//!
//! This is a display trick, not a PRNG. Never use it where unpredictability matters.

use serde::Serialize;

/// Anything with a title can seed a series.
pub trait SeriesItem {
    fn title(&self) -> &str;

    /// Pre-existing relevance score (0-100), if the item carries one.
    fn relevance(&self) -> Option<u8> {
        None
    }
}

impl SeriesItem for &str {
    fn title(&self) -> &str {
        self
    }
}

impl SeriesItem for String {
    fn title(&self) -> &str {
        self
    }
}

/// Per-item attribute drawn from the seed.
///
/// Each attribute owns a fixed offset so draws for the same item stay
/// decorrelated. New attributes must pick an unused offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Per-phase variation on the hype curve.
    Curve,
    Trl,
    Hype,
    Category,
    Relevance,
}

impl Attribute {
    pub fn all() -> &'static [Attribute] {
        &[
            Attribute::Curve,
            Attribute::Trl,
            Attribute::Hype,
            Attribute::Category,
            Attribute::Relevance,
        ]
    }

    pub fn offset(self) -> i64 {
        match self {
            Attribute::Curve => 0,
            Attribute::Hype => 100,
            Attribute::Category => 200,
            Attribute::Relevance => 300,
            Attribute::Trl => 400,
        }
    }
}

/// Derives the seed from the item set: `count + sum(title lengths)`.
///
/// Title length is measured in UTF-16 code units so seeds match the values
/// the dashboard has always shown.
pub fn derive_seed<T: SeriesItem>(items: &[T]) -> i64 {
    let total: usize = items
        .iter()
        .map(|item| item.title().encode_utf16().count())
        .sum();
    (items.len() + total) as i64
}

/// Returns a draw in `[0, 1)` for `seed + offset`.
pub fn value_at(seed: i64, offset: i64) -> f64 {
    fractional_part((seed.wrapping_add(offset) as f64).sin() * 10000.0)
}

fn fractional_part(x: f64) -> f64 {
    let frac = x - x.floor();
    // Tiny negative `x` rounds `x - floor(x)` up to exactly 1.0.
    if frac >= 1.0 { 0.0 } else { frac }
}

/// Draws `attribute` for the item at `index`.
pub fn draw(seed: i64, index: usize, attribute: Attribute) -> f64 {
    value_at(seed, index as i64 + attribute.offset())
}

/// Maps a draw into the inclusive integer range `[lo, hi]`.
pub fn map_range(draw: f64, lo: i64, hi: i64) -> i64 {
    if hi <= lo {
        return lo;
    }
    let span = (i128::from(hi) - i128::from(lo) + 1) as f64;
    lo.saturating_add((draw * span).floor() as i64).clamp(lo, hi)
}

/// Buckets a draw into one of `n` categories. Returns 0 when `n == 0`.
pub fn bucket(draw: f64, n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    ((draw * n as f64).floor() as usize).min(n - 1)
}

/// A reproducible numeric sequence keyed by a seed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeededSeries {
    pub seed: i64,
    pub min: f64,
    pub max: f64,
    pub values: Vec<f64>,
}

impl SeededSeries {
    /// Generates `len` values for `attribute`, scaled into `[min, max]`.
    pub fn generate(seed: i64, len: usize, attribute: Attribute, min: f64, max: f64) -> Self {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        let values = (0..len)
            .map(|index| (min + draw(seed, index, attribute) * (max - min)).clamp(min, max))
            .collect();
        Self {
            seed,
            min,
            max,
            values,
        }
    }
}

/// Lifecycle phase on the hype curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HypePhase {
    #[serde(rename = "Innovation Trigger")]
    InnovationTrigger,
    #[serde(rename = "Peak of Inflated Expectations")]
    PeakOfInflatedExpectations,
    #[serde(rename = "Trough of Disillusionment")]
    TroughOfDisillusionment,
    #[serde(rename = "Slope of Enlightenment")]
    SlopeOfEnlightenment,
    #[serde(rename = "Plateau of Productivity")]
    PlateauOfProductivity,
}

impl HypePhase {
    pub fn all() -> &'static [HypePhase] {
        &[
            HypePhase::InnovationTrigger,
            HypePhase::PeakOfInflatedExpectations,
            HypePhase::TroughOfDisillusionment,
            HypePhase::SlopeOfEnlightenment,
            HypePhase::PlateauOfProductivity,
        ]
    }

    pub fn label(self) -> &'static str {
        match self {
            HypePhase::InnovationTrigger => "Innovation Trigger",
            HypePhase::PeakOfInflatedExpectations => "Peak of Inflated Expectations",
            HypePhase::TroughOfDisillusionment => "Trough of Disillusionment",
            HypePhase::SlopeOfEnlightenment => "Slope of Enlightenment",
            HypePhase::PlateauOfProductivity => "Plateau of Productivity",
        }
    }
}

/// Coarse maturity status shown on insight cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Maturity {
    Emerging,
    Maturing,
    Mature,
}

impl Maturity {
    pub fn all() -> &'static [Maturity] {
        &[Maturity::Emerging, Maturity::Maturing, Maturity::Mature]
    }

    pub fn label(self) -> &'static str {
        match self {
            Maturity::Emerging => "Emerging",
            Maturity::Maturing => "Maturing",
            Maturity::Mature => "Mature",
        }
    }
}

/// Chart-ready attributes for one item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub title: String,
    /// Technology readiness level, 1-9.
    pub trl: u8,
    pub hype: HypePhase,
    pub category: Maturity,
    /// Relevance, 0-100.
    pub relevance: u8,
}

impl SeriesItem for Insight {
    fn title(&self) -> &str {
        &self.title
    }

    fn relevance(&self) -> Option<u8> {
        Some(self.relevance)
    }
}

pub const TRL_MIN: i64 = 1;
pub const TRL_MAX: i64 = 9;
const DRAWN_RELEVANCE_MIN: i64 = 60;
const DRAWN_RELEVANCE_MAX: i64 = 98;

/// Derives one insight per item. An empty item set yields `default_series()`.
pub fn generate_series<T: SeriesItem>(items: &[T]) -> Vec<Insight> {
    if items.is_empty() {
        return default_series();
    }

    let seed = derive_seed(items);
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let trl = map_range(draw(seed, index, Attribute::Trl), TRL_MIN, TRL_MAX);
            let phases = HypePhase::all();
            let hype = phases[bucket(draw(seed, index, Attribute::Hype), phases.len())];
            let categories = Maturity::all();
            let category =
                categories[bucket(draw(seed, index, Attribute::Category), categories.len())];
            let relevance = item.relevance().map_or_else(
                || {
                    map_range(
                        draw(seed, index, Attribute::Relevance),
                        DRAWN_RELEVANCE_MIN,
                        DRAWN_RELEVANCE_MAX,
                    ) as u8
                },
                |score| score.min(100),
            );

            Insight {
                title: item.title().to_string(),
                trl: trl as u8,
                hype,
                category,
                relevance,
            }
        })
        .collect()
}

/// Hand-authored series shown when there is nothing to derive from.
pub fn default_series() -> Vec<Insight> {
    vec![
        Insight {
            title: "AI Threat Detection".to_string(),
            trl: 8,
            hype: HypePhase::PeakOfInflatedExpectations,
            category: Maturity::Emerging,
            relevance: 95,
        },
        Insight {
            title: "Autonomous Defense Systems".to_string(),
            trl: 6,
            hype: HypePhase::InnovationTrigger,
            category: Maturity::Emerging,
            relevance: 88,
        },
        Insight {
            title: "Cyber Warfare AI".to_string(),
            trl: 7,
            hype: HypePhase::TroughOfDisillusionment,
            category: Maturity::Maturing,
            relevance: 92,
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    struct Scored {
        title: &'static str,
        relevance: Option<u8>,
    }

    impl SeriesItem for Scored {
        fn title(&self) -> &str {
            self.title
        }

        fn relevance(&self) -> Option<u8> {
            self.relevance
        }
    }

    #[test]
    fn test_derive_seed_counts_items_and_title_lengths() {
        assert_eq!(derive_seed(&["AI", "Cyber"]), 9);
        assert_eq!(derive_seed::<&str>(&[]), 0);
    }

    #[test]
    fn test_derive_seed_is_sensitive_to_title_length() {
        let base = derive_seed(&["Radar", "Sonar"]);
        assert_eq!(base, derive_seed(&["Radar", "Sonar"]));
        assert_ne!(base, derive_seed(&["Radars", "Sonar"]));
        assert_ne!(base, derive_seed(&["Radar", "Sonar", ""]));
    }

    #[test]
    fn test_derive_seed_uses_utf16_length() {
        // One code unit for é, two for the satellite emoji.
        assert_eq!(derive_seed(&["é"]), 2);
        assert_eq!(derive_seed(&["🛰"]), 3);
    }

    #[test]
    fn test_value_at_matches_sine_formula() {
        let x = 9.0_f64.sin() * 10000.0;
        assert!((value_at(9, 0) - (x - x.floor())).abs() < f64::EPSILON);
        assert_eq!(value_at(9, 100).to_bits(), value_at(109, 0).to_bits());
    }

    #[test]
    fn test_value_at_is_bounded() {
        for seed in -500..500 {
            for offset in [0, 1, 100, 200, 300] {
                let v = value_at(seed, offset);
                assert!((0.0..1.0).contains(&v), "value_at({seed}, {offset}) = {v}");
            }
        }
    }

    #[test]
    fn test_map_range_example_and_bounds() {
        assert_eq!(map_range(0.5, 5, 8), 7);
        assert_eq!(map_range(0.0, 5, 8), 5);
        assert_eq!(map_range(0.999_999_999, 5, 8), 8);
        assert_eq!(map_range(0.7, 3, 3), 3);
        for seed in 0..200 {
            let v = map_range(value_at(seed, 0), TRL_MIN, TRL_MAX);
            assert!((TRL_MIN..=TRL_MAX).contains(&v));
        }
    }

    #[test]
    fn test_map_range_full_i64_range_stays_in_bounds() {
        assert_eq!(map_range(0.0, i64::MIN, i64::MAX), i64::MIN);
        let mid = map_range(0.5, i64::MIN, i64::MAX);
        assert!((-1..=0).contains(&mid), "midpoint was {mid}");
        for draw in [0.25, 0.9, 0.999_999_999] {
            let v = map_range(draw, -10, i64::MAX);
            assert!(v >= -10, "map_range({draw}, -10, MAX) = {v}");
        }
        assert_eq!(map_range(0.999_999_999, i64::MAX - 3, i64::MAX), i64::MAX);
    }

    #[test]
    fn test_fractional_part_of_tiny_negative_is_zero() {
        assert_eq!(fractional_part(-1e-17).to_bits(), 0.0_f64.to_bits());
        assert!((fractional_part(-0.25) - 0.75).abs() < f64::EPSILON);
        assert!((fractional_part(3.5) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bucket_clamps_to_last_category() {
        assert_eq!(bucket(0.0, 5), 0);
        assert_eq!(bucket(0.5, 5), 2);
        assert_eq!(bucket(0.999_999_999_999_999_9, 5), 4);
        assert_eq!(bucket(1.0, 5), 4);
        assert_eq!(bucket(0.3, 0), 0);
    }

    #[test]
    fn test_attribute_offsets_are_distinct() {
        let offsets: HashSet<i64> = Attribute::all().iter().map(|a| a.offset()).collect();
        assert_eq!(offsets.len(), Attribute::all().len());
    }

    #[test]
    fn test_seeded_series_is_reproducible_and_clamped() {
        let a = SeededSeries::generate(42, 16, Attribute::Relevance, 0.0, 100.0);
        let b = SeededSeries::generate(42, 16, Attribute::Relevance, 0.0, 100.0);
        assert_eq!(a, b);
        assert_eq!(a.values.len(), 16);
        assert!(a.values.iter().all(|v| (0.0..=100.0).contains(v)));

        let swapped = SeededSeries::generate(42, 4, Attribute::Trl, 10.0, 1.0);
        assert!((swapped.min - 1.0).abs() < f64::EPSILON);
        assert!(swapped.values.iter().all(|v| (1.0..=10.0).contains(v)));
    }

    #[test]
    fn test_generate_series_empty_returns_default() {
        let series = generate_series::<&str>(&[]);
        assert_eq!(series, default_series());
        assert_eq!(series.len(), 3);
        assert_eq!(series[0].title, "AI Threat Detection");
        assert_eq!(series[0].trl, 8);
    }

    #[test]
    fn test_generate_series_is_deterministic_and_in_range() {
        let titles = ["Quantum Radar", "Swarm Drones", "Hypersonic Glide", "EW Jammer"];
        let first = generate_series(&titles);
        assert_eq!(first, generate_series(&titles));
        assert_eq!(first.len(), titles.len());
        for insight in &first {
            assert!((1..=9).contains(&insight.trl));
            assert!((60..=98).contains(&insight.relevance));
        }
    }

    #[test]
    fn test_generate_series_keeps_existing_relevance() {
        let items = [
            Scored {
                title: "Scored",
                relevance: Some(91),
            },
            Scored {
                title: "Overflow",
                relevance: Some(250),
            },
            Scored {
                title: "Unscored",
                relevance: None,
            },
        ];
        let series = generate_series(&items);
        assert_eq!(series[0].relevance, 91);
        assert_eq!(series[1].relevance, 100);
        assert!((60..=98).contains(&series[2].relevance));
    }
}
