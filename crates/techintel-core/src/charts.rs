//! Chart inputs derived from insights.
//!
//! Three charts, each with a fixed numeric range:
//! - TRL distribution (bar): insight count per level 1-9
//! - Technology radar: relevance per insight, 0-100
//! - Hype curve (line): one expectation level per phase, 0-100

use serde::Serialize;

use crate::series::{Attribute, HypePhase, Insight, TRL_MAX, derive_seed, draw};

const DEFAULT_HYPE_VALUES: [f64; 5] = [20.0, 85.0, 25.0, 60.0, 80.0];
const HYPE_FLOOR: f64 = 5.0;
const HYPE_CEILING: f64 = 95.0;

/// Insight counts per TRL level. `counts[0]` is TRL 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrlDistribution {
    pub counts: [usize; TRL_MAX as usize],
}

impl TrlDistribution {
    pub fn from_insights(insights: &[Insight]) -> Self {
        let mut counts = [0; TRL_MAX as usize];
        for insight in insights {
            if let Some(slot) = (insight.trl as usize)
                .checked_sub(1)
                .and_then(|idx| counts.get_mut(idx))
            {
                *slot += 1;
            }
        }
        Self { counts }
    }

    /// `("TRL 1", n), ("TRL 2", n), ...`
    pub fn labeled(&self) -> impl Iterator<Item = (String, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, count)| (format!("TRL {}", idx + 1), *count))
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarPoint {
    pub label: String,
    pub relevance: u8,
}

/// Single-series radar of relevance per insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RadarSeries {
    pub points: Vec<RadarPoint>,
}

impl RadarSeries {
    pub fn from_insights(insights: &[Insight]) -> Self {
        let points = insights
            .iter()
            .map(|insight| RadarPoint {
                label: insight.title.clone(),
                relevance: insight.relevance.min(100),
            })
            .collect();
        Self { points }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypePoint {
    pub phase: HypePhase,
    pub level: f64,
}

/// Aggregate expectation level per lifecycle phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HypeCurve {
    pub points: Vec<HypePoint>,
}

impl HypeCurve {
    /// Builds the curve from insight phase counts plus a seeded +/-10 variation.
    ///
    /// No insights yields the fixed default curve.
    pub fn from_insights(insights: &[Insight]) -> Self {
        let phases = HypePhase::all();
        if insights.is_empty() {
            let points = phases
                .iter()
                .zip(DEFAULT_HYPE_VALUES)
                .map(|(phase, level)| HypePoint {
                    phase: *phase,
                    level,
                })
                .collect();
            return Self { points };
        }

        let seed = derive_seed(insights);
        let points = phases
            .iter()
            .enumerate()
            .map(|(index, phase)| {
                let count = insights.iter().filter(|i| i.hype == *phase).count();
                let base = if count > 0 {
                    (count as f64 * 25.0 + 20.0).min(90.0)
                } else {
                    15.0
                };
                let variation = draw(seed, index, Attribute::Curve) * 20.0 - 10.0;
                HypePoint {
                    phase: *phase,
                    level: (base + variation).clamp(HYPE_FLOOR, HYPE_CEILING),
                }
            })
            .collect();
        Self { points }
    }

    pub fn levels(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.level).collect()
    }
}

/// All three chart inputs for one report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartData {
    pub trl: TrlDistribution,
    pub radar: RadarSeries,
    pub hype: HypeCurve,
}

impl ChartData {
    pub fn from_insights(insights: &[Insight]) -> Self {
        Self {
            trl: TrlDistribution::from_insights(insights),
            radar: RadarSeries::from_insights(insights),
            hype: HypeCurve::from_insights(insights),
        }
    }
}
