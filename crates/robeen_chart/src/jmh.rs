//! JMH result documents.
//!
//! JMH writes its JSON report as an array of run records. Only the benchmark
//! name and the primary score feed the chart; everything else is ignored.

use serde::Deserialize;

use crate::error::Result;
use crate::measurement::{Measurement, MeasurementSet};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmhRun {
    pub benchmark: String,
    #[serde(default)]
    pub mode: Option<String>,
    pub primary_metric: JmhMetric,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmhMetric {
    pub score: f64,
    #[serde(default)]
    pub score_unit: Option<String>,
}

impl From<&JmhRun> for Measurement {
    fn from(run: &JmhRun) -> Self {
        let score = run.primary_metric.score as f32;
        if score.is_infinite() && run.primary_metric.score.is_finite() {
            tracing::warn!(
                benchmark = %run.benchmark,
                score = run.primary_metric.score,
                "score out of range; bar will not be drawn"
            );
        }
        Measurement::new(run.benchmark.clone(), score)
    }
}

pub fn parse_runs(json: &str) -> Result<Vec<JmhRun>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JMH report into measurements, keeping report order.
pub fn parse_jmh(json: &str) -> Result<MeasurementSet> {
    let runs = parse_runs(json)?;
    tracing::debug!(runs = runs.len(), "parsed JMH report");
    Ok(runs.iter().map(Measurement::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REPORT: &str = r#"[
        {
            "jmhVersion": "1.36",
            "benchmark": "org.robeen.StringBench.concat",
            "mode": "thrpt",
            "threads": 1,
            "primaryMetric": {
                "score": 241.5,
                "scoreError": 3.2,
                "scoreUnit": "ops/s",
                "rawData": [[240.0, 243.0]]
            },
            "secondaryMetrics": {}
        },
        {
            "benchmark": "org.robeen.StringBench.builder",
            "primaryMetric": { "score": 73.0 }
        }
    ]"#;

    #[test]
    fn parses_label_and_score_in_order() {
        let set = parse_jmh(REPORT).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0).unwrap().label, "org.robeen.StringBench.concat");
        assert_eq!(set.get(0).unwrap().value, 241.5);
        assert_eq!(set.get(1).unwrap().category_key(), "builder");
    }

    #[test]
    fn keeps_run_metadata() {
        let runs = parse_runs(REPORT).unwrap();
        assert_eq!(runs[0].mode.as_deref(), Some("thrpt"));
        assert_eq!(runs[0].primary_metric.score_unit.as_deref(), Some("ops/s"));
        assert!(runs[1].mode.is_none());
    }

    #[test]
    fn malformed_document_is_a_parse_error() {
        let err = parse_jmh(r#"[{"benchmark": "x"}]"#).unwrap_err();
        assert!(matches!(err, crate::ChartError::Parse(_)));
    }

    #[test]
    fn out_of_range_score_is_not_drawn() {
        let set = parse_jmh(
            r#"[
                {"benchmark": "a.fast", "primaryMetric": {"score": 100.0}},
                {"benchmark": "a.huge", "primaryMetric": {"score": 1e40}}
            ]"#,
        )
        .unwrap();
        assert!(set.get(1).unwrap().value.is_infinite());
        assert_eq!(set.max_value(), 100.0);

        let config = crate::config::ChartConfig::default();
        let scales =
            crate::scale::Scales::build(&set, crate::layout::PlotArea::new(300.0, 100.0), &config);
        let geometry = crate::geometry::Geometry::build(
            &set,
            &scales,
            &config.palette().unwrap(),
            &config.axis,
            config.x_tick_count,
        );
        let drawn: Vec<usize> = geometry.bars.iter().map(|b| b.data_index).collect();
        assert_eq!(drawn, vec![0]);
    }

    #[test]
    fn empty_report_yields_empty_set() {
        assert!(parse_jmh("[]").unwrap().is_empty());
    }
}
