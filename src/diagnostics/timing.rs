use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Wall-clock time spent in one detection stage.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Per-stage timings of one detection pass.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }

    /// Runs `f`, records its duration under `label`, and returns its output.
    pub fn measure<T>(&mut self, label: &str, f: impl FnOnce() -> T) -> T {
        let start = Instant::now();
        let out = f();
        self.push(label, start.elapsed().as_secs_f64() * 1000.0);
        out
    }

    pub fn stage(&self, label: &str) -> Option<&StageTiming> {
        self.stages.iter().find(|s| s.label == label)
    }
}

#[cfg(test)]
mod tests {
    use super::TimingBreakdown;

    #[test]
    fn measure_records_stage_and_passes_output_through() {
        let mut timings = TimingBreakdown::default();
        let v = timings.measure("voting", || 41 + 1);
        assert_eq!(v, 42);
        let stage = timings.stage("voting").expect("stage recorded");
        assert!(stage.elapsed_ms >= 0.0);
        assert!(timings.stage("extraction").is_none());
    }
}
