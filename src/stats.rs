//! Streaming summary statistics over the sample sequence.

/// Mean and population standard deviation of a finished run.
///
/// Both are NaN when no samples were observed; a zero-iteration run reports
/// `NaN ± NaN` instead of a fabricated 0.0.
#[derive(Debug, Clone, Copy)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub stddev: f64,
}

#[derive(Debug, Default, Clone)]
pub struct SummaryAccumulator {
    count: usize,
    sum: f64,
    sum_sq: f64,
}

impl SummaryAccumulator {
    pub fn observe(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum_sq += value * value;
    }

    pub fn finalize(&self) -> Summary {
        if self.count == 0 {
            return Summary {
                count: 0,
                mean: f64::NAN,
                stddev: f64::NAN,
            };
        }

        let n = self.count as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n - mean * mean).max(0.0);

        Summary {
            count: self.count,
            mean,
            stddev: variance.sqrt(),
        }
    }
}

impl Summary {
    /// The one console line the run reports.
    pub fn report_line(&self) -> String {
        format!(
            "Average Hausdorff Dimension: {:.2} ± {:.2}",
            self.mean, self.stddev
        )
    }
}

/// Convenience over a finished sample slice.
pub fn summarize(samples: &[f64]) -> Summary {
    let mut acc = SummaryAccumulator::default();
    for &s in samples {
        acc.observe(s);
    }
    acc.finalize()
}
