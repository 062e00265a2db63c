use std::sync::Mutex;

/// Run counters kept by the classifier across invocations.
pub struct MetricsRecorder {
    inner: Mutex<Metrics>,
}

struct Metrics {
    classified: usize,
    failures: usize,
}

impl MetricsRecorder {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Metrics {
                classified: 0,
                failures: 0,
            }),
        }
    }

    pub fn record_classified(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.classified += 1;
        }
    }

    pub fn record_failure(&self) {
        if let Ok(mut metrics) = self.inner.lock() {
            metrics.failures += 1;
        }
    }

    /// (classifications completed, failed runs) since construction.
    pub fn snapshot(&self) -> (usize, usize) {
        if let Ok(metrics) = self.inner.lock() {
            (metrics.classified, metrics.failures)
        } else {
            (0, 0)
        }
    }
}

impl Default for MetricsRecorder {
    fn default() -> Self {
        Self::new()
    }
}
