//! Metrics for the confirmation depth gate.

/// Container for metrics.
#[derive(Debug, Clone)]
pub struct Metrics;

impl Metrics {
    /// Identifier for the counter of gated L1 block lookups, labelled by `outcome`.
    pub const REQUESTS: &str = "kona_conf_depth_requests";

    /// Initializes metrics for the confirmation depth gate.
    ///
    /// This does two things:
    /// * Describes various metrics.
    /// * Initializes metrics to 0 so they can be queried immediately.
    pub fn init() {
        Self::describe();
        Self::zero();
    }

    /// Describes metrics used in [`kona_conf_depth`][crate].
    pub fn describe() {
        metrics::describe_counter!(
            Self::REQUESTS,
            "Number of L1 block lookups admitted or rejected by the confirmation depth gate"
        );
    }

    /// Initializes metrics to `0` so they can be queried immediately.
    pub fn zero() {
        metrics::counter!(Self::REQUESTS, "outcome" => "admitted").absolute(0);
        metrics::counter!(Self::REQUESTS, "outcome" => "rejected").absolute(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfDepth, L1BlockRefProvider, test_utils::MockL1Source};
    use metrics::{Counter, Gauge, Histogram, Key, KeyName, Metadata, Recorder, SharedString, Unit};
    use std::{
        collections::HashMap,
        sync::{
            Arc, Mutex,
            atomic::{AtomicU64, Ordering},
        },
    };

    /// Records counters keyed by `name{outcome}`.
    #[derive(Debug, Default)]
    struct CountingRecorder {
        counters: Mutex<HashMap<String, Arc<AtomicU64>>>,
    }

    impl CountingRecorder {
        fn value(&self, outcome: &str) -> Option<u64> {
            let key = format!("{}{{{outcome}}}", Metrics::REQUESTS);
            self.counters.lock().unwrap().get(&key).map(|c| c.load(Ordering::SeqCst))
        }
    }

    impl Recorder for CountingRecorder {
        fn describe_counter(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_gauge(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn describe_histogram(&self, _: KeyName, _: Option<Unit>, _: SharedString) {}

        fn register_counter(&self, key: &Key, _: &Metadata<'_>) -> Counter {
            let outcome = key
                .labels()
                .find(|label| label.key() == "outcome")
                .map(|label| label.value().to_string())
                .unwrap_or_default();
            let name = format!("{}{{{outcome}}}", key.name());
            let counter = self.counters.lock().unwrap().entry(name).or_default().clone();
            Counter::from_arc(counter)
        }

        fn register_gauge(&self, _: &Key, _: &Metadata<'_>) -> Gauge {
            Gauge::noop()
        }

        fn register_histogram(&self, _: &Key, _: &Metadata<'_>) -> Histogram {
            Histogram::noop()
        }
    }

    #[test]
    fn test_init_zeroes_request_counters() {
        let recorder = CountingRecorder::default();
        metrics::with_local_recorder(&recorder, Metrics::init);

        assert_eq!(recorder.value("admitted"), Some(0));
        assert_eq!(recorder.value("rejected"), Some(0));
    }

    #[test]
    fn test_gate_counts_outcomes() {
        let recorder = CountingRecorder::default();
        let gate = ConfDepth::new(2, || 10_u64, MockL1Source::with_chain(10));

        metrics::with_local_recorder(&recorder, || {
            futures::executor::block_on(async {
                for number in 0..=10 {
                    let _ = gate.l1_block_ref_by_number(number).await;
                }
                // Lookups by hash are not gated and not counted.
                let _ = gate.l1_block_ref_by_hash(Default::default()).await;
            })
        });

        assert_eq!(recorder.value("admitted"), Some(9));
        assert_eq!(recorder.value("rejected"), Some(2));
    }
}
