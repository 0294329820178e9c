use crate::validation::ValidationReport;
use metrics::counter;

// Handles are not cached: a handle stays bound to the recorder that was active
// when it was created.

pub fn record_generated(region: char) {
    counter!("tw_id.generated", "region" => region.to_string()).increment(1);
}

pub fn record_validation(report: &ValidationReport) {
    let verdict = if report.valid { "valid" } else { "invalid" };
    counter!("tw_id.validations", "verdict" => verdict).increment(1);

    if let Some(check) = report.first_failed_check() {
        let check: &'static str = check.into();
        counter!("tw_id.validation.failures", "check" => check).increment(1);
    }
}

#[cfg(test)]
mod test {
    use crate::{generate, validate, Gender};
    use metrics::{Key, Label};
    use metrics_util::debugging::{DebugValue, DebuggingRecorder};
    use metrics_util::CompositeKey;
    use metrics_util::MetricKind::Counter;

    #[test]
    fn should_count_validations_by_verdict() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            validate("A123456789");
            validate("A123456789");
            validate("A123456780");
        });

        let snapshot = snapshotter.snapshot().into_hashmap();

        let valid_key = CompositeKey::new(
            Counter,
            Key::from_parts("tw_id.validations", vec![Label::new("verdict", "valid")]),
        );
        let invalid_key = CompositeKey::new(
            Counter,
            Key::from_parts("tw_id.validations", vec![Label::new("verdict", "invalid")]),
        );
        let failure_key = CompositeKey::new(
            Counter,
            Key::from_parts(
                "tw_id.validation.failures",
                vec![Label::new("check", "checksum")],
            ),
        );

        assert_eq!(
            snapshot.get(&valid_key).expect("valid counter not found").2,
            DebugValue::Counter(2)
        );
        assert_eq!(
            snapshot.get(&invalid_key).expect("invalid counter not found").2,
            DebugValue::Counter(1)
        );
        assert_eq!(
            snapshot.get(&failure_key).expect("failure counter not found").2,
            DebugValue::Counter(1)
        );
    }

    #[test]
    fn should_count_generated_ids_by_region() {
        let recorder = DebuggingRecorder::new();
        let snapshotter = recorder.snapshotter();

        metrics::with_local_recorder(&recorder, || {
            generate('Z', Gender::Female).unwrap();
        });

        let snapshot = snapshotter.snapshot().into_hashmap();
        let key = CompositeKey::new(
            Counter,
            Key::from_parts("tw_id.generated", vec![Label::new("region", "Z")]),
        );
        assert_eq!(
            snapshot.get(&key).expect("generated counter not found").2,
            DebugValue::Counter(1)
        );
    }
}
