//! Tracing events emitted for the coarse range warning.
//!
//! A counting layer is installed as the thread-default subscriber, so the
//! batches below run on the sequential path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use grid_interp::{GridInterpolator, InterpolationConfig, InterpolationOutput};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::Layer;

const XS: [f64; 2] = [0.0, 1.0];
const YS: [f64; 2] = [0.0, 1.0];
const ZS: [f64; 4] = [0.0, 1.0, 1.0, 2.0];

/// Counts WARN-level events.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl WarnCounter {
    fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

impl<S: Subscriber> Layer<S> for WarnCounter {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() == Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

/// Run one batch against the unit square and count the WARN events it emits.
fn count_warnings(
    log_range_warning: bool,
    qx: &[f64],
    qy: &[f64],
) -> (InterpolationOutput, usize) {
    let config = InterpolationConfig::builder()
        .parallel_threshold(usize::MAX)
        .log_range_warning(log_range_warning)
        .build()
        .unwrap();
    let interp = GridInterpolator::new(&XS, &YS, &ZS)
        .unwrap()
        .with_config(config);

    let counter = WarnCounter::default();
    let subscriber = tracing_subscriber::registry().with(counter.clone());
    let out = tracing::subscriber::with_default(subscriber, || interp.interpolate(qx, qy).unwrap());
    (out, counter.count())
}

#[test]
fn test_out_of_range_batch_logs_one_warning() {
    let (out, warnings) = count_warnings(true, &[-1.0, 0.5, 2.0], &[0.5, 0.5, 3.0]);
    assert!(out.has_warning());
    assert_eq!(warnings, 1);
}

#[test]
fn test_disabled_logging_suppresses_warning_event() {
    let (out, warnings) = count_warnings(false, &[-1.0, 0.5, 2.0], &[0.5, 0.5, 3.0]);
    assert!(out.has_warning());
    assert_eq!(warnings, 0);
}

#[test]
fn test_in_range_batch_logs_nothing() {
    let (out, warnings) = count_warnings(true, &[0.25, 1.0], &[0.0, 0.75]);
    assert!(!out.has_warning());
    assert_eq!(warnings, 0);
}
