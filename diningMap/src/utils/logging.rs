use lazy_static::lazy_static;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing::{Dispatch, Level};
use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_timing::group::{ByMessage, ByName};
use tracing_timing::{Builder, Histogram, LayerDowncaster, TimingLayer};
use std::collections::HashMap;
use std::sync::Arc;
use parking_lot::RwLock;
use std::time::{Duration, Instant};

// Pipeline stages timed when --enable-timing is set
#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum OperationCategory {
    Registry,
    Build,
    Publish {
        subcategory: PublishType,
    },
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub enum PublishType {
    DirectoryCreate,
    FileWrite,
    ViewerLaunch,
}

impl OperationCategory {
    pub fn as_str(&self) -> String {
        match self {
            OperationCategory::Registry => "Location Registry".to_string(),
            OperationCategory::Build => "Map Build".to_string(),
            OperationCategory::Publish { subcategory } => {
                format!("Publish - {}", match subcategory {
                    PublishType::DirectoryCreate => "Directory Create",
                    PublishType::FileWrite => "File Write",
                    PublishType::ViewerLaunch => "Viewer Launch",
                })
            },
        }
    }
}

lazy_static! {
    static ref TIMING_ENABLED: AtomicBool = AtomicBool::new(false);
    static ref FUNCTION_TIMINGS: Arc<RwLock<HashMap<String, (Duration, usize)>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref CATEGORY_TIMINGS: Arc<RwLock<HashMap<OperationCategory, Histogram<u64>>>> = Arc::new(RwLock::new(HashMap::new()));
    static ref SPAN_TIMINGS: RwLock<Option<LayerDowncaster<ByName, ByMessage>>> = RwLock::new(None);
}

/// Time between consecutive events inside one span, from the tracing-timing layer.
#[derive(Debug, Clone)]
pub struct SpanEventTiming {
    pub span: String,
    pub event: String,
    pub mean_ms: f64,
    pub max_ms: f64,
    pub count: u64,
}

pub struct TimingGuard {
    function_name: String,
    category: OperationCategory,
    start: Instant,
}

impl Drop for TimingGuard {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        record_timing_end(&self.function_name, duration, &self.category);
    }
}

pub fn start_timing(function_name: &str, category: OperationCategory) -> TimingGuard {
    TimingGuard {
        function_name: function_name.to_string(),
        category,
        start: Instant::now(),
    }
}

fn new_histogram() -> Option<Histogram<u64>> {
    Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3).ok()
}

fn record_timing_end(function_name: &str, duration: Duration, category: &OperationCategory) {
    if !is_timing_enabled() {
        return;
    }

    {
        let mut timings = FUNCTION_TIMINGS.write();
        let entry = timings
            .entry(function_name.to_string())
            .or_insert((Duration::from_nanos(0), 0));
        entry.0 += duration;
        entry.1 += 1;
    }

    let mut category_timings = CATEGORY_TIMINGS.write();
    if !category_timings.contains_key(category) {
        match new_histogram() {
            Some(histogram) => {
                category_timings.insert(category.clone(), histogram);
            }
            None => return,
        }
    }
    if let Some(histogram) = category_timings.get_mut(category) {
        let _ = histogram.record(duration.as_nanos() as u64);
    }
}

pub fn init_logging(enable_timing: bool, debug_logging: bool) -> anyhow::Result<()> {
    TIMING_ENABLED.store(enable_timing, Ordering::SeqCst);

    let mut env_filter = EnvFilter::from_default_env().add_directive(Level::INFO.into());
    if debug_logging {
        env_filter = env_filter.add_directive("dining_map=debug".parse()?);
    }

    let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

    if enable_timing {
        let timing_layer = timing_layer();
        *SPAN_TIMINGS.write() = Some(timing_layer.downcaster());

        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(timing_layer);

        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer);

        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

fn timing_layer() -> TimingLayer<ByName, ByMessage> {
    Builder::default().layer(|| {
        Histogram::<u64>::new_with_bounds(1, 60_000_000_000, 3)
            .expect("static histogram bounds are valid")
    })
}

fn collect_span_timings(
    downcaster: &LayerDowncaster<ByName, ByMessage>,
    dispatch: &Dispatch,
) -> Vec<SpanEventTiming> {
    let layer = match downcaster.downcast(dispatch) {
        Some(layer) => layer,
        None => return Vec::new(),
    };
    layer.force_synchronize();

    let mut rows = layer.with_histograms(|spans| {
        let mut rows = Vec::new();
        for (span, events) in spans.iter_mut() {
            for (event, histogram) in events.iter_mut() {
                histogram.refresh_timeout(Duration::from_millis(100));
                rows.push(SpanEventTiming {
                    span: span.to_string(),
                    event: event.clone(),
                    mean_ms: histogram.mean() / 1_000_000.0,
                    max_ms: histogram.max() as f64 / 1_000_000.0,
                    count: histogram.len(),
                });
            }
        }
        rows
    });
    rows.sort_by(|a, b| (&a.span, &a.event).cmp(&(&b.span, &b.event)));
    rows
}

/// Span/event timings gathered by the global subscriber, empty unless
/// timing was enabled in `init_logging`.
pub fn span_event_timings() -> Vec<SpanEventTiming> {
    let downcaster = SPAN_TIMINGS.read();
    match downcaster.as_ref() {
        Some(downcaster) => tracing::dispatcher::get_default(|dispatch| {
            collect_span_timings(downcaster, dispatch)
        }),
        None => Vec::new(),
    }
}

pub fn is_timing_enabled() -> bool {
    TIMING_ENABLED.load(Ordering::SeqCst)
}

pub fn print_timing_report() {
    if !is_timing_enabled() {
        return;
    }

    println!("\nPerformance Report");
    println!("==================");

    println!("\nBy Function:");
    println!("------------");
    let timings = FUNCTION_TIMINGS.read();
    let mut entries: Vec<_> = timings.iter().collect();
    entries.sort_by(|a, b| b.1.0.cmp(&a.1.0));

    for (function_name, (total_duration, count)) in entries {
        println!(
            "{}: total={:.3}ms, count={}",
            function_name,
            total_duration.as_secs_f64() * 1000.0,
            count,
        );
    }

    println!("\nBy Category:");
    println!("------------");
    let category_timings = CATEGORY_TIMINGS.read();
    let mut category_vec: Vec<_> = category_timings.iter().collect();
    category_vec.sort_by(|a, b| {
        b.1.mean().partial_cmp(&a.1.mean()).unwrap_or(std::cmp::Ordering::Equal)
    });

    for (category, histogram) in category_vec {
        println!(
            "{}: mean={:.3}ms, max={:.3}ms, count={}",
            category.as_str(),
            histogram.mean() / 1_000_000.0,
            histogram.max() as f64 / 1_000_000.0,
            histogram.len(),
        );
    }

    println!("\nBy Span Event:");
    println!("--------------");
    for row in span_event_timings() {
        println!(
            "{} -> {}: mean={:.3}ms, max={:.3}ms, count={}",
            row.span, row.event, row.mean_ms, row.max_ms, row.count,
        );
    }

    println!("==================\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_names() {
        assert_eq!(OperationCategory::Build.as_str(), "Map Build");
        assert_eq!(
            OperationCategory::Publish { subcategory: PublishType::FileWrite }.as_str(),
            "Publish - File Write"
        );
    }

    #[test]
    fn test_guard_is_noop_when_timing_disabled() {
        {
            let _guard = start_timing("noop", OperationCategory::Registry);
        }
        if !is_timing_enabled() {
            assert!(!FUNCTION_TIMINGS.read().contains_key("noop"));
        }
    }

    #[test]
    fn test_span_event_timings_read_from_layer() {
        let layer = timing_layer();
        let downcaster = layer.downcaster();
        let dispatch = Dispatch::new(tracing_subscriber::registry().with(layer));

        tracing::dispatcher::with_default(&dispatch, || {
            let span = tracing::info_span!("publish_at");
            let _entered = span.enter();
            tracing::info!("map saved");
            tracing::info!("viewer launched");
        });

        let rows = collect_span_timings(&downcaster, &dispatch);
        assert!(rows
            .iter()
            .any(|row| row.span == "publish_at" && row.event == "map saved" && row.count >= 1));
    }

    #[test]
    fn test_span_event_timings_empty_without_layer() {
        let downcaster = timing_layer().downcaster();
        let dispatch = Dispatch::new(tracing_subscriber::registry());
        assert!(collect_span_timings(&downcaster, &dispatch).is_empty());
    }
}
