//! Presentation, the optional terminal stage of the pipeline.

use tracing::info;

/// Side-effecting consumer of the final `(label, value)` pair.
///
/// A presenter only hands the value to an output channel; it must never
/// alter or re-derive it. Implementations must be stateless (`Send + Sync`).
pub trait Presenter: Send + Sync {
    /// Present the labeled summary value.
    fn present(&self, label: &str, value: f64);
}

static_assertions::assert_obj_safe!(Presenter);

/// Writes the result to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintPresenter;

impl Presenter for PrintPresenter {
    fn present(&self, label: &str, value: f64) {
        println!("{label}: {value}");
    }
}

/// Emits the result as a single structured log event.
///
/// Useful when results should land in the host application's log stream
/// instead of stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl Presenter for LogPresenter {
    fn present(&self, label: &str, value: f64) {
        info!(label, value, "result ready");
    }
}
