//! Pipeline plugin trait for extensibility.

use super::{RunError, Stage};

/// A plugin that observes the generation pipeline.
///
/// Plugins receive callbacks when a stage starts, when it completes, and
/// when it fails. They cannot change the outcome of a run.
///
/// # Example
///
/// ```ignore
/// struct TimingPlugin {
///     start_times: Mutex<HashMap<Stage, Instant>>,
/// }
///
/// impl Plugin for TimingPlugin {
///     fn name(&self) -> &'static str { "timing" }
///
///     fn on_enter(&self, stage: Stage) {
///         self.start_times.lock().unwrap().insert(stage, Instant::now());
///     }
///
///     fn on_exit(&self, stage: Stage) {
///         if let Some(start) = self.start_times.lock().unwrap().get(&stage) {
///             println!("{} took {:?}", stage, start.elapsed());
///         }
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a stage runs.
    #[allow(unused_variables)]
    fn on_enter(&self, stage: Stage) {}

    /// Called after a stage completes successfully.
    #[allow(unused_variables)]
    fn on_exit(&self, stage: Stage) {}

    /// Called when a stage fails; no later stage runs.
    #[allow(unused_variables)]
    fn on_failed(&self, stage: Stage, error: &RunError) {}
}
