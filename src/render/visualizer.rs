use crate::canvas::surface::Canvas;
use crate::foundation::config::VisualizerConfig;
use crate::foundation::core::EventDataPoint;
use crate::foundation::error::PerspectiveResult;
use crate::render::error_stack::ErrorStack;
use crate::render::histogram::Histogram;
use crate::render::rolling_stack::RollingStack;
use crate::render::scatter::Scatter;
use crate::render::sorted_wave::SortedWave;
use crate::render::status_stack::StatusStack;
use crate::render::sweep::Sweep;
use crate::render::wave::Wave;

/// A streaming renderer that paints events onto its own canvas.
///
/// Ordering contract: `record` expects events in non-decreasing `start` order. Misordered input
/// degrades the picture (how much depends on how far the input strays from sorted order) but
/// never panics; renderers do not sort internally.
///
/// A renderer serves exactly one image: `render` consumes it and hands back the canvas.
pub trait Visualizer {
    /// Accept one event and update the canvas and accumulation state.
    fn record(&mut self, e: EventDataPoint);

    /// Finish the image.
    fn render(self: Box<Self>) -> Canvas;
}

/// Available renderer variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum VisualizerKind {
    /// Time-windowed concurrency trace shaded by progress.
    #[serde(rename = "wave")]
    Wave,
    /// Wave with each column ordered by progress.
    #[serde(rename = "wave-sorted")]
    SortedWave,
    /// Concurrency bars from the bottom edge.
    #[serde(rename = "rolling-stack")]
    RollingStack,
    /// Logarithmic arc-density plot of elapsed time.
    #[serde(rename = "sweep")]
    Sweep,
    /// Logarithmic scatter-density plot of run time.
    #[serde(rename = "scatter")]
    Scatter,
    /// Run-time histogram on a logarithmic axis.
    #[serde(rename = "histogram")]
    Histogram,
    /// Failure counts over time, stacked by failure class.
    #[serde(rename = "error-stack")]
    ErrorStack,
    /// Status proportions over time.
    #[serde(rename = "status-stack")]
    StatusStack,
}

impl VisualizerKind {
    /// Every variant, in CLI listing order.
    pub const ALL: [VisualizerKind; 8] = [
        VisualizerKind::ErrorStack,
        VisualizerKind::Histogram,
        VisualizerKind::RollingStack,
        VisualizerKind::Scatter,
        VisualizerKind::StatusStack,
        VisualizerKind::Sweep,
        VisualizerKind::Wave,
        VisualizerKind::SortedWave,
    ];

    /// Stable name, as used on the command line and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            VisualizerKind::Wave => "wave",
            VisualizerKind::SortedWave => "wave-sorted",
            VisualizerKind::RollingStack => "rolling-stack",
            VisualizerKind::Sweep => "sweep",
            VisualizerKind::Scatter => "scatter",
            VisualizerKind::Histogram => "histogram",
            VisualizerKind::ErrorStack => "error-stack",
            VisualizerKind::StatusStack => "status-stack",
        }
    }
}

impl std::fmt::Display for VisualizerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Build a renderer of the given kind from shared construction parameters.
pub fn create_visualizer(
    kind: VisualizerKind,
    cfg: &VisualizerConfig,
) -> PerspectiveResult<Box<dyn Visualizer>> {
    cfg.validate()?;
    let (w, h) = (cfg.width, cfg.height);
    Ok(match kind {
        VisualizerKind::Wave => Box::new(Wave::new(w, h, cfg.time_range()?)?),
        VisualizerKind::SortedWave => Box::new(SortedWave::new(w, h, cfg.time_range()?)?),
        VisualizerKind::RollingStack => Box::new(RollingStack::new(w, h, cfg.time_range()?)?),
        VisualizerKind::Sweep => Box::new(Sweep::new(
            w,
            h,
            cfg.time_range()?,
            cfg.run_time_scale,
            cfg.color_steps,
            cfg.x_grid,
        )?),
        VisualizerKind::Scatter => Box::new(Scatter::new(
            w,
            h,
            cfg.time_range()?,
            cfg.run_time_scale,
            cfg.color_steps,
            cfg.x_grid,
        )?),
        VisualizerKind::Histogram => Box::new(Histogram::new(w, h, cfg.run_time_scale)?),
        VisualizerKind::ErrorStack => Box::new(ErrorStack::new(w, h)?),
        VisualizerKind::StatusStack => Box::new(StatusStack::new(w, h)?),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/visualizer.rs"]
mod tests;
