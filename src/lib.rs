//! Perspective renders raster diagnostic visualizations of event logs for quality control in
//! event-driven systems.
//!
//! An event is a unit of work with a start time, a run time and an outcome (success, or a
//! numbered failure class). Renderers consume events in start order and paint them onto a fixed
//! RGBA canvas; the result is encoded as PNG.
//!
//! # Pipeline overview
//!
//! 1. **Convert** (optional): CSV exports -> binary log ([`convert_csv_to_binary`]), with error
//!    reasons mapped to failure classes by an [`ErrorClassifier`]
//! 2. **Decode**: binary log -> [`EventData`] records ([`BinLogReader`])
//! 3. **Filter**: [`EventFilter`] selects records by time, type, region and status
//! 4. **Render**: [`Visualizer::record`] per event, then [`Visualizer::render`] -> [`Canvas`]
//! 5. **Encode**: [`write_png`]
//!
//! Renderers are streaming and single-pass: `record` never fails and never sorts, and each
//! renderer instance produces exactly one image.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod canvas;
mod feeds;
mod foundation;
mod render;

pub use canvas::blend::{
    add_sat, blend_fail, blend_pass, error_stack_color, progress_shade, wave_fail_color,
    wave_pass_color,
};
pub use canvas::surface::{Canvas, Rgba8};
pub use feeds::binlog::{BinLogReader, BinLogWriter, EventData};
pub use feeds::classify::ErrorClassifier;
pub use feeds::convert::{ConvertStats, convert_csv, convert_csv_to_binary};
pub use feeds::filter::EventFilter;
pub use feeds::png::{
    RenderStats, encode_png, generate_png_from_bin_log, render_events, write_png,
};
pub use foundation::config::{
    BG, BIN_RECORD_LEN, FAIL_RGB, GRID, MAX_C16, OPAQUE, PASS_RGB, SATURATED, VisualizerConfig,
};
pub use foundation::core::{EventDataPoint, TimeRange};
pub use foundation::error::{PerspectiveError, PerspectiveResult};
pub use render::error_stack::ErrorStack;
pub use render::histogram::Histogram;
pub use render::rolling_stack::RollingStack;
pub use render::scatter::Scatter;
pub use render::sorted_wave::SortedWave;
pub use render::status_stack::StatusStack;
pub use render::sweep::Sweep;
pub use render::visualizer::{Visualizer, VisualizerKind, create_visualizer};
pub use render::wave::Wave;
