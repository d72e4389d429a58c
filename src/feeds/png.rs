use std::io::Cursor;
use std::path::Path;

use anyhow::Context as _;

use crate::canvas::surface::Canvas;
use crate::feeds::binlog::{BinLogReader, EventData};
use crate::feeds::filter::EventFilter;
use crate::foundation::error::PerspectiveResult;
use crate::render::visualizer::Visualizer;

/// Summary of one render pass over a record stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Records decoded from the input.
    pub records_read: u64,
    /// Records handed to the renderer.
    pub events_recorded: u64,
    /// Recorded events whose start preceded the previous recorded start.
    pub out_of_order: u64,
}

/// Feed decoded records through `filter` into `visualizer` and render the result.
///
/// Records still in progress (negative status) have no final run time and are skipped. Input is
/// expected in non-decreasing start order; violations are counted and reported but not
/// corrected. The first decode error aborts the pass.
#[tracing::instrument(skip(records, visualizer))]
pub fn render_events<I>(
    records: I,
    filter: &EventFilter,
    mut visualizer: Box<dyn Visualizer>,
) -> PerspectiveResult<(Canvas, RenderStats)>
where
    I: IntoIterator<Item = PerspectiveResult<EventData>>,
{
    let mut stats = RenderStats::default();
    let mut last_start = i32::MIN;
    for record in records {
        let record = record?;
        stats.records_read += 1;
        if !record.is_finished() || !filter.matches(&record) {
            continue;
        }
        if record.start < last_start {
            stats.out_of_order += 1;
        }
        last_start = last_start.max(record.start);
        visualizer.record(record.point());
        stats.events_recorded += 1;
    }

    if stats.out_of_order > 0 {
        tracing::warn!(
            out_of_order = stats.out_of_order,
            "input is not sorted by start time; output may be degraded"
        );
    }
    tracing::info!(
        records_read = stats.records_read,
        events_recorded = stats.events_recorded,
        "rendered event stream"
    );
    Ok((visualizer.render(), stats))
}

/// Render a binary log file to a PNG file, creating the output directory if needed.
pub fn generate_png_from_bin_log(
    in_path: impl AsRef<Path>,
    out_path: impl AsRef<Path>,
    filter: &EventFilter,
    visualizer: Box<dyn Visualizer>,
) -> PerspectiveResult<RenderStats> {
    let reader = BinLogReader::open(in_path)?;
    let (canvas, stats) = render_events(reader, filter, visualizer)?;
    write_png(&canvas, out_path)?;
    Ok(stats)
}

/// Write a canvas as an RGBA PNG file.
pub fn write_png(canvas: &Canvas, path: impl AsRef<Path>) -> PerspectiveResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        path,
        &canvas.to_rgba8_bytes(),
        canvas.width(),
        canvas.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

/// Encode a canvas as PNG bytes in memory.
pub fn encode_png(canvas: Canvas) -> PerspectiveResult<Vec<u8>> {
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(canvas.into_rgba_image())
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

#[cfg(test)]
#[path = "../../tests/unit/feeds/png.rs"]
mod tests;
