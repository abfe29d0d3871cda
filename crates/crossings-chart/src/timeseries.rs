//! Fast and slow lines over time, with a marker at each crossunder.

use crate::ChartRequest;
use crate::canvas::{Canvas, PlotArea, colors, tick_label, ticks};
use crate::glyphs::{GLYPH_HEIGHT, text_width};
use chrono::Datelike;
use image::{Rgb, RgbImage};

const WIDTH: u32 = 1800;
const HEIGHT: u32 = 720;
const SCALE: u32 = 2;

/// Most year labels printed on the date axis.
const MAX_YEAR_LABELS: usize = 20;

const fn plot_area() -> PlotArea {
    PlotArea::with_margins(WIDTH, HEIGHT, 150, 40, 80, 80)
}

/// Chart title naming the symbol and both lines.
fn title(request: &ChartRequest<'_>) -> String {
    format!(
        "{}: {} vs {}",
        request.symbol,
        request.pair.fast_label(),
        request.pair.slow_label()
    )
}

/// Legend row above the plot: a swatch and name per line, then the marker.
fn legend(canvas: &mut Canvas, request: &ChartRequest<'_>, x: i64, cy: i64) {
    let h = i64::from(GLYPH_HEIGHT * SCALE);
    let mut x = x;
    let lines = [
        (request.pair.fast_label(), colors::BLUE),
        (request.pair.slow_label(), colors::ORANGE),
    ];
    for (label, color) in lines {
        canvas.fill_rect(x, cy - 2, x + 40, cy + 2, color);
        canvas.text(x + 50, cy - h / 2, &label, SCALE, colors::AXIS);
        x += 50 + i64::from(text_width(&label, SCALE)) + 40;
    }
    canvas.dashed_vline(x, cy - 10, cy + 10, 4, 3, colors::BLACK);
    canvas.text(x + 14, cy - h / 2, "Crossunder", SCALE, colors::AXIS);
}

/// Finite min and max over both lines.
fn value_range(fast: &[f64], slow: &[f64]) -> Option<(f64, f64)> {
    fast.iter()
        .chain(slow)
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Draw one line, broken wherever a value is undefined.
fn plot_line(canvas: &mut Canvas, area: &PlotArea, values: &[f64], range: (f64, f64), color: Rgb<u8>) {
    let n = values.len();
    let mut prev: Option<(i64, i64)> = None;
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() {
            prev = None;
            continue;
        }
        let point = (area.x_of(i, n), area.y_of(v, range.0, range.1));
        match prev {
            Some((x0, y0)) => canvas.line(x0, y0, point.0, point.1, 3, color),
            None => canvas.fill_rect(point.0 - 1, point.1 - 1, point.0 + 1, point.1 + 1, color),
        }
        prev = Some(point);
    }
}

/// Positions where a new calendar year starts, thinned to at most `max` labels.
fn year_starts(request: &ChartRequest<'_>, max: usize) -> Vec<(usize, i32)> {
    let mut starts = Vec::new();
    let mut last_year = None;
    for (i, p) in request.series.points().iter().enumerate() {
        let year = p.date.year();
        if last_year != Some(year) {
            starts.push((i, year));
            last_year = Some(year);
        }
    }
    let every = starts.len().div_ceil(max.max(1)).max(1);
    starts.into_iter().step_by(every).collect()
}

/// Render the time-series chart.
pub(crate) fn render(request: &ChartRequest<'_>) -> RgbImage {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let area = plot_area();
    let n = request.series.len();

    let (lo, hi) = value_range(request.fast, request.slow).unwrap_or((0.0, 1.0));
    let pad = if hi > lo { (hi - lo) * 0.05 } else { 1.0 };
    let range = (lo - pad, hi + pad);

    let y_ticks = ticks(range.0, range.1, 6);
    let step = y_ticks.get(1).zip(y_ticks.first()).map_or(1.0, |(b, a)| b - a);
    for &t in &y_ticks {
        let y = area.y_of(t, range.0, range.1);
        canvas.hline(y, area.left, area.right(), colors::GRID);
        canvas.text_right(area.left - 12, y, &tick_label(t, step), SCALE, colors::AXIS);
    }

    for (i, year) in year_starts(request, MAX_YEAR_LABELS) {
        let x = area.x_of(i, n);
        canvas.fill_rect(x, area.bottom(), x, area.bottom() + 8, colors::AXIS);
        canvas.text_centered(x, area.bottom() + 16, &year.to_string(), SCALE, colors::AXIS);
    }

    plot_line(&mut canvas, &area, request.slow, range, colors::ORANGE);
    plot_line(&mut canvas, &area, request.fast, range, colors::BLUE);

    for event in request.events {
        let x = area.x_of(event.index, n);
        canvas.dashed_vline(x, area.top, area.bottom(), 10, 6, colors::BLACK);
    }

    canvas.text_centered(i64::from(WIDTH) / 2, 12, &title(request), 3, colors::BLACK);
    legend(&mut canvas, request, area.left + 20, area.top - 22);
    canvas.text(20, area.top - 22 - i64::from(GLYPH_HEIGHT * SCALE) / 2, "Price", SCALE, colors::AXIS);
    canvas.text_centered(area.left + area.width / 2, area.bottom() + 46, "Date", SCALE, colors::AXIS);

    canvas.axes(&area);
    canvas.into_image()
}
