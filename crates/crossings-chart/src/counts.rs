//! Stacked bars of positive and negative outcomes per horizon.

use crate::ChartRequest;
use crate::canvas::{Canvas, PlotArea, colors, tick_label, ticks};
use crate::glyphs::GLYPH_HEIGHT;
use image::RgbImage;

const WIDTH: u32 = 1100;
const HEIGHT: u32 = 550;
const SCALE: u32 = 2;

/// Render the positive/negative counts chart.
///
/// Positive counts sit at the bottom in green, negative counts on top in red.
/// Each non-empty bar carries the share of positive outcomes.
pub(crate) fn render(request: &ChartRequest<'_>) -> RgbImage {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let area = PlotArea::with_margins(WIDTH, HEIGHT, 90, 30, 50, 60);
    let counts: Vec<_> = request.summary.counts.iter().collect();

    let tallest = counts.iter().map(|(_, c)| c.total()).max().unwrap_or(0);
    let max = if tallest == 0 { 1.0 } else { tallest as f64 * 1.12 };

    let y_ticks: Vec<f64> = ticks(0.0, max, 5)
        .into_iter()
        .filter(|t| t.fract() == 0.0)
        .collect();
    for &t in &y_ticks {
        let y = area.y_of(t, 0.0, max);
        canvas.hline(y, area.left, area.right(), colors::GRID);
        canvas.text_right(area.left - 12, y, &tick_label(t, 1.0), SCALE, colors::AXIS);
    }

    let slots = counts.len().max(1) as i64;
    let slot = area.width / slots;
    let half = (slot * 4 / 10).max(1);
    let label_h = i64::from(GLYPH_HEIGHT * SCALE);

    for (k, (horizon, c)) in counts.iter().enumerate() {
        let cx = area.left + slot * k as i64 + slot / 2;
        canvas.text_centered(cx, area.bottom() + 14, &format!("{horizon}D"), SCALE, colors::AXIS);

        let base = area.bottom();
        let split = area.y_of(c.positive as f64, 0.0, max);
        let top = area.y_of(c.total() as f64, 0.0, max);
        if c.positive > 0 {
            canvas.fill_rect(cx - half, split, cx + half, base, colors::GREEN);
        }
        if c.negative > 0 {
            canvas.fill_rect(cx - half, top, cx + half, split, colors::RED);
        }

        if let Some(pct) = c.positive_pct() {
            canvas.text_centered(cx, top - label_h - 6, &format!("{pct:.2}%"), SCALE, colors::BLACK);
        }
    }

    let title = format!(
        "{}: positive vs negative returns after {} crossunder",
        request.symbol, request.pair
    );
    canvas.text_centered(i64::from(WIDTH) / 2, 14, &title, SCALE, colors::BLACK);
    canvas.axes(&area);
    canvas.into_image()
}
