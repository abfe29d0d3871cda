//! Bar chart of the mean forward return at each horizon.

use crate::ChartRequest;
use crate::canvas::{Canvas, PlotArea, colors, tick_label, ticks};
use crate::glyphs::GLYPH_HEIGHT;
use image::RgbImage;

const WIDTH: u32 = 1100;
const HEIGHT: u32 = 550;
const SCALE: u32 = 2;

/// Value range for the bars, always including zero.
pub(crate) fn bar_range(values: &[f64]) -> (f64, f64) {
    let (lo, hi) = values
        .iter()
        .filter(|v| v.is_finite())
        .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    if hi > lo {
        let pad = (hi - lo) * 0.12;
        (if lo < 0.0 { lo - pad } else { lo }, if hi > 0.0 { hi + pad } else { hi })
    } else {
        (-1.0, 1.0)
    }
}

/// Render the average-returns chart.
pub(crate) fn render(request: &ChartRequest<'_>) -> RgbImage {
    let mut canvas = Canvas::new(WIDTH, HEIGHT);
    let area = PlotArea::with_margins(WIDTH, HEIGHT, 110, 30, 50, 60);
    let averages: Vec<(usize, f64)> = request.summary.average.iter().collect();
    let values: Vec<f64> = averages.iter().map(|&(_, v)| v).collect();
    let (min, max) = bar_range(&values);

    let y_ticks = ticks(min, max, 6);
    let step = y_ticks.get(1).zip(y_ticks.first()).map_or(1.0, |(b, a)| b - a);
    for &t in &y_ticks {
        let y = area.y_of(t, min, max);
        canvas.hline(y, area.left, area.right(), colors::GRID);
        canvas.text_right(area.left - 12, y, &tick_label(t, step), SCALE, colors::AXIS);
    }

    let zero = area.y_of(0.0, min, max);
    let slots = averages.len().max(1) as i64;
    let slot = area.width / slots;
    let half = (slot * 4 / 10).max(1);
    let label_h = i64::from(GLYPH_HEIGHT * SCALE);

    for (k, &(horizon, avg)) in averages.iter().enumerate() {
        let cx = area.left + slot * k as i64 + slot / 2;
        canvas.text_centered(cx, area.bottom() + 14, &format!("{horizon}D"), SCALE, colors::AXIS);

        if !avg.is_finite() {
            continue;
        }
        let top = area.y_of(avg, min, max);
        canvas.fill_rect(cx - half, top, cx + half, zero, colors::BLUE);

        let label = format!("{avg:.2}");
        let y = if avg >= 0.0 { top - label_h - 6 } else { top + 6 };
        canvas.text_centered(cx, y, &label, SCALE, colors::BLACK);
    }

    let title = format!(
        "{}: average return after {} crossunder",
        request.symbol, request.pair
    );
    canvas.text_centered(i64::from(WIDTH) / 2, 14, &title, SCALE, colors::BLACK);
    canvas.hline(zero, area.left, area.right(), colors::AXIS);
    canvas.axes(&area);
    canvas.into_image()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossings_eval::ReturnSummary;
    use crossings_signals::{CrossingPair, CrossunderEvent};
    use crossings_traits::{Date, PricePoint, PriceSeries};

    #[test]
    fn test_bar_range_includes_zero() {
        let (lo, hi) = bar_range(&[0.1, 0.3]);
        assert_eq!(lo, 0.0);
        assert!(hi > 0.3);

        let (lo, hi) = bar_range(&[-0.2, f64::NAN]);
        assert!(lo < -0.2);
        assert_eq!(hi, 0.0);

        assert_eq!(bar_range(&[f64::NAN, f64::NAN]), (-1.0, 1.0));
        assert_eq!(bar_range(&[]), (-1.0, 1.0));
    }

    #[test]
    fn test_render_with_and_without_events() {
        let start = Date::from_ymd_opt(2015, 1, 1).unwrap();
        let s = PriceSeries::new(
            (0..800)
                .map(|i| PricePoint::new(start + chrono::Days::new(i), 100.0 + (i % 37) as f64))
                .collect(),
        );
        let closes = s.closes();

        for events in [vec![], vec![CrossunderEvent { index: 10, date: s.date_at(10).unwrap() }]] {
            let summary = ReturnSummary::standard(&closes, &events);
            let request = ChartRequest {
                symbol: "ETH",
                pair: CrossingPair::PriceVsMa { window: 100 },
                series: &s,
                fast: &closes,
                slow: &closes,
                events: &events,
                summary: &summary,
            };
            assert_eq!(render(&request).dimensions(), (WIDTH, HEIGHT));
        }
    }

    #[test]
    fn test_title_drawn_above_plot() {
        let closes = vec![100.0; 10];
        let s = PriceSeries::new(
            closes
                .iter()
                .enumerate()
                .map(|(i, &c)| {
                    PricePoint::new(Date::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Days::new(i as u64), c)
                })
                .collect(),
        );
        let summary = ReturnSummary::standard(&closes, &[]);
        let request = ChartRequest {
            symbol: "ETH",
            pair: CrossingPair::MaVsMa { fast: 50, slow: 200 },
            series: &s,
            fast: &closes,
            slow: &closes,
            events: &[],
            summary: &summary,
        };
        let img = render(&request);
        let top = PlotArea::with_margins(WIDTH, HEIGHT, 110, 30, 50, 60).top as u32;
        assert!((0..top).any(|y| (0..WIDTH).any(|x| *img.get_pixel(x, y) == colors::BLACK)));
    }
}
