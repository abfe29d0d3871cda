//! Raster drawing primitives shared by the three charts.

use crate::glyphs::{ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, text_width};
use image::{Rgb, RgbImage};

/// Common color definitions
pub(crate) mod colors {
    use image::Rgb;

    pub(crate) const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    pub(crate) const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    pub(crate) const GRID: Rgb<u8> = Rgb([225, 225, 225]);
    pub(crate) const AXIS: Rgb<u8> = Rgb([60, 60, 60]);
    pub(crate) const BLUE: Rgb<u8> = Rgb([31, 119, 180]);
    pub(crate) const ORANGE: Rgb<u8> = Rgb([255, 127, 14]);
    pub(crate) const GREEN: Rgb<u8> = Rgb([0, 128, 0]);
    pub(crate) const RED: Rgb<u8> = Rgb([214, 39, 40]);
}

/// Rectangle of the image where data is plotted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PlotArea {
    pub(crate) left: i64,
    pub(crate) top: i64,
    pub(crate) width: i64,
    pub(crate) height: i64,
}

impl PlotArea {
    /// Area inside the given margins of a `width` x `height` image.
    pub(crate) const fn with_margins(
        width: u32,
        height: u32,
        left: u32,
        right: u32,
        top: u32,
        bottom: u32,
    ) -> Self {
        Self {
            left: left as i64,
            top: top as i64,
            width: width as i64 - left as i64 - right as i64,
            height: height as i64 - top as i64 - bottom as i64,
        }
    }

    pub(crate) const fn right(&self) -> i64 {
        self.left + self.width
    }

    pub(crate) const fn bottom(&self) -> i64 {
        self.top + self.height
    }

    /// Pixel row of `value` on a linear scale from `min` (bottom) to `max` (top).
    pub(crate) fn y_of(&self, value: f64, min: f64, max: f64) -> i64 {
        let t = if max > min { (value - min) / (max - min) } else { 0.5 };
        self.bottom() - (t * self.height as f64).round() as i64
    }

    /// Pixel column of slot `i` out of `n` evenly spread points.
    pub(crate) fn x_of(&self, i: usize, n: usize) -> i64 {
        if n <= 1 {
            return self.left + self.width / 2;
        }
        self.left + (i as f64 / (n - 1) as f64 * self.width as f64).round() as i64
    }
}

/// An RGB image with clipped drawing operations.
#[derive(Debug)]
pub(crate) struct Canvas {
    img: RgbImage,
}

impl Canvas {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            img: RgbImage::from_pixel(width, height, colors::WHITE),
        }
    }

    pub(crate) fn into_image(self) -> RgbImage {
        self.img
    }

    fn put(&mut self, x: i64, y: i64, color: Rgb<u8>) {
        if x >= 0 && y >= 0 && x < i64::from(self.img.width()) && y < i64::from(self.img.height()) {
            self.img.put_pixel(x as u32, y as u32, color);
        }
    }

    /// Fill the rectangle spanning the two corners, inclusive.
    pub(crate) fn fill_rect(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
        for y in y0.min(y1)..=y0.max(y1) {
            for x in x0.min(x1)..=x0.max(x1) {
                self.put(x, y, color);
            }
        }
    }

    pub(crate) fn hline(&mut self, y: i64, x0: i64, x1: i64, color: Rgb<u8>) {
        self.fill_rect(x0, y, x1, y, color);
    }

    /// Vertical dashed line from `y0` to `y1`.
    pub(crate) fn dashed_vline(&mut self, x: i64, y0: i64, y1: i64, dash: i64, gap: i64, color: Rgb<u8>) {
        let period = (dash + gap).max(1);
        for y in y0.min(y1)..=y0.max(y1) {
            if (y - y0.min(y1)) % period < dash {
                self.put(x, y, color);
                self.put(x + 1, y, color);
            }
        }
    }

    /// Bresenham line, thickened by drawing a square brush at each step.
    pub(crate) fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, thickness: i64, color: Rgb<u8>) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);
        let half = thickness.max(1) / 2;

        loop {
            self.fill_rect(x - half, y - half, x + half, y + half, color);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Draw `text` with its top-left corner at (`x`, `y`).
    pub(crate) fn text(&mut self, x: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
        let s = i64::from(scale.max(1));
        for (n, c) in text.chars().enumerate() {
            let ox = x + n as i64 * i64::from(ADVANCE) * s;
            for (row, bits) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if bits & (1 << (GLYPH_WIDTH - 1 - col)) != 0 {
                        let px = ox + i64::from(col) * s;
                        let py = y + row as i64 * s;
                        self.fill_rect(px, py, px + s - 1, py + s - 1, color);
                    }
                }
            }
        }
    }

    /// Draw `text` horizontally centered on `cx`, top at `y`.
    pub(crate) fn text_centered(&mut self, cx: i64, y: i64, text: &str, scale: u32, color: Rgb<u8>) {
        let w = i64::from(text_width(text, scale));
        self.text(cx - w / 2, y, text, scale, color);
    }

    /// Draw `text` right-aligned at `right`, vertically centered on `cy`.
    pub(crate) fn text_right(&mut self, right: i64, cy: i64, text: &str, scale: u32, color: Rgb<u8>) {
        let w = i64::from(text_width(text, scale));
        let h = i64::from(GLYPH_HEIGHT * scale.max(1));
        self.text(right - w, cy - h / 2, text, scale, color);
    }

    /// Axes frame: left and bottom spines.
    pub(crate) fn axes(&mut self, area: &PlotArea) {
        self.fill_rect(area.left - 1, area.top, area.left, area.bottom(), colors::AXIS);
        self.fill_rect(area.left, area.bottom(), area.right(), area.bottom() + 1, colors::AXIS);
    }
}

/// Round tick step giving roughly `target` intervals over `span`.
pub(crate) fn nice_step(span: f64, target: usize) -> f64 {
    if !(span.is_finite() && span > 0.0) || target == 0 {
        return 1.0;
    }
    let raw = span / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Tick values covering `[min, max]` with a round step.
pub(crate) fn ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    let step = nice_step(max - min, target);
    let mut v = (min / step).ceil() * step;
    let mut out = Vec::new();
    while v <= max + step * 1e-9 && out.len() <= target * 3 {
        // Avoid printing -0.
        out.push(if v.abs() < step * 1e-9 { 0.0 } else { v });
        v += step;
    }
    out
}

/// Label for a tick value, with enough decimals for the step.
pub(crate) fn tick_label(value: f64, step: f64) -> String {
    let decimals = if step >= 1.0 {
        0
    } else {
        (-step.log10().floor()) as usize
    };
    format!("{value:.decimals$}")
}
