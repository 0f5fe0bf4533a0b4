//! Pixel canvas rasterizing filled polygons into terminal cells.

use colorstrip_core::Point;
use colorstrip_palette::Rgb;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

/// Upper half block: foreground paints the top pixel, background the bottom one.
const HALF_BLOCK: &str = "▀";

/// A grid of pixels, two per terminal cell stacked vertically.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Create a canvas for a terminal area of `columns` x `rows` cells.
    pub fn for_cells(columns: u16, rows: u16, background: Rgb) -> Self {
        Self::new(columns as usize, rows as usize * 2, background)
    }

    pub fn new(width: usize, height: usize, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Fill a polygon with the even-odd rule, sampling pixel centers.
    pub fn fill_polygon(&mut self, polygon: &[Point], color: Rgb) {
        if polygon.len() < 3 || self.width == 0 || self.height == 0 {
            return;
        }
        if !polygon.iter().flatten().all(|v| v.is_finite()) {
            return;
        }

        let (min, max) = polygon.iter().fold(
            ([f64::INFINITY; 2], [f64::NEG_INFINITY; 2]),
            |(min, max), p| {
                (
                    [min[0].min(p[0]), min[1].min(p[1])],
                    [max[0].max(p[0]), max[1].max(p[1])],
                )
            },
        );

        let x_range = pixel_span(min[0], max[0], self.width);
        let y_range = pixel_span(min[1], max[1], self.height);
        for y in y_range {
            for x in x_range.clone() {
                if contains(polygon, [x as f64 + 0.5, y as f64 + 0.5]) {
                    self.pixels[y * self.width + x] = color;
                }
            }
        }
    }

    /// Render as half-block lines, one per pair of pixel rows.
    pub fn to_lines(&self) -> Vec<Line<'static>> {
        (0..self.height.div_ceil(2))
            .map(|row| {
                let spans: Vec<Span> = (0..self.width)
                    .map(|x| {
                        let top = self.pixels[2 * row * self.width + x];
                        let bottom = self.pixel(x, 2 * row + 1).unwrap_or(top);
                        Span::styled(
                            HALF_BLOCK,
                            Style::new().fg(to_color(top)).bg(to_color(bottom)),
                        )
                    })
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}

/// Indices of the pixels whose centers may fall within `[lo, hi]`.
fn pixel_span(lo: f64, hi: f64, len: usize) -> std::ops::Range<usize> {
    let start = (lo - 0.5).ceil().max(0.0) as usize;
    let end = ((hi - 0.5).floor() + 1.0).clamp(0.0, len as f64) as usize;
    start.min(end)..end
}

/// Even-odd point-in-polygon test.
fn contains(polygon: &[Point], [px, py]: Point) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for (i, &[xi, yi]) in polygon.iter().enumerate() {
        let [xj, yj] = polygon[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
