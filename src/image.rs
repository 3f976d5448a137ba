//! PNG output: a spacetime picture of the field history and
//! a numerical against reference line plot.

use crate::error::*;

/// Each line is one time level, colour mapped with TURBO.
pub struct HistoryImage {
    width: u32,
    lines: Vec<Vec<f64>>,
}

impl HistoryImage {
    pub fn new(width: u32) -> Self {
        HistoryImage {
            width,
            lines: Vec::new(),
        }
    }

    pub fn add_line(&mut self, v: &[f64]) {
        debug_assert_eq!(v.len(), self.width as usize);
        self.lines.push(v.to_vec());
    }

    pub fn lines(&self) -> usize {
        self.lines.len()
    }

    /// Normalize over the whole history and rasterize.
    pub fn render(&self) -> image::RgbImage {
        let (lo, hi) = value_range(self.lines.iter().flatten().copied());
        let mut img = image::RgbImage::new(self.width, self.lines.len() as u32);
        let gradient = colorous::TURBO;
        for (l, line) in self.lines.iter().enumerate() {
            for (x, r) in line.iter().enumerate() {
                let c = gradient.eval_continuous(normalize(*r, lo, hi));
                img.put_pixel(x as u32, l as u32, image::Rgb(c.as_array()));
            }
        }
        img
    }

    pub fn write<F: AsRef<std::path::Path>>(&self, s: &F) -> Result<()> {
        tracing::info!("Writing: {:?}", s.as_ref());
        self.render().save(s)?;
        Ok(())
    }
}

fn value_range<I: Iterator<Item = f64>>(values: I) -> (f64, f64) {
    values
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        })
}

fn normalize(v: f64, lo: f64, hi: f64) -> f64 {
    if hi > lo {
        ((v - lo) / (hi - lo)).clamp(0.0, 1.0)
    } else {
        0.5
    }
}

/// Curves sharing one abscissa.
pub struct ComparisonPlot {
    width: u32,
    height: u32,
    x: Vec<f64>,
    curves: Vec<(String, Vec<f64>)>,
}

const MARGIN: u32 = 20;
const BACKGROUND: image::Rgb<u8> = image::Rgb([255, 255, 255]);
const AXIS: image::Rgb<u8> = image::Rgb([0, 0, 0]);

impl ComparisonPlot {
    pub fn new(width: u32, height: u32, x: &[f64]) -> Self {
        ComparisonPlot {
            width: width.max(2 * MARGIN + 2),
            height: height.max(2 * MARGIN + 2),
            x: x.to_vec(),
            curves: Vec::new(),
        }
    }

    pub fn add_curve<S: Into<String>>(&mut self, label: S, y: &[f64]) {
        debug_assert_eq!(y.len(), self.x.len());
        self.curves.push((label.into(), y.to_vec()));
    }

    pub fn render(&self) -> image::RgbImage {
        let mut img =
            image::RgbImage::from_pixel(self.width, self.height, BACKGROUND);
        let (x_lo, x_hi) = value_range(self.x.iter().copied());
        let (y_lo, y_hi) = value_range(
            self.curves.iter().flat_map(|(_, y)| y.iter().copied()),
        );
        let plot_w = (self.width - 2 * MARGIN - 1) as f64;
        let plot_h = (self.height - 2 * MARGIN - 1) as f64;
        let to_pixel = |x: f64, y: f64| -> (i64, i64) {
            let px = MARGIN as f64 + normalize(x, x_lo, x_hi) * plot_w;
            let py = (self.height - MARGIN - 1) as f64
                - normalize(y, y_lo, y_hi) * plot_h;
            (px.round() as i64, py.round() as i64)
        };

        // Axes
        let bottom = (self.height - MARGIN - 1) as i64;
        draw_line(
            &mut img,
            (MARGIN as i64, bottom),
            ((self.width - MARGIN - 1) as i64, bottom),
            AXIS,
        );
        draw_line(
            &mut img,
            (MARGIN as i64, MARGIN as i64),
            (MARGIN as i64, bottom),
            AXIS,
        );

        let palette = colorous::CATEGORY10;
        for (i, (label, y)) in self.curves.iter().enumerate() {
            let c = palette[i % palette.len()];
            let color = image::Rgb(c.as_array());
            tracing::debug!("plotting {label} in {c:?}");
            let points: Vec<(i64, i64)> = self
                .x
                .iter()
                .zip(y)
                .filter(|(x, y)| x.is_finite() && y.is_finite())
                .map(|(x, y)| to_pixel(*x, *y))
                .collect();
            for pair in points.windows(2) {
                draw_line(&mut img, pair[0], pair[1], color);
            }
        }
        img
    }

    pub fn write<F: AsRef<std::path::Path>>(&self, s: &F) -> Result<()> {
        tracing::info!("Writing: {:?}", s.as_ref());
        self.render().save(s)?;
        Ok(())
    }
}

/// Bresenham, clipped to the image.
fn draw_line(
    img: &mut image::RgbImage,
    from: (i64, i64),
    to: (i64, i64),
    color: image::Rgb<u8>,
) {
    let (mut x0, mut y0) = from;
    let (x1, y1) = to;
    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        let inside = x0 >= 0
            && y0 >= 0
            && (x0 as u32) < img.width()
            && (y0 as u32) < img.height();
        if inside {
            img.put_pixel(x0 as u32, y0 as u32, color);
        }
        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
