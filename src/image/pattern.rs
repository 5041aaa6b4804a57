//! Low-poly triangle mosaic rendered as SVG.
//!
//! A jittered point grid covers the canvas; each cell is cut into two
//! triangles filled from a diverging palette along the top-left to
//! bottom-right gradient.

use super::seed::Mulberry32;
use crate::config::ImageConfig;
use std::fmt::Write;

type Rgb = [u8; 3];

/// ColorBrewer diverging schemes, five classes each.
const PALETTES: &[(&str, [Rgb; 5])] = &[
    ("PuOr", [[0xe6, 0x61, 0x01], [0xfd, 0xb8, 0x63], [0xf7, 0xf7, 0xf7], [0xb2, 0xab, 0xd2], [0x5e, 0x3c, 0x99]]),
    ("PRGn", [[0x7b, 0x32, 0x94], [0xc2, 0xa5, 0xcf], [0xf7, 0xf7, 0xf7], [0xa6, 0xdb, 0xa0], [0x00, 0x88, 0x37]]),
    ("PiYG", [[0xd0, 0x1c, 0x8b], [0xf1, 0xb6, 0xda], [0xf7, 0xf7, 0xf7], [0xb8, 0xe1, 0x86], [0x4d, 0xac, 0x26]]),
    ("RdBu", [[0xca, 0x00, 0x20], [0xf4, 0xa5, 0x82], [0xf7, 0xf7, 0xf7], [0x92, 0xc5, 0xde], [0x05, 0x71, 0xb0]]),
    ("RdYlBu", [[0xd7, 0x19, 0x1c], [0xfd, 0xae, 0x61], [0xff, 0xff, 0xbf], [0xab, 0xd9, 0xe9], [0x2c, 0x7b, 0xb6]]),
    ("Spectral", [[0xd7, 0x19, 0x1c], [0xfd, 0xae, 0x61], [0xff, 0xff, 0xbf], [0xab, 0xdd, 0xa4], [0x2b, 0x83, 0xba]]),
    ("RdYlGn", [[0xd7, 0x19, 0x1c], [0xfd, 0xae, 0x61], [0xff, 0xff, 0xbf], [0xa6, 0xd9, 0x6a], [0x1a, 0x96, 0x41]]),
];

/// Maximum shift of a triangle's colour position along the gradient.
const COLOR_NOISE: f64 = 0.08;

#[derive(Debug, Clone, Copy)]
struct Point {
    x: f64,
    y: f64,
}

/// Render a mosaic for the given generator state.
pub fn render_svg(rng: &mut Mulberry32, config: &ImageConfig) -> String {
    let (_, palette) = PALETTES[rng.next_index(PALETTES.len())];
    let width = f64::from(config.width);
    let height = f64::from(config.height);

    let cols = config.width.div_ceil(config.cell_size).max(1) as usize;
    let rows = config.height.div_ceil(config.cell_size).max(1) as usize;
    let grid = jittered_grid(rng, config, cols, rows);

    let mut svg = String::with_capacity(cols * rows * 2 * 96);
    write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    )
    .ok();

    for row in 0..rows {
        for col in 0..cols {
            let p00 = grid[row][col];
            let p10 = grid[row][col + 1];
            let p01 = grid[row + 1][col];
            let p11 = grid[row + 1][col + 1];

            let triangles = if rng.next_bool() {
                [[p00, p10, p11], [p00, p11, p01]]
            } else {
                [[p00, p10, p01], [p10, p11, p01]]
            };

            for triangle in triangles {
                let centroid = centroid(&triangle);
                let noise = (rng.next_f64() - 0.5) * 2.0 * COLOR_NOISE;
                let t = ((centroid.x / width + centroid.y / height) / 2.0 + noise).clamp(0.0, 1.0);
                push_triangle(&mut svg, &triangle, interpolate(&palette, t));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// `(rows + 1) x (cols + 1)` points; border points stay on the canvas edge.
fn jittered_grid(rng: &mut Mulberry32, config: &ImageConfig, cols: usize, rows: usize) -> Vec<Vec<Point>> {
    let cell_w = f64::from(config.width) / cols as f64;
    let cell_h = f64::from(config.height) / rows as f64;

    (0..=rows)
        .map(|row| {
            (0..=cols)
                .map(|col| {
                    let mut x = col as f64 * cell_w;
                    let mut y = row as f64 * cell_h;
                    if col > 0 && col < cols {
                        x += (rng.next_f64() - 0.5) * config.variance * cell_w;
                    }
                    if row > 0 && row < rows {
                        y += (rng.next_f64() - 0.5) * config.variance * cell_h;
                    }
                    Point { x, y }
                })
                .collect()
        })
        .collect()
}

fn centroid(triangle: &[Point; 3]) -> Point {
    Point {
        x: triangle.iter().map(|p| p.x).sum::<f64>() / 3.0,
        y: triangle.iter().map(|p| p.y).sum::<f64>() / 3.0,
    }
}

/// Linear interpolation across evenly spaced palette stops.
fn interpolate(palette: &[Rgb; 5], t: f64) -> Rgb {
    let scaled = t * (palette.len() - 1) as f64;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let lower = (scaled.floor() as usize).min(palette.len() - 2);
    let frac = scaled - lower as f64;
    let (a, b) = (palette[lower], palette[lower + 1]);

    let mix = |i: usize| {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let channel = (f64::from(a[i]) + (f64::from(b[i]) - f64::from(a[i])) * frac).round() as u8;
        channel
    };
    [mix(0), mix(1), mix(2)]
}

fn push_triangle(svg: &mut String, triangle: &[Point; 3], [r, g, b]: Rgb) {
    let [p0, p1, p2] = triangle;
    write!(
        svg,
        r##"<path d="M{:.1},{:.1}L{:.1},{:.1}L{:.1},{:.1}Z" fill="#{r:02x}{g:02x}{b:02x}" stroke="#{r:02x}{g:02x}{b:02x}" stroke-width="1"/>"##,
        p0.x, p0.y, p1.x, p1.y, p2.x, p2.y
    )
    .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> ImageConfig {
        ImageConfig {
            width: 120,
            height: 60,
            cell_size: 30,
            variance: 0.75,
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = small_config();
        let a = render_svg(&mut Mulberry32::new(1234), &config);
        let b = render_svg(&mut Mulberry32::new(1234), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_render_differs_by_seed() {
        let config = small_config();
        let a = render_svg(&mut Mulberry32::new(1), &config);
        let b = render_svg(&mut Mulberry32::new(2), &config);
        assert_ne!(a, b);
    }

    #[test]
    fn test_render_triangle_count() {
        // 120x60 with 30px cells: 4 cols x 2 rows x 2 triangles
        let svg = render_svg(&mut Mulberry32::new(9), &small_config());
        assert_eq!(svg.matches("<path").count(), 16);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"viewBox="0 0 120 60""#));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_grid_border_stays_on_canvas() {
        let config = small_config();
        let grid = jittered_grid(&mut Mulberry32::new(5), &config, 4, 2);
        assert_eq!(grid.len(), 3);
        assert_eq!(grid[0].len(), 5);
        for point in &grid[0] {
            assert_eq!(point.y, 0.0);
        }
        for row in &grid {
            assert_eq!(row[0].x, 0.0);
            assert_eq!(row[4].x, 120.0);
        }
    }

    #[test]
    fn test_interpolate_endpoints() {
        let palette = PALETTES[0].1;
        assert_eq!(interpolate(&palette, 0.0), palette[0]);
        assert_eq!(interpolate(&palette, 1.0), palette[4]);
        assert_eq!(interpolate(&palette, 0.5), palette[2]);
    }
}
