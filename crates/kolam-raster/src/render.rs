//! Rasterization of path sets and dot markers.

use std::fs::File;
use std::io::{BufWriter, Seek, Write};
use std::path::Path as FsPath;

use image::{ImageFormat, Rgba, RgbaImage};
use kolam_core::{Color, Path, PathCmd, PathSet, Point};

use crate::canvas::Canvas;
use crate::error::RenderError;
use crate::style::Style;

/// Angular step for arc flattening. Fixed, so flattening is deterministic.
const ARC_STEP: f32 = std::f32::consts::TAU / 96.0;

/// Rasterize a path set and dot markers into a pixel buffer.
///
/// Fails with [`RenderError::EmptyPathSet`] if there are no paths and dot
/// markers are disabled. The bounding box covers all path points and all dot
/// positions; dots are drawn after every stroke so they sit on top.
pub fn render_image(
    paths: &PathSet,
    dots: &[Point],
    show_dots: bool,
    style: &Style,
) -> Result<RgbaImage, RenderError> {
    if paths.is_empty() && !show_dots {
        return Err(RenderError::EmptyPathSet);
    }

    let mut bounds = paths.bounds();
    for &d in dots {
        bounds.include_point(d);
    }
    let canvas = Canvas::fit(bounds, style);

    let mut img = RgbaImage::from_pixel(canvas.width, canvas.height, rgba(style.background));
    let stroke = rgba(style.stroke);
    let half_width = style.line_width * 0.5;

    for path in paths {
        for polyline in flatten(path) {
            let px: Vec<Point> = polyline.into_iter().map(|p| canvas.map(p)).collect();
            for pair in px.windows(2) {
                stroke_segment(&mut img, pair[0], pair[1], half_width, stroke);
            }
        }
    }

    if show_dots && style.dot_radius > 0.0 {
        for &d in dots {
            fill_disk(&mut img, canvas.map(d), style.dot_radius, stroke);
        }
    }

    Ok(img)
}

/// Render to a PNG file at `dest`. Writes exactly one file; existing files
/// are overwritten (unique naming is the caller's responsibility).
pub fn render_to_png(
    paths: &PathSet,
    dots: &[Point],
    dest: &FsPath,
    show_dots: bool,
    style: &Style,
) -> Result<(), RenderError> {
    let img = render_image(paths, dots, show_dots, style)?;
    let target = dest.display().to_string();
    let file = File::create(dest).map_err(|e| RenderError::TargetUnwritable {
        target: target.clone(),
        source: image::ImageError::IoError(e),
    })?;
    let mut writer = BufWriter::new(file);
    img.write_to(&mut writer, ImageFormat::Png)
        .map_err(|e| RenderError::TargetUnwritable { target, source: e })
}

/// Render PNG bytes into an arbitrary seekable writer.
pub fn render_to_writer<W: Write + Seek>(
    paths: &PathSet,
    dots: &[Point],
    writer: &mut W,
    show_dots: bool,
    style: &Style,
) -> Result<(), RenderError> {
    let img = render_image(paths, dots, show_dots, style)?;
    img.write_to(writer, ImageFormat::Png)
        .map_err(|e| RenderError::TargetUnwritable {
            target: "<stream>".to_string(),
            source: e,
        })
}

fn rgba(c: Color) -> Rgba<u8> {
    Rgba([c.r, c.g, c.b, c.a])
}

/// Flatten a path into polylines in world coordinates. Arcs are subdivided at
/// [`ARC_STEP`].
fn flatten(path: &Path) -> Vec<Vec<Point>> {
    let mut lines: Vec<Vec<Point>> = Vec::new();
    let mut current: Vec<Point> = Vec::new();
    let mut start = Point::ZERO;

    for cmd in path.commands() {
        match cmd {
            PathCmd::MoveTo(p) => {
                if current.len() > 1 {
                    lines.push(std::mem::take(&mut current));
                } else {
                    current.clear();
                }
                current.push(*p);
                start = *p;
            }
            PathCmd::LineTo(p) => current.push(*p),
            PathCmd::Arc { center, radius, start_angle, sweep_angle } => {
                let n = ((sweep_angle.abs() / ARC_STEP).ceil() as usize).max(1);
                for i in 1..=n {
                    let a = start_angle + sweep_angle * (i as f32 / n as f32);
                    current.push(Point::new(
                        center.x + radius * a.cos(),
                        center.y + radius * a.sin(),
                    ));
                }
            }
            PathCmd::Close => current.push(start),
        }
    }
    if current.len() > 1 {
        lines.push(current);
    }
    lines
}

/// Stroke one segment as a filled capsule of radius `half_width`, with an
/// exact distance test per pixel center.
fn stroke_segment(img: &mut RgbaImage, a: Point, b: Point, half_width: f32, color: Rgba<u8>) {
    let pad = half_width + 1.0;
    let x0 = ((a.x.min(b.x) - pad).floor().max(0.0)) as u32;
    let y0 = ((a.y.min(b.y) - pad).floor().max(0.0)) as u32;
    let x1 = ((a.x.max(b.x) + pad).ceil()).min((img.width() - 1) as f32) as u32;
    let y1 = ((a.y.max(b.y) + pad).ceil()).min((img.height() - 1) as f32) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if segment_distance(p, a, b) <= half_width {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill a disk of `radius` around `center`.
fn fill_disk(img: &mut RgbaImage, center: Point, radius: f32, color: Rgba<u8>) {
    let x0 = ((center.x - radius - 1.0).floor().max(0.0)) as u32;
    let y0 = ((center.y - radius - 1.0).floor().max(0.0)) as u32;
    let x1 = ((center.x + radius + 1.0).ceil()).min((img.width() - 1) as f32) as u32;
    let y1 = ((center.y + radius + 1.0).ceil()).min((img.height() - 1) as f32) as u32;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let p = Point::new(x as f32 + 0.5, y as f32 + 0.5);
            if p.distance(center) <= radius {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let len2 = abx * abx + aby * aby;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * abx + (p.y - a.y) * aby) / len2).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * abx, a.y + t * aby))
}
