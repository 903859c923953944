// src/draw/glyph_draw.rs
//
// Geometry of one node's line-and-circle glyphs.
// The first half of a node's scale grows the circles, the second half
// extends each line in turn; the second quarter of each line's window
// rotates it away from the axis.

use super::{LineCap, Paint, Surface};
use crate::config::StyleConfig;

/// The part of `scale` that falls in window `i` of `n`, renormalized to 0..1.
pub fn divide_scale(scale: f32, i: usize, n: usize) -> f32 {
    let n_inv = 1.0 / n as f32;
    let over = (scale - i as f32 * n_inv).max(0.0);
    over.min(n_inv) * n as f32
}

// Odd sub-glyphs stay on the axis
fn rotation_sign(j: usize) -> f32 {
    1.0 - (j % 2) as f32
}

pub fn node_paint(surface: &impl Surface, style: &StyleConfig) -> Paint {
    Paint {
        color: style.fore_color,
        stroke_width: surface.width().min(surface.height()) / style.stroke_factor,
        cap: LineCap::Round,
    }
}

/// Draws node `i` of `node_count` at the given scale. Nodes are spaced
/// evenly along the horizontal center line.
pub fn draw_node<S: Surface>(
    surface: &mut S,
    i: usize,
    scale: f32,
    node_count: usize,
    lines: usize,
    style: &StyleConfig,
) {
    let w = surface.width();
    let h = surface.height();
    let gap = w / (node_count + 1) as f32;
    let size = gap / style.size_factor;
    let sc1 = divide_scale(scale, 0, 2);
    let sc2 = divide_scale(scale, 1, 2);
    let paint = node_paint(&*surface, style);

    surface.save();
    surface.translate(gap * (i + 1) as f32, h / 2.0);
    for j in 0..lines {
        draw_rotate_line_circle(surface, j, sc1, sc2, size, lines, style, &paint);
    }
    surface.restore();
}

#[allow(clippy::too_many_arguments)]
fn draw_rotate_line_circle<S: Surface>(
    surface: &mut S,
    j: usize,
    sc1: f32,
    sc2: f32,
    size: f32,
    lines: usize,
    style: &StyleConfig,
    paint: &Paint,
) {
    let sci1 = divide_scale(sc2, j, lines);
    let sci11 = divide_scale(sci1, 0, 2);
    let sci12 = divide_scale(sci1, 1, 2);
    let x = size * sci11;
    let r = (size / style.radius_factor) * sc1;

    surface.save();
    surface.rotate(style.rotation_degrees * sci12 * rotation_sign(j));
    surface.draw_line(0.0, 0.0, (x - r).max(0.0), 0.0, paint);
    surface.save();
    surface.translate(x, 0.0);
    surface.draw_circle(0.0, 0.0, r, paint);
    surface.restore();
    surface.restore();
}
