use image::{Rgba, RgbaImage};

use crate::geometry::{ACCENT_COLOR, BAR_HEIGHTS, CARD_COLOR, Layout, bar_color};

/// Render the MRRBar app icon (dark rounded card, four green bars growing
/// left to right, upward tick over the tallest bar) at `size` x `size`.
///
/// Pure function of `size`: the same input always yields a pixel-identical
/// image. Pixels outside the card stay fully transparent.
pub fn generate_icon(size: u32) -> RgbaImage {
    let mut img = RgbaImage::from_pixel(size, size, Rgba([0, 0, 0, 0]));
    let layout = Layout::new(size);

    fill_rounded_rect(
        &mut img,
        0.0,
        0.0,
        layout.size,
        layout.size,
        layout.card_radius,
        Rgba(CARD_COLOR),
    );

    for (i, &h) in BAR_HEIGHTS.iter().enumerate() {
        let bar = layout.bar(i);
        fill_rounded_rect(
            &mut img,
            bar.x0,
            bar.y0,
            bar.x1,
            bar.y1,
            bar.radius,
            Rgba(bar_color(h)),
        );
    }

    // Drawn at every size, even 16 px where it covers at most a pixel or two.
    let acc = layout.accent();
    fill_triangle(&mut img, acc.apex, acc.left, acc.right, Rgba(ACCENT_COLOR));

    img
}

/// Fill an axis-aligned rounded rectangle, overwriting covered pixels.
/// Coverage is a hard test at pixel centers; `radius` is clamped to half the
/// shorter side.
pub fn fill_rounded_rect(
    img: &mut RgbaImage,
    x0: f32,
    y0: f32,
    x1: f32,
    y1: f32,
    radius: f32,
    color: Rgba<u8>,
) {
    let r = radius.min((x1 - x0) / 2.0).min((y1 - y0) / 2.0);
    let (w, h) = img.dimensions();
    let px0 = x0.floor().max(0.0) as u32;
    let py0 = y0.floor().max(0.0) as u32;
    let px1 = (x1.ceil() as u32).min(w);
    let py1 = (y1.ceil() as u32).min(h);
    for y in py0..py1 {
        for x in px0..px1 {
            if in_rounded_rect(x as f32 + 0.5, y as f32 + 0.5, x0, y0, x1, y1, r) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

fn in_rounded_rect(fx: f32, fy: f32, x0: f32, y0: f32, x1: f32, y1: f32, r: f32) -> bool {
    if fx < x0 || fx > x1 || fy < y0 || fy > y1 {
        return false;
    }
    // Distance past the corner-arc centers; zero along the straight edges.
    let dx = (x0 + r - fx).max(fx - (x1 - r)).max(0.0);
    let dy = (y0 + r - fy).max(fy - (y1 - r)).max(0.0);
    dx * dx + dy * dy <= r * r
}

/// Fill a triangle, overwriting covered pixels.
pub fn fill_triangle(
    img: &mut RgbaImage,
    p1: (f32, f32),
    p2: (f32, f32),
    p3: (f32, f32),
    color: Rgba<u8>,
) {
    let (w, h) = img.dimensions();
    let px0 = p1.0.min(p2.0).min(p3.0).floor().max(0.0) as u32;
    let py0 = p1.1.min(p2.1).min(p3.1).floor().max(0.0) as u32;
    let px1 = (p1.0.max(p2.0).max(p3.0).ceil() as u32).min(w);
    let py1 = (p1.1.max(p2.1).max(p3.1).ceil() as u32).min(h);
    for y in py0..py1 {
        for x in px0..px1 {
            if point_in_triangle(x as f32 + 0.5, y as f32 + 0.5, p1, p2, p3) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

// Sign-of-cross-product inside test; winding does not matter.
fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}
