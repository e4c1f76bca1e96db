//! 2D fills in pixel coordinates. A pixel is covered when its centre is.

use bevy::math::Vec2;

use super::{grey, Canvas};

/// Even-odd scanline fill of an arbitrary closed outline.
pub fn fill_polygon(canvas: &mut Canvas, outline: &[Vec2], shade: u8) {
    if outline.len() < 3 {
        return;
    }
    let (min_y, max_y) = outline
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let first_row = min_y.floor().max(0.0) as u32;
    let last_row = max_y.ceil().min(canvas.height() as f32) as u32;

    let mut crossings = Vec::new();
    for row in first_row..last_row {
        let yc = row as f32 + 0.5;
        crossings.clear();
        for (i, a) in outline.iter().enumerate() {
            let b = outline[(i + 1) % outline.len()];
            if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                crossings.push(a.x + (yc - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }
        crossings.sort_by(f32::total_cmp);
        for span in crossings.chunks_exact(2) {
            fill_span(canvas, row, span[0], span[1], shade);
        }
    }
}

fn fill_span(canvas: &mut Canvas, row: u32, from: f32, to: f32, shade: u8) {
    let start = (from - 0.5).ceil().max(0.0) as u32;
    let end = (to - 0.5).ceil().min(canvas.width() as f32).max(0.0) as u32;
    for x in start..end {
        canvas.set(x, row, grey(shade));
    }
}

pub fn fill_rect(canvas: &mut Canvas, origin: Vec2, size: Vec2, shade: u8) {
    let corner = origin + size;
    fill_polygon(
        canvas,
        &[
            origin,
            Vec2::new(corner.x, origin.y),
            corner,
            Vec2::new(origin.x, corner.y),
        ],
        shade,
    );
}

pub fn fill_disc(canvas: &mut Canvas, centre: Vec2, radius: f32, shade: u8) {
    if radius <= 0.0 {
        return;
    }
    let first_row = (centre.y - radius).floor().max(0.0) as u32;
    let last_row = (centre.y + radius).ceil().min(canvas.height() as f32) as u32;
    for row in first_row..last_row {
        let dy = row as f32 + 0.5 - centre.y;
        let half = radius * radius - dy * dy;
        if half <= 0.0 {
            continue;
        }
        let half = half.sqrt();
        fill_span(canvas, row, centre.x - half, centre.x + half, shade);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_covers_exactly_its_pixels() {
        let mut canvas = Canvas::new(8, 8, 255);
        fill_rect(&mut canvas, Vec2::new(2.0, 1.0), Vec2::new(3.0, 2.0), 0);
        let dark: Vec<(u32, u32)> = (0..8)
            .flat_map(|y| (0..8).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.shade(x, y) == Some(0))
            .collect();
        assert_eq!(dark.len(), 6);
        assert!(dark.contains(&(2, 1)) && dark.contains(&(4, 2)));
        assert!(!dark.contains(&(5, 1)));
    }

    #[test]
    fn even_odd_leaves_holes() {
        // Outer square traced, then the inner square traced back.
        let outline = [
            Vec2::new(0.0, 0.0),
            Vec2::new(8.0, 0.0),
            Vec2::new(8.0, 8.0),
            Vec2::new(0.0, 8.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(2.0, 6.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(2.0, 2.0),
        ];
        let mut canvas = Canvas::new(8, 8, 255);
        fill_polygon(&mut canvas, &outline, 0);
        assert_eq!(canvas.shade(0, 4), Some(0));
        assert_eq!(canvas.shade(4, 4), Some(255));
    }

    #[test]
    fn disc_is_round_and_clipped() {
        let mut canvas = Canvas::new(10, 10, 0);
        fill_disc(&mut canvas, Vec2::new(5.0, 5.0), 3.0, 255);
        assert_eq!(canvas.shade(5, 5), Some(255));
        assert_eq!(canvas.shade(2, 2), Some(0));
        fill_disc(&mut canvas, Vec2::new(-2.0, 5.0), 4.0, 128);
        assert_eq!(canvas.shade(0, 5), Some(128));
    }

    #[test]
    fn degenerate_outlines_draw_nothing() {
        let mut canvas = Canvas::new(4, 4, 9);
        fill_polygon(&mut canvas, &[Vec2::ZERO, Vec2::ONE], 0);
        fill_disc(&mut canvas, Vec2::ONE, 0.0, 0);
        assert!(canvas.pixels().chunks_exact(4).all(|px| px[0] == 9));
    }
}
