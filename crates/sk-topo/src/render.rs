use sk_core::{BLACK, BLUE, BinaryMask, FOREGROUND, Image, RED, Rgba, WHITE};

use crate::Features;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerStyle {
    /// Disk membership is `dx^2 + dy^2 <= radius^2`.
    pub radius: usize,
    pub background: Rgba,
    pub skeleton: Rgba,
    pub endpoint: Rgba,
    pub branch: Rgba,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            radius: 3,
            background: WHITE,
            skeleton: BLACK,
            endpoint: RED,
            branch: BLUE,
        }
    }
}

pub fn render_skeleton(skeleton: &BinaryMask, style: &MarkerStyle) -> Image<Rgba> {
    let (fg, bg) = (style.skeleton, style.background);
    skeleton
        .as_image()
        .map(|v| if v == FOREGROUND { fg } else { bg })
}

/// Skeleton raster with endpoint disks drawn first, then branch disks, so a
/// branch marker wins where the two overlap.
pub fn render_annotated(
    skeleton: &BinaryMask,
    features: &Features,
    style: &MarkerStyle,
) -> Image<Rgba> {
    let mut out = render_skeleton(skeleton, style);
    for &(x, y) in &features.endpoints {
        draw_disk(&mut out, x, y, style.radius, style.endpoint);
    }
    for &(x, y) in &features.branches {
        draw_disk(&mut out, x, y, style.radius, style.branch);
    }
    out
}

/// Filled disk clipped to the image bounds. The radius is clamped to the
/// largest distance any pixel can have from the center.
pub fn draw_disk(img: &mut Image<Rgba>, cx: usize, cy: usize, radius: usize, color: Rgba) {
    let (w, h) = img.dimensions();
    if w == 0 || h == 0 {
        return;
    }
    let r = radius.min(cx.max(w).saturating_add(cy.max(h)));
    let r2 = (r as u128).pow(2);

    for y in cy.saturating_sub(r)..=cy.saturating_add(r).min(h - 1) {
        for x in cx.saturating_sub(r)..=cx.saturating_add(r).min(w - 1) {
            let dx = x.abs_diff(cx) as u128;
            let dy = y.abs_diff(cy) as u128;
            if (dx * dx).saturating_add(dy * dy) > r2 {
                continue;
            }
            if let Some(px) = img.get_mut(x, y) {
                *px = color;
            }
        }
    }
}
