// Painting a laid-out scene onto a 2D surface.
//
// `Surface` is the small slice of the canvas 2D API the painter needs. The
// browser implements it over `CanvasRenderingContext2d`; tests record calls.

use crate::constants::*;
use crate::core::{
    layout_scene, BannerKind, Institution, Rect, SceneInput, SceneLayout, TowerLayout, Viewport,
};
use glam::DVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

pub trait Surface {
    fn clear(&mut self, viewport: Viewport);
    fn fill_rect(&mut self, rect: Rect, style: &str);
    fn stroke_rect(&mut self, rect: Rect, style: &str, line_width: f64);
    fn fill_radial_gradient(&mut self, rect: Rect, center: DVec2, radius: f64, stops: &[(f64, &str)]);
    /// Vertical gradient over `rect`, stop 0 at the top edge.
    fn fill_vertical_gradient(&mut self, rect: Rect, stops: &[(f64, &str)]);
    fn line(&mut self, from: DVec2, to: DVec2, style: &str, line_width: f64);
    fn fill_circle(&mut self, center: DVec2, radius: f64, style: &str);
    fn set_line_dash(&mut self, segments: &[f64]);
    /// Text is vertically centered on `at.y`.
    fn fill_text(&mut self, text: &str, at: DVec2, font: &str, style: &str, align: TextAlign);
}

/// Lay out and paint one frame. Returns the layout, or `None` when the
/// viewport is empty and nothing was drawn.
pub fn render_frame<S: Surface + ?Sized>(
    surface: &mut S,
    input: &SceneInput<'_>,
    viewport: Viewport,
) -> Option<SceneLayout> {
    let layout = layout_scene(input, viewport)?;
    paint_scene(surface, &layout, input.institutions);
    Some(layout)
}

pub fn paint_scene<S: Surface + ?Sized>(
    surface: &mut S,
    layout: &SceneLayout,
    institutions: &[Institution],
) {
    surface.clear(layout.viewport);
    paint_background(surface, layout);
    for tower in &layout.towers {
        if let Some(inst) = institutions.get(tower.index) {
            paint_tower(surface, tower, inst);
        }
    }
    paint_banners(surface, layout);
}

fn paint_background<S: Surface + ?Sized>(s: &mut S, layout: &SceneLayout) {
    let vp = layout.viewport;
    let full = Rect {
        x: 0.0,
        y: 0.0,
        w: vp.width,
        h: vp.height,
    };
    let radius = vp.width.max(vp.height) * BG_RADIUS_FACTOR;
    s.fill_radial_gradient(full, vp.center(), radius, &[(0.0, BG_INNER), (1.0, BG_OUTER)]);

    let n = layout.grid_divisions.max(1);
    for i in 0..=n {
        let t = i as f64 / n as f64;
        let x = vp.width * t;
        let y = vp.height * t;
        s.line(DVec2::new(x, 0.0), DVec2::new(x, vp.height), GRID_COLOR, 1.0);
        s.line(DVec2::new(0.0, y), DVec2::new(vp.width, y), GRID_COLOR, 1.0);
    }
}

fn paint_tower<S: Surface + ?Sized>(s: &mut S, tower: &TowerLayout, inst: &Institution) {
    let body = tower.body();
    let half_w = tower.width * 0.5;

    // shadow, footprint, body
    s.fill_rect(
        Rect {
            x: body.x + SHADOW_OFFSET,
            y: tower.base.y + BASE_HALF_HEIGHT,
            w: tower.width,
            h: SHADOW_HEIGHT,
        },
        SHADOW_COLOR,
    );
    s.fill_rect(
        Rect {
            x: tower.base.x - half_w - BASE_HALF_HEIGHT,
            y: tower.base.y - BASE_HALF_HEIGHT,
            w: tower.width + 2.0 * BASE_HALF_HEIGHT,
            h: 2.0 * BASE_HALF_HEIGHT,
        },
        &inst.color.css(BASE_ALPHA),
    );
    let top = inst.color.scaled(BODY_TOP_BRIGHTEN).css(1.0);
    let bottom = inst.color.scaled(BODY_BOTTOM_DARKEN).css(1.0);
    s.fill_vertical_gradient(body, &[(0.0, top.as_str()), (1.0, bottom.as_str())]);
    s.stroke_rect(body, &inst.color.css(1.0), BORDER_WIDTH);

    let rank_font = format!("bold {:.0}px system-ui", RANK_FONT_PX * tower.scale);
    s.fill_text(
        &inst.rank_cutoff.to_string(),
        DVec2::new(tower.base.x, body.y + RANK_FONT_PX * tower.scale),
        &rank_font,
        LABEL_COLOR,
        TextAlign::Center,
    );
    let name_font = format!("{:.0}px system-ui", NAME_FONT_PX * tower.scale);
    s.fill_text(
        inst.label(),
        DVec2::new(
            tower.base.x,
            tower.base.y + BASE_HALF_HEIGHT + SHADOW_HEIGHT + NAME_FONT_PX * tower.scale,
        ),
        &name_font,
        NAME_COLOR,
        TextAlign::Center,
    );

    if tower.highlighted {
        s.stroke_rect(tower.highlight_outline(), HIGHLIGHT_COLOR, HIGHLIGHT_WIDTH);
        let badge = tower.badge_center();
        s.fill_circle(badge, crate::core::constants::BADGE_RADIUS, HIGHLIGHT_COLOR);
        s.fill_text("YOU", badge, "bold 9px system-ui", BADGE_TEXT_COLOR, TextAlign::Center);
    }
    if tower.selected {
        s.set_line_dash(&SELECTED_DASH);
        s.stroke_rect(
            tower.highlight_outline().inflate(HIGHLIGHT_WIDTH),
            SELECTED_COLOR,
            BORDER_WIDTH,
        );
        s.set_line_dash(&[]);
    }
}

fn paint_banners<S: Surface + ?Sized>(s: &mut S, layout: &SceneLayout) {
    for banner in &layout.banners {
        let color = match banner.kind {
            BannerKind::CurrentRank => CURRENT_BANNER_COLOR,
            BannerKind::PredictedRank => PREDICTED_BANNER_COLOR,
        };
        s.fill_rect(banner.rect, color);
        s.fill_text(
            &banner.text,
            DVec2::new(
                banner.rect.x + BANNER_TEXT_INSET,
                banner.rect.y + banner.rect.h * 0.5,
            ),
            BANNER_FONT,
            LABEL_COLOR,
            TextAlign::Left,
        );
    }
    if layout.paused {
        let vp = layout.viewport;
        s.fill_text(
            "PAUSED",
            DVec2::new(vp.width - BANNER_TEXT_INSET, layout.banners[0].rect.y + 10.0),
            PAUSED_FONT,
            PAUSED_COLOR,
            TextAlign::Right,
        );
    }
}
