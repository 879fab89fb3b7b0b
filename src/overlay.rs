use crate::constants::{DETAILS_ID, STATUS_ID};
use crate::core::{ExplanationProvider, Institution, Prediction};
use web_sys as web;

const PANEL_STYLE: &str = "color: #cfe7ff; font: 13px system-ui; background: rgba(10, 14, 24, 0.8); padding: 8px 12px; border-radius: 6px; border: 1px solid rgba(80, 110, 150, 0.35);";

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Status line: rotation state plus the non-banner prediction fields.
pub fn update_status(document: &web::Document, rotating: bool, prediction: &Prediction) {
    if let Some(el) = document.get_element_by_id(STATUS_ID) {
        let state = if rotating { "Rotating" } else { "Paused" };
        el.set_inner_html(&format!(
            "<div style='{}'>{} • Confidence: {}% • {} days to target</div>",
            PANEL_STYLE, state, prediction.confidence_percent, prediction.days_to_target
        ));
    }
}

pub fn show_details(
    document: &web::Document,
    institution: &Institution,
    prediction: &Prediction,
    provider: &dyn ExplanationProvider,
) {
    let Some(el) = document.get_element_by_id(DETAILS_ID) else {
        return;
    };
    let tier = institution.difficulty_tier;
    let explanation = match provider.explain(institution, prediction) {
        Ok(ex) => format!(
            "<div><b>{}</b></div><div>{}</div>",
            escape(&ex.headline),
            escape(&ex.detail)
        ),
        Err(e) => {
            log::warn!("[explain] {e}");
            "<div>No notes available for this college yet.</div>".to_string()
        }
    };
    el.set_inner_html(&format!(
        "<div style='{}'><div><b>{}</b> <span style='background: {}; color: #0f172a; padding: 0 6px; border-radius: 4px;'>{}</span></div>\
         <div>Cutoff: #{} • Seats: {}</div>{}</div>",
        PANEL_STYLE,
        escape(&institution.name),
        tier.badge_color(),
        tier.label(),
        institution.rank_cutoff,
        institution.seat_count,
        explanation
    ));
    _ = el.set_attribute("style", "");
}

pub fn hide_details(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(DETAILS_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}
