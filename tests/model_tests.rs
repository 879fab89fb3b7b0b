// Host-side tests for data loading, colors, tiers, config overrides and the
// explanation provider.

#![allow(dead_code)]
#[path = "support/core.rs"]
mod core;

use crate::core::*;
use std::collections::HashSet;

const PAGE_DATA: &str = r##"{
  "institutions": [
    {
      "name": "NLSIU Bangalore",
      "shortName": "NLSIU",
      "rankCutoff": 99,
      "seatCount": 120,
      "difficultyTier": "High",
      "color": "#ffd700",
      "position": [0.0, 200.0, 0.0],
      "scale": 1.5
    },
    {
      "name": "CNLU Patna",
      "rankCutoff": 912,
      "difficultyTier": "Low",
      "color": "#06B6D4",
      "position": [0.0, 80.0, 140.0]
    }
  ],
  "prediction": {
    "currentRank": 1247,
    "predictedRankEstimate": 756,
    "confidencePercent": 78,
    "daysToTarget": 45
  }
}"##;

#[test]
fn page_data_parses_with_defaults() {
    let data = RankData::from_json(PAGE_DATA).expect("valid data");
    assert_eq!(data.institutions.len(), 2);
    let first = &data.institutions[0];
    assert_eq!(first.label(), "NLSIU");
    assert_eq!(first.color, Rgb::new(0xff, 0xd7, 0x00));
    assert_eq!(first.scale, 1.5);

    let second = &data.institutions[1];
    assert_eq!(second.scale, 1.0);
    assert_eq!(second.seat_count, 0);
    assert_eq!(second.label(), "CNLU Patna");
    assert_eq!(second.color, Rgb::new(0x06, 0xb6, 0xd4));
    assert_eq!(second.position.z, 140.0);

    assert_eq!(data.prediction.predicted_rank, 756);
    assert_eq!(data.prediction.current_rank, 1247);
}

#[test]
fn bad_color_rejects_the_whole_data_set() {
    let text = PAGE_DATA.replace("#ffd700", "gold");
    let err = RankData::from_json(&text).unwrap_err();
    assert!(matches!(err, DataError::Json(_)));
    assert!(err.to_string().contains("gold"));
}

#[test]
fn empty_institution_list_is_an_error() {
    let text = r#"{"institutions": [], "prediction": {"currentRank": 1, "predictedRank": 2}}"#;
    assert!(matches!(RankData::from_json(text), Err(DataError::Empty)));
}

#[test]
fn hex_colors_parse_and_display() {
    let c = Rgb::from_hex("#3b82f6").unwrap();
    assert_eq!(c, Rgb::new(0x3b, 0x82, 0xf6));
    assert_eq!(c.to_string(), "#3b82f6");
    assert_eq!(
        Rgb::from_hex("3b82f6"),
        Err(ColorParseError::MissingHash("3b82f6".into()))
    );
    assert_eq!(
        Rgb::from_hex("#3b82"),
        Err(ColorParseError::BadLength("#3b82".into()))
    );
    assert_eq!(
        Rgb::from_hex("#3b82zz"),
        Err(ColorParseError::BadDigit("#3b82zz".into()))
    );
    assert!(Rgb::from_hex("#ééé").is_err());
}

#[test]
fn signed_channels_are_not_hex_digits() {
    assert_eq!(
        Rgb::from_hex("#+f+f+f"),
        Err(ColorParseError::BadDigit("#+f+f+f".into()))
    );
    assert_eq!(
        Rgb::from_hex("#-1ffff"),
        Err(ColorParseError::BadDigit("#-1ffff".into()))
    );
}

#[test]
fn css_and_scaling() {
    let c = Rgb::new(200, 100, 0);
    assert_eq!(c.css(0.5), "rgba(200, 100, 0, 0.5)");
    assert_eq!(c.css(3.0), "rgba(200, 100, 0, 1)");
    assert_eq!(c.scaled(1.5), Rgb::new(255, 150, 0));
    assert_eq!(c.scaled(0.5), Rgb::new(100, 50, 0));
}

#[test]
fn tiers_have_distinct_badges() {
    let tiers = [
        DifficultyTier::High,
        DifficultyTier::Medium,
        DifficultyTier::Low,
    ];
    let colors: HashSet<_> = tiers.iter().map(|t| t.badge_color().to_string()).collect();
    let labels: HashSet<_> = tiers.iter().map(|t| t.label()).collect();
    assert_eq!(colors.len(), 3);
    assert_eq!(labels.len(), 3);
}

#[test]
fn builtin_data_is_consistent() {
    let data = RankData::builtin();
    assert_eq!(data.institutions.len(), 10);
    let names: HashSet<_> = data.institutions.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names.len(), 10);
    // better cutoffs stand taller and are drawn larger
    for pair in data.institutions.windows(2) {
        assert!(pair[0].rank_cutoff < pair[1].rank_cutoff);
        assert!(pair[0].scale >= pair[1].scale);
        assert!(pair[0].position.y >= pair[1].position.y);
    }
    let highlighted = data
        .institutions
        .iter()
        .filter(|i| {
            projection::in_target_range(
                i.rank_cutoff,
                data.prediction.predicted_rank,
                constants::HIGHLIGHT_TOLERANCE,
            )
        })
        .count();
    assert!(highlighted > 0);
}

#[test]
fn config_defaults_match_constants() {
    let cfg = RendererConfig::default();
    assert_eq!(cfg.focal_distance, 300.0);
    assert_eq!(cfg.parallax_factor, 0.1);
    assert_eq!(cfg.highlight_tolerance, 100);
    assert_eq!(cfg.tick_interval().as_millis(), 50);
    assert_eq!(cfg.rotation_step, 0.02);
    assert_eq!(cfg.grid_divisions, 10);
}

#[test]
fn config_overrides_merge_with_defaults() {
    let cfg = RendererConfig::from_json(r#"{"parallaxFactor": 0.25, "highlightTolerance": 50}"#)
        .unwrap();
    assert_eq!(cfg.parallax_factor, 0.25);
    assert_eq!(cfg.highlight_tolerance, 50);
    assert_eq!(cfg.focal_distance, 300.0);
    assert_eq!(cfg.tick_interval_ms, 50);
}

#[test]
fn config_sanitizes_values_that_break_rendering() {
    let cfg = RendererConfig::from_json(
        r#"{"focalDistance": -10, "baseTowerWidth": 0, "tickIntervalMs": 0, "gridDivisions": 0}"#,
    )
    .unwrap();
    let d = RendererConfig::default();
    assert_eq!(cfg.focal_distance, d.focal_distance);
    assert_eq!(cfg.base_tower_width, d.base_tower_width);
    assert_eq!(cfg.tick_interval_ms, d.tick_interval_ms);
    assert_eq!(cfg.grid_divisions, d.grid_divisions);

    let nan = RendererConfig {
        parallax_factor: f64::NAN,
        rotation_step: f64::INFINITY,
        ..RendererConfig::default()
    }
    .sanitized();
    assert_eq!(nan.parallax_factor, d.parallax_factor);
    assert_eq!(nan.rotation_step, d.rotation_step);
}

#[test]
fn config_rejects_malformed_json() {
    assert!(RendererConfig::from_json("{not json").is_err());
    assert!(RendererConfig::from_json(r#"{"focalDistance": "far"}"#).is_err());
}

#[test]
fn mock_provider_explains_known_institutions() {
    let provider = MockExplanationProvider::with_builtin_notes();
    let prediction = default_prediction();
    for inst in default_institutions() {
        let ex = provider.explain(&inst, &prediction).expect("note exists");
        assert!(!ex.detail.is_empty());
        assert!(ex.headline.contains(inst.label()));
    }
}

#[test]
fn mock_provider_headline_reflects_rank_gap() {
    let provider = MockExplanationProvider::with_builtin_notes();
    let prediction = default_prediction();
    let institutions = default_institutions();
    let top = &institutions[0];
    let ex = provider.explain(top, &prediction).unwrap();
    assert!(ex.headline.starts_with("657 more ranks"));

    let reachable = institutions.iter().find(|i| i.rank_cutoff == 845).unwrap();
    let ex = provider.explain(reachable, &prediction).unwrap();
    assert!(ex.headline.contains("inside the #845 cutoff"));
}

#[test]
fn mock_provider_reports_unknown_institution() {
    let provider = MockExplanationProvider::new().with_note("Somewhere", "note");
    let inst = &default_institutions()[0];
    assert_eq!(
        provider.explain(inst, &default_prediction()),
        Err(ExplainError::NotFound("NLSIU Bangalore".into()))
    );
}
