// Domain data for the rank-tower scene.
//
// Institutions and the user's prediction are plain values fixed at startup.
// They come either from the built-in data set below or from JSON embedded in
// the page; the renderer never mutates them.

use glam::DVec3;
use serde::Deserialize;
use std::fmt;

/// 8-bit RGB color, written in data files as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("color `{0}` must start with '#'")]
    MissingHash(String),
    #[error("color `{0}` must have exactly six hex digits")]
    BadLength(String),
    #[error("color `{0}` contains a non-hex digit")]
    BadDigit(String),
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(text: &str) -> Result<Self, ColorParseError> {
        let digits = text
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(text.to_string()))?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(ColorParseError::BadLength(text.to_string()));
        }
        // from_str_radix would accept a leading '+'
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::BadDigit(text.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ColorParseError::BadDigit(text.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    /// CSS `rgba(...)` string for canvas styles.
    pub fn css(&self, alpha: f64) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }

    /// Multiply each channel by `factor`, saturating at 255.
    pub fn scaled(&self, factor: f64) -> Self {
        let f = |c: u8| (c as f64 * factor).round().clamp(0.0, 255.0) as u8;
        Self::new(f(self.r), f(self.g), f(self.b))
    }
}

impl TryFrom<String> for Rgb {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Rgb::from_hex(&value)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
pub enum DifficultyTier {
    High,
    Medium,
    Low,
}

impl DifficultyTier {
    pub fn label(self) -> &'static str {
        match self {
            DifficultyTier::High => "High",
            DifficultyTier::Medium => "Medium",
            DifficultyTier::Low => "Low",
        }
    }

    pub fn badge_color(self) -> Rgb {
        match self {
            DifficultyTier::High => Rgb::new(0xef, 0x44, 0x44),
            DifficultyTier::Medium => Rgb::new(0xf5, 0x9e, 0x0b),
            DifficultyTier::Low => Rgb::new(0x22, 0xc5, 0x5e),
        }
    }
}

fn default_scale() -> f64 {
    1.0
}

/// One tower in the scene.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub name: String,
    #[serde(default)]
    pub short_name: Option<String>,
    pub rank_cutoff: u32,
    #[serde(default)]
    pub seat_count: u32,
    pub difficulty_tier: DifficultyTier,
    pub color: Rgb,
    /// `y` is the vertical (rank) axis; `x`/`z` are rotated about it.
    pub position: DVec3,
    #[serde(default = "default_scale")]
    pub scale: f64,
}

impl Institution {
    pub fn label(&self) -> &str {
        self.short_name.as_deref().unwrap_or(&self.name)
    }

    /// Scale used for layout; bad values fall back to 1.
    pub fn effective_scale(&self) -> f64 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale
        } else {
            1.0
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    pub current_rank: u32,
    #[serde(alias = "predictedRankEstimate")]
    pub predicted_rank: u32,
    #[serde(default)]
    pub confidence_percent: u8,
    #[serde(default)]
    pub days_to_target: u32,
}

/// Page-supplied replacement for the built-in data set.
#[derive(Clone, Debug, Deserialize)]
pub struct RankData {
    pub institutions: Vec<Institution>,
    pub prediction: Prediction,
}

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("rank data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("rank data lists no institutions")]
    Empty,
}

impl RankData {
    pub fn from_json(text: &str) -> Result<Self, DataError> {
        let data: RankData = serde_json::from_str(text)?;
        if data.institutions.is_empty() {
            return Err(DataError::Empty);
        }
        Ok(data)
    }

    pub fn builtin() -> Self {
        Self {
            institutions: default_institutions(),
            prediction: default_prediction(),
        }
    }
}

fn nlu(
    name: &str,
    short_name: &str,
    rank_cutoff: u32,
    seat_count: u32,
    difficulty_tier: DifficultyTier,
    color: Rgb,
    position: [f64; 3],
    scale: f64,
) -> Institution {
    Institution {
        name: name.to_string(),
        short_name: Some(short_name.to_string()),
        rank_cutoff,
        seat_count,
        difficulty_tier,
        color,
        position: DVec3::from_array(position),
        scale,
    }
}

pub fn default_institutions() -> Vec<Institution> {
    use DifficultyTier::*;
    vec![
        nlu("NLSIU Bangalore", "NLSIU", 99, 120, High, Rgb::new(0xff, 0xd7, 0x00), [0.0, 200.0, 0.0], 1.5),
        nlu("NALSAR Hyderabad", "NALSAR", 178, 132, High, Rgb::new(0xc0, 0xc0, 0xc0), [-80.0, 180.0, 40.0], 1.4),
        nlu("WBNUJS Kolkata", "NUJS", 303, 127, High, Rgb::new(0xcd, 0x7f, 0x32), [80.0, 160.0, 40.0], 1.3),
        nlu("NLU Jodhpur", "NLUJ", 456, 120, High, Rgb::new(0x3b, 0x82, 0xf6), [-120.0, 140.0, -40.0], 1.2),
        nlu("GNLU Gandhinagar", "GNLU", 521, 180, Medium, Rgb::new(0x8b, 0x5c, 0xf6), [120.0, 130.0, -40.0], 1.15),
        nlu("NLIU Bhopal", "NLIU", 612, 140, Medium, Rgb::new(0x10, 0xb9, 0x81), [-40.0, 120.0, -100.0], 1.1),
        nlu("HNLU Raipur", "HNLU", 698, 187, Medium, Rgb::new(0xf5, 0x9e, 0x0b), [40.0, 110.0, -100.0], 1.05),
        nlu("RMLNLU Lucknow", "RMLNLU", 756, 176, Medium, Rgb::new(0xef, 0x44, 0x44), [-160.0, 100.0, 80.0], 1.0),
        nlu("NUSRL Ranchi", "NUSRL", 845, 140, Low, Rgb::new(0xec, 0x48, 0x99), [160.0, 90.0, 80.0], 0.95),
        nlu("CNLU Patna", "CNLU", 912, 160, Low, Rgb::new(0x06, 0xb6, 0xd4), [0.0, 80.0, 140.0], 0.9),
    ]
}

pub fn default_prediction() -> Prediction {
    Prediction {
        current_rank: 1247,
        predicted_rank: 756,
        confidence_percent: 78,
        days_to_target: 45,
    }
}
