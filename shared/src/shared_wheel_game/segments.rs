use serde::{Deserialize, Serialize};

use crate::constants::{
    BLANK_LABEL_ERROR, DEGREES_PER_TURN, EMPTY_SEGMENTS_ERROR, SEGMENT_LIGHTNESS,
    SEGMENT_SATURATION,
};
use crate::error::WheelError;

/// One slice of the wheel. Identity is positional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub index: usize,
    pub label: String,
}

/// The ordered, non-empty set of segments a wheel is built from.
///
/// Segment `i` covers the arc `[i * 360/n, (i + 1) * 360/n)`; the length
/// never changes once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentList {
    segments: Vec<Segment>,
}

impl SegmentList {
    pub fn new<I, S>(labels: I) -> Result<Self, WheelError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<Segment> = labels
            .into_iter()
            .enumerate()
            .map(|(index, label)| Segment {
                index,
                label: label.into(),
            })
            .collect();

        if segments.is_empty() {
            return Err(WheelError::InvalidConfiguration(
                EMPTY_SEGMENTS_ERROR.to_string(),
            ));
        }

        if let Some(blank) = segments.iter().find(|s| s.label.trim().is_empty()) {
            return Err(WheelError::InvalidConfiguration(format!(
                "{} (segment {})",
                BLANK_LABEL_ERROR, blank.index
            )));
        }

        Ok(Self { segments })
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    // Construction rejects empty lists, kept for clippy's len_without_is_empty
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(|s| s.label.as_str())
    }

    /// Width of every arc in degrees.
    pub fn arc_degrees(&self) -> f64 {
        DEGREES_PER_TURN / self.segments.len() as f64
    }

    /// Same arithmetic as `winning_index`, so drawn boundaries match the draw.
    pub fn arc_start(&self, index: usize) -> f64 {
        DEGREES_PER_TURN * index as f64 / self.segments.len() as f64
    }

    pub fn arc_middle(&self, index: usize) -> f64 {
        self.arc_start(index) + self.arc_degrees() / 2.0
    }

    /// Hue spread evenly around the color wheel, one per segment.
    pub fn hue(&self, index: usize) -> f64 {
        self.arc_start(index)
    }

    pub fn color(&self, index: usize) -> String {
        format!(
            "hsl({}, {}%, {}%)",
            self.hue(index),
            SEGMENT_SATURATION,
            SEGMENT_LIGHTNESS
        )
    }
}

impl<'a> IntoIterator for &'a SegmentList {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

// Serialized as the bare label array the host supplies
impl Serialize for SegmentList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.labels())
    }
}

impl<'de> Deserialize<'de> for SegmentList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let labels = Vec::<String>::deserialize(deserializer)?;
        SegmentList::new(labels).map_err(serde::de::Error::custom)
    }
}
