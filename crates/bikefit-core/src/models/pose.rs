// ABOUTME: Pose landmark data structures produced by an external pose detector
// ABOUTME: Defines Landmark, PoseFrame completeness rules, and the PoseSequence capture
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::pose::{DEFAULT_FPS, MIN_LANDMARK_VISIBILITY};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Single body landmark observed by the pose source
///
/// Coordinates are normalized to the frame: `x` grows to the right and `y`
/// grows downward. `z` is a relative depth estimate and is not used by any
/// angle computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Landmark identifier, e.g. `left_knee`
    pub name: String,
    /// Normalized horizontal position (0 = left edge, 1 = right edge)
    pub x: f64,
    /// Normalized vertical position (0 = top edge, 1 = bottom edge)
    pub y: f64,
    /// Depth estimate
    #[serde(default)]
    pub z: f64,
    /// Detection confidence in `[0, 1]`
    pub visibility: f64,
}

impl Landmark {
    /// Create a landmark
    #[must_use]
    pub fn new(name: impl Into<String>, x: f64, y: f64, z: f64, visibility: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            z,
            visibility,
        }
    }

    /// Whether the detector is confident enough in this landmark
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility > MIN_LANDMARK_VISIBILITY
    }
}

/// Side of the body facing the camera
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodySide {
    /// Rider's left side
    #[default]
    Left,
    /// Rider's right side
    Right,
}

impl BodySide {
    /// Landmark name prefix for this side
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for BodySide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Joints the cycling analysis needs from one side of the body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Joint {
    /// Hip
    Hip,
    /// Knee
    Knee,
    /// Ankle
    Ankle,
    /// Shoulder
    Shoulder,
    /// Elbow
    Elbow,
    /// Wrist
    Wrist,
    /// Heel
    Heel,
    /// Tip of the foot (toe)
    FootIndex,
}

impl Joint {
    /// Joints that must all be visible for a frame to be complete
    pub const REQUIRED: [Self; 8] = [
        Self::Hip,
        Self::Knee,
        Self::Ankle,
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::Heel,
        Self::FootIndex,
    ];

    /// Joint name without the side prefix
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Hip => "hip",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Heel => "heel",
            Self::FootIndex => "foot_index",
        }
    }

    /// Landmark key on the given side, e.g. `left_foot_index`
    #[must_use]
    pub fn landmark_name(&self, side: BodySide) -> String {
        format!("{}_{}", side.prefix(), self.as_str())
    }
}

/// All landmarks detected in a single video frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    /// Index of the frame in the source video
    pub frame_number: u64,
    /// Presentation timestamp in milliseconds
    pub timestamp_ms: f64,
    /// Landmarks keyed by name; serialized as a list of landmark records
    #[serde(with = "landmark_list")]
    pub landmarks: HashMap<String, Landmark>,
}

impl PoseFrame {
    /// Create an empty frame
    #[must_use]
    pub fn new(frame_number: u64, timestamp_ms: f64) -> Self {
        Self {
            frame_number,
            timestamp_ms,
            landmarks: HashMap::new(),
        }
    }

    /// Build a frame from landmark records, keyed by their names
    #[must_use]
    pub fn from_landmarks(
        frame_number: u64,
        timestamp_ms: f64,
        landmarks: impl IntoIterator<Item = Landmark>,
    ) -> Self {
        Self {
            frame_number,
            timestamp_ms,
            landmarks: landmarks
                .into_iter()
                .map(|lm| (lm.name.clone(), lm))
                .collect(),
        }
    }

    /// Look up a landmark by its full name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Landmark> {
        self.landmarks.get(name)
    }

    /// Look up a joint on one side of the body
    #[must_use]
    pub fn joint(&self, joint: Joint, side: BodySide) -> Option<&Landmark> {
        self.landmarks.get(&joint.landmark_name(side))
    }

    /// Whether every required left-side landmark is present and visible
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete_for(BodySide::Left)
    }

    /// Whether every required landmark on `side` is present and visible
    #[must_use]
    pub fn is_complete_for(&self, side: BodySide) -> bool {
        Joint::REQUIRED
            .iter()
            .all(|joint| self.joint(*joint, side).is_some_and(Landmark::is_visible))
    }
}

/// Ordered sequence of pose frames extracted from one capture
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseSequence {
    /// Frames in capture order
    #[serde(default)]
    pub frames: Vec<PoseFrame>,
    /// Source frame rate
    #[serde(default = "default_fps")]
    pub fps: f64,
    /// Number of frames in the source video (sampled or not)
    #[serde(default)]
    pub total_frames: u64,
    /// Source width in pixels
    #[serde(default)]
    pub video_width: u32,
    /// Source height in pixels
    #[serde(default)]
    pub video_height: u32,
}

const fn default_fps() -> f64 {
    DEFAULT_FPS
}

impl Default for PoseSequence {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            fps: DEFAULT_FPS,
            total_frames: 0,
            video_width: 0,
            video_height: 0,
        }
    }
}

impl PoseSequence {
    /// Create an empty sequence for a source of the given shape
    #[must_use]
    pub fn new(fps: f64, total_frames: u64, video_width: u32, video_height: u32) -> Self {
        Self {
            frames: Vec::new(),
            fps,
            total_frames,
            video_width,
            video_height,
        }
    }

    /// Append a frame captured after all existing ones
    pub fn add_frame(&mut self, frame: PoseFrame) {
        self.frames.push(frame);
    }

    /// Source duration in seconds, 0 when the frame rate is unknown
    #[must_use]
    pub fn duration_sec(&self) -> f64 {
        if self.fps > 0.0 {
            self.total_frames as f64 / self.fps
        } else {
            0.0
        }
    }

    /// Frames with every required left-side landmark visible
    #[must_use]
    pub fn valid_frames(&self) -> Vec<&PoseFrame> {
        self.valid_frames_for(BodySide::Left)
    }

    /// Frames with every required landmark on `side` visible
    #[must_use]
    pub fn valid_frames_for(&self, side: BodySide) -> Vec<&PoseFrame> {
        self.frames
            .iter()
            .filter(|frame| frame.is_complete_for(side))
            .collect()
    }
}

/// Serde adapter: landmark map <-> list of named landmark records
mod landmark_list {
    use super::Landmark;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::HashMap;

    pub fn serialize<S>(map: &HashMap<String, Landmark>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut records: Vec<&Landmark> = map.values().collect();
        records.sort_by(|a, b| a.name.cmp(&b.name));
        records.serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<HashMap<String, Landmark>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let records = Vec::<Landmark>::deserialize(deserializer)?;
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            let name = record.name.clone();
            if map.insert(name.clone(), record).is_some() {
                return Err(D::Error::custom(format!("duplicate landmark '{name}'")));
            }
        }
        Ok(map)
    }
}
