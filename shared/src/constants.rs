pub const DEGREES_PER_TURN: f64 = 360.0;

// Raw draw range, inclusive on both ends
pub const SAMPLE_MIN_DEGREES: u32 = 1;
pub const SAMPLE_MAX_DEGREES: u32 = 360;

pub const DEFAULT_SPIN_DURATION_MS: u32 = 3000;
pub const DEFAULT_MIN_SPIN_TURNS: u32 = 4;

pub const MAX_SPIN_DURATION_MS: u32 = 60_000;
pub const MAX_SPIN_TURNS: u32 = 64;

// cubic-bezier(0.4, 0, 0.2, 1)
pub const DEFAULT_EASING_X1: f64 = 0.4;
pub const DEFAULT_EASING_Y1: f64 = 0.0;
pub const DEFAULT_EASING_X2: f64 = 0.2;
pub const DEFAULT_EASING_Y2: f64 = 1.0;

pub const SEGMENT_SATURATION: u32 = 70;
pub const SEGMENT_LIGHTNESS: u32 = 50;

pub const SPIN_LABEL: &str = "Spin";
pub const SPINNING_LABEL: &str = "Spinning...";
pub const RESULT_PREFIX: &str = "You won: ";

pub const WHEEL_SETTLED_EVENT: &str = "wheelSettled";
pub const WHEEL_CONFIG_STORAGE_KEY: &str = "wheel_config";
pub const WHEEL_SEGMENTS_STORAGE_KEY: &str = "wheel_segments";

pub const EMPTY_SEGMENTS_ERROR: &str = "The wheel needs at least one segment";
pub const BLANK_LABEL_ERROR: &str = "Segment labels must not be blank";
