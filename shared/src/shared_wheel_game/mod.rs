//! Draw engine for the spinning wheel: sampling, the spin transition and
//! the session state machine that keeps draws from overlapping.

pub mod config;
pub mod easing;
pub mod sampler;
pub mod segments;
pub mod session;
pub mod transition;

pub use config::WheelConfig;
pub use easing::EasingCurve;
pub use sampler::{outcome_from_raw, sample, settle, winning_index, DrawOutcome};
pub use segments::{Segment, SegmentList};
pub use session::{DrawPhase, DrawResult, DrawSession};
pub use transition::{begin_transition, Transition, TransitionTicket};
