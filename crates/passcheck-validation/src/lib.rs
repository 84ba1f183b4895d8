//! Passcheck Validation Core
//!
//! Pure checks for a password-change form and the feedback they produce.
//! Used directly by hosts that own their own UI, and by `passcheck-wasm`
//! for in-browser validation.
//!
//! Decisions (`policy`, `matching`) never touch a UI. Painting happens only
//! in [`feedback::render`], against whatever implements [`StyledField`] and
//! [`MessageSink`].

pub mod config;
pub mod feedback;
pub mod matching;
pub mod outcome;
pub mod policy;

pub use config::{ElementIds, FeedbackConfig};
pub use feedback::{
    render, Check, Feedback, MatchValidator, MessageSink, Messages, Palette, StrengthValidator,
    StyledField, Tone,
};
pub use matching::{check_match, Mismatch, MismatchKind};
pub use outcome::{Reason, Verdict};
pub use policy::{check_strength, CharClass, CompositionPolicy, Violation, WeakPassword};
