//! Inline feedback: turning a [`Verdict`] into colors and text, and painting it.
//!
//! The validators here are the only code that writes to a form. Each one
//! paints exactly two things: the field it validated and the shared message
//! element. Other fields are only ever read.

use serde::{Deserialize, Serialize};

use crate::config::FeedbackConfig;
use crate::outcome::Verdict;

/// Pass or fail indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tone {
    Good,
    Bad,
}

/// Indicator colors, as CSS color values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    #[serde(default = "default_good_color")]
    pub good: String,

    #[serde(default = "default_bad_color")]
    pub bad: String,
}

fn default_good_color() -> String {
    "#66cc66".to_string()
}

fn default_bad_color() -> String {
    "#ff6666".to_string()
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            good: default_good_color(),
            bad: default_bad_color(),
        }
    }
}

impl Palette {
    pub fn color(&self, tone: Tone) -> &str {
        match tone {
            Tone::Good => &self.good,
            Tone::Bad => &self.bad,
        }
    }
}

/// Message texts. `{min_length}` in `weak` is replaced by the policy minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Messages {
    #[serde(default = "default_strong")]
    pub strong: String,

    #[serde(default = "default_weak")]
    pub weak: String,

    #[serde(default = "default_matched")]
    pub matched: String,

    #[serde(default = "default_mismatched")]
    pub mismatched: String,
}

fn default_strong() -> String {
    "Passwords are strongly typed!".to_string()
}

fn default_weak() -> String {
    "Password must have lower,upper,digit,special character and must be {min_length} or more characters!"
        .to_string()
}

fn default_matched() -> String {
    "Passwords Matched!".to_string()
}

fn default_mismatched() -> String {
    "Passwords Do Not Match!".to_string()
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            strong: default_strong(),
            weak: default_weak(),
            matched: default_matched(),
            mismatched: default_mismatched(),
        }
    }
}

/// Which check produced a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Strength,
    Match,
}

/// What to paint for one verdict
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub tone: Tone,
    pub color: String,
    pub message: String,
}

impl Feedback {
    pub fn for_verdict(check: Check, verdict: &Verdict, config: &FeedbackConfig) -> Self {
        let tone = if verdict.is_valid() { Tone::Good } else { Tone::Bad };
        let messages = &config.messages;

        let message = match (check, tone) {
            (Check::Strength, Tone::Good) => messages.strong.clone(),
            (Check::Strength, Tone::Bad) => messages
                .weak
                .replace("{min_length}", &config.policy.min_length.to_string()),
            (Check::Match, Tone::Good) => messages.matched.clone(),
            (Check::Match, Tone::Bad) => messages.mismatched.clone(),
        };

        Self {
            tone,
            color: config.palette.color(tone).to_string(),
            message,
        }
    }
}

/// An input control: readable value, settable background color
pub trait StyledField {
    fn value(&self) -> String;
    fn set_background_color(&mut self, color: &str);
}

/// The shared message element
pub trait MessageSink {
    fn set_text_color(&mut self, color: &str);
    fn set_text(&mut self, text: &str);
}

/// Paint `feedback` onto the validated field and the message element
pub fn render<F, S>(field: &mut F, sink: &mut S, feedback: &Feedback)
where
    F: StyledField + ?Sized,
    S: MessageSink + ?Sized,
{
    tracing::debug!(tone = ?feedback.tone, "rendering password feedback");
    field.set_background_color(&feedback.color);
    sink.set_text_color(&feedback.color);
    sink.set_text(&feedback.message);
}

/// Checks the new password against the composition policy
#[derive(Debug, Clone, Default)]
pub struct StrengthValidator {
    config: FeedbackConfig,
}

impl StrengthValidator {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    /// Decide without painting
    pub fn decide(&self, password: &str) -> Verdict {
        self.config.policy.check(password).into()
    }

    /// Read `field`, decide, paint `field` and `sink`
    pub fn validate<F, S>(&self, field: &mut F, sink: &mut S) -> Verdict
    where
        F: StyledField + ?Sized,
        S: MessageSink + ?Sized,
    {
        let verdict = self.decide(&field.value());
        let feedback = Feedback::for_verdict(Check::Strength, &verdict, &self.config);
        render(field, sink, &feedback);
        verdict
    }
}

/// Checks that the confirmation equals the new password
#[derive(Debug, Clone, Default)]
pub struct MatchValidator {
    config: FeedbackConfig,
}

impl MatchValidator {
    pub fn new(config: FeedbackConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FeedbackConfig {
        &self.config
    }

    pub fn decide(&self, new_password: &str, confirmation: &str) -> Verdict {
        crate::matching::check_match(new_password, confirmation).into()
    }

    /// Read both fields, decide, paint only `confirm` and `sink`
    pub fn validate<N, C, S>(&self, new_password: &N, confirm: &mut C, sink: &mut S) -> Verdict
    where
        N: StyledField + ?Sized,
        C: StyledField + ?Sized,
        S: MessageSink + ?Sized,
    {
        let verdict = self.decide(&new_password.value(), &confirm.value());
        let feedback = Feedback::for_verdict(Check::Match, &verdict, &self.config);
        render(confirm, sink, &feedback);
        verdict
    }
}
