//! The conversational recommendation engine.
//!
//! Two stages: the [`Advisor`] first tries the remote chat completion
//! client, and on any error routes the turn through the deterministic
//! local pipeline (classify, extract, synthesize). Both stages produce an
//! [`wander_core::AdvisorReply`], so the caller always gets an answer.

pub mod advisor;
pub mod prompt;
pub mod synthesizer;

pub use advisor::{Advisor, AdvisorOptions};
pub use synthesizer::{Synthesizer, SynthesizerConfig};
