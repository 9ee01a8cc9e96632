//! Game flow: secret generation, color cycling and the round state machine

mod picker;
mod round;
mod secret;

pub use picker::next_color;
pub use round::{FinalScore, Round, RoundState, Row, SubmitOutcome};
pub use secret::{
    MIN_PALETTE_SIZE, PickSource, RngPicks, ScriptedPicks, generate_secret, generate_secret_with,
};
