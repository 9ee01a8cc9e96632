//! Check command
//!
//! Evaluates one guess against a secret given on the command line.

use crate::core::{Feedback, GameError, Guess, Secret, evaluate};

/// Result of checking a guess
pub struct CheckResult {
    pub secret: Secret,
    pub guess: Guess,
    pub feedback: Feedback,
}

/// Parse `secret` and `guess` and evaluate them
///
/// The secret may repeat colors; it is not limited to a palette.
///
/// # Errors
///
/// Returns an error if either code does not parse as four colors.
pub fn check_guess(secret: &str, guess: &str) -> Result<CheckResult, GameError> {
    let secret: Secret = secret.parse()?;
    let guess: Guess = guess.parse()?;
    let feedback = evaluate(&guess, &secret)?;

    Ok(CheckResult {
        secret,
        guess,
        feedback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Mark::{Absent, Exact, Present};

    #[test]
    fn check_reports_feedback() {
        let result = check_guess("RGBY", "BGRY").unwrap();
        assert_eq!(result.feedback.marks(), &[Present, Exact, Present, Exact]);
        assert_eq!(result.guess.to_string(), "BGRY");
    }

    #[test]
    fn check_accepts_repeating_secret() {
        let result = check_guess("red red green blue", "RGGG").unwrap();
        assert_eq!(result.feedback.marks(), &[Exact, Absent, Exact, Absent]);
        assert_eq!(result.secret.to_string(), "RRGB");
    }

    #[test]
    fn check_rejects_bad_codes() {
        assert!(matches!(
            check_guess("RGB", "RGBY"),
            Err(GameError::InvalidCodeLength { len: 3, .. })
        ));
        assert!(matches!(
            check_guess("RGBY", "RGBZ"),
            Err(GameError::UnknownColor(_))
        ));
    }
}
