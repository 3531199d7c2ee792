use serde::{Deserialize, Serialize};
use std::fmt;

/// What the customer says about a served burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Feedback {
    PerfectAndFast,
    Perfect,
    Good,
    Disappointed,
}

impl Feedback {
    /// Picks the line for a result. Speed only matters for a perfect burger.
    pub fn select(is_perfect: bool, is_good: bool, is_fast: bool) -> Self {
        match (is_perfect, is_good, is_fast) {
            (true, _, true) => Feedback::PerfectAndFast,
            (true, _, false) => Feedback::Perfect,
            (false, true, _) => Feedback::Good,
            (false, false, _) => Feedback::Disappointed,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Feedback::PerfectAndFast => "Perfect and fast! Outstanding!",
            Feedback::Perfect => "Perfect burger! Customer is delighted!",
            Feedback::Good => "Good job! Customer is satisfied.",
            Feedback::Disappointed => "Customer is disappointed...",
        }
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Facial expression a host shows on the customer after serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CustomerMood {
    Happy,
    Normal,
    Sad,
}

/// Sound effect a host plays after serving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Score,
    LostHealth,
}
