/// The four emotional states of the journey, in playthrough order.
/// The sequence is cyclic: after `Routine` the journey returns to `Joy`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmotionalState {
    Joy,
    Nostalgia,
    Sorrow,
    Routine,
}

impl EmotionalState {
    pub const COUNT: usize = 4;

    /// All states in transition order.
    pub const ALL: [EmotionalState; Self::COUNT] = [
        EmotionalState::Joy,
        EmotionalState::Nostalgia,
        EmotionalState::Sorrow,
        EmotionalState::Routine,
    ];

    /// Position in the transition order.
    pub fn index(self) -> usize {
        match self {
            EmotionalState::Joy => 0,
            EmotionalState::Nostalgia => 1,
            EmotionalState::Sorrow => 2,
            EmotionalState::Routine => 3,
        }
    }

    /// State at a given index, wrapping modulo the cycle length.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// The next state in the cycle.
    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Lowercase name, as used by the theme manifest and the UI's CSS
    /// state classes.
    pub fn name(self) -> &'static str {
        match self {
            EmotionalState::Joy => "joy",
            EmotionalState::Nostalgia => "nostalgia",
            EmotionalState::Sorrow => "sorrow",
            EmotionalState::Routine => "routine",
        }
    }
}

impl Default for EmotionalState {
    fn default() -> Self {
        EmotionalState::Joy
    }
}
