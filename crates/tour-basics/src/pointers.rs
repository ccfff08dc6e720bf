//! Mutation through references, and what a copy cannot change.

const PROFANITY: [&str; 3] = ["dang", "shoot", "heck"];
const MASK: &str = "******";

/// Replaces every profane word in place.
pub fn remove_profanity(message: &mut String) {
    for word in PROFANITY {
        if message.contains(word) {
            *message = message.replace(word, MASK);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hair {
    pub color: String,
}

impl Hair {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Recolors a copy. `self` keeps its color.
    pub fn with_color_copy(&self, color: impl Into<String>) -> Hair {
        let mut copy = self.clone();
        copy.set_color(color);
        copy
    }
}
