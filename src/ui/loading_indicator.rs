//! Loading indicator for terminal UI

const FRAMES: [&str; 4] = ["|", "/", "-", "\\"];

/// Simple ASCII loading indicator with rotating animation
#[derive(Debug, Clone)]
pub struct LoadingIndicator {
    message: String,
    frame: usize,
}

impl LoadingIndicator {
    /// Creates a new loading indicator with the specified message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            frame: 0,
        }
    }

    /// Gets the current animation frame character
    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.frame]
    }

    /// Gets the loading message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Advances to the next animation frame
    pub fn next_frame(&mut self) {
        self.frame = (self.frame + 1) % FRAMES.len();
    }

    /// Message followed by the current frame, e.g. `"Loading... /"`
    pub fn line(&self) -> String {
        format!("{} {}", self.message, self.current_frame())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cycle() {
        let mut indicator = LoadingIndicator::new("Loading...");
        let seen: Vec<&str> = (0..5)
            .map(|_| {
                let frame = indicator.current_frame();
                indicator.next_frame();
                frame
            })
            .collect();
        assert_eq!(seen, vec!["|", "/", "-", "\\", "|"]);
    }

    #[test]
    fn test_line_includes_message() {
        let indicator = LoadingIndicator::new("Loading...");
        assert_eq!(indicator.message(), "Loading...");
        assert_eq!(indicator.line(), "Loading... |");
    }
}
