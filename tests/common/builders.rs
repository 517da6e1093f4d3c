//! Test data builders for creating sessions

use dsvis_rs::source::SequenceSource;
use dsvis_rs::{Command, Mode, VisConfig, VisualizerSession};

/// Builder for sessions with predictable values
pub struct SessionBuilder {
    config: VisConfig,
    values: Vec<i32>,
    mode: Mode,
}

impl SessionBuilder {
    pub fn new() -> Self {
        Self {
            config: VisConfig::default(),
            values: vec![1],
            mode: Mode::LinkedList,
        }
    }

    /// Values handed out, in order and repeating, wherever a random one is needed
    pub fn values(mut self, values: &[i32]) -> Self {
        self.values = values.to_vec();
        self
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn array(mut self, capacity: usize, default_size: usize) -> Self {
        self.config.array.capacity = capacity;
        self.config.array.default_size = default_size;
        self
    }

    pub fn viewport_width(mut self, width: f32) -> Self {
        self.config.window.width = width;
        self
    }

    pub fn build(self) -> VisualizerSession {
        let mut session = VisualizerSession::with_source(
            self.config,
            Box::new(SequenceSource::new(self.values)),
        );
        if self.mode != session.mode() {
            session
                .dispatch(Command::SelectMode(self.mode))
                .expect("mode selection never fails");
        }
        session
    }
}

impl Default for SessionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builder() {
        let session = SessionBuilder::new()
            .values(&[4])
            .mode(Mode::Array)
            .array(5, 3)
            .build();

        assert_eq!(session.mode(), Mode::Array);
        assert_eq!(session.array().capacity(), 5);
        assert_eq!(session.array().values(), &[4, 4, 4]);
    }
}
