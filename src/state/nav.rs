//! Navigation state.
//!
//! Tracks the current path, a monotonically increasing navigation
//! generation, and a back-history stack. The generation is what makes
//! "latest navigation wins" checkable: anything computed for an older
//! generation is stale by definition.

/// Current navigation position. Mutated only by navigation events.
#[derive(Debug, Clone)]
pub struct NavigationState {
    current_path: String,
    generation: u64,
    history: Vec<String>,
}

impl NavigationState {
    /// Start at the given path (generation 0, empty history).
    pub fn new(start_path: impl Into<String>) -> Self {
        Self {
            current_path: start_path.into(),
            generation: 0,
            history: Vec::new(),
        }
    }

    /// The path currently being rendered for.
    pub fn current_path(&self) -> &str {
        &self.current_path
    }

    /// Generation of the latest navigation event.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Navigate to `path`. Re-navigating to the current path bumps the
    /// generation (it is a fresh activation, e.g. a retry) but does not
    /// grow the history.
    pub fn navigate(&mut self, path: impl Into<String>) {
        let path = path.into();
        self.generation += 1;
        if path != self.current_path {
            let previous = std::mem::replace(&mut self.current_path, path);
            self.history.push(previous);
        }
    }

    /// Pop the history stack. Returns false when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.current_path = previous;
                self.generation += 1;
                true
            }
            None => false,
        }
    }
}
