use serde::Serialize;

/// A named layout and its captured host state. An empty state means the
/// layout was created but never saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    name: String,
    state: Vec<u8>,
}

impl Profile {
    pub fn new(name: String) -> Self {
        Self::with_state(name, Vec::new())
    }

    pub fn with_state(name: String, state: Vec<u8>) -> Self {
        Self { name, state }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> &[u8] {
        &self.state
    }

    pub fn is_saved(&self) -> bool {
        !self.state.is_empty()
    }

    pub(crate) fn renamed(&self, name: String) -> Self {
        Self {
            name,
            state: self.state.clone(),
        }
    }

    pub(crate) fn replace_state(&mut self, state: Vec<u8>) {
        self.state = state;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutEntry {
    pub name: String,
    pub is_default: bool,
    pub saved: bool,
}
