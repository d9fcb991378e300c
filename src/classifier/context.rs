use std::collections::HashMap;

/// (company, event) pair that scopes space carry-forward
pub type EventKey = (Option<String>, Option<String>);

/// Running header context
///
/// Each field is replaced wholesale by the next header of its kind and is
/// never cleared within a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    pub company: Option<String>,
    pub event: Option<String>,
    pub date: Option<String>,
}

impl Context {
    pub fn key(&self) -> EventKey {
        (self.company.clone(), self.event.clone())
    }
}

/// Last resolved space per (company, event)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastSpaceMemory {
    spaces: HashMap<EventKey, String>,
}

impl LastSpaceMemory {
    pub fn get(&self, key: &EventKey) -> Option<&str> {
        self.spaces.get(key).map(String::as_str)
    }

    pub fn remember(&mut self, key: EventKey, space: impl Into<String>) {
        self.spaces.insert(key, space.into());
    }

    pub fn len(&self) -> usize {
        self.spaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spaces.is_empty()
    }
}

/// Everything one document pass accumulates
///
/// A fresh state is created for every run so repeated runs over the same
/// lines produce the same records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseState {
    pub context: Context,
    pub memory: LastSpaceMemory,
}

impl ParseState {
    pub fn new() -> Self {
        Self::default()
    }
}
