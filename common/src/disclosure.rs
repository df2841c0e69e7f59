use std::fmt;

use crate::faq::FaqEntry;

/// Visibility of a disclosure item's answer body.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DisclosureState {
    #[default]
    Collapsed,
    Expanded,
}

impl DisclosureState {
    pub fn toggled(self) -> Self {
        match self {
            DisclosureState::Collapsed => DisclosureState::Expanded,
            DisclosureState::Expanded => DisclosureState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == DisclosureState::Expanded
    }
}

impl fmt::Display for DisclosureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisclosureState::Collapsed => write!(f, "collapsed"),
            DisclosureState::Expanded => write!(f, "expanded"),
        }
    }
}

/// Direction of the indicator drawn next to a question.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Chevron {
    Down,
    Up,
}

/// One question/answer pair plus the visibility of its answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisclosureItem {
    question: String,
    answer: String,
    state: DisclosureState,
}

/// What a disclosure item looks like in a given state.
///
/// The question is always present; the answer only while expanded.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisclosureView<'a> {
    pub question: &'a str,
    pub answer: Option<&'a str>,
    pub chevron: Chevron,
}

impl DisclosureItem {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: DisclosureState::Collapsed,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> DisclosureState {
        self.state
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Flip between collapsed and expanded, returning the new state.
    pub fn toggle(&mut self) -> DisclosureState {
        self.state = self.state.toggled();
        self.state
    }

    pub fn view(&self) -> DisclosureView<'_> {
        let expanded = self.is_expanded();
        DisclosureView {
            question: &self.question,
            answer: expanded.then_some(self.answer.as_str()),
            chevron: if expanded { Chevron::Up } else { Chevron::Down },
        }
    }
}

impl From<FaqEntry> for DisclosureItem {
    fn from(entry: FaqEntry) -> Self {
        DisclosureItem::new(entry.question, entry.answer)
    }
}

/// Ordered, fixed-size set of independently toggleable items.
///
/// The list keeps no state of its own beyond the items: toggling one entry
/// never touches another, and any number of entries may be open at once.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DisclosureList {
    items: Vec<DisclosureItem>,
}

impl DisclosureList {
    /// Build one collapsed item per entry, preserving input order.
    pub fn initialize<I, E>(entries: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<DisclosureItem>,
    {
        Self {
            items: entries.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&DisclosureItem> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DisclosureItem> {
        self.items.iter()
    }

    /// Toggle the item at `index`. Returns its new state, or `None` when
    /// there is no such item.
    pub fn toggle(&mut self, index: usize) -> Option<DisclosureState> {
        self.items.get_mut(index).map(DisclosureItem::toggle)
    }

    pub fn expanded_indices(&self) -> Vec<usize> {
        self.items
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_expanded())
            .map(|(i, _)| i)
            .collect()
    }

    /// Hand the items out so each view can own its own state cell.
    pub fn into_items(self) -> Vec<DisclosureItem> {
        self.items
    }
}
