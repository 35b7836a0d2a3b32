//! # Properties Editor
//!
//! Draft editing of a content leaf's attributes. Every keystroke updates
//! the draft at once; the tree only sees it after a quiet period, so a
//! burst of edits lands as one commit.
//!
//! ```text
//! set_title ─┐
//! set_link  ─┼─▶ draft ──▶ Debounced ──(quiet for delay)──▶ poll_commit ──▶ tree
//! set_route ─┘
//! set_media_url ─────────────────────────(immediate)───────▶ tree
//! ```
//!
//! Time is passed in by the caller, never read from a clock here.

use std::time::{Duration, Instant};

use canvas_tree::{LeafContent, TitleSection};

/// Default color of a freshly added title section
pub const DEFAULT_SECTION_COLOR: &str = "#000000";

/// Holds the latest value until no new one has arrived for `delay`
#[derive(Debug, Clone)]
pub struct Debounced<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debounced<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending value and restart the quiet period
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Take the pending value once the quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, at)) if now.saturating_duration_since(*at) >= self.delay => {
                self.pending.take().map(|(value, _)| value)
            }
            _ => None,
        }
    }

    pub fn discard(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Draft attributes of one content leaf
#[derive(Debug, Clone)]
pub struct PropertiesEditor {
    node_id: String,
    draft: LeafContent,
    commits: Debounced<LeafContent>,
}

impl PropertiesEditor {
    pub fn new(node_id: impl Into<String>, current: LeafContent, delay: Duration) -> Self {
        Self {
            node_id: node_id.into(),
            draft: current,
            commits: Debounced::new(delay),
        }
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    pub fn draft(&self) -> &LeafContent {
        &self.draft
    }

    pub fn has_pending(&self) -> bool {
        self.commits.is_pending()
    }

    fn schedule(&mut self, now: Instant) {
        self.commits.push(self.draft.clone(), now);
    }

    pub fn set_title(&mut self, title: impl Into<String>, now: Instant) {
        self.draft.title = title.into();
        self.schedule(now);
    }

    pub fn set_link(&mut self, link: impl Into<String>, now: Instant) {
        self.draft.link = link.into();
        self.schedule(now);
    }

    pub fn set_route(&mut self, route: impl Into<String>, now: Instant) {
        self.draft.route = route.into();
        self.schedule(now);
    }

    /// Add an empty title section to the draft and return its key.
    ///
    /// Keys are `title_{n}` numbered after the existing sections, skipping
    /// any number already taken. Nothing is scheduled until the section
    /// is edited.
    pub fn add_title_section(&mut self) -> String {
        let mut n = self.draft.titles.len() + 1;
        let mut key = format!("title_{n}");
        while self.draft.titles.contains_key(&key) {
            n += 1;
            key = format!("title_{n}");
        }

        self.draft.titles.insert(
            key.clone(),
            TitleSection {
                text: String::new(),
                color: DEFAULT_SECTION_COLOR.to_string(),
                gradient: String::new(),
            },
        );
        key
    }

    /// Returns false when no section has that key
    pub fn remove_title_section(&mut self, key: &str, now: Instant) -> bool {
        if self.draft.titles.remove(key).is_none() {
            return false;
        }
        self.schedule(now);
        true
    }

    pub fn set_section_text(&mut self, key: &str, text: impl Into<String>, now: Instant) -> bool {
        self.edit_section(key, now, |section| section.text = text.into())
    }

    pub fn set_section_color(&mut self, key: &str, color: impl Into<String>, now: Instant) -> bool {
        self.edit_section(key, now, |section| section.color = color.into())
    }

    pub fn set_section_gradient(&mut self, key: &str, gradient: impl Into<String>, now: Instant) -> bool {
        self.edit_section(key, now, |section| section.gradient = gradient.into())
    }

    fn edit_section(&mut self, key: &str, now: Instant, edit: impl FnOnce(&mut TitleSection)) -> bool {
        let Some(section) = self.draft.titles.get_mut(key) else {
            return false;
        };
        edit(section);
        self.schedule(now);
        true
    }

    /// Set the media URL and return the content to commit right away.
    /// Any pending debounced commit is folded into it.
    pub fn set_media_url(&mut self, url: impl Into<String>) -> LeafContent {
        self.draft.url = url.into();
        self.commits.discard();
        self.draft.clone()
    }

    /// Content due for commit at `now`, if any
    pub fn poll_commit(&mut self, now: Instant) -> Option<LeafContent> {
        self.commits.poll(now)
    }
}
