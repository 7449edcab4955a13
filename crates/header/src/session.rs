use recibo_persistence::{HeaderRecord, HeaderStore};

use crate::config::{HeaderConfig, HeaderDraft, HeaderField};

/// Edit lifecycle state of the letterhead.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditState {
    /// No edit in progress; the committed config is displayed.
    View,
    /// A draft exists; field edits mutate the draft only.
    Editing,
}

/// State machine governing the editable letterhead.
///
/// Two states, three transitions:
/// - `View -> Editing` (begin edit): snapshots the committed config into a
///   fresh draft. Nothing is persisted.
/// - `Editing -> View` (commit): promotes the draft wholesale into the
///   committed config, then persists — first the narrow `{title, subtitle,
///   phone}` record when that subset changed, then always the full
///   five-field record. Both writes target the same key; the full write is
///   issued last so it wins.
/// - `Editing -> View` (cancel): discards the draft unconditionally. The
///   committed config is untouched and nothing is persisted.
///
/// The committed config is only ever mutated by a successful commit, and
/// re-entering the editing state always starts from a fresh snapshot of the
/// then-current config, never a stale prior draft.
///
/// Storage failures never escape: a failed load falls back to compiled-in
/// defaults and a failed save is logged, with the in-memory config remaining
/// authoritative either way.
#[derive(Debug)]
pub struct HeaderEditSession<S> {
    store: S,
    config: HeaderConfig,
    draft: Option<HeaderDraft>,
}

impl<S: HeaderStore> HeaderEditSession<S> {
    /// Open a session, loading the persisted record once.
    ///
    /// Missing, malformed or partially-shaped records downgrade to the
    /// compiled-in defaults per field.
    pub fn load(store: S) -> Self {
        let config = match store.load() {
            Ok(Some(record)) => HeaderConfig::from_record(&record),
            Ok(None) => HeaderConfig::default(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to load header record, using defaults");
                HeaderConfig::default()
            }
        };

        Self {
            store,
            config,
            draft: None,
        }
    }

    pub fn state(&self) -> EditState {
        if self.draft.is_some() {
            EditState::Editing
        } else {
            EditState::View
        }
    }

    pub fn is_editing(&self) -> bool {
        self.state() == EditState::Editing
    }

    /// The committed letterhead (what an observer of committed state sees,
    /// regardless of any edit in progress).
    pub fn committed(&self) -> &HeaderConfig {
        &self.config
    }

    pub fn draft(&self) -> Option<&HeaderDraft> {
        self.draft.as_ref()
    }

    /// What the rendering collaborator should display: the draft while
    /// editing, the committed config otherwise.
    pub fn displayed(&self) -> HeaderConfig {
        match &self.draft {
            Some(draft) => draft.preview(),
            None => self.config.clone(),
        }
    }

    /// `View -> Editing`: seed a fresh draft from the committed config.
    ///
    /// Calling this while already editing re-seeds the draft, so an edit
    /// session never resumes stale draft state.
    pub fn begin_edit(&mut self) {
        self.draft = Some(HeaderDraft::snapshot(&self.config));
    }

    /// Mutate one draft field. Ignored (logged) outside the editing state.
    pub fn edit_field(&mut self, field: HeaderField, value: impl Into<String>) {
        match &mut self.draft {
            Some(draft) => draft.set(field, value),
            None => {
                tracing::debug!(?field, "header field edit outside edit mode ignored");
            }
        }
    }

    /// `Editing -> View` via commit: apply the draft atomically, persist,
    /// clear the draft. A no-op when no edit is in progress.
    pub fn commit(&mut self) {
        let Some(draft) = self.draft.take() else {
            tracing::debug!("header commit outside edit mode ignored");
            return;
        };

        let next = draft.into_config();
        let narrow_changed = next.narrow_subset_differs(&self.config);

        // Single assignment: a partially-applied config is never observable.
        self.config = next;

        // Reflexive subset write fires on any committed change to
        // {title, subtitle, phone}; the full commit write is issued after it
        // and therefore wins on the shared key.
        if narrow_changed {
            self.persist(self.config.to_narrow_record());
        }
        self.persist(self.config.to_full_record());
    }

    /// `Editing -> View` via cancel: discard the draft, touch nothing else.
    pub fn cancel(&mut self) {
        if self.draft.take().is_none() {
            tracing::debug!("header cancel outside edit mode ignored");
        }
    }

    fn persist(&self, record: HeaderRecord) {
        if let Err(e) = self.store.save(&record) {
            tracing::warn!(error = %e, "header persistence failed; in-memory state remains authoritative");
        }
    }
}
