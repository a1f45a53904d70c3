//! The single pending create/edit form.

use uuid::Uuid;

use crate::models::{Category, Frequency, Practice, PracticeInput};
use crate::store::PracticeStore;

/// In-progress, not-yet-validated practice record.
///
/// Unlike a committed [`Practice`], the draft has no identity and its
/// text fields may sit empty while the user is still typing. Conversion
/// into a [`PracticeInput`] happens in [`DraftController::commit`] and is
/// the only validation boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PracticeDraft {
    pub name: String,
    pub category: Category,
    pub frequency: Frequency,
    pub time: String,
    pub duration: String,
    pub notes: String,
}

impl Default for PracticeDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            category: Category::ALL[0],
            frequency: Frequency::Daily,
            time: String::new(),
            duration: String::new(),
            notes: String::new(),
        }
    }
}

/// Manages the pending form for creating or editing one practice.
///
/// Holds exactly one draft at a time. `editing_id` marks "this draft
/// replaces an existing record"; without it a commit creates a new one.
#[derive(Default)]
pub struct DraftController {
    draft: PracticeDraft,
    editing_id: Option<Uuid>,
}

impl DraftController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the draft to defaults for a fresh create.
    pub fn start_create(&mut self) {
        self.draft = PracticeDraft::default();
        self.editing_id = None;
    }

    /// Load an existing practice's editable fields into the draft.
    pub fn start_edit(&mut self, practice: &Practice) {
        self.draft = PracticeDraft {
            name: practice.name.clone(),
            category: practice.category,
            frequency: practice.frequency,
            time: practice.time.clone().unwrap_or_default(),
            duration: practice.duration.clone().unwrap_or_default(),
            notes: practice.notes.clone().unwrap_or_default(),
        };
        self.editing_id = Some(practice.id);
    }

    pub fn draft(&self) -> &PracticeDraft {
        &self.draft
    }

    /// Mutable access for the form binding.
    pub fn draft_mut(&mut self) -> &mut PracticeDraft {
        &mut self.draft
    }

    /// The record this draft replaces, if editing.
    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing_id
    }

    /// Commit the draft to the store.
    ///
    /// A draft whose name is empty or whitespace-only is silently
    /// rejected: `None` comes back, no error is raised, and the draft is
    /// left as-is so the user can keep typing. That silence is a
    /// deliberate contract, not a gap.
    ///
    /// Otherwise the draft delegates to [`PracticeStore::update`] when
    /// `editing_id` is set (a stale id whose record was deleted also
    /// yields `None`, draft untouched) or [`PracticeStore::add`] when it
    /// is not. On success the draft resets to defaults and the committed
    /// record is returned.
    pub async fn commit(&mut self, store: &mut PracticeStore) -> Option<Practice> {
        if self.draft.name.trim().is_empty() {
            return None;
        }

        let input = PracticeInput {
            name: self.draft.name.clone(),
            category: self.draft.category,
            frequency: self.draft.frequency,
            time: non_empty(&self.draft.time),
            duration: non_empty(&self.draft.duration),
            notes: non_empty(&self.draft.notes),
        };

        let committed = match self.editing_id {
            Some(id) => store.update(id, input).await?,
            None => store.add(input).await,
        };

        self.start_create();
        Some(committed)
    }

    /// Discard the draft without committing.
    pub fn cancel(&mut self) {
        self.start_create();
    }
}

fn non_empty(s: &str) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}
