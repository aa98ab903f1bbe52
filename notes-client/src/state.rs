//! Local view state: the note list plus the create/edit form.

use crate::api::{ClientError, Note};

/// What the form submits to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Creating,
    Editing {
        id: i64,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Form {
    pub title: String,
    pub content: String,
}

/// A validated form ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Create { title: String, content: String },
    Update { id: i64, title: String, content: String },
}

#[derive(Debug, Default)]
pub struct NotesState {
    notes: Vec<Note>,
    mode: Mode,
    form: Form,
}

impl NotesState {
    pub fn new(notes: Vec<Note>) -> Self {
        Self {
            notes,
            ..Self::default()
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub const fn mode(&self) -> Mode {
        self.mode
    }

    pub const fn form(&self) -> &Form {
        &self.form
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.form.content = content.into();
    }

    /// Switches to editing the given note and loads it into the form.
    /// Returns `false` if the note is not in the local list.
    pub fn start_edit(&mut self, id: i64) -> bool {
        let Some(note) = self.notes.iter().find(|n| n.id == id) else {
            return false;
        };

        self.form = Form {
            title: note.title.clone(),
            content: note.content.clone().unwrap_or_default(),
        };
        self.mode = Mode::Editing { id };
        true
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Blank titles are only caught locally when creating; edits leave that to the server.
    pub fn submission(&self) -> Result<Submission, ClientError> {
        let Form { title, content } = self.form.clone();
        match self.mode {
            Mode::Creating if title.trim().is_empty() => {
                Err(ClientError::Validation("Title required"))
            }
            Mode::Creating => Ok(Submission::Create { title, content }),
            Mode::Editing { id } => Ok(Submission::Update { id, title, content }),
        }
    }

    pub fn apply_created(&mut self, note: Option<Note>) {
        if let Some(note) = note {
            self.notes.insert(0, note);
        }
        self.reset();
    }

    /// `None` means the server no longer has the note, so it is dropped locally.
    pub fn apply_updated(&mut self, id: i64, note: Option<Note>) {
        match note {
            Some(note) => {
                if let Some(slot) = self.notes.iter_mut().find(|n| n.id == note.id) {
                    *slot = note;
                }
            }
            None => self.notes.retain(|n| n.id != id),
        }
        self.reset();
    }

    pub fn apply_deleted(&mut self, id: i64) {
        self.notes.retain(|n| n.id != id);
        if self.mode == (Mode::Editing { id }) {
            self.reset();
        }
    }

    fn reset(&mut self) {
        self.mode = Mode::Creating;
        self.form = Form::default();
    }
}
