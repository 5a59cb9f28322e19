//! Contact forms: validation, submission to the spreadsheet webhook and the
//! per-form state machine the pages drive.

pub mod state;
pub mod submit;
pub mod validation;

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Waitlist,
    Feedback,
}

impl FormKind {
    /// Whether the free-text field must be filled in.
    pub fn requires_comment(self) -> bool {
        matches!(self, FormKind::Feedback)
    }

    pub fn requires_platform(self) -> bool {
        matches!(self, FormKind::Waitlist)
    }

    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Feedback => "Thanks for your feedback! We appreciate your input.",
            FormKind::Waitlist => "You're on the list! We'll let you know as soon as DadTrack is ready for you.",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Android,
}

impl Platform {
    pub const ALL: [Platform; 2] = [Platform::Ios, Platform::Android];

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::Ios => "ios",
            Platform::Android => "android",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Ios => "iPhone",
            Platform::Android => "Android",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Platform::Ios => "🍎",
            Platform::Android => "🤖",
        }
    }

    pub fn parse(value: &str) -> Option<Platform> {
        Platform::ALL.into_iter().find(|p| p.as_str() == value)
    }
}

/// Inputs the user can edit, keyed for error lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Comment,
    Platform,
    Honeypot,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Comment => "comment",
            Field::Platform => "platform",
            Field::Honeypot => "website",
        }
    }
}

/// What the user typed on one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormFields {
    pub kind: FormKind,
    pub name: String,
    pub email: String,
    pub comment: String,
    /// Hidden from people; only bots fill it in.
    pub honeypot: String,
    pub platform: Option<Platform>,
}

impl FormFields {
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            name: String::new(),
            email: String::new(),
            comment: String::new(),
            honeypot: String::new(),
            platform: None,
        }
    }

    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Comment => &self.comment,
            Field::Platform => self.platform.map_or("", Platform::as_str),
            Field::Honeypot => &self.honeypot,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Comment => self.comment = value,
            Field::Platform => self.platform = Platform::parse(&value),
            Field::Honeypot => self.honeypot = value,
        }
    }

    /// Empties the typed-in values; kind and platform stay.
    pub fn clear_entries(&mut self) {
        self.name.clear();
        self.email.clear();
        self.comment.clear();
        self.honeypot.clear();
    }
}
