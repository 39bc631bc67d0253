/// Contact fields collected from the card form.
///
/// Empty fields are left out of the payload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub org: String,
    pub title: String,
    pub tel: String,
    pub email: String,
    pub url: String,
    pub note: String,
}

impl Contact {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_org(mut self, org: impl Into<String>) -> Self {
        self.org = org.into();
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_tel(mut self, tel: impl Into<String>) -> Self {
        self.tel = tel.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            org: self.org.trim().to_owned(),
            title: self.title.trim().to_owned(),
            tel: self.tel.trim().to_owned(),
            email: self.email.trim().to_owned(),
            url: self.url.trim().to_owned(),
            note: self.note.trim().to_owned(),
        }
    }

    /// The display name: the name, or the company when no name was given.
    pub fn display_name(&self) -> Option<&str> {
        [self.name.as_str(), self.org.as_str()]
            .into_iter()
            .map(str::trim)
            .find(|s| !s.is_empty())
    }
}
