//! Deterministic URLs: public image locations and pre-filled reservation forms.
//!
//! Nothing here performs a request. The reservation link only stages a
//! GitHub "new issue" form; the issue tracker stays the source of truth.

use serde::{Deserialize, Serialize};

/// Static hosting convention used to serve repository images.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageHost {
    /// `https://raw.githubusercontent.com/{owner}/{repo}/{branch}/{path}`
    #[default]
    Raw,
    /// `https://{owner}.github.io/{repo}/{path}` (serves the Pages branch).
    Pages,
}

/// Body template for a reservation request.
///
/// Rendered as `"{intro} {filename}"`, a blank line, then one line per
/// placeholder field for the requester to fill in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservationForm {
    pub intro: String,
    pub name_field: String,
    pub contact_field: String,
    pub comment_field: String,
}

impl Default for ReservationForm {
    fn default() -> Self {
        Self {
            intro: "Я хочу забронювати малюнок:".to_string(),
            name_field: "ПІБ:".to_string(),
            contact_field: "Контакт (телефон/месенджер):".to_string(),
            comment_field: "Коментар:".to_string(),
        }
    }
}

impl ReservationForm {
    #[must_use]
    pub fn body(&self, filename: &str) -> String {
        format!(
            "{} {filename}\n\n{}\n{}\n{}",
            self.intro, self.name_field, self.contact_field, self.comment_field
        )
    }
}

/// Builds every outbound URL for one repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBuilder {
    pub owner: String,
    pub repo: String,
    pub branch: String,
    pub prefix: String,
    pub host: ImageHost,
    pub form: ReservationForm,
}

impl LinkBuilder {
    /// Absolute, publicly fetchable URL for a repository-relative path.
    #[must_use]
    pub fn image_url(&self, path: &str) -> String {
        let path = encode_path(path);
        match self.host {
            ImageHost::Raw => format!(
                "https://raw.githubusercontent.com/{}/{}/{}/{path}",
                self.owner, self.repo, self.branch
            ),
            ImageHost::Pages => format!("https://{}.github.io/{}/{path}", self.owner, self.repo),
        }
    }

    /// Issue title that marks `filename` as reserved.
    #[must_use]
    pub fn reservation_title(&self, filename: &str) -> String {
        format!("{} {filename}", self.prefix)
    }

    /// Pre-filled GitHub issue form requesting a reservation of `filename`.
    #[must_use]
    pub fn reservation_request(&self, filename: &str) -> String {
        format!(
            "https://github.com/{}/{}/issues/new?title={}&body={}",
            self.owner,
            self.repo,
            urlencoding::encode(&self.reservation_title(filename)),
            urlencoding::encode(&self.form.body(filename)),
        )
    }
}

/// Percent-encode each segment of a slash-separated path.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}
