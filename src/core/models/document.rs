//! Document models
//!
//! Documents are owned by the document store; access control only reads them.

use super::user::User;
use serde::{Deserialize, Serialize};

/// Document record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document identifier
    pub id: String,
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Who uploaded the document
    #[serde(alias = "uploadedBy")]
    pub uploaded_by: Uploader,
    /// Owning department, when recorded on the document itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    /// Workflow status
    #[serde(default)]
    pub status: DocumentStatus,
}

impl Document {
    /// Create a pending document
    pub fn new<S: Into<String>>(id: S, uploaded_by: Uploader) -> Self {
        Self {
            id: id.into(),
            title: None,
            uploaded_by,
            department: None,
            status: DocumentStatus::Pending,
        }
    }

    /// Set the title
    pub fn with_title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the owning department
    pub fn with_department<S: Into<String>>(mut self, department: S) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Set the status
    pub fn with_status(mut self, status: DocumentStatus) -> Self {
        self.status = status;
        self
    }
}

/// Reference to the uploader of a document.
///
/// Stored records are inconsistent: some carry the uploader's display name,
/// some the user id. Records that say which one they carry are `Id` or
/// `Name`; bare strings are `Unqualified` and match either.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "UploaderRepr", into = "UploaderRepr")]
pub enum Uploader {
    /// User id
    Id(String),
    /// User display name
    Name(String),
    /// Bare identifier of unknown kind
    Unqualified(String),
}

impl Uploader {
    /// The raw identifier string
    pub fn as_str(&self) -> &str {
        match self {
            Uploader::Id(s) | Uploader::Name(s) | Uploader::Unqualified(s) => s,
        }
    }

    /// Check whether this reference identifies `user`
    pub fn identifies(&self, user: &User) -> bool {
        match self {
            Uploader::Id(id) => user.id.as_deref() == Some(id.as_str()),
            Uploader::Name(name) => user.name == *name,
            Uploader::Unqualified(raw) => user.is_identified_by(raw),
        }
    }
}

impl std::fmt::Display for Uploader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Uploader {
    fn from(raw: &str) -> Self {
        Uploader::Unqualified(raw.to_string())
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum UploaderRepr {
    Plain(String),
    Tagged(TaggedUploader),
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TaggedUploader {
    Id(String),
    Name(String),
}

impl From<UploaderRepr> for Uploader {
    fn from(repr: UploaderRepr) -> Self {
        match repr {
            UploaderRepr::Plain(raw) => Uploader::Unqualified(raw),
            UploaderRepr::Tagged(TaggedUploader::Id(id)) => Uploader::Id(id),
            UploaderRepr::Tagged(TaggedUploader::Name(name)) => Uploader::Name(name),
        }
    }
}

impl From<Uploader> for UploaderRepr {
    fn from(uploader: Uploader) -> Self {
        match uploader {
            Uploader::Unqualified(raw) => UploaderRepr::Plain(raw),
            Uploader::Id(id) => UploaderRepr::Tagged(TaggedUploader::Id(id)),
            Uploader::Name(name) => UploaderRepr::Tagged(TaggedUploader::Name(name)),
        }
    }
}

/// Document workflow status
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    /// Waiting for review
    #[default]
    Pending,
    /// Approved
    Approved,
    /// Rejected
    Rejected,
    /// Not yet submitted
    Draft,
    /// Review in progress
    UnderReview,
}

impl DocumentStatus {
    /// Whether the document sits in an approval queue
    pub fn is_awaiting_review(&self) -> bool {
        matches!(self, DocumentStatus::Pending | DocumentStatus::UnderReview)
    }
}

impl std::fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentStatus::Pending => write!(f, "pending"),
            DocumentStatus::Approved => write!(f, "approved"),
            DocumentStatus::Rejected => write!(f, "rejected"),
            DocumentStatus::Draft => write!(f, "draft"),
            DocumentStatus::UnderReview => write!(f, "under_review"),
        }
    }
}
