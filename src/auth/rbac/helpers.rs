//! Helper methods for document visibility

use super::system::AccessControl;
use super::types::DenialReason;
use crate::core::models::{Document, Uploader, User};
use tracing::warn;

pub(super) trait UploaderResolution {
    /// Look up the uploader in the user directory
    fn resolve_uploader(&self, uploader: &Uploader) -> Option<User>;

    /// Department attributed to a document: its own, else its uploader's
    fn effective_department(&self, document: &Document) -> Result<String, DenialReason>;

    /// Whether `document` was uploaded by `user`
    fn is_uploader(&self, user: &User, document: &Document) -> bool;
}

impl UploaderResolution for AccessControl {
    fn resolve_uploader(&self, uploader: &Uploader) -> Option<User> {
        match uploader {
            Uploader::Id(id) => self.directory.find_by_id(id),
            Uploader::Name(name) => self.directory.find_by_name(name),
            Uploader::Unqualified(raw) => {
                let by_id = self.directory.find_by_id(raw);
                let by_name = self.directory.find_by_name(raw);
                if let (Some(by_id), Some(by_name)) = (&by_id, &by_name) {
                    self.report_ambiguous(raw, by_id, by_name);
                }
                by_id.or(by_name)
            }
        }
    }

    fn effective_department(&self, document: &Document) -> Result<String, DenialReason> {
        if let Some(department) = &document.department {
            return Ok(department.clone());
        }

        let uploader = self.resolve_uploader(&document.uploaded_by).ok_or_else(|| {
            DenialReason::UnresolvedUploader {
                uploader: document.uploaded_by.to_string(),
            }
        })?;

        uploader
            .department
            .ok_or_else(|| DenialReason::UploaderWithoutDepartment {
                uploader: document.uploaded_by.to_string(),
            })
    }

    fn is_uploader(&self, user: &User, document: &Document) -> bool {
        let identifies = document.uploaded_by.identifies(user);
        if let (true, Uploader::Unqualified(raw)) = (identifies, &document.uploaded_by) {
            self.warn_if_ambiguous(raw);
        }
        identifies
    }
}

impl AccessControl {
    /// Warn when a bare uploader string is one user's name and another's id
    fn warn_if_ambiguous(&self, raw: &str) {
        if !self.warn_on_ambiguous_uploader || self.reported_uploaders.lock().contains(raw) {
            return;
        }

        if let (Some(by_id), Some(by_name)) = (
            self.directory.find_by_id(raw),
            self.directory.find_by_name(raw),
        ) {
            self.report_ambiguous(raw, &by_id, &by_name);
        }
    }

    /// Each string is reported at most once per access control instance
    fn report_ambiguous(&self, raw: &str, by_id: &User, by_name: &User) {
        if !self.warn_on_ambiguous_uploader || by_id == by_name {
            return;
        }

        if self.reported_uploaders.lock().insert(raw.to_string()) {
            warn!(
                uploader = raw,
                id_match = ?by_id.id,
                name_match = %by_name.name,
                name_match_id = ?by_name.id,
                "Uploader reference matches different users by id and by name"
            );
        }
    }
}
