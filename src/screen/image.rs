//! Image-field preview state machine.
//!
//! Form screens with media fields show a local preview immediately on file
//! selection, independent of upload completion, then swap the preview to the
//! returned remote URL once the upload resolves. A failed upload reverts the
//! preview to the prior persisted value (or nothing, for create flows).

/// What the preview is currently showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewSource {
    /// A local object URL for a just-selected file, upload still pending
    Local(String),
    /// A server-persisted URL
    Remote(String),
}

/// One image field of a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageField {
    persisted: Option<String>,
    preview: Option<PreviewSource>,
    uploading: bool,
}

impl ImageField {
    /// Starts from the entity's persisted image (None for create flows).
    #[must_use]
    pub fn new(persisted: Option<String>) -> Self {
        let preview = persisted.clone().map(PreviewSource::Remote);
        Self {
            persisted,
            preview,
            uploading: false,
        }
    }

    /// File selected: show the local preview right away and mark the upload
    /// as in flight.
    pub fn select(&mut self, local_url: impl Into<String>) {
        self.preview = Some(PreviewSource::Local(local_url.into()));
        self.uploading = true;
    }

    /// Upload resolved: swap the preview to the remote URL and persist it.
    pub fn upload_succeeded(&mut self, remote_url: impl Into<String>) {
        let url = remote_url.into();
        self.persisted = Some(url.clone());
        self.preview = Some(PreviewSource::Remote(url));
        self.uploading = false;
    }

    /// Upload failed: fall back to whatever was persisted before.
    pub fn upload_failed(&mut self) {
        self.preview = self.persisted.clone().map(PreviewSource::Remote);
        self.uploading = false;
    }

    /// What the form should render right now.
    #[must_use]
    pub const fn preview(&self) -> Option<&PreviewSource> {
        self.preview.as_ref()
    }

    /// The URL to put in the entity draft (only ever a persisted one).
    #[must_use]
    pub fn persisted(&self) -> Option<&str> {
        self.persisted.as_deref()
    }

    /// Whether an upload is in flight (submit buttons disable on this).
    #[must_use]
    pub const fn is_uploading(&self) -> bool {
        self.uploading
    }
}
