//! Upload state machine.
//!
//! The selection and its lifecycle live in a plain value so the whole
//! workflow can be exercised without a DOM:
//!
//! ```text
//!            select(pdfs)             begin_submit()
//!   Idle ───────────────▶ Selected ───────────────▶ Submitting
//!    ▲   ◀─── remove(last) ──┘  ▲                       │
//!    │                          └── finish(failure) ────┤
//!    └───────────────────────────── finish(success) ────┘
//! ```
//!
//! Every transition borrows the current state and returns the next one.

use async_trait::async_trait;

use crate::types::{SubmitOutcome, UploadError};

/// Anything the widget can hold in its selection.
pub trait PendingFile: Clone {
    fn name(&self) -> String;
    fn size(&self) -> u64;
}

impl PendingFile for web_sys::File {
    fn name(&self) -> String {
        web_sys::File::name(self)
    }

    fn size(&self) -> u64 {
        web_sys::Blob::size(self) as u64
    }
}

/// Case-insensitive `.pdf` extension check.
pub fn is_pdf(name: &str) -> bool {
    name.to_lowercase().ends_with(".pdf")
}

#[derive(Clone, Debug, PartialEq)]
pub enum UploadState<F> {
    /// Nothing selected, submit disabled.
    Idle,
    /// At least one PDF selected, submit enabled.
    Selected(Vec<F>),
    /// Request in flight with these files.
    Submitting(Vec<F>),
}

impl<F> Default for UploadState<F> {
    fn default() -> Self {
        UploadState::Idle
    }
}

impl<F: PendingFile> UploadState<F> {
    fn from_files(files: Vec<F>) -> Self {
        if files.is_empty() {
            UploadState::Idle
        } else {
            UploadState::Selected(files)
        }
    }

    /// Replace the selection with the PDFs among `files`, keeping their order.
    pub fn select(&self, files: impl IntoIterator<Item = F>) -> Self {
        if self.is_submitting() {
            return self.clone();
        }
        let pdfs = files.into_iter().filter(|f| is_pdf(&f.name())).collect();
        Self::from_files(pdfs)
    }

    /// Drop the file at `index`. Out of range is a no-op.
    pub fn remove(&self, index: usize) -> Self {
        match self {
            UploadState::Selected(files) if index < files.len() => {
                let mut files = files.clone();
                files.remove(index);
                Self::from_files(files)
            }
            _ => self.clone(),
        }
    }

    /// Move to `Submitting`, or explain why the batch cannot be sent.
    pub fn begin_submit(&self) -> Result<Self, UploadError> {
        match self {
            UploadState::Idle => Err(UploadError::EmptySelection),
            UploadState::Submitting(_) => Err(UploadError::AlreadySubmitting),
            UploadState::Selected(files) => Ok(UploadState::Submitting(files.clone())),
        }
    }

    /// Leave `Submitting`: a completed batch clears the selection,
    /// anything else keeps it for a retry.
    pub fn finish(&self, outcome: &SubmitOutcome) -> Self {
        match self {
            UploadState::Submitting(files) => {
                if outcome.is_success() {
                    UploadState::Idle
                } else {
                    Self::from_files(files.clone())
                }
            }
            _ => self.clone(),
        }
    }

    pub fn files(&self) -> &[F] {
        match self {
            UploadState::Idle => &[],
            UploadState::Selected(files) | UploadState::Submitting(files) => files,
        }
    }

    pub fn len(&self) -> usize {
        self.files().len()
    }

    pub fn is_empty(&self) -> bool {
        self.files().is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, UploadState::Submitting(_))
    }

    pub fn can_submit(&self) -> bool {
        matches!(self, UploadState::Selected(_))
    }

    // -------------------------------------------------------------------------
    // Display copy
    // -------------------------------------------------------------------------

    /// Main line of the drop zone.
    pub fn drop_zone_text(&self) -> String {
        match self.len() {
            0 => "Drag & drop your PDF files here".to_string(),
            n => format!("{} file{} selected", n, plural(n)),
        }
    }

    /// Secondary line of the drop zone.
    pub fn drop_zone_hint(&self) -> &'static str {
        if self.is_empty() {
            "or click to browse for multiple files"
        } else {
            "Click to change selection"
        }
    }

    /// Title and body of the progress panel shown while submitting.
    pub fn progress_copy(&self) -> (String, String) {
        let files = self.files();
        let n = files.len();
        let title = format!("🔄 Processing {} Document{}", n, plural(n));
        let body = match files {
            [single] => format!("Analyzing {}...", single.name()),
            _ => "Processing files in parallel. This may take several minutes...".to_string(),
        };
        (title, body)
    }
}

fn plural(n: usize) -> &'static str {
    if n > 1 {
        "s"
    } else {
        ""
    }
}

/// Transport used to ship a batch to the processing backend.
#[async_trait(?Send)]
pub trait BatchUploader<F> {
    async fn upload(&self, files: &[F]) -> SubmitOutcome;
}

/// Run one submission from start to finish.
///
/// Returns `Err` without touching `uploader` when the state cannot be
/// submitted. Otherwise `on_submitting` sees the `Submitting` state before
/// the request starts, and the state after `finish` is returned together
/// with the outcome to render.
pub async fn submit_batch<F, U>(
    state: &UploadState<F>,
    uploader: &U,
    on_submitting: impl FnOnce(&UploadState<F>),
) -> Result<(UploadState<F>, SubmitOutcome), UploadError>
where
    F: PendingFile,
    U: BatchUploader<F> + ?Sized,
{
    let submitting = state.begin_submit()?;
    on_submitting(&submitting);
    let outcome = uploader.upload(submitting.files()).await;
    Ok((submitting.finish(&outcome), outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BatchSummary;
    use std::cell::Cell;

    #[derive(Clone, Debug, PartialEq)]
    struct TestFile {
        name: &'static str,
        size: u64,
    }

    impl PendingFile for TestFile {
        fn name(&self) -> String {
            self.name.to_string()
        }

        fn size(&self) -> u64 {
            self.size
        }
    }

    fn file(name: &'static str) -> TestFile {
        TestFile { name, size: 1024 }
    }

    fn names(state: &UploadState<TestFile>) -> Vec<&'static str> {
        state.files().iter().map(|f| f.name).collect()
    }

    fn completed() -> SubmitOutcome {
        SubmitOutcome::Completed(BatchSummary {
            total_files: 2,
            successful_files: 2,
            failed_files: 0,
            total_processing_time: 3.5,
            dashboard_url: Some("/reports/dashboard.html".into()),
        })
    }

    struct CountingUploader {
        calls: Cell<usize>,
        outcome: SubmitOutcome,
    }

    #[async_trait(?Send)]
    impl BatchUploader<TestFile> for CountingUploader {
        async fn upload(&self, files: &[TestFile]) -> SubmitOutcome {
            assert!(!files.is_empty());
            self.calls.set(self.calls.get() + 1);
            self.outcome.clone()
        }
    }

    #[test]
    fn test_select_keeps_pdfs_in_order() {
        let state = UploadState::Idle.select(vec![
            file("8130-3.PDF"),
            file("notes.txt"),
            file("easa_form1.pdf"),
            file("scan.pdf.zip"),
            file("Invoice.Pdf"),
        ]);

        assert_eq!(names(&state), vec!["8130-3.PDF", "easa_form1.pdf", "Invoice.Pdf"]);
        assert!(state.can_submit());
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let state = UploadState::Idle
            .select(vec![file("a.pdf"), file("b.pdf")])
            .select(vec![file("c.pdf")]);
        assert_eq!(names(&state), vec!["c.pdf"]);

        let cleared = state.select(vec![file("readme.md")]);
        assert_eq!(cleared, UploadState::Idle);
        assert!(!cleared.can_submit());
    }

    #[test]
    fn test_remove_preserves_relative_order() {
        let state = UploadState::Idle.select(vec![file("a.pdf"), file("b.pdf"), file("c.pdf")]);

        let removed = state.remove(1);
        assert_eq!(names(&removed), vec!["a.pdf", "c.pdf"]);

        assert_eq!(state.remove(7), state);
        assert_eq!(removed.remove(0).remove(0), UploadState::Idle);
    }

    #[test]
    fn test_empty_selection_never_uploads() {
        let uploader = CountingUploader { calls: Cell::new(0), outcome: completed() };

        let notified = Cell::new(false);

        let result = futures::executor::block_on(submit_batch(&UploadState::Idle, &uploader, |_| {
            notified.set(true)
        }));

        assert_eq!(result.unwrap_err(), UploadError::EmptySelection);
        assert_eq!(uploader.calls.get(), 0);
        assert!(!notified.get());
    }

    #[test]
    fn test_success_clears_selection() {
        let uploader = CountingUploader { calls: Cell::new(0), outcome: completed() };
        let state = UploadState::Idle.select(vec![file("a.pdf"), file("b.pdf")]);

        let mut seen = None;

        let (next, outcome) =
            futures::executor::block_on(submit_batch(&state, &uploader, |s| seen = Some(s.clone())))
                .unwrap();

        assert!(seen.unwrap().is_submitting());
        assert_eq!(uploader.calls.get(), 1);
        assert!(outcome.is_success());
        assert_eq!(next, UploadState::Idle);
        assert!(!next.can_submit());
    }

    #[test]
    fn test_failure_retains_selection() {
        let uploader = CountingUploader {
            calls: Cell::new(0),
            outcome: SubmitOutcome::Rejected("Invalid PDF".into()),
        };
        let state = UploadState::Idle.select(vec![file("a.pdf")]);

        let (next, outcome) =
            futures::executor::block_on(submit_batch(&state, &uploader, |_| {})).unwrap();

        assert_eq!(outcome.failure_message().as_deref(), Some("Invalid PDF"));
        assert_eq!(next, state);
        assert!(next.can_submit());

        let dropped = UploadState::Submitting(vec![file("a.pdf")])
            .finish(&SubmitOutcome::ConnectionError("offline".into()));
        assert_eq!(names(&dropped), vec!["a.pdf"]);
    }

    #[test]
    fn test_submitting_is_locked() {
        let submitting = UploadState::Idle.select(vec![file("a.pdf")]).begin_submit().unwrap();

        assert!(submitting.is_submitting());
        assert!(!submitting.can_submit());
        assert_eq!(submitting.begin_submit(), Err(UploadError::AlreadySubmitting));
        assert_eq!(submitting.select(vec![file("b.pdf")]), submitting);
        assert_eq!(submitting.remove(0), submitting);
    }

    #[test]
    fn test_progress_copy_single_vs_many() {
        let single = UploadState::Submitting(vec![file("form1.pdf")]);
        let (title, body) = single.progress_copy();
        assert_eq!(title, "🔄 Processing 1 Document");
        assert_eq!(body, "Analyzing form1.pdf...");

        let many = UploadState::Submitting(vec![file("a.pdf"), file("b.pdf"), file("c.pdf")]);
        let (title, body) = many.progress_copy();
        assert_eq!(title, "🔄 Processing 3 Documents");
        assert!(body.starts_with("Processing files in parallel"));
    }

    #[test]
    fn test_drop_zone_copy() {
        let idle: UploadState<TestFile> = UploadState::Idle;
        assert_eq!(idle.drop_zone_text(), "Drag & drop your PDF files here");
        assert_eq!(idle.drop_zone_hint(), "or click to browse for multiple files");

        let two = idle.select(vec![file("a.pdf"), file("b.pdf")]);
        assert_eq!(two.drop_zone_text(), "2 files selected");
        assert_eq!(two.remove(0).drop_zone_text(), "1 file selected");
        assert_eq!(two.drop_zone_hint(), "Click to change selection");
    }
}
