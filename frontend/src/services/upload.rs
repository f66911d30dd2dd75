//! HTTP service shipping a PDF batch to the processing backend.

use async_trait::async_trait;
use gloo_net::http::Request;
use web_sys::{File, FormData};

use super::js_error_message;
use crate::config::{PROCESS_BATCH_ENDPOINT, UPLOAD_FIELD_NAME};
use crate::state::{BatchUploader, PendingFile};
use crate::types::{AppError, AppResult, BatchResponse, SubmitOutcome};

/// Feed `append` one `(field, file, filename)` part per file, in order.
fn append_parts<F, A>(files: &[F], mut append: A) -> AppResult<()>
where
    F: PendingFile,
    A: FnMut(&str, &F, &str) -> AppResult<()>,
{
    files
        .iter()
        .try_for_each(|file| append(UPLOAD_FIELD_NAME, file, &file.name()))
}

/// Build the multipart body: one `files` part per PDF.
fn build_form(files: &[File]) -> AppResult<FormData> {
    let form_data = FormData::new().map_err(|e| AppError::Dom(js_error_message(&e)))?;

    append_parts(files, |field, file, filename| {
        form_data
            .append_with_blob_and_filename(field, file, filename)
            .map_err(|e| AppError::Dom(js_error_message(&e)))
    })?;

    Ok(form_data)
}

/// POST `files` to the batch endpoint and parse whatever JSON comes back.
///
/// The body is parsed regardless of the HTTP status: the backend reports
/// application failures as `success: false` payloads.
pub async fn process_pdf_batch(files: &[File]) -> AppResult<BatchResponse> {
    let form_data = build_form(files)?;

    let request = Request::post(PROCESS_BATCH_ENDPOINT)
        .body(form_data)
        .map_err(|e| AppError::Connection(e.to_string()))?;

    let response = request
        .send()
        .await
        .map_err(|e| AppError::Connection(e.to_string()))?;

    log::debug!("📬 Batch endpoint answered {}", response.status());

    response
        .json::<BatchResponse>()
        .await
        .map_err(|e| AppError::Connection(e.to_string()))
}

/// [`BatchUploader`] backed by `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpUploader;

#[async_trait(?Send)]
impl BatchUploader<File> for HttpUploader {
    async fn upload(&self, files: &[File]) -> SubmitOutcome {
        log::info!("📤 Uploading {} PDF file(s)...", files.len());
        let outcome = SubmitOutcome::from(process_pdf_batch(files).await);

        match &outcome {
            SubmitOutcome::Completed(summary) => log::info!(
                "✅ Batch complete: {}/{} successful",
                summary.successful_files,
                summary.total_files
            ),
            SubmitOutcome::Rejected(message) => log::warn!("❌ Batch rejected: {}", message),
            SubmitOutcome::ConnectionError(error) => log::error!("❌ Connection error: {}", error),
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct TestFile(&'static str);

    impl PendingFile for TestFile {
        fn name(&self) -> String {
            self.0.to_string()
        }

        fn size(&self) -> u64 {
            1024
        }
    }

    #[test]
    fn test_one_files_part_per_pdf() {
        let files = [TestFile("8130-3.pdf"), TestFile("form1.pdf"), TestFile("release.pdf")];
        let mut parts = Vec::new();

        append_parts(&files, |field, _, filename| {
            parts.push((field.to_string(), filename.to_string()));
            Ok(())
        })
        .unwrap();

        assert_eq!(
            parts,
            vec![
                ("files".to_string(), "8130-3.pdf".to_string()),
                ("files".to_string(), "form1.pdf".to_string()),
                ("files".to_string(), "release.pdf".to_string()),
            ]
        );
    }

    #[test]
    fn test_append_failure_stops_the_form() {
        let files = [TestFile("a.pdf"), TestFile("b.pdf")];
        let mut seen = 0;

        let result = append_parts(&files, |_, _, _| {
            seen += 1;
            Err(AppError::Dom("append failed".to_string()))
        });

        assert!(result.is_err());
        assert_eq!(seen, 1);
    }
}
