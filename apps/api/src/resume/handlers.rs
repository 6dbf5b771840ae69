use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::resume::document::{ContactInfo, ResumeDocument};

/// POST /api/v1/resume/pdf
/// Intentionally a stub: PDFs are rendered client-side. Always succeeds,
/// consumes no body.
pub async fn handle_render_pdf() -> Json<Value> {
    Json(json!({
        "message": "Server-side PDF rendering is disabled. Resumes are rendered client-side."
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumePreviewRequest {
    pub content: String,
    #[serde(default)]
    pub contact_info: ContactInfo,
    pub name: Option<String>,
}

/// POST /api/v1/resume/preview
/// Parses the supplied content and returns the document tree the
/// client-side renderer consumes.
pub async fn handle_preview(Json(req): Json<ResumePreviewRequest>) -> Json<ResumeDocument> {
    Json(ResumeDocument::build(
        &req.content,
        req.contact_info,
        req.name,
    ))
}
