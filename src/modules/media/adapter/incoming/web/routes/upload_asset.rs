use actix_multipart::form::{bytes::Bytes, text::Text, MultipartForm};
use actix_web::{post, web, HttpResponse, Responder};
use serde::Serialize;

use crate::media::application::use_cases::upload_asset::{UploadAssetData, UploadAssetError};
use crate::session::adapter::incoming::web::extractors::AdminSession;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Folder used when the form does not say what kind of asset this is.
const DEFAULT_FOLDER: &str = "portfolio";

#[derive(Debug, MultipartForm)]
pub struct UploadForm {
    pub file: Bytes,
    /// Destination hint (`projects`, `certificates`, `resume`, ...).
    #[multipart(rename = "type")]
    pub kind: Option<Text<String>>,
}

// The upload endpoint answers `{success, url}` rather than the data
// envelope; the admin UI embeds the URL in a follow-up entity payload.
#[derive(Serialize)]
struct UploadReply {
    success: bool,
    url: String,
}

#[post("/api/upload")]
pub async fn upload_asset_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
    MultipartForm(form): MultipartForm<UploadForm>,
) -> impl Responder {
    let folder = form
        .kind
        .map(|t| t.into_inner())
        .filter(|k| !k.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_FOLDER.to_string());

    let filename = form
        .file
        .file_name
        .clone()
        .unwrap_or_else(|| "upload".to_string());

    let upload = UploadAssetData {
        bytes: form.file.data.to_vec(),
        filename,
        folder,
    };

    match data.upload_asset_use_case.execute(upload).await {
        Ok(url) => HttpResponse::Ok().json(UploadReply { success: true, url }),
        Err(UploadAssetError::EmptyFile) => ApiResponse::bad_request("File is required"),
        Err(UploadAssetError::StoreError(msg)) => {
            tracing::error!("asset upload failed: {msg}");
            ApiResponse::internal_error(&msg)
        }
    }
}
