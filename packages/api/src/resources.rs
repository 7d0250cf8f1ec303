//! Resource browsing, uploading, and the like/bookmark toggles.

use reqwest::multipart;

use crate::client::Client;
use crate::error::ApiError;
use crate::models::{
    BookmarkList, BookmarkResponse, LikeResponse, Resource, ResourceList, ResourceQuery,
    UploadRequest,
};

impl Client {
    /// `GET /resources` — approved resources matching the filters.
    pub async fn list_resources(&self, query: &ResourceQuery) -> Result<Vec<Resource>, ApiError> {
        let list: ResourceList = self
            .get_json_query("/resources", &query.to_query_pairs())
            .await?;
        Ok(list.resources)
    }

    /// `GET /resources/user/my-uploads` — the caller's own uploads in every
    /// moderation state.
    pub async fn my_uploads(&self) -> Result<Vec<Resource>, ApiError> {
        let list: ResourceList = self.get_json("/resources/user/my-uploads").await?;
        Ok(list.resources)
    }

    /// `GET /resources/user/bookmarks`
    pub async fn bookmarked_resources(&self) -> Result<Vec<Resource>, ApiError> {
        let list: BookmarkList = self.get_json("/resources/user/bookmarks").await?;
        Ok(list.bookmarks)
    }

    /// `POST /resources/{id}/like` — returns the authoritative liked state
    /// and count for reconciliation.
    pub async fn toggle_like(&self, resource_id: &str) -> Result<LikeResponse, ApiError> {
        self.post_empty(&format!("/resources/{resource_id}/like"))
            .await
    }

    /// `POST /resources/{id}/bookmark`
    pub async fn toggle_bookmark(&self, resource_id: &str) -> Result<BookmarkResponse, ApiError> {
        self.post_empty(&format!("/resources/{resource_id}/bookmark"))
            .await
    }

    /// `POST /resources/upload` — multipart: metadata fields plus the PDF
    /// bytes. The new resource enters the pending moderation queue.
    pub async fn upload_resource(&self, upload: UploadRequest) -> Result<(), ApiError> {
        let file = multipart::Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str("application/pdf")?;
        let form = multipart::Form::new()
            .text("title", upload.title)
            .text("description", upload.description)
            .text("branch", upload.branch.as_str())
            .text("semester", upload.semester.to_string())
            .text("subject", upload.subject)
            .text("type", upload.kind.as_str())
            .part("file", file);
        self.post_multipart("/resources/upload", form).await
    }

    /// `GET /files/{fileId}` — raw file bytes, credential attached.
    pub async fn download_file(&self, file_id: &str) -> Result<Vec<u8>, ApiError> {
        self.get_bytes(&format!("/files/{file_id}")).await
    }
}
