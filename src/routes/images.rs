//! Image listing route.
//!
//! `GET /api/images` lists the configured images directory and returns the
//! public path of every file with an image extension. Order is by file name
//! so the gallery is stable between requests.
//!
//! ERROR HANDLING
//! ==============
//! A directory that cannot be read is logged with its cause and reported to
//! the caller as a fixed 500 JSON body; the cause is not exposed.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use std::path::{Path, PathBuf};

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::state::AppState;

/// Extensions recognised as images, compared case-insensitively.
const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];
const READ_ERROR_MESSAGE: &str = "Error reading the images directory.";

#[derive(Debug, Serialize)]
pub struct ImageList {
    pub images: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum ImagesError {
    #[error("failed to read images directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IntoResponse for ImagesError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "image listing failed");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorBody { error: READ_ERROR_MESSAGE })).into_response()
    }
}

/// `true` if `name` ends in `.jpg`, `.jpeg`, `.png` or `.gif` (any case).
pub fn is_image_file(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| IMAGE_EXTENSIONS.iter().any(|known| ext.eq_ignore_ascii_case(known)))
}

/// Public paths of the image files in `dir`, sorted by file name.
///
/// # Errors
///
/// Returns [`ImagesError::ReadDir`] if the directory cannot be listed.
pub async fn list_image_paths(dir: &Path, base_path: &str) -> Result<Vec<String>, ImagesError> {
    let read_error = |source| ImagesError::ReadDir { path: dir.to_path_buf(), source };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_error)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_error)? {
        // Non-UTF-8 names cannot be expressed as URL paths here.
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_image_file(&name) {
            names.push(name);
        }
    }
    names.sort();

    let base = base_path.trim_end_matches('/');
    Ok(names.into_iter().map(|name| format!("{base}/{name}")).collect())
}

/// `GET /api/images` — list images in the configured directory.
pub async fn list_images(State(state): State<AppState>) -> Result<Json<ImageList>, ImagesError> {
    let images = list_image_paths(&state.config.images_dir, &state.config.images_base_path).await?;
    tracing::debug!(count = images.len(), "listed images");
    Ok(Json(ImageList { images }))
}
