pub mod download;
pub mod upload;

pub use download::{handle_download, DownloadRequest, __path_handle_download};
pub use upload::{handle_upload, UploadForm, UploadResponse, __path_handle_upload};
