use super::SourceImage;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use iced::widget::image::Handle;
use std::path::{Path, PathBuf};

pub fn load_source_image(path: PathBuf) -> Result<SourceImage, String> {
    log::info!("Loading image file: {}", path.display());
    let bytes = std::fs::read(&path).map_err(|err| {
        let message = format!("{}: failed to read image file ({err})", path.display());
        log::error!("{message}");
        message
    })?;

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let data_uri = format!("data:{};base64,{}", mime_for(&path), STANDARD.encode(&bytes));

    Ok(SourceImage {
        file_name,
        data_uri,
        handle: Handle::from_bytes(bytes),
    })
}

fn mime_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("bmp") => "image/bmp",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
