use iced::widget::image::Handle;

/// A user-selected image, kept both as a displayable handle for the
/// preview panel and as the data URI submitted to the processing service.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub file_name: String,
    pub data_uri: String,
    pub handle: Handle,
}
