use crate::client::ProcessedImage;
use crate::model::SourceImage;

#[derive(Debug, Clone)]
pub enum Message {
    PickImage,
    /// `None` when the file dialog was cancelled.
    ImageLoaded(Option<Result<SourceImage, String>>),
    Convert,
    ConversionFinished(Result<ProcessedImage, String>),
}
