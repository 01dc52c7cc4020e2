use crate::client::{self, ProcessedImage};
use crate::message::Message;
use crate::model::loader::load_source_image;
use crate::model::SourceImage;
use crate::views::{original_panel, processed_panel};
use iced::widget::text::Wrapping;
use iced::widget::{button, column, container, text};
use iced::{application, Alignment, Element, Length, Task, Theme};
use rfd::AsyncFileDialog;

const APP_TITLE: &str = "Imagelift";
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "webp"];

pub fn run() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    application(APP_TITLE, App::update, App::view)
        .theme(App::theme)
        .run()
}

#[derive(Default)]
pub struct App {
    original: Option<SourceImage>,
    processed: Option<ProcessedImage>,
    processing: bool,
    last_error: Option<String>,
}

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::PickImage => Task::perform(
                async {
                    AsyncFileDialog::new()
                        .add_filter("Images", IMAGE_EXTENSIONS)
                        .pick_file()
                        .await
                        .map(|handle| load_source_image(handle.path().to_path_buf()))
                },
                Message::ImageLoaded,
            ),
            Message::ImageLoaded(None) => {
                // Cancelled dialog: nothing loaded, nothing failed.
                self.last_error = None;
                Task::none()
            }
            Message::ImageLoaded(Some(result)) => {
                match result {
                    Ok(source) => {
                        self.original = Some(source);
                        self.last_error = None;
                    }
                    Err(err) => self.last_error = Some(err),
                }
                Task::none()
            }
            Message::Convert => {
                // The button is disabled while a request is in flight or no
                // image is selected; re-check here so a stray message cannot
                // start a second request.
                let Some(source) = self.original.as_ref() else {
                    return Task::none();
                };
                if self.processing {
                    return Task::none();
                }

                self.processing = true;
                let data_uri = source.data_uri.clone();
                Task::perform(
                    async move {
                        client::process_image(data_uri)
                            .await
                            .map_err(|err| err.to_string())
                    },
                    Message::ConversionFinished,
                )
            }
            Message::ConversionFinished(result) => {
                self.processing = false;
                match result {
                    Ok(processed) => {
                        self.processed = Some(processed);
                        self.last_error = None;
                    }
                    Err(err) => {
                        log::error!("Image processing failed: {err}");
                        self.last_error = Some(err);
                    }
                }
                Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let mut upload_column = column![
            original_panel(self.original.as_ref()),
            button("Upload image").on_press(Message::PickImage),
        ]
        .spacing(16)
        .align_x(Alignment::Center);

        if let Some(source) = &self.original {
            upload_column = upload_column.push(text(&source.file_name).size(14));
        }

        let upload_section = container(upload_column).padding(16).width(Length::Fill);

        let convert_button = button(text(self.convert_label()))
            .on_press_maybe(self.can_convert().then_some(Message::Convert));

        let convert_section = container(
            column![processed_panel(self.processed.as_ref()), convert_button]
                .spacing(16)
                .align_x(Alignment::Center),
        )
        .padding(16)
        .width(Length::Fill);

        let mut content = column![upload_section, convert_section]
            .padding(20)
            .spacing(20)
            .width(Length::Fill);

        if let Some(error) = &self.last_error {
            content = content.push(text(error).size(16).wrapping(Wrapping::Word));
        }

        content.into()
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn can_convert(&self) -> bool {
        self.original.is_some() && !self.processing
    }

    fn convert_label(&self) -> &'static str {
        if self.processing {
            "Processing…"
        } else {
            "Convert image"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::PNG_DATA_URI_PREFIX;
    use iced::widget::image::Handle;

    fn source_fixture() -> SourceImage {
        SourceImage {
            file_name: "photo.png".to_string(),
            data_uri: "data:image/png;base64,aGVsbG8=".to_string(),
            handle: Handle::from_bytes(vec![1u8, 2, 3]),
        }
    }

    fn processed_fixture(payload: &str) -> ProcessedImage {
        ProcessedImage {
            data_uri: format!("{PNG_DATA_URI_PREFIX}{payload}"),
            handle: Handle::from_bytes(vec![4u8, 5, 6]),
        }
    }

    fn app_with_source() -> App {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Some(Ok(source_fixture()))));
        app
    }

    #[test]
    fn convert_is_disabled_without_a_source_image() {
        let app = App::default();
        assert!(!app.can_convert());
        assert_eq!(app.convert_label(), "Convert image");
    }

    #[test]
    fn loading_a_source_image_enables_convert() {
        let app = app_with_source();
        assert!(app.can_convert());
        assert_eq!(app.original.as_ref().map(|s| s.file_name.as_str()), Some("photo.png"));
    }

    #[test]
    fn cancelled_file_dialog_changes_nothing() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(None));
        assert!(app.original.is_none());
        assert!(app.last_error.is_none());
    }

    #[test]
    fn cancelled_file_dialog_clears_a_stale_error() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Some(Err("read failed".to_string()))));
        let _ = app.update(Message::ImageLoaded(None));
        assert!(app.last_error.is_none());
    }

    #[test]
    fn failed_file_load_is_surfaced() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Some(Err("read failed".to_string()))));
        assert!(app.original.is_none());
        assert_eq!(app.last_error.as_deref(), Some("read failed"));
    }

    #[test]
    fn convert_without_a_source_image_is_a_noop() {
        let mut app = App::default();
        let _ = app.update(Message::Convert);
        assert!(!app.processing);
    }

    #[test]
    fn convert_sets_the_processing_flag() {
        let mut app = app_with_source();
        let _ = app.update(Message::Convert);
        assert!(app.processing);
        assert!(!app.can_convert());
        assert_eq!(app.convert_label(), "Processing…");
    }

    #[test]
    fn convert_while_processing_is_a_noop() {
        let mut app = app_with_source();
        let _ = app.update(Message::Convert);
        let _ = app.update(Message::Convert);
        assert!(app.processing);
        assert!(app.processed.is_none());
    }

    #[test]
    fn successful_conversion_stores_the_processed_image() {
        let mut app = app_with_source();
        let _ = app.update(Message::Convert);
        let _ = app.update(Message::ConversionFinished(Ok(processed_fixture("abc123"))));

        assert!(!app.processing);
        assert!(app.can_convert());
        assert_eq!(
            app.processed.as_ref().map(|p| p.data_uri.as_str()),
            Some("data:image/png;base64,abc123")
        );
        assert!(app.last_error.is_none());
    }

    #[test]
    fn failed_conversion_resets_the_flag_and_keeps_the_previous_result() {
        let mut app = app_with_source();
        let _ = app.update(Message::ConversionFinished(Ok(processed_fixture("first"))));

        let _ = app.update(Message::Convert);
        let _ = app.update(Message::ConversionFinished(Err("connection refused".to_string())));

        assert!(!app.processing);
        assert_eq!(
            app.processed.as_ref().map(|p| p.data_uri.as_str()),
            Some(format!("{PNG_DATA_URI_PREFIX}first").as_str())
        );
        assert_eq!(app.last_error.as_deref(), Some("connection refused"));
    }

    #[test]
    fn replacing_the_source_image_clears_the_last_error() {
        let mut app = App::default();
        let _ = app.update(Message::ImageLoaded(Some(Err("read failed".to_string()))));
        let _ = app.update(Message::ImageLoaded(Some(Ok(source_fixture()))));
        assert!(app.last_error.is_none());
        assert!(app.original.is_some());
    }
}
