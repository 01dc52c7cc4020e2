use crate::client::ProcessedImage;
use crate::message::Message;
use iced::widget::{container, text, Image};
use iced::{Alignment, Element, Length};

pub fn processed_panel(processed: Option<&ProcessedImage>) -> Element<'static, Message> {
    let content: Element<'static, Message> = if let Some(processed) = processed {
        Image::new(processed.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        text("Press convert to process the uploaded image").into()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(super::PANEL_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
