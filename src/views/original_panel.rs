use crate::message::Message;
use crate::model::SourceImage;
use iced::widget::{container, text, Image};
use iced::{Alignment, Element, Length};

pub fn original_panel(source: Option<&SourceImage>) -> Element<'static, Message> {
    let content: Element<'static, Message> = if let Some(source) = source {
        Image::new(source.handle.clone())
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        text("Upload an image to get started").into()
    };

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(super::PANEL_HEIGHT))
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into()
}
