mod app;
mod client;
mod message;
mod model;
mod views;

pub fn main() -> iced::Result {
    app::run()
}
