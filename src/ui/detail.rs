// SPDX-License-Identifier: MPL-2.0
//! Detail screen showing a single slide enlarged.

use crate::i18n::fluent::I18n;
use crate::media;
use crate::ui::design_tokens::{spacing, typography};
use iced::widget::image::{Handle, Image};
use iced::{
    alignment::Horizontal,
    widget::{button, text, Column, Container},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the detail screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Messages emitted by the detail screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Back,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Back,
}

/// State of the detail screen, built from the handed-off identifier.
#[derive(Debug, Clone)]
pub struct State {
    image: Option<String>,
    handle: Option<Handle>,
}

impl State {
    /// Receives the selected identifier. `None`, or an identifier with no
    /// asset, renders an empty screen.
    #[must_use]
    pub fn new(image: Option<String>) -> Self {
        let handle = image.as_deref().and_then(media::resolve);
        Self { image, handle }
    }

    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

    #[must_use]
    pub fn has_image(&self) -> bool {
        self.handle.is_some()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Back => Event::Back,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let back_button =
            button(text(format!("← {}", ctx.i18n.tr("detail-back-button"))).size(typography::BODY))
                .on_press(Message::Back);

        let picture: Element<'a, Message> = match &self.handle {
            Some(handle) => Image::new(handle.clone())
                .content_fit(ContentFit::Contain)
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
            None => Container::new(text(""))
                .width(Length::Fill)
                .height(Length::Fill)
                .into(),
        };

        Column::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .spacing(spacing::MD)
            .padding(spacing::MD)
            .align_x(Horizontal::Left)
            .push(back_button)
            .push(picture)
            .into()
    }
}
