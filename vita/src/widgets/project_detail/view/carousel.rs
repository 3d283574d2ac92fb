use iced::widget::{Row, button, column, container, row, scrollable, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::fallback_image::{self, FallbackImageProps};
use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps, with_alpha};
use crate::widgets::project_detail::event::ProjectDetailEvent;
use crate::widgets::project_detail::model::ProjectDetailViewModel;

const EMPTY_LABEL: &str = "No screenshots yet";

const MAIN_IMAGE_HEIGHT: f32 = 320.0;
const THUMBNAIL_WIDTH: f32 = 72.0;
const THUMBNAIL_HEIGHT: f32 = 48.0;
const THUMBNAIL_SPACING: f32 = 8.0;
const THUMBNAIL_BORDER: f32 = 2.0;
const NAV_BUTTON_SIZE: f32 = 32.0;
const NAV_ICON_SIZE: f32 = 18.0;
const CAPTION_TITLE_SIZE: f32 = 14.0;
const CAPTION_TEXT_SIZE: f32 = 12.0;
const SECTION_SPACING: f32 = 10.0;

/// Props for the screenshot carousel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CarouselProps<'a> {
    pub(crate) vm: ProjectDetailViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the current screenshot with paging controls and thumbnails.
pub(crate) fn view(
    props: CarouselProps<'_>,
) -> Element<'_, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let Some(current) = vm.current_screenshot() else {
        return empty_placeholder(palette);
    };

    let main_slot = vm.images.slot(&vm.image_source(&current.image_url));
    let main_image = fallback_image::view(FallbackImageProps {
        slot: main_slot,
        alt: &current.alt,
        width: Length::Fill,
        height: Length::Fixed(MAIN_IMAGE_HEIGHT),
        theme: props.theme,
    });

    let count = vm.detail.screenshots.len();
    let stage = row![
        nav_button(props.theme, icons::CHEVRON_LEFT)
            .map(|_| ProjectDetailEvent::PreviousPressed),
        main_image,
        nav_button(props.theme, icons::CHEVRON_RIGHT)
            .map(|_| ProjectDetailEvent::NextPressed),
    ]
    .spacing(SECTION_SPACING)
    .align_y(alignment::Vertical::Center);

    let caption = column![
        text(format!("{} / {count}  {}", vm.index + 1, current.title))
            .size(CAPTION_TITLE_SIZE)
            .color(palette.foreground),
        text(&current.description)
            .size(CAPTION_TEXT_SIZE)
            .color(palette.dim_foreground),
    ]
    .spacing(2.0);

    column![stage, caption, thumbnails(props)]
        .spacing(SECTION_SPACING)
        .width(Length::Fill)
        .into()
}

fn nav_button<'a>(
    theme: ThemeProps<'a>,
    icon: &'static [u8],
) -> Element<'a, IconButtonEvent> {
    icon_button::view(IconButtonProps {
        icon,
        theme,
        size: NAV_BUTTON_SIZE,
        icon_size: NAV_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
}

fn thumbnails(
    props: CarouselProps<'_>,
) -> Element<'_, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let vm = props.vm;
    let palette = props.theme.theme.iced_palette();

    let items = vm.detail.screenshots.iter().enumerate().map(|(index, shot)| {
        let slot = vm.images.slot(&vm.image_source(shot.thumbnail_source()));
        let preview = fallback_image::view(FallbackImageProps {
            slot,
            alt: &shot.alt,
            width: Length::Fixed(THUMBNAIL_WIDTH),
            height: Length::Fixed(THUMBNAIL_HEIGHT),
            theme: props.theme,
        });

        let selected = index == vm.index;
        let accent = palette.accent;
        let idle = with_alpha(palette.overlay, 0.6);

        button(preview)
            .padding(0.0)
            .on_press(ProjectDetailEvent::ThumbnailPressed(index))
            .style(move |_, status| {
                let hovered = matches!(
                    status,
                    button::Status::Hovered | button::Status::Pressed
                );
                button::Style {
                    border: iced::Border {
                        width: THUMBNAIL_BORDER,
                        color: if selected || hovered { accent } else { idle },
                        radius: 4.0.into(),
                    },
                    ..Default::default()
                }
            })
            .into()
    });

    scrollable(Row::with_children(items).spacing(THUMBNAIL_SPACING))
        .direction(scrollable::Direction::Horizontal(
            scrollable::Scrollbar::new().width(4.0).scroller_width(4.0),
        ))
        .width(Length::Fill)
        .into()
}

fn empty_placeholder<'a>(
    palette: &IcedColorPalette,
) -> Element<'a, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let surface = with_alpha(palette.surface, 0.8);
    let border = palette.dim_accent;

    container(
        text(EMPTY_LABEL)
            .size(CAPTION_TITLE_SIZE)
            .color(palette.dim_foreground),
    )
    .width(Length::Fill)
    .height(Length::Fixed(MAIN_IMAGE_HEIGHT / 2.0))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(surface.into()),
        border: iced::Border {
            width: 1.0,
            color: border,
            radius: 6.0.into(),
        },
        ..Default::default()
    })
    .into()
}
