use iced::widget::{
    Column, Space, button, center, column, container, mouse_area, opaque,
    row, scrollable, stack, svg, text,
};
use iced::{Element, Length, alignment};

use super::carousel::{self, CarouselProps};
use super::tech_chart::{self, TechChartProps};
use crate::components::primitive::icon_button::{
    self, IconButtonProps, IconButtonVariant,
};
use crate::icons;
use crate::style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::project_detail::event::ProjectDetailEvent;
use crate::widgets::project_detail::model::ProjectDetailViewModel;

const PANEL_MAX_WIDTH: f32 = 880.0;
const PANEL_MARGIN: f32 = 40.0;
const PANEL_PADDING: f32 = 24.0;
const BODY_SPACING: f32 = 22.0;
const TITLE_SIZE: f32 = 24.0;
const HEADING_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 13.0;
const INFO_LABEL_SIZE: f32 = 11.0;
const CLOSE_BUTTON_SIZE: f32 = 30.0;
const CLOSE_ICON_SIZE: f32 = 16.0;
const LINK_ICON_SIZE: f32 = 14.0;
const BULLET: &str = "•";

/// Props for the project detail overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct OverlayProps<'a> {
    pub(crate) vm: ProjectDetailViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the full-window overlay: dimmed backdrop and the detail panel.
pub(crate) fn view(
    props: OverlayProps<'_>,
) -> Element<'_, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let backdrop_palette = palette.clone();
    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| style::backdrop_style(&backdrop_palette)),
    )
    .on_press(ProjectDetailEvent::BackdropPressed);

    let body = scrollable(
        container(panel_body(props))
            .padding([0.0, PANEL_PADDING])
            .width(Length::Fill),
    )
    .height(Length::Fill)
    .style(style::thin_scroll_style(palette.clone()));

    let panel_palette = palette.clone();
    let panel = container(
        column![header(props), body]
            .spacing(BODY_SPACING / 2.0)
            .padding([PANEL_PADDING, 0.0]),
    )
    .max_width(PANEL_MAX_WIDTH)
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| style::overlay_panel_style(&panel_palette));

    opaque(stack![backdrop, center(opaque(panel)).padding(PANEL_MARGIN)])
}

fn header(
    props: OverlayProps<'_>,
) -> Element<'_, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();

    let close = icon_button::view(IconButtonProps {
        icon: icons::WINDOW_CLOSE,
        theme: props.theme,
        size: CLOSE_BUTTON_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Danger,
    })
    .map(|_| ProjectDetailEvent::CloseRequested);

    row![
        text(&props.vm.detail.name)
            .size(TITLE_SIZE)
            .color(palette.foreground)
            .width(Length::Fill),
        close,
    ]
    .padding([0.0, PANEL_PADDING])
    .align_y(alignment::Vertical::Center)
    .into()
}

fn panel_body(
    props: OverlayProps<'_>,
) -> Element<'_, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let detail = props.vm.detail;

    let mut body = column![
        text(&detail.overview)
            .size(BODY_SIZE + 1.0)
            .color(palette.dim_foreground),
        info_block(
            palette,
            &detail.duration,
            format!("{} people", detail.team_size),
            &detail.role,
        ),
        carousel::view(CarouselProps {
            vm: props.vm,
            theme: props.theme,
        }),
    ]
    .spacing(BODY_SPACING)
    .width(Length::Fill);

    if !detail.description.trim().is_empty() {
        body = body.push(block(
            palette,
            "About",
            text(&detail.description)
                .size(BODY_SIZE)
                .color(palette.foreground)
                .into(),
        ));
    }

    for (title, items) in [
        ("Features", &detail.features),
        ("Challenges", &detail.challenges),
        ("Solutions", &detail.solutions),
        ("Results", &detail.results),
        ("Responsibilities", &detail.responsibilities),
    ] {
        if !items.is_empty() {
            body = body.push(block(palette, title, bullets(palette, items)));
        }
    }

    if !detail.technologies.is_empty() {
        body = body.push(block(
            palette,
            "Technology",
            tech_chart::view(TechChartProps {
                technologies: &detail.technologies,
                theme: props.theme,
            }),
        ));
    }

    let links: Vec<Element<'_, ProjectDetailEvent>> = [
        ("Live demo", detail.demo_url.as_deref()),
        ("Source", detail.github_url.as_deref()),
    ]
    .into_iter()
    .filter_map(|(label, url)| Some(link_button(palette, label, url?)))
    .collect();
    if !links.is_empty() {
        body = body.push(row(links).spacing(BODY_SPACING / 2.0));
    }

    body.push(Space::new().height(PANEL_PADDING)).into()
}

fn info_block<'a>(
    palette: &IcedColorPalette,
    duration: &'a str,
    team: String,
    role: &'a str,
) -> Element<'a, ProjectDetailEvent, iced::Theme, iced::Renderer> {
    let cell = |label: &'a str, value: text::Text<'a>| {
        column![
            text(label)
                .size(INFO_LABEL_SIZE)
                .color(palette.dim_foreground),
            value.size(BODY_SIZE).color(palette.foreground),
        ]
        .spacing(2.0)
        .width(Length::FillPortion(1))
    };

    row![
        cell("Duration", text(duration)),
        cell("Team", text(team)),
        cell("Role", text(role)),
    ]
    .spacing(BODY_SPACING)
    .into()
}

fn block<'a>(
    palette: &IcedColorPalette,
    title: &'a str,
    content: Element<'a, ProjectDetailEvent>,
) -> Element<'a, ProjectDetailEvent> {
    column![
        text(title).size(HEADING_SIZE).color(palette.accent),
        content
    ]
    .spacing(8.0)
    .width(Length::Fill)
    .into()
}

fn bullets<'a>(
    palette: &IcedColorPalette,
    items: &'a [String],
) -> Element<'a, ProjectDetailEvent> {
    Column::with_children(items.iter().map(|item| {
        row![
            text(BULLET).size(BODY_SIZE).color(palette.accent),
            text(item)
                .size(BODY_SIZE)
                .color(palette.foreground)
                .width(Length::Fill),
        ]
        .spacing(8.0)
        .into()
    }))
    .spacing(4.0)
    .into()
}

fn link_button<'a>(
    palette: &IcedColorPalette,
    label: &'a str,
    url: &'a str,
) -> Element<'a, ProjectDetailEvent> {
    let accent = palette.accent;
    let icon = svg(svg::Handle::from_memory(icons::EXTERNAL_LINK))
        .width(Length::Fixed(LINK_ICON_SIZE))
        .height(Length::Fixed(LINK_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(accent),
        });

    button(
        row![text(label).size(BODY_SIZE), icon]
            .spacing(6.0)
            .align_y(alignment::Vertical::Center),
    )
    .padding([6.0, 12.0])
    .on_press(ProjectDetailEvent::LinkPressed(url.to_string()))
    .style(style::link_button_style(palette, false))
    .into()
}
