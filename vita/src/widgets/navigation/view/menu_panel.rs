use iced::widget::text::Wrapping;
use iced::widget::{Space, column, container, row, scrollable, svg, text};
use iced::{Element, Length, alignment};
use vita_ui_menu::{MenuRowContext, MenuView};

use crate::icons::section_icon;
use crate::style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::navigation::event::NavigationEvent;
use crate::widgets::navigation::model::NavigationViewModel;

const HEADER_TITLE: &str = "Résumé";
const HEADER_SUBTITLE: &str = "Jump to a section";
const HEADER_TITLE_SIZE: f32 = 18.0;
const HEADER_SUBTITLE_SIZE: f32 = 12.0;
const HEADER_PADDING: f32 = 16.0;
const HEADER_SPACING: f32 = 2.0;

const ROW_HEIGHT: f32 = 30.0;
const CHILD_ROW_HEIGHT: f32 = 40.0;
const ROW_FONT_SIZE: f32 = 13.0;
const CAPTION_FONT_SIZE: f32 = 11.0;
const ROW_PADDING_X: f32 = 8.0;
const ROW_SPACING: f32 = 8.0;
const ROW_ICON_SIZE: f32 = 15.0;
const MENU_INDENT: f32 = 18.0;
const MENU_TOGGLE_WIDTH: f32 = 16.0;
const MENU_ROW_GAP: f32 = 2.0;

const PANEL_PADDING_VERTICAL: f32 = 8.0;

const EXPANDED_MARKER: &str = "▼";
const COLLAPSED_MARKER: &str = "▶";

/// Props for the navigation menu panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuPanelProps<'a> {
    pub(crate) vm: NavigationViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the sidebar menu: header and the nested section tree.
pub(crate) fn view(
    props: MenuPanelProps<'_>,
) -> Element<'_, NavigationEvent, iced::Theme, iced::Renderer> {
    let palette = props.theme.theme.iced_palette();
    let row_palette = palette.clone();
    let toggle_color = palette.dim_foreground;

    let menu = MenuView::new(props.vm.nodes, props.vm.expanded, move |context| {
        menu_row(context, &row_palette)
    })
    .active(props.vm.active)
    .hovered(props.vm.hovered)
    .on_activate(NavigationEvent::RowPressed)
    .on_hover(NavigationEvent::RowHovered)
    .row_style({
        let palette = palette.clone();
        move |context| {
            style::menu_row_style(&palette, context.is_active, context.is_hovered)
        }
    })
    .toggle_content(move |context| {
        let marker = if context.is_expanded {
            EXPANDED_MARKER
        } else {
            COLLAPSED_MARKER
        };
        text(marker).size(CAPTION_FONT_SIZE).color(toggle_color).into()
    })
    .indent_width(MENU_INDENT)
    .toggle_width(MENU_TOGGLE_WIDTH)
    .spacing(MENU_ROW_GAP)
    .view();

    let body = scrollable(menu)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::thin_scroll_style(palette.clone()));

    let content = column![header(palette), body]
        .width(Length::Fill)
        .height(Length::Fill);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding([PANEL_PADDING_VERTICAL, 0.0])
        .style(style::menu_panel_style(props.theme))
        .into()
}

fn header<'a>(
    palette: &IcedColorPalette,
) -> Element<'a, NavigationEvent, iced::Theme, iced::Renderer> {
    let title = text(HEADER_TITLE)
        .size(HEADER_TITLE_SIZE)
        .color(palette.foreground)
        .wrapping(Wrapping::None);
    let subtitle = text(HEADER_SUBTITLE)
        .size(HEADER_SUBTITLE_SIZE)
        .color(palette.dim_foreground)
        .wrapping(Wrapping::None);

    container(column![title, subtitle].spacing(HEADER_SPACING))
        .width(Length::Fill)
        .padding(HEADER_PADDING)
        .into()
}

fn menu_row<'a>(
    context: &MenuRowContext<'a>,
    palette: &IcedColorPalette,
) -> Element<'a, NavigationEvent, iced::Theme, iced::Renderer> {
    let node = context.entry.node;
    let foreground = palette.foreground;
    let accent = palette.accent;
    let is_active = context.is_active;

    let icon: Element<'a, NavigationEvent, iced::Theme, iced::Renderer> =
        match node.icon().and_then(section_icon) {
            Some(handle) => svg::Svg::new(handle)
                .width(Length::Fixed(ROW_ICON_SIZE))
                .height(Length::Fixed(ROW_ICON_SIZE))
                .style(move |_, _| svg::Style {
                    color: Some(if is_active { accent } else { foreground }),
                })
                .into(),
            None => Space::new().into(),
        };

    let label = text(node.label())
        .size(ROW_FONT_SIZE)
        .color(foreground)
        .wrapping(Wrapping::None);

    let (labels, height) = match node.caption() {
        Some(caption) => {
            let caption = text(caption)
                .size(CAPTION_FONT_SIZE)
                .color(palette.dim_foreground)
                .wrapping(Wrapping::None);
            (
                Element::from(column![label, caption].spacing(1.0)),
                CHILD_ROW_HEIGHT,
            )
        },
        None => (Element::from(label), ROW_HEIGHT),
    };

    let content = row![icon, labels]
        .spacing(ROW_SPACING)
        .align_y(alignment::Vertical::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding([0.0, ROW_PADDING_X])
        .align_y(alignment::Vertical::Center)
        .into()
}
