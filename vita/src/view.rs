use iced::widget::{container, row};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::style;
use crate::theme::ThemeProps;
use crate::widgets::navigation::view::menu_panel::{self, MenuPanelProps};
use crate::widgets::project_detail::ProjectDetailCtx;
use crate::widgets::project_detail::view::overlay::{self, OverlayProps};
use crate::widgets::resume::view::resume_page::{self, ResumePageProps};

pub(crate) const SIDEBAR_WIDTH: f32 = 260.0;
const SIDEBAR_SEPARATOR_WIDTH: f32 = 1.0;

pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme_props = ThemeProps::new(&app.theme);

    let menu = menu_panel::view(MenuPanelProps {
        vm: app.widgets.navigation.vm(app.active_section()),
        theme: theme_props,
    })
    .map(AppEvent::NavigationUi);

    let sidebar = container(menu)
        .width(Length::Fixed(SIDEBAR_WIDTH))
        .height(Length::Fill)
        .style(style::menu_panel_style(theme_props));

    let separator_color = app.theme.iced_palette().overlay;
    let separator = container(iced::widget::Space::new())
        .width(Length::Fixed(SIDEBAR_SEPARATOR_WIDTH))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(separator_color.into()),
            ..Default::default()
        });

    let page = resume_page::view(ResumePageProps {
        vm: app
            .widgets
            .resume
            .vm(app.section_looks(), app.coordinator.highlighted()),
        theme: theme_props,
    })
    .map(AppEvent::ResumeUi);

    let content = row![sidebar, separator, page]
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        vec![content.into()];

    let ctx = ProjectDetailCtx {
        catalog: &app.catalog,
        content_dir: &app.content_dir,
    };
    if let Some(vm) = app.widgets.project_detail.vm(&ctx) {
        let overlay = overlay::view(OverlayProps {
            vm,
            theme: theme_props,
        })
        .map(AppEvent::ProjectDetailUi);
        layers.push(overlay);
    }

    iced::widget::Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
