#[path = "subscription.rs"]
mod subscription;
#[path = "update.rs"]
mod update;
#[path = "view.rs"]
pub(crate) mod view;

use std::path::PathBuf;
use std::time::Instant;

use iced::{Element, Subscription, Task, Theme};
use vita_ui_menu::build_menu;

use crate::content::sections::{SECTION_IDS, resume_sections};
use crate::content::{Content, ProjectCatalog};
use crate::motion::Entrance;
use crate::probe::LayoutSnapshot;
use crate::registry::SectionRegistry;
use crate::scroll::ScrollCoordinator;
use crate::style::Emphasis;
use crate::theme::AppTheme;
use crate::visibility::VisibilityWatcher;
use crate::widgets::Widgets;
use crate::widgets::navigation::{
    NavigationEffect, NavigationEvent, NavigationWidget,
};
use crate::widgets::project_detail::{
    ProjectDetailCommand, ProjectDetailEffect, ProjectDetailEvent,
    ProjectDetailWidget,
};
use crate::widgets::resume::model::{SectionLook, SectionLooks};
use crate::widgets::resume::{ResumeEffect, ResumeEvent, ResumeWidget};

pub(crate) const MIN_WINDOW_WIDTH: f32 = 960.0;
pub(crate) const MIN_WINDOW_HEIGHT: f32 = 640.0;

/// App-wide events that drive the root update loop.
#[derive(Clone)]
pub(crate) enum AppEvent {
    IcedReady,
    // Navigation widget
    NavigationUi(NavigationEvent),
    NavigationEffect(NavigationEffect),
    // Resume widget
    ResumeUi(ResumeEvent),
    ResumeEffect(ResumeEffect),
    // Project detail widget
    ProjectDetailUi(ProjectDetailEvent),
    ProjectDetailEffect(ProjectDetailEffect),
    ProjectDetailCommand(ProjectDetailCommand),
    // Scroll coordination
    LayoutMeasured(LayoutSnapshot),
    Frame(Instant),
    HighlightTick(Instant),
    // Direct operations
    Keyboard(iced::keyboard::Event),
    Window(iced::window::Event),
}

/// Root application state.
pub(crate) struct App {
    pub(crate) title: String,
    pub(crate) theme: AppTheme,
    pub(crate) catalog: ProjectCatalog,
    pub(crate) content_dir: PathBuf,
    pub(crate) registry: SectionRegistry,
    pub(crate) coordinator: ScrollCoordinator,
    pub(crate) visibility: VisibilityWatcher,
    pub(crate) entrance: Entrance,
    pub(crate) widgets: Widgets,
}

impl App {
    /// Initialize the application and return the first task.
    pub(crate) fn new() -> (Self, Task<AppEvent>) {
        let (resume, catalog, content_dir) = Content::load().into_parts();
        let menu =
            build_menu(&resume_sections(), &resume.experiences, &resume.projects);

        let app = App {
            title: resume.headline(),
            theme: AppTheme::default(),
            catalog,
            content_dir,
            registry: SectionRegistry::default(),
            coordinator: ScrollCoordinator::default(),
            visibility: VisibilityWatcher::default(),
            entrance: Entrance::default(),
            widgets: Widgets {
                navigation: NavigationWidget::new(menu),
                resume: ResumeWidget::new(resume),
                project_detail: ProjectDetailWidget::new(),
            },
        };

        (app, Task::done(()).map(|_: ()| AppEvent::IcedReady))
    }

    /// Return the window title.
    pub(crate) fn title(&self) -> String {
        self.title.clone()
    }

    /// Return the current iced theme.
    pub(crate) fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    /// Return active subscriptions.
    pub(crate) fn subscription(&self) -> Subscription<AppEvent> {
        subscription::subscription(self)
    }

    /// Handle an incoming event.
    pub(crate) fn update(&mut self, event: AppEvent) -> Task<AppEvent> {
        update::update(self, event)
    }

    /// Render the root view.
    pub(crate) fn view(&self) -> Element<'_, AppEvent, Theme, iced::Renderer> {
        view::view(self)
    }

    /// Emphasis and entrance opacity for every top-level section.
    ///
    /// The navigation highlight wins over the in-view emphasis.
    pub(crate) fn section_looks(&self) -> SectionLooks {
        let mut looks = [SectionLook::default(); SECTION_IDS.len()];

        for (index, id) in SECTION_IDS.iter().enumerate() {
            let emphasis = if self.coordinator.is_highlighted(id) {
                Emphasis::Highlight
            } else if self.visibility.is_in_view(id) {
                Emphasis::InView
            } else {
                Emphasis::None
            };

            looks[index] = SectionLook {
                emphasis,
                opacity: self.entrance.opacity(index),
            };
        }

        looks
    }

    /// Section drawn as selected in the menu: the highlighted one, else the
    /// first section in view.
    pub(crate) fn active_section(&self) -> Option<&str> {
        self.coordinator.highlighted().or_else(|| {
            SECTION_IDS
                .iter()
                .copied()
                .find(|id| self.visibility.is_in_view(id))
        })
    }
}
