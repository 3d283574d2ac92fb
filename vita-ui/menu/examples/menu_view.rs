use iced::widget::{column, container, text};
use iced::{Color, Element, Length};
use vita_ui_menu::{
    ExpandedKeys, MenuAction, MenuNode, MenuRowContext, MenuView,
    SectionDescriptor, activate, build_menu,
};

#[derive(Debug, Clone)]
enum Message {
    Activate(MenuAction),
    Hover(Option<String>),
}

struct AppState {
    menu: Vec<MenuNode>,
    expanded: ExpandedKeys,
    active: Option<String>,
    hovered: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        let table = vec![
            SectionDescriptor::new("contact", "Contact", 2),
            SectionDescriptor::new("basic-info", "Profile", 1),
            SectionDescriptor::new("experiences", "Experience", 3)
                .with_children(),
            SectionDescriptor::new("projects", "Projects", 4).with_children(),
        ];

        Self {
            menu: build_menu(&table, &["Acme", "Globex"], &["Atlas"]),
            expanded: ["experiences", "projects"].into_iter().collect(),
            active: None,
            hovered: None,
        }
    }
}

fn update(state: &mut AppState, message: Message) {
    match message {
        Message::Activate(action) => {
            if let Some(key) = activate(action, &mut state.expanded) {
                state.active = Some(key);
            }
        },
        Message::Hover(key) => {
            state.hovered = key;
        },
    }
}

fn view(state: &AppState) -> Element<'_, Message> {
    let menu = MenuView::new(&state.menu, &state.expanded, render_row)
        .active(state.active.as_deref())
        .hovered(state.hovered.as_deref())
        .on_activate(Message::Activate)
        .on_hover(Message::Hover)
        .row_style(row_style)
        .toggle_content(toggle_icon)
        .toggle_width(16.0)
        .indent_width(14.0)
        .view();

    let status = text(format!(
        "Last target: {}",
        state.active.as_deref().unwrap_or("none")
    ));

    column![menu, status].spacing(12).padding(12).into()
}

fn render_row<'a>(context: &MenuRowContext<'a>) -> Element<'a, Message> {
    let node = context.entry.node;
    let label = match node.caption() {
        Some(caption) => format!("{} · {caption}", node.label()),
        None => node.label().to_string(),
    };

    container(text(label))
        .padding([4, 8])
        .width(Length::Fill)
        .into()
}

fn row_style(context: &MenuRowContext<'_>) -> container::Style {
    let background = if context.is_active {
        Some(Color::from_rgb(0.12, 0.26, 0.46).into())
    } else if context.is_hovered {
        Some(Color::from_rgb(0.18, 0.18, 0.18).into())
    } else {
        None
    };

    container::Style {
        background,
        text_color: Some(Color::from_rgb(0.9, 0.9, 0.9)),
        ..Default::default()
    }
}

fn toggle_icon<'a>(context: &MenuRowContext<'a>) -> Element<'a, Message> {
    let marker = if context.is_expanded { "▼" } else { "▶" };
    text(marker).size(10).into()
}

fn main() -> iced::Result {
    iced::run(update, view)
}
