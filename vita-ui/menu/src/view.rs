use iced::alignment;
use iced::widget::{Column, Row, Space, container, mouse_area};
use iced::{Element, Length, mouse};

use crate::model::{
    ExpandedKeys, FlattenedNode, MenuAction, MenuNode, flatten_menu,
};

/// Flattened menu row used by [`MenuView`] render callbacks.
pub type MenuRow<'a> = FlattenedNode<'a>;

/// Rendering context passed to row callbacks.
pub struct MenuRowContext<'a> {
    pub entry: MenuRow<'a>,
    pub is_active: bool,
    pub is_hovered: bool,
    pub is_expanded: bool,
}

type RowRenderer<'a, Message> =
    dyn Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a;
type RowStyle<'a> = dyn Fn(&MenuRowContext<'a>) -> container::Style + 'a;
type ToggleContent<'a, Message> =
    dyn Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a;
type ActivateAction<'a, Message> = dyn Fn(MenuAction) -> Message + 'a;
type HoverAction<'a, Message> = dyn Fn(Option<String>) -> Message + 'a;
type RowsExtra<'a, Message> = dyn Fn() -> Option<Element<'a, Message>> + 'a;

/// Menu view helper that wires row clicks to [`MenuAction`]s.
pub struct MenuView<'a, Message: Clone + 'a> {
    nodes: &'a [MenuNode],
    expanded: &'a ExpandedKeys,
    active: Option<&'a str>,
    hovered: Option<&'a str>,
    on_activate: Option<Box<ActivateAction<'a, Message>>>,
    on_hover: Option<Box<HoverAction<'a, Message>>>,
    render_row: Box<RowRenderer<'a, Message>>,
    row_style: Option<Box<RowStyle<'a>>>,
    toggle_content: Option<Box<ToggleContent<'a, Message>>>,
    before_rows: Option<Box<RowsExtra<'a, Message>>>,
    spacing: f32,
    indent_width: f32,
    toggle_width: f32,
}

impl<'a, Message> MenuView<'a, Message>
where
    Message: Clone + 'a,
{
    /// Create a menu view that renders each row using `render_row`.
    pub fn new(
        nodes: &'a [MenuNode],
        expanded: &'a ExpandedKeys,
        render_row: impl Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a,
    ) -> Self {
        Self {
            nodes,
            expanded,
            active: None,
            hovered: None,
            on_activate: None,
            on_hover: None,
            render_row: Box::new(render_row),
            row_style: None,
            toggle_content: None,
            before_rows: None,
            spacing: 0.0,
            indent_width: 0.0,
            toggle_width: 0.0,
        }
    }

    /// Provide the key of the row drawn as active.
    pub fn active(mut self, key: Option<&'a str>) -> Self {
        self.active = key;
        self
    }

    /// Provide the key of the row under the pointer.
    pub fn hovered(mut self, key: Option<&'a str>) -> Self {
        self.hovered = key;
        self
    }

    /// Emit a message carrying the row action when a row is pressed.
    pub fn on_activate(
        mut self,
        on_activate: impl Fn(MenuAction) -> Message + 'a,
    ) -> Self {
        self.on_activate = Some(Box::new(on_activate));
        self
    }

    /// Emit a message when the pointer enters or leaves a row.
    pub fn on_hover(
        mut self,
        on_hover: impl Fn(Option<String>) -> Message + 'a,
    ) -> Self {
        self.on_hover = Some(Box::new(on_hover));
        self
    }

    /// Provide a row style callback for background/text styling.
    pub fn row_style(
        mut self,
        row_style: impl Fn(&MenuRowContext<'a>) -> container::Style + 'a,
    ) -> Self {
        self.row_style = Some(Box::new(row_style));
        self
    }

    /// Provide content rendered in the toggle slot of parent rows.
    pub fn toggle_content(
        mut self,
        toggle_content: impl Fn(&MenuRowContext<'a>) -> Element<'a, Message> + 'a,
    ) -> Self {
        self.toggle_content = Some(Box::new(toggle_content));
        self
    }

    /// Insert content before all rows.
    pub fn before_rows(
        mut self,
        before_rows: impl Fn() -> Option<Element<'a, Message>> + 'a,
    ) -> Self {
        self.before_rows = Some(Box::new(before_rows));
        self
    }

    /// Set indentation width per depth level.
    pub fn indent_width(mut self, width: f32) -> Self {
        self.indent_width = width.max(0.0);
        self
    }

    /// Set the width reserved for the toggle slot.
    pub fn toggle_width(mut self, width: f32) -> Self {
        self.toggle_width = width.max(0.0);
        self
    }

    /// Vertical spacing between rows.
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    /// Build the `Element` for the menu.
    pub fn view(self) -> Element<'a, Message> {
        let mut column = Column::new().spacing(self.spacing);

        if let Some(ref before_rows) = self.before_rows {
            if let Some(extra) = before_rows() {
                column = column.push(extra);
            }
        }

        for entry in flatten_menu(self.nodes, self.expanded) {
            let key = entry.node.key();
            let context = MenuRowContext {
                entry,
                is_active: self.active == Some(key),
                is_hovered: self.hovered == Some(key),
                is_expanded: self.expanded.contains(key),
            };

            let mut row = Row::new().spacing(0.0);

            let indent = context.entry.depth as f32 * self.indent_width;
            if indent > 0.0 {
                row = row.push(Space::new().width(Length::Fixed(indent)));
            }

            if self.toggle_width > 0.0 {
                row = row.push(self.toggle_slot(&context));
            }

            row = row.push((self.render_row)(&context));

            let mut row_element: Element<'a, Message> =
                row.width(Length::Fill).into();

            if let Some(ref row_style) = self.row_style {
                let style = row_style(&context);
                row_element = container(row_element)
                    .width(Length::Fill)
                    .style(move |_| style)
                    .into();
            }

            column = column.push(self.wrap_mouse_area(
                row_element,
                context.entry.node,
            ));
        }

        column.into()
    }

    fn toggle_slot(&self, context: &MenuRowContext<'a>) -> Element<'a, Message> {
        let content = match self.toggle_content {
            Some(ref toggle) if context.entry.node.is_parent() => {
                toggle(context)
            },
            _ => Space::new().into(),
        };

        container(content)
            .width(Length::Fixed(self.toggle_width))
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .into()
    }

    fn wrap_mouse_area(
        &self,
        element: Element<'a, Message>,
        node: &MenuNode,
    ) -> Element<'a, Message> {
        if self.on_activate.is_none() && self.on_hover.is_none() {
            return element;
        }

        let mut area = mouse_area(element);

        if let Some(ref on_activate) = self.on_activate {
            area = area.on_press(on_activate(node.action()));
        }

        if let Some(ref on_hover) = self.on_hover {
            area = area
                .on_enter(on_hover(Some(node.key().to_string())))
                .on_exit(on_hover(None));
        }

        area.interaction(mouse::Interaction::Pointer).into()
    }
}
