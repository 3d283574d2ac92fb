//! Section menu model and a lightweight [`iced`] menu widget.
//!
//! This crate is split into two layers:
//! - model helpers ([`build_menu`], [`activate`], [`flatten_menu`]) that are
//!   UI-agnostic and pure;
//! - view helpers ([`MenuView`], [`MenuRowContext`]) that render rows in
//!   `iced`.
//!
//! The recommended flow:
//! 1. build the tree once from your section table and dynamic lists;
//! 2. keep an [`ExpandedKeys`] set and the hovered key in your app state;
//! 3. feed [`MenuView::on_activate`] messages through [`activate`], which
//!    toggles parents and returns the key to navigate to for everything else.
//!
//! See `examples/menu_view.rs` for a complete runnable example.
//!
//! # Quick Example
//!
//! ```no_run
//! use iced::widget::text;
//! use iced::Element;
//! use vita_ui_menu::{
//!     ExpandedKeys, MenuAction, MenuNode, MenuView, SectionDescriptor,
//!     activate, build_menu,
//! };
//!
//! #[derive(Clone)]
//! enum Message {
//!     Activated(MenuAction),
//! }
//!
//! struct State {
//!     menu: Vec<MenuNode>,
//!     expanded: ExpandedKeys,
//! }
//!
//! fn boot() -> State {
//!     let table = vec![
//!         SectionDescriptor::new("contact", "Contact", 2),
//!         SectionDescriptor::new("projects", "Projects", 1).with_children(),
//!     ];
//!     let projects = ["Atlas", "Orbit"];
//!     State {
//!         menu: build_menu(&table, &[] as &[&str], &projects),
//!         expanded: ["projects"].into_iter().collect(),
//!     }
//! }
//!
//! fn update(state: &mut State, message: Message) {
//!     let Message::Activated(action) = message;
//!     if let Some(key) = activate(action, &mut state.expanded) {
//!         println!("scroll to {key}");
//!     }
//! }
//!
//! fn view(state: &State) -> Element<'_, Message> {
//!     MenuView::new(&state.menu, &state.expanded, |ctx| {
//!         text(ctx.entry.node.label()).into()
//!     })
//!     .on_activate(Message::Activated)
//!     .view()
//! }
//! ```

mod model;
mod view;

pub use model::{
    ChildSource, EXPERIENCES_ID, ExpandedKeys, FlattenedNode, MenuAction,
    MenuNode, MenuNodeKind, PROJECTS_ID, SectionDescriptor, activate,
    build_menu, child_key, flatten_menu,
};
pub use view::{MenuRow, MenuRowContext, MenuView};
