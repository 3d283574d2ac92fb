pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::NavigationCommand;
pub(crate) use event::{NavigationEffect, NavigationEvent};
use iced::Task;
use state::NavigationState;
use vita_ui_menu::MenuNode;

/// Navigation widget: owns the generated menu tree, the expanded parents
/// and the hovered row, and turns row clicks into navigation requests.
pub(crate) struct NavigationWidget {
    state: NavigationState,
}

impl NavigationWidget {
    /// Create the widget over a prebuilt menu tree.
    pub(crate) fn new(nodes: Vec<MenuNode>) -> Self {
        Self {
            state: NavigationState::new(nodes),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: NavigationCommand,
    ) -> Task<NavigationEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a view model for the menu panel.
    ///
    /// `active` is the section drawn as selected.
    pub(crate) fn vm<'a>(
        &'a self,
        active: Option<&'a str>,
    ) -> model::NavigationViewModel<'a> {
        model::NavigationViewModel {
            nodes: self.state.nodes(),
            expanded: self.state.expanded(),
            hovered: self.state.hovered(),
            active,
        }
    }

    /// Reset transient pointer state.
    pub(crate) fn reset(&mut self) {
        self.state.set_hovered(None);
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &NavigationState {
        &self.state
    }
}
