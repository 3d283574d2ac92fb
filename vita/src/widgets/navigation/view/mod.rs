pub(crate) mod menu_panel;
