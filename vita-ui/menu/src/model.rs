use std::collections::BTreeSet;

/// Section id whose children are generated from the experience list.
pub const EXPERIENCES_ID: &str = "experiences";
/// Section id whose children are generated from the project list.
pub const PROJECTS_ID: &str = "projects";

const EXPERIENCE_CHILD_PREFIX: &str = "experience";
const PROJECT_CHILD_PREFIX: &str = "project";

/// Static description of one top-level section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionDescriptor {
    /// Stable section identifier, unique within a table.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Symbolic icon name resolved by the renderer.
    pub icon: String,
    /// Position in the menu, ascending.
    pub order: i32,
    /// Whether children are generated from a dynamic list.
    pub has_children: bool,
}

impl SectionDescriptor {
    /// Create a descriptor without icon or children.
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        order: i32,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            icon: String::new(),
            order,
            has_children: false,
        }
    }

    /// Set the symbolic icon name.
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Mark the section as a parent of dynamic children.
    pub fn with_children(mut self) -> Self {
        self.has_children = true;
        self
    }
}

/// Item of a dynamic list that becomes a child menu entry.
pub trait ChildSource {
    /// Label shown in the menu.
    fn label(&self) -> &str;

    /// Secondary text shown under the label.
    fn caption(&self) -> Option<&str> {
        None
    }
}

impl ChildSource for &str {
    fn label(&self) -> &str {
        self
    }
}

impl ChildSource for String {
    fn label(&self) -> &str {
        self
    }
}

/// Role of a node in the menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuNodeKind {
    /// Top-level entry bound to navigation.
    Leaf,
    /// Top-level entry that only toggles its children.
    Parent(Vec<MenuNode>),
    /// Generated entry bound to navigation.
    Child,
}

/// What a click on a menu node should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    /// Scroll to the section with this key.
    Navigate(String),
    /// Flip the expanded state of this parent key.
    Toggle(String),
}

/// Node of the generated menu tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuNode {
    key: String,
    label: String,
    icon: Option<String>,
    caption: Option<String>,
    kind: MenuNodeKind,
}

impl MenuNode {
    fn leaf(descriptor: &SectionDescriptor) -> Self {
        Self {
            key: descriptor.id.clone(),
            label: descriptor.label.clone(),
            icon: non_empty(&descriptor.icon),
            caption: None,
            kind: MenuNodeKind::Leaf,
        }
    }

    fn parent(descriptor: &SectionDescriptor, children: Vec<MenuNode>) -> Self {
        Self {
            key: descriptor.id.clone(),
            label: descriptor.label.clone(),
            icon: non_empty(&descriptor.icon),
            caption: None,
            kind: MenuNodeKind::Parent(children),
        }
    }

    fn child<S: ChildSource>(prefix: &str, index: usize, source: &S) -> Self {
        Self {
            key: child_key(prefix, index),
            label: source.label().to_string(),
            icon: None,
            caption: source.caption().map(str::to_string),
            kind: MenuNodeKind::Child,
        }
    }

    /// Return the navigation or toggle key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Return the display label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Return the symbolic icon name, if any.
    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    /// Return the secondary caption, if any.
    pub fn caption(&self) -> Option<&str> {
        self.caption.as_deref()
    }

    /// Return the node role.
    pub fn kind(&self) -> &MenuNodeKind {
        &self.kind
    }

    /// Return whether this node toggles children instead of navigating.
    pub fn is_parent(&self) -> bool {
        matches!(self.kind, MenuNodeKind::Parent(_))
    }

    /// Return generated children (parents only).
    pub fn children(&self) -> &[MenuNode] {
        match &self.kind {
            MenuNodeKind::Parent(children) => children,
            MenuNodeKind::Leaf | MenuNodeKind::Child => &[],
        }
    }

    /// Return the action bound to a click on this node.
    pub fn action(&self) -> MenuAction {
        match self.kind {
            MenuNodeKind::Parent(_) => MenuAction::Toggle(self.key.clone()),
            MenuNodeKind::Leaf | MenuNodeKind::Child => {
                MenuAction::Navigate(self.key.clone())
            },
        }
    }
}

/// Set of parent keys whose children are currently visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedKeys {
    keys: BTreeSet<String>,
}

impl ExpandedKeys {
    /// Return whether `key` is expanded.
    pub fn contains(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    /// Add `key` when absent, remove it when present.
    ///
    /// Returns the new expanded state of `key`.
    pub fn toggle(&mut self, key: &str) -> bool {
        if self.keys.remove(key) {
            false
        } else {
            self.keys.insert(key.to_string());
            true
        }
    }

    /// Iterate expanded keys in lexical order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// Return the number of expanded keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Return whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ExpandedKeys {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Build the ordered menu tree from a section table and the dynamic lists.
///
/// Descriptors are sorted by `order`, ties keep table order. A descriptor
/// flagged with children whose id is [`EXPERIENCES_ID`] or [`PROJECTS_ID`]
/// becomes a parent with one child per list item, keyed
/// `experience-<index>` or `project-<index>`. Every other descriptor becomes
/// a leaf.
pub fn build_menu<E, P>(
    table: &[SectionDescriptor],
    experiences: &[E],
    projects: &[P],
) -> Vec<MenuNode>
where
    E: ChildSource,
    P: ChildSource,
{
    let mut ordered: Vec<&SectionDescriptor> = table.iter().collect();
    ordered.sort_by_key(|descriptor| descriptor.order);

    ordered
        .into_iter()
        .map(|descriptor| {
            if !descriptor.has_children {
                return MenuNode::leaf(descriptor);
            }

            match descriptor.id.as_str() {
                EXPERIENCES_ID => MenuNode::parent(
                    descriptor,
                    children(EXPERIENCE_CHILD_PREFIX, experiences),
                ),
                PROJECTS_ID => MenuNode::parent(
                    descriptor,
                    children(PROJECT_CHILD_PREFIX, projects),
                ),
                _ => MenuNode::leaf(descriptor),
            }
        })
        .collect()
}

/// Apply a click action to the expanded set.
///
/// Returns the key to navigate to, if the action navigates. Toggles never
/// navigate and navigation never touches the expanded set.
pub fn activate(
    action: MenuAction,
    expanded: &mut ExpandedKeys,
) -> Option<String> {
    match action {
        MenuAction::Navigate(key) => Some(key),
        MenuAction::Toggle(key) => {
            expanded.toggle(&key);
            None
        },
    }
}

/// Build the key of a generated child, e.g. `project-2`.
pub fn child_key(prefix: &str, index: usize) -> String {
    format!("{prefix}-{index}")
}

/// Flattened representation of a visible menu row.
#[derive(Debug, Clone, Copy)]
pub struct FlattenedNode<'a> {
    /// Zero-based depth (`0` for top-level rows).
    pub depth: usize,
    /// Borrowed source node.
    pub node: &'a MenuNode,
}

/// Flatten the menu into depth-first visible rows.
///
/// Children are included only when their parent key is expanded. Order is
/// preserved as produced by [`build_menu`].
pub fn flatten_menu<'a>(
    nodes: &'a [MenuNode],
    expanded: &ExpandedKeys,
) -> Vec<FlattenedNode<'a>> {
    let mut entries = Vec::new();
    for node in nodes {
        push_node(node, 0, expanded, &mut entries);
    }
    entries
}

fn push_node<'a>(
    node: &'a MenuNode,
    depth: usize,
    expanded: &ExpandedKeys,
    entries: &mut Vec<FlattenedNode<'a>>,
) {
    entries.push(FlattenedNode { depth, node });

    if node.is_parent() && expanded.contains(node.key()) {
        for child in node.children() {
            push_node(child, depth + 1, expanded, entries);
        }
    }
}

fn children<S: ChildSource>(prefix: &str, items: &[S]) -> Vec<MenuNode> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| MenuNode::child(prefix, index, item))
        .collect()
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Role {
        company: &'static str,
        position: &'static str,
    }

    impl ChildSource for Role {
        fn label(&self) -> &str {
            self.company
        }

        fn caption(&self) -> Option<&str> {
            Some(self.position)
        }
    }

    const NONE: &[&str] = &[];

    fn keys(nodes: &[MenuNode]) -> Vec<&str> {
        nodes.iter().map(MenuNode::key).collect()
    }

    fn resume_table() -> Vec<SectionDescriptor> {
        vec![
            SectionDescriptor::new("basic-info", "Profile", 1).icon("user"),
            SectionDescriptor::new("contact", "Contact", 2).icon("contacts"),
            SectionDescriptor::new("skills", "Skills", 3).icon("tool"),
            SectionDescriptor::new(EXPERIENCES_ID, "Experience", 4)
                .icon("bank")
                .with_children(),
            SectionDescriptor::new(PROJECTS_ID, "Projects", 5)
                .icon("project")
                .with_children(),
            SectionDescriptor::new("education", "Education", 6).icon("book"),
            SectionDescriptor::new("other-info", "More", 7).icon("trophy"),
        ]
    }

    #[test]
    fn build_menu_sorts_by_order() {
        let table = vec![
            SectionDescriptor::new("a", "A", 2),
            SectionDescriptor::new("b", "B", 1),
        ];

        let menu = build_menu(&table, NONE, NONE);

        assert_eq!(keys(&menu), vec!["b", "a"]);
    }

    #[test]
    fn build_menu_keeps_table_order_on_ties() {
        let table = vec![
            SectionDescriptor::new("first", "First", 1),
            SectionDescriptor::new("second", "Second", 1),
            SectionDescriptor::new("zero", "Zero", 0),
        ];

        let menu = build_menu(&table, NONE, NONE);

        assert_eq!(keys(&menu), vec!["zero", "first", "second"]);
    }

    #[test]
    fn build_menu_handles_empty_table() {
        let menu = build_menu(&[], NONE, NONE);
        assert!(menu.is_empty());
    }

    #[test]
    fn build_menu_generates_experience_children_in_list_order() {
        let table = resume_table();
        let menu = build_menu(&table, &["Acme", "Globex"], NONE);

        let experiences = menu
            .iter()
            .find(|node| node.key() == EXPERIENCES_ID)
            .expect("experiences node");
        let children: Vec<(&str, &str)> = experiences
            .children()
            .iter()
            .map(|child| (child.key(), child.label()))
            .collect();

        assert_eq!(
            children,
            vec![("experience-0", "Acme"), ("experience-1", "Globex")]
        );
    }

    #[test]
    fn build_menu_generates_project_children_with_captions() {
        let table = resume_table();
        let projects = [
            Role {
                company: "Ticket Cloud",
                position: "Lead",
            },
            Role {
                company: "Atlas",
                position: "Contributor",
            },
        ];

        let menu = build_menu(&table, NONE, &projects);
        let node = menu
            .iter()
            .find(|node| node.key() == PROJECTS_ID)
            .expect("projects node");

        assert_eq!(node.children()[1].key(), "project-1");
        assert_eq!(node.children()[1].caption(), Some("Contributor"));
        assert_eq!(node.children()[0].kind(), &MenuNodeKind::Child);
    }

    #[test]
    fn build_menu_treats_unknown_parent_ids_as_leaves() {
        let table = vec![SectionDescriptor::new("awards", "Awards", 1)
            .with_children()];

        let menu = build_menu(&table, &["Acme"], &["Atlas"]);

        assert_eq!(menu[0].kind(), &MenuNodeKind::Leaf);
        assert_eq!(menu[0].action(), MenuAction::Navigate("awards".into()));
    }

    #[test]
    fn build_menu_without_children_flag_emits_leaf_for_reserved_ids() {
        let table = vec![SectionDescriptor::new(PROJECTS_ID, "Projects", 1)];

        let menu = build_menu(&table, NONE, &["Atlas"]);

        assert!(!menu[0].is_parent());
        assert!(menu[0].children().is_empty());
    }

    #[test]
    fn build_menu_keeps_descriptor_icon() {
        let menu = build_menu(&resume_table(), NONE, NONE);
        assert_eq!(menu[0].icon(), Some("user"));

        let bare = build_menu(&[SectionDescriptor::new("x", "X", 1)], NONE, NONE);
        assert_eq!(bare[0].icon(), None);
    }

    #[test]
    fn toggle_twice_restores_expanded_keys() {
        let mut expanded: ExpandedKeys =
            [EXPERIENCES_ID, PROJECTS_ID].into_iter().collect();
        let original = expanded.clone();

        assert!(!expanded.toggle(PROJECTS_ID));
        assert!(expanded.toggle(PROJECTS_ID));

        assert_eq!(expanded, original);
    }

    #[test]
    fn activate_child_navigates_without_touching_expanded_keys() {
        let menu = build_menu(&resume_table(), NONE, &["Atlas", "Orbit"]);
        let child = &menu[4].children()[1];
        let mut expanded: ExpandedKeys = [PROJECTS_ID].into_iter().collect();
        let before = expanded.clone();

        let target = activate(child.action(), &mut expanded);

        assert_eq!(target.as_deref(), Some("project-1"));
        assert_eq!(expanded, before);
    }

    #[test]
    fn activate_parent_toggles_without_navigation() {
        let menu = build_menu(&resume_table(), &["Acme"], NONE);
        let parent = &menu[3];
        let mut expanded = ExpandedKeys::default();

        let target = activate(parent.action(), &mut expanded);

        assert_eq!(target, None);
        assert!(expanded.contains(EXPERIENCES_ID));
    }

    #[test]
    fn flatten_menu_hides_children_of_collapsed_parents() {
        let menu = build_menu(&resume_table(), &["Acme"], &["Atlas"]);
        let expanded: ExpandedKeys = [PROJECTS_ID].into_iter().collect();

        let rows = flatten_menu(&menu, &expanded);
        let flat: Vec<(usize, &str)> = rows
            .iter()
            .map(|row| (row.depth, row.node.key()))
            .collect();

        assert_eq!(
            flat,
            vec![
                (0, "basic-info"),
                (0, "contact"),
                (0, "skills"),
                (0, "experiences"),
                (0, "projects"),
                (1, "project-0"),
                (0, "education"),
                (0, "other-info"),
            ]
        );
    }

    #[test]
    fn flatten_menu_handles_empty_input() {
        let rows = flatten_menu(&[], &ExpandedKeys::default());
        assert!(rows.is_empty());
    }
}
