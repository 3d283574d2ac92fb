use vita_ui_menu::{EXPERIENCES_ID, PROJECTS_ID, SectionDescriptor, child_key};

pub(crate) const BASIC_INFO: &str = "basic-info";
pub(crate) const CONTACT: &str = "contact";
pub(crate) const SKILLS: &str = "skills";
pub(crate) const EXPERIENCES: &str = EXPERIENCES_ID;
pub(crate) const PROJECTS: &str = PROJECTS_ID;
pub(crate) const EDUCATION: &str = "education";
pub(crate) const OTHER_INFO: &str = "other-info";

/// Top-level section ids in document order.
pub(crate) const SECTION_IDS: [&str; 7] = [
    BASIC_INFO,
    CONTACT,
    SKILLS,
    EXPERIENCES,
    PROJECTS,
    EDUCATION,
    OTHER_INFO,
];

/// Parent ids expanded when the menu first renders.
pub(crate) const INITIALLY_EXPANDED: [&str; 2] = [EXPERIENCES, PROJECTS];

/// Symbolic icon names understood by [`crate::icons::section_icon`].
pub(crate) mod icon {
    pub(crate) const USER: &str = "user";
    pub(crate) const CONTACTS: &str = "contacts";
    pub(crate) const TOOL: &str = "tool";
    pub(crate) const BANK: &str = "bank";
    pub(crate) const PROJECT: &str = "project";
    pub(crate) const BOOK: &str = "book";
    pub(crate) const TROPHY: &str = "trophy";
}

/// Static section table driving the navigation menu.
pub(crate) fn resume_sections() -> Vec<SectionDescriptor> {
    vec![
        SectionDescriptor::new(BASIC_INFO, "Profile", 1).icon(icon::USER),
        SectionDescriptor::new(CONTACT, "Contact", 2).icon(icon::CONTACTS),
        SectionDescriptor::new(SKILLS, "Skills", 3).icon(icon::TOOL),
        SectionDescriptor::new(EXPERIENCES, "Experience", 4)
            .icon(icon::BANK)
            .with_children(),
        SectionDescriptor::new(PROJECTS, "Projects", 5)
            .icon(icon::PROJECT)
            .with_children(),
        SectionDescriptor::new(EDUCATION, "Education", 6).icon(icon::BOOK),
        SectionDescriptor::new(OTHER_INFO, "More", 7).icon(icon::TROPHY),
    ]
}

/// Anchor id of the experience entry at `index`.
pub(crate) fn experience_key(index: usize) -> String {
    child_key("experience", index)
}

/// Anchor id of the project entry at `index`.
pub(crate) fn project_key(index: usize) -> String {
    child_key("project", index)
}

/// Return whether `id` names a top-level section.
pub(crate) fn is_top_level(id: &str) -> bool {
    SECTION_IDS.contains(&id)
}

/// Section label for headings, looked up from the static table.
pub(crate) fn section_label(id: &str) -> String {
    resume_sections()
        .into_iter()
        .find(|descriptor| descriptor.id == id)
        .map(|descriptor| descriptor.label)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use vita_ui_menu::build_menu;

    use super::*;

    #[test]
    fn given_section_table_when_menu_built_then_order_matches_document_order()
    {
        let menu = build_menu(&resume_sections(), &["Acme"], &["Atlas"]);
        let keys: Vec<&str> = menu.iter().map(|node| node.key()).collect();

        assert_eq!(keys, SECTION_IDS.to_vec());
    }

    #[test]
    fn given_section_table_when_inspected_then_ids_are_unique() {
        let table = resume_sections();
        let mut ids: Vec<&str> =
            table.iter().map(|descriptor| descriptor.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), table.len());
    }

    #[test]
    fn given_child_indexes_when_keys_built_then_public_pattern_is_used() {
        assert_eq!(experience_key(0), "experience-0");
        assert_eq!(project_key(3), "project-3");
        assert!(is_top_level(OTHER_INFO));
        assert!(!is_top_level("project-3"));
    }

    #[test]
    fn given_known_and_unknown_ids_when_label_looked_up_then_label_or_empty() {
        assert_eq!(section_label(SKILLS), "Skills");
        assert_eq!(section_label("missing"), "");
    }
}
