use crate::content::model::ResumeConfig;
use crate::content::sections::SECTION_IDS;
use crate::style::Emphasis;

/// Presentation of one top-level section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct SectionLook {
    pub(crate) emphasis: Emphasis,
    pub(crate) opacity: f32,
}

impl Default for SectionLook {
    fn default() -> Self {
        Self {
            emphasis: Emphasis::None,
            opacity: 1.0,
        }
    }
}

/// Looks of the top-level sections, indexed like [`SECTION_IDS`].
pub(crate) type SectionLooks = [SectionLook; SECTION_IDS.len()];

/// Read-only view model for the résumé page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResumeViewModel<'a> {
    pub(crate) resume: &'a ResumeConfig,
    pub(crate) looks: SectionLooks,
    /// Anchor currently carrying the navigation highlight.
    pub(crate) highlighted: Option<&'a str>,
}

/// One titled list of the "other info" section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct InfoGroup<'a> {
    pub(crate) label: &'static str,
    pub(crate) items: &'a [String],
    pub(crate) as_chips: bool,
}

impl<'a> ResumeViewModel<'a> {
    /// Every top-level section in document order with its look. The page
    /// mounts one card per entry, even when the section has no data.
    pub(crate) fn sections(
        &self,
    ) -> impl Iterator<Item = (&'static str, SectionLook)> + '_ {
        SECTION_IDS.iter().copied().zip(self.looks)
    }

    /// Non-empty groups of the "other info" section.
    pub(crate) fn other_info_groups(&self) -> Vec<InfoGroup<'a>> {
        let resume = self.resume;
        [
            ("Certifications", &resume.certifications, false),
            ("Languages", &resume.languages, true),
            ("Interests", &resume.interests, true),
            ("Strengths", &resume.personal_advantages, false),
        ]
        .into_iter()
        .filter(|(_, items, _)| !items.is_empty())
        .map(|(label, items, as_chips)| InfoGroup {
            label,
            items: items.as_slice(),
            as_chips,
        })
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use vita_ui_menu::build_menu;

    use super::*;
    use crate::content::sections::{OTHER_INFO, resume_sections};

    fn vm(resume: &ResumeConfig) -> ResumeViewModel<'_> {
        ResumeViewModel {
            resume,
            looks: [SectionLook::default(); SECTION_IDS.len()],
            highlighted: None,
        }
    }

    #[test]
    fn given_empty_resume_when_sections_listed_then_every_menu_leaf_is_mounted()
    {
        let resume = ResumeConfig::default();
        let menu = build_menu(
            &resume_sections(),
            &resume.experiences,
            &resume.projects,
        );

        let view_model = vm(&resume);
        let mounted: Vec<&str> =
            view_model.sections().map(|(id, _)| id).collect();
        let in_menu: Vec<&str> = menu.iter().map(|node| node.key()).collect();

        assert_eq!(mounted, in_menu);
        assert!(mounted.contains(&OTHER_INFO));
    }

    #[test]
    fn given_resume_without_extras_when_grouped_then_no_group_is_listed() {
        let resume = ResumeConfig::default();
        assert!(vm(&resume).other_info_groups().is_empty());
    }

    #[test]
    fn given_languages_only_when_grouped_then_single_chip_group_is_listed() {
        let mut resume = ResumeConfig::default();
        resume.languages.push(String::from("English"));

        let groups = vm(&resume).other_info_groups();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].label, "Languages");
        assert!(groups[0].as_chips);
    }
}
