pub(crate) mod command;
pub(crate) mod event;
pub(crate) mod model;
pub(crate) mod reducer;
pub(crate) mod state;
pub(crate) mod view;

pub(crate) use command::ResumeCommand;
pub(crate) use event::{ResumeEffect, ResumeEvent};
use iced::Task;
use state::ResumeState;

use crate::content::model::ResumeConfig;
use crate::content::sections::{SECTION_IDS, experience_key, project_key};

/// Résumé widget: renders every section of the configuration inside the
/// content scrollable and reports scrolling and detail requests.
pub(crate) struct ResumeWidget {
    state: ResumeState,
}

impl ResumeWidget {
    pub(crate) fn new(resume: ResumeConfig) -> Self {
        Self {
            state: ResumeState::new(resume),
        }
    }

    /// Reduce a command into state updates and effects.
    pub(crate) fn reduce(
        &mut self,
        command: ResumeCommand,
    ) -> Task<ResumeEffect> {
        reducer::reduce(&mut self.state, command)
    }

    /// Return a view model for the résumé page.
    pub(crate) fn vm<'a>(
        &'a self,
        looks: model::SectionLooks,
        highlighted: Option<&'a str>,
    ) -> model::ResumeViewModel<'a> {
        model::ResumeViewModel {
            resume: self.state.resume(),
            looks,
            highlighted,
        }
    }

    /// Every anchor the page can render: sections, then child entries.
    pub(crate) fn anchor_keys(&self) -> Vec<String> {
        let resume = self.state.resume();
        let sections = SECTION_IDS.iter().map(|id| id.to_string());
        let experiences = (0..resume.experiences.len()).map(experience_key);
        let projects = (0..resume.projects.len()).map(project_key);

        sections.chain(experiences).chain(projects).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{Experience, Project};

    #[test]
    fn given_resume_with_children_when_anchor_keys_listed_then_children_follow()
    {
        let mut resume = ResumeConfig::default();
        resume.experiences.push(Experience {
            company: String::from("Northwind"),
            position: String::from("Engineer"),
            start_date: String::from("2021-01"),
            end_date: None,
            description: Vec::new(),
            technologies: Vec::new(),
            achievements: Vec::new(),
        });
        resume.projects.push(Project {
            name: String::from("Helpdesk"),
            description: String::new(),
            technologies: Vec::new(),
            role: String::from("Lead"),
            start_date: String::from("2022-03"),
            end_date: None,
            link: None,
            highlights: Vec::new(),
            detail_id: None,
        });

        let keys = ResumeWidget::new(resume).anchor_keys();

        assert_eq!(keys.len(), SECTION_IDS.len() + 2);
        assert_eq!(keys[0], "basic-info");
        assert_eq!(&keys[SECTION_IDS.len()..], ["experience-0", "project-0"]);
    }
}
