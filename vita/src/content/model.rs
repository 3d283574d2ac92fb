use serde::{Deserialize, Serialize};
use vita_ui_menu::ChildSource;

const MAX_SKILL_LEVEL: u8 = 5;
const OPEN_EXPERIENCE_LABEL: &str = "Present";
const OPEN_PROJECT_LABEL: &str = "Ongoing";

/// Full résumé payload rendered by the content widget.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ResumeConfig {
    pub(crate) basic_info: BasicInfo,
    pub(crate) contact: Contact,
    #[serde(default)]
    pub(crate) skills: Vec<Skill>,
    #[serde(default)]
    pub(crate) experiences: Vec<Experience>,
    pub(crate) education: Education,
    #[serde(default)]
    pub(crate) projects: Vec<Project>,
    #[serde(default)]
    pub(crate) certifications: Vec<String>,
    #[serde(default)]
    pub(crate) languages: Vec<String>,
    #[serde(default)]
    pub(crate) interests: Vec<String>,
    #[serde(default)]
    pub(crate) personal_advantages: Vec<String>,
}

impl ResumeConfig {
    /// Window title summarizing the candidate.
    pub(crate) fn headline(&self) -> String {
        let info = &self.basic_info;
        if info.name.is_empty() {
            return String::from("vita");
        }

        format!(
            "{}/{}y/{}/{}/{}",
            info.name,
            info.years_of_experience,
            info.title,
            info.education,
            info.location
        )
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BasicInfo {
    pub(crate) name: String,
    pub(crate) title: String,
    pub(crate) summary: String,
    #[serde(default)]
    pub(crate) avatar: Option<String>,
    pub(crate) location: String,
    pub(crate) years_of_experience: u32,
    pub(crate) education: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Contact {
    pub(crate) email: String,
    pub(crate) phone: String,
    #[serde(default)]
    pub(crate) github: Option<String>,
    #[serde(default)]
    pub(crate) linkedin: Option<String>,
    #[serde(default)]
    pub(crate) website: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum SkillCategory {
    Frontend,
    Backend,
    Devops,
    #[serde(other)]
    Other,
}

impl SkillCategory {
    /// Categories in display order.
    pub(crate) const ALL: [SkillCategory; 4] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Devops,
        SkillCategory::Other,
    ];

    pub(crate) fn label(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Devops => "DevOps",
            SkillCategory::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Skill {
    pub(crate) name: String,
    pub(crate) level: u8,
    pub(crate) category: SkillCategory,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl Skill {
    /// Star rating, one star per level clamped to 1..=5.
    pub(crate) fn stars(&self) -> String {
        "★".repeat(usize::from(self.level.clamp(1, MAX_SKILL_LEVEL)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Experience {
    pub(crate) company: String,
    pub(crate) position: String,
    pub(crate) start_date: String,
    #[serde(default)]
    pub(crate) end_date: Option<String>,
    #[serde(default)]
    pub(crate) description: Vec<String>,
    #[serde(default)]
    pub(crate) technologies: Vec<String>,
    #[serde(default)]
    pub(crate) achievements: Vec<String>,
}

impl Experience {
    pub(crate) fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref(), OPEN_EXPERIENCE_LABEL)
    }
}

impl ChildSource for Experience {
    fn label(&self) -> &str {
        &self.company
    }

    fn caption(&self) -> Option<&str> {
        Some(&self.position)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Education {
    pub(crate) school: String,
    pub(crate) degree: String,
    pub(crate) major: String,
    pub(crate) start_date: String,
    pub(crate) end_date: String,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl Education {
    pub(crate) fn period(&self) -> String {
        period(&self.start_date, Some(&self.end_date), OPEN_EXPERIENCE_LABEL)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Project {
    pub(crate) name: String,
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) technologies: Vec<String>,
    pub(crate) role: String,
    pub(crate) start_date: String,
    #[serde(default)]
    pub(crate) end_date: Option<String>,
    #[serde(default)]
    pub(crate) link: Option<String>,
    #[serde(default)]
    pub(crate) highlights: Vec<String>,
    /// Key into the project detail catalog, when a detail record exists.
    #[serde(default)]
    pub(crate) detail_id: Option<String>,
}

impl Project {
    pub(crate) fn period(&self) -> String {
        period(&self.start_date, self.end_date.as_deref(), OPEN_PROJECT_LABEL)
    }
}

impl ChildSource for Project {
    fn label(&self) -> &str {
        &self.name
    }

    fn caption(&self) -> Option<&str> {
        Some(&self.role)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum TechCategory {
    Frontend,
    Backend,
    Database,
    Devops,
    #[serde(other)]
    Other,
}

impl TechCategory {
    pub(crate) fn label(self) -> &'static str {
        match self {
            TechCategory::Frontend => "Frontend",
            TechCategory::Backend => "Backend",
            TechCategory::Database => "Database",
            TechCategory::Devops => "DevOps",
            TechCategory::Other => "Other",
        }
    }
}

/// One slice of a project's technology composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TechStackItem {
    pub(crate) name: String,
    /// Author-asserted share, shown as written.
    pub(crate) percentage: f32,
    pub(crate) color: String,
    pub(crate) category: TechCategory,
    #[serde(default)]
    pub(crate) description: Option<String>,
}

impl TechStackItem {
    /// Legend label, e.g. `Rust (35%)`.
    pub(crate) fn legend(&self) -> String {
        format!("{} ({}%)", self.name, self.percentage)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Screenshot {
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) description: String,
    pub(crate) image_url: String,
    #[serde(default)]
    pub(crate) thumbnail_url: Option<String>,
    #[serde(default)]
    pub(crate) alt: String,
}

impl Screenshot {
    /// Source used for thumbnails, falling back to the full image.
    pub(crate) fn thumbnail_source(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.image_url)
    }
}

/// Extended record shown by the project detail overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProjectDetail {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) overview: String,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) features: Vec<String>,
    #[serde(default)]
    pub(crate) challenges: Vec<String>,
    #[serde(default)]
    pub(crate) solutions: Vec<String>,
    #[serde(default)]
    pub(crate) results: Vec<String>,
    #[serde(default)]
    pub(crate) technologies: Vec<TechStackItem>,
    #[serde(default)]
    pub(crate) screenshots: Vec<Screenshot>,
    #[serde(default)]
    pub(crate) demo_url: Option<String>,
    #[serde(default)]
    pub(crate) github_url: Option<String>,
    pub(crate) duration: String,
    pub(crate) team_size: u32,
    pub(crate) role: String,
    #[serde(default)]
    pub(crate) responsibilities: Vec<String>,
}

fn period(start: &str, end: Option<&str>, open_label: &str) -> String {
    match end {
        Some(end) if !end.trim().is_empty() => format!("{start} - {end}"),
        _ => format!("{start} - {open_label}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skill(level: u8) -> Skill {
        Skill {
            name: String::from("Rust"),
            level,
            category: SkillCategory::Backend,
            description: None,
        }
    }

    #[test]
    fn given_skill_levels_when_rendered_then_stars_are_clamped() {
        assert_eq!(skill(3).stars(), "★★★");
        assert_eq!(skill(0).stars(), "★");
        assert_eq!(skill(9).stars(), "★★★★★");
    }

    #[test]
    fn given_open_ended_experience_when_period_rendered_then_present_is_used()
    {
        let experience: Experience = serde_json::from_str(
            r#"{"company":"Acme","position":"Dev","startDate":"2021-03"}"#,
        )
        .expect("experience should parse");

        assert_eq!(experience.period(), "2021-03 - Present");
        assert!(experience.description.is_empty());
    }

    #[test]
    fn given_open_ended_project_when_period_rendered_then_ongoing_is_used() {
        let project: Project = serde_json::from_str(
            r#"{"name":"Atlas","description":"d","role":"Lead",
                "startDate":"2023-01","endDate":""}"#,
        )
        .expect("project should parse");

        assert_eq!(project.period(), "2023-01 - Ongoing");
        assert_eq!(project.detail_id, None);
    }

    #[test]
    fn given_unknown_category_when_parsed_then_other_is_used() {
        let item: TechStackItem = serde_json::from_str(
            r##"{"name":"Figma","percentage":12.5,"color":"#F24E1E",
                "category":"design"}"##,
        )
        .expect("tech item should parse");

        assert_eq!(item.category, TechCategory::Other);
        assert_eq!(item.legend(), "Figma (12.5%)");
    }

    #[test]
    fn given_integer_percentage_when_legend_rendered_then_value_is_verbatim() {
        let item: TechStackItem = serde_json::from_str(
            r##"{"name":"Vue3","percentage":35,"color":"#4FC08D",
                "category":"frontend"}"##,
        )
        .expect("tech item should parse");

        assert_eq!(item.legend(), "Vue3 (35%)");
    }

    #[test]
    fn given_basic_info_when_headline_built_then_fields_are_joined() {
        let mut config = ResumeConfig::default();
        assert_eq!(config.headline(), "vita");

        config.basic_info.name = String::from("Alex");
        config.basic_info.years_of_experience = 6;
        config.basic_info.title = String::from("Engineer");
        config.basic_info.education = String::from("BSc");
        config.basic_info.location = String::from("Lisbon");

        assert_eq!(config.headline(), "Alex/6y/Engineer/BSc/Lisbon");
    }

    #[test]
    fn given_experience_when_used_as_menu_child_then_company_and_position_show()
    {
        let experience = Experience {
            company: String::from("Globex"),
            position: String::from("Engineer"),
            start_date: String::from("2020"),
            end_date: None,
            description: Vec::new(),
            technologies: Vec::new(),
            achievements: Vec::new(),
        };

        assert_eq!(ChildSource::label(&experience), "Globex");
        assert_eq!(experience.caption(), Some("Engineer"));
    }
}
