use iced::widget::{
    Column, Row, button, column, container, row, scrollable, text,
};
use iced::{Color, Element, Font, Length, alignment, font};

use crate::content::model::{
    Education, Experience, Project, ResumeConfig, SkillCategory,
};
use crate::content::sections::{
    BASIC_INFO, CONTACT, EDUCATION, EXPERIENCES, OTHER_INFO, PROJECTS,
    SKILLS, experience_key, project_key, section_label,
};
use crate::probe::CONTENT_SCROLL_ID;
use crate::scroll::ViewportMetrics;
use crate::style::{self, Emphasis};
use crate::theme::{IcedColorPalette, ThemeProps, with_alpha};
use crate::widgets::resume::event::ResumeEvent;
use crate::widgets::resume::model::{ResumeViewModel, SectionLook};

const PAGE_MAX_WIDTH: f32 = 860.0;
const PAGE_PADDING: f32 = 28.0;
const SECTION_SPACING: f32 = 20.0;
const SECTION_PADDING: f32 = 20.0;
const SECTION_BODY_SPACING: f32 = 12.0;

const NAME_SIZE: f32 = 30.0;
const SECTION_TITLE_SIZE: f32 = 19.0;
const ENTRY_TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 14.0;
const META_SIZE: f32 = 12.0;

const ENTRY_PADDING: f32 = 14.0;
const ENTRY_SPACING: f32 = 6.0;
const LIST_SPACING: f32 = 4.0;
const CHIP_PADDING: [f32; 2] = [3.0, 10.0];
const CHIP_SPACING: f32 = 6.0;
const CONTACT_LABEL_WIDTH: f32 = 90.0;

const BULLET: &str = "•";
const DETAILS_LABEL: &str = "Details";
const OTHER_INFO_EMPTY: &str = "Nothing else to add yet.";

type PageElement<'a> = Element<'a, ResumeEvent, iced::Theme, iced::Renderer>;

/// Props for the résumé page.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResumePageProps<'a> {
    pub(crate) vm: ResumeViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Colors of one section, faded by its entrance opacity.
#[derive(Debug, Clone, Copy)]
struct Ink {
    text: Color,
    dim: Color,
    accent: Color,
    stars: Color,
    opacity: f32,
}

impl Ink {
    fn new(palette: &IcedColorPalette, opacity: f32) -> Self {
        Self {
            text: with_alpha(palette.foreground, opacity),
            dim: with_alpha(palette.dim_foreground, opacity),
            accent: with_alpha(palette.accent, opacity),
            stars: with_alpha(palette.yellow, opacity),
            opacity,
        }
    }
}

/// Render every résumé section inside the content scrollable.
pub(crate) fn view(props: ResumePageProps<'_>) -> PageElement<'_> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let mut sections = Column::new()
        .spacing(SECTION_SPACING)
        .width(Length::Fill)
        .max_width(PAGE_MAX_WIDTH);

    for (id, look) in vm.sections() {
        let ink = Ink::new(palette, look.opacity);
        let body = section_body(id, vm, ink, palette);
        sections = sections.push(section_card(id, body, look, palette));
    }

    let page = container(sections)
        .width(Length::Fill)
        .padding(PAGE_PADDING)
        .align_x(alignment::Horizontal::Center);

    scrollable(page)
        .id(CONTENT_SCROLL_ID)
        .on_scroll(|viewport| {
            ResumeEvent::Scrolled(ViewportMetrics::from_viewport(&viewport))
        })
        .width(Length::Fill)
        .height(Length::Fill)
        .style(style::thin_scroll_style(palette.clone()))
        .into()
}

fn section_body<'a>(
    id: &str,
    vm: ResumeViewModel<'a>,
    ink: Ink,
    palette: &IcedColorPalette,
) -> PageElement<'a> {
    let resume = vm.resume;

    match id {
        BASIC_INFO => basic_info(resume, ink),
        CONTACT => contact(resume, ink),
        SKILLS => skills(resume, ink),
        EXPERIENCES => {
            let entries =
                resume.experiences.iter().enumerate().map(|(index, item)| {
                    let key = experience_key(index);
                    let highlighted = vm.highlighted == Some(key.as_str());
                    let body = experience_entry(item, ink);
                    entry_card(key, body, highlighted, ink.opacity, palette)
                });

            Column::with_children(entries)
                .spacing(SECTION_BODY_SPACING)
                .into()
        },
        PROJECTS => {
            let entries =
                resume.projects.iter().enumerate().map(|(index, item)| {
                    let key = project_key(index);
                    let highlighted = vm.highlighted == Some(key.as_str());
                    let body = project_entry(item, ink, palette);
                    entry_card(key, body, highlighted, ink.opacity, palette)
                });

            Column::with_children(entries)
                .spacing(SECTION_BODY_SPACING)
                .into()
        },
        EDUCATION => education(&resume.education, ink),
        OTHER_INFO => other_info(vm, ink),
        _ => Column::new().into(),
    }
}

/// Wrap a section body in its anchored card.
fn section_card<'a>(
    id: &'static str,
    body: PageElement<'a>,
    look: SectionLook,
    palette: &IcedColorPalette,
) -> PageElement<'a> {
    let title = text(section_label(id))
        .size(SECTION_TITLE_SIZE)
        .font(bold());
    let palette = palette.clone();

    container(column![title, body].spacing(SECTION_BODY_SPACING))
        .id(id)
        .width(Length::Fill)
        .padding(SECTION_PADDING)
        .style(move |_| {
            style::section_card_style(&palette, look.emphasis, look.opacity)
        })
        .into()
}

/// Wrap one experience or project in its anchored card.
fn entry_card<'a>(
    key: String,
    body: PageElement<'a>,
    highlighted: bool,
    opacity: f32,
    palette: &IcedColorPalette,
) -> PageElement<'a> {
    let emphasis = if highlighted {
        Emphasis::Highlight
    } else {
        Emphasis::None
    };
    let palette = palette.clone();

    container(body)
        .id(key)
        .width(Length::Fill)
        .padding(ENTRY_PADDING)
        .style(move |_| {
            let mut style =
                style::section_card_style(&palette, emphasis, opacity);
            if !highlighted {
                let background = with_alpha(palette.background, opacity);
                style.background = Some(background.into());
            }
            style
        })
        .into()
}

fn basic_info(resume: &ResumeConfig, ink: Ink) -> PageElement<'_> {
    let info = &resume.basic_info;

    let name = text(&info.name).size(NAME_SIZE).font(bold()).color(ink.text);
    let title = text(&info.title).size(ENTRY_TITLE_SIZE).color(ink.accent);

    let mut facts = Vec::new();
    if !info.location.is_empty() {
        facts.push(info.location.clone());
    }
    if info.years_of_experience > 0 {
        facts.push(format!("{} years of experience", info.years_of_experience));
    }
    if !info.education.is_empty() {
        facts.push(info.education.clone());
    }

    let facts = Row::with_children(facts.into_iter().map(|fact| {
        text(fact).size(META_SIZE).color(ink.dim).into()
    }))
    .spacing(CHIP_SPACING * 2.0);

    let summary = text(&info.summary).size(BODY_SIZE).color(ink.text);

    column![name, title, facts, summary]
        .spacing(ENTRY_SPACING)
        .into()
}

fn contact(resume: &ResumeConfig, ink: Ink) -> PageElement<'_> {
    let contact = &resume.contact;
    let entries = [
        ("Email", Some(&contact.email)),
        ("Phone", Some(&contact.phone)),
        ("GitHub", contact.github.as_ref()),
        ("LinkedIn", contact.linkedin.as_ref()),
        ("Website", contact.website.as_ref()),
    ];

    let rows = entries
        .into_iter()
        .filter_map(|(label, value)| {
            value.filter(|value| !value.is_empty()).map(|value| (label, value))
        })
        .map(|(label, value)| {
            row![
                text(label)
                    .size(META_SIZE)
                    .color(ink.dim)
                    .width(Length::Fixed(CONTACT_LABEL_WIDTH)),
                text(value).size(BODY_SIZE).color(ink.text),
            ]
            .align_y(alignment::Vertical::Center)
            .into()
        });

    Column::with_children(rows).spacing(LIST_SPACING).into()
}

fn skills(resume: &ResumeConfig, ink: Ink) -> PageElement<'_> {
    let groups = SkillCategory::ALL.into_iter().filter_map(|category| {
        let mut group = resume
            .skills
            .iter()
            .filter(|skill| skill.category == category)
            .peekable();
        group.peek()?;

        let rows = group.map(|skill| {
            let header = row![
                text(&skill.name)
                    .size(BODY_SIZE)
                    .color(ink.text)
                    .width(Length::Fill),
                text(skill.stars()).size(BODY_SIZE).color(ink.stars),
            ]
            .align_y(alignment::Vertical::Center);

            let mut entry = column![header].spacing(2.0);
            if let Some(description) = &skill.description {
                entry = entry
                    .push(text(description).size(META_SIZE).color(ink.dim));
            }
            entry.into()
        });

        let heading = text(category.label())
            .size(META_SIZE)
            .font(bold())
            .color(ink.accent);

        Some(
            column![heading, Column::with_children(rows).spacing(ENTRY_SPACING)]
                .spacing(ENTRY_SPACING)
                .into(),
        )
    });

    Column::with_children(groups)
        .spacing(SECTION_BODY_SPACING)
        .into()
}

fn experience_entry(experience: &Experience, ink: Ink) -> PageElement<'_> {
    let heading = row![
        text(&experience.company)
            .size(ENTRY_TITLE_SIZE)
            .font(bold())
            .color(ink.text)
            .width(Length::Fill),
        text(experience.period()).size(META_SIZE).color(ink.dim),
    ]
    .align_y(alignment::Vertical::Center);

    let mut entry = column![
        heading,
        text(&experience.position).size(BODY_SIZE).color(ink.accent),
        bullets(&experience.description, ink),
    ]
    .spacing(ENTRY_SPACING);

    if !experience.achievements.is_empty() {
        entry = entry
            .push(text("Achievements").size(META_SIZE).color(ink.dim))
            .push(bullets(&experience.achievements, ink));
    }

    entry.push(chips(&experience.technologies, ink)).into()
}

fn project_entry<'a>(
    project: &'a Project,
    ink: Ink,
    palette: &IcedColorPalette,
) -> PageElement<'a> {
    let mut heading = Row::new()
        .spacing(CHIP_SPACING)
        .align_y(alignment::Vertical::Center)
        .push(
            text(&project.name)
                .size(ENTRY_TITLE_SIZE)
                .font(bold())
                .color(ink.text)
                .width(Length::Fill),
        )
        .push(text(project.period()).size(META_SIZE).color(ink.dim));

    if let Some(detail_id) = &project.detail_id {
        heading = heading.push(
            button(text(DETAILS_LABEL).size(META_SIZE))
                .on_press(ResumeEvent::DetailsPressed {
                    detail_id: detail_id.clone(),
                })
                .padding(CHIP_PADDING)
                .style(style::link_button_style(palette, false)),
        );
    }

    let mut entry = column![
        heading,
        text(&project.role).size(BODY_SIZE).color(ink.accent),
        text(&project.description).size(BODY_SIZE).color(ink.text),
        bullets(&project.highlights, ink),
        chips(&project.technologies, ink),
    ]
    .spacing(ENTRY_SPACING);

    if let Some(link) = &project.link {
        entry = entry.push(text(link).size(META_SIZE).color(ink.dim));
    }

    entry.into()
}

fn education(education: &Education, ink: Ink) -> PageElement<'_> {
    let heading = row![
        text(&education.school)
            .size(ENTRY_TITLE_SIZE)
            .font(bold())
            .color(ink.text)
            .width(Length::Fill),
        text(education.period()).size(META_SIZE).color(ink.dim),
    ]
    .align_y(alignment::Vertical::Center);

    let degree = text(format!("{} · {}", education.degree, education.major))
        .size(BODY_SIZE)
        .color(ink.accent);

    let mut entry = column![heading, degree].spacing(ENTRY_SPACING);
    if let Some(description) = &education.description {
        entry = entry.push(text(description).size(BODY_SIZE).color(ink.text));
    }

    entry.into()
}

fn other_info(vm: ResumeViewModel<'_>, ink: Ink) -> PageElement<'_> {
    let groups = vm.other_info_groups();
    if groups.is_empty() {
        return text(OTHER_INFO_EMPTY)
            .size(BODY_SIZE)
            .color(ink.dim)
            .into();
    }

    let blocks = groups.into_iter().map(|group| {
        let body = if group.as_chips {
            chips(group.items, ink)
        } else {
            bullets(group.items, ink)
        };

        let heading = text(group.label)
            .size(META_SIZE)
            .font(bold())
            .color(ink.accent);

        column![heading, body].spacing(ENTRY_SPACING).into()
    });

    Column::with_children(blocks)
        .spacing(SECTION_BODY_SPACING)
        .into()
}

fn bullets(items: &[String], ink: Ink) -> PageElement<'_> {
    let rows = items.iter().map(|item| {
        row![
            text(BULLET).size(BODY_SIZE).color(ink.dim),
            text(item).size(BODY_SIZE).color(ink.text).width(Length::Fill),
        ]
        .spacing(CHIP_SPACING)
        .into()
    });

    Column::with_children(rows).spacing(LIST_SPACING).into()
}

fn chips(items: &[String], ink: Ink) -> PageElement<'_> {
    let chips = items.iter().map(|item| {
        let background = with_alpha(ink.accent, 0.15 * ink.opacity);
        container(text(item).size(META_SIZE).color(ink.text))
            .padding(CHIP_PADDING)
            .style(move |_| container::Style {
                background: Some(background.into()),
                border: iced::Border {
                    radius: 10.0.into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .into()
    });

    Row::with_children(chips)
        .spacing(CHIP_SPACING)
        .wrap()
        .vertical_spacing(CHIP_SPACING)
        .into()
}

fn bold() -> Font {
    Font {
        weight: font::Weight::Bold,
        ..Font::DEFAULT
    }
}
