pub(crate) mod navigation;
pub(crate) mod project_detail;
pub(crate) mod resume;

pub(crate) struct Widgets {
    pub(crate) navigation: navigation::NavigationWidget,
    pub(crate) resume: resume::ResumeWidget,
    pub(crate) project_detail: project_detail::ProjectDetailWidget,
}
