pub(crate) mod resume_page;
