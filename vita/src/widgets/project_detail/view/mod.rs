pub(crate) mod carousel;
pub(crate) mod overlay;
pub(crate) mod tech_chart;
