use std::f32::consts::{FRAC_PI_2, TAU};
use std::path::Path;

use crate::components::primitive::fallback_image::{ImageCache, ImageSource};
use crate::content::model::{ProjectDetail, Screenshot, TechStackItem};

/// Read-only view model for the project detail overlay.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ProjectDetailViewModel<'a> {
    pub(crate) detail: &'a ProjectDetail,
    pub(crate) index: usize,
    pub(crate) images: &'a ImageCache,
    pub(crate) content_dir: &'a Path,
}

impl<'a> ProjectDetailViewModel<'a> {
    pub(crate) fn current_screenshot(&self) -> Option<&'a Screenshot> {
        self.detail.screenshots.get(self.index)
    }

    pub(crate) fn image_source(&self, raw: &str) -> ImageSource {
        ImageSource::resolve(self.content_dir, raw)
    }
}

/// One pie slice in radians, clockwise from twelve o'clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Slice {
    pub(crate) start: f32,
    pub(crate) sweep: f32,
}

/// Inner radius of the chart ring as a share of the outer radius.
pub(crate) const RING_INNER_RATIO: f32 = 0.4 / 0.7;

/// Stroke geometry of the chart ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Ring {
    /// Radius the slices are stroked along.
    pub(crate) radius: f32,
    pub(crate) thickness: f32,
}

/// Ring fitting a square of side `extent` minus `margin` on each side.
pub(crate) fn ring(extent: f32, margin: f32) -> Ring {
    let outer = (extent / 2.0 - margin).max(0.0);
    let inner = outer * RING_INNER_RATIO;

    Ring {
        radius: (outer + inner) / 2.0,
        thickness: outer - inner,
    }
}

/// Slice angles proportional to each item's share of the summed
/// percentages. Empty when nothing positive remains.
pub(crate) fn pie_slices(items: &[TechStackItem]) -> Vec<Slice> {
    let total: f32 = items.iter().map(|item| item.percentage.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut start = -FRAC_PI_2;
    items
        .iter()
        .map(|item| {
            let sweep = item.percentage.max(0.0) / total * TAU;
            let slice = Slice { start, sweep };
            start += sweep;
            slice
        })
        .collect()
}

/// Every image a detail renders: full-size and thumbnail sources.
pub(crate) fn screenshot_sources(
    detail: &ProjectDetail,
    content_dir: &Path,
) -> Vec<ImageSource> {
    let mut sources: Vec<ImageSource> = Vec::new();
    for shot in &detail.screenshots {
        for raw in [shot.image_url.as_str(), shot.thumbnail_source()] {
            let source = ImageSource::resolve(content_dir, raw);
            if !sources.contains(&source) {
                sources.push(source);
            }
        }
    }
    sources
}

pub(crate) fn wrap_next(index: usize, count: usize) -> usize {
    if count == 0 { 0 } else { (index + 1) % count }
}

pub(crate) fn wrap_previous(index: usize, count: usize) -> usize {
    match count {
        0 => 0,
        _ if index == 0 => count - 1,
        _ => (index - 1).min(count - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::TechCategory;

    fn tech(percentage: f32) -> TechStackItem {
        TechStackItem {
            name: String::from("Vue3"),
            percentage,
            color: String::from("#4FC08D"),
            category: TechCategory::Frontend,
            description: None,
        }
    }

    #[test]
    fn given_first_index_when_moving_back_then_carousel_wraps_to_last() {
        assert_eq!(wrap_previous(0, 3), 2);
        assert_eq!(wrap_previous(2, 3), 1);
        assert_eq!(wrap_previous(0, 0), 0);
    }

    #[test]
    fn given_last_index_when_moving_forward_then_carousel_wraps_to_first() {
        assert_eq!(wrap_next(2, 3), 0);
        assert_eq!(wrap_next(0, 3), 1);
        assert_eq!(wrap_next(0, 0), 0);
    }

    #[test]
    fn given_percentages_when_sliced_then_sweeps_cover_the_circle() {
        let slices = pie_slices(&[tech(35.0), tech(20.0), tech(45.0)]);

        let total: f32 = slices.iter().map(|slice| slice.sweep).sum();
        assert!((total - TAU).abs() < 1e-4);
        assert_eq!(slices[0].start, -FRAC_PI_2);
        let expected = slices[0].start + slices[0].sweep;
        assert!((slices[1].start - expected).abs() < 1e-6);
    }

    #[test]
    fn given_percentages_not_summing_to_hundred_when_sliced_then_shares_scale() {
        let slices = pie_slices(&[tech(30.0), tech(30.0)]);

        assert!((slices[0].sweep - TAU / 2.0).abs() < 1e-4);
    }

    #[test]
    fn given_chart_extent_when_ring_built_then_hole_matches_inner_ratio() {
        let ring = ring(180.0, 4.0);

        let outer = ring.radius + ring.thickness / 2.0;
        let inner = ring.radius - ring.thickness / 2.0;
        assert!((outer - 86.0).abs() < 1e-4);
        assert!((inner / outer - 0.4 / 0.7).abs() < 1e-4);
    }

    #[test]
    fn given_extent_smaller_than_margin_when_ring_built_then_it_collapses() {
        assert_eq!(ring(4.0, 4.0), Ring { radius: 0.0, thickness: 0.0 });
    }

    #[test]
    fn given_no_positive_share_when_sliced_then_no_slices() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[tech(0.0)]).is_empty());
    }
}
