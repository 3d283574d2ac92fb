//! Layout probe that measures rendered sections inside the content
//! scrollable and reports them for registration.

use iced::Rectangle;
use iced::Task;
use iced::Vector;
use iced::advanced::widget::operation::{Outcome, Scrollable};
use iced::advanced::widget::{Id, Operation, operate};

use crate::registry::SectionHandle;
use crate::scroll::ViewportMetrics;

/// Widget id of the scrollable hosting every résumé section.
pub(crate) const CONTENT_SCROLL_ID: &str = "resume-content";

/// Sections found during one probe pass plus the scrollable geometry.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LayoutSnapshot {
    pub(crate) sections: Vec<(String, SectionHandle)>,
    pub(crate) viewport: ViewportMetrics,
}

struct SectionProbe {
    scrollable: Id,
    targets: Vec<(Id, String)>,
    content_top: Option<f32>,
    viewport: Option<ViewportMetrics>,
    sections: Vec<(String, SectionHandle)>,
}

impl SectionProbe {
    fn new(keys: Vec<String>) -> Self {
        Self {
            scrollable: Id::new(CONTENT_SCROLL_ID),
            targets: keys
                .into_iter()
                .map(|key| (Id::from(key.clone()), key))
                .collect(),
            content_top: None,
            viewport: None,
            sections: Vec::new(),
        }
    }
}

impl Operation<LayoutSnapshot> for SectionProbe {
    fn traverse(
        &mut self,
        operate: &mut dyn FnMut(&mut dyn Operation<LayoutSnapshot>),
    ) {
        operate(self);
    }

    fn scrollable(
        &mut self,
        id: Option<&Id>,
        bounds: Rectangle,
        content_bounds: Rectangle,
        translation: Vector,
        _state: &mut dyn Scrollable,
    ) {
        if id != Some(&self.scrollable) {
            return;
        }

        self.content_top = Some(content_bounds.y);
        self.viewport = Some(ViewportMetrics::new(
            translation.y,
            bounds.height,
            content_bounds.height,
        ));
    }

    fn container(&mut self, id: Option<&Id>, bounds: Rectangle) {
        let (Some(id), Some(content_top)) = (id, self.content_top) else {
            return;
        };

        if let Some((_, key)) =
            self.targets.iter().find(|(target, _)| target == id)
        {
            self.sections.push((
                key.clone(),
                SectionHandle::new(bounds.y - content_top, bounds.height),
            ));
        }
    }

    fn finish(&self) -> Outcome<LayoutSnapshot> {
        // Without the scrollable in the tree there is nothing to report.
        match self.viewport {
            Some(viewport) => Outcome::Some(LayoutSnapshot {
                sections: self.sections.clone(),
                viewport,
            }),
            None => Outcome::None,
        }
    }
}

/// Measure the containers whose ids match `keys`.
///
/// Offsets are relative to the top of the scroll content, so they do not
/// depend on the current scroll position.
pub(crate) fn measure_sections(keys: Vec<String>) -> Task<LayoutSnapshot> {
    operate(SectionProbe::new(keys))
}

#[cfg(test)]
mod tests {
    use iced::advanced::widget::operation::scrollable::{
        AbsoluteOffset, RelativeOffset,
    };

    use super::*;

    struct NoopScrollable;

    impl Scrollable for NoopScrollable {
        fn snap_to(&mut self, _offset: RelativeOffset<Option<f32>>) {}

        fn scroll_to(
            &mut self,
            _offset: AbsoluteOffset<Option<f32>>,
        ) {
        }

        fn scroll_by(
            &mut self,
            _offset: AbsoluteOffset,
            _bounds: Rectangle,
            _content_bounds: Rectangle,
        ) {
        }
    }

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle {
            x: 0.0,
            y,
            width: 400.0,
            height,
        }
    }

    #[test]
    fn given_sections_inside_scrollable_when_probed_then_offsets_are_relative()
    {
        let mut probe = SectionProbe::new(vec![
            String::from("skills"),
            String::from("project-0"),
        ]);

        probe.scrollable(
            Some(&Id::new(CONTENT_SCROLL_ID)),
            rect(40.0, 600.0),
            rect(40.0, 2400.0),
            Vector::new(0.0, 120.0),
            &mut NoopScrollable,
        );
        probe.container(Some(&Id::new("skills")), rect(840.0, 300.0));
        probe.container(Some(&Id::new("unrelated")), rect(900.0, 20.0));
        probe.container(None, rect(910.0, 20.0));
        probe.container(
            Some(&Id::from(String::from("project-0"))),
            rect(1540.0, 90.0),
        );

        let Outcome::Some(snapshot) = probe.finish() else {
            panic!("probe should report a snapshot");
        };

        assert_eq!(
            snapshot.sections,
            vec![
                (String::from("skills"), SectionHandle::new(800.0, 300.0)),
                (String::from("project-0"), SectionHandle::new(1500.0, 90.0)),
            ]
        );
        assert_eq!(snapshot.viewport, ViewportMetrics::new(120.0, 600.0, 2400.0));
    }

    #[test]
    fn given_missing_scrollable_when_probed_then_nothing_is_reported() {
        let mut probe = SectionProbe::new(vec![String::from("skills")]);
        probe.container(Some(&Id::new("skills")), rect(10.0, 10.0));

        assert!(matches!(probe.finish(), Outcome::None));
    }
}
