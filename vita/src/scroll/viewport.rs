use iced::widget::scrollable::Viewport;

/// Last known geometry of the content scrollable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub(crate) struct ViewportMetrics {
    offset: f32,
    height: f32,
    content_height: f32,
}

impl ViewportMetrics {
    pub(crate) fn new(offset: f32, height: f32, content_height: f32) -> Self {
        Self {
            offset,
            height,
            content_height,
        }
    }

    pub(crate) fn from_viewport(viewport: &Viewport) -> Self {
        Self::new(
            viewport.absolute_offset().y,
            viewport.bounds().height,
            viewport.content_bounds().height,
        )
    }

    pub(crate) fn offset(&self) -> f32 {
        self.offset
    }

    pub(crate) fn height(&self) -> f32 {
        self.height
    }

    pub(crate) fn content_height(&self) -> f32 {
        self.content_height
    }

    pub(crate) fn set_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    /// Largest reachable offset, or `None` before the first measurement.
    pub(crate) fn max_offset(&self) -> Option<f32> {
        if self.content_height <= 0.0 {
            return None;
        }

        Some((self.content_height - self.height).max(0.0))
    }

    /// Clamp `target` into the scrollable range when it is known.
    pub(crate) fn clamp_offset(&self, target: f32) -> f32 {
        match self.max_offset() {
            Some(max) => target.clamp(0.0, max),
            None => target.max(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_short_tail_when_target_clamped_then_max_offset_is_used() {
        let metrics = ViewportMetrics::new(0.0, 600.0, 2000.0);
        assert_eq!(metrics.clamp_offset(1800.0), 1400.0);
        assert_eq!(metrics.clamp_offset(-5.0), 0.0);
    }

    #[test]
    fn given_unmeasured_viewport_when_target_clamped_then_only_floor_applies()
    {
        let metrics = ViewportMetrics::default();
        assert_eq!(metrics.max_offset(), None);
        assert_eq!(metrics.clamp_offset(900.0), 900.0);
    }

    #[test]
    fn given_content_shorter_than_viewport_when_clamped_then_offset_is_zero()
    {
        let metrics = ViewportMetrics::new(0.0, 800.0, 300.0);
        assert_eq!(metrics.clamp_offset(120.0), 0.0);
    }
}
