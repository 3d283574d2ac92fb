use iced::widget::canvas::{self, Frame, Geometry, Path, Stroke};
use iced::widget::{Column, Row, column, container, row, text};
use iced::{Color, Element, Length, Radians, Rectangle, Renderer, Theme};
use iced::{alignment, mouse};

use crate::content::model::TechStackItem;
use crate::content::tech_stack_stats;
use crate::theme::{IcedColorPalette, ThemeProps, hex_or};
use crate::widgets::project_detail::event::ProjectDetailEvent;
use crate::widgets::project_detail::model::{Slice, pie_slices, ring};

const CHART_SIZE: f32 = 180.0;
const RING_MARGIN: f32 = 4.0;
const LEGEND_SWATCH: f32 = 10.0;
const LEGEND_FONT_SIZE: f32 = 12.0;
const LEGEND_SPACING: f32 = 6.0;
const STATS_TITLE_SIZE: f32 = 13.0;
const STATS_FONT_SIZE: f32 = 12.0;
const CHART_SPACING: f32 = 24.0;

/// Props for the technology composition chart.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TechChartProps<'a> {
    pub(crate) technologies: &'a [TechStackItem],
    pub(crate) theme: ThemeProps<'a>,
}

/// Donut of author-asserted shares, one slice per technology.
#[derive(Debug)]
struct TechDonut {
    slices: Vec<(Slice, Color)>,
    empty: Color,
}

impl<Message> canvas::Program<Message> for TechDonut {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();
        let ring = ring(bounds.width.min(bounds.height), RING_MARGIN);

        if self.slices.is_empty() {
            let hole = Path::circle(center, ring.radius);
            let stroke = Stroke::default()
                .with_color(self.empty)
                .with_width(ring.thickness);
            frame.stroke(&hole, stroke);
        }

        for (slice, color) in &self.slices {
            let path = Path::new(|builder| {
                builder.arc(canvas::path::Arc {
                    center,
                    radius: ring.radius,
                    start_angle: Radians(slice.start),
                    end_angle: Radians(slice.start + slice.sweep),
                });
            });
            let stroke = Stroke::default()
                .with_color(*color)
                .with_width(ring.thickness);
            frame.stroke(&path, stroke);
        }

        vec![frame.into_geometry()]
    }
}

/// Render the donut, its legend and the per-category totals.
pub(crate) fn view(
    props: TechChartProps<'_>,
) -> Element<'_, ProjectDetailEvent, Theme, Renderer> {
    let palette = props.theme.theme.iced_palette();
    let colors: Vec<Color> = props
        .technologies
        .iter()
        .map(|item| hex_or(&item.color, palette.accent))
        .collect();

    let donut = TechDonut {
        slices: pie_slices(props.technologies)
            .into_iter()
            .zip(colors.iter().copied())
            .collect(),
        empty: palette.overlay,
    };
    let donut = canvas::Canvas::new(donut)
        .width(Length::Fixed(CHART_SIZE))
        .height(Length::Fixed(CHART_SIZE));

    let legend = Column::with_children(
        props
            .technologies
            .iter()
            .zip(colors)
            .map(|(item, color)| legend_row(item, color, palette)),
    )
    .spacing(LEGEND_SPACING);

    let chart = row![donut, legend]
        .spacing(CHART_SPACING)
        .align_y(alignment::Vertical::Center);

    column![chart, category_stats(props.technologies, palette)]
        .spacing(CHART_SPACING)
        .width(Length::Fill)
        .into()
}

fn legend_row<'a>(
    item: &'a TechStackItem,
    color: Color,
    palette: &IcedColorPalette,
) -> Element<'a, ProjectDetailEvent, Theme, Renderer> {
    let swatch = container(text(""))
        .width(Length::Fixed(LEGEND_SWATCH))
        .height(Length::Fixed(LEGEND_SWATCH))
        .style(move |_| container::Style {
            background: Some(color.into()),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut label = column![
        text(item.legend())
            .size(LEGEND_FONT_SIZE)
            .color(palette.foreground)
    ];
    if let Some(description) = &item.description {
        label = label.push(
            text(description)
                .size(LEGEND_FONT_SIZE - 1.0)
                .color(palette.dim_foreground),
        );
    }

    row![swatch, label]
        .spacing(LEGEND_SPACING)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn category_stats<'a>(
    technologies: &'a [TechStackItem],
    palette: &IcedColorPalette,
) -> Element<'a, ProjectDetailEvent, Theme, Renderer> {
    let blocks = tech_stack_stats(technologies).into_iter().map(|stats| {
        let title = text(format!("{} · {}%", stats.category.label(), stats.total))
            .size(STATS_TITLE_SIZE)
            .color(palette.accent);
        let names: Vec<&str> =
            stats.items.iter().map(|item| item.name.as_str()).collect();
        let names = text(names.join(", "))
            .size(STATS_FONT_SIZE)
            .color(palette.dim_foreground);

        column![title, names].spacing(2.0).width(Length::Fill).into()
    });

    Row::with_children(blocks)
        .spacing(CHART_SPACING)
        .wrap()
        .vertical_spacing(LEGEND_SPACING)
        .into()
}
