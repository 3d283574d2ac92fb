use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use iced::widget::{column, container, image, svg, text};
use iced::{Element, Length, Task, alignment};
use thiserror::Error;

use crate::icons;
use crate::theme::{ThemeProps, with_alpha};

const FILE_SCHEME: &str = "file://";
const PLACEHOLDER_TEXT_SIZE: f32 = 13.0;
const PLACEHOLDER_RADIUS: f32 = 6.0;
const FALLBACK_ICON_SIZE: f32 = 48.0;

/// Where an image is read from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ImageSource {
    File(PathBuf),
    Remote(String),
}

impl ImageSource {
    /// Interpret `raw` as a URL or a path relative to `base_dir`.
    pub(crate) fn resolve(base_dir: &Path, raw: &str) -> Self {
        let raw = raw.trim();
        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Self::Remote(raw.to_string());
        }

        let path = Path::new(raw.strip_prefix(FILE_SCHEME).unwrap_or(raw));
        if path.is_absolute() {
            Self::File(path.to_path_buf())
        } else {
            Self::File(base_dir.join(path))
        }
    }
}

/// Errors raised while loading an image.
#[derive(Debug, Error)]
pub(crate) enum ImageError {
    #[error("image IO failed")]
    Io(#[from] std::io::Error),
    #[error("image decode failed")]
    Decode(#[from] ::image::ImageError),
    #[error("remote image {0} is not supported")]
    Remote(String),
}

/// Image drawn in place of a source that could not be loaded.
#[derive(Debug, Clone)]
pub(crate) struct Fallback {
    handle: svg::Handle,
}

impl Fallback {
    /// The built-in placeholder picture.
    pub(crate) fn bundled() -> Self {
        Self::from_memory(icons::IMAGE_PLACEHOLDER)
    }

    pub(crate) fn from_memory(bytes: &'static [u8]) -> Self {
        Self {
            handle: svg::Handle::from_memory(bytes),
        }
    }

    pub(crate) fn handle(&self) -> &svg::Handle {
        &self.handle
    }
}

/// Display state of one image.
#[derive(Debug, Clone)]
pub(crate) enum ImageSlot {
    Loading,
    Ready(image::Handle),
    Fallback(Fallback),
}

/// Session cache of image slots keyed by source.
#[derive(Debug, Default)]
pub(crate) struct ImageCache {
    slots: HashMap<ImageSource, ImageSlot>,
}

impl ImageCache {
    pub(crate) fn slot(&self, source: &ImageSource) -> &ImageSlot {
        self.slots.get(source).unwrap_or(&ImageSlot::Loading)
    }

    /// Mark `source` as loading. Returns `false` if it was requested
    /// before, so each source is loaded at most once.
    pub(crate) fn begin(&mut self, source: &ImageSource) -> bool {
        if self.slots.contains_key(source) {
            return false;
        }

        self.slots.insert(source.clone(), ImageSlot::Loading);
        true
    }

    pub(crate) fn resolve(&mut self, source: ImageSource, slot: ImageSlot) {
        self.slots.insert(source, slot);
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}

/// Decode `source` off the update loop, swapping to `fallback` on any
/// failure.
pub(crate) fn load(
    source: ImageSource,
    fallback: Fallback,
) -> Task<(ImageSource, ImageSlot)> {
    let target = source.clone();
    Task::perform(async move { decode(&target) }, move |result| {
        let slot = settle(&source, result, fallback);
        (source, slot)
    })
}

fn settle(
    source: &ImageSource,
    result: Result<image::Handle, ImageError>,
    fallback: Fallback,
) -> ImageSlot {
    match result {
        Ok(handle) => ImageSlot::Ready(handle),
        Err(err) => {
            log::warn!("image {source:?} unavailable: {err}");
            ImageSlot::Fallback(fallback)
        },
    }
}

fn decode(source: &ImageSource) -> Result<image::Handle, ImageError> {
    let path = match source {
        ImageSource::File(path) => path,
        ImageSource::Remote(url) => return Err(ImageError::Remote(url.clone())),
    };

    let bytes = fs::read(path)?;
    let rgba = ::image::load_from_memory(&bytes)?.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(image::Handle::from_rgba(width, height, rgba.into_raw()))
}

/// Props for rendering an image slot.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FallbackImageProps<'a> {
    pub(crate) slot: &'a ImageSlot,
    pub(crate) alt: &'a str,
    pub(crate) width: Length,
    pub(crate) height: Length,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the image, a loading box, or the fallback picture on failure.
pub(crate) fn view<'a, Message: 'a>(
    props: FallbackImageProps<'a>,
) -> Element<'a, Message> {
    let handle = match props.slot {
        ImageSlot::Ready(handle) => handle.clone(),
        ImageSlot::Loading => {
            return placeholder(props, text_label(props, "Loading…"));
        },
        ImageSlot::Fallback(fallback) => {
            return placeholder(props, fallback_content(props, fallback));
        },
    };

    image(handle)
        .width(props.width)
        .height(props.height)
        .content_fit(iced::ContentFit::Contain)
        .into()
}

fn text_label<'a, Message: 'a>(
    props: FallbackImageProps<'a>,
    label: &'a str,
) -> Element<'a, Message> {
    let color = props.theme.theme.iced_palette().dim_foreground;
    text(label).size(PLACEHOLDER_TEXT_SIZE).color(color).into()
}

fn fallback_content<'a, Message: 'a>(
    props: FallbackImageProps<'a>,
    fallback: &Fallback,
) -> Element<'a, Message> {
    let color = props.theme.theme.iced_palette().dim_foreground;
    let picture = svg::Svg::new(fallback.handle().clone())
        .width(Length::Fixed(FALLBACK_ICON_SIZE))
        .height(Length::Fixed(FALLBACK_ICON_SIZE))
        .style(move |_, _| svg::Style { color: Some(color) });

    column![picture, text_label(props, props.alt)]
        .spacing(6.0)
        .align_x(alignment::Horizontal::Center)
        .into()
}

fn placeholder<'a, Message: 'a>(
    props: FallbackImageProps<'a>,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let palette = props.theme.theme.iced_palette().clone();

    container(content)
    .width(props.width)
    .height(props.height)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| container::Style {
        background: Some(with_alpha(palette.surface, 0.8).into()),
        border: iced::Border {
            width: 1.0,
            color: palette.dim_accent,
            radius: PLACEHOLDER_RADIUS.into(),
        },
        ..Default::default()
    })
    .into()
}
