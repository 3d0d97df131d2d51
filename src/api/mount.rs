use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CarouselError, CarouselResult};

/// Presentation element the carousel requires from its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementRole {
    Track,
    PrevButton,
    NextButton,
    IndicatorContainer,
    CurrentIndexDisplay,
    TotalCountDisplay,
    PlayPauseControl,
}

impl ElementRole {
    /// Every role that must be present before the carousel can mount, in
    /// lookup order.
    pub const REQUIRED: [Self; 7] = [
        Self::Track,
        Self::PrevButton,
        Self::NextButton,
        Self::IndicatorContainer,
        Self::CurrentIndexDisplay,
        Self::TotalCountDisplay,
        Self::PlayPauseControl,
    ];

    /// Element id used by the stock carousel markup.
    #[must_use]
    pub fn default_id(self) -> &'static str {
        match self {
            Self::Track => "carouselTrack",
            Self::PrevButton => "prevBtn",
            Self::NextButton => "nextBtn",
            Self::IndicatorContainer => "indicators",
            Self::CurrentIndexDisplay => "currentSlide",
            Self::TotalCountDisplay => "totalSlides",
            Self::PlayPauseControl => "playPauseBtn",
        }
    }
}

impl fmt::Display for ElementRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Track => "track",
            Self::PrevButton => "previous button",
            Self::NextButton => "next button",
            Self::IndicatorContainer => "indicator container",
            Self::CurrentIndexDisplay => "current index display",
            Self::TotalCountDisplay => "total count display",
            Self::PlayPauseControl => "play/pause control",
        };
        write!(f, "{name} (#{})", self.default_id())
    }
}

/// Resolved presentation structure handed over by the host at mount time.
///
/// The number of slide ids defines the slide count for the lifetime of the
/// carousel.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MountDescriptor {
    #[serde(default)]
    pub elements: IndexMap<ElementRole, String>,
    #[serde(default)]
    pub slides: Vec<String>,
}

impl MountDescriptor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for the stock markup with `slide_count` slides.
    #[must_use]
    pub fn standard(slide_count: usize) -> Self {
        let mut mount = Self::new();
        for role in ElementRole::REQUIRED {
            mount = mount.with_element(role, role.default_id());
        }
        mount.with_slides((0..slide_count).map(|index| format!("slide-{index}")))
    }

    #[must_use]
    pub fn with_element(mut self, role: ElementRole, id: impl Into<String>) -> Self {
        self.elements.insert(role, id.into());
        self
    }

    #[must_use]
    pub fn without_element(mut self, role: ElementRole) -> Self {
        self.elements.shift_remove(&role);
        self
    }

    #[must_use]
    pub fn with_slides<I, S>(mut self, slides: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.slides = slides.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn element_id(&self, role: ElementRole) -> Option<&str> {
        self.elements
            .get(&role)
            .map(String::as_str)
            .filter(|id| !id.trim().is_empty())
    }

    /// Fails on the first required role that is absent or has a blank id.
    pub fn validate(&self) -> CarouselResult<()> {
        match ElementRole::REQUIRED
            .into_iter()
            .find(|role| self.element_id(*role).is_none())
        {
            Some(role) => Err(CarouselError::MissingElement { role }),
            None => Ok(()),
        }
    }
}
