use crate::core::data::colour::Colour;
use crate::core::palettes::{fire::fire, ice::ice, smooth::smooth};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaletteKinds {
    #[default]
    Smooth,
    Fire,
    Ice,
}

impl PaletteKinds {
    /// Cycle order used by the palette key; index 0 is the default.
    pub const ALL: &'static [Self] = &[Self::Smooth, Self::Fire, Self::Ice];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Smooth => "smooth",
            Self::Fire => "fire",
            Self::Ice => "ice",
        }
    }

    /// Looks up a palette by cycle index, wrapping out-of-range indices.
    #[must_use]
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    #[must_use]
    pub fn evaluate(self, t: f64) -> Colour {
        match self {
            Self::Smooth => smooth(t),
            Self::Fire => fire(t),
            Self::Ice => ice(t),
        }
    }
}

impl std::fmt::Display for PaletteKinds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
