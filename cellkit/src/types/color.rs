/// A concrete 24-bit terminal color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const DARK_OLIVE_GREEN: Rgb = Rgb::new(175, 215, 95);
    pub const DARK_ORANGE: Rgb = Rgb::new(255, 135, 0);
    pub const GREY39: Rgb = Rgb::new(98, 98, 98);
    pub const PLUM1: Rgb = Rgb::new(255, 175, 255);
    pub const GOLD1: Rgb = Rgb::new(255, 215, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground used when a widget leaves it unset.
pub const DEFAULT_FOREGROUND: Rgb = Rgb::WHITE;
/// Background used when a widget leaves it unset.
pub const DEFAULT_BACKGROUND: Rgb = Rgb::BLACK;

/// Widget colors. `None` means "unset" and is filled in by [`Color::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub foreground: Option<Rgb>,
    pub background: Option<Rgb>,
    pub highlight_foreground: Option<Rgb>,
    pub highlight_background: Option<Rgb>,
}

impl Color {
    /// Default pair, inverse highlight.
    pub const BW: Color = Color::pair(DEFAULT_FOREGROUND, DEFAULT_BACKGROUND);
    pub const WHITE: Color = Color::pair(Rgb::WHITE, Rgb::BLACK);
    pub const GREEN: Color = Color::pair(Rgb::DARK_OLIVE_GREEN, Rgb::BLACK);

    pub const fn new() -> Self {
        Self {
            foreground: None,
            background: None,
            highlight_foreground: None,
            highlight_background: None,
        }
    }

    /// Foreground and background with the highlight left to default to their swap.
    pub const fn pair(foreground: Rgb, background: Rgb) -> Self {
        Self {
            foreground: Some(foreground),
            background: Some(background),
            highlight_foreground: None,
            highlight_background: None,
        }
    }

    pub const fn foreground(mut self, color: Rgb) -> Self {
        self.foreground = Some(color);
        self
    }

    pub const fn background(mut self, color: Rgb) -> Self {
        self.background = Some(color);
        self
    }

    pub const fn highlight_foreground(mut self, color: Rgb) -> Self {
        self.highlight_foreground = Some(color);
        self
    }

    pub const fn highlight_background(mut self, color: Rgb) -> Self {
        self.highlight_background = Some(color);
        self
    }

    /// Fill every unset slot.
    ///
    /// Base colors fall back to the light-on-dark defaults first; unset
    /// highlight colors are then taken from the *resolved* base colors,
    /// swapped, so selection renders in inverse video.
    pub fn resolve(&self) -> ResolvedColor {
        let fg = self.foreground.unwrap_or(DEFAULT_FOREGROUND);
        let bg = self.background.unwrap_or(DEFAULT_BACKGROUND);
        ResolvedColor {
            fg,
            bg,
            highlight_fg: self.highlight_foreground.unwrap_or(bg),
            highlight_bg: self.highlight_background.unwrap_or(fg),
        }
    }
}

/// A [`Color`] with every slot filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedColor {
    pub fg: Rgb,
    pub bg: Rgb,
    pub highlight_fg: Rgb,
    pub highlight_bg: Rgb,
}

impl Default for ResolvedColor {
    fn default() -> Self {
        Color::new().resolve()
    }
}

impl From<Color> for ResolvedColor {
    fn from(color: Color) -> Self {
        color.resolve()
    }
}
