//! Terminal colors for each theme

use ratatui::style::Color;

use crate::theme::Theme;

/// Colors used to draw the calculator in one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Page background
    pub background: Color,
    /// Display and keypad panel background
    pub screen: Color,
    /// Header and display text
    pub header_text: Color,
    /// Number/operator key face
    pub key: Color,
    /// Number/operator key label
    pub key_text: Color,
    /// DEL / RESET key face
    pub function_key: Color,
    /// DEL / RESET key label
    pub function_key_text: Color,
    /// `=` key and theme toggle knob
    pub accent: Color,
    /// `=` key label
    pub accent_text: Color,
    /// Highlight for the most recently pressed key
    pub pressed: Color,
}

// ============================================================================
// Theme 1: desaturated blue
// ============================================================================

const THEME_ONE: Palette = Palette {
    background: Color::Rgb(58, 71, 100),
    screen: Color::Rgb(24, 31, 50),
    header_text: Color::Rgb(255, 255, 255),
    key: Color::Rgb(234, 227, 219),
    key_text: Color::Rgb(67, 72, 88),
    function_key: Color::Rgb(100, 114, 153),
    function_key_text: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(208, 63, 47),
    accent_text: Color::Rgb(255, 255, 255),
    pressed: Color::Rgb(255, 255, 255),
};

// ============================================================================
// Theme 2: light gray
// ============================================================================

const THEME_TWO: Palette = Palette {
    background: Color::Rgb(230, 230, 230),
    screen: Color::Rgb(237, 237, 237),
    header_text: Color::Rgb(54, 54, 44),
    key: Color::Rgb(229, 228, 225),
    key_text: Color::Rgb(54, 54, 44),
    function_key: Color::Rgb(55, 127, 134),
    function_key_text: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(200, 85, 2),
    accent_text: Color::Rgb(255, 255, 255),
    pressed: Color::Rgb(255, 255, 255),
};

// ============================================================================
// Theme 3: dark violet
// ============================================================================

const THEME_THREE: Palette = Palette {
    background: Color::Rgb(23, 6, 40),
    screen: Color::Rgb(30, 9, 52),
    header_text: Color::Rgb(255, 229, 61),
    key: Color::Rgb(51, 28, 77),
    key_text: Color::Rgb(255, 229, 61),
    function_key: Color::Rgb(86, 7, 124),
    function_key_text: Color::Rgb(255, 255, 255),
    accent: Color::Rgb(0, 224, 209),
    accent_text: Color::Rgb(26, 36, 37),
    pressed: Color::Rgb(107, 52, 172),
};

impl Palette {
    /// Returns the palette for `theme`
    #[must_use]
    pub const fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::One => THEME_ONE,
            Theme::Two => THEME_TWO,
            Theme::Three => THEME_THREE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_theme_has_distinct_palette() {
        let palettes: Vec<Palette> = Theme::ALL.into_iter().map(Palette::for_theme).collect();
        assert_ne!(palettes[0], palettes[1]);
        assert_ne!(palettes[1], palettes[2]);
        assert_ne!(palettes[0], palettes[2]);
    }

    #[test]
    fn test_accent_readable_on_dark_theme() {
        let p = Palette::for_theme(Theme::Three);
        assert_ne!(p.accent, p.accent_text);
    }
}
