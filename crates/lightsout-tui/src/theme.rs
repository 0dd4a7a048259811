use crossterm::style::Color;

/// Color theme for the TUI.
///
/// Cells use exactly two colors: a lit cell is `light` with a `dark`
/// outline, an unlit cell is `dark` with a `light` outline.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Lit cell fill, unlit cell outline
    pub light: Color,
    /// Unlit cell fill, lit cell outline
    pub dark: Color,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Outline of the cell under the keyboard cursor
    pub cursor: Color,
    /// Hint marker color
    pub hint: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
    /// Success/solved color
    pub success: Color,
    /// Warning color
    pub warning: Color,
    /// Message and dialog background
    pub panel_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            light: Color::Rgb { r: 245, g: 245, b: 245 },
            dark: Color::Rgb { r: 16, g: 16, b: 20 },
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            cursor: Color::Rgb { r: 80, g: 180, b: 255 },
            hint: Color::Rgb { r: 255, g: 210, b: 100 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            warning: Color::Rgb { r: 255, g: 90, b: 90 },
            panel_bg: Color::Rgb { r: 70, g: 90, b: 140 },
        }
    }
}

impl Theme {
    /// (fill, outline) for a cell
    pub fn cell_colors(&self, lit: bool) -> (Color, Color) {
        if lit {
            (self.light, self.dark)
        } else {
            (self.dark, self.light)
        }
    }
}
