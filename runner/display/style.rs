use comfy_table::{Attribute, Cell, Color, Table};

use prioq_lib::settings::Settings;

use crate::cli::ColorChoice;

/// OutputStyle wrapper for actual colors depending on settings
/// - Enables styles if color mode is 'always', or if color mode is 'auto' and output is a tty.
/// - Using dark colors if dark_mode is enabled
#[derive(Debug, Clone)]
pub struct OutputStyle {
    pub color: ColorChoice,
    /// Whether dark mode is enabled.
    pub dark_mode: bool,
}

impl OutputStyle {
    pub const fn new(settings: &Settings, color: ColorChoice) -> Self {
        Self {
            color,
            dark_mode: settings.client.dark_mode,
        }
    }

    /// Return the desired color depending on whether we're in dark mode or not.
    fn map_color(&self, color: Color) -> Color {
        if !self.dark_mode {
            return color;
        }

        match color {
            Color::Green => Color::DarkGreen,
            Color::Red => Color::DarkRed,
            Color::Yellow => Color::DarkYellow,
            _ => color,
        }
    }

    /// A helper method to easily create styled table cells.
    /// Whether the styling is actually printed is decided in [OutputStyle::apply].
    pub fn styled_cell<T: ToString>(
        &self,
        text: T,
        color: Option<Color>,
        attribute: Option<Attribute>,
    ) -> Cell {
        let mut cell = Cell::new(text.to_string());
        if let Some(color) = color {
            cell = cell.fg(self.map_color(color));
        }
        if let Some(attribute) = attribute {
            cell = cell.add_attribute(attribute);
        }

        cell
    }

    /// comfy-table only prints styles on a tty by default.
    /// Explicitly force or suppress them, if the user asked us to.
    pub fn apply(&self, table: &mut Table) {
        match self.color {
            ColorChoice::Always => {
                table.enforce_styling();
            }
            ColorChoice::Never => {
                table.force_no_tty();
            }
            ColorChoice::Auto => {}
        }
    }
}
