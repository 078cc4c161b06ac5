use std::io::IsTerminal;

use clap::builder::styling::{Color as ClapColor, RgbColor, Style, Styles};
use comfy_table::Color as ComfyColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

#[derive(Debug, Clone, Copy)]
enum Role {
  Timestamp,
  Primary,
  Accent,
  Label,
  Value,
  Success,
}

impl Role {
  const fn rgb(self, theme: Theme) -> (u8, u8, u8) {
    match (self, theme) {
      (Self::Timestamp, Theme::Dark) => (118, 166, 166),
      (Self::Timestamp, Theme::Light) => (92, 62, 38),
      (Self::Primary, Theme::Dark) => (191, 126, 4),
      (Self::Primary, Theme::Light) => (70, 42, 25),
      (Self::Accent, Theme::Dark) => (166, 84, 55),
      (Self::Accent, Theme::Light) => (211, 99, 70),
      (Self::Label, Theme::Dark) => (217, 164, 4),
      (Self::Label, Theme::Light) => (176, 103, 66),
      (Self::Value, Theme::Dark) => (242, 211, 56),
      (Self::Value, Theme::Light) => (199, 146, 76),
      (Self::Success, Theme::Dark) => (118, 166, 166),
      (Self::Success, Theme::Light) => (34, 142, 90),
    }
  }
}

/// Terminal palette; every role resolves to `Reset` when color is off.
#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  const fn pick(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = role.rgb(self.theme);
    Color::Rgb { r, g, b }
  }

  pub const fn timestamp(&self) -> Color {
    self.pick(Role::Timestamp)
  }

  pub const fn primary(&self) -> Color {
    self.pick(Role::Primary)
  }

  pub const fn accent(&self) -> Color {
    self.pick(Role::Accent)
  }

  pub const fn label(&self) -> Color {
    self.pick(Role::Label)
  }

  pub const fn value(&self) -> Color {
    self.pick(Role::Value)
  }

  pub const fn success(&self) -> Color {
    self.pick(Role::Success)
  }

  /// Help output always uses the dark palette; clap handles its own color detection.
  pub const fn clap_styles() -> Styles {
    const fn fg(role: Role) -> Option<ClapColor> {
      let (r, g, b) = role.rgb(Theme::Dark);
      Some(ClapColor::Rgb(RgbColor(r, g, b)))
    }

    Styles::styled()
      .header(Style::new().bold().underline().fg_color(fg(Role::Label)))
      .usage(Style::new().bold().fg_color(fg(Role::Label)))
      .literal(Style::new().fg_color(fg(Role::Success)))
      .placeholder(Style::new().fg_color(fg(Role::Timestamp)))
      .error(Style::new().bold().fg_color(fg(Role::Accent)))
      .valid(Style::new().fg_color(fg(Role::Success)))
      .invalid(Style::new().bold().fg_color(fg(Role::Accent)))
  }
}

/// Table cells only ever receive palette colors, so only RGB needs mapping.
pub fn to_comfy(color: Color) -> ComfyColor {
  match color {
    Color::Rgb { r, g, b } => ComfyColor::Rgb { r, g, b },
    Color::AnsiValue(value) => ComfyColor::AnsiValue(value),
    _ => ComfyColor::Reset,
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => detect_terminal_theme(),
  }
}

/// `COLORFGBG` ends with the background palette index; 8 and above are light.
fn detect_terminal_theme() -> Theme {
  if let Ok(value) = std::env::var("COLORFGBG")
    && let Some(background) = value.rsplit(';').next()
    && let Ok(index) = background.parse::<u8>()
  {
    return if index >= 8 { Theme::Light } else { Theme::Dark };
  }
  Theme::Dark
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn disabled_palette_resets_every_role() {
    let colors = Colors::new(false, Theme::Light);
    assert_eq!(colors.primary(), Color::Reset);
    assert_eq!(colors.value(), Color::Reset);
    assert_eq!(to_comfy(colors.label()), ComfyColor::Reset);
  }

  #[test]
  fn themes_use_distinct_primary_colors() {
    let dark = Colors::new(true, Theme::Dark);
    let light = Colors::new(true, Theme::Light);
    assert_ne!(dark.primary(), light.primary());
    assert_eq!(to_comfy(dark.primary()), ComfyColor::Rgb { r: 191, g: 126, b: 4 });
  }
}
