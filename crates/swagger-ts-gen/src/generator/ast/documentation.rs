/// Lines of a JSDoc block, already split and trimmed of trailing whitespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Documentation {
  lines: Vec<String>,
}

impl Documentation {
  #[must_use]
  pub fn from_raw(input: &str) -> Self {
    let lines: Vec<String> = input
      .trim()
      .lines()
      .map(|line| line.trim_end().replace("*/", "*\\/"))
      .collect();
    Self { lines }
  }

  #[must_use]
  pub fn from_optional(desc: Option<&str>) -> Self {
    desc.map_or_else(Self::default, Self::from_raw)
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.lines.iter().all(String::is_empty)
  }

  #[must_use]
  pub fn lines(&self) -> &[String] {
    &self.lines
  }

  pub fn push(&mut self, line: impl Into<String>) {
    self.lines.push(line.into());
  }
}
