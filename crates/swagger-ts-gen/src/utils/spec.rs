use std::path::{Path, PathBuf};

use anyhow::Context;
use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::schema::SwaggerDocument;

const SUPPORTED_SWAGGER_MAJOR: &str = "2";

/// Where a document is read from: a local path or an `http(s)` URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpecSource {
  File(PathBuf),
  Url(String),
}

impl SpecSource {
  #[must_use]
  pub fn parse(input: &str) -> Self {
    if input.starts_with("http://") || input.starts_with("https://") {
      Self::Url(input.to_string())
    } else {
      Self::File(PathBuf::from(input))
    }
  }
}

impl std::fmt::Display for SpecSource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::File(path) => write!(f, "{}", path.display()),
      Self::Url(url) => f.write_str(url),
    }
  }
}

enum SpecBytes {
  Mapped(AsyncMmapFile),
  Fetched(Vec<u8>),
}

impl SpecBytes {
  fn as_slice(&self) -> &[u8] {
    match self {
      Self::Mapped(file) => file.as_slice(),
      Self::Fetched(bytes) => bytes,
    }
  }
}

pub struct SpecLoader {
  source: SpecSource,
  bytes: SpecBytes,
}

impl SpecLoader {
  pub async fn open(source: SpecSource) -> anyhow::Result<Self> {
    let bytes = match &source {
      SpecSource::File(path) => SpecBytes::Mapped(open_file(path).await?),
      SpecSource::Url(url) => SpecBytes::Fetched(fetch(url).await?),
    };
    Ok(Self { source, bytes })
  }

  #[must_use]
  pub fn source(&self) -> &SpecSource {
    &self.source
  }

  /// Deserializes the document, reporting the JSON path of the first mismatch.
  pub fn parse(&self) -> anyhow::Result<SwaggerDocument> {
    let deserializer = &mut serde_json::Deserializer::from_slice(self.bytes.as_slice());
    let document: SwaggerDocument = serde_path_to_error::deserialize(deserializer)
      .with_context(|| format!("failed to parse Swagger document {}", self.source))?;

    match document.swagger.as_deref() {
      Some(version) if version.trim().starts_with(SUPPORTED_SWAGGER_MAJOR) => Ok(document),
      Some(version) => anyhow::bail!("{} declares swagger version {version}, only 2.0 is supported", self.source),
      None => anyhow::bail!("{} is not a Swagger 2.0 document (missing `swagger` field)", self.source),
    }
  }
}

async fn open_file(path: &Path) -> anyhow::Result<AsyncMmapFile> {
  AsyncMmapFile::open(path)
    .await
    .with_context(|| format!("failed to open {}", path.display()))
}

#[cfg(feature = "remote")]
async fn fetch(url: &str) -> anyhow::Result<Vec<u8>> {
  let response = reqwest::get(url)
    .await
    .with_context(|| format!("failed to fetch {url}"))?
    .error_for_status()
    .with_context(|| format!("server rejected request for {url}"))?;
  let bytes = response
    .bytes()
    .await
    .with_context(|| format!("failed to read response body from {url}"))?;
  Ok(bytes.to_vec())
}

#[cfg(not(feature = "remote"))]
async fn fetch(url: &str) -> anyhow::Result<Vec<u8>> {
  anyhow::bail!("cannot fetch {url}: built without the `remote` feature")
}
