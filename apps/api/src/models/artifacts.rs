use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// The three downloadable artifacts a session can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactKind {
    ResumePdf,
    CoverLetterPdf,
    Portfolio,
}

impl ArtifactKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::ResumePdf => "resume_pdf",
            ArtifactKind::CoverLetterPdf => "cover_letter_pdf",
            ArtifactKind::Portfolio => "portfolio",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ArtifactKind::ResumePdf | ArtifactKind::CoverLetterPdf => "application/pdf",
            ArtifactKind::Portfolio => "text/html; charset=utf-8",
        }
    }

    fn file_suffix(self) -> &'static str {
        match self {
            ArtifactKind::ResumePdf => "resume.pdf",
            ArtifactKind::CoverLetterPdf => "cover_letter.pdf",
            ArtifactKind::Portfolio => "portfolio.html",
        }
    }

    /// `{stem}_resume.pdf`, `{stem}_cover_letter.pdf` or `{stem}_portfolio.html`.
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}_{}", self.file_suffix())
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "resume_pdf" => Ok(ArtifactKind::ResumePdf),
            "cover_letter_pdf" => Ok(ArtifactKind::CoverLetterPdf),
            "portfolio" => Ok(ArtifactKind::Portfolio),
            other => Err(format!("Unknown artifact kind '{other}'")),
        }
    }
}

/// A finished document ready for download.
#[derive(Debug, Clone)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub file_name: String,
    pub content: Bytes,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, stem: &str, content: impl Into<Bytes>) -> Self {
        Self {
            kind,
            file_name: kind.file_name(stem),
            content: content.into(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        self.kind.mime_type()
    }
}

/// Artifacts produced in a session, keyed by kind.
///
/// Regenerating a kind replaces the previous artifact outright.
#[derive(Debug, Clone, Default)]
pub struct GeneratedArtifacts {
    artifacts: BTreeMap<ArtifactKind, Artifact>,
}

impl GeneratedArtifacts {
    pub fn store(&mut self, artifact: Artifact) {
        self.artifacts.insert(artifact.kind, artifact);
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.artifacts.get(&kind)
    }

    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.artifacts.keys().copied().collect()
    }
}
