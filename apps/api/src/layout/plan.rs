//! Layout plans: the ordered drawing instructions an emitter hands to a backend.
//!
//! A plan is plain data. Emitters build one from rendered content, tests read
//! it back, and a `LayoutBackend` turns it into document bytes. Units follow
//! the page config (millimetres) except font sizes, which are points.

use serde::Serialize;
use thiserror::Error;

use crate::layout::font_metrics::FontStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextStyle {
    pub size_pt: f32,
    pub style: FontStyle,
}

impl TextStyle {
    pub const fn regular(size_pt: f32) -> Self {
        Self {
            size_pt,
            style: FontStyle::Regular,
        }
    }

    pub const fn bold(size_pt: f32) -> Self {
        Self {
            size_pt,
            style: FontStyle::Bold,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum LayoutOp {
    /// One unwrapped line of `height` mm, aligned within the text width.
    Line {
        text: String,
        style: TextStyle,
        align: Align,
        height: f32,
    },
    /// Left-aligned text wrapped to the text width, `line_height` mm per line.
    Paragraph {
        text: String,
        style: TextStyle,
        line_height: f32,
    },
    /// Vertical gap in mm.
    Space(f32),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentPlan {
    pub title: String,
    ops: Vec<LayoutOp>,
}

impl DocumentPlan {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ops: Vec::new(),
        }
    }

    pub fn line(
        &mut self,
        text: impl Into<String>,
        style: TextStyle,
        align: Align,
        height: f32,
    ) -> &mut Self {
        self.ops.push(LayoutOp::Line {
            text: text.into(),
            style,
            align,
            height,
        });
        self
    }

    pub fn paragraph(
        &mut self,
        text: impl Into<String>,
        style: TextStyle,
        line_height: f32,
    ) -> &mut Self {
        self.ops.push(LayoutOp::Paragraph {
            text: text.into(),
            style,
            line_height,
        });
        self
    }

    pub fn space(&mut self, height: f32) -> &mut Self {
        self.ops.push(LayoutOp::Space(height));
        self
    }

    pub fn ops(&self) -> &[LayoutOp] {
        &self.ops
    }
}

#[cfg(test)]
impl DocumentPlan {
    /// Every piece of text in drawing order.
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                LayoutOp::Line { text, .. } | LayoutOp::Paragraph { text, .. } => {
                    Some(text.as_str())
                }
                LayoutOp::Space(_) => None,
            })
            .collect()
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| *t == needle)
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF layout failed: {0}")]
    Pdf(String),

    #[error("Markup rendering failed: {0}")]
    Markup(String),

    #[error("Layout task failed: {0}")]
    Task(String),
}

/// The layout capability: turns a plan into a finished document.
pub trait LayoutBackend: Send + Sync {
    fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError>;
}

#[cfg(test)]
pub mod testing {
    //! Backends used by emitter tests.

    use super::*;
    use std::sync::Mutex;

    /// Records every plan it receives and returns the plan's text as bytes.
    #[derive(Default)]
    pub struct RecordingBackend {
        pub plans: Mutex<Vec<DocumentPlan>>,
    }

    impl LayoutBackend for RecordingBackend {
        fn render(&self, plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
            self.plans.lock().unwrap().push(plan.clone());
            Ok(plan.texts().join("\n").into_bytes())
        }
    }

    /// Always fails, as a broken layout library would.
    pub struct FailingBackend;

    impl LayoutBackend for FailingBackend {
        fn render(&self, _plan: &DocumentPlan) -> Result<Vec<u8>, RenderError> {
            Err(RenderError::Pdf("font table unavailable".to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_op_order() {
        let mut plan = DocumentPlan::new("Resume");
        plan.line("Jane Doe", TextStyle::bold(16.0), Align::Center, 10.0)
            .space(5.0)
            .paragraph("Summary text", TextStyle::regular(10.0), 5.0);
        assert_eq!(plan.ops().len(), 3);
        assert_eq!(plan.texts(), vec!["Jane Doe", "Summary text"]);
        assert!(matches!(plan.ops()[1], LayoutOp::Space(h) if (h - 5.0).abs() < f32::EPSILON));
    }

    #[test]
    fn test_contains_text_is_exact() {
        let mut plan = DocumentPlan::new("t");
        plan.line("PROJECTS", TextStyle::bold(12.0), Align::Left, 8.0);
        assert!(plan.contains_text("PROJECTS"));
        assert!(!plan.contains_text("PROJECT"));
    }
}
