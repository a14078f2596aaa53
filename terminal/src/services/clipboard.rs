//! # Clipboard Sinks
//!
//! Write-only clipboard adapters behind [`ClipboardSink`].

use crate::core::error::{AppError, Result};
use crate::core::service::ClipboardSink;

/// Copies through the egui platform integration.
///
/// Detached until the window context is known; copies made while detached fail.
#[derive(Default)]
pub struct EguiClipboard {
    ctx: Option<egui::Context>,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx: Some(ctx) }
    }

    pub fn detached() -> Self {
        Self::default()
    }
}

impl ClipboardSink for EguiClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if text.is_empty() {
            return Err(AppError::Clipboard("Nothing to copy".to_string()));
        }
        let ctx = self
            .ctx
            .as_ref()
            .ok_or_else(|| AppError::Clipboard("No window context available".to_string()))?;
        ctx.copy_text(text.to_string());
        tracing::debug!(chars = text.chars().count(), "Copied text to clipboard");
        Ok(())
    }
}

/// Keeps copied text in memory. Used by headless runs and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    fail_with: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard that rejects every copy with `message`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self { contents: None, fail_with: Some(message.into()) }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn copy_text(&mut self, text: &str) -> Result<()> {
        if let Some(message) = &self.fail_with {
            return Err(AppError::Clipboard(message.clone()));
        }
        self.contents = Some(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detached_egui_clipboard_fails() {
        let mut clipboard = EguiClipboard::detached();
        assert!(matches!(clipboard.copy_text("0xabc"), Err(AppError::Clipboard(_))));
    }

    #[test]
    fn test_egui_clipboard_rejects_empty_text() {
        let mut clipboard = EguiClipboard::new(egui::Context::default());
        assert!(clipboard.copy_text("").is_err());
        assert!(clipboard.copy_text("0xabc").is_ok());
    }

    #[test]
    fn test_memory_clipboard() {
        let mut clipboard = MemoryClipboard::new();
        clipboard.copy_text("first").unwrap();
        clipboard.copy_text("second").unwrap();
        assert_eq!(clipboard.contents(), Some("second"));

        let mut failing = MemoryClipboard::failing("denied");
        assert!(failing.copy_text("x").is_err());
        assert_eq!(failing.contents(), None);
    }
}
