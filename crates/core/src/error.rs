use serde::{Deserialize, Serialize};

/// Error categories for better error handling and recovery
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Browser/driver errors (launch, attach, CDP transport)
    Browser,
    /// Injected script evaluation errors
    ScriptExecution,
    /// Navigation or page load errors
    Navigation,
    /// A registry element or expected node is gone
    ElementNotFound,
    /// Timeout errors
    Timeout,
    /// Snapshot parsing errors (HTML/selector)
    Parsing,
    /// Unknown or uncategorized errors
    Unknown,
}

/// Structured error with context for debugging and recovery decisions
#[derive(Debug, Clone, Serialize, Deserialize, thiserror::Error)]
#[error("[{category:?}] {message}")]
pub struct RunError {
    /// Error category for programmatic handling
    pub category: ErrorCategory,
    /// Human-readable error message
    pub message: String,
    /// Optional context (selector, scope, root index, etc.)
    pub context: serde_json::Value,
    /// Whether this error is potentially recoverable
    pub recoverable: bool,
    /// Suggested retry delay in milliseconds
    pub retry_after_ms: Option<u64>,
}

impl RunError {
    pub fn new(category: ErrorCategory, message: impl Into<String>) -> Self {
        Self {
            category,
            message: message.into(),
            context: serde_json::json!({}),
            recoverable: false,
            retry_after_ms: None,
        }
    }

    pub fn with_context(mut self, context: serde_json::Value) -> Self {
        self.context = context;
        self
    }

    pub fn recoverable(mut self) -> Self {
        self.recoverable = true;
        self
    }

    pub fn with_retry_delay(mut self, ms: u64) -> Self {
        self.retry_after_ms = Some(ms);
        self.recoverable = true;
        self
    }

    // Convenience constructors
    pub fn browser_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Browser, message)
    }

    pub fn script_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::ScriptExecution, message)
    }

    pub fn navigation_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Navigation, message).recoverable().with_retry_delay(1500)
    }

    pub fn element_not_found(what: impl Into<String>) -> Self {
        let what = what.into();
        Self::new(ErrorCategory::ElementNotFound, format!("Element not found: {}", what))
            .with_context(serde_json::json!({ "element": what }))
    }

    pub fn timeout_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Timeout, message).recoverable().with_retry_delay(2000)
    }

    pub fn parsing_error(message: impl Into<String>) -> Self {
        Self::new(ErrorCategory::Parsing, message)
    }
}
