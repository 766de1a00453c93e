// GROUP: 42
// MEMBERS: Ray Okamoto, Phoenix Pereira, Kayla Rowley, Qi Wu, Ho Yin Li

//! The greeting display component.

use greeting_shared::FRONTEND_GREETING;

use crate::api::GreetingSource;
use crate::errors::FetchError;
use crate::page::html_escape;

pub const FRONTEND_TEST_ID: &str = "frontend-message";
pub const BACKEND_TEST_ID: &str = "backend-message";

/// Renders the local greeting next to the one fetched from the backend.
///
/// A fresh component has an empty backend message. [`Hello::mount`] fills it
/// in; on failure it stays empty and the local greeting still renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hello {
    frontend_message: String,
    backend_message: String,
}

impl Hello {
    pub fn new() -> Self {
        Self {
            frontend_message: FRONTEND_GREETING.to_owned(),
            backend_message: String::new(),
        }
    }

    /// Fetch the backend greeting once and store it as render state
    pub async fn mount<S: GreetingSource>(&mut self, source: &S) -> Result<(), FetchError> {
        let res = source.fetch_greeting().await?;
        self.backend_message = res.message;
        Ok(())
    }

    pub fn frontend_message(&self) -> &str {
        &self.frontend_message
    }

    pub fn backend_message(&self) -> &str {
        &self.backend_message
    }

    /// Visible text, one node per line, empty nodes skipped
    pub fn text(&self) -> String {
        [self.frontend_message.as_str(), self.backend_message.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn render(&self) -> String {
        format!(
            r#"<div class="hello">
  <p data-testid="{FRONTEND_TEST_ID}">{}</p>
  <p data-testid="{BACKEND_TEST_ID}">{}</p>
</div>"#,
            html_escape(&self.frontend_message),
            html_escape(&self.backend_message),
        )
    }
}

impl Default for Hello {
    fn default() -> Self {
        Self::new()
    }
}
