//! Template renderer for site pages.

use minijinja::{AutoEscape, Environment, Error, ErrorKind};
use serde::Serialize;

use super::filters::register_filters;
use super::registry::{RegistryError, TemplateRegistry};

/// Error raised while rendering a page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to render template '{name}': {source}")]
    Template {
        name: String,
        #[source]
        source: Error,
    },
}

/// Renders page templates resolved through a [`TemplateRegistry`].
///
/// Templates are loaded lazily through the registry, so `{% extends %}` and
/// `{% include %}` resolve builtin and override templates alike. Output is
/// always HTML-escaped.
///
/// # Example
///
/// ```rust
/// use showcase::{SiteRenderer, TemplateRegistry};
///
/// let mut registry = TemplateRegistry::new();
/// registry.add_inline("greeting", "<p>{{ name }}</p>");
///
/// let renderer = SiteRenderer::new(registry);
/// let html = renderer
///     .render("greeting", &serde_json::json!({ "name": "Tom & Jerry" }))
///     .unwrap();
/// assert_eq!(html, "<p>Tom &amp; Jerry</p>");
/// ```
pub struct SiteRenderer {
    env: Environment<'static>,
}

impl SiteRenderer {
    pub fn new(registry: TemplateRegistry) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_loader(move |name| match registry.get_content(name) {
            Ok(source) => Ok(Some(source)),
            Err(RegistryError::NotFound { .. }) => Ok(None),
            Err(e) => Err(Error::new(ErrorKind::InvalidOperation, e.to_string())),
        });
        register_filters(&mut env);
        Self { env }
    }

    /// Renderer over the builtin templates only.
    pub fn builtin() -> Self {
        Self::new(TemplateRegistry::builtin())
    }

    /// Renders the named template with `data` as its context.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, RenderError> {
        let wrap = |source| RenderError::Template {
            name: name.to_string(),
            source,
        };
        let template = self.env.get_template(name).map_err(wrap)?;
        template.render(data).map_err(wrap)
    }
}

impl std::fmt::Debug for SiteRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteRenderer").finish_non_exhaustive()
    }
}
