//! Page rendering.
//!
//! - [`TemplateRegistry`]: Builtin, override-directory and inline templates
//! - [`SiteRenderer`]: MiniJinja environment with the page filters

mod filters;
mod registry;
mod renderer;

pub use registry::{
    walk_template_dir, RegistryError, ResolvedTemplate, TemplateFile, TemplateRegistry,
    TEMPLATE_EXTENSIONS,
};
pub use renderer::{RenderError, SiteRenderer};
