//! Crate-level error.

use std::path::PathBuf;

use crate::carousel::CarouselError;
use crate::render::RenderError;
use crate::site::ConfigError;

/// Error returned by [`Site`](crate::Site) operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// No page or project with this id.
    #[error("unknown page '{0}'")]
    UnknownPage(String),
}
