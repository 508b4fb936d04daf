//! Page template registry.
//!
//! Templates come from three sources, resolved by name in this order:
//!
//! 1. **Inline** templates added with [`TemplateRegistry::add_inline`]
//! 2. **Override files** discovered in one or more directories
//! 3. **Builtin** templates embedded in the crate
//!
//! so a site can replace any builtin page (say `home`) by dropping a
//! `home.html.j2` into its template directory while keeping the rest.
//!
//! # Names and extensions
//!
//! Files are registered both with and without their extension. When one
//! directory holds the same base name with several extensions, the earlier
//! entry of [`TEMPLATE_EXTENSIONS`] wins the extensionless name. Two override
//! directories providing the same name is a configuration error.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Recognized template file extensions in priority order.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".html.j2", ".jinja2", ".j2"];

/// Templates shipped with the crate.
const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("layout", include_str!("../../templates/layout.html.j2")),
    ("nav", include_str!("../../templates/nav.html.j2")),
    ("home", include_str!("../../templates/home.html.j2")),
    ("about", include_str!("../../templates/about.html.j2")),
    ("skills", include_str!("../../templates/skills.html.j2")),
    ("contact", include_str!("../../templates/contact.html.j2")),
    ("project", include_str!("../../templates/project.html.j2")),
];

/// A template file found while walking an override directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFile {
    /// Resolution name without extension (e.g. `"home"` or `"partials/card"`).
    pub name: String,
    /// Resolution name with extension (e.g. `"home.html.j2"`).
    pub name_with_ext: String,
    pub absolute_path: PathBuf,
    /// The override directory this file belongs to.
    pub source_dir: PathBuf,
}

impl TemplateFile {
    pub fn new(
        name: impl Into<String>,
        name_with_ext: impl Into<String>,
        absolute_path: impl Into<PathBuf>,
        source_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            name: name.into(),
            name_with_ext: name_with_ext.into(),
            absolute_path: absolute_path.into(),
            source_dir: source_dir.into(),
        }
    }

    /// Lower is higher priority; unknown extensions sort last.
    pub fn extension_priority(&self) -> usize {
        TEMPLATE_EXTENSIONS
            .iter()
            .position(|ext| self.name_with_ext.ends_with(ext))
            .unwrap_or(usize::MAX)
    }
}

/// Where a template's source lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedTemplate {
    /// Source held in memory (inline or builtin).
    Inline(String),
    /// Source read from disk on every lookup, so edits show up on rebuild.
    File(PathBuf),
}

/// Error type for template registry operations.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Two override directories provide the same template name.
    #[error(
        "template collision for \"{name}\":\n  - {} (from {})\n  - {} (from {})",
        existing_path.display(),
        existing_dir.display(),
        conflicting_path.display(),
        conflicting_dir.display()
    )]
    Collision {
        name: String,
        existing_path: PathBuf,
        existing_dir: PathBuf,
        conflicting_path: PathBuf,
        conflicting_dir: PathBuf,
    },

    #[error("template not found: \"{name}\"")]
    NotFound { name: String },

    #[error("failed to read template \"{}\": {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Name-to-source map for page templates.
#[derive(Debug, Clone, Default)]
pub struct TemplateRegistry {
    inline: HashMap<String, String>,
    files: HashMap<String, PathBuf>,
    /// Canonical (extensionless) name to `(path, source_dir)` for collision checks.
    sources: HashMap<String, (PathBuf, PathBuf)>,
    builtin: HashMap<String, &'static str>,
}

impl TemplateRegistry {
    /// Creates an empty registry without builtin templates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin page templates.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, source) in BUILTIN_TEMPLATES {
            registry.builtin.insert((*name).to_string(), *source);
        }
        registry
    }

    /// Adds an inline template, shadowing files and builtins of the same name.
    pub fn add_inline(&mut self, name: impl Into<String>, content: impl Into<String>) {
        self.inline.insert(name.into(), content.into());
    }

    /// Registers files discovered by [`walk_template_dir`].
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Collision`] if a name is already provided by a
    /// different directory.
    pub fn add_from_files(&mut self, files: Vec<TemplateFile>) -> Result<(), RegistryError> {
        let mut sorted = files;
        sorted.sort_by_key(TemplateFile::extension_priority);

        for file in sorted {
            if let Some((existing_path, existing_dir)) = self.sources.get(&file.name) {
                if existing_dir != &file.source_dir {
                    return Err(RegistryError::Collision {
                        name: file.name,
                        existing_path: existing_path.clone(),
                        existing_dir: existing_dir.clone(),
                        conflicting_path: file.absolute_path,
                        conflicting_dir: file.source_dir,
                    });
                }
                // Same directory: a higher-priority extension already owns the name.
                self.files
                    .insert(file.name_with_ext, file.absolute_path);
                continue;
            }

            self.files
                .insert(file.name.clone(), file.absolute_path.clone());
            self.files
                .insert(file.name_with_ext, file.absolute_path.clone());
            self.sources
                .insert(file.name, (file.absolute_path, file.source_dir));
        }
        Ok(())
    }

    /// Walks `dir` and registers every template in it.
    pub fn add_dir(&mut self, dir: impl AsRef<Path>) -> Result<(), RegistryError> {
        let dir = dir.as_ref();
        let files = walk_template_dir(dir).map_err(|source| RegistryError::Read {
            path: dir.to_path_buf(),
            source,
        })?;
        self.add_from_files(files)
    }

    /// Looks up a template by name, with or without extension.
    pub fn get(&self, name: &str) -> Result<ResolvedTemplate, RegistryError> {
        if let Some(content) = self.inline.get(name) {
            return Ok(ResolvedTemplate::Inline(content.clone()));
        }
        if let Some(path) = self.files.get(name) {
            return Ok(ResolvedTemplate::File(path.clone()));
        }
        if let Some(source) = self.builtin.get(name) {
            return Ok(ResolvedTemplate::Inline((*source).to_string()));
        }
        Err(RegistryError::NotFound {
            name: name.to_string(),
        })
    }

    /// Returns a template's source, reading it from disk when file-backed.
    pub fn get_content(&self, name: &str) -> Result<String, RegistryError> {
        match self.get(name)? {
            ResolvedTemplate::Inline(content) => Ok(content),
            ResolvedTemplate::File(path) => {
                std::fs::read_to_string(&path).map_err(|source| RegistryError::Read { path, source })
            }
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.inline.contains_key(name)
            || self.files.contains_key(name)
            || self.builtin.contains_key(name)
    }

    /// All resolvable names, sorted and deduplicated.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .inline
            .keys()
            .chain(self.files.keys())
            .chain(self.builtin.keys())
            .map(String::as_str)
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

/// Recursively collects template files under `root`.
pub fn walk_template_dir(root: impl AsRef<Path>) -> Result<Vec<TemplateFile>, std::io::Error> {
    let root = root.as_ref().canonicalize()?;
    let mut files = Vec::new();
    walk_dir_recursive(&root, &root, &mut files)?;
    Ok(files)
}

fn walk_dir_recursive(
    current: &Path,
    root: &Path,
    files: &mut Vec<TemplateFile>,
) -> Result<(), std::io::Error> {
    for entry in std::fs::read_dir(current)? {
        let path = entry?.path();
        if path.is_dir() {
            walk_dir_recursive(&path, root, files)?;
        } else if let Some(file) = parse_template_file(&path, root) {
            files.push(file);
        }
    }
    Ok(())
}

fn parse_template_file(path: &Path, root: &Path) -> Option<TemplateFile> {
    let relative = path.strip_prefix(root).ok()?;
    let name_with_ext = relative
        .to_string_lossy()
        .replace(std::path::MAIN_SEPARATOR, "/");
    let extension = TEMPLATE_EXTENSIONS
        .iter()
        .find(|ext| name_with_ext.ends_with(*ext))?;
    let name = name_with_ext.strip_suffix(extension)?.to_string();
    Some(TemplateFile::new(name, name_with_ext, path, root))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_extension_priority() {
        let html = TemplateFile::new("home", "home.html.j2", "/t/home.html.j2", "/t");
        let jinja2 = TemplateFile::new("home", "home.jinja2", "/t/home.jinja2", "/t");
        let j2 = TemplateFile::new("home", "home.j2", "/t/home.j2", "/t");
        let other = TemplateFile::new("home", "home.txt", "/t/home.txt", "/t");

        assert_eq!(html.extension_priority(), 0);
        assert_eq!(jinja2.extension_priority(), 1);
        assert_eq!(j2.extension_priority(), 2);
        assert_eq!(other.extension_priority(), usize::MAX);
    }

    #[test]
    fn test_builtin_pages_present() {
        let registry = TemplateRegistry::builtin();
        for name in ["layout", "nav", "home", "about", "skills", "contact", "project"] {
            assert!(registry.contains(name), "{name}");
        }
        assert!(registry.get_content("home").unwrap().contains("carousel"));
    }

    #[test]
    fn test_inline_shadows_builtin() {
        let mut registry = TemplateRegistry::builtin();
        registry.add_inline("home", "custom home");
        assert_eq!(registry.get_content("home").unwrap(), "custom home");
    }

    #[test]
    fn test_not_found() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.get("missing"),
            Err(RegistryError::NotFound { .. })
        ));
    }

    #[test]
    fn test_same_dir_extension_priority() {
        let mut registry = TemplateRegistry::new();
        registry
            .add_from_files(vec![
                TemplateFile::new("home", "home.j2", "/t/home.j2", "/t"),
                TemplateFile::new("home", "home.html.j2", "/t/home.html.j2", "/t"),
            ])
            .unwrap();

        assert_eq!(
            registry.get("home").unwrap(),
            ResolvedTemplate::File(PathBuf::from("/t/home.html.j2"))
        );
        assert_eq!(
            registry.get("home.j2").unwrap(),
            ResolvedTemplate::File(PathBuf::from("/t/home.j2"))
        );
    }

    #[test]
    fn test_cross_dir_collision() {
        let mut registry = TemplateRegistry::new();
        let result = registry.add_from_files(vec![
            TemplateFile::new("home", "home.html.j2", "/a/home.html.j2", "/a"),
            TemplateFile::new("home", "home.html.j2", "/b/home.html.j2", "/b"),
        ]);

        match result {
            Err(err @ RegistryError::Collision { .. }) => {
                let message = err.to_string();
                assert!(message.contains("/a/home.html.j2"));
                assert!(message.contains("/b/home.html.j2"));
            }
            other => panic!("expected collision, got {other:?}"),
        }
    }

    #[test]
    fn test_override_dir_shadows_builtin() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("partials")).unwrap();
        fs::write(dir.path().join("contact.html.j2"), "override {{ owner }}").unwrap();
        fs::write(dir.path().join("partials").join("card.j2"), "card").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = TemplateRegistry::builtin();
        registry.add_dir(dir.path()).unwrap();

        assert_eq!(registry.get_content("contact").unwrap(), "override {{ owner }}");
        assert_eq!(registry.get_content("partials/card").unwrap(), "card");
        assert!(!registry.contains("notes"));
        assert!(registry.contains("about"));
    }

    #[test]
    fn test_missing_file_read_error() {
        let mut registry = TemplateRegistry::new();
        registry
            .add_from_files(vec![TemplateFile::new(
                "gone",
                "gone.j2",
                "/definitely/not/here/gone.j2",
                "/definitely/not/here",
            )])
            .unwrap();
        assert!(matches!(
            registry.get_content("gone"),
            Err(RegistryError::Read { .. })
        ));
    }

    #[test]
    fn test_names_sorted_unique() {
        let mut registry = TemplateRegistry::new();
        registry.add_inline("b", "");
        registry.add_inline("a", "");
        assert_eq!(registry.names(), vec!["a", "b"]);
    }
}
