//! The portfolio site: configuration, shared chrome and page assembly.
//!
//! A [`Site`] owns the configuration, the project carousel and a renderer.
//! Every page is rendered from the same [`ThemeContext`] and the same
//! navigation chrome, so pages never derive the theme on their own.

mod cards;
mod config;
mod contact;
mod gallery;
mod nav;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

pub use cards::AboutCard;
pub use config::{
    slugify, CarouselSettings, ConfigError, Project, SiteConfig, SkillGroup, ThemeSettings,
    SAMPLE_CONFIG,
};
pub use contact::{ContactError, ContactMessage};
pub use gallery::{Gallery, GalleryItem};
pub use nav::{is_active, is_reserved, NavBar, NavItem, Route, ROUTES};

use crate::carousel::{Carousel, Neighbors, SharedCarousel, Slot};
use crate::error::Error;
use crate::render::SiteRenderer;
use crate::theme::{Theme, ThemeContext};

/// A page of the site.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Skills,
    Contact,
    /// Detail page for the project with this id.
    Project(String),
}

impl Page {
    /// Resolves a route to a page; child paths of a route resolve to it.
    pub fn from_path(path: &str, config: &SiteConfig) -> Option<Self> {
        let path = if path == "/" { "/home" } else { path };
        let fixed = [
            ("/home", Page::Home),
            ("/about", Page::About),
            ("/skills", Page::Skills),
            ("/contact", Page::Contact),
        ];
        if let Some((_, page)) = fixed.into_iter().find(|(route, _)| is_active(route, path)) {
            return Some(page);
        }
        config
            .projects
            .iter()
            .find(|p| is_active(&p.path, path))
            .map(|p| Page::Project(p.id.clone()))
    }

    fn template(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Skills => "skills",
            Page::Contact => "contact",
            Page::Project(_) => "project",
        }
    }
}

/// One rendered page and the route it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: Page,
    pub path: String,
    pub html: String,
}

#[derive(Serialize)]
struct PageContext<'a> {
    site: &'a SiteConfig,
    heading: String,
    title: String,
    path: String,
    theme: Theme,
    root_attributes: Vec<(String, String)>,
    nav: NavBar,
    carousel: Option<CarouselView<'a>>,
    project: Option<&'a Project>,
    gallery: Option<GalleryView<'a>>,
    about: Vec<AboutCardView<'a>>,
    contact_subject: String,
}

#[derive(Serialize)]
struct CarouselView<'a> {
    cards: Vec<CardView<'a>>,
    cursor: usize,
    neighbors: Neighbors,
    interval_ms: u64,
    swipe_threshold_px: f64,
}

#[derive(Serialize)]
struct CardView<'a> {
    index: usize,
    project: &'a Project,
    slot: Option<Slot>,
    selected: bool,
}

#[derive(Serialize)]
struct GalleryView<'a> {
    items: &'a [GalleryItem],
    expanded_index: Option<usize>,
    expanded: Option<&'a GalleryItem>,
}

#[derive(Serialize)]
struct AboutCardView<'a> {
    title: &'a str,
    paragraphs: &'a [String],
    open: bool,
    toggle_label: &'static str,
}

/// Configuration, project carousel and renderer for one site.
#[derive(Debug)]
pub struct Site {
    config: SiteConfig,
    carousel: SharedCarousel<Project>,
    about: Vec<AboutCard>,
    galleries: HashMap<String, Gallery>,
    renderer: SiteRenderer,
}

impl Site {
    /// Creates a site; the carousel holds the configured projects in order.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid.
    pub fn new(config: SiteConfig, renderer: SiteRenderer) -> Result<Self, Error> {
        config.validate()?;
        let carousel = SharedCarousel::with_swipe_threshold(
            Carousel::new(config.projects.clone())?,
            config.carousel.swipe_threshold_px,
        );
        let galleries = config
            .projects
            .iter()
            .filter(|p| !p.gallery.is_empty())
            .map(|p| (p.id.clone(), Gallery::new(p.gallery.clone())))
            .collect();
        Ok(Self {
            about: config.about.clone(),
            galleries,
            carousel,
            config,
            renderer,
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// The project carousel shown on the home page.
    pub fn carousel(&self) -> &SharedCarousel<Project> {
        &self.carousel
    }

    /// Expands or collapses the about card at `index`.
    ///
    /// Returns the card's new state, or `None` when there is no such card.
    pub fn toggle_about_card(&mut self, index: usize) -> Option<bool> {
        self.about.get_mut(index).map(AboutCard::toggle)
    }

    pub fn about_cards(&self) -> &[AboutCard] {
        &self.about
    }

    /// The lightbox gallery of a project, if it has images.
    pub fn gallery(&self, project_id: &str) -> Option<&Gallery> {
        self.galleries.get(project_id)
    }

    /// Enlarges image `index` of a project's gallery.
    ///
    /// Returns whether an image is now expanded; unknown projects and
    /// out-of-range indices leave the gallery as it was.
    pub fn open_gallery(&mut self, project_id: &str, index: usize) -> bool {
        self.galleries
            .get_mut(project_id)
            .is_some_and(|gallery| gallery.open(index))
    }

    pub fn close_gallery(&mut self, project_id: &str) {
        if let Some(gallery) = self.galleries.get_mut(project_id) {
            gallery.close();
        }
    }

    /// Every page of the site, in navigation order followed by projects.
    pub fn pages(&self) -> Vec<Page> {
        let mut pages = vec![Page::Home, Page::Skills, Page::About, Page::Contact];
        pages.extend(
            self.config
                .projects
                .iter()
                .map(|p| Page::Project(p.id.clone())),
        );
        pages
    }

    /// Route of `page`.
    pub fn path_of(&self, page: &Page) -> Result<String, Error> {
        Ok(match page {
            Page::Home => "/home".into(),
            Page::About => "/about".into(),
            Page::Skills => "/skills".into(),
            Page::Contact => "/contact".into(),
            Page::Project(id) => self.project(id)?.path.clone(),
        })
    }

    /// Renders one page with the theme currently held by `theme`.
    pub fn render_page(&self, page: &Page, theme: &ThemeContext) -> Result<RenderedPage, Error> {
        let path = self.path_of(page)?;
        let current = theme.current();
        let document = theme.document();

        let project = match page {
            Page::Project(id) => Some(self.project(id)?),
            _ => None,
        };
        let heading = match page {
            Page::Home => self.config.headline.clone(),
            Page::About => "About".into(),
            Page::Skills => "Skills & CV".into(),
            Page::Contact => "CONTACT ME".into(),
            Page::Project(_) => project.map(|p| p.title.clone()).unwrap_or_default(),
        };
        let title = match page {
            Page::Home => "Home".to_string(),
            _ => heading.clone(),
        };

        let context = PageContext {
            site: &self.config,
            title,
            heading,
            theme: current,
            root_attributes: document
                .attributes()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            nav: NavBar::new(&path, current),
            carousel: matches!(page, Page::Home).then(|| self.carousel_view()),
            project,
            gallery: project
                .and_then(|p| self.galleries.get(&p.id))
                .map(|gallery| GalleryView {
                    items: gallery.items(),
                    expanded_index: gallery.expanded_index(),
                    expanded: gallery.expanded(),
                }),
            about: self
                .about
                .iter()
                .map(|card| AboutCardView {
                    title: &card.title,
                    paragraphs: &card.paragraphs,
                    open: card.open,
                    toggle_label: card.toggle_label(),
                })
                .collect(),
            contact_subject: format!("Enquiry via {}'s portfolio", self.config.owner),
            path: path.clone(),
        };

        let html = self.renderer.render(page.template(), &context)?;
        debug!(path = %path, bytes = html.len(), "rendered page");
        Ok(RenderedPage {
            page: page.clone(),
            path,
            html,
        })
    }

    /// Renders every page of the site.
    pub fn render_all(&self, theme: &ThemeContext) -> Result<Vec<RenderedPage>, Error> {
        self.pages()
            .iter()
            .map(|page| self.render_page(page, theme))
            .collect()
    }

    /// Writes every page to `<out_dir>/<route>/index.html`, plus the home
    /// page as `<out_dir>/index.html`. Returns the files written.
    pub fn write_to(&self, out_dir: impl AsRef<Path>, theme: &ThemeContext) -> Result<Vec<PathBuf>, Error> {
        let out_dir = out_dir.as_ref();
        let mut written = Vec::new();

        for rendered in self.render_all(theme)? {
            let dir = out_dir.join(rendered.path.trim_start_matches('/'));
            let file = dir.join("index.html");
            write_file(&file, &rendered.html)?;
            written.push(file);

            if rendered.page == Page::Home {
                let index = out_dir.join("index.html");
                write_file(&index, &rendered.html)?;
                written.push(index);
            }
        }

        info!(pages = written.len(), dir = %out_dir.display(), "site written");
        Ok(written)
    }

    fn project(&self, id: &str) -> Result<&Project, Error> {
        self.config
            .project(id)
            .ok_or_else(|| Error::UnknownPage(id.to_string()))
    }

    fn carousel_view(&self) -> CarouselView<'_> {
        let (cursor, neighbors, slots) = self.carousel.with(|carousel| {
            let slots: Vec<Option<Slot>> = (0..carousel.len()).map(|i| carousel.slot(i)).collect();
            (carousel.cursor(), carousel.neighbors(), slots)
        });

        CarouselView {
            cards: self
                .config
                .projects
                .iter()
                .zip(slots)
                .enumerate()
                .map(|(index, (project, slot))| CardView {
                    index,
                    project,
                    slot,
                    selected: index == cursor,
                })
                .collect(),
            cursor,
            neighbors,
            interval_ms: self.config.carousel.interval_ms,
            swipe_threshold_px: self.config.carousel.swipe_threshold_px,
        }
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), Error> {
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(io_err)?;
    }
    fs::write(path, contents).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{MemoryStore, ThemeController};

    fn site() -> Site {
        Site::new(SiteConfig::sample().unwrap(), SiteRenderer::builtin()).unwrap()
    }

    fn theme(stored: &str) -> ThemeContext {
        ThemeContext::new(ThemeController::new(Box::new(MemoryStore::with_entry(
            "site-theme",
            stored,
        ))))
    }

    #[test]
    fn test_page_from_path() {
        let config = SiteConfig::sample().unwrap();
        assert_eq!(Page::from_path("/", &config), Some(Page::Home));
        assert_eq!(Page::from_path("/about/education", &config), Some(Page::About));
        assert_eq!(
            Page::from_path("/portfolio", &config),
            Some(Page::Project("pax".into()))
        );
        assert_eq!(Page::from_path("/nowhere", &config), None);
    }

    #[test]
    fn test_pages_cover_projects() {
        let site = site();
        let pages = site.pages();
        assert_eq!(pages.len(), 4 + site.config().projects.len());
        assert!(pages.contains(&Page::Project("final-year".into())));
    }

    #[test]
    fn test_home_marks_carousel_slots() {
        let site = site();
        site.carousel().select(1);
        let html = site.render_page(&Page::Home, &theme("dark")).unwrap().html;

        assert!(html.contains("data-theme=\"dark\""));
        assert_eq!(html.matches("card is-center").count(), 1);
        assert_eq!(html.matches("card is-left").count(), 1);
        assert_eq!(html.matches("card is-right").count(), 1);
        assert!(html.contains("aria-selected=\"true\""));
        assert!(html.contains("Go to slide 4"));
    }

    #[test]
    fn test_unknown_project_page() {
        let site = site();
        let err = site
            .render_page(&Page::Project("missing".into()), &theme("light"))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownPage(_)));
    }

    #[test]
    fn test_carousel_uses_configured_swipe_threshold() {
        let mut config = SiteConfig::sample().unwrap();
        config.carousel.swipe_threshold_px = 80.0;
        let site = Site::new(config, SiteRenderer::builtin()).unwrap();
        assert_eq!(site.carousel().swipe_threshold(), 80.0);

        site.carousel().touch_start(400.0);
        assert!(!site.carousel().touch_end(330.0));
        site.carousel().touch_start(400.0);
        assert!(site.carousel().touch_end(319.0));
        assert_eq!(site.carousel().cursor(), 1);
    }

    #[test]
    fn test_about_card_toggle_renders() {
        let mut site = site();
        let theme = theme("light");
        let html = site.render_page(&Page::About, &theme).unwrap().html;
        assert_eq!(html.matches(">More</button>").count(), 2);

        assert_eq!(site.toggle_about_card(0), Some(true));
        assert_eq!(site.toggle_about_card(9), None);
        let html = site.render_page(&Page::About, &theme).unwrap().html;
        assert_eq!(html.matches(">Hide</button>").count(), 1);
        assert!(html.contains("about-card open"));
    }

    #[test]
    fn test_gallery_lightbox_renders_expanded_image() {
        let mut site = site();
        let theme = theme("light");
        let page = Page::Project("pax".into());

        let html = site.render_page(&page, &theme).unwrap().html;
        assert!(!html.contains("class=\"lightbox\""));

        assert!(site.open_gallery("pax", 3));
        assert!(!site.open_gallery("searchsafe", 0));
        let html = site.render_page(&page, &theme).unwrap().html;
        assert!(html.contains("class=\"lightbox\""));
        assert!(html.contains(r#"role="dialog" aria-modal="true" aria-label="Timeline page""#));
        assert_eq!(html.matches("gallery-item is-expanded").count(), 1);

        // Out of range keeps the current image.
        assert!(site.open_gallery("pax", 42));
        assert_eq!(site.gallery("pax").and_then(|g| g.expanded_index()), Some(3));

        site.close_gallery("pax");
        let html = site.render_page(&page, &theme).unwrap().html;
        assert!(!html.contains("class=\"lightbox\""));
    }

    #[test]
    fn test_nav_marks_active_page() {
        let site = site();
        let html = site.render_page(&Page::Skills, &theme("light")).unwrap().html;
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert!(html.contains("Skills &amp; CV"));
    }

    #[test]
    fn test_contact_form_posts_fields_to_plain_mailto() {
        let site = site();
        let html = site.render_page(&Page::Contact, &theme("light")).unwrap().html;
        assert!(html.contains(r#"method="get" action="mailto:samuel.jones@example.com">"#));
        assert!(!html.contains("action=\"mailto:samuel.jones@example.com?"));
        assert!(html.contains(r#"name="subject" value="Enquiry via Samuel Jones"#));
    }
}
