use strum::EnumString;

/// Page selected by the `/:slug` path segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString)]
pub enum Page {
    #[strum(serialize = "language")]
    Language,
    #[strum(serialize = "connection")]
    Connection,
    #[strum(disabled)]
    NotFound,
}

impl Page {
    pub const ROUTABLE: [Page; 2] = [Page::Language, Page::Connection];

    pub fn from_slug(slug: &str) -> Self {
        slug.parse().unwrap_or(Page::NotFound)
    }

    pub fn slug(&self) -> Option<&'static str> {
        match self {
            Page::Language => Some("language"),
            Page::Connection => Some("connection"),
            Page::NotFound => None,
        }
    }

    pub fn path(&self) -> Option<String> {
        self.slug().map(|slug| format!("/{slug}"))
    }
}
