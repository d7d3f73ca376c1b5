// Image URL construction. Absent paths resolve to self-contained SVG data URIs
// so nothing downstream ever sees an empty image source.

/// Size tokens understood by the image CDN.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSize {
    Poster,
    Backdrop,
}

impl ImageSize {
    pub fn token(self) -> &'static str {
        match self {
            Self::Poster => "w500",
            Self::Backdrop => "original",
        }
    }
}

/// Generic "No Image Available" artwork.
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' width='500' height='750' viewBox='0 0 500 750'%3E%3Crect width='500' height='750' fill='%23141414'/%3E%3Ccircle cx='250' cy='375' r='80' fill='%23E50914' opacity='0.2'/%3E%3Cpath d='M220,355 L220,395 L280,375 Z' fill='%23E50914' opacity='0.5'/%3E%3Ctext x='50%25' y='85%25' dominant-baseline='middle' text-anchor='middle' font-family='sans-serif' font-size='18' fill='%23666666'%3ENo Image Available%3C/text%3E%3C/svg%3E";

#[derive(Debug, Clone)]
pub struct ImageUrls {
    base_url: String,
}

impl ImageUrls {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Fully-qualified URL for `path` at `size`, or [`PLACEHOLDER_IMAGE`].
    pub fn url(&self, path: Option<&str>, size: ImageSize) -> String {
        match path.map(str::trim).filter(|p| !p.is_empty()) {
            Some(p) if p.starts_with('/') => format!("{}/{}{}", self.base_url, size.token(), p),
            Some(p) => format!("{}/{}/{}", self.base_url, size.token(), p),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

impl Default for ImageUrls {
    fn default() -> Self {
        Self::new("https://image.tmdb.org/t/p")
    }
}

/// Second-stage fallback: a dark tile with the title written on it, used when
/// the primary image fails to load.
pub fn title_placeholder(title: &str) -> String {
    let svg = format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='500' height='750' viewBox='0 0 500 750'>\
         <rect width='500' height='750' fill='#141414'/>\
         <text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
         font-family='sans-serif' font-size='24' fill='#ffffff'>{}</text></svg>",
        escape_xml(title)
    );
    format!("data:image/svg+xml,{}", urlencoding::encode(&svg))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&apos;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
