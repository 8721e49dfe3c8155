//! Fragment extraction from pre-rendered slide documents.
//!
//! A slide is a standalone HTML page. The gallery only wants three pieces of
//! it: the `.title` element, the first `img`, and the `.description` element.
//! The fetched text is parsed in a detached document (`DOMParser` in the
//! browser), which never renders, never runs scripts and never touches the
//! live page. Extraction itself only sees the [`ParsedDocument`] trait, so it
//! runs the same against the browser parser and against test fixtures. The
//! sanitizer likewise works through [`SanitizeNode`], so the removal rules
//! are checked natively against an in-memory tree.
//!
//! IMAGE PATHS
//! ===========
//! Slides reference their images relative to their own location, while the
//! host page resolves paths relative to itself. Relative and root-relative
//! image sources are therefore reduced to their trailing file name and
//! re-rooted under the presentation asset directory. Absolute `http(s)` URLs
//! and `data:` URIs already resolve the same everywhere and pass through.

#[cfg(test)]
#[path = "fragment_test.rs"]
mod fragment_test;

/// Directory the host serves slide images from.
pub const PRESENTATION_ROOT: &str = "/presentation";

pub const TITLE_SELECTOR: &str = ".title";
pub const IMAGE_SELECTOR: &str = "img";
pub const DESCRIPTION_SELECTOR: &str = ".description";

/// An image lifted out of a slide, with its source already rebased.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FragmentImage {
    pub src: String,
    pub alt: String,
}

/// The pieces of one slide that the viewer displays. Each is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MapFragments {
    pub title_html: Option<String>,
    pub image: Option<FragmentImage>,
    pub description_html: Option<String>,
}

impl MapFragments {
    pub fn is_empty(&self) -> bool {
        self.title_html.is_none() && self.image.is_none() && self.description_html.is_none()
    }
}

/// Read-only queries over a parsed, never-rendered document.
pub trait ParsedDocument {
    /// Inner markup of the first element matching `selector`, after
    /// [`sanitize_subtree`] has run over it.
    fn inner_markup(&self, selector: &str) -> Option<String>;

    /// Raw `src` and `alt` attribute values of the first element matching
    /// `selector`. A missing `alt` reads as empty.
    fn image_attrs(&self, selector: &str) -> Option<(String, String)>;
}

/// Locate the title, first image and description of a slide.
///
/// Each lookup is independent; any subset may be absent. An image whose
/// source cannot be rebased is dropped rather than emitted as a broken
/// reference.
pub fn extract_fragments<D: ParsedDocument + ?Sized>(doc: &D, asset_root: &str) -> MapFragments {
    let title_html = doc.inner_markup(TITLE_SELECTOR);
    let image = doc.image_attrs(IMAGE_SELECTOR).and_then(|(src, alt)| {
        rebase_image_src(&src, asset_root).map(|src| FragmentImage { src, alt })
    });
    let description_html = doc.inner_markup(DESCRIPTION_SELECTOR);
    MapFragments { title_html, image, description_html }
}

/// Re-root an image reference under `asset_root`.
///
/// `../presentation/04_validation.png?v=2` becomes
/// `/presentation/04_validation.png`. Absolute URLs and `data:` URIs are
/// returned unchanged. Returns `None` when no file name can be recovered.
pub fn rebase_image_src(src: &str, asset_root: &str) -> Option<String> {
    let src = src.trim();
    if src.is_empty() {
        return None;
    }
    let lower = src.to_ascii_lowercase();
    if lower.starts_with("data:") || lower.starts_with("http://") || lower.starts_with("https://") || src.starts_with("//") {
        return Some(src.to_owned());
    }

    let path = src.split(['?', '#']).next().unwrap_or_default();
    let file = path.rsplit(['/', '\\']).next().unwrap_or_default();
    if file.is_empty() || file == "." || file == ".." {
        return None;
    }
    Some(format!("{}/{file}", asset_root.trim_end_matches('/')))
}

/// Elements removed from extracted markup together with their subtree.
pub const BLOCKED_ELEMENTS: &[&str] = &["script", "iframe", "frame", "object", "embed"];

pub fn is_blocked_element(tag: &str) -> bool {
    BLOCKED_ELEMENTS.iter().any(|blocked| tag.eq_ignore_ascii_case(blocked))
}

/// Attributes the sanitizer strips from extracted markup: inline handlers,
/// `srcdoc`, and URL attributes whose scheme is `javascript:`.
pub fn is_unsafe_attribute(name: &str, value: &str) -> bool {
    let name = name.to_ascii_lowercase();
    if name.starts_with("on") || name == "srcdoc" {
        return true;
    }
    matches!(name.as_str(), "href" | "src" | "xlink:href" | "action" | "formaction" | "data")
        && url_scheme_is(value, "javascript:")
}

/// Scheme test as browsers read it: ASCII whitespace and control characters
/// anywhere in the value are ignored, case-insensitively.
fn url_scheme_is(value: &str, scheme: &str) -> bool {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(scheme.len())
        .collect();
    normalized.eq_ignore_ascii_case(scheme)
}

/// An element of a detached document, as the sanitizer sees it.
pub trait SanitizeNode: Sized {
    fn tag(&self) -> String;
    fn attribute_names(&self) -> Vec<String>;
    fn attribute(&self, name: &str) -> Option<String>;
    fn strip_attribute(&self, name: &str);
    /// Remove this element and its subtree from the document.
    fn detach(&self);
    /// Every element below this one, in document order.
    fn descendants(&self) -> Vec<Self>;
}

/// Drop blocked elements and unsafe attributes below `root`.
///
/// Blocked elements go first so the attribute pass only walks what will be
/// kept. `root`'s own attributes are untouched; only its inner markup is used.
pub fn sanitize_subtree<N: SanitizeNode>(root: &N) {
    for node in root.descendants() {
        if is_blocked_element(&node.tag()) {
            node.detach();
        }
    }
    for node in root.descendants() {
        for name in node.attribute_names() {
            let value = node.attribute(&name).unwrap_or_default();
            if is_unsafe_attribute(&name, &value) {
                node.strip_attribute(&name);
            }
        }
    }
}

// =============================================================================
// BROWSER PARSER
// =============================================================================

/// A slide parsed by the browser's `DOMParser` into a detached document.
#[cfg(feature = "hydrate")]
pub struct BrowserDocument {
    doc: web_sys::Document,
}

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    /// Parse `html` as `text/html` without attaching it to the page.
    ///
    /// # Errors
    ///
    /// Returns [`crate::net::error::FetchError::Parse`] if the parser cannot be created or rejects the input.
    pub fn parse(html: &str) -> Result<Self, crate::net::error::FetchError> {
        use crate::net::error::FetchError;

        let parser = web_sys::DomParser::new().map_err(|e| FetchError::Parse(format!("{e:?}")))?;
        let doc = parser
            .parse_from_string(html, web_sys::SupportedType::TextHtml)
            .map_err(|e| FetchError::Parse(format!("{e:?}")))?;
        Ok(Self { doc })
    }

    fn first(&self, selector: &str) -> Option<web_sys::Element> {
        self.doc.query_selector(selector).ok().flatten()
    }
}

#[cfg(feature = "hydrate")]
impl ParsedDocument for BrowserDocument {
    fn inner_markup(&self, selector: &str) -> Option<String> {
        let el = self.first(selector)?;
        sanitize_subtree(&el);
        Some(el.inner_html())
    }

    fn image_attrs(&self, selector: &str) -> Option<(String, String)> {
        let el = self.first(selector)?;
        let src = el.get_attribute("src")?;
        let alt = el.get_attribute("alt").unwrap_or_default();
        Some((src, alt))
    }
}

#[cfg(feature = "hydrate")]
impl SanitizeNode for web_sys::Element {
    fn tag(&self) -> String {
        self.tag_name()
    }

    fn attribute_names(&self) -> Vec<String> {
        self.get_attribute_names().iter().filter_map(|name| name.as_string()).collect()
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn strip_attribute(&self, name: &str) {
        if self.remove_attribute(name).is_err() {
            leptos::logging::warn!("could not strip attribute {name}");
        }
    }

    fn detach(&self) {
        self.remove();
    }

    fn descendants(&self) -> Vec<Self> {
        use wasm_bindgen::JsCast as _;

        let Ok(all) = self.query_selector_all("*") else {
            return Vec::new();
        };
        (0..all.length())
            .filter_map(|i| all.item(i))
            .filter_map(|n| n.dyn_into::<web_sys::Element>().ok())
            .collect()
    }
}
