//! HTML Feature Extraction
//!
//! Đếm các element đáng ngờ trong markup (forms, password inputs, iframes...).
//! Parsing is lenient; only selector construction can fail the group.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::types::{ExtractionError, FeatureGroup, HtmlFeatures};

/// Inner-markup terms that make a form look like a login form
pub const LOGIN_FORM_TERMS: &[&str] = &["login", "signin", "username", "password"];

const HIDDEN_SELECTOR: &str = r#"[style*="display:none"], [style*="display: none"], [hidden]"#;
const FAVICON_SELECTOR: &str = r#"link[rel*="icon"]"#;
const PASSWORD_SELECTOR: &str = r#"input[type="password"]"#;

/// Selectors compiled once per process
struct HtmlSelectors {
    form: Selector,
    password: Selector,
    link: Selector,
    iframe: Selector,
    script: Selector,
    hidden: Selector,
    image: Selector,
    favicon: Selector,
}

impl HtmlSelectors {
    fn build() -> Result<Self, String> {
        Ok(Self {
            form: selector("form")?,
            password: selector(PASSWORD_SELECTOR)?,
            link: selector("a[href]")?,
            iframe: selector("iframe")?,
            script: selector("script")?,
            hidden: selector(HIDDEN_SELECTOR)?,
            image: selector("img")?,
            favicon: selector(FAVICON_SELECTOR)?,
        })
    }
}

static SELECTORS: Lazy<Result<HtmlSelectors, String>> = Lazy::new(HtmlSelectors::build);

fn selector(css: &str) -> Result<Selector, String> {
    Selector::parse(css).map_err(|e| format!("{} ({:?})", css, e))
}

/// Extract HTML features from the page markup.
///
/// `page_url` is the page's own address; links are resolved against it and
/// counted as external when their host (and port) differ.
pub fn extract_html_features(markup: &str, page_url: &str) -> FeatureGroup<HtmlFeatures> {
    try_extract(markup, page_url).into()
}

fn try_extract(markup: &str, page_url: &str) -> Result<HtmlFeatures, ExtractionError> {
    let sel = SELECTORS
        .as_ref()
        .map_err(|e| ExtractionError::InvalidSelector(e.clone()))?;
    let doc = Html::parse_document(markup);

    let forms: Vec<ElementRef> = doc.select(&sel.form).collect();
    let password_input_count = doc.select(&sel.password).count() as u32;

    let has_login_form = forms.iter().any(|form| {
        let inner = form.inner_html().to_lowercase();
        LOGIN_FORM_TERMS.iter().any(|term| inner.contains(term))
    });

    let base = Url::parse(page_url).ok();
    let external_link_count = doc
        .select(&sel.link)
        .filter_map(|a| a.value().attr("href"))
        .filter(|href| is_external(href, base.as_ref()))
        .count() as u32;

    Ok(HtmlFeatures {
        form_count: forms.len() as u32,
        password_input_count,
        external_link_count,
        iframe_count: doc.select(&sel.iframe).count() as u32,
        script_count: doc.select(&sel.script).count() as u32,
        hidden_element_count: doc.select(&sel.hidden).count() as u32,
        image_count: doc.select(&sel.image).count() as u32,
        has_favicon: doc.select(&sel.favicon).next().is_some(),
        has_password_field: password_input_count > 0,
        has_login_form,
    })
}

/// Unparsable hrefs are not external
fn is_external(href: &str, base: Option<&Url>) -> bool {
    let link = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };

    match link {
        Ok(link) => {
            let page_host = base.and_then(|b| b.host_str());
            let page_port = base.and_then(|b| b.port_or_known_default());
            link.host_str() != page_host || link.port_or_known_default() != page_port
        }
        Err(_) => false,
    }
}
