//! Server-rendered HTML pages.
//!
//! Every page goes through [`layout`], which sets `lang`/`dir` on `<html>`
//! and the Arabic font class on `<body>` from the request's locale context.
//! All dynamic text is escaped with [`escape_html`].

mod about;
mod cinema;
mod contact;
mod home;
mod media;
mod partners;
mod school_clubs;
mod theatre;

pub use about::about;
pub use cinema::cinema;
pub use contact::{contact, ContactPage};
pub use home::home;
pub use media::media;
pub use partners::partners;
pub use school_clubs::school_clubs;
pub use theatre::theatre;

use crate::content::Localized;
use crate::i18n::{Dictionary, DocumentAttributes, Locale};
use std::time::Duration;

/// Everything a page needs to know about the active locale.
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub locale: Locale,
    pub document: DocumentAttributes,
    pub t: &'static Dictionary,
    /// Path of the page being rendered, used to mark the active nav link
    pub path: &'static str,
}

impl Page {
    pub fn new(locale: Locale, document: DocumentAttributes, path: &'static str) -> Self {
        Self {
            locale,
            document,
            t: Dictionary::for_locale(locale),
            path,
        }
    }

    /// Resolve and escape a bilingual value.
    pub fn text(&self, value: &Localized) -> String {
        escape_html(value.resolve(self.locale))
    }
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Wrap a page body in the site chrome.
///
/// `refresh` makes the browser reload `url` after the given delay; the
/// contact page uses it to clear the forms once the success message has
/// been shown.
pub fn layout(page: &Page, title: &str, body: &str, refresh: Option<(Duration, &str)>) -> String {
    let t = page.t;
    let doc = page.document;

    let refresh_meta = match refresh {
        Some((after, url)) => format!(
            r#"<meta http-equiv="refresh" content="{}; url={}">"#,
            refresh_seconds(after),
            escape_html(url)
        ),
        None => String::new(),
    };

    let body_class = if doc.body_class().is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, doc.body_class())
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title} | {site}</title>
{refresh_meta}
</head>
<body{body_class}>
{nav}
<main>
{body}
</main>
{footer}
</body>
</html>
"#,
        lang = doc.lang,
        dir = doc.dir.as_str(),
        title = escape_html(title),
        site = escape_html(t.hero.title),
        refresh_meta = refresh_meta,
        body_class = body_class,
        nav = nav(page),
        body = body,
        footer = footer(page),
    )
}

fn nav(page: &Page) -> String {
    let t = &page.t.nav;
    let links = [
        ("/", t.home),
        ("/about", t.about),
        ("/theatre", t.theatre),
        ("/cinema", t.cinema),
        ("/school-clubs", t.school_clubs),
        ("/media", t.media),
        ("/partners", t.partners),
        ("/contact", t.contact),
    ];

    let mut html = String::from("<header>\n<nav>\n<ul>\n");
    for (href, label) in links {
        let current = if href == page.path {
            r#" aria-current="page""#
        } else {
            ""
        };
        html.push_str(&format!(
            "<li><a href=\"{}\"{}>{}</a></li>\n",
            href,
            current,
            escape_html(label)
        ));
    }
    html.push_str("</ul>\n");
    html.push_str(&format!(
        "<a class=\"cta\" href=\"/contact#registration\">{}</a>\n",
        escape_html(t.join_club)
    ));
    html.push_str(&format!(
        "<form method=\"post\" action=\"/language/toggle\"><button type=\"submit\" lang=\"{}\">{}</button></form>\n",
        page.locale.other().code(),
        escape_html(t.switch_language)
    ));
    html.push_str("</nav>\n</header>");
    html
}

fn footer(page: &Page) -> String {
    let t = page.t;
    format!(
        r#"<footer>
<p class="slogan">{slogan}</p>
<section>
<h2>{contact_info}</h2>
<address>{line1}<br>{line2}<br>{line3}</address>
</section>
<p class="rights">&copy; {year} {site}. {rights}</p>
</footer>"#,
        slogan = escape_html(t.footer.slogan),
        contact_info = escape_html(t.footer.contact_info),
        line1 = escape_html(t.club_address.line1),
        line2 = escape_html(t.club_address.line2),
        line3 = escape_html(t.club_address.line3),
        year = chrono::Utc::now().format("%Y"),
        site = escape_html(t.hero.title),
        rights = escape_html(t.footer.rights),
    )
}

/// Meta refresh only takes whole seconds; round up so the page never
/// reloads before `after` has passed.
fn refresh_seconds(after: Duration) -> u128 {
    ((after.as_millis() + 999) / 1000).max(1)
}

/// `<section>` with a heading; `inner` is already HTML.
pub(crate) fn section(id: &str, heading: &str, inner: &str) -> String {
    format!(
        "<section id=\"{}\">\n<h2>{}</h2>\n{}\n</section>\n",
        id,
        escape_html(heading),
        inner
    )
}
