use super::{escape_html, layout, section, Page};
use crate::content::format::format_iso_date;
use crate::content::media::{gallery, latest_news, GalleryCategory, GalleryFilter, NEWS, VIDEOS};

pub fn media(page: &Page, filter: GalleryFilter) -> String {
    let t = &page.t.media;
    let mut body = format!("<h1>{}</h1>\n", escape_html(t.title));

    let mut news = String::from("<ul class=\"news\">\n");
    for article in latest_news(NEWS.len()) {
        news.push_str(&format!(
            "<li><span class=\"category\">{}</span> <h3>{}</h3> <time datetime=\"{}\">{}</time> <p>{}</p></li>\n",
            page.text(&article.category),
            page.text(&article.title),
            article.date,
            escape_html(&format_iso_date(article.date, page.locale)),
            page.text(&article.excerpt),
        ));
    }
    news.push_str("</ul>");
    body.push_str(&section("news", t.news, &news));

    let categories = [
        (GalleryFilter::All, "all", page.t.common.all),
        (
            GalleryFilter::Only(GalleryCategory::Cinema),
            GalleryCategory::Cinema.as_str(),
            page.t.nav.cinema,
        ),
        (
            GalleryFilter::Only(GalleryCategory::Theatre),
            GalleryCategory::Theatre.as_str(),
            page.t.nav.theatre,
        ),
        (
            GalleryFilter::Only(GalleryCategory::Training),
            GalleryCategory::Training.as_str(),
            page.t.nav.school_clubs,
        ),
    ];
    let mut gallery_html = String::from("<nav class=\"filters\">");
    for (f, key, label) in categories {
        let active = if f == filter { " class=\"active\"" } else { "" };
        gallery_html.push_str(&format!(
            "<a href=\"/media?category={}#gallery\"{}>{}</a> ",
            key,
            active,
            escape_html(label)
        ));
    }
    gallery_html.push_str("</nav>\n<ul class=\"gallery\">\n");
    for image in gallery(filter) {
        let alt = page.text(&image.event);
        gallery_html.push_str(&format!(
            "<li data-category=\"{}\"><img src=\"{}\" alt=\"{}\" loading=\"lazy\"><span>{}</span></li>\n",
            image.category.as_str(),
            image.src(),
            alt,
            alt
        ));
    }
    gallery_html.push_str("</ul>");
    body.push_str(&section("gallery", t.gallery, &gallery_html));

    let mut videos = String::from("<ul class=\"videos\">\n");
    for video in VIDEOS {
        videos.push_str(&format!(
            "<li><h3>{}</h3><span>{}</span> <small>{}</small></li>\n",
            page.text(&video.title),
            page.text(&video.category),
            escape_html(video.duration)
        ));
    }
    videos.push_str("</ul>");
    body.push_str(&section("videos", t.videos, &videos));

    let coverage = [
        (t.print_press, t.print_press_desc),
        (t.online_press, t.online_press_desc),
        (t.tv_channels, t.tv_channels_desc),
    ];
    let mut press = String::from("<ul class=\"press\">\n");
    for (title, desc) in coverage {
        press.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            escape_html(title),
            escape_html(desc)
        ));
    }
    press.push_str("</ul>");
    body.push_str(&section("press", t.press_coverage, &press));

    layout(page, t.title, &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::media::GALLERY;
    use crate::i18n::{DocumentAttributes, Locale};

    fn page() -> Page {
        Page::new(
            Locale::Arabic,
            DocumentAttributes::for_locale(Locale::Arabic),
            "/media",
        )
    }

    #[test]
    fn test_gallery_filter_limits_images() {
        let html = media(&page(), GalleryFilter::Only(GalleryCategory::Theatre));
        let expected = GALLERY
            .iter()
            .filter(|i| i.category == GalleryCategory::Theatre)
            .count();
        assert_eq!(html.matches("data-category=\"theatre\"").count(), expected);
        assert_eq!(html.matches("data-category=\"cinema\"").count(), 0);
    }

    #[test]
    fn test_all_gallery_shows_everything() {
        let html = media(&page(), GalleryFilter::All);
        assert_eq!(html.matches("<img ").count(), GALLERY.len());
    }
}
