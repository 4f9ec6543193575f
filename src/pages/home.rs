use super::{escape_html, layout, section, Page};
use crate::content::format::{format_iso_date, format_time};
use crate::content::partners::{by_tier, PartnerTier};
use crate::content::{cinema, media};

pub fn home(page: &Page) -> String {
    let t = page.t;
    let mut body = String::new();

    body.push_str(&format!(
        r#"<section class="hero">
<h1>{}</h1>
<p>{}</p>
<a class="cta" href="/contact#registration">{}</a>
<a class="cta secondary" href="/cinema">{}</a>
</section>
"#,
        escape_html(t.hero.title),
        escape_html(t.hero.subtitle),
        escape_html(t.hero.cta1),
        escape_html(t.hero.cta2),
    ));

    body.push_str(&section(
        "about-preview",
        t.about_preview.title,
        &format!(
            "<p>{}</p>\n<a href=\"/about\">{}</a>",
            escape_html(t.about_preview.content),
            escape_html(t.about_preview.learn_more)
        ),
    ));

    let mut club = format!("<p>{}</p>\n", escape_html(t.cinema.club_desc));
    if let Some(opening) = cinema::opening_screening() {
        club.push_str(&format!(
            r#"<article class="opening">
<h3>{event}: {title}</h3>
<p>{date_label}: {date} &middot; {time_label}: {time}</p>
<p>{discussion}: {guest}</p>
</article>
"#,
            event = escape_html(t.cinema.opening_event),
            title = page.text(&opening.title),
            date_label = escape_html(t.cinema.screening_date),
            date = escape_html(&format_iso_date(opening.date, page.locale)),
            time_label = escape_html(t.cinema.screening_time),
            time = escape_html(&format_time(opening.time, page.locale)),
            discussion = escape_html(t.cinema.discussion_with),
            guest = page.text(&opening.discussion_with),
        ));
    }
    club.push_str(&format!(
        "<a href=\"/cinema?filter=upcoming\">{}</a>",
        escape_html(t.cinema.upcoming_screenings)
    ));
    body.push_str(&section("cinema-club", t.cinema.club_title, &club));

    let coverage = &t.media_coverage;
    let mut press = String::new();
    for (title, content) in [
        (coverage.news1_title, coverage.news1_content),
        (coverage.news2_title, coverage.news2_content),
    ] {
        press.push_str(&format!(
            "<article class=\"coverage\">\n<h3>{}</h3>\n<p>{}</p>\n<a href=\"/media\">{}</a>\n</article>\n",
            escape_html(title),
            escape_html(content),
            escape_html(coverage.read_more),
        ));
    }
    press.push_str(&format!(
        "<a class=\"cta secondary\" href=\"/media\">{}</a>",
        escape_html(t.media.view_all)
    ));
    body.push_str(&section("media-coverage", coverage.title, &press));

    let mut news = String::from("<ul class=\"news\">\n");
    for article in media::latest_news(3) {
        news.push_str(&format!(
            "<li><time datetime=\"{}\">{}</time> <strong>{}</strong> <p>{}</p></li>\n",
            article.date,
            escape_html(&format_iso_date(article.date, page.locale)),
            page.text(&article.title),
            page.text(&article.excerpt),
        ));
    }
    news.push_str(&format!(
        "</ul>\n<a href=\"/media\">{}</a>",
        escape_html(t.media.view_all)
    ));
    body.push_str(&section("news", t.media.news, &news));

    let mut partners = String::from("<ul class=\"partners\">\n");
    for partner in by_tier(PartnerTier::Strategic) {
        partners.push_str(&format!("<li>{}</li>\n", page.text(&partner.name)));
    }
    partners.push_str("</ul>");
    body.push_str(&section("partners", t.partners.title, &partners));

    layout(page, t.nav.home, &body, None)
}
