use super::{escape_html, layout, section, Page};
use crate::content::theatre::{FESTIVALS, PRODUCTIONS, WORKSHOPS};

pub fn theatre(page: &Page) -> String {
    let t = &page.t.theatre;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"lead\">{}</p>\n",
        escape_html(t.troupe),
        escape_html(t.troupe_desc)
    );

    let mut productions = String::from("<ul class=\"productions\">\n");
    for p in PRODUCTIONS {
        productions.push_str(&format!(
            "<li><h3>{} ({})</h3><p>{}</p><p>{}</p><p>{} {} &middot; <span class=\"cast\">{}</span></p></li>\n",
            page.text(&p.title),
            p.year,
            page.text(&p.genre),
            page.text(&p.synopsis),
            p.duration,
            escape_html(page.t.cinema.minutes),
            p.cast,
        ));
    }
    productions.push_str("</ul>");
    body.push_str(&section("productions", t.productions, &productions));

    let mut festivals = String::from("<ul class=\"festivals\">\n");
    for f in FESTIVALS {
        festivals.push_str(&format!(
            "<li><strong>{}</strong> {} &middot; {}</li>\n",
            page.text(&f.name),
            f.year,
            page.text(&f.award)
        ));
    }
    festivals.push_str("</ul>");
    body.push_str(&section("festivals", t.festivals, &festivals));

    let mut workshops = String::from("<ul class=\"workshops\">\n");
    for w in WORKSHOPS {
        workshops.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p><small>{}</small></li>\n",
            page.text(&w.title),
            page.text(&w.description),
            page.text(&w.duration)
        ));
    }
    workshops.push_str(&format!(
        "</ul>\n<a class=\"cta\" href=\"/contact#registration\">{}</a>",
        escape_html(t.register)
    ));
    body.push_str(&section("school", t.school, &workshops));

    layout(page, t.title, &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentAttributes, Locale};

    #[test]
    fn test_theatre_lists_productions() {
        let page = Page::new(
            Locale::French,
            DocumentAttributes::for_locale(Locale::French),
            "/theatre",
        );
        let html = theatre(&page);
        for p in PRODUCTIONS {
            assert!(html.contains(&page.text(&p.title)));
        }
    }
}
