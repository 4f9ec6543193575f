use super::{escape_html, layout, section, Page};
use crate::content::partners::{by_tier, PartnerTier, TESTIMONIALS};

pub fn partners(page: &Page) -> String {
    let t = &page.t.partners;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"lead\">{}</p>\n",
        escape_html(t.title),
        escape_html(t.subtitle)
    );

    for (tier, id, heading) in [
        (PartnerTier::Strategic, "strategic", t.strategic),
        (PartnerTier::Institutional, "institutional", t.institutional),
    ] {
        let mut list = String::from("<ul class=\"partners\">\n");
        for partner in by_tier(tier) {
            let logo = match partner.logo {
                Some(src) => format!(
                    "<img src=\"{}\" alt=\"{}\"> ",
                    escape_html(src),
                    page.text(&partner.name)
                ),
                None => String::new(),
            };
            list.push_str(&format!(
                "<li>{}<h3>{}</h3><p>{}</p></li>\n",
                logo,
                page.text(&partner.name),
                page.text(&partner.description)
            ));
        }
        list.push_str("</ul>");
        body.push_str(&section(id, heading, &list));
    }

    let mut quotes = String::new();
    for testimonial in TESTIMONIALS {
        quotes.push_str(&format!(
            "<blockquote><p>{}</p><footer>{}</footer></blockquote>\n",
            page.text(&testimonial.quote),
            page.text(&testimonial.author)
        ));
    }
    body.push_str(&section("testimonials", t.testimonials, &quotes));

    layout(page, t.title, &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentAttributes, Locale};

    #[test]
    fn test_partners_grouped_by_tier() {
        let page = Page::new(
            Locale::French,
            DocumentAttributes::for_locale(Locale::French),
            "/partners",
        );
        let html = partners(&page);
        let strategic = html.find("id=\"strategic\"").unwrap();
        let institutional = html.find("id=\"institutional\"").unwrap();
        assert!(strategic < institutional);

        for partner in by_tier(PartnerTier::Institutional) {
            let pos = html.find(&page.text(&partner.name)).unwrap();
            assert!(pos > institutional);
        }
    }
}
