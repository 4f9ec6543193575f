use super::{escape_html, layout, section, Page};
use crate::content::training::{PROGRAMS, STATS, WORKSHOPS};

pub fn school_clubs(page: &Page) -> String {
    let t = &page.t.training;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"lead\">{} &middot; {}</p>\n",
        escape_html(t.title),
        escape_html(page.t.cinema.youth_training),
        escape_html(page.t.cinema.youth_training_subtitle)
    );

    let mut stats = String::from("<ul class=\"stats\">\n");
    for stat in STATS {
        stats.push_str(&format!(
            "<li><strong>{}</strong> {}</li>\n",
            escape_html(stat.value),
            page.text(&stat.label)
        ));
    }
    stats.push_str("</ul>\n");
    body.push_str(&stats);

    for program in PROGRAMS {
        let mut inner = format!(
            "<p>{}</p>\n<dl><dt>{}</dt><dd>{}</dd></dl>\n<h3>{}</h3>\n<ul>\n",
            page.text(&program.description),
            page.text(&program.duration),
            page.text(&program.target),
            escape_html(t.curriculum),
        );
        for module in program.modules {
            inner.push_str(&format!("<li>{}</li>\n", page.text(module)));
        }
        inner.push_str(&format!(
            "</ul>\n<a class=\"cta\" href=\"/contact#registration\">{}</a>",
            escape_html(t.apply)
        ));
        body.push_str(&section(
            program.id,
            program.title.resolve(page.locale),
            &inner,
        ));
    }

    let mut workshops = String::from("<ul class=\"workshops\">\n");
    for w in WORKSHOPS {
        workshops.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            page.text(&w.title),
            page.text(&w.description)
        ));
    }
    workshops.push_str(&format!(
        "</ul>\n<a href=\"/contact\">{}</a>",
        escape_html(t.register_school)
    ));
    body.push_str(&section(
        "workshops",
        page.t.cinema.practical_workshops,
        &workshops,
    ));

    layout(page, t.title, &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentAttributes, Locale};

    #[test]
    fn test_every_program_has_a_section() {
        let page = Page::new(
            Locale::Arabic,
            DocumentAttributes::for_locale(Locale::Arabic),
            "/school-clubs",
        );
        let html = school_clubs(&page);
        for program in PROGRAMS {
            assert!(html.contains(&format!("<section id=\"{}\">", program.id)));
        }
        assert!(html.contains("200+"));
    }
}
