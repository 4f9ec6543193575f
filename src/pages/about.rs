use super::{escape_html, layout, section, Page};
use crate::content::association::{BOARD_MEMBERS, DOCUMENTS, TIMELINE};

pub fn about(page: &Page) -> String {
    let t = &page.t.about;
    let mut body = format!("<h1>{}</h1>\n", escape_html(t.title));

    body.push_str(&section(
        "identity",
        t.identity,
        &format!(
            "<dl>\n<dt>{}</dt><dd>{}</dd>\n<dt>{}</dt><dd>{}</dd>\n</dl>",
            escape_html(t.founded_year),
            escape_html(t.founded_value),
            escape_html(t.location),
            escape_html(t.location_value),
        ),
    ));

    body.push_str(&section(
        "mission",
        t.mission,
        &format!("<p>{}</p>", escape_html(t.mission_text)),
    ));

    let pillars = [&t.pillars.formation, &t.pillars.memory, &t.pillars.critique];
    let mut vision = String::from("<ul class=\"pillars\">\n");
    for pillar in pillars {
        vision.push_str(&format!(
            "<li><h3>{}</h3><p>{}</p></li>\n",
            escape_html(pillar.title),
            escape_html(pillar.description)
        ));
    }
    vision.push_str("</ul>");
    body.push_str(&section("vision", t.vision, &vision));

    let mut board = String::from("<ul class=\"board\">\n");
    for member in BOARD_MEMBERS {
        board.push_str(&format!(
            "<li><strong>{}</strong> <span>{}</span></li>\n",
            page.text(&member.name),
            page.text(&member.role)
        ));
    }
    board.push_str("</ul>");
    body.push_str(&section("board", t.board, &board));

    let mut timeline = String::from("<ol class=\"timeline\">\n");
    for entry in TIMELINE {
        timeline.push_str(&format!(
            "<li><span class=\"year\">{}</span> <h3>{}</h3> <p>{}</p></li>\n",
            escape_html(entry.year),
            page.text(&entry.title),
            page.text(&entry.description)
        ));
    }
    timeline.push_str("</ol>");
    body.push_str(&section("timeline", t.timeline, &timeline));

    let mut documents = String::from("<ul class=\"documents\">\n");
    for doc in DOCUMENTS {
        documents.push_str(&format!(
            "<li>{} <small>{}</small> <span>{}</span></li>\n",
            page.text(&doc.title),
            escape_html(doc.kind),
            escape_html(page.t.common.download)
        ));
    }
    documents.push_str("</ul>");
    body.push_str(&section("documents", t.documents, &documents));

    layout(page, t.title, &body, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentAttributes, Locale};

    #[test]
    fn test_about_lists_board_in_locale() {
        let page = Page::new(
            Locale::Arabic,
            DocumentAttributes::for_locale(Locale::Arabic),
            "/about",
        );
        let html = about(&page);
        assert!(html.contains("محمد العربي"));
        assert!(!html.contains("Mohamed Larbi"));
        assert!(html.contains(r#"<a href="/about" aria-current="page">"#));
    }
}
