use super::{escape_html, layout, section, Page};
use crate::content::cinema::{screenings, Screening, ScreeningFilter, MASTERCLASSES};
use crate::content::format::{format_iso_date, format_time};

pub fn cinema(page: &Page, filter: ScreeningFilter) -> String {
    let t = &page.t.cinema;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"lead\">{}: {}</p>\n",
        escape_html(t.title),
        escape_html(t.club_title),
        escape_html(t.club_desc)
    );

    let (all_class, upcoming_class) = match filter {
        ScreeningFilter::All => (" class=\"active\"", ""),
        ScreeningFilter::Upcoming => ("", " class=\"active\""),
    };
    let mut program = format!(
        "<nav class=\"filters\"><a href=\"/cinema\"{}>{}</a> <a href=\"/cinema?filter=upcoming\"{}>{}</a></nav>\n<ul class=\"screenings\">\n",
        all_class,
        escape_html(t.all_screenings),
        upcoming_class,
        escape_html(t.upcoming_screenings),
    );
    for screening in screenings(filter) {
        program.push_str(&screening_card(page, screening));
    }
    program.push_str("</ul>");
    body.push_str(&section("program", t.program, &program));

    let mut masterclasses = String::from("<ul class=\"masterclasses\">\n");
    for mc in MASTERCLASSES {
        masterclasses.push_str(&format!(
            "<li><h3>{}</h3><p>{} &middot; {}</p><p>{}</p><time datetime=\"{}\">{}</time></li>\n",
            page.text(&mc.title),
            page.text(&mc.guest),
            page.text(&mc.role),
            page.text(&mc.topic),
            mc.date,
            escape_html(&format_iso_date(mc.date, page.locale)),
        ));
    }
    masterclasses.push_str("</ul>");
    body.push_str(&section("masterclass", t.masterclass, &masterclasses));

    body.push_str(&format!(
        "<a class=\"cta\" href=\"/contact#registration\">{}</a>\n",
        escape_html(t.register_attendance)
    ));

    layout(page, t.title, &body, None)
}

fn screening_card(page: &Page, s: &Screening) -> String {
    let t = &page.t.cinema;
    let badge = if s.is_opening {
        format!(" <span class=\"badge\">{}</span>", escape_html(t.opening_event))
    } else if s.is_past {
        format!(" <span class=\"badge past\">{}</span>", escape_html(t.past_screenings))
    } else {
        String::new()
    };

    format!(
        r#"<li>
<h3>{title} ({year}){badge}</h3>
<p>{director_label}: {director} &middot; {country} &middot; {genre} &middot; {duration} {minutes}</p>
<p>{synopsis}</p>
<p>{date_label}: <time datetime="{iso}">{date}</time> &middot; {time_label}: {time}</p>
<p>{discussion_label}: {discussion}</p>
</li>
"#,
        title = page.text(&s.title),
        year = s.year,
        badge = badge,
        director_label = escape_html(t.director),
        director = page.text(&s.director),
        country = page.text(&s.country),
        genre = page.text(&s.genre),
        duration = s.duration,
        minutes = escape_html(t.minutes),
        synopsis = page.text(&s.synopsis),
        date_label = escape_html(t.screening_date),
        iso = s.date,
        date = escape_html(&format_iso_date(s.date, page.locale)),
        time_label = escape_html(t.screening_time),
        time = escape_html(&format_time(s.time, page.locale)),
        discussion_label = escape_html(t.discussion_with),
        discussion = page.text(&s.discussion_with),
    )
}
