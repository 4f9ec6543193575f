use super::{escape_html, layout, section, Page};
use crate::forms::{ContactForm, FormController, RegistrationForm, Validate, ValidationErrors};
use std::time::Duration;

/// State of both forms on the contact page.
pub struct ContactPage<'a> {
    pub contact: &'a FormController<ContactForm>,
    pub registration: &'a FormController<RegistrationForm>,
}

enum Input {
    Text(&'static str),
    Number,
    TextArea,
}

pub fn contact(page: &Page, forms: &ContactPage<'_>) -> String {
    let t = page.t;
    let mut body = format!(
        "<h1>{}</h1>\n<p class=\"lead\">{}</p>\n",
        escape_html(t.contact.title),
        escape_html(t.contact.subtitle)
    );

    body.push_str(&section(
        "info",
        t.contact.info_title,
        &format!(
            "<dl>\n<dt>{}</dt><dd>{}</dd>\n<dt>{}</dt><dd dir=\"ltr\">+212 6XX XXX XXX</dd>\n<dt>{}</dt><dd dir=\"ltr\">contact@alkarama.ma</dd>\n<dt>{}</dt><dd>{}</dd>\n</dl>\n<p>{}</p>",
            escape_html(t.contact.address),
            escape_html(t.contact.address_value),
            escape_html(t.contact.phone),
            escape_html(t.contact.email),
            escape_html(t.contact.hours),
            escape_html(t.contact.hours_value),
            escape_html(t.contact.follow_us),
        ),
    ));

    let contact_form = render_form(
        page,
        "contact",
        "/contact",
        forms.contact,
        &[
            ("name", t.contact.name, Input::Text("text")),
            ("email", t.contact.your_email, Input::Text("email")),
            ("message", t.contact.message, Input::TextArea),
        ],
        t.contact.send,
        t.common.success,
    );
    body.push_str(&section("message", t.contact.send_message, &contact_form));

    let r = &t.registration;
    let registration_form = render_form(
        page,
        "registration",
        "/register",
        forms.registration,
        &[
            ("fullName", r.full_name, Input::Text("text")),
            ("age", r.age, Input::Number),
            ("phone", r.phone, Input::Text("tel")),
            ("email", r.email, Input::Text("email")),
            ("motivation", r.motivation, Input::TextArea),
        ],
        r.submit,
        r.success,
    );
    body.push_str(&section(
        "registration",
        r.title,
        &format!(
            "<p>{}</p>\n{}",
            escape_html(r.subtitle),
            registration_form
        ),
    ));

    let refresh = [
        success_window(forms.contact),
        success_window(forms.registration),
    ]
    .into_iter()
    .flatten()
    .max()
    .map(|after| (after, "/contact"));

    layout(page, t.contact.title, &body, refresh)
}

fn success_window<F>(controller: &FormController<F>) -> Option<Duration>
where
    F: Validate + serde::Serialize + Default + Clone,
{
    controller
        .is_success_visible()
        .then(|| controller.success_display())
}

/// Element ids are prefixed with `form_id` since both forms share field names.
fn render_form<F>(
    page: &Page,
    form_id: &str,
    action: &str,
    controller: &FormController<F>,
    fields: &[(&'static str, &'static str, Input)],
    submit_label: &str,
    success_message: &str,
) -> String
where
    F: Validate + serde::Serialize + Default + Clone,
{
    let dir = page.document.dir.as_str();
    let errors: &ValidationErrors = controller.errors();
    let mut html = String::new();

    if controller.is_success_visible() {
        html.push_str(&format!(
            "<p class=\"success\" role=\"status\">{}</p>\n",
            escape_html(success_message)
        ));
    }

    html.push_str(&format!(
        "<form method=\"post\" action=\"{}\" novalidate>\n",
        action
    ));
    for (name, label, input) in fields {
        let value = escape_html(controller.form().field(name).unwrap_or_default());
        let error = errors.get(name);
        let id = format!("{}-{}", form_id, name);
        let invalid = if error.is_some() {
            format!(" aria-invalid=\"true\" aria-describedby=\"{}-error\"", id)
        } else {
            String::new()
        };

        html.push_str(&format!(
            "<label for=\"{}\">{}</label>\n",
            id,
            escape_html(label)
        ));
        let control = match input {
            Input::Text(kind) => format!(
                "<input type=\"{}\" id=\"{}\" name=\"{}\" value=\"{}\"{}>\n",
                kind, id, name, value, invalid
            ),
            Input::Number => format!(
                "<input type=\"number\" id=\"{}\" name=\"{}\" min=\"10\" max=\"100\" value=\"{}\"{}>\n",
                id, name, value, invalid
            ),
            Input::TextArea => format!(
                "<textarea id=\"{}\" name=\"{}\" rows=\"5\"{}>{}</textarea>\n",
                id, name, invalid, value
            ),
        };
        html.push_str(&control);

        if let Some(error) = error {
            html.push_str(&format!(
                "<p class=\"error\" id=\"{}-error\" dir=\"{}\" data-rule=\"{}\">{}</p>\n",
                id,
                dir,
                error.rule.code(),
                escape_html(error.message)
            ));
        }
    }
    html.push_str(&format!(
        "<button type=\"submit\">{}</button>\n</form>",
        escape_html(submit_label)
    ));
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{DocumentAttributes, Locale};
    use std::time::Instant;

    fn page(locale: Locale) -> Page {
        Page::new(locale, DocumentAttributes::for_locale(locale), "/contact")
    }

    fn empty() -> (FormController<ContactForm>, FormController<RegistrationForm>) {
        (
            FormController::new(Duration::from_secs(3)),
            FormController::new(Duration::from_secs(3)),
        )
    }

    #[test]
    fn test_fresh_page_has_no_errors() {
        let (c, r) = empty();
        let html = contact(
            &page(Locale::Arabic),
            &ContactPage {
                contact: &c,
                registration: &r,
            },
        );
        assert!(!html.contains("class=\"error\""));
        assert!(html.contains("action=\"/contact\""));
        assert!(html.contains("action=\"/register\""));
    }

    #[test]
    fn test_errors_rendered_inline_in_active_direction() {
        let posted = ContactForm {
            name: "Al".to_string(),
            email: "x@y.com".to_string(),
            message: "short".to_string(),
        };
        let c = FormController::with_form(posted, Duration::from_secs(3));
        let (_, r) = empty();
        let html = contact(
            &page(Locale::Arabic),
            &ContactPage {
                contact: &c,
                registration: &r,
            },
        );
        assert!(html.contains(
            "<p class=\"error\" id=\"contact-name-error\" dir=\"rtl\" data-rule=\"min_length\">Name must be at least 3 characters</p>"
        ));
        assert!(html.contains("id=\"contact-message-error\""));
        assert!(!html.contains("id=\"contact-email-error\""));
        assert!(html.contains("value=\"Al\""));
    }

    #[test]
    fn test_values_are_escaped() {
        let mut c = FormController::<ContactForm>::new(Duration::from_secs(3));
        c.set_field("name", "<b>Ali</b>");
        let (_, r) = empty();
        let html = contact(
            &page(Locale::French),
            &ContactPage {
                contact: &c,
                registration: &r,
            },
        );
        assert!(html.contains("value=\"&lt;b&gt;Ali&lt;/b&gt;\""));
        assert!(!html.contains("<b>Ali</b>"));
    }

    #[test]
    fn test_success_shows_message_and_refresh() {
        let mut r = FormController::with_form(
            RegistrationForm {
                full_name: "Omar Tazi".to_string(),
                age: "25".to_string(),
                phone: "0612345678".to_string(),
                email: "omar@example.ma".to_string(),
                motivation: "Le cinema est ma passion depuis toujours.".to_string(),
            },
            Duration::from_secs(3),
        );
        r.begin_submit().unwrap();
        r.complete_submit(true, Instant::now());
        let (c, _) = empty();

        let p = page(Locale::French);
        let html = contact(
            &p,
            &ContactPage {
                contact: &c,
                registration: &r,
            },
        );
        assert!(html.contains(&escape_html(p.t.registration.success)));
        assert!(html.contains("http-equiv=\"refresh\" content=\"3; url=/contact\""));
    }
}
