//! MiniJinja filter registration.

use minijinja::{Environment, Error, ErrorKind};

use crate::carousel::Slot;
use crate::site::ContactMessage;

/// Registers the page filters on a minijinja environment.
pub(crate) fn register_filters(env: &mut Environment<'static>) {
    // Positional class for a carousel card: {{ card.slot | slot_class }}
    env.add_filter("slot_class", |slot: Option<String>| -> String {
        slot.as_deref().and_then(slot_from_name).map_or("", Slot::class).to_string()
    });

    // {{ site.contact_email | mailto }} or {{ email | mailto("Subject", "Body") }}
    env.add_filter(
        "mailto",
        |recipient: String, subject: Option<String>, body: Option<String>| -> Result<String, Error> {
            ContactMessage::new(subject.unwrap_or_default(), body.unwrap_or_default())
                .mailto(&recipient)
                .map_err(|e| Error::new(ErrorKind::InvalidOperation, e.to_string()))
        },
    );
}

fn slot_from_name(name: &str) -> Option<Slot> {
    match name {
        "previous" => Some(Slot::Previous),
        "current" => Some(Slot::Current),
        "next" => Some(Slot::Next),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    fn render(source: &str, ctx: minijinja::Value) -> Result<String, Error> {
        let mut env = Environment::new();
        register_filters(&mut env);
        env.render_str(source, ctx)
    }

    #[test]
    fn test_slot_class() {
        let out = render(
            "{% for s in slots %}[{{ s | slot_class }}]{% endfor %}",
            context! { slots => vec![Some("previous"), Some("current"), Some("next"), None] },
        )
        .unwrap();
        assert_eq!(out, "[is-left][is-center][is-right][]");
    }

    #[test]
    fn test_mailto_filter() {
        let out = render(
            r#"{{ email | mailto("Hi there") }}"#,
            context! { email => "sam@example.com" },
        )
        .unwrap();
        assert_eq!(out, "mailto:sam@example.com?subject=Hi%20there");
    }

    #[test]
    fn test_mailto_filter_rejects_bad_address() {
        let result = render("{{ email | mailto }}", context! { email => "nobody" });
        assert!(result.is_err());
    }
}
