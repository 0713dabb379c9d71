//! Validation predicates for the contact form.
//!
//! Each field has an independent predicate returning either `Ok` or a static
//! user-facing message (the site is French-language). The predicates are
//! pure over the raw input string; the DOM layer decides when to run them
//! (on blur, and on input once a field is already in error).

/// The fixed set of contact-form fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Topic,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Topic, Field::Message];
}

/// Validates one field's raw value.
pub fn validate(field: Field, value: &str) -> Result<(), &'static str> {
    match field {
        Field::Name => {
            if value.trim().chars().count() >= 2 {
                Ok(())
            } else {
                Err("Ce champ est requis (min. 2 caractères).")
            }
        }
        Field::Email => {
            if is_email(value) {
                Ok(())
            } else {
                Err("Email invalide.")
            }
        }
        Field::Topic => {
            if value.is_empty() {
                Err("Veuillez sélectionner un type de demande.")
            } else {
                Ok(())
            }
        }
        Field::Message => {
            if value.trim().chars().count() >= 20 {
                Ok(())
            } else {
                Err("Message trop court (min. 20 caractères).")
            }
        }
    }
}

/// Validates every field, returning the failures in declaration order.
pub fn validate_all<'a>(
    values: impl Fn(Field) -> &'a str,
) -> Vec<(Field, &'static str)> {
    Field::ALL
        .iter()
        .filter_map(|&f| validate(f, values(f)).err().map(|msg| (f, msg)))
        .collect()
}

/// Shape check equivalent to `/^[^\s@]+@[^\s@]+\.[^\s@]+$/`: one `@` with a
/// non-empty local part and a domain containing a dot, no whitespace
/// anywhere.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let (Some(local), Some(domain)) = (parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_two_characters_after_trim() {
        assert!(validate(Field::Name, "Jo").is_ok());
        assert!(validate(Field::Name, "  J  ").is_err());
        assert!(validate(Field::Name, "").is_err());
    }

    #[test]
    fn email_shapes() {
        assert!(validate(Field::Email, "a@b.co").is_ok());
        assert!(validate(Field::Email, "booking@tamer-official.com").is_ok());
        assert!(validate(Field::Email, "plainaddress").is_err());
        assert!(validate(Field::Email, "@missing-local.com").is_err());
        assert!(validate(Field::Email, "no-dot@domain").is_err());
        assert!(validate(Field::Email, "two@@x.co").is_err());
        assert!(validate(Field::Email, "spaced name@x.co").is_err());
        assert!(validate(Field::Email, "x@.com").is_err());
        assert!(validate(Field::Email, "x@host.").is_err());
    }

    #[test]
    fn topic_must_be_selected() {
        assert!(validate(Field::Topic, "").is_err());
        assert!(validate(Field::Topic, "booking").is_ok());
    }

    #[test]
    fn short_message_fails_and_longer_one_passes() {
        assert!(validate(Field::Message, "dix chars!").is_err());
        assert!(validate(Field::Message, "vingt-cinq caractères ici").is_ok());
    }

    #[test]
    fn revalidation_clears_immediately_once_input_is_fixed() {
        // Predicate purity: no blur or other ceremony needed, the same value
        // that failed passes as soon as it is long enough.
        assert!(validate(Field::Message, "trop court").is_err());
        assert!(validate(Field::Message, "trop court mais plus maintenant").is_ok());
    }

    #[test]
    fn validate_all_reports_every_failure_in_order() {
        let errors = validate_all(|f| match f {
            Field::Name => "X",
            Field::Email => "valid@mail.fr",
            Field::Topic => "",
            Field::Message => "court",
        });
        let fields: Vec<Field> = errors.iter().map(|(f, _)| *f).collect();
        assert_eq!(fields, vec![Field::Name, Field::Topic, Field::Message]);
    }
}
