// A single field-level failure reported by the validation pipeline.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: &'static str,
}

// One declarative constraint on a payload: the field name, the configured
// violation message, how to read the value, and the check applied to it.
pub struct FieldRule<T> {
    field: &'static str,
    message: &'static str,
    value: fn(&T) -> &str,
    check: fn(&str) -> bool,
}

impl<T> FieldRule<T> {
    // Rule rejecting blank or whitespace-only values.
    pub fn not_blank(field: &'static str, message: &'static str, value: fn(&T) -> &str) -> Self {
        Self {
            field,
            message,
            value,
            check: |v| !v.trim().is_empty(),
        }
    }

    // Rule rejecting values that do not look like an email address. The empty
    // string fails this rule too, so a blank email reports both violations.
    pub fn email(field: &'static str, message: &'static str, value: fn(&T) -> &str) -> Self {
        Self {
            field,
            message,
            value,
            check: is_email_like,
        }
    }
}

// Ordered rule pipeline for one payload type. Every rule runs; violations come
// back in declaration order so the failure envelope lists them
// deterministically.
pub struct Validator<T> {
    rules: Vec<FieldRule<T>>,
}

impl<T> Validator<T> {
    pub fn new(rules: Vec<FieldRule<T>>) -> Self {
        Self { rules }
    }

    pub fn validate(&self, subject: &T) -> Result<(), Vec<FieldViolation>> {
        let violations: Vec<FieldViolation> = self
            .rules
            .iter()
            .filter(|rule| !(rule.check)((rule.value)(subject)))
            .map(|rule| FieldViolation {
                field: rule.field,
                message: rule.message,
            })
            .collect();

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// Shape check: exactly one '@', non-empty local part, no whitespace, and a
// dotted domain.
fn is_email_like(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Signup {
        email: String,
        name: String,
    }

    fn signup_rules() -> Validator<Signup> {
        Validator::new(vec![
            FieldRule::not_blank("email", "Email cannot be empty", |s| s.email.as_str()),
            FieldRule::email("email", "Invalid email address format", |s| s.email.as_str()),
            FieldRule::not_blank("name", "Name cannot be empty", |s| s.name.as_str()),
        ])
    }

    #[test]
    fn when_every_field_is_valid_then_validate_returns_ok() {
        let subject = Signup {
            email: "pilot@example.com".to_string(),
            name: "Pilot".to_string(),
        };

        assert!(signup_rules().validate(&subject).is_ok());
    }

    #[test]
    fn when_every_field_is_blank_then_all_rules_report_in_declaration_order() {
        let subject = Signup {
            email: String::new(),
            name: String::new(),
        };

        let violations = signup_rules()
            .validate(&subject)
            .expect_err("expected blank payload to fail validation");

        assert_eq!(
            violations,
            vec![
                FieldViolation {
                    field: "email",
                    message: "Email cannot be empty",
                },
                FieldViolation {
                    field: "email",
                    message: "Invalid email address format",
                },
                FieldViolation {
                    field: "name",
                    message: "Name cannot be empty",
                },
            ]
        );
    }

    #[test]
    fn when_only_one_field_is_invalid_then_only_that_rule_reports() {
        let subject = Signup {
            email: "pilot@example.com".to_string(),
            name: "   ".to_string(),
        };

        let violations = signup_rules()
            .validate(&subject)
            .expect_err("expected whitespace-only name to fail validation");

        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].message, "Name cannot be empty");
    }

    #[test]
    fn when_email_domain_has_no_dot_then_format_rule_reports() {
        let subject = Signup {
            email: "pilot@example".to_string(),
            name: "Pilot".to_string(),
        };

        let violations = signup_rules()
            .validate(&subject)
            .expect_err("expected undotted domain to fail validation");

        assert_eq!(
            violations,
            vec![FieldViolation {
                field: "email",
                message: "Invalid email address format",
            }]
        );
    }

    #[test]
    fn when_email_shapes_vary_then_the_shape_check_matches_expectations() {
        let accepted = [
            "anna@customer.test",
            "a@b.co",
            "first.last+tag@sub.example.org",
        ];
        for value in accepted {
            assert!(is_email_like(value), "expected {value} to be accepted");
        }

        let rejected = [
            "",
            "plainaddress",
            "@example.com",
            "user@",
            "user@@example.com",
            "user@example",
            "user@.example.com",
            "user@example.com.",
            "user name@example.com",
        ];
        for value in rejected {
            assert!(!is_email_like(value), "expected {value} to be rejected");
        }
    }
}
