//! The two forms the front-end submits: dish comments and contact feedback.
//!
//! Each form definition pairs its tracked fields with the hand-authored
//! message table the error map draws from. The `validate_*` helpers replay
//! a submitted payload through the form as edits, so every field ends up
//! dirty and the full error map is populated before the validity check.

use chrono::{SecondsFormat, Utc};

use crate::model::{Comment, Feedback};
use crate::validation::{ErrorMap, Form, MessageTable, Validator};

pub fn comment_form() -> Form {
    let messages = MessageTable::new()
        .with("author", "required", "Author is required.")
        .with("author", "minlength", "Author must be at least 2 characters long.")
        .with("author", "maxlength", "Author cannot be more than 25 characters long.")
        .with("comment", "required", "Comment is required.")
        .with("rating", "numeric", "Rating must be a number.")
        .with("rating", "range", "Rating must be between 1 and 5.");

    Form::new(messages)
        .field(
            "author",
            "",
            &[
                Validator::Required,
                Validator::MinLength(2),
                Validator::MaxLength(25),
            ],
        )
        .field("comment", "", &[Validator::Required])
        .field("rating", "5", &[Validator::Numeric, Validator::Range(1, 5)])
}

pub fn feedback_form() -> Form {
    let messages = MessageTable::new()
        .with("firstname", "required", "First name is required.")
        .with("firstname", "minlength", "First name must be at least 2 characters long.")
        .with("firstname", "maxlength", "First name cannot be more than 25 characters long.")
        .with("lastname", "required", "Last name is required.")
        .with("lastname", "minlength", "Last name must be at least 2 characters long.")
        .with("lastname", "maxlength", "Last name cannot be more than 25 characters long.")
        .with("telnum", "required", "Tel. number is required.")
        .with("telnum", "numeric", "Tel. number must contain only numbers.")
        .with("email", "required", "Email is required.")
        .with("email", "email", "Email not in valid format.");

    Form::new(messages)
        .field(
            "firstname",
            "",
            &[
                Validator::Required,
                Validator::MinLength(2),
                Validator::MaxLength(25),
            ],
        )
        .field(
            "lastname",
            "",
            &[
                Validator::Required,
                Validator::MinLength(2),
                Validator::MaxLength(25),
            ],
        )
        .field("telnum", "", &[Validator::Required, Validator::Numeric])
        .field("email", "", &[Validator::Required, Validator::Email])
        .field("message", "", &[])
}

/// Run a submitted comment through the form; on success the comment is
/// stamped with the current RFC 3339 time.
pub fn validate_comment(author: &str, comment: &str, rating: u8) -> Result<Comment, ErrorMap> {
    let mut form = comment_form();

    form.set_value("author", author);
    form.set_value("comment", comment);
    form.set_value("rating", &rating.to_string());

    if !form.is_valid() {
        return Err(form.errors().clone());
    }

    Ok(Comment {
        rating,
        comment: comment.to_string(),
        author: author.to_string(),
        date: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
    })
}

/// Run submitted contact details through the feedback form.
///
/// The `agree` checkbox and the contact type selector are untracked and
/// carry through unvalidated.
pub fn validate_feedback(feedback: Feedback) -> Result<Feedback, ErrorMap> {
    let mut form = feedback_form();

    form.set_value("firstname", &feedback.firstname);
    form.set_value("lastname", &feedback.lastname);
    form.set_value("telnum", &feedback.telnum);
    form.set_value("email", &feedback.email);
    form.set_value("message", &feedback.message);

    if !form.is_valid() {
        return Err(form.errors().clone());
    }

    Ok(feedback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feedback(firstname: &str, telnum: &str, email: &str) -> Feedback {
        Feedback {
            firstname: firstname.to_string(),
            lastname: "McVites".to_string(),
            telnum: telnum.to_string(),
            email: email.to_string(),
            agree: true,
            contacttype: "Email".to_string(),
            message: "Loved the Uthappizza.".to_string(),
        }
    }

    #[test]
    fn valid_comment_is_stamped_with_a_date() {
        let comment = validate_comment("Paul McVites", "Delicious!", 4).unwrap();

        assert_eq!(comment.author, "Paul McVites");
        assert_eq!(comment.rating, 4);
        assert!(comment.date.ends_with('Z'));
    }

    #[test]
    fn empty_comment_submission_reports_every_field() {
        let errors = validate_comment("", "", 3).unwrap_err();

        assert_eq!(errors["author"], "Author is required.");
        assert_eq!(errors["comment"], "Comment is required.");
        assert_eq!(errors["rating"], "");
    }

    #[test]
    fn short_author_collects_both_messages() {
        let errors = validate_comment(" ", "Fine.", 5).unwrap_err();

        assert_eq!(
            errors["author"],
            "Author is required. Author must be at least 2 characters long."
        );
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let errors = validate_comment("Ringo Starry", "Stars!", 9).unwrap_err();

        assert_eq!(errors["rating"], "Rating must be between 1 and 5.");
    }

    #[test]
    fn valid_feedback_passes_through() {
        let submitted = feedback("John", "5551234", "john@lemon.org");

        let accepted = validate_feedback(submitted.clone()).unwrap();

        assert_eq!(accepted, submitted);
    }

    #[test]
    fn lettered_telnum_and_bad_email_are_reported() {
        let errors = validate_feedback(feedback("John", "555-1234", "john")).unwrap_err();

        assert_eq!(errors["telnum"], "Tel. number must contain only numbers.");
        assert_eq!(errors["email"], "Email not in valid format.");
    }
}
