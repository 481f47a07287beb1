//! Form buffers for the client views
//!
//! Each form holds raw text input and turns it into a request body after
//! running the same `validator` rules the server applies, so most mistakes
//! are reported before anything is sent.

use uuid::Uuid;
use validator::Validate;

use crate::shared::error::collect_field_errors;
use crate::shared::{FieldError, LoginRequest, NewComment, NewPost, RegisterRequest};

const EMPTY_COMMENT: &str = "Comment cannot be empty";

fn check<T: Validate>(value: T) -> Result<T, Vec<FieldError>> {
    value
        .validate()
        .map_err(|errors| collect_field_errors(&errors))?;
    Ok(value)
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: Option<Uuid>,
    /// Server path of an uploaded image, set after a successful upload
    pub featured_image: Option<String>,
}

impl PostForm {
    pub fn submit(&self) -> Result<NewPost, Vec<FieldError>> {
        check(NewPost {
            title: self.title.trim().to_string(),
            content: self.content.clone(),
            category: self.category.map(|id| id.to_string()).unwrap_or_default(),
            featured_image: self.featured_image.as_deref().and_then(optional),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CommentForm {
    pub content: String,
}

impl CommentForm {
    pub fn submit(&self) -> Result<NewComment, Vec<FieldError>> {
        if self.content.trim().is_empty() {
            return Err(vec![FieldError::new("content", EMPTY_COMMENT)]);
        }
        check(NewComment {
            content: self.content.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        self.content.clear();
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn submit(&self) -> Result<LoginRequest, Vec<FieldError>> {
        check(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn submit(&self) -> Result<RegisterRequest, Vec<FieldError>> {
        let request = RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        let mut errors = match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_field_errors(&errors),
        };
        if self.password != self.confirm_password {
            errors.push(FieldError::new("confirmPassword", "Passwords do not match"));
        }
        if errors.is_empty() {
            Ok(request)
        } else {
            Err(errors)
        }
    }
}

/// First message reported for a field, for showing next to its input
pub fn message_for<'a>(errors: &'a [FieldError], field: &str) -> Option<&'a str> {
    errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_post_form() {
        let errors = PostForm::default().submit().unwrap_err();
        assert_eq!(message_for(&errors, "title"), Some("Title is required"));
        assert_eq!(message_for(&errors, "content"), Some("Content is required"));
        assert_eq!(message_for(&errors, "category"), Some("Valid category is required"));
    }

    #[test]
    fn test_post_form_submit() {
        let category = Uuid::new_v4();
        let form = PostForm {
            title: "  Hello  ".to_string(),
            content: "Body".to_string(),
            category: Some(category),
            featured_image: Some(" ".to_string()),
        };
        let post = form.submit().unwrap();
        assert_eq!(post.title, "Hello");
        assert_eq!(post.category, category.to_string());
        assert_eq!(post.featured_image, None);
    }

    #[test]
    fn test_post_form_long_title() {
        let form = PostForm {
            title: "x".repeat(101),
            content: "Body".to_string(),
            category: Some(Uuid::new_v4()),
            featured_image: None,
        };
        let errors = form.submit().unwrap_err();
        assert_eq!(
            message_for(&errors, "title"),
            Some("Title cannot exceed 100 characters")
        );
    }

    #[test]
    fn test_blank_comment() {
        let errors = CommentForm {
            content: "   ".to_string(),
        }
        .submit()
        .unwrap_err();
        assert_eq!(errors, vec![FieldError::new("content", "Comment cannot be empty")]);
    }

    #[test]
    fn test_comment_trimmed() {
        let comment = CommentForm {
            content: " Nice post ".to_string(),
        }
        .submit()
        .unwrap();
        assert_eq!(comment.content, "Nice post");
    }

    #[test]
    fn test_register_password_mismatch() {
        let form = RegisterForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "password123".to_string(),
            confirm_password: "password124".to_string(),
        };
        let errors = form.submit().unwrap_err();
        assert_eq!(message_for(&errors, "confirmPassword"), Some("Passwords do not match"));
    }

    #[test]
    fn test_register_short_password() {
        let form = RegisterForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "short".to_string(),
            confirm_password: "short".to_string(),
        };
        let errors = form.submit().unwrap_err();
        assert_eq!(
            message_for(&errors, "password"),
            Some("Password must be at least 8 characters")
        );
    }

    #[test]
    fn test_login_form() {
        let request = LoginForm {
            email: " ada@example.com ".to_string(),
            password: "password123".to_string(),
        }
        .submit()
        .unwrap();
        assert_eq!(request.email, "ada@example.com");
    }
}
