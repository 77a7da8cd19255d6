use super::{required, FormState};
use crate::error::FormError;

/// Any email and password are accepted; both just have to be filled in
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl FormState for LoginForm {
    /// The username to sign in as
    type Output = String;

    fn validate(&self) -> Result<String, FormError> {
        let email = required(&self.email, "Email")?;
        required(&self.password, "Password")?;
        Ok(email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::submit;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_any_credentials_are_accepted() {
        let mut form = LoginForm {
            email: " manager@dsp-example.com ".into(),
            password: "anything".into(),
        };
        let mut signed_in = Vec::new();

        submit(&mut form, |email| signed_in.push(email)).unwrap();

        assert_eq!(signed_in, vec!["manager@dsp-example.com".to_string()]);
        assert_eq!(form, LoginForm::default());
    }

    #[test]
    fn test_password_must_be_filled() {
        let form = LoginForm {
            email: "manager@dsp-example.com".into(),
            password: String::new(),
        };
        assert_eq!(form.validate(), Err(FormError::MissingField("Password")));
    }
}
