//! Greeting message generator.

use crate::domain::{validate_name, ValidationError};
use rand::seq::SliceRandom;
use rand::Rng;

/// Greeting templates; `{name}` is replaced with the contact's name.
pub const GREETING_TEMPLATES: [&str; 5] = [
    "Good Morning, {name}! Have a great day.....!",
    "Hello {name}! Hope your day is fantastic!",
    "Good day, {name}",
    "Top of the morning {name}!",
    "Have a lovely day, {name} :)",
];

/// Pick a random greeting for `name`.
///
/// # Errors
///
/// Returns `ValidationError::InvalidName` if `name` is empty or whitespace-only.
pub fn generate_message(name: &str) -> Result<String, ValidationError> {
    generate_message_with(name, &mut rand::thread_rng())
}

/// Pick a greeting for `name` using the given random source.
pub fn generate_message_with<R>(name: &str, rng: &mut R) -> Result<String, ValidationError>
where
    R: Rng + ?Sized,
{
    validate_name(name)?;

    let template = GREETING_TEMPLATES
        .choose(rng)
        .copied()
        .unwrap_or(GREETING_TEMPLATES[0]);

    Ok(template.replace("{name}", name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_message_uses_a_template() {
        for _ in 0..20 {
            let message = generate_message("Giorgio").unwrap();
            assert!(GREETING_TEMPLATES
                .iter()
                .any(|t| t.replace("{name}", "Giorgio") == message));
        }
    }

    #[test]
    fn test_generate_message_is_deterministic_with_seed() {
        let a = generate_message_with("Ola", &mut StdRng::seed_from_u64(7)).unwrap();
        let b = generate_message_with("Ola", &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Ola"));
    }

    #[test]
    fn test_generate_message_rejects_blank_name() {
        assert_eq!(
            generate_message(""),
            Err(ValidationError::InvalidName(String::new()))
        );
        assert!(generate_message("   ").is_err());
    }
}
