use skillswap_types::SkillswapError;

/// Accept any non-empty address containing `@`
pub fn validate_email(email: &str) -> Result<(), SkillswapError> {
    if email.is_empty() || !email.contains('@') {
        return Err(SkillswapError::InvalidEmail(email.to_string()));
    }
    Ok(())
}
