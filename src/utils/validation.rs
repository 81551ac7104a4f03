use crate::utils::error::{OpsError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(OpsError::InvalidValue {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(OpsError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(OpsError::InvalidValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("name", "Ana").is_ok());
        assert!(validate_non_empty_string("name", "").is_err());
        assert!(validate_non_empty_string("name", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("sites_file", "data/relief_sites.txt").is_ok());
        assert!(validate_path("sites_file", "").is_err());
        assert!(validate_path("sites_file", "bad\0path").is_err());
    }
}
