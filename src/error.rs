pub type TraitforgeResult<T> = Result<T, TraitforgeError>;

#[derive(thiserror::Error, Debug)]
pub enum TraitforgeError {
    #[error("asset not found: {0}")]
    AssetNotFound(String),

    #[error("no options available: {0}")]
    NoOptionsAvailable(String),

    #[error("decode failure: {0}")]
    Decode(String),

    #[error("encode failure: {0}")]
    Encode(String),

    #[error("unsupported variant: {0}")]
    UnsupportedVariant(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TraitforgeError {
    pub fn asset_not_found(msg: impl Into<String>) -> Self {
        Self::AssetNotFound(msg.into())
    }

    pub fn no_options(msg: impl Into<String>) -> Self {
        Self::NoOptionsAvailable(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    pub fn unsupported_variant(msg: impl Into<String>) -> Self {
        Self::UnsupportedVariant(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_are_stable() {
        assert!(
            TraitforgeError::asset_not_found("x")
                .to_string()
                .contains("asset not found:")
        );
        assert!(
            TraitforgeError::no_options("x")
                .to_string()
                .contains("no options available:")
        );
        assert!(
            TraitforgeError::decode("x")
                .to_string()
                .contains("decode failure:")
        );
        assert!(
            TraitforgeError::encode("x")
                .to_string()
                .contains("encode failure:")
        );
        assert!(
            TraitforgeError::unsupported_variant("x")
                .to_string()
                .contains("unsupported variant:")
        );
    }

    #[test]
    fn other_preserves_source() {
        let base = std::io::Error::other("boom");
        let err = TraitforgeError::Other(anyhow::Error::new(base));
        assert!(err.to_string().contains("boom"));
    }
}
