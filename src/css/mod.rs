pub mod tokens;

pub use tokens::{extract_tokens, unique_limited, DesignTokens, TOKEN_LIMIT};
