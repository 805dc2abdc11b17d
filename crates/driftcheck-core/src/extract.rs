//! Best-effort lexical extraction of embedded program IDs.
//!
//! These rules are not parsers. Each one matches the narrow literal shape a
//! program ID actually takes in its artifact class and nothing more; if the
//! surrounding code is reformatted beyond quote/whitespace variation, the
//! rule reports NotFound rather than guessing. When a shape could match more
//! than once in a file, the first occurrence by text position wins.

use regex::Regex;

/// Result of running one search rule against raw artifact text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionResult {
    Found(String),
    NotFound,
}

/// How to locate an embedded program ID in one artifact class.
///
/// Each variant carries its compiled pattern; construction escapes the
/// caller-supplied token so the surrounding shape stays fixed.
#[derive(Debug, Clone)]
pub enum SearchRule {
    /// `<key>: new PublicKey('<id>')` — a renamed key in a typed constants
    /// object (e.g. canonical `human_registry` appears as `humanRegistry`).
    TypedConstant { key: String, pattern: Regex },

    /// `<CONST> = new PublicKey('<id>')` — a named constant assignment in
    /// service source.
    NamedConstant { name: String, pattern: Regex },

    /// `declare_id!("<id>")` — the on-chain program's own declaration.
    /// Double quotes only; whitespace inside the parentheses is tolerated.
    DeclareId { pattern: Regex },
}

impl SearchRule {
    pub fn typed_constant(key: &str) -> Self {
        let pattern = format!(
            r#"{}\s*:\s*new\s+PublicKey\s*\(\s*['"]([^'"]+)['"]\s*\)"#,
            regex::escape(key)
        );
        Self::TypedConstant {
            key: key.to_string(),
            pattern: Regex::new(&pattern).expect("regex: typed constant"),
        }
    }

    pub fn named_constant(name: &str) -> Self {
        let pattern = format!(
            r#"{}\s*=\s*new\s+PublicKey\s*\(\s*['"]([^'"]+)['"]\s*\)"#,
            regex::escape(name)
        );
        Self::NamedConstant {
            name: name.to_string(),
            pattern: Regex::new(&pattern).expect("regex: named constant"),
        }
    }

    pub fn declare_id() -> Self {
        Self::DeclareId {
            pattern: Regex::new(r#"declare_id!\(\s*"([^"]+)"\s*\)"#).expect("regex: declare_id"),
        }
    }

    /// Extract the first embedded ID matching this rule.
    ///
    /// Pure function of (text, rule): no match is a reportable NotFound,
    /// never an error.
    pub fn extract(&self, text: &str) -> ExtractionResult {
        let pattern = match self {
            Self::TypedConstant { pattern, .. }
            | Self::NamedConstant { pattern, .. }
            | Self::DeclareId { pattern } => pattern,
        };
        match pattern.captures(text).and_then(|caps| caps.get(1)) {
            Some(id) => ExtractionResult::Found(id.as_str().to_string()),
            None => ExtractionResult::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typed_constant_single_quotes() {
        let rule = SearchRule::typed_constant("humanRegistry");
        let text = "humanRegistry: new PublicKey('GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo'),";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo".to_string())
        );
    }

    #[test]
    fn test_typed_constant_double_quotes_and_whitespace() {
        let rule = SearchRule::typed_constant("agentRegistry");
        let text = "agentRegistry :  new   PublicKey ( \"GLrs6qS2LLwKXZZuZXLFCaVyxkjBovbS2hM9PA4ezdhQ\" )";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("GLrs6qS2LLwKXZZuZXLFCaVyxkjBovbS2hM9PA4ezdhQ".to_string())
        );
    }

    #[test]
    fn test_typed_constant_multiline_call() {
        // Prettier wraps long constructor calls; the ID lands on its own line.
        let rule = SearchRule::typed_constant("humanRegistry");
        let text = "humanRegistry: new PublicKey(\n  'GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo'\n),";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo".to_string())
        );
    }

    #[test]
    fn test_typed_constant_does_not_match_other_key() {
        let rule = SearchRule::typed_constant("humanRegistry");
        let text = "agentRegistry: new PublicKey('GLrs6qS2LLwKXZZuZXLFCaVyxkjBovbS2hM9PA4ezdhQ')";
        assert_eq!(rule.extract(text), ExtractionResult::NotFound);
    }

    #[test]
    fn test_named_constant() {
        let rule = SearchRule::named_constant("HUMAN_REGISTRY_PROGRAM_ID");
        let text = "const HUMAN_REGISTRY_PROGRAM_ID = new PublicKey('GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo');";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("GB35h1zNh8WK5c72yVXu6gk6U7eUMFiTTymrXk2dfHHo".to_string())
        );
    }

    #[test]
    fn test_declare_id() {
        let rule = SearchRule::declare_id();
        let text = "use anchor_lang::prelude::*;\n\ndeclare_id!(\"HReg1111111111111111111111111111111111111111\");\n";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("HReg1111111111111111111111111111111111111111".to_string())
        );
    }

    #[test]
    fn test_declare_id_inner_whitespace() {
        let rule = SearchRule::declare_id();
        let text = "declare_id!( \"HReg1111111111111111111111111111111111111111\" );";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("HReg1111111111111111111111111111111111111111".to_string())
        );
    }

    #[test]
    fn test_declare_id_rejects_single_quotes() {
        let rule = SearchRule::declare_id();
        assert_eq!(
            rule.extract("declare_id!('NotRustSyntax111')"),
            ExtractionResult::NotFound
        );
    }

    #[test]
    fn test_first_match_wins() {
        let rule = SearchRule::declare_id();
        let text = "declare_id!(\"First111\");\ndeclare_id!(\"Second222\");";
        assert_eq!(
            rule.extract(text),
            ExtractionResult::Found("First111".to_string())
        );
    }

    #[test]
    fn test_no_match_is_not_found() {
        let rule = SearchRule::typed_constant("humanRegistry");
        assert_eq!(rule.extract(""), ExtractionResult::NotFound);
        assert_eq!(
            rule.extract("humanRegistry: somethingElse('abc')"),
            ExtractionResult::NotFound
        );
    }
}
