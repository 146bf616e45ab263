//! Shared CSS fixtures for integration tests.

/// Minimal single-rule stylesheet
pub const BASE_CSS: &str = "a { color: red; }\n";

/// Minified form of `BASE_CSS`
pub const BASE_CSS_MIN: &str = "a{color:red}";

/// Stylesheet with a block comment
pub const COMMENTED_CSS: &str = "/* comment */ b { margin: 0; }\n";

/// Minified form of `COMMENTED_CSS`
pub const COMMENTED_CSS_MIN: &str = "b{margin:0}";

/// Manifest importing base.css then theme.css
pub const MANIFEST_TWO_IMPORTS: &str =
    "@import url('base.css');\n@import url('theme.css');\n";

/// Manifest mixing directives with lines the resolver must ignore
pub const MANIFEST_WITH_NOISE: &str = "/* bundle manifest */\n\n@import url('base.css');\nbody { background: #fff; }\n@import \"no-url-token.css\";\n";
