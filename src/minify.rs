//! Lexical CSS minifier
//!
//! Purely textual substitution with no CSS grammar: comment delimiters or
//! punctuation inside string literals and `url()` values are not
//! distinguished from the real thing. The pass order is fixed; later
//! passes assume comments are already gone and whitespace is collapsed.

use once_cell::sync::Lazy;
use regex::Regex;

/// `/* ... */` spans, non-greedy, across newlines
static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)/\*.*?\*/").expect("comment pattern"));

/// Maximal runs of whitespace, including newlines
static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern"));

/// Whitespace hugging structural punctuation
static AROUND_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([{}:;,])\s*").expect("punctuation pattern"));

/// Minify a blob of CSS text.
///
/// Strips block comments, collapses whitespace runs to single spaces,
/// removes whitespace around `{` `}` `:` `;` `,`, drops semicolons that
/// immediately precede a closing brace, and trims the result. Empty input
/// yields an empty string.
pub fn minify(css: &str) -> String {
    let css = COMMENT.replace_all(css, "");
    let css = WHITESPACE.replace_all(&css, " ");
    let css = AROUND_PUNCT.replace_all(&css, "$1");
    let css = css.replace(";}", "}");
    css.trim().to_string()
}
