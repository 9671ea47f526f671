//! Query File expansion: user arguments in, target string out.
//!
//! Two placeholder forms exist. `${1}`, `${2}`, … take one argument each
//! (multi-slot); otherwise every `${}` receives all arguments joined by a
//! space and form-encoded (single-slot). Either way a [`Transform`] may rewrite
//! the arguments first.

use regex::{Captures, RegexBuilder};
use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::error::{Result, VaunchError};

/// Sentinel argument asking for the result to open in a new context.
pub const BLANK: &str = "_blank";

/// A `/pattern/flags` find-and-replace rule applied to query arguments.
///
/// Serialized as a two-element array `[expression, replacement]`; `null`
/// entries read back as empty strings.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(from = "(Option<String>, Option<String>)", into = "(String, String)")]
pub struct Transform {
    pub expression: String,
    pub replacement: String,
}

impl From<(Option<String>, Option<String>)> for Transform {
    fn from((expression, replacement): (Option<String>, Option<String>)) -> Self {
        Self {
            expression: expression.unwrap_or_default(),
            replacement: replacement.unwrap_or_default(),
        }
    }
}

impl From<Transform> for (String, String) {
    fn from(t: Transform) -> Self {
        (t.expression, t.replacement)
    }
}

impl Transform {
    pub fn new(expression: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
            replacement: replacement.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.expression.is_empty()
    }

    /// Applies the rule to `input`. An empty expression leaves it untouched.
    ///
    /// Only the first match is replaced unless the flags contain `g`.
    pub fn apply(&self, input: &str) -> Result<String> {
        if self.is_empty() {
            return Ok(input.to_string());
        }

        let mut parts = self.expression.split('/');
        let _leading = parts.next();
        let pattern = parts.next().ok_or_else(|| {
            VaunchError::InvalidArgument(format!(
                "Invalid expression '{}': expected /pattern/flags",
                self.expression
            ))
        })?;
        let flags = parts.next().unwrap_or("");

        let mut builder = RegexBuilder::new(pattern);
        let mut global = false;
        for flag in flags.chars() {
            match flag {
                'g' => global = true,
                'i' => {
                    builder.case_insensitive(true);
                }
                'm' => {
                    builder.multi_line(true);
                }
                's' => {
                    builder.dot_matches_new_line(true);
                }
                'u' | 'y' | 'd' => {}
                other => {
                    return Err(VaunchError::InvalidArgument(format!(
                        "Invalid flag '{}' in expression '{}'",
                        other, self.expression
                    )))
                }
            }
        }
        let regex = builder.build().map_err(|e| {
            VaunchError::InvalidArgument(format!(
                "Invalid expression '{}': {}",
                self.expression, e
            ))
        })?;

        let replacer = |caps: &Captures<'_>| substitute(caps, input, &self.replacement);
        let replaced = if global {
            regex.replace_all(input, replacer)
        } else {
            regex.replace(input, replacer)
        };
        Ok(replaced.into_owned())
    }
}

/// Expands one match of `replacement` using the `String.prototype.replace`
/// tokens stored rules are written with: `$$`, `$&`, `` $` ``, `$'` and
/// `$n`/`$nn`. Anything else after a `$` is literal.
fn substitute(caps: &Captures<'_>, input: &str, replacement: &str) -> String {
    let (start, end) = caps.get(0).map_or((0, 0), |m| (m.start(), m.end()));
    let groups = caps.len() - 1;
    let group = |n: usize| caps.get(n).map_or("", |m| m.as_str());

    let mut out = String::with_capacity(replacement.len());
    let mut rest = replacement;
    while let Some(dollar) = rest.find('$') {
        out.push_str(&rest[..dollar]);
        let after = &rest[dollar + 1..];
        let mut chars = after.chars();
        let consumed = match chars.next() {
            Some('$') => {
                out.push('$');
                1
            }
            Some('&') => {
                out.push_str(&input[start..end]);
                1
            }
            Some('`') => {
                out.push_str(&input[..start]);
                1
            }
            Some('\'') => {
                out.push_str(&input[end..]);
                1
            }
            Some(first) if first.is_ascii_digit() => {
                let first = first as usize - '0' as usize;
                let two = chars
                    .next()
                    .and_then(|c| c.to_digit(10))
                    .map(|second| first * 10 + second as usize)
                    .filter(|&n| (1..=groups).contains(&n));
                match two {
                    Some(n) => {
                        out.push_str(group(n));
                        2
                    }
                    None if (1..=groups).contains(&first) => {
                        out.push_str(group(first));
                        1
                    }
                    None => {
                        out.push('$');
                        0
                    }
                }
            }
            _ => {
                out.push('$');
                0
            }
        };
        rest = &after[consumed..];
    }
    out.push_str(rest);
    out
}

/// What expanding a query produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expansion {
    /// No usable arguments: hand the invocation prefix back to the input box.
    Prompt(String),
    /// A fully substituted target, not yet checked for URL validity.
    Target { location: String, new_context: bool },
}

/// Form-encodes `input` for a query string: spaces become `+`, and the marks
/// `encodeURIComponent` leaves alone (`!'()~`) stay literal.
pub fn encode_query(input: &str) -> String {
    form_urlencoded::byte_serialize(input.as_bytes())
        .map(|chunk| match chunk {
            "%21" => "!",
            "%27" => "'",
            "%28" => "(",
            "%29" => ")",
            "%7E" => "~",
            other => other,
        })
        .collect()
}

/// Expands `content` with `args`.
pub fn expand(
    content: &str,
    prefix: &str,
    transform: &Transform,
    args: &[String],
) -> Result<Expansion> {
    match args.first().map(String::as_str) {
        None | Some(BLANK) | Some("") => {
            return Ok(Expansion::Prompt(format!("{}: ", prefix)));
        }
        _ => {}
    }

    let mut args = args;
    let mut new_context = false;
    if let Some((last, rest)) = args.split_last() {
        if last == BLANK {
            new_context = true;
            args = rest;
        }
    }

    let location = if content.contains("${1}") {
        let mut location = content.to_string();
        for (i, arg) in args.iter().enumerate() {
            let arg = transform.apply(arg)?;
            location = location.replacen(&format!("${{{}}}", i + 1), &arg, 1);
        }
        location
    } else {
        let combined = transform.apply(&args.join(" "))?;
        content.replace("${}", &encode_query(&combined))
    };

    Ok(Expansion::Target {
        location,
        new_context,
    })
}
