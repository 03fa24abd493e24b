//! `var()` resolution against a flat token map
//!
//! Every `var(--name)` or `var(--name, fallback)` occurrence in a value is
//! replaced in place:
//!
//! - defined names resolve recursively to their own (resolved) value
//! - undefined names with a fallback resolve to the resolved fallback
//! - undefined names without a fallback are kept verbatim
//!
//! A reference that leads back into the chain currently being expanded
//! (`--a: var(--b); --b: var(--a);`) makes the whole resolution fail with
//! `None` instead of looping.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::css::CustomProperty;

/// Maximum number of nested references followed before giving up
const MAX_RESOLUTION_DEPTH: usize = 32;

/// Longest expansion produced before giving up (64 KiB)
const MAX_RESOLVED_LEN: usize = 64 * 1024;

/// Name -> raw value view of a property list
///
/// Later declarations of the same name replace earlier ones.
#[derive(Clone, Debug, Default)]
pub struct TokenMap {
    values: FxHashMap<String, String>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from parsed declarations (last declaration wins)
    pub fn from_properties(properties: &[CustomProperty]) -> Self {
        let mut map = Self::new();
        for prop in properties {
            if let Some(previous) = map.insert(prop.name.clone(), prop.value.clone()) {
                debug!(
                    name = %prop.name,
                    previous = %previous,
                    line = prop.line,
                    "token redeclared, last value wins"
                );
            }
        }
        map
    }

    /// Insert a token, returning the value it replaced
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Raw (unresolved) value of a token
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of distinct token names
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All token names, in no particular order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(|s| s.as_str())
    }

    /// Resolve `var()` references in a value; see [`resolve`]
    pub fn resolve(&self, value: &str) -> Option<String> {
        resolve(value, self)
    }

    /// Resolve the value of a named token
    pub fn resolve_token(&self, name: &str) -> Option<String> {
        self.get(name).and_then(|value| self.resolve(value))
    }
}

impl FromIterator<(String, String)> for TokenMap {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Resolve all `var()` references in `value`
///
/// Returns `None` when the references form a cycle, nest deeper than 32
/// levels, or expand past 64 KiB. Unknown references without a fallback are
/// left untouched.
///
/// ```
/// use lufa_theme::resolve::{resolve, TokenMap};
///
/// let mut tokens = TokenMap::new();
/// tokens.insert("--lufa-primitive-color-blue-700", "#1d4ed8");
/// tokens.insert("--lufa-core-color-brand", "var(--lufa-primitive-color-blue-700)");
///
/// assert_eq!(resolve("var(--lufa-core-color-brand)", &tokens).as_deref(), Some("#1d4ed8"));
/// assert_eq!(resolve("var(--missing, #fff)", &tokens).as_deref(), Some("#fff"));
/// assert_eq!(resolve("var(--missing)", &tokens).as_deref(), Some("var(--missing)"));
/// ```
pub fn resolve(value: &str, tokens: &TokenMap) -> Option<String> {
    Resolver::new(tokens).expand(value)
}

/// Outcome of looking up a single reference
enum Lookup {
    Resolved(String),
    Unresolved,
    Failed,
}

/// State of one `resolve` call
///
/// Tokens already expanded during the call are cached, so a name referenced
/// many times is expanded once.
struct Resolver<'a> {
    tokens: &'a TokenMap,
    chain: Vec<&'a str>,
    expanded: FxHashMap<&'a str, String>,
}

impl<'a> Resolver<'a> {
    fn new(tokens: &'a TokenMap) -> Self {
        Self {
            tokens,
            chain: Vec::new(),
            expanded: FxHashMap::default(),
        }
    }

    fn expand(&mut self, value: &'a str) -> Option<String> {
        if !value.contains("var(") {
            return Some(value.to_string());
        }

        let mut out = String::with_capacity(value.len());
        let mut rest = value;

        while let Some(start) = find_var_call(rest) {
            out.push_str(&rest[..start]);
            let call = &rest[start..];

            // Unbalanced `var(` - keep the remainder literally
            let Some(close) = matching_paren(call) else {
                out.push_str(call);
                return within_limit(out);
            };

            let (name, fallback) = split_var_args(&call[4..close]);
            match self.lookup(name, fallback) {
                Lookup::Resolved(resolved) => out.push_str(&resolved),
                Lookup::Unresolved => out.push_str(&call[..=close]),
                Lookup::Failed => return None,
            }
            if out.len() > MAX_RESOLVED_LEN {
                return within_limit(out);
            }
            rest = &call[close + 1..];
        }

        out.push_str(rest);
        within_limit(out)
    }

    fn lookup(&mut self, name: &'a str, fallback: Option<&'a str>) -> Lookup {
        if !name.starts_with("--") {
            return Lookup::Unresolved;
        }

        if self.chain.contains(&name) || self.chain.len() >= MAX_RESOLUTION_DEPTH {
            debug!(name, chain = ?self.chain, "circular var() reference");
            return Lookup::Failed;
        }

        if let Some(raw) = self.tokens.get(name) {
            if let Some(value) = self.expanded.get(name) {
                return Lookup::Resolved(value.clone());
            }
            self.chain.push(name);
            let resolved = self.expand(raw);
            self.chain.pop();
            return match resolved {
                Some(value) => {
                    self.expanded.insert(name, value.clone());
                    Lookup::Resolved(value)
                }
                None => Lookup::Failed,
            };
        }

        match fallback {
            Some(fallback) => match self.expand(fallback) {
                Some(value) => Lookup::Resolved(value),
                None => Lookup::Failed,
            },
            None => {
                debug!(name, "unresolved var() reference");
                Lookup::Unresolved
            }
        }
    }
}

fn within_limit(value: String) -> Option<String> {
    if value.len() > MAX_RESOLVED_LEN {
        debug!(len = value.len(), "resolved value too long");
        return None;
    }
    Some(value)
}

/// Byte offset of the next `var(` that is not part of a longer identifier
fn find_var_call(input: &str) -> Option<usize> {
    let mut search = 0;
    while let Some(rel) = input[search..].find("var(") {
        let idx = search + rel;
        let standalone = input[..idx]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '-' || c == '_'));
        if standalone {
            return Some(idx);
        }
        search = idx + 4;
    }
    None
}

/// Offset of the `)` closing the `(` at offset 3 of `call` (`var(`)
fn matching_paren(call: &str) -> Option<usize> {
    let mut depth = 0usize;
    for (i, c) in call.char_indices().skip(3) {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `--name, fallback` at the first top-level comma
fn split_var_args(args: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, c) in args.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return (args[..i].trim(), Some(args[i + 1..].trim())),
            _ => {}
        }
    }
    (args.trim(), None)
}
