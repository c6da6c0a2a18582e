//! IRI reference resolution (RFC 3986 section 5)
//!
//! Readers resolve relative references against the document base: an explicit
//! `@base` / `xml:base`, or the source identifier the document was loaded from.

/// True if `s` starts with a URI scheme (`scheme:`).
pub fn is_absolute(s: &str) -> bool {
    match s.find(':') {
        Some(pos) => {
            let scheme = &s[..pos];
            let mut chars = scheme.chars();
            matches!(chars.next(), Some(c) if c.is_ascii_alphabetic())
                && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        None => false,
    }
}

/// Resolve `reference` against `base`.
///
/// Absolute references are returned unchanged. Returns `None` when the
/// reference is relative and `base` is not an absolute IRI.
///
/// ```
/// use fluree_graph_ir::iri::resolve;
///
/// let base = "http://www.example.com/joe/foaf.rdf";
/// assert_eq!(resolve(base, "#me").as_deref(), Some("http://www.example.com/joe/foaf.rdf#me"));
/// assert_eq!(resolve(base, "../jane/").as_deref(), Some("http://www.example.com/jane/"));
/// ```
pub fn resolve(base: &str, reference: &str) -> Option<String> {
    if is_absolute(reference) {
        return Some(reference.to_string());
    }
    if !is_absolute(base) {
        return None;
    }

    let base = Components::parse(base);
    let reference = Components::parse_relative(reference);

    let (authority, path, query) = if let Some(authority) = reference.authority {
        (
            Some(authority),
            remove_dot_segments(reference.path),
            reference.query,
        )
    } else if reference.path.is_empty() {
        (
            base.authority,
            base.path.to_string(),
            reference.query.or(base.query),
        )
    } else if reference.path.starts_with('/') {
        (
            base.authority,
            remove_dot_segments(reference.path),
            reference.query,
        )
    } else {
        let merged = if base.authority.is_some() && base.path.is_empty() {
            format!("/{}", reference.path)
        } else {
            let dir = match base.path.rfind('/') {
                Some(pos) => &base.path[..=pos],
                None => "",
            };
            format!("{}{}", dir, reference.path)
        };
        (base.authority, remove_dot_segments(&merged), reference.query)
    };

    let mut result = String::with_capacity(base.scheme.len() + path.len() + 16);
    result.push_str(base.scheme);
    result.push(':');
    if let Some(auth) = authority {
        result.push_str("//");
        result.push_str(auth);
    }
    result.push_str(&path);
    if let Some(q) = query {
        result.push('?');
        result.push_str(q);
    }
    if let Some(f) = reference.fragment {
        result.push('#');
        result.push_str(f);
    }
    Some(result)
}

/// Parsed IRI components borrowed from the source string
struct Components<'a> {
    scheme: &'a str,
    authority: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    fn parse(iri: &'a str) -> Self {
        let (scheme, rest) = match iri.find(':') {
            Some(pos) => (&iri[..pos], &iri[pos + 1..]),
            None => ("", iri),
        };
        Components {
            scheme,
            ..Self::parse_relative(rest)
        }
    }

    fn parse_relative(s: &'a str) -> Self {
        let (s, fragment) = match s.find('#') {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };
        let (s, query) = match s.find('?') {
            Some(pos) => (&s[..pos], Some(&s[pos + 1..])),
            None => (s, None),
        };
        let (authority, path) = match s.strip_prefix("//") {
            Some(rest) => {
                let end = rest.find('/').unwrap_or(rest.len());
                (Some(&rest[..end]), &rest[end..])
            }
            None => (None, s),
        };
        Components {
            scheme: "",
            authority,
            path,
            query,
            fragment,
        }
    }
}

/// Remove dot segments from a path (RFC 3986 section 5.2.4).
fn remove_dot_segments(path: &str) -> String {
    let mut output: Vec<&str> = Vec::new();
    let segments: Vec<&str> = path.split('/').collect();
    let last = segments.len().saturating_sub(1);

    for (i, segment) in segments.iter().enumerate() {
        match *segment {
            "." | ".." => {
                if *segment == ".." && output.len() > 1 {
                    output.pop();
                }
                // a trailing dot segment leaves a directory path
                if i == last {
                    output.push("");
                }
            }
            s => output.push(s),
        }
    }

    let result = output.join("/");
    if path.starts_with('/') && !result.starts_with('/') {
        format!("/{}", result)
    } else {
        result
    }
}
