//! Client-side route table and resolver for the Quiz Master application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The `client` crate asks this crate which view to mount for the current
//! browser location, and how to spell the path of a view when it links to
//! one. The crate is pure: no I/O, no UI types, and the application table is
//! immutable once built.
//!
//! MATCHING
//! ========
//! Entries are tried in declaration order and the first structural match
//! wins. Literal segments compare exactly; a `:name` segment matches one
//! non-empty segment and captures it. Query strings, fragments, trailing
//! slashes and doubled slashes do not affect matching.

mod table;
mod view;

#[cfg(test)]
#[path = "lib_test.rs"]
mod lib_test;

use std::collections::BTreeMap;

pub use table::{app_routes, declare_app_routes};
pub use view::{Area, ViewId};

/// Path parameters extracted from, or substituted into, a route pattern.
pub type Params = BTreeMap<String, String>;

/// Path of the redirecting root entry.
pub const ROOT_PATH: &str = "/";
/// Where the root path sends the browser.
pub const LOGIN_PATH: &str = "/login";
/// Name of the dynamic segment in the quiz-attempt pattern.
pub const QUIZ_ID_PARAM: &str = "id";

/// Error returned by table construction, [`RouteTable::resolve`] and
/// [`RouteTable::build_path`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// The path matches no entry in the table.
    #[error("no route matches path: {path}")]
    NoMatchingRoute { path: String },
    /// The view is not bound by any entry.
    #[error("view is not registered: {0}")]
    UnknownView(ViewId),
    /// A dynamic segment has no (or an empty) value.
    #[error("missing value for parameter `{param}` of view {view}")]
    MissingParam { view: ViewId, param: &'static str },
    /// A parameter value would not survive as a single path segment.
    #[error("value {value:?} for parameter `{param}` of view {view} is not a valid path segment")]
    InvalidParam {
        view: ViewId,
        param: &'static str,
        value: String,
    },
    /// The pattern text is malformed (no leading `/`, or an unnamed `:`).
    #[error("invalid route pattern: {pattern}")]
    InvalidPattern { pattern: &'static str },
    /// The pattern declares more than one dynamic segment.
    #[error("route pattern {pattern} has more than one dynamic segment")]
    MultipleParams { pattern: &'static str },
    /// Two patterns match the same set of paths.
    #[error("route pattern {pattern} overlaps {existing}")]
    DuplicatePattern {
        pattern: &'static str,
        existing: &'static str,
    },
    /// The view is bound by more than one entry.
    #[error("view {0} is bound by more than one route")]
    DuplicateView(ViewId),
}

/// One segment of a route pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Segment {
    Literal(&'static str),
    Param(&'static str),
}

/// What a matching entry does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    View(ViewId),
    Redirect(&'static str),
}

/// Outcome of resolving a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolved {
    /// Mount `view`, with the parameters captured from the path.
    View { view: ViewId, params: Params },
    /// Navigate again, to this path.
    Redirect(&'static str),
}

/// A single route declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pattern: &'static str,
    segments: Vec<Segment>,
    target: Target,
    props_from_params: bool,
}

impl RouteEntry {
    /// Bind `pattern` to a view. Captured parameters are not forwarded to the
    /// view unless [`RouteEntry::with_props`] is applied.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::InvalidPattern`] or [`RouteError::MultipleParams`]
    /// when the pattern text is malformed.
    pub fn view(pattern: &'static str, view: ViewId) -> Result<Self, RouteError> {
        Self::new(pattern, Target::View(view))
    }

    /// Make `pattern` an unconditional redirect to `to`.
    ///
    /// # Errors
    ///
    /// Same as [`RouteEntry::view`].
    pub fn redirect(pattern: &'static str, to: &'static str) -> Result<Self, RouteError> {
        Self::new(pattern, Target::Redirect(to))
    }

    /// Forward captured path parameters to the view as inputs.
    #[must_use]
    pub fn with_props(mut self) -> Self {
        self.props_from_params = true;
        self
    }

    fn new(pattern: &'static str, target: Target) -> Result<Self, RouteError> {
        let segments = parse_pattern(pattern)?;
        Ok(Self {
            pattern,
            segments,
            target,
            props_from_params: false,
        })
    }

    /// Pattern text as declared, e.g. `/user/quiz/:id/attempt`.
    #[must_use]
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn target(&self) -> Target {
        self.target
    }

    #[must_use]
    pub fn props_from_params(&self) -> bool {
        self.props_from_params
    }

    /// Name of the dynamic segment, if the pattern has one.
    #[must_use]
    pub fn param_name(&self) -> Option<&'static str> {
        self.segments.iter().find_map(|segment| match segment {
            Segment::Param(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Match already-split path segments, returning captured params.
    fn capture(&self, parts: &[&str]) -> Option<Params> {
        if parts.len() != self.segments.len() {
            return None;
        }
        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(text) => {
                    if text != part {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    params.insert((*name).to_owned(), (*part).to_owned());
                }
            }
        }
        Some(params)
    }

    /// Two entries overlap when every segment position could match the same
    /// text: a parameter overlaps anything.
    fn overlaps(&self, other: &Self) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .zip(&other.segments)
                .all(|pair| match pair {
                    (Segment::Literal(a), Segment::Literal(b)) => a == b,
                    _ => true,
                })
    }
}

/// Ordered, validated set of route entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Validate and freeze a list of entries.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicatePattern`] when two patterns could match
    /// the same path, and [`RouteError::DuplicateView`] when a view is bound
    /// twice.
    pub fn new(entries: Vec<RouteEntry>) -> Result<Self, RouteError> {
        for (index, entry) in entries.iter().enumerate() {
            for earlier in &entries[..index] {
                if entry.overlaps(earlier) {
                    return Err(RouteError::DuplicatePattern {
                        pattern: entry.pattern,
                        existing: earlier.pattern,
                    });
                }
                if let (Target::View(a), Target::View(b)) = (entry.target, earlier.target) {
                    if a == b {
                        return Err(RouteError::DuplicateView(a));
                    }
                }
            }
        }
        Ok(Self { entries })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    /// Entry bound to `view`, if any.
    #[must_use]
    pub fn entry_for(&self, view: ViewId) -> Option<&RouteEntry> {
        self.entries
            .iter()
            .find(|entry| entry.target == Target::View(view))
    }

    /// Resolve a navigation target to a view or a redirect.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NoMatchingRoute`] when no entry matches.
    pub fn resolve(&self, target_path: &str) -> Result<Resolved, RouteError> {
        let parts = split_path(target_path);
        self.entries
            .iter()
            .find_map(|entry| {
                entry.capture(&parts).map(|params| match entry.target {
                    Target::View(view) => Resolved::View { view, params },
                    Target::Redirect(to) => Resolved::Redirect(to),
                })
            })
            .ok_or_else(|| RouteError::NoMatchingRoute {
                path: target_path.to_owned(),
            })
    }

    /// Spell the path of `view`, substituting `params` into its dynamic
    /// segment. Params the pattern does not name are ignored.
    ///
    /// # Errors
    ///
    /// - [`RouteError::UnknownView`] when no entry binds `view`.
    /// - [`RouteError::MissingParam`] when a dynamic segment has no value.
    /// - [`RouteError::InvalidParam`] when a value is `.`, `..`, or holds a
    ///   character outside the unreserved URL set (`A-Z a-z 0-9 - . _ ~`).
    pub fn build_path(&self, view: ViewId, params: &Params) -> Result<String, RouteError> {
        let entry = self.entry_for(view).ok_or(RouteError::UnknownView(view))?;
        let mut path = String::new();
        for segment in &entry.segments {
            path.push('/');
            match *segment {
                Segment::Literal(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params
                        .get(param)
                        .filter(|value| !value.is_empty())
                        .ok_or(RouteError::MissingParam { view, param })?;
                    if !is_plain_segment(value) {
                        return Err(RouteError::InvalidParam {
                            view,
                            param,
                            value: value.clone(),
                        });
                    }
                    path.push_str(value);
                }
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Path of a view with no dynamic segment.
    ///
    /// # Errors
    ///
    /// Same as [`RouteTable::build_path`] with an empty parameter set.
    pub fn path_of(&self, view: ViewId) -> Result<String, RouteError> {
        self.build_path(view, &Params::new())
    }
}

/// Build the parameter set for the quiz-attempt route.
#[must_use]
pub fn quiz_params(quiz_id: impl Into<String>) -> Params {
    Params::from([(QUIZ_ID_PARAM.to_owned(), quiz_id.into())])
}

fn parse_pattern(pattern: &'static str) -> Result<Vec<Segment>, RouteError> {
    let Some(rest) = pattern.strip_prefix('/') else {
        return Err(RouteError::InvalidPattern { pattern });
    };
    let mut segments = Vec::new();
    for part in rest.split('/').filter(|part| !part.is_empty()) {
        match part.strip_prefix(':') {
            Some("") => return Err(RouteError::InvalidPattern { pattern }),
            Some(name) => {
                if segments.iter().any(|s| matches!(s, Segment::Param(_))) {
                    return Err(RouteError::MultipleParams { pattern });
                }
                segments.push(Segment::Param(name));
            }
            None => segments.push(Segment::Literal(part)),
        }
    }
    Ok(segments)
}

/// Drop query and fragment, then split into non-empty segments.
/// True when `value` reaches `location.pathname` byte for byte: browsers
/// percent-encode everything outside the unreserved set and collapse dot
/// segments.
fn is_plain_segment(value: &str) -> bool {
    value != "."
        && value != ".."
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'.' | b'_' | b'~'))
}

fn split_path(target_path: &str) -> Vec<&str> {
    let end = target_path.find(['?', '#']).unwrap_or(target_path.len());
    target_path[..end]
        .split('/')
        .filter(|part| !part.is_empty())
        .collect()
}
