//! Navigation links and in-page fragment targets.
//!
//! A nav link references a section through a fragment href (`#about`). Its
//! highlight is never stored on its own: [`highlight`] recomputes every
//! link from the current set of active section identifiers.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// A navigation link and its derived highlight flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    target: Option<String>,
    pub highlighted: bool,
}

impl NavLink {
    /// Build from a raw `href` attribute. Non-fragment hrefs never highlight.
    #[must_use]
    pub fn from_href(href: Option<&str>) -> Self {
        Self { target: href.and_then(fragment_target).map(str::to_owned), highlighted: false }
    }

    /// Identifier of the referenced section, if the href is a fragment.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Section identifier referenced by a fragment href (`"#work"` -> `"work"`).
///
/// Returns `None` for hrefs that are not fragments, and for the bare `"#"`.
#[must_use]
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Recompute every link's highlight from the active section identifiers.
pub fn highlight<'a, I>(links: &mut [NavLink], active_ids: I)
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    for link in links.iter_mut() {
        link.highlighted = false;
        let Some(target) = link.target() else {
            continue;
        };
        link.highlighted = active_ids.clone().into_iter().any(|id| id == target);
    }
}
