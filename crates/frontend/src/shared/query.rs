//! Query-string parameters the portal is entered with.
//!
//! Links from notification e-mails land on e.g. `/?view=invoices&doc=1002`;
//! `view` selects the initial page and `doc` flags the matching row for a
//! few seconds after it renders.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PortalQuery {
    #[serde(default)]
    pub view: Option<String>,
    #[serde(default)]
    pub doc: Option<String>,
}

/// Parse the current window's query string. Any parse problem degrades to
/// the default (no initial view, no highlight target).
pub fn current() -> PortalQuery {
    let Some(window) = web_sys::window() else {
        return PortalQuery::default();
    };
    let Ok(search) = window.location().search() else {
        return PortalQuery::default();
    };
    parse(&search)
}

fn parse(search: &str) -> PortalQuery {
    let trimmed = search.trim_start_matches('?');
    serde_qs::from_str(trimmed).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_view_and_doc() {
        let q = parse("?view=invoices&doc=1002");
        assert_eq!(q.view.as_deref(), Some("invoices"));
        assert_eq!(q.doc.as_deref(), Some("1002"));
    }

    #[test]
    fn test_parse_empty_and_garbage() {
        assert!(parse("").view.is_none());
        assert!(parse("?").doc.is_none());
        assert!(parse("?unrelated=1").doc.is_none());
    }
}
