use crate::{Wiki, WikiError, WikiQuery, WikiResult};

pub const MISSING_WIKI: &str = "A specific HoYoLab wiki is required";
pub const MISSING_ID: &str = "A specific HoYoLab wiki ID is required";
pub const UNKNOWN_WIKI: &str = "Unknown wiki name identifier";
pub const GENSHIN_NOT_IMPLEMENTED: &str =
    "The Genshin Impact parser has not been implemented *yet*";

impl WikiQuery {
    /// Validate a raw `(wiki, id)` pair as collected from the user.
    ///
    /// Checks run in a fixed order: missing wiki, missing id, unknown wiki,
    /// then wikis the backend cannot serve yet. Surrounding whitespace is
    /// ignored.
    pub fn parse(wiki: &str, id: &str) -> WikiResult<Self> {
        let wiki = wiki.trim();
        let id = id.trim();

        if wiki.is_empty() {
            return Err(WikiError::InvalidQuery(MISSING_WIKI.to_string()));
        }
        if id.is_empty() {
            return Err(WikiError::InvalidQuery(MISSING_ID.to_string()));
        }

        let wiki = Wiki::from_identifier(wiki)
            .ok_or_else(|| WikiError::UnsupportedWiki(format!("{UNKNOWN_WIKI}: {wiki}")))?;

        match wiki {
            Wiki::StarRail => Ok(Self {
                wiki,
                id: id.to_string(),
            }),
            Wiki::Genshin => Err(WikiError::NotYetImplemented(
                GENSHIN_NOT_IMPLEMENTED.to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_star_rail_query() {
        let query = WikiQuery::parse("hsr", "1234").unwrap();
        assert_eq!(query.wiki, Wiki::StarRail);
        assert_eq!(query.id, "1234");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let query = WikiQuery::parse(" hsr ", "  42\n").unwrap();
        assert_eq!(query.id, "42");
    }

    #[test]
    fn rejects_missing_wiki_before_missing_id() {
        match WikiQuery::parse("", "") {
            Err(WikiError::InvalidQuery(msg)) => assert_eq!(msg, MISSING_WIKI),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_missing_id() {
        match WikiQuery::parse("hsr", "   ") {
            Err(WikiError::InvalidQuery(msg)) => assert_eq!(msg, MISSING_ID),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_wiki() {
        match WikiQuery::parse("zzz", "1") {
            Err(WikiError::UnsupportedWiki(msg)) => assert!(msg.contains("zzz")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_genshin_as_not_implemented() {
        let err = WikiQuery::parse("genshin", "1").unwrap_err();
        assert!(matches!(err, WikiError::NotYetImplemented(_)));
        assert!(err.is_validation());
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        let err = WikiQuery::parse("HSR", "1").unwrap_err();
        assert!(matches!(err, WikiError::UnsupportedWiki(_)));
    }
}
