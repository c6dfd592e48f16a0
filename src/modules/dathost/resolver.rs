use super::models::ServerRecord;

/// What a user-supplied server name points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    NotFound,
    /// Always more than one candidate, in listing order.
    Ambiguous(Vec<ServerRecord>),
    Resolved(ServerRecord),
}

/// Resolves `query` against a listing.
///
/// A unique case-insensitive exact name match wins, so a server whose name is
/// contained in another's can still be targeted. Otherwise every name
/// containing the query is a candidate.
pub fn resolve(servers: Vec<ServerRecord>, query: &str) -> Resolution {
    let needle = query.trim().to_lowercase();

    let mut exact = servers
        .iter()
        .filter(|s| s.name.to_lowercase() == needle)
        .cloned()
        .collect::<Vec<_>>();
    if exact.len() == 1 {
        return Resolution::Resolved(exact.remove(0));
    }

    let mut matches = servers
        .into_iter()
        .filter(|s| s.name.to_lowercase().contains(&needle))
        .collect::<Vec<_>>();

    match matches.len() {
        0 => Resolution::NotFound,
        1 => Resolution::Resolved(matches.remove(0)),
        _ => Resolution::Ambiguous(matches),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::dathost::models::server;

    fn names(records: &[ServerRecord]) -> Vec<&str> {
        records.iter().map(|s| s.name.as_str()).collect()
    }

    fn listing() -> Vec<ServerRecord> {
        vec![server("Alpha"), server("Alpha-2"), server("Bravo Retake")]
    }

    #[test]
    fn exact_match_beats_substring() {
        assert_eq!(
            resolve(listing(), "Alpha"),
            Resolution::Resolved(server("Alpha"))
        );
        assert_eq!(
            resolve(listing(), "alpha"),
            Resolution::Resolved(server("Alpha"))
        );
    }

    #[test]
    fn unique_substring_resolves() {
        assert_eq!(
            resolve(listing(), "retake"),
            Resolution::Resolved(server("Bravo Retake"))
        );
        assert_eq!(
            resolve(listing(), "  ALPHA-2 "),
            Resolution::Resolved(server("Alpha-2"))
        );
    }

    #[test]
    fn several_substring_matches_are_ambiguous_in_listing_order() {
        let servers = vec![
            server("Zulu Alpha"),
            server("Bravo"),
            server("Alpha"),
            server("alpha-2"),
        ];
        match resolve(servers, "alph") {
            Resolution::Ambiguous(candidates) => {
                assert_eq!(names(&candidates), ["Zulu Alpha", "Alpha", "alpha-2"])
            }
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_exact_names_stay_ambiguous() {
        let servers = vec![server("Scrim"), server("scrim"), server("Other")];
        match resolve(servers, "SCRIM") {
            Resolution::Ambiguous(candidates) => assert_eq!(names(&candidates), ["Scrim", "scrim"]),
            other => panic!("expected ambiguity, got {:?}", other),
        }
    }

    #[test]
    fn no_match_is_not_found() {
        assert_eq!(resolve(listing(), "charlie"), Resolution::NotFound);
        assert_eq!(resolve(Vec::new(), "alpha"), Resolution::NotFound);
    }

    #[test]
    fn empty_query_matches_every_name() {
        assert!(matches!(resolve(listing(), ""), Resolution::Ambiguous(c) if c.len() == 3));
        assert_eq!(
            resolve(vec![server("Solo")], " "),
            Resolution::Resolved(server("Solo"))
        );
    }
}
