//! Response projection: typed service results to canonical JSON strings.
//!
//! Absence of content is not a failure. It projects to `{}` or `[]` so a
//! caller can tell "no content" from "request failed" by payload shape
//! alone; the sentinel error string is reserved for actual failures.

use dxd_graphql::types::{
    RecommendResult,
    RecommendedTopic,
    SearchHit,
    SearchResultsConnection,
    Toc,
    Topic,
};

const EMPTY_OBJECT: &str = "{}";
const EMPTY_LIST: &str = "[]";

/// Serializes the full entry tree; an absent TOC becomes an empty object.
///
/// # Errors
/// Returns an error if the tree cannot be encoded as JSON.
pub fn toc(toc: Option<Toc>) -> Result<String, serde_json::Error> {
    toc.map_or_else(|| Ok(EMPTY_OBJECT.to_string()), |toc| serde_json::to_string(&toc))
}

/// Serializes a topic with whichever variant fields are present; an absent
/// topic becomes an empty object.
///
/// # Errors
/// Returns an error if the topic cannot be encoded as JSON.
pub fn topic(topic: Option<Topic>) -> Result<String, serde_json::Error> {
    topic.map_or_else(
        || Ok(EMPTY_OBJECT.to_string()),
        |topic| serde_json::to_string(&topic),
    )
}

/// Unwraps each edge to its inner search payload, dropping edges whose node
/// or payload is absent. Upstream ranking order is preserved.
///
/// # Errors
/// Returns an error if the result list cannot be encoded as JSON.
pub fn search(connection: Option<SearchResultsConnection>) -> Result<String, serde_json::Error> {
    let Some(edges) = connection.and_then(|connection| connection.edges) else {
        return Ok(EMPTY_LIST.to_string());
    };

    let results: Vec<SearchHit> = edges
        .into_iter()
        .filter_map(|edge| edge.node.and_then(|node| node.search))
        .collect();
    serde_json::to_string(&results)
}

/// Keeps only present recommendation entries. The source topic is available
/// upstream but never part of the projected list.
///
/// # Errors
/// Returns an error if the result list cannot be encoded as JSON.
pub fn recommendations(result: Option<RecommendResult>) -> Result<String, serde_json::Error> {
    let Some(results) = result.and_then(|result| result.results) else {
        return Ok(EMPTY_LIST.to_string());
    };

    let entries: Vec<RecommendedTopic> = results.into_iter().flatten().collect();
    serde_json::to_string(&entries)
}

#[cfg(test)]
mod tests {
    use dxd_graphql::types::{RecommendedTopic, SearchEdge, SearchNode, SourceTopic};

    use super::*;

    fn hit(id: &str) -> SearchHit {
        SearchHit {
            score: Some(1.0),
            id: Some(id.to_string()),
            locale: Some("en".to_string()),
            url: Some(format!("/{id}")),
            title: Some(id.to_string()),
        }
    }

    #[test]
    fn absent_toc_is_an_empty_object() {
        assert_eq!(toc(None).expect("projection"), "{}");
    }

    #[test]
    fn absent_topic_is_an_empty_object() {
        assert_eq!(topic(None).expect("projection"), "{}");
    }

    #[test]
    fn absent_connection_is_an_empty_list() {
        assert_eq!(search(None).expect("projection"), "[]");
        let connection = SearchResultsConnection {
            hits: Some(0),
            edges: None,
        };
        assert_eq!(search(Some(connection)).expect("projection"), "[]");
    }

    #[test]
    fn search_drops_hollow_edges_and_keeps_order() {
        let connection = SearchResultsConnection {
            hits: Some(3),
            edges: Some(vec![
                SearchEdge {
                    node: Some(SearchNode {
                        search: Some(hit("first")),
                    }),
                },
                SearchEdge { node: None },
                SearchEdge {
                    node: Some(SearchNode { search: None }),
                },
                SearchEdge {
                    node: Some(SearchNode {
                        search: Some(hit("second")),
                    }),
                },
            ]),
        };

        let json = search(Some(connection)).expect("projection");
        let results: Vec<SearchHit> = serde_json::from_str(&json).expect("valid JSON list");
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].id.as_deref(), Some("first"));
        assert_eq!(results[1].id.as_deref(), Some("second"));
    }

    #[test]
    fn recommendations_drop_absent_entries_and_source_topic() {
        let result = RecommendResult {
            source_topic: Some(SourceTopic {
                id: Some("ish_1-2-16".to_string()),
                url: None,
                locale: None,
                title: Some("Source".to_string()),
            }),
            results: Some(vec![
                None,
                Some(RecommendedTopic {
                    id: Some("ish_1-3-16".to_string()),
                    url: Some("/1/3".to_string()),
                    locale: Some("en".to_string()),
                    title: Some("Next steps".to_string()),
                    publication_id: Some(1),
                    publication_title: Some("Manual".to_string()),
                }),
                None,
            ]),
        };

        let json = recommendations(Some(result)).expect("projection");
        assert!(!json.contains("Source"));
        let entries: Vec<RecommendedTopic> = serde_json::from_str(&json).expect("valid JSON list");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id.as_deref(), Some("ish_1-3-16"));
    }

    #[test]
    fn recommendations_without_results_are_an_empty_list() {
        let result = RecommendResult {
            source_topic: None,
            results: None,
        };
        assert_eq!(recommendations(Some(result)).expect("projection"), "[]");
        assert_eq!(recommendations(None).expect("projection"), "[]");
    }
}
