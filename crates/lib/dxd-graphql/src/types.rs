use serde::{Deserialize, Serialize};

/// Table of contents for a single publication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Toc {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<TocEntry>>,
}

/// One TOC node. The query requests three levels of nesting, so `entries`
/// is absent below that depth regardless of `has_children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TocEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub toc_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_children: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entries: Option<Vec<TocEntry>>,
}

/// A topic from the content service, discriminated by GraphQL `__typename`.
///
/// Task topics carry a step sequence in their body; every other concrete
/// topic type deserializes through the untagged fallback and serializes
/// with its base fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Topic {
    IshTaskTopic(TaskTopic),
    #[serde(untagged)]
    Generic(TopicFields),
}

/// Fields shared by all topic variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xhtml: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_links: Option<RelatedLinks>,
}

/// Task topic: base fields plus an ordered step sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskTopic {
    #[serde(flatten)]
    pub topic: TopicFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<TaskBody>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xhtml: Option<String>,
}

/// A link from a topic to another item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item: Option<LinkedItem>,
}

/// Topic-to-topic relations, wrapped in their own link list upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelatedLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
}

/// The target of a link, discriminated by `__typename`. Binary components
/// carry their download variants; everything else is a plain item summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum LinkedItem {
    BinaryComponent(BinaryComponent),
    #[serde(untagged)]
    Item(ItemSummary),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryComponent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variants: Option<VariantConnection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantConnection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<VariantEdge>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantEdge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<BinaryVariant>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryVariant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub binary_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

/// Paginated search results as returned under `search.results`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResultsConnection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hits: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edges: Option<Vec<SearchEdge>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchEdge {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<SearchNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchHit>,
}

/// One ranked search hit. Upstream ordering is significant and preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Recommendation lookup result: the source topic plus recommended topics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_topic: Option<SourceTopic>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<Option<RecommendedTopic>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceTopic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedTopic {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publication_title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_topic_deserializes_with_steps() {
        let json = serde_json::json!({
            "__typename": "IshTaskTopic",
            "publicationId": 4482,
            "itemId": 5180,
            "title": "Replacing the filter",
            "url": "/4482/replacing-the-filter",
            "xhtml": "<p>Task body</p>",
            "body": {
                "steps": [
                    { "title": "Open the cover", "xhtml": "<p>Step one</p>" },
                    { "title": "Swap the filter", "xhtml": "<p>Step two</p>" }
                ]
            }
        });

        let topic: Topic = serde_json::from_value(json).expect("task topic should deserialize");
        let Topic::IshTaskTopic(task) = topic else {
            panic!("expected task topic variant");
        };
        assert_eq!(task.topic.publication_id, Some(4482));
        let steps = task.body.and_then(|body| body.steps).unwrap_or_default();
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].title.as_deref(), Some("Open the cover"));
    }

    #[test]
    fn generic_topic_falls_through_untagged() {
        let json = serde_json::json!({
            "__typename": "IshGenericTopic",
            "publicationId": 4482,
            "itemId": 9001,
            "title": "About the device",
            "shortDescription": "Overview",
            "xhtml": "<p>Concept body</p>"
        });

        let topic: Topic = serde_json::from_value(json).expect("generic topic should deserialize");
        let Topic::Generic(fields) = topic else {
            panic!("expected generic topic variant");
        };
        assert_eq!(fields.item_id, Some(9001));
        assert_eq!(fields.short_description.as_deref(), Some("Overview"));
    }

    #[test]
    fn generic_topic_serializes_without_steps_key() {
        let topic = Topic::Generic(TopicFields {
            publication_id: Some(1),
            item_id: Some(2),
            title: Some("Concept".to_string()),
            short_description: None,
            url: None,
            xhtml: Some("<p/>".to_string()),
            links: None,
            related_links: None,
        });

        let json = serde_json::to_string(&topic).expect("topic should serialize");
        assert!(!json.contains("steps"));
        assert!(!json.contains("shortDescription"));
    }

    #[test]
    fn binary_component_link_keeps_variants() {
        let json = serde_json::json!({
            "item": {
                "__typename": "BinaryComponent",
                "publicationId": 4482,
                "itemId": 77,
                "title": "wiring-diagram.png",
                "variants": {
                    "edges": [
                        { "node": { "binaryId": "bin-77", "downloadUrl": "/binary/77" } }
                    ]
                }
            }
        });

        let link: Link = serde_json::from_value(json).expect("link should deserialize");
        let Some(LinkedItem::BinaryComponent(binary)) = link.item else {
            panic!("expected binary component item");
        };
        let edges = binary.variants.and_then(|v| v.edges).unwrap_or_default();
        assert_eq!(edges.len(), 1);
        assert_eq!(
            edges[0].node.as_ref().and_then(|n| n.download_url.as_deref()),
            Some("/binary/77")
        );
    }

    #[test]
    fn plain_item_link_falls_through_untagged() {
        let json = serde_json::json!({
            "item": {
                "__typename": "IshGenericTopic",
                "publicationId": 4482,
                "itemId": 12,
                "title": "Related concept",
                "shortDescription": "See also"
            }
        });

        let link: Link = serde_json::from_value(json).expect("link should deserialize");
        let Some(LinkedItem::Item(item)) = link.item else {
            panic!("expected plain item");
        };
        assert_eq!(item.short_description.as_deref(), Some("See also"));
    }

    #[test]
    fn toc_entry_without_children_omits_entries_key() {
        let entry = TocEntry {
            id: Some("GUID-1".to_string()),
            toc_id: Some("t1".to_string()),
            url: Some("/pub/leaf".to_string()),
            title: Some("Leaf".to_string()),
            has_children: Some(false),
            entries: None,
        };

        let json = serde_json::to_string(&entry).expect("entry should serialize");
        assert!(!json.contains("\"entries\""));
    }
}
