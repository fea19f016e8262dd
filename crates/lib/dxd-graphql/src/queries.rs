//! The fixed query template library.
//!
//! One template per content tool. Documents are literal and versioned with
//! the crate; tool arguments are only ever bound as GraphQL variables and
//! never spliced into the document text.

/// A static, parameterized GraphQL query document.
#[derive(Debug, Clone, Copy)]
pub struct QueryTemplate {
    /// Operation name as declared in the document.
    pub name: &'static str,
    /// The query document sent verbatim to the service.
    pub document: &'static str,
    /// Dot-separated path to the result subtree under the response `data`.
    pub result_path: &'static str,
    /// Variable names the document declares.
    pub variables: &'static [&'static str],
}

/// Table of contents for a publication, three levels deep.
pub const TOC: QueryTemplate = QueryTemplate {
    name: "ishToc",
    document: r"
        query ishToc($publicationId: Int!) {
            ishToc(publicationId: $publicationId) {
                entries {
                    id
                    tocId
                    url
                    title
                    hasChildren
                    entries {
                        id
                        tocId
                        url
                        title
                        hasChildren
                        entries {
                            id
                            tocId
                            url
                            title
                            hasChildren
                        }
                    }
                }
            }
        }
    ",
    result_path: "ishToc",
    variables: &["publicationId"],
};

/// Full polymorphic topic selection, keyed by publication and topic ID.
pub const TOPIC_BY_ID: QueryTemplate = QueryTemplate {
    name: "ishTopicById",
    document: r"
        query ishTopicById($publicationId: Int!, $topicId: Int!) {
            ishTopic(publicationId: $publicationId, topicId: $topicId) {
                __typename
                publicationId
                itemId
                title
                shortDescription
                url
                xhtml
                ... on IshTaskTopic {
                    body {
                        steps {
                            __typename
                            title
                            xhtml
                        }
                    }
                }
                links {
                    item {
                        __typename
                        publicationId
                        itemId
                        title
                        ... on BinaryComponent {
                            __typename
                            publicationId
                            itemId
                            variants {
                                edges {
                                    node {
                                        binaryId
                                        downloadUrl
                                    }
                                }
                            }
                        }
                    }
                }
                relatedLinks {
                    links {
                        item {
                            __typename
                            publicationId
                            itemId
                            title
                            ... on IshGenericTopic {
                                shortDescription
                            }
                        }
                    }
                }
            }
        }
    ",
    result_path: "ishTopic",
    variables: &["publicationId", "topicId"],
};

/// Same topic selection as [`TOPIC_BY_ID`], keyed by publication and URL.
pub const TOPIC_BY_URL: QueryTemplate = QueryTemplate {
    name: "ishTopicByUrl",
    document: r"
        query ishTopicByUrl($publicationId: Int!, $url: String!) {
            ishTopic(publicationId: $publicationId, url: $url) {
                __typename
                publicationId
                itemId
                title
                shortDescription
                url
                xhtml
                ... on IshTaskTopic {
                    body {
                        steps {
                            __typename
                            title
                            xhtml
                        }
                    }
                }
                links {
                    item {
                        __typename
                        publicationId
                        itemId
                        title
                        ... on BinaryComponent {
                            __typename
                            publicationId
                            itemId
                            variants {
                                edges {
                                    node {
                                        binaryId
                                        downloadUrl
                                    }
                                }
                            }
                        }
                    }
                }
                relatedLinks {
                    links {
                        item {
                            __typename
                            publicationId
                            itemId
                            title
                            ... on IshGenericTopic {
                                shortDescription
                            }
                        }
                    }
                }
            }
        }
    ",
    result_path: "ishTopic",
    variables: &["publicationId", "url"],
};

/// Strict-English content search ANDed with the page item type, first ten
/// ranked matches.
pub const SEARCH: QueryTemplate = QueryTemplate {
    name: "searchTopics",
    document: r#"
        query searchTopics($term: String!) {
            search(
                criteria: {
                    languageField: {
                        key: "content"
                        value: $term
                        language: "english"
                        strict: true
                    }
                    and: { field: { key: "itemType", value: "page" } }
                }
            ) {
                results(first: 10) {
                    hits
                    edges {
                        node {
                            search {
                                score
                                id
                                locale
                                url
                                title
                            }
                        }
                    }
                }
            }
        }
    "#,
    result_path: "search.results",
    variables: &["term"],
};

/// Recommended topics for a composite topic key.
pub const RECOMMEND: QueryTemplate = QueryTemplate {
    name: "recommendTopics",
    document: r"
        query recommendTopics($topic: String!) {
            ishRecommend(topicId: $topic) {
                sourceTopic {
                    id
                    url
                    locale
                    title
                }
                results {
                    id
                    url
                    locale
                    title
                    publicationId
                    publicationTitle
                }
            }
        }
    ",
    result_path: "ishRecommend",
    variables: &["topic"],
};
