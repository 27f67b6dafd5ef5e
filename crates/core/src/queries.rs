//! Fixed GraphQL documents
//!
//! The document text is a compatibility surface with the provider schema;
//! change it only together with the decoding structs in `directory`.

use serde_json::Value;

use crate::graphql::GraphqlPayload;

/// Operation name bound to its document text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryDescriptor {
    pub name: &'static str,
    pub document: &'static str,
}

impl QueryDescriptor {
    /// Build a `{query, variables}` payload for this document.
    pub fn query(&self, variables: Value) -> GraphqlPayload {
        GraphqlPayload::query(self.document, variables)
    }
}

/// Look up one account by search term inside an enterprise.
///
/// Variables: `slug`, `query`.
pub const GET_ENTERPRISE_USER_ACCOUNT: QueryDescriptor = QueryDescriptor {
    name: "GetEnterpriseUserAccount",
    document: r"
    query GetEnterpriseUserAccount($slug: String!, $query: String!) {
        enterprise(slug: $slug) {
            name
            id
            members(query: $query, first: 1) {
                totalCount
                nodes {
                    type: __typename
                    ... on EnterpriseUserAccount {
                        id
                        name
                        login
                    }
                    ... on User {
                        id
                        name
                        login
                    }
                }
            }
        }
    }
",
};

/// One page (100) of enterprise members after `cursor`.
///
/// Variables: `slug`, `cursor` (null for the first page).
pub const LIST_ENTERPRISE_MEMBERS: QueryDescriptor = QueryDescriptor {
    name: "ListEnterpriseMembers",
    document: r"
    query ListEnterpriseMembers($slug: String!, $cursor: String) {
        enterprise(slug: $slug) {
            name
            id
            members(first: 100, role: MEMBER, after: $cursor) {
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
                nodes {
                    type: __typename
                    ... on EnterpriseUserAccount {
                        id
                        name
                        login
                    }
                    ... on User {
                        id
                        name
                        login
                    }
                }
            }
            organizations(first: 100) {
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
                nodes {
                    ... on Organization {
                        name
                        id
                        login
                    }
                }
            }
        }
    }
",
};

/// A user with its first 100 enterprises and organizations.
///
/// Variables: `login`.
pub const GET_USER: QueryDescriptor = QueryDescriptor {
    name: "GetUser",
    document: r"
    query GetUser($login: String!) {
        user(login: $login) {
            name
            id
            enterprises(first: 100) {
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
                nodes {
                    id
                    name
                    slug
                }
            }
            organizations(first: 100) {
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
                nodes {
                    id
                    name
                    login
                }
            }
        }
    }
",
};

/// Account lookup through the user's own `enterprises` connection.
///
/// Reading `enterprises` of another user needs an elevated token scope;
/// without it the provider answers FORBIDDEN on that path.
///
/// Variables: `login`.
pub const GET_USER_ENTERPRISES: QueryDescriptor = QueryDescriptor {
    name: "GetUserEnterprises",
    document: r"
    query GetUserEnterprises($login: String!) {
        user(login: $login) {
            name
            id
            login
            enterprises(first: 100) {
                totalCount
                pageInfo {
                    endCursor
                    hasNextPage
                }
                nodes {
                    id
                    name
                    slug
                }
            }
        }
    }
",
};
