use scm_directory_domain::ClientConfig;
use scm_directory_infra::GithubScmGraphql;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TOKEN: &str = "ghp_integration";

/// Client pointed at `/graphql` on the mock server.
pub fn client_for(server: &MockServer) -> GithubScmGraphql {
    client_with(server, |_| {})
}

/// Client pointed at the mock server with extra configuration applied.
pub fn client_with(server: &MockServer, tweak: impl FnOnce(&mut ClientConfig)) -> GithubScmGraphql {
    let mut config = ClientConfig::with_graphql_url(format!("{}/graphql", server.uri()));
    tweak(&mut config);
    GithubScmGraphql::new(config).expect("client should build")
}

pub fn member(kind: &str, id: &str, name: &str, login: &str) -> Value {
    json!({"type": kind, "id": id, "name": name, "login": login})
}

/// A `ListEnterpriseMembers` response body.
pub fn members_page(nodes: Value, has_next: bool, cursor: Option<&str>) -> Value {
    json!({"data": {"enterprise": {
        "name": "Acme",
        "id": "E_acme",
        "members": {
            "totalCount": 2,
            "pageInfo": {"endCursor": cursor, "hasNextPage": has_next},
            "nodes": nodes
        },
        "organizations": {"totalCount": 0, "pageInfo": {"endCursor": null, "hasNextPage": false}, "nodes": []}
    }}})
}

/// Decoded JSON bodies of every request the server received.
pub async fn request_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .expect("request recording enabled")
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("JSON request body"))
        .collect()
}
