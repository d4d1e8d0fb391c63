//! Github Platform
use super::{
    config::Namespace, repo::RepoGithub, GITHUB_API_HEADER, GITHUB_API_URL, GITHUB_API_VERSION,
};
use crate::{
    errors::{ErrorKind, MoverError},
    platform::{BoxFuture, RepositoryCreator},
    utils::{CreateRepoRequest, CreatedRepo},
};
use log::{debug, info};
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use urlencoding::encode;

/// Github Platform
#[derive(Default, Debug, Clone)]
pub struct GithubPlatform {
    /// Github token
    token: String,

    /// API base URL, without trailing slash
    api_url: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubPlatform {
    /// Create a new GithubPlatform talking to api.github.com
    pub fn new(token: String) -> Self {
        Self::with_api_url(token, GITHUB_API_URL)
    }

    /// Create a new GithubPlatform talking to another API host
    pub fn with_api_url<S: AsRef<str>>(token: String, api_url: S) -> Self {
        Self {
            token,
            api_url: api_url.as_ref().trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Endpoint creating a repository in the namespace
    fn create_url(&self, namespace: &Namespace) -> String {
        match namespace {
            Namespace::User => format!("{}/user/repos", self.api_url),
            Namespace::Organization(org) => {
                format!("{}/orgs/{}/repos", self.api_url, encode(org))
            }
        }
    }
}

impl RepositoryCreator for GithubPlatform {
    fn create_repo<'a>(
        &'a self,
        namespace: &'a Namespace,
        request: &'a CreateRepoRequest,
    ) -> BoxFuture<'a, CreatedRepo> {
        Box::pin(async move {
            let api_error =
                |e: reqwest::Error| MoverError::new(ErrorKind::DestinationApi).with_source(e);
            let url = self.create_url(namespace);
            info!("Creating GitHub repository '{}' for {namespace}", request.name);
            debug!("POST {url} {request:?}");
            let response = self
                .client
                .post(&url)
                .header(AUTHORIZATION, format!("Bearer {}", self.token))
                .header(ACCEPT, "application/vnd.github+json")
                .header(
                    USER_AGENT,
                    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")),
                )
                .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
                .json(request)
                .send()
                .await
                .map_err(api_error)?;
            let status = response.status();
            let text = response.text().await.map_err(api_error)?;
            if !status.is_success() {
                return Err(MoverError::new(ErrorKind::DestinationApi)
                    .with_text(format!("{status} - {text}")));
            }
            let decode_error =
                |e: serde_json::Error| MoverError::new(ErrorKind::DestinationApi).with_source(e);
            let response: serde_json::Value = serde_json::from_str(&text).map_err(decode_error)?;
            let repo: RepoGithub =
                serde_json::from_value(response.clone()).map_err(decode_error)?;
            debug!("Created {repo:?}");
            let mut created = CreatedRepo::from(repo);
            created.response = Some(response);
            Ok(created)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn created_body(owner: &str) -> serde_json::Value {
        serde_json::json!({
            "id": 1296269,
            "name": "foo",
            "full_name": format!("{owner}/foo"),
            "description": "bar",
            "private": true,
            "html_url": format!("https://github.com/{owner}/foo"),
            "ssh_url": format!("git@github.com:{owner}/foo.git"),
            "clone_url": format!("https://github.com/{owner}/foo.git"),
        })
    }

    fn request() -> CreateRepoRequest {
        CreateRepoRequest {
            name: "foo".to_string(),
            description: Some("bar".to_string()),
            private: true,
        }
    }

    #[tokio::test]
    async fn create_in_organization() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orgs/acme/repos"))
            .and(header("authorization", "Bearer ghp_token"))
            .and(header(GITHUB_API_HEADER, GITHUB_API_VERSION))
            .and(body_json(serde_json::json!({
                "name": "foo",
                "description": "bar",
                "private": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(created_body("acme")))
            .expect(1)
            .mount(&server)
            .await;

        let github = GithubPlatform::with_api_url("ghp_token".to_string(), server.uri());
        let namespace = Namespace::Organization("acme".to_string());
        let created = github.create_repo(&namespace, &request()).await.unwrap();
        assert_eq!(created.full_name.as_deref(), Some("acme/foo"));
        assert_eq!(created.ssh_url.as_deref(), Some("git@github.com:acme/foo.git"));
        assert_eq!(
            created.clone_url.as_deref(),
            Some("https://github.com/acme/foo.git")
        );
        assert_eq!(created.response, Some(created_body("acme")));
    }

    #[tokio::test]
    async fn create_for_user() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(201).set_body_json(created_body("octocat")))
            .expect(1)
            .mount(&server)
            .await;

        let github =
            GithubPlatform::with_api_url("ghp_token".to_string(), format!("{}/", server.uri()));
        let created = github.create_repo(&Namespace::User, &request()).await.unwrap();
        assert_eq!(created.name, "foo");
        assert!(created.private);
    }

    #[tokio::test]
    async fn existing_name_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(422).set_body_json(serde_json::json!({
                "message": "Repository creation failed.",
                "errors": [{"field": "name", "message": "name already exists on this account"}]
            })))
            .mount(&server)
            .await;

        let github = GithubPlatform::with_api_url("ghp_token".to_string(), server.uri());
        let err = github.create_repo(&Namespace::User, &request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DestinationApi);
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn malformed_response_is_an_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
            .mount(&server)
            .await;

        let github = GithubPlatform::with_api_url("ghp_token".to_string(), server.uri());
        let err = github.create_repo(&Namespace::User, &request()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DestinationApi);
    }

    #[test]
    fn organization_is_encoded() {
        let github = GithubPlatform::new("t".to_string());
        let url = github.create_url(&Namespace::Organization("a b".to_string()));
        assert_eq!(url, "https://api.github.com/orgs/a%20b/repos");
    }
}
