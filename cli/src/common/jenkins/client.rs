//! # jenkinsw Jenkins API Client (`common::jenkins::client`)
//!
//! File: cli/src/common/jenkins/client.rs
//!
//! Read-only access to the Jenkins JSON API (`<host>/api/json`,
//! `<host>/job/<a>/job/<b>/api/json`) using basic auth with the context's API
//! token. TLS certificate verification is always on.
//!
use crate::core::config::Context;
use crate::core::credentials::Credentials;
use crate::core::error::{JenkinswError, Result};
use futures_util::future::{BoxFuture, FutureExt};
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

/// `_class` of CloudBees folder jobs, the only job type that is expanded.
pub const FOLDER_CLASS: &str = "com.cloudbees.hudson.plugins.folder.Folder";

/// Response header carrying the server version.
const VERSION_HEADER: &str = "X-Jenkins";

/// A job entry as returned by the JSON API.
///
/// After `list_jobs` flattens folders, `name` is the qualified `a/job/b` form.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Job {
    #[serde(rename = "_class", default)]
    pub class: String,
    pub name: String,
}

impl Job {
    pub fn is_folder(&self) -> bool {
        self.class == FOLDER_CLASS
    }
}

#[derive(Deserialize, Debug)]
struct JobList {
    #[serde(default)]
    jobs: Vec<Job>,
}

/// Connected Jenkins API client.
#[derive(Debug)]
pub struct JenkinsClient {
    http: reqwest::Client,
    base: Url,
    credentials: Credentials,
    version: String,
}

impl JenkinsClient {
    /// Connects to `context.host`, verifying the credentials with one request.
    ///
    /// # Errors
    ///
    /// `JenkinswError::Connection` if the server cannot be reached or rejects the
    /// credentials.
    pub async fn connect(context: &Context, credentials: Credentials) -> Result<Self> {
        let base = Url::parse(&context.host).map_err(|e| {
            JenkinswError::Config(format!("Invalid Jenkins URL '{}': {}", context.host, e))
        })?;
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| connection_error(&context.host, e.to_string()))?;

        let mut client = JenkinsClient {
            http,
            base,
            credentials,
            version: String::new(),
        };

        let url = client.api_url(&[])?;
        info!("Connecting to {} as {}", context.host, client.credentials.username);
        let response = client
            .get(url)
            .await
            .map_err(|e| connection_error(&context.host, e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(connection_error(&context.host, status.to_string()));
        }

        client.version = response
            .headers()
            .get(VERSION_HEADER)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("unknown")
            .to_string();
        debug!("Jenkins at {} reports version {}", context.host, client.version);
        Ok(client)
    }

    /// Server version captured at connect time.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Lists jobs, expanding folders up to `depth` levels.
    ///
    /// With `depth == 0` only top-level entries are returned. Nested jobs are named
    /// `<parent>/job/<child>`; folders at the depth limit are returned as entries
    /// themselves.
    pub async fn list_jobs(&self, depth: usize) -> Result<Vec<Job>> {
        let top_level = self.fetch_jobs(&[]).await?;
        if depth == 0 {
            return Ok(top_level);
        }

        let mut jobs = Vec::new();
        for job in top_level {
            if job.is_folder() {
                let folder = vec![job.name.clone()];
                jobs.extend(self.folder_jobs(folder, job, 0, depth).await?);
            } else {
                jobs.push(job);
            }
        }
        Ok(jobs)
    }

    fn folder_jobs(
        &self,
        folder: Vec<String>,
        folder_job: Job,
        level: usize,
        limit: usize,
    ) -> BoxFuture<'_, Result<Vec<Job>>> {
        async move {
            if level == limit {
                return Ok(vec![Job {
                    name: folder.join("/job/"),
                    ..folder_job
                }]);
            }

            let mut jobs = Vec::new();
            for child in self.fetch_jobs(&folder).await? {
                let mut path = folder.clone();
                path.push(child.name.clone());
                if child.is_folder() {
                    jobs.extend(self.folder_jobs(path, child, level + 1, limit).await?);
                } else {
                    jobs.push(Job {
                        name: path.join("/job/"),
                        ..child
                    });
                }
            }
            Ok(jobs)
        }
        .boxed()
    }

    async fn fetch_jobs(&self, folder: &[String]) -> Result<Vec<Job>> {
        let url = self.api_url(folder)?;
        debug!("Fetching jobs from {}", url);
        let response = self
            .get(url.clone())
            .await
            .map_err(|e| JenkinswError::Api(format!("GET {} failed: {}", url, e)))?;
        let status = response.status();
        if !status.is_success() {
            anyhow::bail!(JenkinswError::Api(format!(
                "GET {} returned {}",
                url, status
            )));
        }
        let list: JobList = response
            .json()
            .await
            .map_err(|e| JenkinswError::Api(format!("Invalid job list from {}: {}", url, e)))?;
        Ok(list.jobs)
    }

    async fn get(&self, url: Url) -> reqwest::Result<reqwest::Response> {
        self.http
            .get(url)
            .basic_auth(&self.credentials.username, Some(&self.credentials.token))
            .send()
            .await
    }

    /// `<base>/job/<f1>/job/<f2>/api/json`, percent-encoding each name.
    fn api_url(&self, folder: &[String]) -> Result<Url> {
        let mut url = self.base.clone();
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                JenkinswError::Config(format!("Jenkins URL '{}' cannot be a base", self.base))
            })?;
            segments.pop_if_empty();
            for name in folder {
                segments.push("job").push(name);
            }
            segments.extend(["api", "json"]);
        }
        Ok(url)
    }
}

fn connection_error(host: &str, reason: String) -> JenkinswError {
    JenkinswError::Connection {
        host: host.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FREESTYLE: &str = "hudson.model.FreeStyleProject";

    fn context(host: &str) -> Context {
        Context {
            name: "test".into(),
            host: host.into(),
            username: "alice".into(),
            api_token: String::new(),
        }
    }

    fn credentials() -> Credentials {
        Credentials {
            username: "alice".into(),
            token: "tok".into(),
        }
    }

    fn job(class: &str, name: &str) -> serde_json::Value {
        json!({ "_class": class, "name": name, "url": format!("http://jenkins/job/{}/", name) })
    }

    async fn mount_jobs(server: &MockServer, at: &str, jobs: Vec<serde_json::Value>) {
        Mock::given(method("GET"))
            .and(path(at))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Jenkins", "2.440.3")
                    .set_body_json(json!({ "jobs": jobs })),
            )
            .mount(server)
            .await;
    }

    /// Top level: folder `F` and job `top`. `F` holds folder `G` and job `a`; `G` holds job `J`.
    async fn folder_tree() -> MockServer {
        let server = MockServer::start().await;
        mount_jobs(
            &server,
            "/api/json",
            vec![job(FOLDER_CLASS, "F"), job(FREESTYLE, "top")],
        )
        .await;
        mount_jobs(
            &server,
            "/job/F/api/json",
            vec![job(FOLDER_CLASS, "G"), job(FREESTYLE, "a")],
        )
        .await;
        mount_jobs(&server, "/job/F/job/G/api/json", vec![job(FREESTYLE, "J")]).await;
        server
    }

    fn names(jobs: &[Job]) -> Vec<&str> {
        jobs.iter().map(|j| j.name.as_str()).collect()
    }

    #[test]
    fn test_job_ignores_display_fields() {
        let job: Job = serde_json::from_value(json!({
            "_class": FOLDER_CLASS,
            "name": "infra",
            "url": "http://jenkins/job/infra/",
            "color": "blue"
        }))
        .unwrap();
        assert_eq!(
            job,
            Job {
                class: FOLDER_CLASS.into(),
                name: "infra".into(),
            }
        );
        assert!(job.is_folder());
    }

    #[tokio::test]
    async fn test_connect_reads_version_with_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/json"))
            .and(header("authorization", "Basic YWxpY2U6dG9r"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("X-Jenkins", "2.440.3")
                    .set_body_json(json!({ "jobs": [] })),
            )
            .mount(&server)
            .await;

        let client = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap();
        assert_eq!(client.version(), "2.440.3");
    }

    #[tokio::test]
    async fn test_connect_rejected_is_connection_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let err = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JenkinswError>(),
            Some(JenkinswError::Connection { reason, .. }) if reason.starts_with("401")
        ));
    }

    #[tokio::test]
    async fn test_list_jobs_depth_zero_keeps_folders() {
        let server = folder_tree().await;
        let client = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap();
        let jobs = client.list_jobs(0).await.unwrap();
        assert_eq!(names(&jobs), vec!["F", "top"]);
        assert!(jobs[0].is_folder());
    }

    #[tokio::test]
    async fn test_list_jobs_depth_one_emits_nested_folder_as_leaf() {
        let server = folder_tree().await;
        let client = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap();
        let jobs = client.list_jobs(1).await.unwrap();
        assert_eq!(names(&jobs), vec!["F/job/G", "F/job/a", "top"]);
        assert!(jobs[0].is_folder());
    }

    #[tokio::test]
    async fn test_list_jobs_depth_two_reaches_nested_job() {
        let server = folder_tree().await;
        let client = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap();
        let jobs = client.list_jobs(2).await.unwrap();
        assert_eq!(names(&jobs), vec!["F/job/G/job/J", "F/job/a", "top"]);
    }

    #[tokio::test]
    async fn test_list_jobs_propagates_nested_error() {
        let server = MockServer::start().await;
        mount_jobs(&server, "/api/json", vec![job(FOLDER_CLASS, "F")]).await;
        Mock::given(method("GET"))
            .and(path("/job/F/api/json"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = JenkinsClient::connect(&context(&server.uri()), credentials())
            .await
            .unwrap();
        let err = client.list_jobs(3).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<JenkinswError>(),
            Some(JenkinswError::Api(msg)) if msg.contains("500")
        ));
    }

    #[tokio::test]
    async fn test_api_url_keeps_context_path_and_encodes_names() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/jenkins/api/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "jobs": [] })))
            .mount(&server)
            .await;

        let host = format!("{}/jenkins/", server.uri());
        let client = JenkinsClient::connect(&context(&host), credentials())
            .await
            .unwrap();
        assert_eq!(client.version(), "unknown");

        let url = client
            .api_url(&["my folder".to_string(), "x".to_string()])
            .unwrap();
        assert!(url
            .as_str()
            .ends_with("/jenkins/job/my%20folder/job/x/api/json"));
    }
}
