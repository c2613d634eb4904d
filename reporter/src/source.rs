use futures::FutureExt;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to fetch URL")]
    Request(#[source] reqwest::Error),
    #[error("unexpected status code {status} from {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
    #[error("failed to read response body")]
    Body(#[source] reqwest::Error),
    #[error("failed to read {}", path.display())]
    Io {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Somewhere the complete text of a server log can be loaded from.
pub trait LogSource: Send + Sync {
    fn describe(&self) -> String;

    fn load<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<String, SourceError>>
    where
        'own: 'f;
}

pub struct UrlSource {
    http: reqwest::Client,
    url: String,
}

impl UrlSource {
    pub fn new<IS>(url: IS) -> Self
    where
        IS: Into<String>,
    {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

impl LogSource for UrlSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn load<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<String, SourceError>>
    where
        'own: 'f,
    {
        async move {
            let response = self
                .http
                .get(&self.url)
                .send()
                .await
                .map_err(SourceError::Request)?;

            if !response.status().is_success() {
                tracing::debug!(?response, "Fetching log failed");
                return Err(SourceError::Status {
                    url: self.url.clone(),
                    status: response.status(),
                });
            }

            response.text().await.map_err(SourceError::Body)
        }
        .boxed()
    }
}

pub struct FileSource {
    path: std::path::PathBuf,
}

impl FileSource {
    pub fn new<P>(path: P) -> Self
    where
        P: Into<std::path::PathBuf>,
    {
        Self { path: path.into() }
    }
}

impl LogSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load<'f, 'own>(&'own self) -> futures::future::BoxFuture<'f, Result<String, SourceError>>
    where
        'own: 'f,
    {
        async move {
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Io {
                    path: self.path.clone(),
                    source,
                })
        }
        .boxed()
    }
}
