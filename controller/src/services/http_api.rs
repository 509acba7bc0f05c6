//! HTTP implementation of the remote story service traits
//!
//! One service struct carries all three concerns; authenticated calls
//! attach the session credential as a bearer token. Failures are mapped by
//! status class, transport errors surface as NetworkError, and unparseable
//! bodies as InvalidResponse. No retry, no local timeout: the remote is a
//! single best-effort endpoint.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::traits::{AuthApi, GenerationApi, StoryApi};
use shared::{
    ArtifactRef, Credential, GenerateRequest, GenerateResponse, ImageRequest, ImageResponse,
    ListStoriesResponse, LoginRequest, LoginResponse, PdfRequest, PdfResponse, RegisterRequest,
    RemoteFailure, RemoteResult, Roster, SaveRequest, SaveResponse, StoryId, StoryRecord,
    StorySummary,
};

/// HTTP client for the remote story service
#[derive(Clone)]
pub struct HttpStoryService {
    base_url: String,
    client: reqwest::Client,
}

impl HttpStoryService {
    /// Create a client for the service rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn failure_from_status(status: reqwest::StatusCode) -> RemoteFailure {
        match status.as_u16() {
            401 => RemoteFailure::AuthenticationFailed,
            404 => RemoteFailure::NotFound,
            429 => RemoteFailure::RateLimitExceeded,
            503 => RemoteFailure::ServiceUnavailable,
            _ => RemoteFailure::ServerError(status.to_string()),
        }
    }

    /// Check the status, then decode the body
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> RemoteResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure_from_status(status));
        }
        response
            .json::<T>()
            .await
            .map_err(|e| RemoteFailure::InvalidResponse(e.to_string()))
    }

    fn bearer(credential: &Credential) -> String {
        format!("Bearer {}", credential.expose())
    }
}

#[async_trait]
impl AuthApi for HttpStoryService {
    async fn register(&self, username: &str, password: &str) -> RemoteResult<()> {
        let body = RegisterRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        debug!(username, "POST /register");
        let response = self
            .client
            .post(self.endpoint("/register"))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure_from_status(status));
        }
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> RemoteResult<Credential> {
        let body = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        debug!(username, "POST /login");
        let response = self
            .client
            .post(self.endpoint("/login"))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let login: LoginResponse = Self::decode(response).await?;
        Ok(Credential::new(login.access_token))
    }
}

#[async_trait]
impl StoryApi for HttpStoryService {
    async fn save_story(
        &self,
        credential: &Credential,
        title: &str,
        content: &str,
    ) -> RemoteResult<StoryId> {
        let body = SaveRequest {
            title: title.to_string(),
            content: content.to_string(),
        };
        debug!(title, "POST /save");
        let response = self
            .client
            .post(self.endpoint("/save"))
            .header("Authorization", Self::bearer(credential))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let saved: SaveResponse = Self::decode(response).await?;
        Ok(saved.id)
    }

    async fn list_stories(&self, credential: &Credential) -> RemoteResult<Vec<StorySummary>> {
        debug!("GET /stories");
        let response = self
            .client
            .get(self.endpoint("/stories"))
            .header("Authorization", Self::bearer(credential))
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let list: ListStoriesResponse = Self::decode(response).await?;
        Ok(list.stories)
    }

    async fn get_story(&self, credential: &Credential, id: StoryId) -> RemoteResult<StoryRecord> {
        debug!(%id, "GET /story");
        let response = self
            .client
            .get(self.endpoint(&format!("/story/{id}")))
            .header("Authorization", Self::bearer(credential))
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        Self::decode(response).await
    }

    async fn delete_story(&self, credential: &Credential, id: StoryId) -> RemoteResult<()> {
        debug!(%id, "DELETE /delete");
        let response = self
            .client
            .delete(self.endpoint(&format!("/delete/{id}")))
            .header("Authorization", Self::bearer(credential))
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Self::failure_from_status(status));
        }
        Ok(())
    }
}

#[async_trait]
impl GenerationApi for HttpStoryService {
    async fn generate_story(
        &self,
        credential: &Credential,
        roster: Roster,
        scene: &str,
        scenario: &str,
    ) -> RemoteResult<String> {
        let body = GenerateRequest {
            characters: roster,
            scene: scene.to_string(),
            scenario: scenario.to_string(),
        };
        debug!(scene, scenario, "POST /generate");
        let response = self
            .client
            .post(self.endpoint("/generate"))
            .header("Authorization", Self::bearer(credential))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let generated: GenerateResponse = Self::decode(response).await?;
        Ok(generated.story)
    }

    async fn generate_image(&self, credential: &Credential, prompt: &str) -> RemoteResult<ArtifactRef> {
        let body = ImageRequest {
            prompt: prompt.to_string(),
        };
        debug!(prompt, "POST /generate_image");
        let response = self
            .client
            .post(self.endpoint("/generate_image"))
            .header("Authorization", Self::bearer(credential))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let image: ImageResponse = Self::decode(response).await?;
        Ok(ArtifactRef::new(image.image_path))
    }

    async fn export_pdf(
        &self,
        credential: &Credential,
        title: &str,
        content: &str,
        image: Option<ArtifactRef>,
    ) -> RemoteResult<ArtifactRef> {
        let body = PdfRequest {
            title: title.to_string(),
            text: content.to_string(),
            image_path: image.map(|i| i.as_str().to_string()),
        };
        debug!(title, "POST /save_as_pdf");
        let response = self
            .client
            .post(self.endpoint("/save_as_pdf"))
            .header("Authorization", Self::bearer(credential))
            .json(&body)
            .send()
            .await
            .map_err(|e| RemoteFailure::NetworkError(e.to_string()))?;

        let pdf: PdfResponse = Self::decode(response).await?;
        Ok(ArtifactRef::new(pdf.pdf_path))
    }
}
