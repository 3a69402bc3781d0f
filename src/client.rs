use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::model::{AuthKey, PetFilter};
use crate::response::{ApiResponse, ResponseBody};
use crate::ua;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use reqwest::{Body, Client, RequestBuilder, Response};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const AUTH_KEY_HEADER: &str = "auth_key";
const PHOTO_FIELD: &str = "pet_photo";
const PHOTO_MIME: &str = "image/jpeg";

/// Client for the PetFriends REST API.
///
/// Every method sends exactly one request and hands back the status and the
/// normalized body. Non-2xx statuses are results, not errors; only transport
/// failures and unreadable photo files produce `Err`.
pub struct PetFriendsClient {
    client: Client,
    base_url: String,
}

impl PetFriendsClient {
    /// Client for the configured deployment with the default timeout.
    pub fn new() -> Result<Self, ClientError> {
        Self::from_config(&ClientConfig::default().with_env_overrides())
    }

    pub fn from_config(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::build(&config.api_url, Duration::from_secs(config.timeout_secs))
    }

    /// Create a client with an explicit base URL (mock servers, staging)
    pub fn with_base_url(base_url: impl AsRef<str>) -> Result<Self, ClientError> {
        Self::build(
            base_url.as_ref(),
            Duration::from_secs(crate::config::DEFAULT_TIMEOUT_SECS),
        )
    }

    fn build(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(ua::user_agent())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// GET api/key with the credentials as `email` / `password` headers.
    pub async fn obtain_key(&self, email: &str, password: &str) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .get(self.url("api/key"))
            .header("email", email)
            .header("password", password);

        self.execute(request).await
    }

    /// GET api/pets. The `filter` parameter is always sent, empty for all pets.
    pub async fn list_pets(
        &self,
        auth_key: &AuthKey,
        filter: &PetFilter,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .get(self.url("api/pets"))
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .query(&[("filter", filter.as_query_value())]);

        self.execute(request).await
    }

    /// POST api/pets with the pet fields and a JPEG photo streamed from disk.
    ///
    /// The photo is opened before anything is sent; a missing or unreadable
    /// file fails with [`ClientError::PhotoRead`] and no request is made.
    pub async fn create_pet(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, ClientError> {
        let photo = photo_part(photo_path.as_ref()).await?;
        let form = pet_fields(name, animal_type, age).part(PHOTO_FIELD, photo);

        let request = self
            .client
            .post(self.url("api/pets"))
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .multipart(form);

        self.execute(request).await
    }

    /// POST api/create_pet_simple. Multipart even without a file, as the
    /// server expects the same encoding as the photo variant.
    pub async fn create_pet_simple(
        &self,
        auth_key: &AuthKey,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .post(self.url("api/create_pet_simple"))
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .multipart(pet_fields(name, animal_type, age));

        self.execute(request).await
    }

    pub async fn delete_pet(&self, auth_key: &AuthKey, pet_id: &str) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .delete(self.url(&format!("api/pets/{}", pet_id)))
            .header(AUTH_KEY_HEADER, auth_key.as_str());

        self.execute(request).await
    }

    /// PUT api/pets/{id} with a form-urlencoded body (not multipart).
    pub async fn update_pet(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        name: &str,
        animal_type: &str,
        age: &str,
    ) -> Result<ApiResponse, ClientError> {
        let request = self
            .client
            .put(self.url(&format!("api/pets/{}", pet_id)))
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .form(&[("name", name), ("animal_type", animal_type), ("age", age)]);

        self.execute(request).await
    }

    /// POST api/pets/set_photo/{id} with only the photo field.
    pub async fn attach_photo(
        &self,
        auth_key: &AuthKey,
        pet_id: &str,
        photo_path: impl AsRef<Path>,
    ) -> Result<ApiResponse, ClientError> {
        let photo = photo_part(photo_path.as_ref()).await?;
        let form = Form::new().part(PHOTO_FIELD, photo);

        let request = self
            .client
            .post(self.url(&format!("api/pets/set_photo/{}", pet_id)))
            .header(AUTH_KEY_HEADER, auth_key.as_str())
            .multipart(form);

        self.execute(request).await
    }

    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ClientError> {
        let request = request.build().map_err(ClientError::InvalidRequest)?;
        let method = request.method().clone();
        let path = request.url().path().to_string();

        debug!(%method, %path, "sending request");
        let response = self.client.execute(request).await?;
        debug!(%method, %path, status = response.status().as_u16(), "received response");

        Self::normalize(response).await
    }

    async fn normalize(response: Response) -> Result<ApiResponse, ClientError> {
        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let text = response.text().await?;

        Ok(ApiResponse::new(status, content_type, ResponseBody::from_text(text)))
    }
}

fn pet_fields(name: &str, animal_type: &str, age: &str) -> Form {
    Form::new()
        .text("name", name.to_string())
        .text("animal_type", animal_type.to_string())
        .text("age", age.to_string())
}

/// Open `path` and wrap it as a streamed JPEG part.
///
/// The file handle moves into the request body and is closed when the
/// request completes or fails.
async fn photo_part(path: &Path) -> Result<Part, ClientError> {
    let read_err = |source| ClientError::PhotoRead {
        path: path.to_path_buf(),
        source,
    };

    let file = tokio::fs::File::open(path).await.map_err(read_err)?;
    let metadata = file.metadata().await.map_err(read_err)?;
    if !metadata.is_file() {
        return Err(read_err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        )));
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo.jpg".to_string());
    debug!(file = %file_name, bytes = metadata.len(), "attaching photo");

    let part = Part::stream_with_length(Body::from(file), metadata.len())
        .file_name(file_name)
        .mime_str(PHOTO_MIME)?;
    Ok(part)
}
