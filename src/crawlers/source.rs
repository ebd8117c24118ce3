use crate::error::{Error, Result};
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;
use url::Url;

/// Upper bound for retrieving a single page
const PAGE_TIMEOUT: Duration = Duration::from_secs(45);

/// Where the harvester gets page HTML from
#[allow(async_fn_in_trait)]
pub trait PageSource {
    /// Fetch the HTML of `url`
    async fn fetch(&mut self, url: &Url) -> Result<String>;

    /// Release any session held by the source
    async fn close(self);
}

/// Plain HTTP GET through `reqwest`
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl PageSource for HttpSource {
    async fn fetch(&mut self, url: &Url) -> Result<String> {
        let response = timeout(PAGE_TIMEOUT, self.client.get(url.clone()).send())
            .await
            .map_err(|_| Error::Timeout(url.to_string()))??;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    async fn close(self) {}
}

/// Renders pages in a browser behind a WebDriver server.
///
/// Connects on first use; a lost session is dropped and reopened for the
/// next page.
pub struct WebDriverSource {
    webdriver_url: String,
    client: Option<Client>,
}

impl WebDriverSource {
    pub fn new(webdriver_url: &str) -> Self {
        Self {
            webdriver_url: webdriver_url.to_string(),
            client: None,
        }
    }

    async fn client(&mut self) -> Result<&Client> {
        if self.client.is_none() {
            self.client = Some(connect_to_webdriver(&self.webdriver_url).await?);
        }
        self.client
            .as_ref()
            .ok_or_else(|| Error::WebDriverUnavailable(self.webdriver_url.clone()))
    }

    async fn navigate(&mut self, url: &Url) -> Result<String> {
        let client = self.client().await?;
        client.goto(url.as_str()).await?;
        Ok(client.source().await?)
    }
}

impl PageSource for WebDriverSource {
    async fn fetch(&mut self, url: &Url) -> Result<String> {
        let result = match timeout(PAGE_TIMEOUT, self.navigate(url)).await {
            Ok(result) => result,
            Err(_) => Err(Error::Timeout(url.to_string())),
        };

        if let Err(Error::WebDriver(e)) = &result {
            if e.to_string().contains("Unable to find session") {
                ::log::warn!("Lost WebDriver session while loading {}", url);
                self.client = None;
            }
        }
        result
    }

    async fn close(self) {
        if let Some(client) = self.client {
            if let Err(e) = client.close().await {
                ::log::warn!("Failed to close WebDriver client: {}", e);
            }
        }
    }
}

/// Connects to the WebDriver instance, falling back to common local ports
async fn connect_to_webdriver(webdriver_url: &str) -> Result<Client> {
    match ClientBuilder::native().connect(webdriver_url).await {
        Ok(client) => {
            ::log::debug!("Connected to WebDriver at {}", webdriver_url);
            return Ok(client);
        }
        Err(e) => {
            ::log::error!("Failed to connect to WebDriver at {}: {}", webdriver_url, e);
        }
    }

    let fallback_urls = [
        "http://localhost:9515", // ChromeDriver default
        "http://localhost:4723", // Appium default
        "http://localhost:9222", // Chrome debug port default
        "http://127.0.0.1:4444",
    ];

    for url in fallback_urls.iter().filter(|url| **url != webdriver_url) {
        ::log::info!("Trying fallback WebDriver URL: {}", url);
        if let Ok(client) = ClientBuilder::native().connect(url).await {
            ::log::debug!("Connected to fallback WebDriver at {}", url);
            return Ok(client);
        }
    }

    ::log::error!(
        "Make sure a WebDriver server is running or set the WEBDRIVER_URL environment variable"
    );
    Err(Error::WebDriverUnavailable(webdriver_url.to_string()))
}
