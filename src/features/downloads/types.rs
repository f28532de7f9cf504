use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize)]
/// Download endpoints as the server sees this client. `lan_download_url` is
/// only present when the request originated from the server's own network.
pub struct ClientDownloadInfo {
    pub lan_available: bool,
    pub lan_download_url: Option<String>,
    pub public_download_url: Option<String>,
}

impl ClientDownloadInfo {
    pub fn has_any_url(&self) -> bool {
        self.lan_download_url.is_some() || self.public_download_url.is_some()
    }
}

/// Archive name shown on the download buttons, taken from the last path
/// segment of the URL. URLs without a path fall back to a generic name.
pub fn file_name_from_url(url: &str) -> String {
    let without_suffix = url.split(['?', '#']).next().unwrap_or_default();
    let after_scheme = without_suffix
        .split_once("://")
        .map_or(without_suffix, |(_, rest)| rest);
    let name = after_scheme
        .split_once('/')
        .map(|(_, path)| path.trim_end_matches('/'))
        .and_then(|path| path.rsplit('/').next())
        .unwrap_or_default();
    if name.is_empty() {
        "Client.zip".to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_comes_from_the_path() {
        assert_eq!(
            file_name_from_url("http://192.168.1.5/wow/Client-3.3.5a.zip"),
            "Client-3.3.5a.zip"
        );
        assert_eq!(
            file_name_from_url("https://cdn.realms.example/client.zip?sig=abc"),
            "client.zip"
        );
        assert_eq!(file_name_from_url("/files/wotlk-client.zip"), "wotlk-client.zip");
    }

    #[test]
    fn bare_hosts_fall_back_to_default() {
        assert_eq!(file_name_from_url("http://192.168.1.5/"), "Client.zip");
        assert_eq!(file_name_from_url("http://192.168.1.5"), "Client.zip");
        assert_eq!(file_name_from_url(""), "Client.zip");
    }

    #[test]
    fn has_any_url_checks_both_slots() {
        let info = ClientDownloadInfo {
            lan_available: false,
            lan_download_url: None,
            public_download_url: None,
        };
        assert!(!info.has_any_url());

        let info = ClientDownloadInfo {
            public_download_url: Some("https://cdn.realms.example/client.zip".to_string()),
            ..info
        };
        assert!(info.has_any_url());
    }
}
