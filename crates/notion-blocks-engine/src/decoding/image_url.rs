use std::borrow::Cow;

/// Host that serves documents and the image proxy.
pub const DEFAULT_ASSET_HOST: &str = "https://www.notion.so";

const SECURE_SCHEME: &str = "https://";
const PROXY_PATH: &str = "/image/";

/// Rewrites media sources into URLs served through the host's `/image/` proxy.
///
/// Proxied URLs are reachable even when the original storage URL is not,
/// and accept `?width=N` for resizing.
///
/// ```text
/// /images/page-cover/met_vincent_van_gogh_cradle.jpg
/// => https://www.notion.so/image/https%3A%2F%2Fwww.notion.so%2Fimages%2Fpage-cover%2Fmet_vincent_van_gogh_cradle.jpg
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageProxy {
    host: String,
}

impl Default for ImageProxy {
    fn default() -> Self {
        Self::new(DEFAULT_ASSET_HOST)
    }
}

impl ImageProxy {
    pub fn new(host: impl Into<String>) -> Self {
        let mut host = host.into();
        while host.ends_with('/') {
            host.pop();
        }
        Self { host }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// `https://host/image/`
    pub fn prefix(&self) -> String {
        format!("{}{PROXY_PATH}", self.host)
    }

    /// Whether `uri` already points at this host's proxy, whatever its scheme.
    pub fn is_proxied(&self, uri: &str) -> bool {
        let authority = self
            .host
            .split_once("//")
            .map(|(_, rest)| rest)
            .unwrap_or(&self.host);
        uri.contains(&format!("//{authority}{PROXY_PATH}"))
    }

    /// Canonical proxied URL for `uri`. Empty and already-proxied input is
    /// returned unchanged; anything without `https://` is resolved against
    /// the host first.
    pub fn make_image_url(&self, uri: &str) -> String {
        if uri.is_empty() || self.is_proxied(uri) {
            return uri.to_string();
        }
        let absolute: Cow<'_, str> = if uri.starts_with(SECURE_SCHEME) {
            Cow::Borrowed(uri)
        } else if uri.starts_with('/') {
            Cow::Owned(format!("{}{uri}", self.host))
        } else {
            Cow::Owned(format!("{}/{uri}", self.host))
        };
        format!("{}{}", self.prefix(), urlencoding::encode(&absolute))
    }
}

/// [`ImageProxy::make_image_url`] against the default host.
pub fn make_image_url(uri: &str) -> String {
    ImageProxy::default().make_image_url(uri)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn relative_cover_is_resolved_against_host() {
        assert_eq!(
            make_image_url("/images/page-cover/met_vincent_van_gogh_cradle.jpg"),
            "https://www.notion.so/image/https%3A%2F%2Fwww.notion.so%2Fimages%2Fpage-cover%2Fmet_vincent_van_gogh_cradle.jpg"
        );
    }

    #[test]
    fn absolute_source_is_proxied() {
        assert_eq!(
            make_image_url("https://img.example.com/a.png"),
            "https://www.notion.so/image/https%3A%2F%2Fimg.example.com%2Fa.png"
        );
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(make_image_url(""), "");
    }

    #[rstest]
    #[case("/images/page-cover/met_vincent_van_gogh_cradle.jpg")]
    #[case("https://img.example.com/a.png")]
    #[case("https://s3-us-west-2.amazonaws.com/secure.notion-static.com/x/Screen Shot.png")]
    #[case("images/no-leading-slash.png")]
    fn normalizing_twice_is_stable(#[case] uri: &str) {
        let once = make_image_url(uri);
        assert_eq!(make_image_url(&once), once);
    }

    #[test]
    fn spaces_and_queries_are_escaped() {
        let url = make_image_url("https://img.example.com/a b.png?v=1");
        assert_eq!(
            url,
            "https://www.notion.so/image/https%3A%2F%2Fimg.example.com%2Fa%20b.png%3Fv%3D1"
        );
    }

    #[test]
    fn insecure_source_is_treated_as_relative() {
        assert_eq!(
            make_image_url("images/x.png"),
            "https://www.notion.so/image/https%3A%2F%2Fwww.notion.so%2Fimages%2Fx.png"
        );
    }

    #[test]
    fn custom_host() {
        let proxy = ImageProxy::new("https://notes.example.org/");
        assert_eq!(proxy.host(), "https://notes.example.org");
        assert_eq!(
            proxy.make_image_url("/a.png"),
            "https://notes.example.org/image/https%3A%2F%2Fnotes.example.org%2Fa.png"
        );
        assert!(proxy.is_proxied("http://notes.example.org/image/whatever"));
        assert!(!proxy.is_proxied("https://www.notion.so/image/whatever"));
    }
}
