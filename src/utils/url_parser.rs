use reqwest::Url;

/// Host (and port, when not the scheme default) of a base URL, for display
/// in the page header. Unparseable input yields "".
pub fn hostname_from_url(u: &str) -> String {
    let Ok(url) = Url::parse(u.trim()) else {
        return String::new();
    };
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_explicit_port() {
        assert_eq!(hostname_from_url("http://localhost:8000/api"), "localhost:8000");
        assert_eq!(hostname_from_url("https://deploy.example.com/"), "deploy.example.com");
        assert_eq!(hostname_from_url("not a url"), "");
    }
}
