use http::Uri;

pub static SITE_OWNER: &str = "Qitmeer Raza";
pub static SITE_TAGLINE: &str = "Frontend Web Developer | React, Next.js & JavaScript";

/// Remote origins the page is allowed to pull project screenshots from.
pub static ALLOWED_IMAGE_HOSTS: &[&str] = &["i.ibb.co"];

pub static GITHUB_URL: &str = "https://github.com/iamqitmeer";
pub static LINKEDIN_URL: &str = "#";
pub static MAIL_URL: &str = "#";

// stamped by build.rs
pub static BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn is_allowed_image(url: &str) -> bool {
    let Ok(uri) = url.parse::<Uri>() else {
        return false;
    };
    let scheme_ok = matches!(uri.scheme_str(), Some("https") | Some("http"));
    scheme_ok
        && uri
            .host()
            .is_some_and(|host| ALLOWED_IMAGE_HOSTS.contains(&host))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_image_hosts() {
        assert!(is_allowed_image("https://i.ibb.co/Vx7XrVB/main-screen.png"));
        assert!(is_allowed_image("http://i.ibb.co/weather.png"));

        assert!(!is_allowed_image("https://example.com/img.png"));
        assert!(!is_allowed_image("https://sub.i.ibb.co/img.png"));
        assert!(!is_allowed_image("ftp://i.ibb.co/img.png"));
        assert!(!is_allowed_image("/local/img.png"));
        assert!(!is_allowed_image("not a url"));
    }

    #[test]
    fn test_build_year_is_stamped() {
        assert_eq!(BUILD_YEAR.len(), 4);
        assert!(BUILD_YEAR.chars().all(|c| c.is_ascii_digit()));
    }
}
