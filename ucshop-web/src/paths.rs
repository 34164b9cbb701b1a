//! Helpers for constructing URLs to static assets that respect the deployment base path.
///
/// When `PUBLIC_URL` is set at compile time (e.g., `/shop` for GitHub Pages),
/// generated URLs are prefixed accordingly. Local builds without `PUBLIC_URL`
/// fall back to root-anchored paths.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    asset_path_with_base(relative, option_env!("PUBLIC_URL").unwrap_or(""))
}

fn asset_path_with_base(relative: &str, base: &str) -> String {
    let base = base.trim_end_matches('/');
    let rel = relative.trim_start_matches('/');

    if base.is_empty() {
        format!("/{rel}")
    } else {
        format!("{base}/{rel}")
    }
}

#[cfg(test)]
mod tests {
    use super::{asset_path, asset_path_with_base};

    #[test]
    fn builds_root_prefixed_path_when_base_missing() {
        assert_eq!(asset_path("static/img/logo.svg"), "/static/img/logo.svg");
        assert_eq!(asset_path("/static/img/logo.svg"), "/static/img/logo.svg");
    }

    #[test]
    fn builds_paths_with_public_base() {
        assert_eq!(
            asset_path_with_base("static/img/logo.svg", "/shop/"),
            "/shop/static/img/logo.svg"
        );
    }
}
