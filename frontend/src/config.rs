//! Build-time site configuration.
//!
//! A static bundle has no runtime config source, so values are baked in when
//! the WASM is compiled: `WEBHOOK_URL=... BASE_PATH=/bengreene.dev trunk build`.

/// Spreadsheet webhook that receives form submissions. `None` puts the forms
/// in local mode, where submissions are logged and reported as successful.
pub fn webhook_url() -> Option<&'static str> {
    non_empty(option_env!("WEBHOOK_URL"))
}

/// Path prefix when the site is served from a subdirectory, e.g. a project
/// page on GitHub Pages. Empty when served from the domain root.
pub fn base_path() -> &'static str {
    non_empty(option_env!("BASE_PATH")).unwrap_or("")
}

pub fn router_basename() -> Option<&'static str> {
    non_empty(option_env!("BASE_PATH"))
}

/// Full path of a static asset, accounting for the base path.
pub fn asset_path(path: &str) -> String {
    join_asset_path(base_path(), path)
}

fn join_asset_path(base: &str, path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    };
    format!("{}{}", base.trim_end_matches('/'), path)
}

fn non_empty(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
