//! Static asset paths.

/// Brand icon shown in the hero, relative to the public base path.
pub const TRIP_ICON: &str = "assets/trip-icon.svg";

/// Join the public base path and an asset path with a single `/`.
///
/// An empty base yields a root-relative URL.
pub fn asset_url(base: &str, relative: &str) -> String {
    let base = base.trim_end_matches('/');
    let relative = relative.trim_start_matches('/');
    format!("{}/{}", base, relative)
}
