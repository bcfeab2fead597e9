/// Base path the app is served from, set at build time through
/// `TRIP_TRACKER_PUBLIC_URL`. Empty means the site root.
pub const PUBLIC_URL: &str = match option_env!("TRIP_TRACKER_PUBLIC_URL") {
    Some(url) => url,
    None => "",
};

/// URL of a bundled static asset.
pub fn asset(relative: &str) -> String {
    trip_core::assets::asset_url(PUBLIC_URL, relative)
}
