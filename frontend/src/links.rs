//! Outbound links to the DadTrack store listings.

pub const APP_STORE_URL: &str =
    "https://apps.apple.com/us/app/dadtrack-parenting-journal/id6757777807";

pub const GOOGLE_PLAY_URL: &str =
    "https://play.google.com/store/apps/details?id=dev.bengreene.dadtrack";

const WEBSITE_UTM_QUERY: &str =
    "utm_source=bengreene.dev&utm_medium=website&utm_campaign=dadtrack-launch";

/// App Store link tagged with the website campaign.
pub fn app_store_tracked() -> String {
    format!("{}?{}", APP_STORE_URL, WEBSITE_UTM_QUERY)
}

/// Google Play only forwards campaign data through `referrer`, which has to
/// carry the whole query URL-encoded.
pub fn google_play_tracked() -> String {
    format!(
        "{}&referrer={}",
        GOOGLE_PLAY_URL,
        urlencoding::encode(WEBSITE_UTM_QUERY)
    )
}
