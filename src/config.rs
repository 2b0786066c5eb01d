use log::Level;

// The one asset this whole page exists to sell.
pub const DOMAIN: &str = "jeet.ing";

// Apps Script collector for inquiry payloads. It only accepts opaque
// no-cors posts, so callers never see a readable response.
pub const INQUIRY_ENDPOINT: &str =
    "https://script.google.com/macros/s/AKfycbzo9k25EkNhoSiqhtkV4xcGNwEkDpPnGXqLt4rzJ7onrua2_fEb0fYsWHRyvxu-Ivbp/exec";

// Marketplace search page handling the direct purchase and escrow.
pub fn marketplace_search_url() -> String {
    format!(
        "https://www.spaceship.com/domain-search/?query={}&beast=false&tab=domains",
        urlencoding::encode(DOMAIN)
    )
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marketplace_url_encodes_the_domain_query() {
        assert_eq!(
            marketplace_search_url(),
            "https://www.spaceship.com/domain-search/?query=jeet.ing&beast=false&tab=domains",
        );
    }
}
