use serde::{Deserialize, Serialize};

/// Campaign attribution carried from landing pages into the application link.
/// Values are passed along exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CampaignParams {
    pub utm_source: String,
    pub utm_medium: String,
    pub utm_campaign: String,
    pub utm_content: String,
}

impl CampaignParams {
    pub fn pairs(&self) -> [(&'static str, &str); 4] {
        [
            ("utm_source", &self.utm_source),
            ("utm_medium", &self.utm_medium),
            ("utm_campaign", &self.utm_campaign),
            ("utm_content", &self.utm_content),
        ]
    }
}

/// Query string accepted by page routes: `?property=<id-or-slug>&room=<id>` plus attribution.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageQuery {
    pub property: Option<String>,
    pub room: Option<String>,
    #[serde(flatten)]
    pub campaign: CampaignParams,
}
