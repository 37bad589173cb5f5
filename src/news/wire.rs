use serde::Deserialize;

/* RSS 2.0 as served by the headline feed; unknown elements are skipped. */

#[derive(Deserialize)]
pub(crate) struct Rss {
    pub(crate) channel: Option<Channel>,
}

#[derive(Deserialize)]
pub(crate) struct Channel {
    #[serde(default, rename = "item")]
    pub(crate) items: Vec<ItemNode>,
}

#[derive(Deserialize)]
pub(crate) struct ItemNode {
    pub(crate) title: Option<String>,
    pub(crate) link: Option<String>,
    pub(crate) description: Option<String>,
    #[serde(rename = "pubDate")]
    pub(crate) pub_date: Option<String>,
    pub(crate) guid: Option<GuidNode>,
}

#[derive(Deserialize)]
pub(crate) struct GuidNode {
    #[serde(rename = "$text")]
    pub(crate) value: Option<String>,
}
