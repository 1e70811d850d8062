use serde::Deserialize;

pub mod endpoints;
pub mod global;

#[derive(Deserialize, Debug)]
pub struct MidQueryString {
    #[serde(default)]
    pub mid: String,
}

#[derive(Deserialize, Debug)]
pub struct IdQueryString {
    #[serde(default)]
    pub id: String,
}

#[derive(Deserialize, Debug)]
pub struct TopDetailQueryString {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub period: String,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchQueryString {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub show_singer: String,
}

/// Collects every `mid` value, accepting `mid=a&mid=b`, `mid[]=a` and
/// `mid=a,b` alike.
pub fn collect_mids(pairs: &[(String, String)]) -> Vec<String> {
    pairs
        .iter()
        .filter(|(key, _)| key == "mid" || key == "mid[]")
        .flat_map(|(_, value)| value.split(','))
        .map(str::trim)
        .filter(|mid| !mid.is_empty())
        .map(str::to_string)
        .collect()
}
