use rand_agents::user_agent;
use reqwest::header::{
    ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, HeaderMap, HeaderValue,
    InvalidHeaderValue, ORIGIN, PRAGMA, REFERER, USER_AGENT,
};

/// Headers attached to every vendor request. The vendor rejects calls whose
/// origin/referer do not point back at its own web player.
pub fn generate_headers(origin: &str) -> Result<HeaderMap<HeaderValue>, InvalidHeaderValue> {
    let mut headers = HeaderMap::new();

    let user_agent = user_agent();

    headers.insert(CONNECTION, "keep-alive".parse()?);
    headers.insert(CACHE_CONTROL, "no-cache".parse()?);
    headers.insert(ACCEPT, "application/json, text/plain, */*".parse()?);
    headers.insert(USER_AGENT, user_agent.parse()?);
    headers.insert(ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9,en;q=0.8".parse()?);
    headers.insert(PRAGMA, "no-cache".parse()?);
    headers.insert(REFERER, origin.parse()?);
    headers.insert(ORIGIN, origin.parse()?);

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_and_referer_point_at_vendor() {
        let headers = generate_headers("https://y.qq.com/").unwrap();

        assert_eq!(headers[REFERER], "https://y.qq.com/");
        assert_eq!(headers[ORIGIN], "https://y.qq.com/");
        assert!(headers.contains_key(USER_AGENT));
    }
}
