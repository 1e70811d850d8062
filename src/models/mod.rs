use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

pub const ERR_OK: i64 = 0;

#[derive(Serialize, Debug)]
pub struct ApiResponse<T: Serialize> {
    pub code: i64,
    pub result: T,
}

/// Either a reshaped result or the vendor's own error payload, which is
/// forwarded untouched.
#[derive(Debug)]
pub enum Reply<T: Serialize> {
    Ok(T),
    Vendor(Value),
}

impl<T: Serialize> IntoResponse for Reply<T> {
    fn into_response(self) -> Response {
        match self {
            Reply::Ok(result) => Json(ApiResponse {
                code: ERR_OK,
                result,
            })
            .into_response(),
            Reply::Vendor(raw) => Json(raw).into_response(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Song {
    pub id: u64,
    pub mid: String,
    pub name: String,
    pub singer: String,
    pub url: String,
    pub duration: u32,
    pub pic: String,
    pub album: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Singer {
    pub id: u64,
    pub mid: String,
    pub name: String,
    pub pic: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SingerGroup {
    pub title: String,
    pub list: Vec<Singer>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Slider {
    pub id: Value,
    pub pic: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Value>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RecommendAlbum {
    pub id: u64,
    pub username: String,
    pub title: String,
    pub pic: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopSong {
    pub id: u64,
    pub singer_name: String,
    pub song_name: String,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TopList {
    pub id: u64,
    pub pic: String,
    pub name: String,
    pub period: String,
    pub song_list: Vec<TopSong>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct HotKey {
    pub key: String,
    pub id: u64,
}

#[derive(Serialize, Debug)]
pub struct RecommendResult {
    pub sliders: Vec<Slider>,
    pub albums: Vec<RecommendAlbum>,
}

#[derive(Serialize, Debug)]
pub struct SingerListResult {
    pub singers: Vec<SingerGroup>,
}

#[derive(Serialize, Debug)]
pub struct SongsResult {
    pub songs: Vec<Song>,
}

#[derive(Serialize, Debug)]
pub struct SongsUrlResult {
    pub map: HashMap<String, String>,
}

#[derive(Serialize, Debug)]
pub struct LyricResult {
    pub lyric: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct TopListResult {
    pub top_list: Vec<TopList>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct HotKeysResult {
    pub hot_keys: Vec<HotKey>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub songs: Vec<Song>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub singer: Option<Singer>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use serde_json::json;

    fn song(id: u64) -> Song {
        Song {
            id,
            mid: format!("mid{id}"),
            name: "name".to_string(),
            singer: "a/b".to_string(),
            url: String::new(),
            duration: 120,
            pic: "pic".to_string(),
            album: "album".to_string(),
        }
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn ok_reply_wraps_result_with_code() {
        let reply = Reply::Ok(SongsResult {
            songs: vec![song(1)],
        });

        let response = reply.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(
            body_json(response).await,
            json!({
                "code": 0,
                "result": {
                    "songs": [{
                        "id": 1, "mid": "mid1", "name": "name", "singer": "a/b",
                        "url": "", "duration": 120, "pic": "pic", "album": "album"
                    }]
                }
            })
        );
    }

    #[tokio::test]
    async fn vendor_reply_is_forwarded_as_is() {
        let raw = json!({ "code": 2001, "msg": "bad sign", "subcode": 3 });

        let response = Reply::<SongsResult>::Vendor(raw.clone()).into_response();
        assert_eq!(response.status(), StatusCode::OK);

        assert_eq!(body_json(response).await, raw);
    }

    #[test]
    fn search_result_uses_camel_case_and_omits_missing_singer() {
        let without_singer = serde_json::to_value(SearchResult {
            songs: vec![],
            singer: None,
            has_more: true,
        })
        .unwrap();

        assert_eq!(without_singer, json!({ "songs": [], "hasMore": true }));

        let with_singer = serde_json::to_value(SearchResult {
            songs: vec![],
            singer: Some(Singer {
                id: 5,
                mid: "sm".to_string(),
                name: "S".to_string(),
                pic: "p".to_string(),
            }),
            has_more: false,
        })
        .unwrap();

        assert_eq!(
            with_singer["singer"],
            json!({ "id": 5, "mid": "sm", "name": "S", "pic": "p" })
        );
        assert_eq!(with_singer["hasMore"], false);
    }

    #[test]
    fn top_list_keys_match_frontend() {
        let value = serde_json::to_value(TopListResult {
            top_list: vec![TopList {
                id: 26,
                pic: "p".to_string(),
                name: "Hot".to_string(),
                period: "2024_42".to_string(),
                song_list: vec![TopSong {
                    id: 1,
                    singer_name: "A".to_string(),
                    song_name: "T".to_string(),
                }],
            }],
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "topList": [{
                    "id": 26, "pic": "p", "name": "Hot", "period": "2024_42",
                    "songList": [{ "id": 1, "singerName": "A", "songName": "T" }]
                }]
            })
        );
    }

    #[test]
    fn hot_keys_key_matches_frontend() {
        let value = serde_json::to_value(HotKeysResult {
            hot_keys: vec![HotKey {
                key: "k".to_string(),
                id: 3,
            }],
        })
        .unwrap();

        assert_eq!(value, json!({ "hotKeys": [{ "key": "k", "id": 3 }] }));
    }

    #[test]
    fn slider_link_is_omitted_when_absent() {
        let without_link = serde_json::to_value(Slider {
            id: json!(1),
            pic: "p".to_string(),
            link: None,
        })
        .unwrap();
        let with_link = serde_json::to_value(Slider {
            id: json!(2),
            pic: "p".to_string(),
            link: Some(json!("https://y.qq.com/n/yqq/album/a.html")),
        })
        .unwrap();

        assert_eq!(without_link, json!({ "id": 1, "pic": "p" }));
        assert_eq!(with_link["link"], "https://y.qq.com/n/yqq/album/a.html");
    }

    #[test]
    fn songs_url_result_is_keyed_by_mid() {
        let value = serde_json::to_value(SongsUrlResult {
            map: HashMap::from([("m1".to_string(), "http://d/p1".to_string())]),
        })
        .unwrap();

        assert_eq!(value, json!({ "map": { "m1": "http://d/p1" } }));
    }
}
