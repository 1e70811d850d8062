use super::convert::{
    build_albums, build_hot_keys, build_sliders, build_top_list, build_url_map, group_singers,
    handle_search_songs, handle_song_list, has_more, search_singer,
};
use super::model::*;
use super::sign::Signer;
use crate::models::{
    ERR_OK, HotKeysResult, LyricResult, RecommendResult, Reply, SearchResult, SingerListResult,
    SongsResult, SongsUrlResult, TopListResult,
};
use crate::util::config::VendorConfig;
use crate::util::errors::ResolverError;
use crate::util::http::{Params, Transport};
use crate::util::random::{random_val, uid};
use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use futures::future::try_join_all;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

/// The vkey service refuses more mids than this per call.
pub const URL_BATCH_SIZE: usize = 100;
const SONG_PAGE_SIZE: u32 = 100;

fn is_ok(response: &Value) -> bool {
    response.get("code").and_then(Value::as_i64) == Some(ERR_OK)
}

/// Query values the vendor expects as numbers; anything unparsable is sent as null.
fn numeric(value: &str) -> Value {
    value.parse::<u64>().map(Value::from).unwrap_or(Value::Null)
}

pub struct QQMusic {
    transport: Arc<dyn Transport>,
    signer: Arc<dyn Signer>,
    config: VendorConfig,
}

impl QQMusic {
    pub fn new(
        transport: Arc<dyn Transport>,
        signer: Arc<dyn Signer>,
        config: VendorConfig,
    ) -> Self {
        Self {
            transport,
            signer,
            config,
        }
    }

    /// Signed query for the musics.fcg GET gateway.
    fn signed_params(&self, data: &Value, prefix: &str) -> Params {
        let data = data.to_string();
        let sign = self.signer.sign(&data);

        vec![("sign", sign), ("-", random_val(prefix)), ("data", data)]
    }

    /// Signed URL for the musics.fcg POST gateway.
    fn signed_url(&self, data: &Value) -> String {
        let sign = self.signer.sign(&data.to_string());
        format!("{}?_={}&sign={}", self.config.musics_url, random_val(""), sign)
    }

    fn h5_comm(&self) -> Value {
        json!({
            "g_tk": self.config.token,
            "uin": "0",
            "format": "json",
            "platform": "h5"
        })
    }

    pub async fn get_recommend(&self) -> Result<Reply<RecommendResult>, ResolverError> {
        let data = json!({
            "comm": { "ct": 24 },
            "recomPlaylist": {
                "method": "get_hot_recommend",
                "param": { "async": 1, "cmd": 2 },
                "module": "playlist.HotRecommendServer"
            },
            "focus": {
                "module": "music.musicHall.MusicHallPlatform",
                "method": "GetFocus",
                "param": {}
            }
        });

        let response = self
            .transport
            .get(&self.config.musics_url, self.signed_params(&data, "recom"))
            .await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: RecommendResponse = serde_json::from_value(response)?;
        let cards = body
            .focus
            .data
            .shelf
            .v_niche
            .first()
            .map(|niche| niche.v_card.as_slice())
            .ok_or(ResolverError::MissingRequiredData("focus.data.shelf.v_niche"))?;

        Ok(Reply::Ok(RecommendResult {
            sliders: build_sliders(cards),
            albums: build_albums(&body.recom_playlist.data.v_hot),
        }))
    }

    pub async fn get_singer_list(&self) -> Result<Reply<SingerListResult>, ResolverError> {
        let data = json!({
            "comm": { "ct": 24, "cv": 0 },
            "singerList": {
                "module": "Music.SingerListServer",
                "method": "get_singer_list",
                "param": {
                    "area": -100,
                    "sex": -100,
                    "genre": -100,
                    "index": -100,
                    "sin": 0,
                    "cur_page": 1
                }
            }
        });

        let response = self
            .transport
            .get(&self.config.musics_url, self.signed_params(&data, "getUCGI"))
            .await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: SingerListResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(SingerListResult {
            singers: group_singers(&body.singer_list.data.singerlist),
        }))
    }

    pub async fn get_singer_detail(&self, mid: &str) -> Result<Reply<SongsResult>, ResolverError> {
        let data = json!({
            "comm": { "ct": 24, "cv": 0 },
            "singerSongList": {
                "method": "GetSingerSongList",
                "param": { "order": 1, "singerMid": mid, "begin": 0, "num": SONG_PAGE_SIZE },
                "module": "musichall.song_list_server"
            }
        });

        let response = self
            .transport
            .get(
                &self.config.musics_url,
                self.signed_params(&data, "getSingerSong"),
            )
            .await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: SingerDetailResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(SongsResult {
            songs: handle_song_list(&body.singer_song_list.data.song_list),
        }))
    }

    async fn get_url_chunk(&self, mids: &[String]) -> Result<HashMap<String, String>, ResolverError> {
        let data = json!({
            "req_0": {
                "module": "vkey.GetVkeyServer",
                "method": "CgiGetVkey",
                "param": {
                    "guid": uid(),
                    "songmid": mids,
                    "songtype": vec![0; mids.len()],
                    "uin": "0",
                    "loginflag": 0,
                    "platform": "23",
                    "h5to": "speed"
                }
            },
            "comm": self.h5_comm()
        });

        let response = self.transport.post(&self.signed_url(&data), &data).await?;

        if !is_ok(&response) {
            let code = response.get("code").cloned().unwrap_or_default();
            tracing::warn!(
                "Vendor rejected a url batch of {} mids: {}",
                mids.len(),
                code
            );
            return Ok(HashMap::new());
        }

        let body: VkeyResponse = serde_json::from_value(response)?;

        Ok(build_url_map(&body.req_0.data))
    }

    /// Resolves playable URLs in batches, all batches in flight at once.
    /// A transport failure in any batch fails the whole lookup.
    pub async fn get_songs_url(&self, mids: &[String]) -> Result<Reply<SongsUrlResult>, ResolverError> {
        let requests = mids
            .chunks(URL_BATCH_SIZE)
            .map(|chunk| self.get_url_chunk(chunk));

        let maps = try_join_all(requests).await?;

        tracing::debug!(
            "Resolved song urls [Requested: {}] [Batches: {}]",
            mids.len(),
            maps.len()
        );

        let map = maps.into_iter().flatten().collect();

        Ok(Reply::Ok(SongsUrlResult { map }))
    }

    pub async fn get_lyric(&self, mid: &str) -> Result<Reply<LyricResult>, ResolverError> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default();

        let params = vec![
            ("-", "MusicJsonCallback_lrc".to_string()),
            ("pcachetime", now.to_string()),
            ("songmid", mid.to_string()),
            ("g_tk_new_20200303", self.config.token.to_string()),
        ];

        let response = self.transport.get(&self.config.lyric_url, params).await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: LyricResponse = serde_json::from_value(response)?;
        let lyric = String::from_utf8(BASE64_STANDARD.decode(body.lyric)?)?;

        Ok(Reply::Ok(LyricResult { lyric }))
    }

    pub async fn get_album(&self, id: &str) -> Result<Reply<SongsResult>, ResolverError> {
        let data = json!({
            "req_0": {
                "module": "srf_diss_info.DissInfoServer",
                "method": "CgiGetDiss",
                "param": {
                    "disstid": numeric(id),
                    "onlysonglist": 1,
                    "song_begin": 0,
                    "song_num": SONG_PAGE_SIZE
                }
            },
            "comm": self.h5_comm()
        });

        let response = self.transport.post(&self.signed_url(&data), &data).await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: AlbumResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(SongsResult {
            songs: handle_song_list(&body.req_0.data.songlist),
        }))
    }

    pub async fn get_top_list(&self) -> Result<Reply<TopListResult>, ResolverError> {
        let data = json!({
            "comm": { "ct": 24 },
            "toplist": {
                "module": "musicToplist.ToplistInfoServer",
                "method": "GetAll",
                "param": {}
            }
        });

        let response = self
            .transport
            .get(&self.config.musics_url, self.signed_params(&data, "recom"))
            .await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: TopListResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(TopListResult {
            top_list: build_top_list(&body.toplist.data.group),
        }))
    }

    pub async fn get_top_detail(
        &self,
        id: &str,
        period: &str,
    ) -> Result<Reply<SongsResult>, ResolverError> {
        let data = json!({
            "detail": {
                "module": "musicToplist.ToplistInfoServer",
                "method": "GetDetail",
                "param": {
                    "topId": numeric(id),
                    "offset": 0,
                    "num": SONG_PAGE_SIZE,
                    "period": period
                }
            },
            "comm": { "ct": 24, "cv": 0 }
        });

        let response = self
            .transport
            .get(&self.config.musics_url, self.signed_params(&data, "getUCGI"))
            .await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: TopDetailResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(SongsResult {
            songs: handle_song_list(&body.detail.data.song_info_list),
        }))
    }

    pub async fn get_hot_keys(&self) -> Result<Reply<HotKeysResult>, ResolverError> {
        let params = vec![("g_tk_new_20200303", self.config.token.to_string())];

        let response = self.transport.get(&self.config.hot_key_url, params).await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: HotKeyResponse = serde_json::from_value(response)?;

        Ok(Reply::Ok(HotKeysResult {
            hot_keys: build_hot_keys(&body.data.hotkey),
        }))
    }

    pub async fn search(
        &self,
        query: &str,
        page: &str,
        show_singer: bool,
    ) -> Result<Reply<SearchResult>, ResolverError> {
        let params = vec![
            ("_", random_val("")),
            ("g_tk_new_20200303", self.config.token.to_string()),
            ("w", query.to_string()),
            ("p", page.to_string()),
            ("perpage", "20".to_string()),
            ("n", "20".to_string()),
            ("zhidaqu", "1".to_string()),
            ("catZhida", if show_singer { "1" } else { "0" }.to_string()),
            ("t", "0".to_string()),
            ("flag", "1".to_string()),
            ("ie", "utf-8".to_string()),
            ("sem", "1".to_string()),
            ("aggr", "0".to_string()),
            ("remoteplace", "txt.mqq.all".to_string()),
            ("uin", "0".to_string()),
            ("needNewCode", "1".to_string()),
            ("platform", "h5".to_string()),
            ("format", "json".to_string()),
        ];

        let response = self.transport.get(&self.config.search_url, params).await?;

        if !is_ok(&response) {
            return Ok(Reply::Vendor(response));
        }

        let body: SearchResponse = serde_json::from_value(response)?;
        let page = &body.data.song;

        Ok(Reply::Ok(SearchResult {
            songs: handle_search_songs(&page.list),
            singer: search_singer(body.data.zhida.as_ref()),
            has_more: has_more(page.curpage, page.curnum, page.totalnum),
        }))
    }
}
