use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct Data<T> {
    pub data: T,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SingerName {
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct AlbumRef {
    #[serde(default)]
    pub mid: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Pay {
    #[serde(default)]
    pub pay_play: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SongInfo {
    pub id: u64,
    pub mid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub singer: Option<Vec<SingerName>>,
    #[serde(default)]
    pub album: AlbumRef,
    #[serde(default)]
    pub pay: Option<Pay>,
}

/// Song list entries come either bare or wrapped in a `songInfo` envelope
/// depending on the endpoint.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum SongListItem {
    Wrapped {
        #[serde(rename = "songInfo")]
        song_info: SongInfo,
    },
    Plain(SongInfo),
}

impl SongListItem {
    pub fn info(&self) -> &SongInfo {
        match self {
            SongListItem::Wrapped { song_info } => song_info,
            SongListItem::Plain(info) => info,
        }
    }
}

// recommend

#[derive(Debug, Deserialize)]
pub struct FocusCard {
    pub id: Value,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub jumptype: i64,
    #[serde(default)]
    pub subid: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct FocusNiche {
    #[serde(default)]
    pub v_card: Vec<FocusCard>,
}

#[derive(Debug, Deserialize)]
pub struct FocusShelf {
    #[serde(default)]
    pub v_niche: Vec<FocusNiche>,
}

#[derive(Debug, Deserialize)]
pub struct FocusData {
    pub shelf: FocusShelf,
}

#[derive(Debug, Deserialize)]
pub struct HotPlaylist {
    pub content_id: u64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
}

#[derive(Debug, Deserialize)]
pub struct HotRecommendData {
    #[serde(default)]
    pub v_hot: Vec<HotPlaylist>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub focus: Data<FocusData>,
    pub recom_playlist: Data<HotRecommendData>,
}

// singer list

#[derive(Debug, Deserialize, Clone)]
pub struct SingerListEntry {
    pub singer_id: u64,
    pub singer_mid: String,
    #[serde(default)]
    pub singer_name: String,
    #[serde(default)]
    pub singer_pic: String,
}

#[derive(Debug, Deserialize)]
pub struct SingerListData {
    #[serde(default)]
    pub singerlist: Vec<SingerListEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingerListResponse {
    pub singer_list: Data<SingerListData>,
}

// singer detail

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingerSongListData {
    #[serde(default)]
    pub song_list: Vec<SongListItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SingerDetailResponse {
    pub singer_song_list: Data<SingerSongListData>,
}

// songs url

#[derive(Debug, Deserialize)]
pub struct MidUrlInfo {
    pub songmid: String,
    #[serde(default)]
    pub purl: String,
}

#[derive(Debug, Deserialize)]
pub struct VkeyData {
    #[serde(default)]
    pub midurlinfo: Vec<MidUrlInfo>,
    #[serde(default)]
    pub sip: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct VkeyResponse {
    pub req_0: Data<VkeyData>,
}

// lyric

#[derive(Debug, Deserialize)]
pub struct LyricResponse {
    #[serde(default)]
    pub lyric: String,
}

// album

#[derive(Debug, Deserialize)]
pub struct DissData {
    #[serde(default)]
    pub songlist: Vec<SongListItem>,
}

#[derive(Debug, Deserialize)]
pub struct AlbumResponse {
    pub req_0: Data<DissData>,
}

// top list

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopSongEntry {
    pub song_id: u64,
    #[serde(default)]
    pub singer_name: String,
    #[serde(default)]
    pub title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopListEntry {
    pub top_id: u64,
    #[serde(default)]
    pub front_pic_url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub song: Vec<TopSongEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TopListGroup {
    #[serde(default)]
    pub toplist: Vec<TopListEntry>,
}

#[derive(Debug, Deserialize)]
pub struct TopListData {
    #[serde(default)]
    pub group: Vec<TopListGroup>,
}

#[derive(Debug, Deserialize)]
pub struct TopListResponse {
    pub toplist: Data<TopListData>,
}

// top detail

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopDetailData {
    #[serde(default)]
    pub song_info_list: Vec<SongListItem>,
}

#[derive(Debug, Deserialize)]
pub struct TopDetailResponse {
    pub detail: Data<TopDetailData>,
}

// hot keys

#[derive(Debug, Deserialize)]
pub struct HotKeyEntry {
    #[serde(default)]
    pub k: String,
    #[serde(default)]
    pub n: u64,
}

#[derive(Debug, Deserialize)]
pub struct HotKeyData {
    #[serde(default)]
    pub hotkey: Vec<HotKeyEntry>,
}

#[derive(Debug, Deserialize)]
pub struct HotKeyResponse {
    pub data: HotKeyData,
}

// search

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SearchPay {
    #[serde(default)]
    pub payplay: Option<i64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchSong {
    pub songid: u64,
    pub songmid: String,
    #[serde(default)]
    pub songname: String,
    #[serde(default)]
    pub interval: Option<u32>,
    #[serde(default)]
    pub singer: Option<Vec<SingerName>>,
    #[serde(default)]
    pub albummid: String,
    #[serde(default)]
    pub albumname: String,
    #[serde(default)]
    pub pay: Option<SearchPay>,
}

#[derive(Debug, Deserialize)]
pub struct SearchSongPage {
    #[serde(default)]
    pub list: Vec<SearchSong>,
    #[serde(default)]
    pub curnum: u64,
    #[serde(default)]
    pub curpage: u64,
    #[serde(default)]
    pub totalnum: u64,
}

#[derive(Debug, Deserialize)]
pub struct Zhida {
    #[serde(rename = "type", default)]
    pub kind: i64,
    #[serde(default)]
    pub singerid: u64,
    #[serde(default)]
    pub singermid: String,
    #[serde(default)]
    pub singername: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub song: SearchSongPage,
    #[serde(default)]
    pub zhida: Option<Zhida>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub data: SearchData,
}
