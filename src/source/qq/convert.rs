use super::model::{
    FocusCard, HotKeyEntry, HotPlaylist, SearchSong, SingerListEntry, SingerName, SongListItem,
    TopListGroup, VkeyData, Zhida,
};
use crate::models::{HotKey, RecommendAlbum, Singer, SingerGroup, Slider, Song, TopList, TopSong};
use pinyin::ToPinyin;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};

pub const FALLBACK_PIC_URL: &str =
    "https://y.gtimg.cn/mediastyle/music_v11/extra/default_300x300.jpg?max_age=31536000";
pub const HOT_NAME: &str = "熱";
pub const HOT_SINGER_COUNT: usize = 10;
pub const MAX_SLIDERS: usize = 10;
pub const MAX_HOT_KEYS: usize = 10;
pub const SEARCH_PAGE_SIZE: i64 = 20;

fn album_pic(album_mid: &str) -> String {
    if album_mid.is_empty() {
        return FALLBACK_PIC_URL.to_string();
    }
    format!("https://y.gtimg.cn/music/photo_new/T002R800x800M000{album_mid}.jpg?max_age=2592000")
}

fn singer_pic(singer_mid: &str) -> String {
    format!("https://y.gtimg.cn/music/photo_new/T001R800x800M000{singer_mid}.jpg?max_age=2592000")
}

/// Joins every singer's display name with `/`.
pub fn merge_singer(singer: Option<&[SingerName]>) -> String {
    singer
        .map(|list| {
            list.iter()
                .map(|s| s.name.as_str())
                .collect::<Vec<_>>()
                .join("/")
        })
        .unwrap_or_default()
}

/// Drops pay-gated and duration-less tracks, then maps the rest into the
/// app's song shape. A missing pay flag counts as pay-gated.
pub fn handle_song_list(list: &[SongListItem]) -> Vec<Song> {
    list.iter()
        .map(SongListItem::info)
        .filter_map(|info| {
            let free = info.pay.as_ref().and_then(|pay| pay.pay_play) == Some(0);
            let duration = info.interval.filter(|&interval| interval != 0)?;
            free.then_some((info, duration))
        })
        .map(|(info, duration)| Song {
            id: info.id,
            mid: info.mid.clone(),
            name: info.name.clone(),
            singer: merge_singer(info.singer.as_deref()),
            url: String::new(),
            duration,
            pic: album_pic(&info.album.mid),
            album: info.album.name.clone(),
        })
        .collect()
}

/// Search results use a flatter song shape but the same filter and pictures.
pub fn handle_search_songs(list: &[SearchSong]) -> Vec<Song> {
    list.iter()
        .filter_map(|info| {
            let free = info.pay.as_ref().and_then(|pay| pay.payplay) == Some(0);
            let duration = info.interval.filter(|&interval| interval != 0)?;
            free.then_some((info, duration))
        })
        .map(|(info, duration)| Song {
            id: info.songid,
            mid: info.songmid.clone(),
            name: info.songname.clone(),
            singer: merge_singer(info.singer.as_deref()),
            url: String::new(),
            duration,
            pic: album_pic(&info.albummid),
            album: info.albumname.clone(),
        })
        .collect()
}

/// Only a direct singer hit (`type == 2`) is surfaced.
pub fn search_singer(zhida: Option<&Zhida>) -> Option<Singer> {
    let zhida = zhida.filter(|zhida| zhida.kind == 2)?;

    Some(Singer {
        id: zhida.singerid,
        mid: zhida.singermid.clone(),
        name: zhida.singername.clone(),
        pic: singer_pic(&zhida.singermid),
    })
}

pub fn has_more(curpage: u64, curnum: u64, totalnum: u64) -> bool {
    SEARCH_PAGE_SIZE * (curpage as i64 - 1) + (curnum as i64) < totalnum as i64
}

fn jump_prefix(jumptype: i64) -> Option<&'static str> {
    match jumptype {
        10002 => Some("https://y.qq.com/n/yqq/album/"),
        10014 => Some("https://y.qq.com/n/yqq/playlist/"),
        10012 => Some("https://y.qq.com/n/yqq/mv/v/"),
        _ => None,
    }
}

fn value_to_segment(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::String(s) => s.is_empty(),
        Value::Number(n) => n.as_f64() == Some(0.0),
        _ => false,
    }
}

pub fn build_sliders(cards: &[FocusCard]) -> Vec<Slider> {
    cards
        .iter()
        .take(MAX_SLIDERS)
        .map(|card| {
            let link = if let Some(prefix) = jump_prefix(card.jumptype) {
                let target = card
                    .subid
                    .as_ref()
                    .filter(|subid| !is_falsy(subid))
                    .unwrap_or(&card.id);
                Some(Value::String(format!(
                    "{prefix}{}.html",
                    value_to_segment(target)
                )))
            } else if card.jumptype == 3001 {
                Some(card.id.clone())
            } else {
                None
            };

            Slider {
                id: card.id.clone(),
                pic: card.cover.clone(),
                link,
            }
        })
        .collect()
}

pub fn build_albums(list: &[HotPlaylist]) -> Vec<RecommendAlbum> {
    list.iter()
        .map(|item| RecommendAlbum {
            id: item.content_id,
            username: item.username.clone(),
            title: item.title.clone(),
            pic: item.cover.clone(),
        })
        .collect()
}

/// `.webp` thumbnails become 800px jpegs.
pub fn normalize_singer_pic(pic: &str) -> String {
    let pic = match pic.strip_suffix(".webp") {
        Some(stem) => format!("{stem}.jpg"),
        None => pic.to_string(),
    };
    pic.replacen("150x150", "800x800", 1)
}

fn map_singer(entry: &SingerListEntry) -> Singer {
    Singer {
        id: entry.singer_id,
        mid: entry.singer_mid.clone(),
        name: entry.singer_name.clone(),
        pic: normalize_singer_pic(&entry.singer_pic),
    }
}

/// Uppercase initial of the name's first syllable; non-Chinese names use
/// their own first character.
pub fn singer_initial(name: &str) -> Option<char> {
    let first = name.chars().next()?;
    let initial = match first.to_pinyin() {
        Some(pinyin) => pinyin.plain().chars().next()?,
        None => first,
    };
    initial.to_uppercase().next()
}

/// Hot group first, then one group per ASCII letter in ascending order.
/// Singers whose initial is not a letter are left out of the letter groups.
pub fn group_singers(list: &[SingerListEntry]) -> Vec<SingerGroup> {
    let hot = SingerGroup {
        title: HOT_NAME.to_string(),
        list: list.iter().take(HOT_SINGER_COUNT).map(map_singer).collect(),
    };

    let mut letters: BTreeMap<char, Vec<Singer>> = BTreeMap::new();

    for entry in list {
        let Some(key) = singer_initial(&entry.singer_name) else {
            continue;
        };
        if !key.is_ascii_alphabetic() {
            continue;
        }
        letters.entry(key).or_default().push(map_singer(entry));
    }

    std::iter::once(hot)
        .chain(letters.into_iter().map(|(key, list)| SingerGroup {
            title: key.to_string(),
            list,
        }))
        .collect()
}

pub fn build_top_list(groups: &[TopListGroup]) -> Vec<TopList> {
    groups
        .iter()
        .flat_map(|group| group.toplist.iter())
        .map(|item| TopList {
            id: item.top_id,
            pic: item.front_pic_url.clone(),
            name: item.title.clone(),
            period: item.period.clone(),
            song_list: item
                .song
                .iter()
                .map(|song| TopSong {
                    id: song.song_id,
                    singer_name: song.singer_name.clone(),
                    song_name: song.title.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn build_hot_keys(list: &[HotKeyEntry]) -> Vec<HotKey> {
    list.iter()
        .take(MAX_HOT_KEYS)
        .map(|key| HotKey {
            key: key.k.clone(),
            id: key.n,
        })
        .collect()
}

/// Playable URLs are the last advertised domain plus each song's path.
pub fn build_url_map(data: &VkeyData) -> HashMap<String, String> {
    let Some(domain) = data.sip.last() else {
        return HashMap::new();
    };

    data.midurlinfo
        .iter()
        .map(|info| (info.songmid.clone(), format!("{domain}{}", info.purl)))
        .collect()
}
