use super::{
    IdQueryString, MidQueryString, SearchQueryString, TopDetailQueryString, collect_mids,
};
use crate::VENDOR;
use crate::models::{
    HotKeysResult, LyricResult, RecommendResult, Reply, SearchResult, SingerListResult,
    SongsResult, SongsUrlResult, TopListResult,
};
use crate::util::errors::EndpointError;
use axum::extract::Query;

pub async fn get_recommend() -> Result<Reply<RecommendResult>, EndpointError> {
    Ok(VENDOR.get_recommend().await?)
}

pub async fn get_singer_list() -> Result<Reply<SingerListResult>, EndpointError> {
    Ok(VENDOR.get_singer_list().await?)
}

#[tracing::instrument]
pub async fn get_singer_detail(
    query: Query<MidQueryString>,
) -> Result<Reply<SongsResult>, EndpointError> {
    Ok(VENDOR.get_singer_detail(&query.mid).await?)
}

pub async fn get_songs_url(
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Reply<SongsUrlResult>, EndpointError> {
    let mids = collect_mids(&pairs);
    Ok(VENDOR.get_songs_url(&mids).await?)
}

#[tracing::instrument]
pub async fn get_lyric(query: Query<MidQueryString>) -> Result<Reply<LyricResult>, EndpointError> {
    Ok(VENDOR.get_lyric(&query.mid).await?)
}

#[tracing::instrument]
pub async fn get_album(query: Query<IdQueryString>) -> Result<Reply<SongsResult>, EndpointError> {
    Ok(VENDOR.get_album(&query.id).await?)
}

pub async fn get_top_list() -> Result<Reply<TopListResult>, EndpointError> {
    Ok(VENDOR.get_top_list().await?)
}

#[tracing::instrument]
pub async fn get_top_detail(
    query: Query<TopDetailQueryString>,
) -> Result<Reply<SongsResult>, EndpointError> {
    Ok(VENDOR.get_top_detail(&query.id, &query.period).await?)
}

pub async fn get_hot_keys() -> Result<Reply<HotKeysResult>, EndpointError> {
    Ok(VENDOR.get_hot_keys().await?)
}

#[tracing::instrument]
pub async fn search(query: Query<SearchQueryString>) -> Result<Reply<SearchResult>, EndpointError> {
    let show_singer = query.show_singer == "true";
    Ok(VENDOR
        .search(&query.query, &query.page, show_singer)
        .await?)
}
