//! Playback list state for a single listener.
//!
//! State is never mutated in place: every transition goes through [`reduce`],
//! which returns a fresh [`PlaybackState`]. The song currently playing keeps
//! its identity across mode changes even when its index moves.

use crate::models::Song;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PlayMode {
    #[default]
    Sequence,
    Random,
}

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Serialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    pub mode: PlayMode,
    pub sequence_list: Vec<Song>,
    pub playlist: Vec<Song>,
    pub current_index: Option<usize>,
    pub playing: bool,
    pub full_screen: bool,
}

#[cfg_attr(not(test), allow(dead_code))]
impl PlaybackState {
    pub fn current_song(&self) -> Option<&Song> {
        self.current_index.and_then(|index| self.playlist.get(index))
    }
}

#[cfg_attr(not(test), allow(dead_code))]
#[derive(Debug, Clone)]
pub enum Action {
    SelectPlay { list: Vec<Song>, index: usize },
    RandomPlay(Vec<Song>),
    ChangeMode(PlayMode),
}

#[cfg_attr(not(test), allow(dead_code))]
fn shuffled<R: Rng + ?Sized>(list: &[Song], rng: &mut R) -> Vec<Song> {
    let mut list = list.to_vec();
    list.shuffle(rng);
    list
}

#[cfg_attr(not(test), allow(dead_code))]
pub fn reduce<R: Rng + ?Sized>(state: &PlaybackState, action: Action, rng: &mut R) -> PlaybackState {
    match action {
        Action::SelectPlay { list, index } => PlaybackState {
            mode: PlayMode::Sequence,
            sequence_list: list.clone(),
            playlist: list,
            current_index: Some(index),
            playing: true,
            full_screen: true,
        },
        Action::RandomPlay(list) => PlaybackState {
            mode: PlayMode::Random,
            playlist: shuffled(&list, rng),
            sequence_list: list,
            current_index: Some(0),
            playing: true,
            full_screen: true,
        },
        Action::ChangeMode(mode) => {
            let current_id = state.current_song().map(|song| song.id);

            let playlist = match mode {
                PlayMode::Random => shuffled(&state.sequence_list, rng),
                PlayMode::Sequence => state.sequence_list.clone(),
            };

            let current_index =
                current_id.and_then(|id| playlist.iter().position(|song| song.id == id));

            PlaybackState {
                mode,
                playlist,
                current_index,
                ..state.clone()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn songs(count: u64) -> Vec<Song> {
        (0..count)
            .map(|id| Song {
                id,
                mid: format!("mid{id}"),
                name: format!("song {id}"),
                singer: "singer".to_string(),
                url: String::new(),
                duration: 200,
                pic: String::new(),
                album: String::new(),
            })
            .collect()
    }

    fn sorted_ids(list: &[Song]) -> Vec<u64> {
        let mut ids: Vec<u64> = list.iter().map(|song| song.id).collect();
        ids.sort_unstable();
        ids
    }

    #[test]
    fn select_play_sets_sequence_mode() {
        let mut rng = StdRng::seed_from_u64(1);
        let list = songs(5);

        let state = reduce(
            &PlaybackState::default(),
            Action::SelectPlay {
                list: list.clone(),
                index: 3,
            },
            &mut rng,
        );

        assert_eq!(state.mode, PlayMode::Sequence);
        assert_eq!(state.playlist, list);
        assert_eq!(state.sequence_list, list);
        assert_eq!(state.current_song().map(|song| song.id), Some(3));
        assert!(state.playing && state.full_screen);
    }

    #[test]
    fn random_play_is_a_permutation_starting_at_zero() {
        let mut rng = StdRng::seed_from_u64(7);
        let list = songs(20);

        let state = reduce(
            &PlaybackState::default(),
            Action::RandomPlay(list.clone()),
            &mut rng,
        );

        assert_eq!(state.mode, PlayMode::Random);
        assert_eq!(state.current_index, Some(0));
        assert_eq!(sorted_ids(&state.playlist), sorted_ids(&list));
        assert_eq!(state.sequence_list, list);
    }

    #[test]
    fn changing_mode_keeps_current_song() {
        let mut rng = StdRng::seed_from_u64(42);
        let list = songs(30);

        let selected = reduce(
            &PlaybackState::default(),
            Action::SelectPlay { list, index: 17 },
            &mut rng,
        );
        let current = selected.current_song().cloned();

        let random = reduce(&selected, Action::ChangeMode(PlayMode::Random), &mut rng);
        assert_eq!(random.mode, PlayMode::Random);
        assert_eq!(random.current_song().cloned(), current);
        assert_eq!(sorted_ids(&random.playlist), sorted_ids(&selected.playlist));

        let back = reduce(&random, Action::ChangeMode(PlayMode::Sequence), &mut rng);
        assert_eq!(back.mode, PlayMode::Sequence);
        assert_eq!(back.current_song().cloned(), current);
        assert_eq!(back.current_index, Some(17));
        assert_eq!(back.playlist, back.sequence_list);
    }

    #[test]
    fn changing_mode_without_a_song_has_no_index() {
        let mut rng = StdRng::seed_from_u64(3);

        let state = reduce(
            &PlaybackState::default(),
            Action::ChangeMode(PlayMode::Random),
            &mut rng,
        );

        assert_eq!(state.current_index, None);
        assert_eq!(state.mode, PlayMode::Random);
    }

    #[test]
    fn reduce_leaves_previous_state_untouched() {
        let mut rng = StdRng::seed_from_u64(9);
        let before = reduce(
            &PlaybackState::default(),
            Action::SelectPlay {
                list: songs(4),
                index: 1,
            },
            &mut rng,
        );
        let snapshot = before.clone();

        let _ = reduce(&before, Action::ChangeMode(PlayMode::Random), &mut rng);

        assert_eq!(before, snapshot);
    }
}
