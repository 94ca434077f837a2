pub mod get_lyrics_page;
pub mod get_now_playing;
