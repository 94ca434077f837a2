pub mod lastfm;
pub mod makeitpersonal;
