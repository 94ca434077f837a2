use crate::entities::now_playing::Lookup;

pub fn render_plain(lookup: &Lookup) -> String {
  format!("{}\n\n{}\n", lookup.now_playing, lookup.lyrics)
}

pub fn render_pre(lookup: &Lookup) -> String {
  format!("<pre>\n{}</pre>", html_escape::encode_text(&render_plain(lookup)))
}
