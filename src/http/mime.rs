//! Media type detection based on file name suffixes.

/// Suffix to media type, first match wins. Matching is case-sensitive and
/// `image/jpg` / `audio/mp3` are kept as served on the wire, standard
/// registrations notwithstanding.
const MEDIA_TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".htm", "text/html"),
    (".mp4", "video/mp4"),
    (".png", "image/png"),
    (".jpeg", "image/jpg"),
    (".jpg", "image/jpg"),
    (".mp3", "audio/mp3"),
    (".txt", "text/plain"),
];

/// Looks up the `Content-Type` value for a file name.
///
/// Returns `None` for suffixes outside the table; the response header then
/// simply carries no `Content-Type` line.
pub fn content_type_for(filename: &str) -> Option<&'static str> {
    MEDIA_TYPES
        .iter()
        .find(|(suffix, _)| filename.ends_with(suffix))
        .map(|&(_, media_type)| media_type)
}
