//! MIME Type Detection Utilities
//!
//! Used to label the `media` part of multipart uploads. Magic-number
//! detection (via the `infer` crate) wins; the file extension is the fallback.

/// Guess MIME by inspecting bytes (magic numbers)
pub fn guess_mime_from_bytes(bytes: &[u8]) -> Option<String> {
    infer::get(bytes).map(|k| k.mime_type().to_string())
}

/// Guess MIME by file extension, for the media formats the APIs accept.
pub fn guess_mime_from_path(path: &str) -> Option<String> {
    let (_, extension) = path.rsplit_once('.')?;

    let mime = match extension.to_lowercase().as_str() {
        // Audio
        "mp3" => "audio/mpeg",
        "wav" => "audio/wav",
        "ogg" | "opus" => "audio/ogg",
        "m4a" => "audio/mp4",
        "flac" => "audio/flac",
        "aac" => "audio/aac",
        "amr" => "audio/amr",
        "wma" => "audio/x-ms-wma",

        // Video
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "avi" => "video/x-msvideo",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",

        // Text
        "txt" => "text/plain",
        "json" => "application/json",

        _ => return None,
    };

    Some(mime.to_string())
}

/// Combined guess: prefer bytes, fall back to extension, otherwise octet-stream
pub fn guess_mime(bytes: &[u8], path: &str) -> String {
    guess_mime_from_bytes(bytes)
        .or_else(|| guess_mime_from_path(path))
        .unwrap_or_else(|| "application/octet-stream".to_string())
}
