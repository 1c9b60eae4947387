use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode an uploaded file as a data URL. The result is stored into the
/// document through the ordinary field-update path like any other edit, so
/// uploaded images and PDFs become part of the document itself rather than
/// separately hosted assets.
pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    let mime = mime.trim();
    let mime = if mime.is_empty() {
        "application/octet-stream"
    } else {
        mime
    };
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}
