/// Path prefix served by the image handler.
pub const IMAGE_ENDPOINT: &str = "/image";

/// Width and height requested for card thumbnails.
pub const THUMBNAIL_SIZE: u32 = 240;

/// Prefix carried by signed-cookie names in storage, dropped on the wire.
pub const TOKEN_PREFIX: &str = "CloudFront-";

/// Store key holding the JSON list of `{ name, value }` tokens.
pub const TOKENS_KEY: &str = "cookies";

/// Store key holding the JSON list of object keys shown by the gallery.
pub const IMAGE_KEYS_KEY: &str = "image_keys";
