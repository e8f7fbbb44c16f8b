mod upload_media;

pub use upload_media::upload_media_handler;
