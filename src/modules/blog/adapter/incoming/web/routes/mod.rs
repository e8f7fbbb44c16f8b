mod blog_posts;

pub use blog_posts::{delete_blog_post_handler, list_blog_posts_handler, upsert_blog_post_handler};
