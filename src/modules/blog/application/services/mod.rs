mod blog_posts_service;

pub use blog_posts_service::BlogPostsService;
