pub mod books;
pub mod download_links;
pub mod health;
