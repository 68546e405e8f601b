pub mod refresh;
pub mod channels;
pub mod songs;
pub mod show;
pub mod stream;
pub mod art;
pub mod download;
pub mod export;
