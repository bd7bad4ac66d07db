pub mod meme_image;
