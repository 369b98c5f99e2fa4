pub mod text_norm;
