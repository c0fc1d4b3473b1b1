pub mod pixmap;
