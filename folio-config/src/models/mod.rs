pub mod carousel;
