pub mod qq;
