pub mod mesh1d;
