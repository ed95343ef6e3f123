pub mod roe;
