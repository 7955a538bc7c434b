pub mod hundredone;
